pub mod chat_request;
pub mod handlers;
pub mod pipeline;
pub(crate) mod request_logging;
pub mod storage_traits;
pub(crate) mod util;

use crate::auth::{CredentialStore, StaticKeyList};
use crate::config::Settings;
use crate::error::Result as AppResult;
use crate::logging::DatabaseLogger;
use crate::providers::{ModelInvoker, StubProvider};
use crate::routing::ModelRouter;
use crate::server::storage_traits::RequestLogStore;
use axum::Router;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Settings,
    pub router: ModelRouter,
    pub log_store: Arc<dyn RequestLogStore + Send + Sync>,
    pub credentials: Arc<dyn CredentialStore + Send + Sync>,
    pub invoker: Arc<dyn ModelInvoker + Send + Sync>,
}

impl AppState {
    /// 依赖全部由调用方显式传入，便于测试替换
    pub fn new(
        config: Settings,
        log_store: Arc<dyn RequestLogStore + Send + Sync>,
        credentials: Arc<dyn CredentialStore + Send + Sync>,
        invoker: Arc<dyn ModelInvoker + Send + Sync>,
    ) -> AppResult<Self> {
        let router = ModelRouter::from_config(&config.pricing)?;
        Ok(Self {
            config,
            router,
            log_store,
            credentials,
            invoker,
        })
    }
}

pub async fn create_app(config: Settings) -> AppResult<Router> {
    let db_logger = Arc::new(DatabaseLogger::new(&config.logging.database_path).await?);
    let credentials = Arc::new(StaticKeyList::from_config(&config.auth));
    tracing::info!("Loaded {} API key(s) into the allow-list", credentials.len());
    if !config.auth.protect_logs {
        tracing::warn!("GET /logs is unauthenticated and exposes stored API keys");
    }

    let app_state = AppState::new(config, db_logger, credentials, Arc::new(StubProvider))?;
    Ok(build_app(Arc::new(app_state)))
}

pub fn build_app(app_state: Arc<AppState>) -> Router {
    let mut app = handlers::routes().with_state(app_state);

    use axum::http::{Method, header};
    use tower_http::cors::{Any, CorsLayer};
    use tower_http::trace::TraceLayer;
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_origin(Any);
    app = app.layer(cors).layer(TraceLayer::new_for_http());

    app
}
