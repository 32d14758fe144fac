use axum::{Json, extract::State, http::HeaderMap};
use std::sync::Arc;

use super::auth::require_api_key;
use crate::error::GatewayError;
use crate::logging::RequestLog;
use crate::server::AppState;

// 默认不鉴权；`auth.protect_logs = true` 时与 /chat 使用同一套校验
pub async fn list_logs(
    State(app_state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Vec<RequestLog>>, GatewayError> {
    if app_state.config.auth.protect_logs {
        require_api_key(&headers, &app_state).await?;
    }

    let logs = app_state.log_store.list_all().await?;
    Ok(Json(logs))
}
