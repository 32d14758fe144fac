use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::server::AppState;

mod auth;
mod chat;
mod index;
mod logs;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(index::root))
        .route("/chat/demo", get(chat::chat_demo))
        .route("/chat", post(chat::chat))
        .route("/logs", get(logs::list_logs))
}
