use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::HeaderMap,
};
use std::sync::Arc;

use super::auth::require_api_key;
use crate::error::GatewayError;
use crate::server::AppState;
use crate::server::chat_request::{ChatRequest, ChatResponse};
use crate::server::pipeline::{DEMO_MODE, DEMO_PROMPT, run_chat};
use crate::server::request_logging::log_chat_request;

// 演示接口：固定 prompt，跳过鉴权与日志
pub async fn chat_demo(
    State(app_state): State<Arc<AppState>>,
) -> Result<Json<ChatResponse>, GatewayError> {
    let response = run_chat(&app_state, DEMO_PROMPT, DEMO_MODE)?;
    Ok(Json(response))
}

pub async fn chat(
    State(app_state): State<Arc<AppState>>,
    headers: HeaderMap,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, GatewayError> {
    // 先鉴权，失败时不解析请求体也不做其他工作
    let api_key = require_api_key(&headers, &app_state).await?;
    let Json(request) = payload?;

    let response = run_chat(&app_state, &request.prompt, request.mode())?;
    log_chat_request(&app_state, &api_key, &response).await?;

    Ok(Json(response))
}
