use axum::http::HeaderMap;

use crate::error::GatewayError;
use crate::server::AppState;
use crate::server::util::bearer_token;

// 校验 `Authorization: Bearer <key>`，key 必须在允许列表中；返回 key 原文
pub async fn require_api_key(
    headers: &HeaderMap,
    app_state: &AppState,
) -> Result<String, GatewayError> {
    let Some(api_key) = bearer_token(headers) else {
        tracing::warn!("Rejected request: missing or malformed bearer token");
        return Err(GatewayError::Unauthorized);
    };
    if !app_state.credentials.contains(&api_key).await {
        tracing::warn!("Rejected request: unknown API key");
        return Err(GatewayError::Unauthorized);
    }
    Ok(api_key)
}
