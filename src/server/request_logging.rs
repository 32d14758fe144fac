use crate::error::Result;
use crate::logging::{NewRequestLog, RequestLog};
use crate::server::AppState;
use crate::server::chat_request::ChatResponse;
use crate::server::util::mask_key;

// 记录一次成功的聊天请求；写入失败时向上返回，调用方不得返回成功响应
pub async fn log_chat_request(
    app_state: &AppState,
    api_key: &str,
    response: &ChatResponse,
) -> Result<RequestLog> {
    let entry = NewRequestLog {
        api_key: api_key.to_string(),
        model_used: response.model_used.clone(),
        tokens: response.tokens,
        estimated_cost: response.estimated_cost,
        estimated_savings: response.estimated_savings,
    };

    match app_state.log_store.append(entry).await {
        Ok(stored) => {
            tracing::info!(
                id = stored.id,
                api_key = %mask_key(api_key),
                model = %stored.model_used,
                tokens = stored.tokens,
                cost = stored.estimated_cost,
                savings = stored.estimated_savings,
                "Chat request logged"
            );
            Ok(stored)
        }
        Err(e) => {
            tracing::error!("Failed to log request: {}", e);
            Err(e.into())
        }
    }
}
