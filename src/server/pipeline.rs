use crate::error::Result;
use crate::server::AppState;
use crate::server::chat_request::ChatResponse;

pub const DEMO_PROMPT: &str = "Hello world this is a test";
pub const DEMO_MODE: &str = "cheap";

// 选择模型 -> 估算成本 -> 调用模型；不做持久化
pub fn run_chat(app_state: &AppState, prompt: &str, mode: &str) -> Result<ChatResponse> {
    let model = app_state.router.select(prompt, mode);
    let estimate = app_state.router.estimate(model, prompt)?;
    let response = app_state.invoker.invoke(model, prompt);

    Ok(ChatResponse {
        response,
        model_used: model.to_string(),
        tokens: estimate.tokens,
        estimated_cost: estimate.cost,
        estimated_savings: estimate.savings,
    })
}
