use serde::{Deserialize, Serialize};

/// Body of `POST /chat`.
///
/// `mode` is free text; only the configured cheap-mode value (default `"cheap"`)
/// has meaning. A missing or `null` mode behaves like any other value.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChatRequest {
    pub prompt: String,
    #[serde(default)]
    pub mode: Option<String>,
}

impl ChatRequest {
    pub fn mode(&self) -> &str {
        self.mode.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ChatResponse {
    pub response: String,
    pub model_used: String,
    pub tokens: u64,
    pub estimated_cost: f64,
    pub estimated_savings: f64,
}
