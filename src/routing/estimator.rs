use serde::Serialize;

use crate::error::{GatewayError, Result};
use crate::routing::pricing::PricingTable;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostEstimate {
    pub tokens: u64,
    pub cost: f64,
    /// What the expensive tier would have charged minus `cost`.
    pub savings: f64,
}

/// Tokens are whitespace-delimited words, not model tokens.
pub fn count_tokens(prompt: &str) -> u64 {
    prompt.split_whitespace().count() as u64
}

pub fn estimate_cost(table: &PricingTable, model: &str, prompt: &str) -> Result<CostEstimate> {
    let rate = table
        .rate(model)
        .ok_or_else(|| GatewayError::UnknownModel(model.to_string()))?;

    let tokens = count_tokens(prompt);
    let thousands = tokens as f64 / 1000.0;
    let cost = thousands * rate;
    let cost_if_expensive = thousands * table.expensive_rate();

    Ok(CostEstimate {
        tokens,
        cost,
        savings: cost_if_expensive - cost,
    })
}
