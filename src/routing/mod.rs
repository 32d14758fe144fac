pub mod estimator;
pub mod pricing;
pub mod selector;

pub use estimator::{CostEstimate, count_tokens, estimate_cost};
pub use pricing::PricingTable;
pub use selector::SelectionPolicy;

use crate::config::PricingConfig;
use crate::error::Result;

/// Pricing table plus the tier selection policy, built once at startup.
#[derive(Debug, Clone, Default)]
pub struct ModelRouter {
    pricing: PricingTable,
    policy: SelectionPolicy,
}

impl ModelRouter {
    pub fn from_config(cfg: &PricingConfig) -> Result<Self> {
        Ok(Self {
            pricing: PricingTable::from_config(cfg)?,
            policy: SelectionPolicy::from_config(cfg),
        })
    }

    pub fn pricing(&self) -> &PricingTable {
        &self.pricing
    }

    pub fn select(&self, prompt: &str, mode: &str) -> &str {
        self.policy.select_model(&self.pricing, prompt, mode)
    }

    pub fn estimate(&self, model: &str, prompt: &str) -> Result<CostEstimate> {
        estimate_cost(&self.pricing, model, prompt)
    }
}
