use std::collections::HashMap;

use crate::config::PricingConfig;
use crate::error::{GatewayError, Result};

/// Read-only per-1000-token rates for the two routing tiers.
///
/// Construction fails unless both tier identifiers have a rate, so any model id
/// handed out by [`PricingTable::cheap_model`] / [`PricingTable::expensive_model`]
/// always resolves through [`PricingTable::rate`].
#[derive(Debug, Clone)]
pub struct PricingTable {
    rates: HashMap<String, f64>,
    cheap_model: String,
    expensive_model: String,
}

impl PricingTable {
    pub fn from_config(cfg: &PricingConfig) -> Result<Self> {
        let rates: HashMap<String, f64> = cfg
            .rates
            .iter()
            .map(|(model, rate)| (model.clone(), *rate))
            .collect();

        for model in [&cfg.cheap_model, &cfg.expensive_model] {
            if !rates.contains_key(model) {
                return Err(GatewayError::Config(format!(
                    "no rate configured for model '{}'",
                    model
                )));
            }
        }

        Ok(Self {
            rates,
            cheap_model: cfg.cheap_model.clone(),
            expensive_model: cfg.expensive_model.clone(),
        })
    }

    pub fn rate(&self, model: &str) -> Option<f64> {
        self.rates.get(model).copied()
    }

    pub fn contains(&self, model: &str) -> bool {
        self.rates.contains_key(model)
    }

    pub fn cheap_model(&self) -> &str {
        &self.cheap_model
    }

    pub fn expensive_model(&self) -> &str {
        &self.expensive_model
    }

    pub fn expensive_rate(&self) -> f64 {
        // from_config 已保证存在
        self.rate(&self.expensive_model).unwrap_or_default()
    }
}

impl Default for PricingTable {
    fn default() -> Self {
        let cfg = PricingConfig::default();
        Self {
            rates: cfg.rates.into_iter().collect(),
            cheap_model: cfg.cheap_model,
            expensive_model: cfg.expensive_model,
        }
    }
}
