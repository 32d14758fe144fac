use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{GatewayError, Result};

pub const CONFIG_PATH_ENV: &str = "GW_CONFIG";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub auth: AuthConfig,
    pub pricing: PricingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub database_path: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            database_path: "data/requests.db".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Bearer credentials accepted by `POST /chat`.
    pub api_keys: Vec<String>,
    /// Require the same bearer check on `GET /logs`.
    pub protect_logs: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            api_keys: vec!["testkey123".to_string()],
            protect_logs: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    pub cheap_model: String,
    pub expensive_model: String,
    /// `mode` value that opts a request into the cheap tier.
    pub cheap_mode: String,
    /// Prompts at or above this many characters always go to the expensive tier.
    pub cheap_prompt_max_chars: usize,
    /// Price per 1000 tokens, keyed by model identifier.
    pub rates: BTreeMap<String, f64>,
}

impl Default for PricingConfig {
    fn default() -> Self {
        let mut rates = BTreeMap::new();
        rates.insert("cheap-model".to_string(), 0.001);
        rates.insert("expensive-model".to_string(), 0.01);
        Self {
            cheap_model: "cheap-model".to_string(),
            expensive_model: "expensive-model".to_string(),
            cheap_mode: "cheap".to_string(),
            cheap_prompt_max_chars: 200,
            rates,
        }
    }
}

impl Settings {
    pub fn load() -> Result<Self> {
        let settings = match Self::find_config_file() {
            Some(path) => {
                let content = std::fs::read_to_string(&path)?;
                tracing::info!("Loaded configuration from {}", path.display());
                Self::from_toml_str(&content)?
            }
            None => {
                tracing::info!("No configuration file found, using built-in defaults");
                Self::default()
            }
        };

        settings.validate()?;
        Ok(settings)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// 校验配置：两个档位的模型必须都在价格表中，保证选择器输出总能查到价格
    pub fn validate(&self) -> Result<()> {
        let pricing = &self.pricing;
        for model in [&pricing.cheap_model, &pricing.expensive_model] {
            if !pricing.rates.contains_key(model) {
                return Err(GatewayError::Config(format!(
                    "pricing.rates is missing an entry for '{}'",
                    model
                )));
            }
        }

        if let Some((model, rate)) = pricing
            .rates
            .iter()
            .find(|(_, rate)| !rate.is_finite() || **rate < 0.0)
        {
            return Err(GatewayError::Config(format!(
                "pricing rate for '{}' must be a non-negative number, got {}",
                model, rate
            )));
        }

        if self.auth.api_keys.iter().all(|k| k.trim().is_empty()) {
            return Err(GatewayError::Config(
                "auth.api_keys must contain at least one key".into(),
            ));
        }

        Ok(())
    }

    fn find_config_file() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
            tracing::warn!("{} points to a missing file: {}", CONFIG_PATH_ENV, path.display());
        }

        let possible_names = ["custom-config.toml", "config.toml"];
        possible_names
            .iter()
            .map(Path::new)
            .find(|p| p.exists())
            .map(Path::to_path_buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_builtin_table() {
        let settings = Settings::default();
        assert_eq!(settings.server.port, 8000);
        assert_eq!(settings.auth.api_keys, vec!["testkey123".to_string()]);
        assert!(!settings.auth.protect_logs);
        assert_eq!(settings.pricing.rates["cheap-model"], 0.001);
        assert_eq!(settings.pricing.rates["expensive-model"], 0.01);
        assert_eq!(settings.pricing.cheap_prompt_max_chars, 200);
        settings.validate().unwrap();
    }

    #[test]
    fn empty_file_falls_back_to_defaults() {
        let settings = Settings::from_toml_str("").unwrap();
        assert_eq!(settings.logging.database_path, "data/requests.db");
        assert_eq!(settings.pricing.cheap_mode, "cheap");
    }

    #[test]
    fn partial_sections_override_only_given_fields() {
        let settings = Settings::from_toml_str(
            r#"
            [server]
            port = 9090

            [auth]
            api_keys = ["k1", "k2"]
            protect_logs = true
            "#,
        )
        .unwrap();
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.server.port, 9090);
        assert_eq!(settings.auth.api_keys.len(), 2);
        assert!(settings.auth.protect_logs);
        settings.validate().unwrap();
    }

    #[test]
    fn validate_rejects_tier_missing_from_rates() {
        let settings = Settings::from_toml_str(
            r#"
            [pricing]
            expensive_model = "large-model"
            "#,
        )
        .unwrap();
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("large-model"));
    }

    #[test]
    fn validate_rejects_negative_rate() {
        let mut settings = Settings::default();
        settings.pricing.rates.insert("cheap-model".into(), -1.0);
        assert!(matches!(settings.validate(), Err(GatewayError::Config(_))));
    }

    #[test]
    fn validate_rejects_empty_allow_list() {
        let mut settings = Settings::default();
        settings.auth.api_keys.clear();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = Settings::from_toml_str("[server\nport = ").unwrap_err();
        assert!(matches!(err, GatewayError::ConfigParse(_)));
    }
}
