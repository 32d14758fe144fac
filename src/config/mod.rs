pub mod settings;

pub use settings::{AuthConfig, LoggingConfig, PricingConfig, ServerConfig, Settings};
