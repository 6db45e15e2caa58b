use crate::core::{AppError, Result};
use serde::Deserialize;
use std::env;

pub mod logging;
pub mod pricing;

pub use logging::{init_tracing, LogFormat};
pub use pricing::PricingConfig;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub pricing: PricingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
                log_format: env::var("LOG_FORMAT")
                    .unwrap_or_else(|_| "pretty".to_string())
                    .parse()?,
            },
            pricing: PricingConfig::from_env()?,
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

        if !LEVELS.contains(&self.app.log_level.to_lowercase().as_str()) {
            return Err(AppError::Configuration(format!(
                "LOG_LEVEL must be one of {}, got {}",
                LEVELS.join(", "),
                self.app.log_level
            )));
        }

        // surfaces an out-of-range offset before any pricing happens
        self.pricing.clock()?;

        Ok(())
    }
}
