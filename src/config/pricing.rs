use crate::core::{AppError, BusinessClock, Result};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

/// Pricing configuration: the business timezone and where the catalog lives
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PricingConfig {
    /// Whole-hour UTC offset used to decide "today"
    pub utc_offset_hours: i32,
    pub catalog_path: Option<PathBuf>,
}

impl PricingConfig {
    pub fn from_env() -> Result<Self> {
        Ok(PricingConfig {
            utc_offset_hours: env::var("PRICING_UTC_OFFSET_HOURS")
                .unwrap_or_else(|_| "0".to_string())
                .trim()
                .parse()
                .map_err(|_| {
                    AppError::Configuration("Invalid PRICING_UTC_OFFSET_HOURS".to_string())
                })?,
            catalog_path: env::var("CATALOG_PATH")
                .ok()
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
        })
    }

    /// Clock for the configured offset
    pub fn clock(&self) -> Result<BusinessClock> {
        BusinessClock::from_offset_hours(self.utc_offset_hours)
    }
}
