use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::Result;
use crate::modules::discounts::models::DiscountDefinition;

/// Stored festival discount record, as an owner configures it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FestivalDiscount {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    /// Discount percentage (e.g. 10.00 for 10%)
    pub percentage: Decimal,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl FestivalDiscount {
    pub fn new(
        name: impl Into<String>,
        percentage: Decimal,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            percentage,
            start_date,
            end_date,
            active: true,
        }
    }

    /// Snapshot this record into a validated definition for one calculation
    pub fn to_definition(&self) -> Result<DiscountDefinition> {
        DiscountDefinition::new(
            self.name.clone(),
            self.percentage,
            self.start_date,
            self.end_date,
            self.active,
        )
    }
}

impl std::fmt::Display for FestivalDiscount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}%)", self.name, self.percentage)
    }
}
