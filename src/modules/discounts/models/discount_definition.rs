// Immutable festival discount value consumed by the calculator.
//
// Built fresh for every price calculation from a stored FestivalDiscount
// record and dropped afterwards. Construction is the only place the
// percentage and validity window are checked.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::str::FromStr;

use crate::core::{AppError, Result};

/// Highest accepted discount percentage
pub const MAX_PERCENTAGE: Decimal = Decimal::ONE_HUNDRED;

/// A named, time-boxed percentage reduction with an on/off toggle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscountDefinition {
    name: String,
    /// Percent units: `10.00` means 10%
    percentage: Decimal,
    /// First day the discount applies (inclusive)
    start_date: NaiveDate,
    /// Last day the discount applies (inclusive)
    end_date: NaiveDate,
    active: bool,
}

impl DiscountDefinition {
    /// Create a validated definition
    ///
    /// # Arguments
    /// * `name` - Display label only
    /// * `percentage` - 0 to 100 inclusive
    /// * `start_date` / `end_date` - Inclusive window, start must not be after end
    /// * `active` - Manual override; false disables the discount on every date
    pub fn new(
        name: impl Into<String>,
        percentage: Decimal,
        start_date: NaiveDate,
        end_date: NaiveDate,
        active: bool,
    ) -> Result<Self> {
        Self::validate_percentage(percentage)?;
        Self::validate_window(start_date, end_date)?;

        Ok(Self {
            name: name.into(),
            percentage,
            start_date,
            end_date,
            active,
        })
    }

    /// Same as [`DiscountDefinition::new`] with a textual percentage such as `"12.50"`
    pub fn parse(
        name: impl Into<String>,
        percentage: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
        active: bool,
    ) -> Result<Self> {
        let percentage = parse_percentage(percentage)?;
        Self::new(name, percentage, start_date, end_date, active)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn percentage(&self) -> Decimal {
        self.percentage
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn active(&self) -> bool {
        self.active
    }

    /// Whether `date` falls inside the inclusive window, ignoring the toggle
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    fn validate_percentage(percentage: Decimal) -> Result<()> {
        if percentage < Decimal::ZERO {
            return Err(AppError::invalid_percentage(format!(
                "percentage cannot be negative, got {}",
                percentage
            )));
        }

        if percentage > MAX_PERCENTAGE {
            return Err(AppError::invalid_percentage(format!(
                "percentage cannot exceed {}, got {}",
                MAX_PERCENTAGE, percentage
            )));
        }

        Ok(())
    }

    fn validate_window(start_date: NaiveDate, end_date: NaiveDate) -> Result<()> {
        if start_date > end_date {
            return Err(AppError::invalid_date_range(format!(
                "start date {} is after end date {}",
                start_date, end_date
            )));
        }

        Ok(())
    }
}

/// Parses a percentage in percent units; no float detour
pub fn parse_percentage(input: &str) -> Result<Decimal> {
    Decimal::from_str(input.trim()).map_err(|_| {
        AppError::invalid_percentage(format!("'{}' is not a decimal number", input))
    })
}
