use chrono::{DateTime, FixedOffset, NaiveDate, Offset, Utc};

use crate::core::{AppError, Result};

/// Supplies "today" for discount evaluation.
///
/// Discounts are judged against the business-local calendar date at
/// calculation time. All timestamps stay UTC internally; only the date
/// handed to the calculator is shifted into the business offset.
#[derive(Debug, Clone, Copy)]
pub struct BusinessClock {
    offset: FixedOffset,
}

impl BusinessClock {
    /// Clock for a whole-hour UTC offset (-12..=14)
    pub fn from_offset_hours(hours: i32) -> Result<Self> {
        if !(-12..=14).contains(&hours) {
            return Err(AppError::Configuration(format!(
                "UTC offset must be between -12 and 14 hours, got {}",
                hours
            )));
        }

        let offset = FixedOffset::east_opt(hours * 3600)
            .ok_or_else(|| AppError::Configuration(format!("Invalid UTC offset: {}", hours)))?;

        Ok(Self { offset })
    }

    pub fn utc() -> Self {
        Self {
            offset: Utc.fix(),
        }
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Business-local date for a UTC instant
    pub fn date_at(&self, utc_time: DateTime<Utc>) -> NaiveDate {
        utc_time.with_timezone(&self.offset).date_naive()
    }

    /// Business-local date right now
    pub fn today(&self) -> NaiveDate {
        self.date_at(Utc::now())
    }
}

impl Default for BusinessClock {
    fn default() -> Self {
        Self::utc()
    }
}
