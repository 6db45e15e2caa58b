use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::Money;

/// Priced outcome of one discount evaluation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceQuote {
    /// Input price rounded to money scale
    pub original_price: Money,
    /// Amount subtracted, `0.00` when no discount applied
    pub discount_amount: Money,
    pub final_price: Money,
    /// Percentage actually applied, zero when the discount was not active
    pub applied_percentage: Decimal,
}

impl PriceQuote {
    pub fn is_discounted(&self) -> bool {
        self.applied_percentage > Decimal::ZERO
    }

    /// `original_price - (final_price + discount_amount)`.
    ///
    /// Each component is rounded on its own, so this can be one cent off
    /// zero, e.g. `-0.01` when both land on a half cent.
    pub fn rounding_drift(&self) -> Decimal {
        self.original_price - (self.final_price + self.discount_amount)
    }
}
