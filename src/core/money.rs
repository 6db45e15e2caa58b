use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

use crate::core::{AppError, Result};

/// Monetary amount. Always fixed-point, never binary floating point.
pub type Money = Decimal;

/// Fractional digits kept on every computed amount
pub const MONEY_SCALE: u32 = 2;

/// Display symbol used on confirmations
pub const CURRENCY_SYMBOL: &str = "€";

/// Rounds to two fractional digits, half-up.
///
/// The result always carries scale 2, so `100` becomes `100.00` and
/// `0.005` becomes `0.01`.
pub fn round_money(amount: Decimal) -> Money {
    let mut rounded =
        amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(MONEY_SCALE);
    rounded
}

/// The zero amount at money scale (`0.00`)
pub fn zero() -> Money {
    Decimal::new(0, MONEY_SCALE)
}

/// `amount * percentage / 100`, unrounded
pub fn percent_of(amount: Decimal, percentage: Decimal) -> Decimal {
    (percentage / Decimal::ONE_HUNDRED) * amount
}

/// Rejects negative prices
pub fn validate_price(price: Decimal) -> Result<()> {
    if price < Decimal::ZERO {
        return Err(AppError::invalid_price(format!(
            "price must be non-negative, got {}",
            price
        )));
    }

    Ok(())
}

/// Parses a textual price such as `"450.00"`
pub fn parse_price(input: &str) -> Result<Money> {
    let trimmed = input.trim();
    let price = Decimal::from_str(trimmed)
        .map_err(|_| AppError::invalid_price(format!("'{}' is not a decimal number", input)))?;

    validate_price(price)?;
    Ok(price)
}

/// Converts a float price through its shortest decimal representation,
/// so `0.1` becomes exactly `0.1` rather than its binary expansion.
pub fn price_from_f64(value: f64) -> Result<Money> {
    if !value.is_finite() {
        return Err(AppError::invalid_price(format!(
            "price must be a finite number, got {}",
            value
        )));
    }

    parse_price(&value.to_string())
}

/// Formats an amount for display, e.g. `€450.00`
pub fn format_amount(amount: Decimal) -> String {
    format!("{}{}", CURRENCY_SYMBOL, round_money(amount))
}
