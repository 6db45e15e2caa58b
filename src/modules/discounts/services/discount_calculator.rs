use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use crate::core::money::{self, Money};
use crate::core::Result;
use crate::modules::discounts::models::{DiscountDefinition, PriceQuote};

/// Festival discount calculator.
///
/// Pure computation: every result depends only on the definition, the price
/// and the `today` passed in. Amounts come back with two fractional digits,
/// rounded half-up, and the discounted price and the discount amount are
/// rounded independently of each other.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscountCalculator;

impl DiscountCalculator {
    pub fn new() -> Self {
        Self
    }

    /// True when the toggle is on and `today` lies in `[start_date, end_date]`
    pub fn is_active(&self, definition: &DiscountDefinition, today: NaiveDate) -> bool {
        definition.active() && definition.covers(today)
    }

    /// Price after the discount, or the rounded price when it does not apply
    ///
    /// # Errors
    /// `AppError::InvalidPrice` for a negative price
    pub fn apply_discount(
        &self,
        definition: &DiscountDefinition,
        price: Decimal,
        today: NaiveDate,
    ) -> Result<Money> {
        money::validate_price(price)?;

        if self.applies(definition, today) {
            let discount_amount = money::percent_of(price, definition.percentage());
            return Ok(money::round_money(price - discount_amount));
        }

        Ok(money::round_money(price))
    }

    /// Amount the discount removes, `0.00` when it does not apply
    ///
    /// # Errors
    /// `AppError::InvalidPrice` for a negative price
    pub fn get_discount_amount(
        &self,
        definition: &DiscountDefinition,
        price: Decimal,
        today: NaiveDate,
    ) -> Result<Money> {
        money::validate_price(price)?;

        if self.applies(definition, today) {
            let discount_amount = money::percent_of(price, definition.percentage());
            return Ok(money::round_money(discount_amount));
        }

        Ok(money::zero())
    }

    /// Both figures at once, with the same rules as the single operations
    pub fn quote(
        &self,
        definition: &DiscountDefinition,
        price: Decimal,
        today: NaiveDate,
    ) -> Result<PriceQuote> {
        let final_price = self.apply_discount(definition, price, today)?;
        let discount_amount = self.get_discount_amount(definition, price, today)?;
        let applied_percentage = if self.applies(definition, today) {
            definition.percentage()
        } else {
            Decimal::ZERO
        };

        debug!(
            discount = definition.name(),
            %today,
            %price,
            %final_price,
            %discount_amount,
            "Quoted festival discount"
        );

        Ok(PriceQuote {
            original_price: money::round_money(price),
            discount_amount,
            final_price,
            applied_percentage,
        })
    }

    fn applies(&self, definition: &DiscountDefinition, today: NaiveDate) -> bool {
        self.is_active(definition, today) && definition.percentage() > Decimal::ZERO
    }
}
