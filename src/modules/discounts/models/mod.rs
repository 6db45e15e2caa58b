mod discount_definition;
mod festival_discount;
mod price_quote;

pub use discount_definition::{parse_percentage, DiscountDefinition, MAX_PERCENTAGE};
pub use festival_discount::FestivalDiscount;
pub use price_quote::PriceQuote;
