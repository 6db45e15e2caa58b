pub mod models;
pub mod services;

pub use models::{DiscountDefinition, FestivalDiscount, PriceQuote};
pub use services::DiscountCalculator;
