use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::info;

use crate::core::money::{self, Money};
use crate::core::Result;
use crate::modules::accommodations::models::{Accommodation, AccommodationSummary, RoomListing};
use crate::modules::discounts::models::PriceQuote;
use crate::modules::discounts::services::DiscountCalculator;

/// Prices accommodations by running their linked festival discount
/// through the calculator for a given day
#[derive(Debug, Clone, Copy, Default)]
pub struct PricingService {
    calculator: DiscountCalculator,
}

impl PricingService {
    pub fn new(calculator: DiscountCalculator) -> Self {
        Self { calculator }
    }

    /// Monthly price and discount breakdown for `today`.
    ///
    /// Without a linked discount the price passes through rounded and the
    /// discount is `0.00`.
    pub fn quote(&self, accommodation: &Accommodation, today: NaiveDate) -> Result<PriceQuote> {
        match &accommodation.festival_discount {
            Some(record) => {
                let definition = record.to_definition()?;
                self.calculator
                    .quote(&definition, accommodation.price_per_month, today)
            }
            None => {
                money::validate_price(accommodation.price_per_month)?;
                Ok(PriceQuote {
                    original_price: money::round_money(accommodation.price_per_month),
                    discount_amount: money::zero(),
                    final_price: money::round_money(accommodation.price_per_month),
                    applied_percentage: Decimal::ZERO,
                })
            }
        }
    }

    pub fn final_price(&self, accommodation: &Accommodation, today: NaiveDate) -> Result<Money> {
        Ok(self.quote(accommodation, today)?.final_price)
    }

    pub fn discount_amount(&self, accommodation: &Accommodation, today: NaiveDate) -> Result<Money> {
        Ok(self.quote(accommodation, today)?.discount_amount)
    }

    /// One priced row per room across all accommodations, in catalog order
    pub fn room_listings(
        &self,
        accommodations: &[Accommodation],
        today: NaiveDate,
    ) -> Result<Vec<RoomListing>> {
        let mut listings = Vec::new();

        for accommodation in accommodations {
            let quote = self.quote(accommodation, today)?;
            let festival_name = accommodation
                .festival_discount
                .as_ref()
                .map(|record| record.name.clone());

            for room in &accommodation.rooms {
                listings.push(RoomListing {
                    accommodation_id: accommodation.id,
                    accommodation_title: accommodation.title.clone(),
                    room_id: room.id,
                    room_number: room.room_number.clone(),
                    status: room.status,
                    original_price: quote.original_price,
                    final_price: quote.final_price,
                    discount_percent: quote.applied_percentage,
                    festival_name: festival_name.clone(),
                });
            }
        }

        info!(
            accommodations = accommodations.len(),
            rooms = listings.len(),
            %today,
            "Built room listings"
        );

        Ok(listings)
    }

    /// Detail view pricing; the festival name only shows while it is active
    pub fn accommodation_summary(
        &self,
        accommodation: &Accommodation,
        today: NaiveDate,
    ) -> Result<AccommodationSummary> {
        let quote = self.quote(accommodation, today)?;

        let festival_name = match &accommodation.festival_discount {
            Some(record) if self.calculator.is_active(&record.to_definition()?, today) => {
                Some(record.name.clone())
            }
            _ => None,
        };

        Ok(AccommodationSummary {
            accommodation_id: accommodation.id,
            title: accommodation.title.clone(),
            city: accommodation.city.clone(),
            original_price: quote.original_price,
            discount_amount: quote.discount_amount,
            final_price: quote.final_price,
            discount_percent: quote.applied_percentage,
            festival_name,
            room_count: accommodation.rooms.len(),
            has_available_rooms: accommodation.has_available_rooms(),
        })
    }
}
