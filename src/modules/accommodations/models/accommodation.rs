use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Money, Result};
use crate::modules::accommodations::models::Room;
use crate::modules::discounts::models::FestivalDiscount;

/// Property owner listing accommodations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub id: i64,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amenity {
    pub id: i64,
    pub name: String,
}

/// A listed accommodation with its rooms and optional festival discount
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Accommodation {
    pub id: i64,
    pub title: String,
    pub city: String,
    /// Monthly rent before any discount
    pub price_per_month: Money,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub owner: Option<Owner>,
    #[serde(default)]
    pub amenities: Vec<Amenity>,
    #[serde(default)]
    pub rooms: Vec<Room>,
    #[serde(default)]
    pub festival_discount: Option<FestivalDiscount>,
}

impl Accommodation {
    /// Create a new accommodation with validation
    ///
    /// # Arguments
    /// * `title` - Listing title, non-empty (max 200 chars)
    /// * `city` - Non-empty (max 100 chars)
    /// * `price_per_month` - Must be non-negative
    pub fn new(
        id: i64,
        title: impl Into<String>,
        city: impl Into<String>,
        price_per_month: Decimal,
    ) -> Result<Self> {
        let accommodation = Self {
            id,
            title: title.into(),
            city: city.into(),
            price_per_month,
            address: String::new(),
            description: String::new(),
            owner: None,
            amenities: Vec::new(),
            rooms: Vec::new(),
            festival_discount: None,
        };

        accommodation.validate()?;
        Ok(accommodation)
    }

    pub fn with_rooms(mut self, rooms: Vec<Room>) -> Self {
        self.rooms = rooms;
        self
    }

    pub fn with_discount(mut self, discount: FestivalDiscount) -> Self {
        self.festival_discount = Some(discount);
        self
    }

    /// Re-check listing fields, e.g. after loading from a catalog file
    pub fn validate(&self) -> Result<()> {
        Self::validate_text("title", &self.title, 200)?;
        Self::validate_text("city", &self.city, 100)?;

        if self.price_per_month < Decimal::ZERO {
            return Err(AppError::invalid_price(format!(
                "price per month must be non-negative, got {}",
                self.price_per_month
            )));
        }

        Ok(())
    }

    pub fn has_available_rooms(&self) -> bool {
        self.rooms.iter().any(Room::is_available)
    }

    pub fn first_available_room(&self) -> Option<&Room> {
        self.rooms.iter().find(|room| room.is_available())
    }

    pub fn room_mut(&mut self, room_id: i64) -> Option<&mut Room> {
        self.rooms.iter_mut().find(|room| room.id == room_id)
    }

    fn validate_text(field: &str, value: &str, max_len: usize) -> Result<()> {
        if value.trim().is_empty() {
            return Err(AppError::validation(format!(
                "Accommodation {} cannot be empty",
                field
            )));
        }

        if value.chars().count() > max_len {
            return Err(AppError::validation(format!(
                "Accommodation {} cannot exceed {} characters",
                field, max_len
            )));
        }

        Ok(())
    }
}

impl std::fmt::Display for Accommodation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title)
    }
}
