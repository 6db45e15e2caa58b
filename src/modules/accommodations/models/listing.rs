use rust_decimal::Decimal;
use serde::Serialize;

use crate::core::Money;
use crate::modules::accommodations::models::RoomStatus;

/// One row of the room list, priced for a given day
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomListing {
    pub accommodation_id: i64,
    pub accommodation_title: String,
    pub room_id: i64,
    pub room_number: String,
    pub status: RoomStatus,
    pub original_price: Money,
    pub final_price: Money,
    /// Zero when no discount is active
    pub discount_percent: Decimal,
    /// Name of the linked festival discount, whether or not it is active today
    pub festival_name: Option<String>,
}

/// Detail-page pricing for one accommodation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccommodationSummary {
    pub accommodation_id: i64,
    pub title: String,
    pub city: String,
    pub original_price: Money,
    pub discount_amount: Money,
    pub final_price: Money,
    pub discount_percent: Decimal,
    /// Only set while the discount is active
    pub festival_name: Option<String>,
    pub room_count: usize,
    pub has_available_rooms: bool,
}
