use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::money::{self, Money};
use crate::modules::accommodations::models::{Accommodation, Room};
use crate::modules::bookings::models::Student;
use crate::modules::discounts::models::PriceQuote;

/// A confirmed room booking with the prices frozen at booking time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub student_id: i64,
    pub accommodation_id: i64,
    pub room_id: i64,
    pub room_number: String,
    pub date_booked: DateTime<Utc>,
    /// Monthly price before discount
    pub original_price: Money,
    pub discount_applied: Money,
    pub final_price: Money,
}

impl Booking {
    /// Snapshot a quote onto a new booking for `room`
    pub fn new(
        student: &Student,
        accommodation: &Accommodation,
        room: &Room,
        quote: &PriceQuote,
        date_booked: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            student_id: student.id,
            accommodation_id: accommodation.id,
            room_id: room.id,
            room_number: room.room_number.clone(),
            date_booked,
            original_price: quote.original_price,
            discount_applied: quote.discount_amount,
            final_price: quote.final_price,
        }
    }
}

/// Payload handed to the notification layer after a booking decision.
///
/// Money fields serialize as decimal strings, never floats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingMessage {
    pub booking_id: Uuid,
    pub student: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub student_email: Option<String>,
    pub room_number: String,
    pub accommodation: String,
    pub date_booked: DateTime<Utc>,
    pub original_price: Money,
    pub discount_applied: Money,
    pub final_price: Money,
}

impl BookingMessage {
    pub fn new(booking: &Booking, student: &Student, accommodation: &Accommodation) -> Self {
        Self {
            booking_id: booking.id,
            student: student.username.clone(),
            student_email: student.email.clone(),
            room_number: booking.room_number.clone(),
            accommodation: accommodation.title.clone(),
            date_booked: booking.date_booked,
            original_price: booking.original_price,
            discount_applied: booking.discount_applied,
            final_price: booking.final_price,
        }
    }

    /// Plain-text confirmation body
    pub fn confirmation_text(&self) -> String {
        format!(
            "Hi {},\n\
             Your booking for {} is confirmed.\n\
             Room: {}\n\
             Original Price: {}\n\
             Discount Applied: {}\n\
             Final Price: {}\n",
            self.student,
            self.accommodation,
            self.room_number,
            money::format_amount(self.original_price),
            money::format_amount(self.discount_applied),
            money::format_amount(self.final_price),
        )
    }
}
