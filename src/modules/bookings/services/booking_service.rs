use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use tracing::{info, warn};

use crate::core::{AppError, Result};
use crate::modules::accommodations::models::{Accommodation, RoomStatus};
use crate::modules::accommodations::services::PricingService;
use crate::modules::bookings::models::{Booking, BookingMessage, Student};
use crate::modules::bookings::services::BookingNotifier;

/// Instant booking: price the accommodation, take the first free room,
/// then tell the notifier.
///
/// Persistence is the caller's concern; this works on the in-memory
/// accommodation it is handed.
#[derive(Clone)]
pub struct BookingService {
    pricing: PricingService,
    notifier: Arc<dyn BookingNotifier>,
}

impl BookingService {
    pub fn new(pricing: PricingService, notifier: Arc<dyn BookingNotifier>) -> Self {
        Self { pricing, notifier }
    }

    /// Book the first available room of `accommodation` for `student`.
    ///
    /// Prices are evaluated against `today` and frozen onto the booking.
    /// A failing notifier is logged and does not undo the booking.
    ///
    /// # Errors
    /// * `AppError::RoomUnavailable` when every room is booked
    /// * pricing errors from a malformed discount record or price
    pub async fn book_room(
        &self,
        accommodation: &mut Accommodation,
        student: &Student,
        booked_at: DateTime<Utc>,
        today: NaiveDate,
    ) -> Result<Booking> {
        let quote = self.pricing.quote(accommodation, today)?;

        let room_id = accommodation
            .first_available_room()
            .map(|room| room.id)
            .ok_or_else(|| {
                AppError::RoomUnavailable(format!(
                    "No available rooms for accommodation {}",
                    accommodation.id
                ))
            })?;

        let room = accommodation
            .room_mut(room_id)
            .ok_or_else(|| AppError::internal(format!("Room {} vanished", room_id)))?;
        room.status = RoomStatus::Booked;
        let room = room.clone();

        let booking = Booking::new(student, accommodation, &room, &quote, booked_at);

        info!(
            booking_id = %booking.id,
            student = %student.username,
            accommodation_id = accommodation.id,
            room_number = %booking.room_number,
            original_price = %booking.original_price,
            discount_applied = %booking.discount_applied,
            final_price = %booking.final_price,
            "Room booked"
        );

        let message = BookingMessage::new(&booking, student, accommodation);
        if let Err(e) = self.notifier.booking_confirmed(&message).await {
            warn!(
                booking_id = %booking.id,
                notifier = self.notifier.name(),
                error = %e,
                "Booking confirmation notification failed"
            );
        }

        Ok(booking)
    }

    /// Release the room held by `booking`.
    ///
    /// # Errors
    /// * `AppError::NotFound` when the booking is not the student's or
    ///   its room is not part of `accommodation`
    /// * `AppError::Validation` when the room is not currently booked
    pub async fn cancel_booking(
        &self,
        accommodation: &mut Accommodation,
        booking: &Booking,
        student: &Student,
    ) -> Result<()> {
        if booking.student_id != student.id {
            return Err(AppError::not_found(format!(
                "Booking {} for student {}",
                booking.id, student.username
            )));
        }

        if booking.accommodation_id != accommodation.id {
            return Err(AppError::not_found(format!(
                "Booking {} in accommodation {}",
                booking.id, accommodation.id
            )));
        }

        let room = accommodation.room_mut(booking.room_id).ok_or_else(|| {
            AppError::not_found(format!(
                "Room {} in accommodation {}",
                booking.room_id, booking.accommodation_id
            ))
        })?;

        if room.status != RoomStatus::Booked {
            return Err(AppError::validation(format!(
                "Room {} is not booked",
                room.room_number
            )));
        }
        room.status = RoomStatus::Available;

        info!(
            booking_id = %booking.id,
            student = %student.username,
            room_number = %booking.room_number,
            "Booking cancelled"
        );

        let message = BookingMessage::new(booking, student, accommodation);
        if let Err(e) = self.notifier.booking_cancelled(&message).await {
            warn!(
                booking_id = %booking.id,
                notifier = self.notifier.name(),
                error = %e,
                "Booking cancellation notification failed"
            );
        }

        Ok(())
    }
}
