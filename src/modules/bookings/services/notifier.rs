use async_trait::async_trait;
use tracing::info;

use crate::core::Result;
use crate::modules::bookings::models::BookingMessage;

/// Outbound port for booking notifications (queue, topic, email).
///
/// Called after the booking decision is made; nothing flows back into
/// pricing. Implementations decide their own delivery semantics.
#[async_trait]
pub trait BookingNotifier: Send + Sync {
    async fn booking_confirmed(&self, message: &BookingMessage) -> Result<()>;

    async fn booking_cancelled(&self, message: &BookingMessage) -> Result<()>;

    fn name(&self) -> &str;
}

/// Writes each notification to the log as a JSON payload
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

#[async_trait]
impl BookingNotifier for TracingNotifier {
    async fn booking_confirmed(&self, message: &BookingMessage) -> Result<()> {
        let payload = serde_json::to_string(message)?;
        info!(booking_id = %message.booking_id, %payload, "Booking confirmed");
        Ok(())
    }

    async fn booking_cancelled(&self, message: &BookingMessage) -> Result<()> {
        let payload = serde_json::to_string(message)?;
        info!(booking_id = %message.booking_id, %payload, "Booking cancelled");
        Ok(())
    }

    fn name(&self) -> &str {
        "tracing"
    }
}
