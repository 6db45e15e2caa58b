pub mod booking_service;
pub mod notifier;

pub use booking_service::BookingService;
pub use notifier::{BookingNotifier, TracingNotifier};
