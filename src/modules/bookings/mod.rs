pub mod models;
pub mod services;

pub use models::{Booking, BookingMessage, Student};
pub use services::{BookingNotifier, BookingService, TracingNotifier};
