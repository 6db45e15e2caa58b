mod booking;
mod student;

pub use booking::{Booking, BookingMessage};
pub use student::Student;
