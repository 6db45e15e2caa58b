pub mod accommodations;
pub mod bookings;
pub mod discounts;
