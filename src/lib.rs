//! Student accommodation pricing and booking core.
//!
//! Festival discounts are evaluated by a pure calculator against an explicit
//! "today"; accommodations, room listings and bookings are priced on top of it.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use modules::accommodations;
pub use modules::bookings;
pub use modules::discounts;
