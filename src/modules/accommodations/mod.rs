pub mod models;
pub mod repositories;
pub mod services;

pub use models::{Accommodation, AccommodationSummary, Room, RoomListing, RoomStatus};
pub use repositories::{AccommodationRepository, JsonCatalogRepository};
pub use services::PricingService;
