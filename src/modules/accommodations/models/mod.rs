mod accommodation;
mod listing;
mod room;

pub use accommodation::{Accommodation, Amenity, Owner};
pub use listing::{AccommodationSummary, RoomListing};
pub use room::{Room, RoomStatus};
