pub mod clock;
pub mod error;
pub mod money;

pub use clock::BusinessClock;
pub use error::{AppError, Result};
pub use money::Money;
