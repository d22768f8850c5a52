pub mod error;
pub mod tolerance;
pub mod traits;

pub use error::{RampError, Result};
pub use tolerance::Tolerance;
