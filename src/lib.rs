pub mod error;
pub mod geometry;
pub mod math;
pub mod outline;
pub mod trace;

pub use error::{GearformError, Result};
