//! Configuration, errors and input checks shared by the mask builders.

pub mod checks;
pub mod config;
pub mod errors;

pub use config::MaskConfig;
pub use errors::{MaskError, Result};
