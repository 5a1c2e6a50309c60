//! Application configuration module
//!
//! Handles environment variables and application-wide constants.

pub mod constants;
mod settings;

pub use constants::*;
pub use settings::Config;
