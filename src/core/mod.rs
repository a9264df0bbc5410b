//! Startup configuration and shared constants.

pub mod config;
pub mod constants;

pub use config::*;
pub use constants::*;
