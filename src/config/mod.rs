//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (service URL, sidecar header, timeouts)
//! - The library `Config` and its validation
//! - Logging option types shared with the CLI

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel};
