//! Application initialization and resource setup.
//!
//! This module provides functions to initialize shared resources:
//! - The HTTP client (timeout and user agent from `Config`)
//! - The logger (level and format from `Config`)
//!
//! All initialization functions return `InitializationError` on failure.

mod client;
mod logger;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;
