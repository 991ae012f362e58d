//! Error handling.
//!
//! This module provides:
//! - `NumbersApiError`, the typed error every client call returns
//! - `MalformedReason`, the diagnostic detail behind a malformed response
//! - Setup-time errors (`InitializationError`, `ConfigValidationError`)
//!
//! Callers care about two classes: the response did not come from the
//! expected service (`ServiceUnavailable`), or it did but its payload made no
//! sense (`MalformedResponse`). Neither is retried.

mod types;

// Re-export public API
pub use types::{ConfigValidationError, InitializationError, MalformedReason, NumbersApiError};
