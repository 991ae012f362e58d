//! Error type definitions.
//!
//! This module defines the errors surfaced to library callers, plus the
//! setup-time errors used by the binary.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Errors returned by every NumbersAPI call.
#[derive(Error, Debug)]
pub enum NumbersApiError {
    /// The response lacks the `X-Numbers-API-Number` sidecar header, so it did
    /// not come from the service contract this client expects.
    #[error("NumbersAPI returned an error: response is missing the X-Numbers-API-Number header")]
    ServiceUnavailable,

    /// The service answered, but its payload cannot be turned into a fact.
    #[error("NumbersAPI returned a malformed response: {0}")]
    MalformedResponse(MalformedReason),

    /// A date-like subject could not be read as `month/day`.
    ///
    /// Raised while building the request, before any network traffic.
    #[error("Invalid date '{0}': expected 'month/day' (e.g. 12/25) or 'random'")]
    InvalidDateFormat(String),

    /// The HTTP exchange itself failed (connect, timeout, body read).
    #[error("HTTP request to NumbersAPI failed: {0}")]
    Transport(#[from] ReqwestError),

    /// A normalized fact could not be written out as JSON.
    #[error("Failed to encode fact as JSON: {0}")]
    Encoding(#[from] serde_json::Error),
}

impl NumbersApiError {
    /// Returns `true` for the "service got confused" class of failures.
    pub fn is_malformed(&self) -> bool {
        matches!(self, NumbersApiError::MalformedResponse(_))
    }
}

impl From<MalformedReason> for NumbersApiError {
    fn from(reason: MalformedReason) -> Self {
        NumbersApiError::MalformedResponse(reason)
    }
}

/// Why a response from the service was rejected.
///
/// Every variant ends in failure; the distinctions exist for diagnostics.
#[derive(Debug, Clone, PartialEq, EnumIterMacro)]
pub enum MalformedReason {
    /// The sidecar header is the literal `NaN`.
    NanMarker,
    /// The body is not a JSON object.
    InvalidBody,
    /// The body has no `number` field.
    MissingNumber,
    /// `number` is null and the sidecar does not explain it.
    NullNumber,
    /// `number` is null and the sidecar reports an infinite magnitude.
    ///
    /// The value is known but has no finite representation, so the call still
    /// fails.
    UnrepresentableMagnitude {
        /// `true` when the sidecar said `-Infinity`
        negative: bool,
    },
    /// `number` is a string that is neither an integer nor a finite float.
    UnparseableNumber(String),
    /// `number` is a boolean, array, or object.
    UnexpectedNumberShape,
    /// A required field (`found`, `type`, `text`) is missing or mistyped.
    MissingField(&'static str),
}

impl MalformedReason {
    /// Returns a short, stable label for the failure class.
    pub fn as_str(&self) -> &'static str {
        match self {
            MalformedReason::NanMarker => "NaN sidecar marker",
            MalformedReason::InvalidBody => "Body is not a JSON object",
            MalformedReason::MissingNumber => "Missing number field",
            MalformedReason::NullNumber => "Null number",
            MalformedReason::UnrepresentableMagnitude { .. } => "Unrepresentable magnitude",
            MalformedReason::UnparseableNumber(_) => "Unparseable number string",
            MalformedReason::UnexpectedNumberShape => "Unexpected number shape",
            MalformedReason::MissingField(_) => "Missing or mistyped field",
        }
    }
}

impl std::fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MalformedReason::UnrepresentableMagnitude { negative } => write!(
                f,
                "{} ({}Infinity)",
                self.as_str(),
                if *negative { "-" } else { "+" }
            ),
            MalformedReason::UnparseableNumber(raw) => write!(f, "{} ({raw:?})", self.as_str()),
            MalformedReason::MissingField(name) => write!(f, "{} ({name})", self.as_str()),
            _ => f.write_str(self.as_str()),
        }
    }
}

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// The configuration was rejected before any resource was built.
    #[error("Invalid configuration: {0}")]
    ConfigError(#[from] ConfigValidationError),
}

/// A configuration field that failed validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{field}: {message}")]
pub struct ConfigValidationError {
    /// Name of the offending `Config` field
    pub field: &'static str,
    /// Human-readable explanation, including the accepted range
    pub message: String,
}

impl ConfigValidationError {
    pub(crate) fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}
