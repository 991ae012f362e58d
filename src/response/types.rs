//! Response data structures.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;

use crate::config::HEADER_NUMBERS_API_NUMBER;
use crate::request::Category;

/// A response exactly as the transport received it.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, headers: HeaderMap, body: impl Into<String>) -> Self {
        Self {
            status,
            headers,
            body: body.into(),
        }
    }

    /// Builds a 200 response carrying only the sidecar header (if any).
    ///
    /// Handy for feeding stored or hand-written payloads through `normalize`.
    /// A `sidecar` that is not a legal header value (control characters,
    /// newlines) is dropped, so the response then reads as having no sidecar
    /// at all and normalizes to `ServiceUnavailable`.
    pub fn with_sidecar(sidecar: Option<&str>, body: impl Into<String>) -> Self {
        let mut headers = HeaderMap::new();
        if let Some(value) = sidecar.and_then(|v| HeaderValue::from_str(v).ok()) {
            headers.insert(
                HeaderName::from_static("x-numbers-api-number"),
                value,
            );
        }
        Self::new(200, headers, body)
    }

    /// Drains a `reqwest::Response` into an owned `RawResponse`.
    ///
    /// # Errors
    ///
    /// Returns a `reqwest::Error` if the body cannot be read.
    pub async fn from_reqwest(response: reqwest::Response) -> Result<Self, reqwest::Error> {
        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.text().await?;
        Ok(Self {
            status,
            headers,
            body,
        })
    }

    /// Raw value of the sidecar header, if present.
    pub fn sidecar(&self) -> Option<&HeaderValue> {
        self.headers.get(HEADER_NUMBERS_API_NUMBER)
    }
}

/// The number a fact is about, always a concrete `Int` or finite `Float`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FactNumber {
    /// Any integer the service sent, as a JSON number or a decimal string
    Int(i128),
    Float(f64),
}

impl FactNumber {
    /// The integer value, or `None` for a `Float`.
    pub fn as_i128(&self) -> Option<i128> {
        match self {
            FactNumber::Int(n) => Some(*n),
            FactNumber::Float(_) => None,
        }
    }

    pub fn as_f64(&self) -> f64 {
        match self {
            FactNumber::Int(n) => *n as f64,
            FactNumber::Float(f) => *f,
        }
    }
}

impl std::fmt::Display for FactNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FactNumber::Int(n) => write!(f, "{n}"),
            FactNumber::Float(x) => write!(f, "{x}"),
        }
    }
}

/// A normalized fact.
///
/// Serializes with the service's own field names, so a `FactResult` written
/// out as JSON normalizes back to itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactResult {
    /// `false` when the service fell back to a default or a neighbour
    pub found: bool,
    pub number: FactNumber,
    #[serde(rename = "type")]
    pub category: Category,
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::{normalize, SidecarValue};

    #[test]
    fn test_fact_number_accessors() {
        let wide = FactNumber::Int(i64::MAX as i128 + 1);
        assert_eq!(wide.as_i128(), Some(9223372036854775808));
        assert_eq!(wide.as_f64(), 9223372036854775808.0);

        let half = FactNumber::Float(2.5);
        assert_eq!(half.as_i128(), None);
        assert_eq!(half.as_f64(), 2.5);
    }

    #[test]
    fn test_wide_int_serializes_as_json_integer() {
        let json = serde_json::to_string(&FactNumber::Int(9223372036854775808)).unwrap();
        assert_eq!(json, "9223372036854775808");
    }

    #[test]
    fn test_illegal_sidecar_value_is_dropped() {
        let raw = RawResponse::with_sidecar(Some("42\n"), "{}");
        assert!(raw.sidecar().is_none());
        assert_eq!(SidecarValue::from_headers(&raw.headers), SidecarValue::Absent);
        assert!(matches!(
            normalize(&raw),
            Err(crate::error_handling::NumbersApiError::ServiceUnavailable)
        ));
    }
}
