//! Closed classifications of what the service actually sent.

use reqwest::header::HeaderMap;
use serde_json::Value;

use crate::config::{
    HEADER_NUMBERS_API_NUMBER, SIDECAR_INFINITY, SIDECAR_NAN, SIDECAR_NEG_INFINITY,
};
use crate::response::types::FactNumber;

/// The sidecar header, read once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidecarValue {
    Absent,
    NotANumber,
    Infinity,
    NegativeInfinity,
    /// Any other value, usually the decimal form of the number
    Other(String),
}

impl SidecarValue {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let Some(value) = headers.get(HEADER_NUMBERS_API_NUMBER) else {
            return SidecarValue::Absent;
        };
        match value.to_str() {
            Ok(SIDECAR_NAN) => SidecarValue::NotANumber,
            Ok(SIDECAR_INFINITY) => SidecarValue::Infinity,
            Ok(SIDECAR_NEG_INFINITY) => SidecarValue::NegativeInfinity,
            Ok(other) => SidecarValue::Other(other.to_string()),
            Err(_) => SidecarValue::Other(String::from_utf8_lossy(value.as_bytes()).into_owned()),
        }
    }
}

/// The observed shape of the body's `number` field.
#[derive(Debug, Clone, PartialEq)]
pub enum NumberShape<'a> {
    Native(FactNumber),
    Null,
    Text(&'a str),
    /// Booleans, arrays, objects
    Other,
}

impl<'a> NumberShape<'a> {
    pub fn classify(value: &'a Value) -> Self {
        match value {
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    NumberShape::Native(FactNumber::Int(i.into()))
                } else if let Some(u) = n.as_u64() {
                    NumberShape::Native(FactNumber::Int(u.into()))
                } else if let Some(f) = n.as_f64() {
                    NumberShape::Native(FactNumber::Float(f))
                } else {
                    NumberShape::Other
                }
            }
            Value::Null => NumberShape::Null,
            Value::String(s) => NumberShape::Text(s),
            Value::Bool(_) | Value::Array(_) | Value::Object(_) => NumberShape::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{HeaderName, HeaderValue};
    use serde_json::json;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static("x-numbers-api-number"),
            HeaderValue::from_str(value).unwrap(),
        );
        headers
    }

    #[test]
    fn test_sidecar_classification() {
        assert_eq!(SidecarValue::from_headers(&HeaderMap::new()), SidecarValue::Absent);
        assert_eq!(SidecarValue::from_headers(&headers_with("NaN")), SidecarValue::NotANumber);
        assert_eq!(SidecarValue::from_headers(&headers_with("Infinity")), SidecarValue::Infinity);
        assert_eq!(
            SidecarValue::from_headers(&headers_with("-Infinity")),
            SidecarValue::NegativeInfinity
        );
        assert_eq!(
            SidecarValue::from_headers(&headers_with("42")),
            SidecarValue::Other("42".to_string())
        );
    }

    #[test]
    fn test_sidecar_tokens_are_case_sensitive() {
        assert_eq!(
            SidecarValue::from_headers(&headers_with("nan")),
            SidecarValue::Other("nan".to_string())
        );
    }

    #[test]
    fn test_number_shapes() {
        assert_eq!(
            NumberShape::classify(&json!(42)),
            NumberShape::Native(FactNumber::Int(42))
        );
        assert_eq!(
            NumberShape::classify(&json!(-1.5)),
            NumberShape::Native(FactNumber::Float(-1.5))
        );
        assert_eq!(NumberShape::classify(&json!(null)), NumberShape::Null);
        assert_eq!(NumberShape::classify(&json!("42")), NumberShape::Text("42"));
        assert_eq!(NumberShape::classify(&json!(true)), NumberShape::Other);
        assert_eq!(NumberShape::classify(&json!([1])), NumberShape::Other);
        assert_eq!(NumberShape::classify(&json!({"n": 1})), NumberShape::Other);
    }

    #[test]
    fn test_native_integers_beyond_i64_stay_integers() {
        let value: Value = serde_json::from_str("12345678901234567890").unwrap();
        assert_eq!(
            NumberShape::classify(&value),
            NumberShape::Native(FactNumber::Int(12345678901234567890))
        );

        let value: Value = serde_json::from_str("18446744073709551615").unwrap();
        assert_eq!(
            NumberShape::classify(&value),
            NumberShape::Native(FactNumber::Int(u64::MAX.into()))
        );
    }

    #[test]
    fn test_native_integers_beyond_u64_become_floats() {
        let value: Value = serde_json::from_str("100000000000000000000").unwrap();
        assert_eq!(
            NumberShape::classify(&value),
            NumberShape::Native(FactNumber::Float(1e20))
        );
    }
}
