//! Response normalization.
//!
//! NumbersAPI is inconsistent about how it encodes the number a fact is
//! about: depending on the code path it sends a JSON number, a string, or
//! `null`, and it reports values JSON cannot carry (`NaN`, infinities) only in
//! the `X-Numbers-API-Number` sidecar header. This module collapses every
//! shape into a `FactResult` whose number is a plain `Int` or finite `Float`,
//! or fails with a typed error.
//!
//! Checks run in a fixed order:
//! 1. sidecar header absent: `ServiceUnavailable`
//! 2. sidecar header `NaN`: malformed
//! 3. body not an object, or no `number` field: malformed
//! 4. native number: accepted
//! 5. `null`: malformed (infinite sidecar values are logged, still rejected)
//! 6. string: integer, then float, else malformed
//! 7. anything else: malformed

mod shape;
mod types;

use log::debug;
use serde_json::{Map, Value};

use crate::error_handling::{MalformedReason, NumbersApiError};
use crate::request::Category;

pub use shape::{NumberShape, SidecarValue};
pub use types::{FactNumber, FactResult, RawResponse};

/// Validates the sidecar header without looking at the body.
///
/// This is all the raw pass-through mode checks.
///
/// # Errors
///
/// - `NumbersApiError::ServiceUnavailable` if the header is missing
/// - `NumbersApiError::MalformedResponse` if the header is `NaN`
pub fn check_sidecar(raw: &RawResponse) -> Result<SidecarValue, NumbersApiError> {
    match SidecarValue::from_headers(&raw.headers) {
        SidecarValue::Absent => Err(NumbersApiError::ServiceUnavailable),
        SidecarValue::NotANumber => Err(MalformedReason::NanMarker.into()),
        sidecar => Ok(sidecar),
    }
}

/// Turns a raw service response into a `FactResult`.
///
/// Read-only; never retries.
///
/// # Errors
///
/// `ServiceUnavailable` when the sidecar header is missing, otherwise
/// `MalformedResponse` with the reason the payload was rejected.
///
/// # Examples
///
/// ```
/// use numbersapi::{normalize, FactNumber, RawResponse};
///
/// let raw = RawResponse::with_sidecar(
///     Some("42"),
///     r#"{"text": "42 is the answer.", "number": "42", "found": true, "type": "trivia"}"#,
/// );
/// let fact = normalize(&raw).unwrap();
/// assert_eq!(fact.number, FactNumber::Int(42));
/// ```
pub fn normalize(raw: &RawResponse) -> Result<FactResult, NumbersApiError> {
    let sidecar = check_sidecar(raw)?;

    let body = parse_body(&raw.body)?;
    let value = body.get("number").ok_or(MalformedReason::MissingNumber)?;
    let number = resolve_number(NumberShape::classify(value), &sidecar)?;

    let found = body
        .get("found")
        .and_then(Value::as_bool)
        .ok_or(MalformedReason::MissingField("found"))?;
    let category = body
        .get("type")
        .and_then(Value::as_str)
        .and_then(|s| s.parse::<Category>().ok())
        .ok_or(MalformedReason::MissingField("type"))?;
    let text = body
        .get("text")
        .and_then(Value::as_str)
        .ok_or(MalformedReason::MissingField("text"))?
        .to_string();

    Ok(FactResult {
        found,
        number,
        category,
        text,
    })
}

fn parse_body(body: &str) -> Result<Map<String, Value>, MalformedReason> {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(MalformedReason::InvalidBody),
        Err(e) => {
            debug!("Response body is not JSON: {e}");
            Err(MalformedReason::InvalidBody)
        }
    }
}

fn resolve_number(
    shape: NumberShape<'_>,
    sidecar: &SidecarValue,
) -> Result<FactNumber, MalformedReason> {
    match shape {
        NumberShape::Native(number) => Ok(number),
        NumberShape::Null => match sidecar {
            SidecarValue::Infinity | SidecarValue::NegativeInfinity => {
                let negative = *sidecar == SidecarValue::NegativeInfinity;
                debug!(
                    "Null number with sidecar {}Infinity; refusing unrepresentable magnitude",
                    if negative { "-" } else { "+" }
                );
                Err(MalformedReason::UnrepresentableMagnitude { negative })
            }
            other => {
                debug!("Null number with sidecar {other:?}");
                Err(MalformedReason::NullNumber)
            }
        },
        NumberShape::Text(text) => coerce_text(text),
        NumberShape::Other => Err(MalformedReason::UnexpectedNumberShape),
    }
}

fn coerce_text(text: &str) -> Result<FactNumber, MalformedReason> {
    let trimmed = text.trim();
    if let Ok(int) = trimmed.parse::<i128>() {
        return Ok(FactNumber::Int(int));
    }
    match trimmed.parse::<f64>() {
        Ok(float) if float.is_finite() => Ok(FactNumber::Float(float)),
        _ => Err(MalformedReason::UnparseableNumber(text.to_string())),
    }
}
