//! Command-line front-end.
//!
//! Argument parsing, advisory warnings, and the mapping from library errors
//! to user-facing messages. `main.rs` only wires these together.

mod advisory;
mod args;

pub use advisory::{advisories, Advisory};
pub use args::{parse_subject, CategoryFlags, Cli};

use crate::client::NumbersClient;
use crate::error_handling::NumbersApiError;

/// Fetches the fact described by `cli` and renders it for stdout.
///
/// Raw mode returns the body untouched; `--parsed` returns the normalized
/// fact as JSON.
///
/// # Errors
///
/// Propagates the client's `NumbersApiError`, or `Encoding` if the fact
/// cannot be serialized.
pub async fn fetch_output(cli: &Cli, client: &NumbersClient) -> Result<String, NumbersApiError> {
    let request = cli.to_request();
    if cli.parsed {
        let fact = client.get_number_fact(&request).await?;
        Ok(serde_json::to_string(&fact)?)
    } else {
        client.get_number_fact_raw(&request).await
    }
}

/// The single line printed to stderr when a call fails.
pub fn error_message(err: &NumbersApiError) -> String {
    match err {
        NumbersApiError::ServiceUnavailable => "Error: NumbersAPI returned an error".to_string(),
        NumbersApiError::MalformedResponse(_) => {
            "Error: NumbersAPI got confused by the provided arguments".to_string()
        }
        NumbersApiError::InvalidDateFormat(_) => format!("Error: {err}"),
        NumbersApiError::Transport(e) => format!("Error: could not reach NumbersAPI: {e}"),
        NumbersApiError::Encoding(e) => format!("Error: could not print the fact as JSON: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_handling::MalformedReason;

    #[test]
    fn test_error_messages_are_distinct() {
        let unavailable = error_message(&NumbersApiError::ServiceUnavailable);
        let confused = error_message(&MalformedReason::NanMarker.into());
        assert_eq!(unavailable, "Error: NumbersAPI returned an error");
        assert_eq!(
            confused,
            "Error: NumbersAPI got confused by the provided arguments"
        );
        assert_ne!(unavailable, confused);
    }

    #[test]
    fn test_encoding_failure_is_reported_not_swallowed() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let message = error_message(&NumbersApiError::Encoding(json_err));
        assert!(message.starts_with("Error: could not print the fact as JSON: "));
        assert_ne!(message, "{}");
    }

    #[test]
    fn test_every_malformed_reason_maps_to_the_same_message() {
        use strum::IntoEnumIterator;
        for reason in MalformedReason::iter() {
            assert_eq!(
                error_message(&NumbersApiError::MalformedResponse(reason)),
                "Error: NumbersAPI got confused by the provided arguments"
            );
        }
    }
}
