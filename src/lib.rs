//! numbersapi library: a NumbersAPI client that normalizes the service's
//! inconsistent responses.
//!
//! NumbersAPI serves facts about numbers, dates and years. Its answers are
//! not always well-formed: the fact's number may arrive as a JSON number, a
//! string, or `null`, and values JSON cannot carry are reported only in the
//! `X-Numbers-API-Number` header. This crate turns every response into a
//! [`FactResult`] with an integer or finite float, or a typed
//! [`NumbersApiError`].
//!
//! # Example
//!
//! ```no_run
//! use numbersapi::{Category, Config, FactRequest, NotFoundPolicy, NumbersClient, Subject};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = NumbersClient::new(&Config::default())?;
//!
//! let request = FactRequest::new(Subject::Number(314159265358979), Category::Trivia)
//!     .with_not_found(NotFoundPolicy::Default);
//! let fact = client.get_number_fact(&request).await?;
//! println!("found={} number={} text={}", fact.found, fact.number, fact.text);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! The client is async and requires a Tokio runtime.

pub mod cli;
mod client;
pub mod config;
mod error_handling;
pub mod initialization;
mod request;
mod response;

// Re-export public API
pub use client::NumbersClient;
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{
    ConfigValidationError, InitializationError, MalformedReason, NumbersApiError,
};
pub use request::{
    Category, DateSelector, FactRequest, Modifiers, MonthDay, NotFoundPolicy, Subject,
};
pub use response::{
    check_sidecar, normalize, FactNumber, FactResult, NumberShape, RawResponse, SidecarValue,
};
