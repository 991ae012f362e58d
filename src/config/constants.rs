//! Configuration constants.
//!
//! This module defines the service endpoint, wire tokens, and operational
//! limits used throughout the client.

/// Base URL of the public NumbersAPI service.
pub const DEFAULT_BASE_URL: &str = "http://numbersapi.com";

/// Per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
/// Upper bound accepted by `Config::validate` for the request timeout
pub const MAX_TIMEOUT_SECS: u64 = 300;

/// Default User-Agent string for HTTP requests.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str = concat!("numbersapi-rs/", env!("CARGO_PKG_VERSION"));

/// Sidecar response header carrying the service's own reading of the number.
///
/// Every genuine NumbersAPI response sets it; a response without it did not
/// come from the service contract we expect.
pub const HEADER_NUMBERS_API_NUMBER: &str = "X-Numbers-API-Number";

// Sidecar tokens the service emits for values JSON cannot carry
pub const SIDECAR_NAN: &str = "NaN";
pub const SIDECAR_INFINITY: &str = "Infinity";
pub const SIDECAR_NEG_INFINITY: &str = "-Infinity";

/// Path token selecting a random subject.
pub const RANDOM_TOKEN: &str = "random";

/// Environment variable overriding the service base URL.
pub const ENV_BASE_URL: &str = "NUMBERSAPI_BASE_URL";
