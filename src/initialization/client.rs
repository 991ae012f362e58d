//! HTTP client initialization.

use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::Config;
use crate::error_handling::InitializationError;

/// Initializes the HTTP client used for every NumbersAPI call.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the config
/// - Timeout from the config (the only cancellation the client supports)
///
/// The config is validated first, so a bad base URL or timeout never reaches
/// the network layer.
///
/// # Errors
///
/// Returns `InitializationError::ConfigError` for an invalid config, or
/// `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(config: &Config) -> Result<reqwest::Client, InitializationError> {
    config.validate()?;
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(client)
}
