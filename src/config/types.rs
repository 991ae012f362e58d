//! Configuration types.
//!
//! This module defines the enums and the `Config` struct shared by the library
//! and the command-line front-end.

use clap::ValueEnum;
use url::Url;

use crate::config::constants::{
    DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, MAX_TIMEOUT_SECS,
};
use crate::error_handling::ConfigValidationError;

/// Verbosity of the `numbersapi` log target (`--log-level`).
///
/// The CLI defaults to `Warn` so a successful call leaves stderr empty.
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    /// Request URLs and normalization decisions
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        use log::LevelFilter;
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Log line format (`--log-format`).
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Colored `target [LEVEL] message`
    Plain,
    /// One JSON object per line
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```
/// use numbersapi::Config;
///
/// let config = Config {
///     base_url: "http://localhost:8080".to_string(),
///     timeout_seconds: 5,
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Service base URL, without the `{subject}/{category}` path
    pub base_url: String,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
        }
    }
}

impl Config {
    /// Checks every field and reports the first one that is out of range.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigValidationError` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        match Url::parse(&self.base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(url) => {
                return Err(ConfigValidationError::new(
                    "base_url",
                    format!(
                        "base_url must use http or https, got scheme '{}'",
                        url.scheme()
                    ),
                ))
            }
            Err(e) => {
                return Err(ConfigValidationError::new(
                    "base_url",
                    format!(
                        "base_url '{}' is not a valid URL ({e}); expected e.g. {DEFAULT_BASE_URL}",
                        self.base_url
                    ),
                ))
            }
        }

        if self.timeout_seconds == 0 || self.timeout_seconds > MAX_TIMEOUT_SECS {
            return Err(ConfigValidationError::new(
                "timeout_seconds",
                format!(
                    "timeout_seconds must be greater than 0 and at most {MAX_TIMEOUT_SECS}, got {}",
                    self.timeout_seconds
                ),
            ));
        }

        if self.user_agent.trim().is_empty() {
            return Err(ConfigValidationError::new(
                "user_agent",
                "user_agent must not be empty",
            ));
        }

        Ok(())
    }
}
