//! Logger initialization.
//!
//! Everything is written to stderr; stdout carries only the fact.

use std::io::Write;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use colored::*;
use log::{Level, LevelFilter, Record};

/// HTTP stack crates whose debug output drowns out the client's own.
const NOISY_TARGETS: &[&str] = &["reqwest", "hyper", "hyper_util"];

/// Installs the global `env_logger` with the given level and format.
///
/// `RUST_LOG` is read first and `level` is applied on top of it, both
/// globally and for the `numbersapi` target. The HTTP stack is capped at
/// Info so `--log-level debug` shows request and normalization decisions
/// without connection-pool chatter.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// # Show the request URL and normalization decisions
/// numbersapi-cli --log-level debug 42
///
/// # One JSON object per line, for log shippers
/// numbersapi-cli --log-level debug --log-format json 42
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();
    builder.filter_level(level);
    for target in NOISY_TARGETS {
        builder.filter_module(target, LevelFilter::Info.min(level));
    }
    builder.filter_module("numbersapi", level);

    match format {
        LogFormat::Json => builder.format(|buf, record| {
            writeln!(buf, "{}", json_line(chrono::Utc::now().timestamp_millis(), record))
        }),
        LogFormat::Plain => builder.format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}",
                record.target().cyan(),
                paint(record.level()),
                record.args()
            )
        }),
    };

    builder.try_init().map_err(InitializationError::from)
}

fn paint(level: Level) -> ColoredString {
    let label = level.to_string();
    match level {
        Level::Error => label.red(),
        Level::Warn => label.yellow(),
        Level::Info => label.green(),
        Level::Debug => label.blue(),
        Level::Trace => label.purple(),
    }
}

fn json_line(ts: i64, record: &Record<'_>) -> String {
    serde_json::json!({
        "ts": ts,
        "level": record.level().as_str(),
        "target": record.target(),
        "msg": record.args().to_string(),
    })
    .to_string()
}
