//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `numbersapi` library that handles:
//! - Environment variable loading (.env file)
//! - Command-line argument parsing
//! - Logger initialization
//! - Advisory warnings and user-facing error messages
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use numbersapi::cli::{advisories, error_message, fetch_output, Cli};
use numbersapi::initialization::init_logger_with;
use numbersapi::NumbersClient;

#[tokio::main]
async fn main() -> Result<()> {
    // Lets NUMBERSAPI_BASE_URL live in a .env file
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = cli.to_config();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    for advisory in advisories(&cli.to_request()) {
        eprintln!("{advisory}");
    }

    let client = NumbersClient::new(&config).context("Failed to initialize NumbersAPI client")?;

    match fetch_output(&cli, &client).await {
        Ok(payload) => {
            println!("{payload}");
            Ok(())
        }
        Err(e) => {
            log::debug!("Request failed: {e}");
            eprintln!("{}", error_message(&e));
            process::exit(1);
        }
    }
}
