//! Command-line arguments.

use clap::{Args, Parser};

use crate::config::{
    Config, LogFormat, LogLevel, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
    ENV_BASE_URL, RANDOM_TOKEN,
};
use crate::error_handling::NumbersApiError;
use crate::request::{Category, DateSelector, FactRequest, Modifiers, NotFoundPolicy, Subject};

/// Command-line client for NumbersAPI.
///
/// Prints the raw response from the server unless `--parsed` is given. Use the
/// `numbersapi` library directly for typed results.
#[derive(Debug, Parser)]
#[command(name = "numbersapi-cli", version, about, long_about = None)]
pub struct Cli {
    /// Value to fetch the fact about: an integer, a month/day date, or `random`
    #[arg(
        value_parser = parse_subject,
        default_value = RANDOM_TOKEN,
        allow_negative_numbers = true
    )]
    pub number: Subject,

    #[command(flatten)]
    pub category: CategoryFlags,

    /// Return the fact as a sentence fragment
    #[arg(long)]
    pub fragment: bool,

    /// What to return if the number is not found
    #[arg(long = "default", value_name = "TEXT")]
    pub default_text: Option<String>,

    /// What to do if the number is not found
    #[arg(long, value_enum)]
    pub notfound: Option<NotFoundPolicy>,

    /// Start of the range for `random` (inclusive)
    #[arg(long, allow_negative_numbers = true)]
    pub min: Option<i64>,

    /// End of the range for `random` (inclusive)
    #[arg(long, allow_negative_numbers = true)]
    pub max: Option<i64>,

    /// Print the normalized fact as JSON instead of the raw response
    #[arg(long)]
    pub parsed: bool,

    /// NumbersAPI base URL
    #[arg(long, env = ENV_BASE_URL, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

/// Fact category flags; at most one may be given.
#[derive(Debug, Clone, Default, Args)]
#[group(multiple = false)]
pub struct CategoryFlags {
    /// Trivia about a number (default)
    #[arg(long)]
    pub trivia: bool,
    /// Math fact about a number
    #[arg(long)]
    pub math: bool,
    /// Fact about a date
    #[arg(long)]
    pub date: bool,
    /// Fact about a year
    #[arg(long)]
    pub year: bool,
}

impl CategoryFlags {
    pub fn category(&self) -> Category {
        if self.math {
            Category::Math
        } else if self.date {
            Category::Date
        } else if self.year {
            Category::Year
        } else {
            Category::Trivia
        }
    }
}

impl Cli {
    pub fn to_request(&self) -> FactRequest {
        FactRequest::new(self.number.clone(), self.category.category()).with_modifiers(Modifiers {
            fragment: self.fragment,
            not_found: self.notfound,
            default_text: self.default_text.clone(),
            min: self.min,
            max: self.max,
        })
    }

    pub fn to_config(&self) -> Config {
        Config {
            base_url: self.base_url.clone(),
            timeout_seconds: self.timeout_seconds,
            user_agent: self.user_agent.clone(),
            log_level: self.log_level.clone(),
            log_format: self.log_format.clone(),
        }
    }
}

/// Reads `random`, an integer, or a `month/day` date, in that order.
pub fn parse_subject(input: &str) -> Result<Subject, NumbersApiError> {
    if input == RANDOM_TOKEN {
        return Ok(Subject::Random);
    }
    if let Some(number) = Subject::parse_integer(input) {
        return Ok(number);
    }
    DateSelector::parse(input).map(Subject::from)
}
