//! Request data structures.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use crate::config::RANDOM_TOKEN;
use crate::request::date::{DateSelector, MonthDay};

/// Kind of fact to ask for. Also the `type` field of a response.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    #[default]
    Trivia,
    Math,
    Date,
    Year,
}

/// What the service should do when it has no fact for the exact number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, ValueEnum)]
#[strum(serialize_all = "lowercase")]
pub enum NotFoundPolicy {
    /// Answer with the default text
    Default,
    /// Use the closest smaller number that has a fact
    Floor,
    /// Use the closest larger number that has a fact
    Ceil,
}

/// What the fact is about.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Subject {
    /// An integer, possibly negative and wider than the service can handle
    Number(i128),
    /// Decimal digits (optional leading `-`) of an integer beyond `i128`,
    /// sent verbatim
    Wide(String),
    /// A day of the year
    Date(MonthDay),
    /// Let the service pick
    Random,
}

impl Subject {
    pub fn is_random(&self) -> bool {
        matches!(self, Subject::Random)
    }

    /// Reads a decimal integer of any width.
    ///
    /// Values that fit in `i128` become `Number`; longer digit strings are
    /// kept as `Wide`. Returns `None` for anything that is not an optional
    /// `-` followed by ASCII digits.
    pub fn parse_integer(input: &str) -> Option<Self> {
        if let Ok(n) = input.parse::<i128>() {
            return Some(Subject::Number(n));
        }
        let digits = input.strip_prefix('-').unwrap_or(input);
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            Some(Subject::Wide(input.to_string()))
        } else {
            None
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subject::Number(n) => write!(f, "{n}"),
            Subject::Wide(digits) => f.write_str(digits),
            Subject::Date(day) => day.fmt(f),
            Subject::Random => f.write_str(RANDOM_TOKEN),
        }
    }
}

impl From<DateSelector> for Subject {
    fn from(selector: DateSelector) -> Self {
        match selector {
            DateSelector::Random => Subject::Random,
            DateSelector::Day(day) => Subject::Date(day),
        }
    }
}

impl From<i128> for Subject {
    fn from(n: i128) -> Self {
        Subject::Number(n)
    }
}

impl From<i64> for Subject {
    fn from(n: i64) -> Self {
        Subject::Number(n.into())
    }
}

/// Optional query modifiers. Everything defaults to "not sent".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Return the fact as a sentence fragment
    pub fragment: bool,
    pub not_found: Option<NotFoundPolicy>,
    /// Text to return when no fact exists
    pub default_text: Option<String>,
    /// Inclusive lower bound for random subjects
    pub min: Option<i64>,
    /// Inclusive upper bound for random subjects
    pub max: Option<i64>,
}

/// A fully specified query against the service.
///
/// # Examples
///
/// ```
/// use numbersapi::{Category, FactRequest, NotFoundPolicy, Subject};
///
/// let request = FactRequest::new(Subject::Number(42), Category::Math)
///     .with_fragment(true)
///     .with_not_found(NotFoundPolicy::Floor);
/// assert_eq!(request.path(), "42/math");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactRequest {
    pub subject: Subject,
    pub category: Category,
    pub modifiers: Modifiers,
}

impl FactRequest {
    pub fn new(subject: impl Into<Subject>, category: Category) -> Self {
        Self {
            subject: subject.into(),
            category,
            modifiers: Modifiers::default(),
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn with_fragment(mut self, fragment: bool) -> Self {
        self.modifiers.fragment = fragment;
        self
    }

    pub fn with_not_found(mut self, policy: NotFoundPolicy) -> Self {
        self.modifiers.not_found = Some(policy);
        self
    }

    pub fn with_default_text(mut self, text: impl Into<String>) -> Self {
        self.modifiers.default_text = Some(text.into());
        self
    }

    pub fn with_range(mut self, min: Option<i64>, max: Option<i64>) -> Self {
        self.modifiers.min = min;
        self.modifiers.max = max;
        self
    }
}
