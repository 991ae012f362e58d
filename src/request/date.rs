//! Month/day subjects for date facts.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};

use crate::config::RANDOM_TOKEN;
use crate::error_handling::NumbersApiError;

// Leap year, so 02/29 is accepted
const PARSE_YEAR: i32 = 2000;

/// A day of the year, rendered `MM/DD`.
///
/// Values from [`MonthDay::parse`] or a calendar date are always real days.
/// Values built field by field are sent to the service as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthDay {
    pub month: u32,
    pub day: u32,
}

impl MonthDay {
    /// Builds a `MonthDay` without checking it against the calendar.
    pub fn new(month: u32, day: u32) -> Self {
        Self { month, day }
    }

    /// Extracts the month and day of any calendar date.
    pub fn from_date<D: Datelike>(date: &D) -> Self {
        Self {
            month: date.month(),
            day: date.day(),
        }
    }

    /// Parses a `month/day` string. One- and two-digit fields are accepted.
    ///
    /// # Errors
    ///
    /// Returns `NumbersApiError::InvalidDateFormat` when the input is not a
    /// real day of the year.
    pub fn parse(input: &str) -> Result<Self, NumbersApiError> {
        let trimmed = input.trim();
        NaiveDate::parse_from_str(&format!("{PARSE_YEAR}/{trimmed}"), "%Y/%m/%d")
            .map(|date| Self::from_date(&date))
            .map_err(|_| NumbersApiError::InvalidDateFormat(input.to_string()))
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}", self.month, self.day)
    }
}

/// The subject of a date fact: a specific day, or a random one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateSelector {
    Random,
    Day(MonthDay),
}

impl DateSelector {
    /// Reads `random` or a `month/day` string.
    ///
    /// # Errors
    ///
    /// Returns `NumbersApiError::InvalidDateFormat` for anything else.
    pub fn parse(input: &str) -> Result<Self, NumbersApiError> {
        if input.trim() == RANDOM_TOKEN {
            return Ok(DateSelector::Random);
        }
        MonthDay::parse(input).map(DateSelector::Day)
    }
}

impl fmt::Display for DateSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateSelector::Random => f.write_str(RANDOM_TOKEN),
            DateSelector::Day(day) => day.fmt(f),
        }
    }
}

impl FromStr for DateSelector {
    type Err = NumbersApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DateSelector::parse(s)
    }
}

impl From<MonthDay> for DateSelector {
    fn from(day: MonthDay) -> Self {
        DateSelector::Day(day)
    }
}

impl From<NaiveDate> for DateSelector {
    fn from(date: NaiveDate) -> Self {
        DateSelector::Day(MonthDay::from_date(&date))
    }
}

impl From<chrono::NaiveDateTime> for DateSelector {
    fn from(datetime: chrono::NaiveDateTime) -> Self {
        DateSelector::Day(MonthDay::from_date(&datetime))
    }
}

impl<Tz: chrono::TimeZone> From<chrono::DateTime<Tz>> for DateSelector {
    fn from(datetime: chrono::DateTime<Tz>) -> Self {
        DateSelector::Day(MonthDay::from_date(&datetime))
    }
}
