//! Calendar date parsing and inclusive date ranges.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Input and display format for every expense date.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a strict `YYYY-MM-DD` string into a calendar date.
///
/// The shape is checked before handing off to chrono so that unpadded
/// (`2025-5-1`) or signed (`+2025-05-01`) inputs are rejected as well as
/// impossible days such as `2025-02-30`.
pub fn parse_date(input: &str) -> Result<NaiveDate, DateParseError> {
    if !has_date_shape(input) {
        return Err(DateParseError::new(input));
    }
    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|_| DateParseError::new(input))
}

/// Renders a date using [`DATE_FORMAT`].
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

fn has_date_shape(input: &str) -> bool {
    let bytes = input.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(idx, byte)| match idx {
            4 | 7 => *byte == b'-',
            _ => byte.is_ascii_digit(),
        })
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Raised when a string is not a valid `YYYY-MM-DD` calendar date.
pub struct DateParseError {
    input: String,
}

impl DateParseError {
    fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
        }
    }

    /// The rejected input, exactly as supplied.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for DateParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}` is not a valid date, expected YYYY-MM-DD", self.input)
    }
}

impl std::error::Error for DateParseError {}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
/// Inclusive date bounds; either side may be left open.
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Returns `true` when `date` is not before `start` and not after `end`.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.map_or(true, |start| date >= start) && self.end.map_or(true, |end| date <= end)
    }
}
