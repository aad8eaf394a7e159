//! Date formatting for the record dates
//!
//! Dates are entered as `YYYY-MM-DD` and submitted in a long ordinal form,
//! e.g. `2024-01-03` becomes `3rd January 2024`.

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

/// Input format accepted by the date fields
pub const INPUT_FORMAT: &str = "%Y-%m-%d";

/// Maximum length of a date field value (`YYYY-MM-DD`)
pub const INPUT_MAX_LEN: usize = 10;

/// Errors produced while formatting a date field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("'{0}' is not a valid date (expected YYYY-MM-DD)")]
    Invalid(String),
}

/// Ordinal suffix for a day of the month
pub fn ordinal_suffix(day: u32) -> &'static str {
    if (11..=13).contains(&(day % 100)) {
        return "th";
    }
    match day % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// Parse a `YYYY-MM-DD` value into a calendar date
pub fn parse_input(input: &str) -> Result<NaiveDate, DateError> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, INPUT_FORMAT)
        .map_err(|_| DateError::Invalid(trimmed.to_string()))
}

/// Format a `YYYY-MM-DD` value as `<day><suffix> <Month> <year>`.
///
/// Empty input yields an empty string. Anything else that does not parse is
/// rejected rather than passed through.
pub fn format_date(input: &str) -> Result<String, DateError> {
    if input.trim().is_empty() {
        return Ok(String::new());
    }
    let date = parse_input(input)?;
    Ok(format_naive(date))
}

/// Format an already parsed date
pub fn format_naive(date: NaiveDate) -> String {
    let day = date.day();
    format!(
        "{}{} {}",
        day,
        ordinal_suffix(day),
        date.format("%B %Y")
    )
}

/// Whether a character may be typed into a date field
pub fn is_input_char(c: char) -> bool {
    c.is_ascii_digit() || c == '-'
}
