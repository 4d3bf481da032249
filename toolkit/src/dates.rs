//! Date and time actions
//!
//! Shifting instants by a unit count, whole-day differences, parsing, and
//! fixed-style formatting. Everything works in UTC; callers that care about
//! a local wall clock convert at the edge.
//!
//! Formatting uses a closed set of named styles rather than caller-supplied
//! format strings, so rendering is total. Parsing and shifting return
//! [`DateError`] for malformed input and out-of-range arithmetic.

use chrono::{DateTime, Duration, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur in date parsing and arithmetic
#[derive(Debug, Error, PartialEq)]
pub enum DateError {
    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid timestamp '{0}': expected RFC 3339")]
    InvalidTimestamp(String),

    #[error("Shift by {amount} {unit:?} is out of range")]
    ShiftOutOfRange { amount: i64, unit: ShiftUnit },
}

/// Unit for [`shift`] amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShiftUnit {
    Minutes,
    Hours,
    Days,
    Weeks,
}

/// Named output styles for [`format_timestamp`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateStyle {
    /// RFC 3339 / ISO 8601, second precision, `Z` suffix.
    Iso8601,
    /// RFC 2822, as used in mail headers.
    Rfc2822,
    /// Calendar date only, `YYYY-MM-DD`.
    DateOnly,
    /// Wall-clock time only, `HH:MM:SS`.
    TimeOnly,
}

/// Shift an instant by `amount` units.
///
/// Negative amounts shift into the past. Amounts whose span or result does
/// not fit the supported time range are rejected rather than clamped.
///
/// # Example
/// ```
/// use actionkit_core::dates::{self, ShiftUnit};
///
/// let start = dates::parse_timestamp("2024-01-02T03:04:05Z").unwrap();
/// let later = dates::shift(start, 90, ShiftUnit::Minutes).unwrap();
/// assert_eq!(dates::format_timestamp(later, dates::DateStyle::Iso8601),
///            "2024-01-02T04:34:05Z");
/// ```
pub fn shift(
    instant: DateTime<Utc>,
    amount: i64,
    unit: ShiftUnit,
) -> Result<DateTime<Utc>, DateError> {
    let delta = match unit {
        ShiftUnit::Minutes => Duration::try_minutes(amount),
        ShiftUnit::Hours => Duration::try_hours(amount),
        ShiftUnit::Days => Duration::try_days(amount),
        ShiftUnit::Weeks => Duration::try_weeks(amount),
    }
    .ok_or(DateError::ShiftOutOfRange { amount, unit })?;

    instant
        .checked_add_signed(delta)
        .ok_or(DateError::ShiftOutOfRange { amount, unit })
}

/// Signed whole days from `start` to `end`.
///
/// Positive when `end` is later. Partial days never occur; both arguments
/// are calendar dates.
///
/// # Example
/// ```
/// use actionkit_core::dates;
///
/// let start = dates::parse_date("2024-02-28").unwrap();
/// let end = dates::parse_date("2024-03-01").unwrap();
/// assert_eq!(dates::days_between(start, end), 2); // leap year
/// ```
pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    end.signed_duration_since(start).num_days()
}

/// Parse a `YYYY-MM-DD` calendar date. Surrounding whitespace is ignored.
pub fn parse_date(input: &str) -> Result<NaiveDate, DateError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| DateError::InvalidDate(input.to_string()))
}

/// Parse an RFC 3339 timestamp into UTC. Surrounding whitespace is ignored.
///
/// Offsets other than `Z` are accepted and normalized to UTC.
pub fn parse_timestamp(input: &str) -> Result<DateTime<Utc>, DateError> {
    DateTime::parse_from_rfc3339(input.trim())
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|_| DateError::InvalidTimestamp(input.to_string()))
}

/// Render an instant in the given style. Total; every style has a fixed,
/// valid format.
pub fn format_timestamp(instant: DateTime<Utc>, style: DateStyle) -> String {
    match style {
        DateStyle::Iso8601 => instant.to_rfc3339_opts(SecondsFormat::Secs, true),
        DateStyle::Rfc2822 => instant.to_rfc2822(),
        DateStyle::DateOnly => instant.format("%Y-%m-%d").to_string(),
        DateStyle::TimeOnly => instant.format("%H:%M:%S").to_string(),
    }
}
