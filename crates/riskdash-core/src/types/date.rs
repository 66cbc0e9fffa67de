//! Date type for observations.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Date-only spellings accepted by [`Date::parse`], tried in order.
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Error returned when a string is not a recognizable calendar date.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("cannot parse '{0}' as a date")]
pub struct ParseDateError(pub String);

/// A calendar date.
///
/// Newtype over `chrono::NaiveDate`. Serializes as `YYYY-MM-DD`.
///
/// # Example
///
/// ```rust
/// use riskdash_core::Date;
///
/// let date = Date::parse("2023-03-01 00:00:00").unwrap();
/// assert_eq!(date, Date::from_ymd(2023, 3, 1).unwrap());
/// assert_eq!(date.to_string(), "2023-03-01");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, ParseDateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| ParseDateError(format!("{year}-{month:02}-{day:02}")))
    }

    /// Parses a date cell.
    ///
    /// Accepts `YYYY-MM-DD`, `YYYY/MM/DD` and `MM/DD/YYYY`. A time component
    /// after a space or `T` is ignored, so timestamps exported at midnight
    /// (`2023-01-01 00:00:00`) load as plain dates.
    pub fn parse(s: &str) -> Result<Self, ParseDateError> {
        let trimmed = s.trim();
        let date_part = trimmed
            .split(|c| c == ' ' || c == 'T')
            .next()
            .unwrap_or(trimmed);

        DATE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(date_part, fmt).ok())
            .map(Date)
            .ok_or_else(|| ParseDateError(s.to_string()))
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Adds a number of days to the date.
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        Date(self.0 + chrono::Duration::days(days))
    }

    /// Returns the underlying `NaiveDate`.
    #[must_use]
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for Date {
    type Err = ParseDateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Date::parse(s)
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}
