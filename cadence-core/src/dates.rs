//! Date utilities: epoch day counts and calendar-component extraction.

use chrono::{Datelike, NaiveDate};

use crate::DateFormatError;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` date string into a calendar date.
pub fn parse_date(date: &str) -> Result<NaiveDate, DateFormatError> {
    NaiveDate::parse_from_str(date, DATE_FORMAT).map_err(|_| DateFormatError(date.to_string()))
}

/// Signed number of days between `date` and 1970-01-01.
pub fn days_since_epoch(date: &str) -> Result<i64, DateFormatError> {
    let parsed = parse_date(date)?;
    // NaiveDate::default() is the Unix epoch, 1970-01-01.
    Ok(parsed.signed_duration_since(NaiveDate::default()).num_days())
}

/// Day-of-month read directly from the third `-`-delimited field,
/// without calendar validation: `"2024-13-40"` yields 40.
pub fn day_of_month(date: &str) -> Result<i64, DateFormatError> {
    date.split('-')
        .nth(2)
        .and_then(|d| d.parse::<i64>().ok())
        .ok_or_else(|| DateFormatError(date.to_string()))
}

/// Year of the date, or -1 if the string does not parse.
pub fn year(date: &str) -> i64 {
    parse_date(date).map_or(-1, |d| d.year() as i64)
}

/// Month of the date (1-12), or -1 if the string does not parse.
pub fn month(date: &str) -> i64 {
    parse_date(date).map_or(-1, |d| d.month() as i64)
}

/// Day of the month (1-31), or -1 if the string does not parse.
pub fn day(date: &str) -> i64 {
    parse_date(date).map_or(-1, |d| d.day() as i64)
}

/// Weekday of the date (Monday = 0 .. Sunday = 6), or -1 if the string
/// does not parse.
pub fn weekday(date: &str) -> i64 {
    parse_date(date).map_or(-1, |d| d.weekday().num_days_from_monday() as i64)
}
