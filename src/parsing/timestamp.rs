//! Timestamp normalization.
//!
//! Turns the bracketed timestamp text of a [`MessageRecord`](crate::MessageRecord)
//! into a calendar date. Time of day is parsed (to validate the text) and then
//! discarded; no timezone is applied.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

use crate::error::SkipReason;
use crate::parsing::whatsapp::normalize_invisible;

/// Formats tried in order: 12-hour with am/pm marker, then 24-hour.
pub const TIMESTAMP_FORMATS: &[&str] = &["%d/%m/%Y, %I:%M:%S %p", "%d/%m/%Y, %H:%M:%S"];

/// Parses a timestamp string into a calendar date.
///
/// Returns `None` if no format in [`TIMESTAMP_FORMATS`] accepts the text.
///
/// # Example
///
/// ```
/// use chatpulse::parsing::timestamp::parse_timestamp_date;
/// use chrono::NaiveDate;
///
/// assert_eq!(
///     parse_timestamp_date("15/06/2025, 9:05:30 PM"),
///     NaiveDate::from_ymd_opt(2025, 6, 15)
/// );
/// assert_eq!(parse_timestamp_date("yesterday"), None);
/// ```
pub fn parse_timestamp_date(raw: &str) -> Option<NaiveDate> {
    let cleaned = normalize_invisible(raw);

    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(&cleaned, fmt).ok())
        .map(|dt| dt.date())
}

/// Parses a timestamp and enforces the target year.
///
/// A timestamp in another year is not an error; it is reported as
/// [`SkipReason::YearMismatch`] so the caller can drop the message.
pub fn normalize_timestamp(raw: &str, target_year: i32) -> Result<NaiveDate, SkipReason> {
    let date = parse_timestamp_date(raw).ok_or(SkipReason::TimestampParseFailure)?;

    if date.year() == target_year {
        Ok(date)
    } else {
        Err(SkipReason::YearMismatch)
    }
}
