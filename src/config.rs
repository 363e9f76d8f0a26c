//! Run configuration.
//!
//! This module provides plain configuration structs for library usage,
//! without any CLI framework dependencies.
//!
//! - [`PulseConfig`] - target year, exclusions, input/output paths, format
//! - [`Exclusions`] - days left out of the dense series
//! - [`DateRange`] - an inclusive span of days
//!
//! # Example
//!
//! ```rust
//! use chatpulse::config::{DateRange, PulseConfig};
//!
//! let config = PulseConfig::new()
//!     .with_target_year(2025)
//!     .with_excluded_month(Some(4))
//!     .with_excluded_range(DateRange::parse("2025-12-24..2025-12-26")?);
//!
//! config.validate()?;
//! # Ok::<(), chatpulse::PulseError>(())
//! ```

use std::path::PathBuf;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{PulseError, Result};
use crate::format::OutputFormat;

/// Default target year.
pub const DEFAULT_TARGET_YEAR: i32 = 2025;

/// Month omitted from the output unless configured otherwise (April).
pub const DEFAULT_EXCLUDED_MONTH: u32 = 4;

/// An inclusive range of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a range, rejecting `start > end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(PulseError::invalid_config(
                "excluded_ranges",
                format!("range start {start} is after end {end}"),
            ));
        }
        Ok(Self { start, end })
    }

    /// Parses `YYYY-MM-DD..YYYY-MM-DD`, or a single `YYYY-MM-DD` day.
    ///
    /// ```
    /// use chatpulse::config::DateRange;
    ///
    /// let range = DateRange::parse("2025-12-24..2025-12-26").unwrap();
    /// assert_eq!(range.len(), 3);
    /// assert_eq!(DateRange::parse("2025-01-01").unwrap().len(), 1);
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        let (start, end) = match input.split_once("..") {
            Some((start, end)) => (parse_day(start)?, parse_day(end)?),
            None => {
                let day = parse_day(input)?;
                (day, day)
            }
        };
        Self::new(start, end)
    }

    /// Returns `true` if `date` lies within the range.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of days in the range.
    pub fn len(&self) -> usize {
        (self.end - self.start).num_days() as usize + 1
    }

    /// Always `false`; a range holds at least one day.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl std::str::FromStr for DateRange {
    type Err = PulseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

fn parse_day(input: &str) -> Result<NaiveDate> {
    let input = input.trim();
    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| PulseError::invalid_date(input))
}

/// Days omitted entirely from the dense series.
///
/// An excluded day produces no record at all, not a zero record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exclusions {
    /// Month (1-12) omitted in full.
    pub month: Option<u32>,

    /// Additional inclusive day ranges.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ranges: Vec<DateRange>,
}

impl Exclusions {
    /// No exclusions.
    pub fn none() -> Self {
        Self::default()
    }

    /// Excludes a single month.
    pub fn month(month: u32) -> Self {
        Self {
            month: Some(month),
            ranges: Vec::new(),
        }
    }

    /// Returns `true` if `date` must not appear in the output.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.month == Some(date.month()) || self.ranges.iter().any(|r| r.contains(date))
    }

    /// Returns `true` if nothing is excluded.
    pub fn is_empty(&self) -> bool {
        self.month.is_none() && self.ranges.is_empty()
    }
}

/// Configuration for one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PulseConfig {
    /// Year whose full January 1 to December 31 range is emitted (default: 2025)
    pub target_year: i32,

    /// Days left out of the output (default: April)
    pub exclusions: Exclusions,

    /// Transcript path (default: `_chat.txt`)
    pub input_path: PathBuf,

    /// Output document path (default: `galaxy_data.json`)
    pub output_path: PathBuf,

    /// Output document format (default: JSON)
    pub format: OutputFormat,

    /// Read buffer size for the transcript (default: 64KB)
    pub buffer_size: usize,
}

impl Default for PulseConfig {
    fn default() -> Self {
        Self {
            target_year: DEFAULT_TARGET_YEAR,
            exclusions: Exclusions::month(DEFAULT_EXCLUDED_MONTH),
            input_path: PathBuf::from("_chat.txt"),
            output_path: PathBuf::from("galaxy_data.json"),
            format: OutputFormat::Json,
            buffer_size: 64 * 1024, // 64KB
        }
    }
}

impl PulseConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the target year.
    #[must_use]
    pub fn with_target_year(mut self, year: i32) -> Self {
        self.target_year = year;
        self
    }

    /// Sets or clears the excluded month.
    #[must_use]
    pub fn with_excluded_month(mut self, month: Option<u32>) -> Self {
        self.exclusions.month = month;
        self
    }

    /// Adds an excluded day range.
    #[must_use]
    pub fn with_excluded_range(mut self, range: DateRange) -> Self {
        self.exclusions.ranges.push(range);
        self
    }

    /// Sets the transcript path.
    #[must_use]
    pub fn with_input(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = path.into();
        self
    }

    /// Sets the output path.
    #[must_use]
    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    /// Sets the output format.
    #[must_use]
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Sets the read buffer size.
    #[must_use]
    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size;
        self
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`PulseError::InvalidConfig`] when the year is outside what a
    /// calendar date can hold, the excluded month is not 1-12, or the buffer
    /// size is zero.
    pub fn validate(&self) -> Result<()> {
        if NaiveDate::from_ymd_opt(self.target_year, 1, 1).is_none()
            || NaiveDate::from_ymd_opt(self.target_year, 12, 31).is_none()
        {
            return Err(PulseError::invalid_config(
                "target_year",
                format!("{} is not a representable year", self.target_year),
            ));
        }

        if let Some(month) = self.exclusions.month {
            if !(1..=12).contains(&month) {
                return Err(PulseError::invalid_config(
                    "excluded_month",
                    format!("{month} must be between 1 and 12"),
                ));
            }
        }

        if self.buffer_size == 0 {
            return Err(PulseError::invalid_config(
                "buffer_size",
                "must be greater than zero",
            ));
        }

        Ok(())
    }
}
