//! Unified error types for chatpulse.
//!
//! Two kinds of failure exist in a run:
//!
//! - **Run-level** failures are returned as [`PulseError`] and abort the run
//!   (missing transcript, unwritable sink, nothing left to emit, bad config).
//! - **Per-message** failures are never errors. They are recovered locally and
//!   recorded as a [`SkipReason`] so they stay countable in
//!   [`RunStats`](crate::core::RunStats).

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatpulse operations.
///
/// # Example
///
/// ```rust
/// use chatpulse::error::Result;
/// use chatpulse::OutputRecord;
///
/// fn my_function() -> Result<Vec<OutputRecord>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, PulseError>;

/// The error type for all chatpulse run-level failures.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PulseError {
    /// The transcript could not be opened.
    ///
    /// Either the path does not exist or it is not readable.
    #[error("Transcript not found or unreadable: {}: {source}", path.display())]
    SourceNotFound {
        /// The transcript path that was requested
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// No message survived extraction and filtering.
    ///
    /// The output step is skipped entirely rather than writing a degenerate
    /// document.
    #[error("No messages from {year} found in transcript; nothing written")]
    EmptyResult {
        /// The target year that was filtered on
        year: i32,
    },

    /// The output sink could not be written.
    #[error("Failed to write output to {}: {source}", path.display())]
    SinkWrite {
        /// The sink path
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A configuration value is out of range.
    #[error("Invalid configuration for '{field}': {message}")]
    InvalidConfig {
        /// Name of the offending option
        field: &'static str,
        /// What's wrong with it
        message: String,
    },

    /// The requested output format is unknown or not compiled in.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// What kind of format was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// A date in an exclusion range could not be parsed.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// A classifier or header pattern failed to compile.
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// An I/O error occurred while reading the transcript.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV serialization error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl PulseError {
    /// Creates a source-not-found error for the given transcript path.
    pub fn source_not_found(path: impl Into<PathBuf>, source: io::Error) -> Self {
        PulseError::SourceNotFound {
            path: path.into(),
            source,
        }
    }

    /// Creates a sink write error for the given output path.
    pub fn sink_write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        PulseError::SinkWrite {
            path: path.into(),
            source,
        }
    }

    /// Creates an invalid configuration error.
    pub fn invalid_config(field: &'static str, message: impl Into<String>) -> Self {
        PulseError::InvalidConfig {
            field,
            message: message.into(),
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        PulseError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        PulseError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Returns `true` if the transcript could not be opened.
    pub fn is_source_not_found(&self) -> bool {
        matches!(self, PulseError::SourceNotFound { .. })
    }

    /// Returns `true` if the run produced nothing to emit.
    pub fn is_empty_result(&self) -> bool {
        matches!(self, PulseError::EmptyResult { .. })
    }

    /// Returns `true` if the output sink could not be written.
    pub fn is_sink_write(&self) -> bool {
        matches!(self, PulseError::SinkWrite { .. })
    }

    /// Returns `true` if this is a configuration error.
    pub fn is_invalid_config(&self) -> bool {
        matches!(
            self,
            PulseError::InvalidConfig { .. } | PulseError::InvalidDate { .. }
        )
    }
}

/// Why a transcript line or message did not reach the aggregator.
///
/// Skips are expected and never fatal; the pipeline counts them per reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SkipReason {
    /// The line does not start with a `[date, time] sender:` header.
    LineMismatch,
    /// The header matched but its timestamp fits no known format.
    TimestampParseFailure,
    /// The timestamp parsed, but falls outside the target year.
    YearMismatch,
}

impl SkipReason {
    /// Returns all skip reasons in reporting order.
    pub fn all() -> &'static [SkipReason] {
        &[
            SkipReason::LineMismatch,
            SkipReason::TimestampParseFailure,
            SkipReason::YearMismatch,
        ]
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::LineMismatch => write!(f, "line mismatch"),
            SkipReason::TimestampParseFailure => write!(f, "timestamp parse failure"),
            SkipReason::YearMismatch => write!(f, "year mismatch"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_source_not_found_display() {
        let err = PulseError::source_not_found(
            "/missing/_chat.txt",
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );
        let display = err.to_string();
        assert!(display.contains("/missing/_chat.txt"));
        assert!(display.contains("no such file"));
        assert!(err.is_source_not_found());
    }

    #[test]
    fn test_empty_result_display() {
        let err = PulseError::EmptyResult { year: 2025 };
        assert!(err.to_string().contains("2025"));
        assert!(err.is_empty_result());
        assert!(!err.is_sink_write());
    }

    #[test]
    fn test_sink_write_has_source() {
        let err = PulseError::sink_write(
            "out/galaxy.json",
            io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
        );
        assert!(err.is_sink_write());
        assert!(err.source().is_some());
        assert!(err.to_string().contains("out/galaxy.json"));
    }

    #[test]
    fn test_invalid_config_display() {
        let err = PulseError::invalid_config("excluded_month", "must be between 1 and 12");
        let display = err.to_string();
        assert!(display.contains("excluded_month"));
        assert!(display.contains("between 1 and 12"));
        assert!(err.is_invalid_config());
    }

    #[test]
    fn test_invalid_date_display() {
        let err = PulseError::invalid_date("2025-13-01");
        assert!(err.to_string().contains("2025-13-01"));
        assert!(err.to_string().contains("YYYY-MM-DD"));
        assert!(err.is_invalid_config());
    }

    #[test]
    fn test_invalid_format_display() {
        let err = PulseError::invalid_format("output", "unknown extension '.txt'");
        let display = err.to_string();
        assert!(display.contains("Invalid output format"));
        assert!(display.contains(".txt"));
    }

    #[test]
    fn test_io_from() {
        let err: PulseError = io::Error::other("boom").into();
        assert!(matches!(err, PulseError::Io(_)));
    }

    #[test]
    fn test_skip_reason_display() {
        assert_eq!(SkipReason::LineMismatch.to_string(), "line mismatch");
        assert_eq!(
            SkipReason::TimestampParseFailure.to_string(),
            "timestamp parse failure"
        );
        assert_eq!(SkipReason::YearMismatch.to_string(), "year mismatch");
        assert_eq!(SkipReason::all().len(), 3);
    }
}
