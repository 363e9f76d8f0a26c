//! Run statistics.

use serde::Serialize;

use crate::error::SkipReason;
use crate::streaming::LineStats;

/// Counters collected over one pipeline run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    /// All transcript lines read.
    pub lines_read: usize,
    /// Empty lines.
    pub blank_lines: usize,
    /// Lines that produced a message record.
    pub messages_extracted: usize,
    /// Non-blank lines without a header.
    pub line_mismatches: usize,
    /// Messages whose timestamp matched no format.
    pub timestamp_failures: usize,
    /// Messages outside the target year.
    pub year_mismatches: usize,
    /// Messages that reached the aggregator.
    pub messages_counted: usize,
    /// Counted messages classified as laugh.
    pub laugh_messages: usize,
    /// Counted messages classified as ILY.
    pub ily_messages: usize,
    /// Days with at least one counted message.
    pub active_days: usize,
    /// Days with a match that fall inside the exclusions.
    pub excluded_active_days: usize,
    /// Records in the emitted series.
    pub records_emitted: usize,
}

impl RunStats {
    /// Adds the extractor's line counters to these stats.
    pub fn absorb_lines(&mut self, lines: LineStats) {
        self.lines_read += lines.lines_read;
        self.blank_lines += lines.blank_lines;
        self.messages_extracted += lines.messages_extracted;
        self.line_mismatches += lines.line_mismatches;
    }

    /// Counts one skipped message.
    pub fn record_skip(&mut self, reason: SkipReason) {
        match reason {
            SkipReason::LineMismatch => self.line_mismatches += 1,
            SkipReason::TimestampParseFailure => self.timestamp_failures += 1,
            SkipReason::YearMismatch => self.year_mismatches += 1,
        }
    }

    /// Number of lines or messages dropped for `reason`.
    pub fn skipped_for(&self, reason: SkipReason) -> usize {
        match reason {
            SkipReason::LineMismatch => self.line_mismatches,
            SkipReason::TimestampParseFailure => self.timestamp_failures,
            SkipReason::YearMismatch => self.year_mismatches,
        }
    }

    /// Total dropped across all reasons.
    pub fn skipped(&self) -> usize {
        SkipReason::all().iter().map(|r| self.skipped_for(*r)).sum()
    }

    /// Share of extracted messages that were counted, as a percentage.
    pub fn counted_ratio(&self) -> f64 {
        if self.messages_extracted == 0 {
            return 0.0;
        }
        (self.messages_counted as f64 / self.messages_extracted as f64) * 100.0
    }
}
