//! Core data models for the daily series.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::SkipReason;

/// Classification of one message, keyed by its calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatedEvent {
    pub date: NaiveDate,
    pub laugh: bool,
    pub ily: bool,
}

impl DatedEvent {
    pub fn new(date: NaiveDate, laugh: bool, ily: bool) -> Self {
        Self { date, laugh, ily }
    }
}

/// What happened to one transcript message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageOutcome {
    /// The message reached the aggregator.
    Counted(DatedEvent),
    /// The message was dropped before aggregation.
    Skipped(SkipReason),
}

impl MessageOutcome {
    /// Returns the event if the message was counted.
    pub fn event(&self) -> Option<&DatedEvent> {
        match self {
            MessageOutcome::Counted(event) => Some(event),
            MessageOutcome::Skipped(_) => None,
        }
    }

    /// Returns the skip reason if the message was dropped.
    pub fn skip_reason(&self) -> Option<SkipReason> {
        match self {
            MessageOutcome::Counted(_) => None,
            MessageOutcome::Skipped(reason) => Some(*reason),
        }
    }
}

/// Accumulated counts for one day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayCounts {
    pub laugh_count: u32,
    pub ily_count: u32,
}

/// One point of the dense output series.
///
/// Serializes as `{"date": "2025-01-01", "laughCount": 0, "ilyCount": 0}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputRecord {
    /// Calendar day, serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,
    pub laugh_count: u32,
    pub ily_count: u32,
}

impl OutputRecord {
    pub fn new(date: NaiveDate, counts: DayCounts) -> Self {
        Self {
            date,
            laugh_count: counts.laugh_count,
            ily_count: counts.ily_count,
        }
    }

    /// Creates a record with both counts at zero.
    pub fn empty(date: NaiveDate) -> Self {
        Self::new(date, DayCounts::default())
    }

    /// Returns the counts as a [`DayCounts`].
    pub fn counts(&self) -> DayCounts {
        DayCounts {
            laugh_count: self.laugh_count,
            ily_count: self.ily_count,
        }
    }

    /// Returns `true` if both counts are zero.
    pub fn is_empty(&self) -> bool {
        self.laugh_count == 0 && self.ily_count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_output_record_field_names() {
        let record = OutputRecord::new(
            ymd(2025, 2, 1),
            DayCounts {
                laugh_count: 3,
                ily_count: 1,
            },
        );
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"date":"2025-02-01","laughCount":3,"ilyCount":1}"#);
    }

    #[test]
    fn test_output_record_deserialize() {
        let record: OutputRecord =
            serde_json::from_str(r#"{"date":"2025-09-20","laughCount":0,"ilyCount":0}"#).unwrap();
        assert_eq!(record, OutputRecord::empty(ymd(2025, 9, 20)));
        assert!(record.is_empty());
    }

    #[test]
    fn test_outcome_accessors() {
        let event = DatedEvent::new(ymd(2025, 1, 1), true, false);
        let counted = MessageOutcome::Counted(event);
        assert_eq!(counted.event(), Some(&event));
        assert_eq!(counted.skip_reason(), None);

        let skipped = MessageOutcome::Skipped(SkipReason::YearMismatch);
        assert!(skipped.event().is_none());
        assert_eq!(skipped.skip_reason(), Some(SkipReason::YearMismatch));
    }
}
