//! Daily aggregation and calendar expansion.
//!
//! The [`Aggregator`] owns the per-day counters for one run. Events are folded
//! in one at a time; [`Aggregator::expand`] then turns the sparse map into the
//! dense series: one record per day of the target year, in order, with
//! excluded days left out and missing days zero-filled.
//!
//! # Example
//!
//! ```
//! use chatpulse::config::Exclusions;
//! use chatpulse::core::aggregator::Aggregator;
//! use chatpulse::core::models::DatedEvent;
//! use chrono::NaiveDate;
//!
//! let day = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();
//! let mut agg = Aggregator::new();
//! agg.record(DatedEvent::new(day, true, false));
//! agg.record(DatedEvent::new(day, true, true));
//!
//! let series = agg.expand(2025, &Exclusions::month(4));
//! assert_eq!(series.len(), 365 - 30);
//!
//! let feb1 = series.iter().find(|r| r.date == day).unwrap();
//! assert_eq!((feb1.laugh_count, feb1.ily_count), (2, 1));
//! ```

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use super::models::{DatedEvent, DayCounts, OutputRecord};
use crate::config::Exclusions;

/// Per-date counters accumulated over one pass.
pub type DailyCounter = BTreeMap<NaiveDate, DayCounts>;

/// Folds dated events into per-day counts.
#[derive(Debug, Clone, Default)]
pub struct Aggregator {
    counts: DailyCounter,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one classified message.
    ///
    /// The day gets an entry even if neither family matched, and each family
    /// grows by at most one per message.
    pub fn record(&mut self, event: DatedEvent) {
        let entry = self.counts.entry(event.date).or_default();
        if event.laugh {
            entry.laugh_count = entry.laugh_count.saturating_add(1);
        }
        if event.ily {
            entry.ily_count = entry.ily_count.saturating_add(1);
        }
    }

    /// Returns the counts for a day, if any message fell on it.
    pub fn get(&self, date: NaiveDate) -> Option<DayCounts> {
        self.counts.get(&date).copied()
    }

    /// Returns the sparse counter map.
    pub fn counts(&self) -> &DailyCounter {
        &self.counts
    }

    /// Number of days that saw at least one counted message.
    pub fn active_days(&self) -> usize {
        self.counts.len()
    }

    /// Returns `true` if no event was recorded.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Days with at least one match that `exclusions` will hide.
    pub fn excluded_active_days(&self, exclusions: &Exclusions) -> usize {
        self.counts
            .iter()
            .filter(|(date, counts)| {
                exclusions.contains(**date) && (counts.laugh_count > 0 || counts.ily_count > 0)
            })
            .count()
    }

    /// Expands the counters to the dense series for `year`.
    ///
    /// Every day from January 1 to December 31 is visited in ascending order.
    /// Excluded days are omitted; days without messages get zero counts.
    pub fn expand(&self, year: i32, exclusions: &Exclusions) -> Vec<OutputRecord> {
        year_days(year)
            .filter(|date| !exclusions.contains(*date))
            .map(|date| OutputRecord::new(date, self.get(date).unwrap_or_default()))
            .collect()
    }
}

impl Extend<DatedEvent> for Aggregator {
    fn extend<T: IntoIterator<Item = DatedEvent>>(&mut self, iter: T) {
        for event in iter {
            self.record(event);
        }
    }
}

impl FromIterator<DatedEvent> for Aggregator {
    fn from_iter<T: IntoIterator<Item = DatedEvent>>(iter: T) -> Self {
        let mut agg = Self::new();
        agg.extend(iter);
        agg
    }
}

/// Iterates every calendar day of `year` in ascending order.
///
/// Yields nothing for years chrono can't represent.
pub fn year_days(year: i32) -> impl Iterator<Item = NaiveDate> {
    let first = NaiveDate::from_ymd_opt(year, 1, 1);
    first
        .into_iter()
        .flat_map(|d| d.iter_days())
        .take_while(move |d| d.year() == year)
}

/// Number of days in `year` (365 or 366).
pub fn days_in_year(year: i32) -> usize {
    if NaiveDate::from_ymd_opt(year, 2, 29).is_some() {
        366
    } else {
        365
    }
}

/// Number of days in `month` of `year`, or 0 for an invalid month.
pub fn days_in_month(year: i32, month: u32) -> usize {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return 0;
    };
    first
        .iter_days()
        .take_while(|d| d.month() == month)
        .count()
}

/// Expected series length for `year` with `exclusions` applied.
pub fn expected_len(year: i32, exclusions: &Exclusions) -> usize {
    year_days(year).filter(|d| !exclusions.contains(*d)).count()
}
