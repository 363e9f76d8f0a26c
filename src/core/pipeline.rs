//! The end-to-end pipeline.
//!
//! ```text
//! TranscriptStream -> normalize_timestamp + classify -> Aggregator -> expand -> writer
//! ```
//!
//! Per-message failures become [`MessageOutcome::Skipped`] and are counted;
//! only run-level preconditions surface as [`PulseError`].
//!
//! # Example
//!
//! ```rust
//! use chatpulse::config::PulseConfig;
//! use chatpulse::core::pipeline::Pipeline;
//!
//! let pipeline = Pipeline::new(PulseConfig::new().with_target_year(2025))?;
//! let analysis = pipeline.analyze_str("[01/02/2025, 10:15:00 AM] Alice: hahaha")?;
//!
//! assert_eq!(analysis.stats.laugh_messages, 1);
//! assert_eq!(analysis.records.len(), 365 - 30);
//! # Ok::<(), chatpulse::PulseError>(())
//! ```

use std::io::BufRead;

use tracing::{debug, info, warn};

use super::aggregator::Aggregator;
use super::classifier::{RuleSet, default_rules};
use super::models::{DatedEvent, MessageOutcome, OutputRecord};
use super::stats::RunStats;
use crate::MessageRecord;
use crate::config::PulseConfig;
use crate::error::{PulseError, Result};
use crate::format::write_to_format;
use crate::parsing::timestamp::normalize_timestamp;
use crate::streaming::TranscriptStream;

/// Dense series plus the statistics of the run that produced it.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub records: Vec<OutputRecord>,
    pub stats: RunStats,
}

impl Analysis {
    /// Returns `true` if no message survived filtering.
    pub fn is_empty(&self) -> bool {
        self.stats.messages_counted == 0
    }
}

/// Classifies one message against the target year.
///
/// Pure: no counters are touched.
pub fn process_message(record: &MessageRecord, target_year: i32, rules: &RuleSet) -> MessageOutcome {
    match normalize_timestamp(&record.timestamp, target_year) {
        Ok(date) => {
            let c = rules.classify(&record.body);
            MessageOutcome::Counted(DatedEvent::new(date, c.is_laugh, c.is_ily))
        }
        Err(reason) => MessageOutcome::Skipped(reason),
    }
}

/// Runs extraction, classification and aggregation for one configuration.
pub struct Pipeline {
    config: PulseConfig,
    rules: &'static RuleSet,
}

impl Pipeline {
    /// Creates a pipeline with the built-in classifier rules.
    ///
    /// # Errors
    ///
    /// Returns [`PulseError::InvalidConfig`] if the configuration is invalid.
    pub fn new(config: PulseConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            rules: default_rules(),
        })
    }

    /// Returns the configuration.
    pub fn config(&self) -> &PulseConfig {
        &self.config
    }

    /// Analyzes the configured transcript file.
    pub fn analyze_file(&self) -> Result<Analysis> {
        let stream =
            TranscriptStream::open_with_buffer(&self.config.input_path, self.config.buffer_size)?;
        self.analyze_stream(stream)
    }

    /// Analyzes an in-memory transcript.
    pub fn analyze_str(&self, content: &str) -> Result<Analysis> {
        self.analyze_stream(TranscriptStream::from_str(content))
    }

    /// Analyzes any transcript stream; the stream is consumed and dropped.
    pub fn analyze_stream<R: BufRead>(&self, mut stream: TranscriptStream<R>) -> Result<Analysis> {
        let year = self.config.target_year;
        let mut aggregator = Aggregator::new();
        let mut stats = RunStats::default();

        while let Some(record) = stream.next() {
            let record = record?;
            let line = stream.stats().lines_read;
            match process_message(&record, year, self.rules) {
                MessageOutcome::Counted(event) => {
                    stats.messages_counted += 1;
                    stats.laugh_messages += usize::from(event.laugh);
                    stats.ily_messages += usize::from(event.ily);
                    aggregator.record(event);
                }
                MessageOutcome::Skipped(reason) => {
                    debug!(line, timestamp = %record.timestamp, %reason, "message skipped");
                    stats.record_skip(reason);
                }
            }
        }

        let line_stats = stream.stats();
        drop(stream);
        stats.absorb_lines(line_stats);

        let exclusions = &self.config.exclusions;
        let records = aggregator.expand(year, exclusions);

        stats.active_days = aggregator.active_days();
        stats.excluded_active_days = aggregator.excluded_active_days(exclusions);
        stats.records_emitted = records.len();

        if stats.excluded_active_days > 0 {
            warn!(
                days = stats.excluded_active_days,
                "days with laughs or ILYs fall inside the exclusions and are omitted"
            );
        }

        info!(
            year,
            messages = stats.messages_extracted,
            counted = stats.messages_counted,
            skipped = stats.skipped(),
            records = stats.records_emitted,
            "transcript analyzed"
        );

        Ok(Analysis { records, stats })
    }

    /// Analyzes the transcript and writes the series to the configured sink.
    ///
    /// # Errors
    ///
    /// - [`PulseError::SourceNotFound`] if the transcript can't be opened
    /// - [`PulseError::EmptyResult`] if no message survived filtering; nothing
    ///   is written in that case
    /// - [`PulseError::SinkWrite`] if the output can't be written
    pub fn run(&self) -> Result<Analysis> {
        let analysis = self.analyze_file()?;

        if analysis.is_empty() {
            return Err(PulseError::EmptyResult {
                year: self.config.target_year,
            });
        }

        write_to_format(&analysis.records, &self.config.output_path, self.config.format)?;
        info!(
            path = %self.config.output_path.display(),
            records = analysis.records.len(),
            "series written"
        );

        Ok(analysis)
    }
}

/// Runs the full pipeline for `config`.
///
/// Shorthand for [`Pipeline::new`] followed by [`Pipeline::run`].
pub fn run(config: PulseConfig) -> Result<Analysis> {
    Pipeline::new(config)?.run()
}
