//! Core processing logic for chatpulse.
//!
//! This module contains:
//! - [`classifier`] - Laugh and ILY rule sets
//! - [`models`] - Dated events, per-day counts and output records
//! - [`aggregator`] - Daily counting and calendar expansion
//! - [`stats`] - Run statistics
//! - [`pipeline`] - Extraction to output, end to end
//! - [`output`] - Format writers (JSON, JSONL, CSV)
//!
//! # Quick Start
//!
//! ```rust
//! use chatpulse::core::{Pipeline, classify};
//! use chatpulse::config::PulseConfig;
//!
//! assert!(classify("lmao").is_laugh);
//!
//! let pipeline = Pipeline::new(PulseConfig::new())?;
//! let analysis = pipeline.analyze_str("[14/02/2025, 9:00:00 PM] Sam: ily")?;
//! assert_eq!(analysis.stats.ily_messages, 1);
//! # Ok::<(), chatpulse::PulseError>(())
//! ```

pub mod aggregator;
pub mod classifier;
pub mod models;
pub mod output;
pub mod pipeline;
pub mod stats;

pub use aggregator::{Aggregator, DailyCounter};
pub use classifier::{Classification, Family, RuleSet, classify, default_rules};
pub use models::{DatedEvent, DayCounts, MessageOutcome, OutputRecord};
pub use pipeline::{Analysis, Pipeline, process_message, run};
pub use stats::RunStats;

#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
pub use output::{to_json, to_jsonl, write_json, write_jsonl};
