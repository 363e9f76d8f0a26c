//! # Chatpulse
//!
//! A Rust library for turning a WhatsApp chat export into a per-day series of
//! laugh and "I love you" counts for one calendar year.
//!
//! ## Overview
//!
//! A run reads the plain-text transcript line by line, keeps the lines that
//! start a message, normalizes each timestamp to a calendar date, classifies
//! the body against two pattern families, and counts per day. The result is
//! expanded to one record for every day of the target year (minus excluded
//! days) and written as JSON, JSON Lines or CSV.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chatpulse::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let config = PulseConfig::new()
//!         .with_input("_chat.txt")
//!         .with_output("galaxy_data.json")
//!         .with_target_year(2025);
//!
//!     let analysis = chatpulse::core::run(config)?;
//!     println!("saved {} points", analysis.records.len());
//!     Ok(())
//! }
//! ```
//!
//! ## In-Memory Analysis
//!
//! ```rust
//! use chatpulse::prelude::*;
//!
//! let transcript = "[01/02/2025, 10:15:00 AM] Alice: hahaha\n\
//!                   [01/02/2025, 10:16:00 AM] Bob: love u";
//!
//! let analysis = Pipeline::new(PulseConfig::new())?.analyze_str(transcript)?;
//! let feb1 = analysis
//!     .records
//!     .iter()
//!     .find(|r| r.date.to_string() == "2025-02-01")
//!     .unwrap();
//! assert_eq!((feb1.laugh_count, feb1.ily_count), (1, 1));
//! # Ok::<(), chatpulse::PulseError>(())
//! ```
//!
//! ## Module Structure
//!
//! - [`parsing`] - Header matching and timestamp normalization
//! - [`streaming`] - [`TranscriptStream`](streaming::TranscriptStream), the line-by-line extractor
//! - [`core`] - Classifier, aggregator, pipeline and output writers
//! - [`config`] - [`PulseConfig`](config::PulseConfig) and exclusions
//! - [`format`] - [`OutputFormat`](format::OutputFormat) and format dispatch
//! - [`error`] - [`PulseError`] and [`Result`]
//! - [`cli`] - CLI argument types (requires `cli` feature)
//! - [`prelude`] - Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
#[cfg(feature = "cli")]
pub mod logging;
pub mod message;
pub mod parsing;
pub mod streaming;

// Re-export the main types at the crate root for convenience
pub use crate::core::models::OutputRecord;
pub use error::{PulseError, Result};
pub use message::MessageRecord;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatpulse::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{MessageRecord, OutputRecord};

    pub use crate::error::{PulseError, Result, SkipReason};

    pub use crate::config::{DateRange, Exclusions, PulseConfig};

    pub use crate::core::{
        Aggregator, Analysis, Classification, DatedEvent, DayCounts, Pipeline, RunStats,
        classify,
    };

    pub use crate::streaming::TranscriptStream;

    pub use crate::format::{OutputFormat, to_format_string, write_to_format};
}
