//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`OutputFormat`] - Output format options
//!
//! [`Args::to_config`] turns parsed arguments into a
//! [`PulseConfig`](crate::config::PulseConfig), so the binary stays a thin
//! wrapper around the library.
//!
//! ```rust
//! use chatpulse::cli::Args;
//! use clap::Parser;
//!
//! let args = Args::parse_from(["chatpulse", "_chat.txt", "-y", "2024", "--no-exclude"]);
//! let config = args.to_config().unwrap();
//! assert_eq!(config.target_year, 2024);
//! assert!(config.exclusions.is_empty());
//! ```

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_EXCLUDED_MONTH, DEFAULT_TARGET_YEAR, DateRange, PulseConfig};
use crate::error::Result;

/// Turn a WhatsApp chat export into a daily series of laughs and
/// "I love you"s for one year.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatpulse")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatpulse _chat.txt
    chatpulse _chat.txt -o galaxy_data.json -y 2025
    chatpulse _chat.txt --no-exclude --format csv -o series.csv
    chatpulse _chat.txt --exclude-range 2025-12-24..2025-12-26 --stats")]
pub struct Args {
    /// Path to the WhatsApp transcript
    #[arg(default_value = "_chat.txt")]
    pub input: PathBuf,

    /// Path to the output file
    #[arg(short, long, default_value = "galaxy_data.json")]
    pub output: PathBuf,

    /// Year to emit
    #[arg(short = 'y', long, default_value_t = DEFAULT_TARGET_YEAR)]
    pub year: i32,

    /// Month (1-12) left out of the series
    #[arg(
        long,
        value_name = "MONTH",
        default_value_t = DEFAULT_EXCLUDED_MONTH,
        conflicts_with = "no_exclude"
    )]
    pub exclude_month: u32,

    /// Emit every day of the year
    #[arg(long)]
    pub no_exclude: bool,

    /// Extra days to leave out (YYYY-MM-DD..YYYY-MM-DD), repeatable
    #[arg(long, value_name = "RANGE")]
    pub exclude_range: Vec<String>,

    /// Output format; inferred from the output extension when omitted
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Print per-reason skip counts
    #[arg(long)]
    pub stats: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Builds the run configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PulseError::InvalidDate`](crate::PulseError::InvalidDate) for a
    /// malformed `--exclude-range`.
    pub fn to_config(&self) -> Result<PulseConfig> {
        let excluded_month = (!self.no_exclude).then_some(self.exclude_month);

        let mut config = PulseConfig::new()
            .with_input(&self.input)
            .with_output(&self.output)
            .with_target_year(self.year)
            .with_excluded_month(excluded_month)
            .with_format(self.resolve_format());

        for range in &self.exclude_range {
            config = config.with_excluded_range(DateRange::parse(range)?);
        }

        Ok(config)
    }

    /// Explicit `--format`, else the output extension, else JSON.
    pub fn resolve_format(&self) -> crate::format::OutputFormat {
        match self.format {
            Some(format) => format.into(),
            None => crate::format::OutputFormat::from_path(&self.output).unwrap_or_default(),
        }
    }
}

/// Output format options.
///
/// - [`Json`](OutputFormat::Json) - Pretty-printed array (default)
/// - [`Jsonl`](OutputFormat::Jsonl) - One JSON object per line
/// - [`Csv`](OutputFormat::Csv) - `date,laughCount,ilyCount` table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON array of records
    #[default]
    Json,

    /// JSON Lines - one record per line
    #[value(alias = "ndjson")]
    Jsonl,

    /// CSV with a header row
    Csv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", crate::format::OutputFormat::from(*self))
    }
}

// Conversion to library format type
impl From<OutputFormat> for crate::format::OutputFormat {
    fn from(format: OutputFormat) -> crate::format::OutputFormat {
        match format {
            OutputFormat::Json => crate::format::OutputFormat::Json,
            OutputFormat::Jsonl => crate::format::OutputFormat::Jsonl,
            OutputFormat::Csv => crate::format::OutputFormat::Csv,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("chatpulse").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn test_command_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let config = parse(&[]).to_config().unwrap();
        assert_eq!(config, PulseConfig::default());
    }

    #[test]
    fn test_no_exclude() {
        let config = parse(&["chat.txt", "--no-exclude"]).to_config().unwrap();
        assert_eq!(config.exclusions.month, None);
        assert_eq!(config.input_path, PathBuf::from("chat.txt"));
    }

    #[test]
    fn test_exclude_month_conflicts_with_no_exclude() {
        let result = Args::try_parse_from([
            "chatpulse",
            "chat.txt",
            "--exclude-month",
            "5",
            "--no-exclude",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_exclude_ranges() {
        let config = parse(&[
            "--exclude-range",
            "2025-12-24..2025-12-26",
            "--exclude-range",
            "2025-01-01",
        ])
        .to_config()
        .unwrap();
        assert_eq!(config.exclusions.ranges.len(), 2);
        assert_eq!(config.exclusions.month, Some(4));
    }

    #[test]
    fn test_bad_range_is_invalid_config() {
        let err = parse(&["--exclude-range", "2025-02-30"])
            .to_config()
            .unwrap_err();
        assert!(err.is_invalid_config());
    }

    #[test]
    fn test_format_inference() {
        assert_eq!(
            parse(&["-o", "series.csv"]).resolve_format(),
            crate::format::OutputFormat::Csv
        );
        assert_eq!(
            parse(&["-o", "series.txt"]).resolve_format(),
            crate::format::OutputFormat::Json
        );
        assert_eq!(
            parse(&["-o", "series.csv", "-f", "jsonl"]).resolve_format(),
            crate::format::OutputFormat::Jsonl
        );
        assert_eq!(
            parse(&["-f", "ndjson"]).resolve_format(),
            crate::format::OutputFormat::Jsonl
        );
    }

    #[test]
    fn test_format_display() {
        assert_eq!(OutputFormat::Json.to_string(), "JSON");
        assert_eq!(OutputFormat::Csv.to_string(), "CSV");
    }
}
