//! Output formats for the daily series.
//!
//! The format is picked explicitly or inferred from the sink path, then
//! [`write_to_format`] routes the series to the matching writer in
//! [`crate::core::output`].
//!
//! ```rust
//! # fn example() -> chatpulse::Result<()> {
//! use chatpulse::format::{OutputFormat, write_to_format};
//! use chatpulse::OutputRecord;
//! use chrono::NaiveDate;
//!
//! let series = vec![OutputRecord::empty(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap())];
//!
//! let format = OutputFormat::from_path("galaxy_data.jsonl")?;
//! assert_eq!(format, OutputFormat::Jsonl);
//! write_to_format(&series, "galaxy_data.jsonl", format)?;
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::models::OutputRecord;
use crate::error::{PulseError, Result};

/// Serialization of the series.
///
/// All three keep the `date`, `laughCount`, `ilyCount` field names in that
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// Pretty-printed array with a 2-space indent
    #[default]
    Json,
    /// One compact object per line
    Jsonl,
    /// Comma-separated with a header row
    Csv,
}

impl OutputFormat {
    const ALL: [OutputFormat; 3] = [OutputFormat::Json, OutputFormat::Jsonl, OutputFormat::Csv];

    /// Canonical file extension, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
            OutputFormat::Csv => "csv",
        }
    }

    /// Every supported format.
    pub fn all() -> &'static [OutputFormat] {
        &Self::ALL
    }

    /// Infers the format from the extension of `path`.
    ///
    /// `.ndjson` is accepted as JSON Lines. Matching ignores case.
    ///
    /// ```rust
    /// use chatpulse::format::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::from_path("series.CSV").unwrap(), OutputFormat::Csv);
    /// assert!(OutputFormat::from_path("series.txt").is_err());
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();

        ext.parse::<Self>().map_err(|_| {
            PulseError::invalid_format(
                "output",
                format!("cannot infer a format from extension '.{ext}'"),
            )
        })
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.extension().to_uppercase())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        if name == "ndjson" {
            return Ok(OutputFormat::Jsonl);
        }
        Self::ALL
            .into_iter()
            .find(|format| format.extension() == name)
            .ok_or_else(|| {
                let known: Vec<_> = Self::ALL.iter().map(|f| f.extension()).collect();
                format!("unknown format '{s}', expected one of: {}", known.join(", "))
            })
    }
}

/// Writes the series to `path` in `format`, replacing the file atomically.
///
/// # Errors
///
/// [`PulseError::SinkWrite`] if the sink can't be written, or
/// [`PulseError::InvalidFormat`] for CSV when the `csv-output` feature is off.
pub fn write_to_format(
    records: &[OutputRecord],
    path: impl AsRef<Path>,
    format: OutputFormat,
) -> Result<()> {
    use crate::core::output;

    let path = path.as_ref();
    match format {
        OutputFormat::Json => output::write_json(records, path),
        OutputFormat::Jsonl => output::write_jsonl(records, path),
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => output::write_csv(records, path),
        #[allow(unreachable_patterns)]
        _ => Err(not_compiled_in(format)),
    }
}

/// Renders the series as a string in `format`.
pub fn to_format_string(records: &[OutputRecord], format: OutputFormat) -> Result<String> {
    use crate::core::output;

    match format {
        OutputFormat::Json => output::to_json(records),
        OutputFormat::Jsonl => output::to_jsonl(records),
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => output::to_csv(records),
        #[allow(unreachable_patterns)]
        _ => Err(not_compiled_in(format)),
    }
}

#[allow(dead_code)]
fn not_compiled_in(format: OutputFormat) -> PulseError {
    PulseError::invalid_format(
        "output",
        format!("{format} output needs the 'csv-output' feature"),
    )
}
