//! Output writers for the daily series.
//!
//! - [`write_json`] / [`to_json`] - pretty-printed JSON array (default)
//! - [`write_jsonl`] / [`to_jsonl`] - JSON Lines
//! - [`write_csv`] / [`to_csv`] - CSV with header - requires `csv-output` feature
//!
//! Every `write_*` function replaces the sink atomically: the document is
//! written to a temporary file next to the target and renamed over it. If
//! anything fails, the previous content of the sink is left as it was.
//!
//! # Example
//!
//! ```rust,no_run
//! use chatpulse::core::output::{to_json, write_json};
//! use chatpulse::OutputRecord;
//! use chrono::NaiveDate;
//!
//! let series = vec![OutputRecord::empty(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap())];
//!
//! write_json(&series, "galaxy_data.json".as_ref())?;
//! let json = to_json(&series)?;
//! # Ok::<(), chatpulse::PulseError>(())
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
mod json_writer;
mod jsonl_writer;

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::{Builder, NamedTempFile};
use tracing::debug;

use crate::error::{PulseError, Result};

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
pub use json_writer::{to_json, write_json};
pub use jsonl_writer::{to_jsonl, write_jsonl};

/// Mode for a sink that doesn't exist yet, before the umask applies.
#[cfg(unix)]
const NEW_SINK_MODE: u32 = 0o644;

/// Replaces `path` with `contents` via temp file and rename.
///
/// An existing sink keeps its permissions. A new one is created with
/// `0o644` minus the process umask on Unix.
///
/// # Errors
///
/// Returns [`PulseError::SinkWrite`] for any failure; the temporary file is
/// removed and the existing sink is untouched.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = sibling_temp(dir, path).map_err(|e| PulseError::sink_write(path, e))?;
    tmp.write_all(contents)
        .and_then(|()| tmp.flush())
        .map_err(|e| PulseError::sink_write(path, e))?;
    tmp.persist(path)
        .map_err(|e| PulseError::sink_write(path, e.error))?;

    debug!(path = %path.display(), bytes = contents.len(), "output written");
    Ok(())
}

fn sibling_temp(dir: &Path, path: &Path) -> io::Result<NamedTempFile> {
    let mut builder = Builder::new();
    builder.prefix(".chatpulse");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(NEW_SINK_MODE));
    }
    let tmp = builder.tempfile_in(dir)?;

    if let Ok(meta) = fs::metadata(path) {
        tmp.as_file().set_permissions(meta.permissions())?;
    }
    Ok(tmp)
}
