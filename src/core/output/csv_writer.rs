//! CSV output writer.

use std::io;
use std::path::Path;

use super::write_atomic;
use crate::core::models::OutputRecord;
use crate::error::{PulseError, Result};

/// Writes the series to a CSV file.
///
/// # Format
/// - Delimiter: `,`
/// - Columns: `date`, `laughCount`, `ilyCount`
/// - Encoding: UTF-8
pub fn write_csv(records: &[OutputRecord], output_path: &Path) -> Result<()> {
    let csv = to_csv(records)?;
    write_atomic(output_path, csv.as_bytes())
}

/// Converts the series to a CSV string with a header row.
pub fn to_csv(records: &[OutputRecord]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(Vec::new());

    if records.is_empty() {
        writer.write_record(["date", "laughCount", "ilyCount"])?;
    }
    for record in records {
        writer.serialize(record)?;
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    String::from_utf8(bytes)
        .map_err(|e| PulseError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}
