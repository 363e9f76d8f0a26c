//! JSON output writer.

use std::path::Path;

use super::write_atomic;
use crate::core::models::OutputRecord;
use crate::error::Result;

/// Writes the series to a JSON file as an array.
///
/// # Format
/// ```json
/// [
///   {
///     "date": "2025-01-01",
///     "laughCount": 0,
///     "ilyCount": 0
///   }
/// ]
/// ```
pub fn write_json(records: &[OutputRecord], output_path: &Path) -> Result<()> {
    let json = to_json(records)?;
    write_atomic(output_path, json.as_bytes())
}

/// Converts the series to a pretty-printed JSON array (2-space indent).
///
/// Same format as `write_json`, but returns a String instead of writing to file.
pub fn to_json(records: &[OutputRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::DayCounts;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    fn sample() -> Vec<OutputRecord> {
        vec![
            OutputRecord::new(
                NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
                DayCounts {
                    laugh_count: 2,
                    ily_count: 0,
                },
            ),
            OutputRecord::empty(NaiveDate::from_ymd_opt(2025, 2, 2).unwrap()),
        ]
    }

    #[test]
    fn test_to_json_shape() {
        let json = to_json(&sample()).unwrap();
        assert!(json.starts_with('['));
        assert!(json.contains(r#""date": "2025-02-01""#));
        assert!(json.contains(r#""laughCount": 2"#));
        assert!(json.contains(r#""ilyCount": 0"#));
        assert!(json.find("2025-02-01").unwrap() < json.find("2025-02-02").unwrap());
    }

    #[test]
    fn test_to_json_empty() {
        assert_eq!(to_json(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_write_json_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("galaxy_data.json");

        write_json(&sample(), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: Vec<OutputRecord> = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, sample());
    }
}
