//! JSON Lines (JSONL) output writer.
//!
//! One `{date, laughCount, ilyCount}` object per line, in day order.

use std::path::Path;

use super::write_atomic;
use crate::core::models::OutputRecord;
use crate::error::Result;

/// Writes the series to a JSONL file.
///
/// # Format
/// ```text
/// {"date":"2025-01-01","laughCount":0,"ilyCount":0}
/// {"date":"2025-01-02","laughCount":3,"ilyCount":1}
/// ```
pub fn write_jsonl(records: &[OutputRecord], output_path: &Path) -> Result<()> {
    let jsonl = to_jsonl(records)?;
    write_atomic(output_path, jsonl.as_bytes())
}

/// Converts the series to a JSONL string, one record per line.
pub fn to_jsonl(records: &[OutputRecord]) -> Result<String> {
    let mut out = String::with_capacity(records.len() * 52);
    for record in records {
        out.push_str(&serde_json::to_string(record)?);
        out.push('\n');
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    #[test]
    fn test_to_jsonl_one_line_per_record() {
        let records: Vec<_> = (1..=3)
            .map(|d| OutputRecord::empty(NaiveDate::from_ymd_opt(2025, 1, d).unwrap()))
            .collect();

        let jsonl = to_jsonl(&records).unwrap();
        let lines: Vec<_> = jsonl.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            r#"{"date":"2025-01-01","laughCount":0,"ilyCount":0}"#
        );
        for line in lines {
            let _: OutputRecord = serde_json::from_str(line).unwrap();
        }
    }

    #[test]
    fn test_write_jsonl() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("series.jsonl");
        let records = vec![OutputRecord::empty(NaiveDate::from_ymd_opt(2025, 5, 5).unwrap())];

        write_jsonl(&records, &path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.ends_with('\n'));
        assert!(content.contains("2025-05-05"));
    }
}
