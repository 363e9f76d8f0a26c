//! End-to-end CLI tests for chatpulse.
//!
//! These tests run the actual binary with various arguments and check the
//! written document, stdout summary and exit status.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test --test cli_e2e
//! ```

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::{TempDir, tempdir};

// ============================================================================
// Test Fixtures
// ============================================================================

/// Creates a temporary directory with transcript fixtures.
fn setup_fixtures() -> TempDir {
    let dir = tempdir().expect("Failed to create temp dir");

    let chat = "\u{200E}[01/01/2025, 08:00:00] Messages and calls are end-to-end encrypted
[01/02/2025, 10:15:00 AM] Alice: hahaha that's great
[15/06/2025, 9:05:30 PM] Bob: i love you so much
[10/04/2025, 08:00:00 AM] Carol: haha love u
[31/12/2024, 11:59:59 PM] Alice: lol
[02/02/2025, 10:15:00 a.m.] Bob: broken
";
    fs::write(dir.path().join("_chat.txt"), chat).unwrap();

    let old = "[01/02/2024, 10:15:00 AM] Alice: hahaha\n";
    fs::write(dir.path().join("old.txt"), old).unwrap();

    dir
}

fn chatpulse_cmd() -> Command {
    let cmd = std::process::Command::new(env!("CARGO_BIN_EXE_chatpulse"));
    Command::from_std(cmd)
}

fn output_path(dir: &TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}

fn read_json(path: &PathBuf) -> Vec<serde_json::Value> {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

// ============================================================================
// Basic Functionality Tests
// ============================================================================

mod basic_functionality {
    use super::*;

    #[test]
    fn test_default_run() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("_chat.txt");
        let output = output_path(&fixtures, "galaxy_data.json");

        chatpulse_cmd()
            .args([input.to_str().unwrap(), "-o", output.to_str().unwrap()])
            .assert()
            .success()
            .stdout(predicate::str::contains("saved 335 points"));

        let series = read_json(&output);
        assert_eq!(series.len(), 335);
        let feb1 = series.iter().find(|r| r["date"] == "2025-02-01").unwrap();
        assert_eq!(feb1["laughCount"], 1);
        assert!(series.iter().all(|r| !r["date"].as_str().unwrap().starts_with("2025-04")));
    }

    #[test]
    fn test_default_paths_in_working_dir() {
        let fixtures = setup_fixtures();

        chatpulse_cmd()
            .current_dir(fixtures.path())
            .assert()
            .success();

        assert!(fixtures.path().join("galaxy_data.json").exists());
    }

    #[test]
    fn test_year_and_no_exclude() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("old.txt");
        let output = output_path(&fixtures, "out.json");

        chatpulse_cmd()
            .args([
                input.to_str().unwrap(),
                "-o",
                output.to_str().unwrap(),
                "-y",
                "2024",
                "--no-exclude",
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("saved 366 points"));

        assert_eq!(read_json(&output).len(), 366);
    }

    #[test]
    fn test_exclude_range() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("_chat.txt");
        let output = output_path(&fixtures, "out.json");

        chatpulse_cmd()
            .args([
                input.to_str().unwrap(),
                "-o",
                output.to_str().unwrap(),
                "--exclude-range",
                "2025-12-24..2025-12-26",
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("saved 332 points"));
    }

    #[test]
    fn test_stats_flag() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("_chat.txt");
        let output = output_path(&fixtures, "out.json");

        chatpulse_cmd()
            .args([input.to_str().unwrap(), "-o", output.to_str().unwrap(), "--stats"])
            .assert()
            .success()
            .stdout(predicate::str::contains("line mismatch:"))
            .stdout(predicate::str::contains("timestamp parse failure:"))
            .stdout(predicate::str::contains("year mismatch:"));
    }

    #[test]
    fn test_excluded_activity_is_reported() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("_chat.txt");
        let output = output_path(&fixtures, "out.json");

        chatpulse_cmd()
            .args([input.to_str().unwrap(), "-o", output.to_str().unwrap()])
            .assert()
            .success()
            .stdout(predicate::str::contains("inside the exclusions"));
    }
}

// ============================================================================
// Output Format Tests
// ============================================================================

mod output_formats {
    use super::*;

    #[test]
    fn test_output_jsonl() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("_chat.txt");
        let output = output_path(&fixtures, "out.jsonl");

        chatpulse_cmd()
            .args([input.to_str().unwrap(), "-o", output.to_str().unwrap()])
            .assert()
            .success();

        let content = fs::read_to_string(&output).unwrap();
        assert_eq!(content.lines().count(), 335);
        assert!(content.starts_with("{\"date\":\"2025-01-01\""));
    }

    #[test]
    fn test_output_csv_flag() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("_chat.txt");
        let output = output_path(&fixtures, "series.out");

        chatpulse_cmd()
            .args([
                input.to_str().unwrap(),
                "-o",
                output.to_str().unwrap(),
                "--format",
                "csv",
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("CSV"));

        let content = fs::read_to_string(&output).unwrap();
        assert!(content.starts_with("date,laughCount,ilyCount\n"));
        assert!(content.contains("2025-06-15,0,1"));
    }

    #[test]
    fn test_json_is_pretty() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("_chat.txt");
        let output = output_path(&fixtures, "out.json");

        chatpulse_cmd()
            .args([input.to_str().unwrap(), "-o", output.to_str().unwrap()])
            .assert()
            .success();

        let content = fs::read_to_string(&output).unwrap();
        assert!(content.contains("\n    \"laughCount\": 0,\n"));
    }
}

// ============================================================================
// Error Handling Tests
// ============================================================================

mod error_handling {
    use super::*;

    #[test]
    fn test_missing_input() {
        let fixtures = setup_fixtures();
        let output = output_path(&fixtures, "out.json");

        chatpulse_cmd()
            .args(["/nonexistent/_chat.txt", "-o", output.to_str().unwrap()])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Error"))
            .stderr(predicate::str::contains("/nonexistent/_chat.txt"));

        assert!(!output.exists());
    }

    #[test]
    fn test_empty_result_writes_nothing() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("old.txt");
        let output = output_path(&fixtures, "out.json");

        chatpulse_cmd()
            .args([input.to_str().unwrap(), "-o", output.to_str().unwrap()])
            .assert()
            .failure()
            .stderr(predicate::str::contains("No messages from 2025"));

        assert!(!output.exists());
    }

    #[test]
    fn test_empty_result_keeps_previous_output() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("old.txt");
        let output = output_path(&fixtures, "out.json");
        fs::write(&output, "previous").unwrap();

        chatpulse_cmd()
            .args([input.to_str().unwrap(), "-o", output.to_str().unwrap()])
            .assert()
            .failure();

        assert_eq!(fs::read_to_string(&output).unwrap(), "previous");
    }

    #[test]
    fn test_unwritable_output() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("_chat.txt");
        let output = fixtures.path().join("no_such_dir").join("out.json");

        chatpulse_cmd()
            .args([input.to_str().unwrap(), "-o", output.to_str().unwrap()])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Failed to write output"));
    }

    #[test]
    fn test_invalid_month() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("_chat.txt");

        chatpulse_cmd()
            .args([input.to_str().unwrap(), "--exclude-month", "13"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("excluded_month"));
    }

    #[test]
    fn test_invalid_range() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("_chat.txt");

        chatpulse_cmd()
            .args([input.to_str().unwrap(), "--exclude-range", "2025-12-26..2025-12-24"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Error"));
    }

    #[test]
    fn test_invalid_format() {
        chatpulse_cmd()
            .args(["_chat.txt", "--format", "xml"])
            .assert()
            .failure();
    }
}

// ============================================================================
// Help and Version
// ============================================================================

mod help_and_version {
    use super::*;

    #[test]
    fn test_help() {
        chatpulse_cmd()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("--exclude-month"))
            .stdout(predicate::str::contains("--no-exclude"));
    }

    #[test]
    fn test_version() {
        chatpulse_cmd()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}
