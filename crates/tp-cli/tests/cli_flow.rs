//! End-to-end integration tests for the series tracking flow.
//!
//! Tests the full pipeline against a real binary and a temporary local
//! database: import → list → score → stats → coverage → export → delete.

use std::io::Write as _;
use std::path::Path;
use std::process::{Command, Stdio};

use tempfile::TempDir;
use tp_core::{Frame, Game, Roll, Series, SeriesId, SeriesTag};

fn tenpin_binary() -> String {
    env!("CARGO_BIN_EXE_tenpin").to_string()
}

/// A command wired to a temporary local database.
fn tenpin(temp: &Path) -> Command {
    let mut command = Command::new(tenpin_binary());
    command
        .env("TENPIN_BACKEND", "local")
        .env("TENPIN_DATABASE_PATH", temp.join("tenpin.db"));
    command
}

fn roll(numbers: &[u8]) -> Roll {
    Roll::from_numbers(numbers.iter().copied()).unwrap()
}

/// Ten frames of nine-and-a-miss, totalling 90.
fn nine_and_miss_game() -> Game {
    let frames: Vec<_> = (1..=10)
        .map(|index| {
            let first = roll(&[1, 2, 3, 4, 5, 6, 7, 8, 9]);
            Frame::new(index, vec![first, Roll::miss()]).unwrap()
        })
        .collect();
    Game::new(frames).unwrap()
}

fn sample_series() -> Series {
    Series {
        id: SeriesId::new("league-w1").unwrap(),
        name: "League week 1".to_string(),
        tag: SeriesTag::League,
        created_at: "2025-03-01T19:00:00Z".parse().unwrap(),
        games: vec![nine_and_miss_game()],
    }
}

/// Pipe one JSON document per line into `tenpin import`.
fn import_series(temp: &Path, series: &[Series]) {
    let mut child = tenpin(temp)
        .arg("import")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn tenpin import");
    {
        let stdin = child.stdin.as_mut().unwrap();
        for s in series {
            writeln!(stdin, "{}", serde_json::to_string(s).unwrap()).unwrap();
        }
    }
    let output = child.wait_with_output().unwrap();
    assert!(
        output.status.success(),
        "import should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn test_import_then_list() {
    let temp = TempDir::new().unwrap();
    import_series(temp.path(), &[sample_series()]);

    let output = tenpin(temp.path()).arg("list").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert!(stdout.contains("League week 1"));
    assert!(stdout.contains("league-w1"));
    assert!(stdout.contains("(1 games: 90)"));
}

#[test]
fn test_score_reports_totals() {
    let temp = TempDir::new().unwrap();
    import_series(temp.path(), &[sample_series()]);

    let output = tenpin(temp.path())
        .arg("score")
        .arg("league-w1")
        .arg("--json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["series"], "league-w1");
    assert_eq!(parsed["games"][0]["total"], 90);
    assert_eq!(parsed["games"][0]["cumulative"][9], 90);
}

#[test]
fn test_stats_counts_games() {
    let temp = TempDir::new().unwrap();
    import_series(temp.path(), &[sample_series()]);

    let output = tenpin(temp.path())
        .arg("stats")
        .arg("--json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["series"], 1);
    assert_eq!(parsed["games"], 1);
    // Every first ball knocks down nine pins.
    let average = parsed["stats"]["first_ball_average"].as_f64().unwrap();
    assert!((average - 9.0).abs() < 1e-9);
}

#[test]
fn test_coverage_over_imported_series() {
    let temp = TempDir::new().unwrap();
    import_series(temp.path(), &[sample_series()]);

    let output = tenpin(temp.path())
        .arg("coverage")
        .arg("--pins")
        .arg("10")
        .arg("--json")
        .output()
        .unwrap();
    assert!(output.status.success());

    // The 10-pin is left standing on every first ball and never converted.
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["successes"], 0);
    assert_eq!(parsed["total"], 10);
}

#[test]
fn test_export_round_trips() {
    let temp = TempDir::new().unwrap();
    let series = sample_series();
    import_series(temp.path(), &[series.clone()]);

    let output = tenpin(temp.path()).arg("export").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 1);
    let exported: Series = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(exported, series);
}

#[test]
fn test_delete_removes_series() {
    let temp = TempDir::new().unwrap();
    import_series(temp.path(), &[sample_series()]);

    let output = tenpin(temp.path())
        .arg("delete")
        .arg("league-w1")
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Deleted series league-w1."));

    let output = tenpin(temp.path()).arg("export").output().unwrap();
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_status_summarizes_store() {
    let temp = TempDir::new().unwrap();
    import_series(temp.path(), &[sample_series()]);

    let output = tenpin(temp.path()).arg("status").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert!(stdout.contains("Backend: local"));
    assert!(stdout.contains("Series: 1 (1 games)"));
    assert!(stdout.contains("Latest: League week 1 (league, 2025-03-01 19:00)"));
}

#[test]
fn test_import_rejects_malformed_document() {
    let temp = TempDir::new().unwrap();
    let mut child = tenpin(temp.path())
        .arg("import")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    {
        let stdin = child.stdin.as_mut().unwrap();
        writeln!(stdin, "{{\"name\": \"broken\"}}").unwrap();
    }
    let output = child.wait_with_output().unwrap();
    assert!(!output.status.success());
}
