//! CLI integration tests for aiqctl.
//!
//! Each test runs the real binary against a throwaway state file:
//! - aiqctl status [--json]   dashboard / machine-readable snapshot
//! - aiqctl complete LEVEL    milestone finalization + banner
//! - aiqctl earn/commit       provisional point flow
//! - aiqctl reset --yes       back to defaults
//!
//! Exit codes: 0 ok, 1 general, 64 already completed, 65 unknown level.

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn aiqctl(dir: &TempDir, args: &[&str]) -> Output {
    let state_file = dir.path().join("progress.json");
    run_with_state(dir, &state_file, args)
}

fn run_with_state(dir: &TempDir, state_file: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_aiqctl"))
        .arg("--state-file")
        .arg(state_file)
        .args(args)
        .env("AIQCTL_LOG_FILE", dir.path().join("ctl.jsonl"))
        .env("XDG_STATE_HOME", dir.path())
        .output()
        .expect("failed to run aiqctl")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn status_json(dir: &TempDir) -> serde_json::Value {
    let output = aiqctl(dir, &["status", "--json"]);
    assert!(output.status.success());
    serde_json::from_str(&stdout(&output)).expect("status --json must emit valid JSON")
}

#[test]
fn fresh_status_shows_defaults() {
    let dir = TempDir::new().unwrap();
    let json = status_json(&dir);

    assert_eq!(json["iq"], 85);
    assert_eq!(json["rank"], "Αρχάριος Στρατηγός");
    assert_eq!(json["totalPoints"], 0);
    assert_eq!(json["provisionalPoints"], 0);
    assert_eq!(json["unlockedLevels"], serde_json::json!(["level_0"]));
}

#[test]
fn status_dashboard_sections() {
    let dir = TempDir::new().unwrap();
    let output = aiqctl(&dir, &["status"]);
    assert!(output.status.success());

    let out = stdout(&output);
    assert!(out.contains("[AI-Q]"));
    assert!(out.contains("[PROGRESS]"));
    assert!(out.contains("[STYLE]"));
    assert!(out.contains("85"));
}

#[test]
fn complete_awards_points_and_unlocks_next() {
    let dir = TempDir::new().unwrap();
    let output = aiqctl(&dir, &["complete", "level_0"]);
    assert!(output.status.success());

    let out = stdout(&output);
    assert!(out.contains("Συγχαρητήρια"));
    assert!(out.contains("+5 AI-Q"));
    assert!(out.contains("Το Εγκόλπιον"));

    let json = status_json(&dir);
    assert_eq!(json["iq"], 90);
    assert_eq!(json["totalPoints"], 5);
    assert_eq!(json["completedLevels"], serde_json::json!(["level_0"]));
    assert!(json["unlockedLevels"]
        .as_array()
        .unwrap()
        .iter()
        .any(|v| v == "level_1"));
}

#[test]
fn duplicate_completion_exits_64() {
    let dir = TempDir::new().unwrap();
    assert!(aiqctl(&dir, &["complete", "level_0"]).status.success());

    let output = aiqctl(&dir, &["complete", "level_0"]);
    assert_eq!(output.status.code(), Some(64));

    // Score unchanged by the rejected attempt.
    assert_eq!(status_json(&dir)["iq"], 90);
}

#[test]
fn unknown_level_exits_65() {
    let dir = TempDir::new().unwrap();
    let output = aiqctl(&dir, &["complete", "level_99"]);
    assert_eq!(output.status.code(), Some(65));
}

#[test]
fn custom_points_and_unlock_override() {
    let dir = TempDir::new().unwrap();
    let output = aiqctl(
        &dir,
        &["complete", "level_0", "--points", "20", "--unlock", "level_4"],
    );
    assert!(output.status.success());

    let json = status_json(&dir);
    assert_eq!(json["iq"], 105);
    let unlocked = json["unlockedLevels"].as_array().unwrap();
    assert!(unlocked.iter().any(|v| v == "level_4"));
    assert!(!unlocked.iter().any(|v| v == "level_1"));
}

#[test]
fn earn_then_commit_scores_the_points() {
    let dir = TempDir::new().unwrap();
    assert!(aiqctl(&dir, &["earn", "5"]).status.success());

    let json = status_json(&dir);
    assert_eq!(json["iq"], 85);
    assert_eq!(json["provisionalPoints"], 5);

    let output = aiqctl(&dir, &["commit"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Committed 5"));

    let json = status_json(&dir);
    assert_eq!(json["iq"], 90);
    assert_eq!(json["totalPoints"], 5);
    assert_eq!(json["provisionalPoints"], 0);
}

#[test]
fn discard_drops_points_without_scoring() {
    let dir = TempDir::new().unwrap();
    assert!(aiqctl(&dir, &["earn", "7"]).status.success());
    let output = aiqctl(&dir, &["discard"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Discarded 7"));

    let json = status_json(&dir);
    assert_eq!(json["iq"], 85);
    assert_eq!(json["provisionalPoints"], 0);
}

#[test]
fn award_triggers_achievement() {
    let dir = TempDir::new().unwrap();
    assert!(aiqctl(&dir, &["award", "15"]).status.success());

    let json = status_json(&dir);
    assert_eq!(json["iq"], 100);
    assert!(json["achievements"]
        .as_array()
        .unwrap()
        .iter()
        .any(|a| a["id"] == "iq_100"));

    let output = aiqctl(&dir, &["achievements"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Τριψήφιο AI-Q"));
}

#[test]
fn synthesis_submission_commits_bonus_and_badge() {
    let dir = TempDir::new().unwrap();
    for _ in 0..5 {
        assert!(aiqctl(&dir, &["earn", "1"]).status.success());
    }
    assert!(aiqctl(&dir, &["commit"]).status.success());
    assert!(aiqctl(&dir, &["award", "15", "--source", "synthesis_challenge"])
        .status
        .success());

    let output = aiqctl(
        &dir,
        &[
            "badge",
            "completed_synthesis_challenge",
            "--metadata",
            r#"{"reading_progress": 1.0}"#,
        ],
    );
    assert!(output.status.success());
    assert!(stdout(&output).contains("recorded"));

    // Second recording is a no-op.
    let output = aiqctl(&dir, &["badge", "completed_synthesis_challenge"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("already unlocked"));

    let json = status_json(&dir);
    assert_eq!(json["iq"], 105);
    assert_eq!(json["totalPoints"], 20);
    let badges = json["achievements"].as_array().unwrap();
    assert_eq!(
        badges
            .iter()
            .filter(|a| a["id"] == "completed_synthesis_challenge")
            .count(),
        1
    );
}

#[test]
fn badge_rejects_malformed_metadata() {
    let dir = TempDir::new().unwrap();
    let output = aiqctl(&dir, &["badge", "x", "--metadata", "{not json"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn path_lists_all_levels() {
    let dir = TempDir::new().unwrap();
    let output = aiqctl(&dir, &["path"]);
    assert!(output.status.success());

    let out = stdout(&output);
    assert!(out.contains("Το Αλφαβητάριον"));
    assert!(out.contains("Neo-Monday Αγωγή"));
    assert!(out.contains("Διαθέσιμο"));
    assert!(out.contains("Κλειδωμένο"));
}

#[test]
fn reset_requires_confirmation() {
    let dir = TempDir::new().unwrap();
    assert!(aiqctl(&dir, &["complete", "level_0"]).status.success());

    let refused = aiqctl(&dir, &["reset"]);
    assert_eq!(refused.status.code(), Some(1));
    assert_eq!(status_json(&dir)["iq"], 90);

    let output = aiqctl(&dir, &["reset", "--yes"]);
    assert!(output.status.success());
    assert_eq!(status_json(&dir)["iq"], 85);
}

#[test]
fn state_survives_between_invocations() {
    let dir = TempDir::new().unwrap();
    assert!(aiqctl(&dir, &["complete", "level_0"]).status.success());
    assert!(aiqctl(&dir, &["complete", "level_1"]).status.success());
    assert!(aiqctl(&dir, &["earn", "3"]).status.success());

    let json = status_json(&dir);
    assert_eq!(json["iq"], 95);
    assert_eq!(json["completedLevels"].as_array().unwrap().len(), 2);
    assert_eq!(json["provisionalPoints"], 3);
}

#[test]
fn invocation_log_is_appended() {
    let dir = TempDir::new().unwrap();
    aiqctl(&dir, &["status"]);
    aiqctl(&dir, &["earn", "2"]);

    let log = std::fs::read_to_string(dir.path().join("ctl.jsonl")).unwrap();
    let lines: Vec<&str> = log.lines().collect();
    assert_eq!(lines.len(), 2);
    let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(first["command"], "status");
    assert_eq!(first["ok"], true);
}
