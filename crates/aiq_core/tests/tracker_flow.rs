//! End-to-end flows through the public tracker API.
//!
//! Mirrors the reading loop on the site: load (or default) a record,
//! complete milestones, buffer and commit provisional points, and check
//! that ranks, achievements and persistence line up.

use aiq_core::{
    LevelId, MilestoneCompletion, MilestoneEngine, ProgressStore,
};
use std::fs;
use tempfile::tempdir;

fn engine_at(path: std::path::PathBuf) -> MilestoneEngine {
    MilestoneEngine::new(ProgressStore::open(path))
}

#[test]
fn first_milestone_from_defaults() {
    let dir = tempdir().unwrap();
    let mut engine = engine_at(dir.path().join("progress.json"));

    assert!(engine.complete_milestone(MilestoneCompletion::new(LevelId::Level0)));

    let record = engine.progress();
    assert_eq!(record.iq, 90);
    assert_eq!(record.total_points, 5);
    assert_eq!(
        record.completed_levels.iter().collect::<Vec<_>>(),
        vec!["level_0"]
    );
    assert!(record.unlocked_levels.contains("level_1"));
}

#[test]
fn reading_then_commit_moves_points_into_score() {
    let dir = tempdir().unwrap();
    let mut engine = engine_at(dir.path().join("progress.json"));

    engine.add_provisional_points(5, "reading");
    assert_eq!(engine.progress().provisional_points, 5);
    assert_eq!(engine.progress().iq, 85);

    let committed = engine.commit_provisional_points(None);
    assert_eq!(committed, 5);

    let record = engine.progress();
    assert_eq!(record.provisional_points, 0);
    assert_eq!(record.iq, 90);
    assert_eq!(record.total_points, 5);
}

#[test]
fn synthesis_challenge_flow() {
    let dir = tempdir().unwrap();
    let mut engine = engine_at(dir.path().join("progress.json"));

    // Reading checkboxes earn one provisional point each; one gets
    // unchecked along the way.
    for _ in 0..6 {
        engine.add_provisional_points(1, "reading");
    }
    engine.retract_provisional_points(1);

    // Submission commits the buffer, awards the bonus, records the badge.
    let committed = engine.commit_provisional_points(None);
    assert_eq!(committed, 5);
    engine.add_points(15, "synthesis_challenge");
    engine.record_achievement(
        "completed_synthesis_challenge",
        Some(serde_json::json!({"reading_progress": 1.0})),
    );

    let record = engine.progress();
    assert_eq!(record.iq, 105);
    assert_eq!(record.total_points, 20);
    assert!(record.has_achievement("completed_synthesis_challenge"));
    assert!(record.has_achievement("iq_100"));
}

#[test]
fn walking_the_whole_path_grants_master() {
    let dir = tempdir().unwrap();
    let mut engine = engine_at(dir.path().join("progress.json"));

    for level in LevelId::ALL.iter().take(10) {
        assert!(engine.complete_milestone(MilestoneCompletion::new(*level)));
    }

    let record = engine.progress();
    assert!(record.has_achievement("half_way"));
    assert!(record.has_achievement("master"));
    assert_eq!(record.iq, 85 + 10 * 5);
    assert!(record.is_unlocked(LevelId::Level10));
}

#[test]
fn progress_survives_reopen() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("progress.json");

    {
        let mut engine = engine_at(path.clone());
        engine.complete_milestone(MilestoneCompletion::new(LevelId::Level0));
        engine.add_provisional_points(3, "reading");
    }

    let engine = engine_at(path);
    let record = engine.progress();
    assert_eq!(record.iq, 90);
    assert_eq!(record.provisional_points, 3);
    assert!(record.is_completed(LevelId::Level0));
}

#[test]
fn legacy_site_record_loads_and_upgrades() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("progress.json");
    fs::write(
        &path,
        r#"{
            "iq": 110,
            "unlockedLevels": ["level_0", "level_1", "level_2"],
            "completedLevels": ["level_0", "level_1"],
            "totalPoints": 25,
            "achievements": ["iq_100"],
            "lastUpdated": 1700000000000
        }"#,
    )
    .unwrap();

    let mut engine = engine_at(path.clone());
    let record = engine.progress();
    assert_eq!(record.iq, 110);
    assert_eq!(record.provisional_points, 0);
    assert!(record.has_achievement("iq_100"));

    // Completing the next level re-saves the record in structured form.
    assert!(engine.complete_milestone(MilestoneCompletion::new(LevelId::Level2)));
    let raw = fs::read_to_string(&path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert!(json["achievements"][0].is_object());
    assert!(json["unlockedLevels"]
        .as_array()
        .unwrap()
        .iter()
        .any(|v| v == "level_3"));
}

#[test]
fn snapshot_matches_dashboard_math() {
    let dir = tempdir().unwrap();
    let mut engine = engine_at(dir.path().join("progress.json"));
    engine.add_points(40, "import");

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.record.iq, 125);
    assert_eq!(snapshot.rank, "Έμπειρος Διευθυντής");
    assert_eq!(snapshot.bar_percentage, 50.0);
}
