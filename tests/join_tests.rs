mod common;
use common::{leg, markerless_file, speedcoach_file, two_leg_session, write_session_file};

use std::path::PathBuf;

use oarlog::config::Config;
use oarlog::core::join::{merge_sessions, process_file, session_id};
use oarlog::errors::AppError;
use oarlog::models::direction::Direction;

fn paths(files: &[String]) -> Vec<PathBuf> {
    files.iter().map(PathBuf::from).collect()
}

#[test]
fn test_process_file_runs_full_pipeline() {
    let cfg = Config::default();
    let file = write_session_file("join_full_pipeline", &two_leg_session());

    let session = process_file(&PathBuf::from(&file), &cfg).expect("process file");

    // 9 up + 3 down survive; lead-in, units row, and rollover rows do not.
    assert_eq!(session.id, "join_full_pipeline");
    assert_eq!(session.len(), 12);
    assert!(session.strokes.iter().all(|s| !s.direction.is_turning()));
    assert!(session.strokes.iter().all(|s| s.session_id == session.id));
}

#[test]
fn test_merge_skips_malformed_file() {
    let cfg = Config::default();
    let good = write_session_file("join_good", &two_leg_session());
    let bad = write_session_file("join_bad", &markerless_file());

    let dataset = merge_sessions(&paths(&[good, bad]), &cfg).expect("merge");

    assert_eq!(dataset.session_ids(), vec!["join_good"]);
    assert_eq!(dataset.len(), 12);
}

#[test]
fn test_merge_fails_when_every_file_is_invalid() {
    let cfg = Config::default();
    let bad1 = write_session_file("join_bad1", &markerless_file());
    let bad2 = write_session_file("join_bad2", "not a session export at all");

    let err = merge_sessions(&paths(&[bad1, bad2]), &cfg).unwrap_err();
    assert!(matches!(err, AppError::NoValidSessions));
}

#[test]
fn test_missing_file_is_skipped_not_fatal() {
    let cfg = Config::default();
    let good = write_session_file("join_good_only", &two_leg_session());
    let missing = "/nonexistent/oarlog/session.csv".to_string();

    let dataset = merge_sessions(&paths(&[missing, good]), &cfg).expect("merge");
    assert_eq!(dataset.session_ids(), vec!["join_good_only"]);
}

#[test]
fn test_sessions_concatenate_in_input_order() {
    let cfg = Config::default();
    let first = write_session_file("join_order_a", &two_leg_session());
    let second = write_session_file("join_order_b", &speedcoach_file(&leg(2, 6, 0.0)));

    let dataset = merge_sessions(&paths(&[first, second]), &cfg).expect("merge");

    assert_eq!(dataset.session_ids(), vec!["join_order_a", "join_order_b"]);
    assert_eq!(dataset.len(), 12 + 6);

    // Rows of the first session all precede rows of the second.
    let boundary = dataset
        .rows
        .iter()
        .position(|s| s.session_id == "join_order_b")
        .expect("second session present");
    assert!(
        dataset.rows[..boundary]
            .iter()
            .all(|s| s.session_id == "join_order_a")
    );
}

#[test]
fn test_no_turning_rows_and_no_empty_session_ids() {
    let cfg = Config::default();
    let first = write_session_file("join_invariant_a", &two_leg_session());
    let second = write_session_file("join_invariant_b", &speedcoach_file(&leg(2, 6, 0.0)));

    let dataset = merge_sessions(&paths(&[first, second]), &cfg).expect("merge");

    for stroke in &dataset.rows {
        assert_ne!(stroke.direction, Direction::Turning);
        assert!(!stroke.session_id.is_empty());
    }
}

#[test]
fn test_row_order_within_session_preserved() {
    let cfg = Config::default();
    let file = write_session_file("join_row_order", &two_leg_session());

    let dataset = merge_sessions(&paths(&[file]), &cfg).expect("merge");

    // Distances were generated strictly increasing within each leg;
    // surviving rows must still be in file order.
    let distances: Vec<f64> = dataset.rows.iter().filter_map(|s| s.distance_gps).collect();
    assert!(distances.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_session_id_from_file_stem() {
    assert_eq!(
        session_id(&PathBuf::from("/data/SpdCoach 3039416 20250307 1205PM.csv")),
        "SpdCoach 3039416 20250307 1205PM"
    );
    assert_eq!(session_id(&PathBuf::from("plain")), "plain");
}
