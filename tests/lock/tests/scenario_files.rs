//! Scenario documents on disk drive the same runs as in-memory fixtures.

use lock_tests::{load, FIXTURES};
use pursuit_harness::runner::{run_scenario, RunError};
use pursuit_harness::scenario::{PlacementError, Scenario, ScenarioError};

#[test]
fn file_and_memory_runs_agree() {
    let dir = tempfile::tempdir().unwrap();
    for (name, json) in FIXTURES {
        let path = dir.path().join(format!("{name}.json"));
        std::fs::write(&path, json).unwrap();
        let from_file = Scenario::from_path(&path).unwrap();
        let from_memory = load(json).unwrap();
        assert_eq!(from_file, from_memory, "{name}");
        assert_eq!(
            run_scenario(&from_file).unwrap().run_digest,
            run_scenario(&from_memory).unwrap().run_digest,
            "{name}"
        );
    }
}

#[test]
fn evader_on_opening_move_is_rejected_before_search() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(
        &path,
        r#"{"dimension": 10, "hunter": [5, 5],
            "evaders": [{"start": [6, 7], "direction": "south"}]}"#,
    )
    .unwrap();
    let scenario = Scenario::from_path(&path).unwrap();
    assert_eq!(
        run_scenario(&scenario).unwrap_err(),
        RunError::Scenario(ScenarioError::Placement(
            PlacementError::EvaderOnHunterMove {
                index: 0,
                cell: pursuit_kernel::geometry::cell::Cell::new(6, 7),
            }
        ))
    );
}

#[test]
fn invalid_policy_surfaces_as_search_error() {
    let scenario = Scenario::from_json_bytes(
        br#"{"dimension": 10, "hunter": [5, 5], "evaders": [],
            "policy": {"max_depth": 0}}"#,
    )
    .unwrap();
    assert!(matches!(
        run_scenario(&scenario),
        Err(RunError::Search(pursuit_search::SearchError::InvalidPolicy { .. }))
    ));
}
