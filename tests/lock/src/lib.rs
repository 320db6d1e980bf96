//! Shared fixtures for the lock tests and the `solve_fixture` binary.
//!
//! Each fixture is a scenario document, so the same JSON drives in-process
//! tests and the cross-process binary.

use std::collections::BTreeMap;

use pursuit_harness::scenario::{Scenario, ScenarioError};

/// Dimension 10, hunter (5,5), one evader at (8,3) heading east. The evader
/// is one step from the border.
pub const CONCRETE_JSON: &str = r#"{
    "dimension": 10,
    "hunter": [5, 5],
    "evaders": [{"start": [8, 3], "direction": "east"}]
}"#;

/// A single evader with room to run and a hunter that can reach it.
pub const INTERCEPT_JSON: &str = r#"{
    "dimension": 14,
    "hunter": [6, 6],
    "evaders": [{"start": [3, 3], "direction": "north"}]
}"#;

/// Two evaders crossing the hunter's neighbourhood.
pub const CROSSING_JSON: &str = r#"{
    "dimension": 12,
    "hunter": [5, 5],
    "evaders": [
        {"start": [2, 8], "direction": "east"},
        {"start": [9, 2], "direction": "north"}
    ]
}"#;

/// Three evaders on a larger board.
pub const TRIO_JSON: &str = r#"{
    "dimension": 16,
    "hunter": [7, 7],
    "evaders": [
        {"start": [2, 3], "direction": "north"},
        {"start": [12, 4], "direction": "west"},
        {"start": [4, 12], "direction": "east"}
    ],
    "policy": {"max_expansions": 200000}
}"#;

/// Named fixtures in a fixed order.
pub const FIXTURES: &[(&str, &str)] = &[
    ("concrete", CONCRETE_JSON),
    ("intercept", INTERCEPT_JSON),
    ("crossing", CROSSING_JSON),
    ("trio", TRIO_JSON),
];

/// Parse a fixture document.
///
/// # Errors
///
/// Propagates [`ScenarioError`] from parsing.
pub fn load(json: &str) -> Result<Scenario, ScenarioError> {
    Scenario::from_json_bytes(json.as_bytes())
}

/// Parse `key=value` lines, ignoring anything without `=`.
#[must_use]
pub fn parse_key_values(output: &str) -> BTreeMap<String, String> {
    output
        .lines()
        .filter_map(|line| line.split_once('='))
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
