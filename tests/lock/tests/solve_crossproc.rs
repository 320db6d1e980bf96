//! Cross-process determinism for the search pipeline.
//!
//! Spawns the `solve_fixture` binary under several environment variants and
//! asserts all produce identical stdout, and that it agrees with an
//! in-process run.

use std::path::Path;
use std::process::Command;

use lock_tests::{load, parse_key_values, FIXTURES};
use pursuit_harness::runner::run_scenario;
use pursuit_search::Strategy;

fn binary_path() -> String {
    let mut path = std::env::current_exe()
        .expect("can resolve test binary path")
        .parent()
        .expect("binary dir exists")
        .parent()
        .expect("deps parent exists")
        .to_path_buf();
    path.push("solve_fixture");
    path.to_string_lossy().to_string()
}

fn workspace_root() -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("tests/ exists")
        .parent()
        .expect("workspace root exists")
        .to_string_lossy()
        .to_string()
}

fn run_variant(work_dir: &str, env_overrides: &[(&str, &str)]) -> String {
    let bin = binary_path();
    let mut command = Command::new(&bin);
    command
        .current_dir(work_dir)
        .env_remove("LC_ALL")
        .env_remove("LANG")
        .env_remove("RUST_LOG");
    for &(key, val) in env_overrides {
        command.env(key, val);
    }
    let output = command.output().unwrap_or_else(|e| {
        panic!("failed to spawn {bin} (work_dir={work_dir}, overrides={env_overrides:?}): {e}")
    });
    assert!(
        output.status.success(),
        "solve_fixture exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("stdout is valid UTF-8")
}

#[test]
fn crossproc_determinism_env_variants() {
    let root = workspace_root();
    let baseline = run_variant(&root, &[]);
    assert!(baseline.contains("concrete.scenario_digest=sha256:"));
    assert!(baseline.contains("crossing.breadth_first.run_digest=sha256:"));

    let tmp = std::env::temp_dir().to_string_lossy().to_string();
    let variants: [(&str, Vec<(&str, &str)>); 3] = [
        ("other cwd", vec![]),
        ("locale", vec![("LC_ALL", "C"), ("LANG", "en_US.UTF-8")]),
        ("debug logging", vec![("RUST_LOG", "debug")]),
    ];
    for (label, env) in &variants {
        let dir = if *label == "other cwd" { &tmp } else { &root };
        let out = run_variant(dir, env);
        assert_eq!(out, baseline, "variant {label:?} diverged");
    }
}

#[test]
fn binary_agrees_with_in_process_run() {
    let out = parse_key_values(&run_variant(&workspace_root(), &[]));
    for (name, json) in FIXTURES {
        let mut scenario = load(json).unwrap();
        for strategy in Strategy::ALL {
            scenario.strategy = strategy;
            let run = run_scenario(&scenario).unwrap();
            let key = format!("{name}.{strategy}.report_digest");
            assert_eq!(
                out.get(&key).map(String::as_str),
                Some(run.report_digest.as_str()),
                "{key}"
            );
            assert_eq!(
                out.get(&format!("{name}.{strategy}.found")).map(String::as_str),
                Some(if run.path().is_found() { "true" } else { "false" })
            );
        }
    }
    // (8,3) is not among the opening moves from (5,5).
    assert_eq!(
        out.get("concrete.breadth_first.found").map(String::as_str),
        Some("false")
    );
    assert_eq!(
        out.get("concrete.fastest").map(String::as_str),
        Some("none")
    );
}
