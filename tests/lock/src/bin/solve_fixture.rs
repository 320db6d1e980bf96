//! Binary that runs every fixture scenario under every strategy and prints
//! deterministic output lines for cross-process verification.
//!
//! Usage: `solve_fixture`
//!
//! Output: `<fixture>.<key>=<value>` and `<fixture>.<strategy>.<key>=<value>`
//! lines on stdout. Logs go to stderr, filtered by `RUST_LOG`.

use lock_tests::{load, FIXTURES};
use pursuit_harness::playback::PlaybackScript;
use pursuit_harness::runner::race_strategies;
use pursuit_search::Strategy;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    for (name, json) in FIXTURES {
        tracing::debug!(fixture = name, "solving");
        let scenario = load(json)?;
        println!("{name}.scenario_digest={}", scenario.digest()?);
        let race = race_strategies(&scenario, &Strategy::ALL)?;
        let fastest = race
            .winner()
            .map_or_else(|| "none".to_string(), |r| r.strategy().to_string());
        println!("{name}.fastest={fastest}");
        for (strategy, run) in &race.runs {
            let run = run.as_ref().map_err(Clone::clone)?;
            let path = run.path();
            let script = PlaybackScript::from_path(&run.problem, path);
            println!("{name}.{strategy}.found={}", path.is_found());
            println!(
                "{name}.{strategy}.turns={}",
                path.turns().map_or_else(|| "-".to_string(), |t| t.to_string())
            );
            println!("{name}.{strategy}.termination={}", run.report.termination.as_str());
            println!("{name}.{strategy}.expansions={}", run.report.stats.expansions);
            println!("{name}.{strategy}.path_digest={}", path.digest()?);
            println!("{name}.{strategy}.report_digest={}", run.report_digest);
            println!("{name}.{strategy}.run_digest={}", run.run_digest);
            println!("{name}.{strategy}.playback_digest={}", script.digest()?);
        }
    }
    Ok(())
}
