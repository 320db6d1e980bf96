//! Harness runner: scenario in, bound and hashed search report out.
//!
//! # Pipeline
//!
//! ```text
//! validate_placement() → problem() → search() → SearchReportV1
//!   → canonical bytes → report digest → run digest (scenario ⊕ report)
//! ```
//!
//! [`race_strategies`] fans the same scenario out to several strategies on
//! scoped threads, each over its own clone of the problem.

use pursuit_kernel::proof::canon::canonical_json_bytes;
use pursuit_kernel::proof::hash::{canonical_hash, ContentHash};
use pursuit_kernel::proof::hash_domain::HashDomain;
use pursuit_search::{search, PathResult, Problem, SearchError, SearchReportV1, Strategy};

use crate::scenario::{Scenario, ScenarioError};

/// Error during a harness run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    /// The scenario broke a placement rule.
    Scenario(ScenarioError),
    /// The engine rejected the input or policy.
    Search(SearchError),
    /// Canonical JSON serialization failed.
    CanonFailed { detail: String },
    /// A race worker panicked.
    WorkerPanicked { strategy: Strategy },
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scenario(e) => write!(f, "scenario error: {e}"),
            Self::Search(e) => write!(f, "search error: {e}"),
            Self::CanonFailed { detail } => write!(f, "canonicalization failed: {detail}"),
            Self::WorkerPanicked { strategy } => write!(f, "{strategy} worker panicked"),
        }
    }
}

impl std::error::Error for RunError {}

impl From<ScenarioError> for RunError {
    fn from(e: ScenarioError) -> Self {
        Self::Scenario(e)
    }
}

impl From<SearchError> for RunError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

fn canon_failed(e: impl std::fmt::Display) -> RunError {
    RunError::CanonFailed {
        detail: e.to_string(),
    }
}

/// Everything one run produced, with its digests bound together.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub problem: Problem,
    pub report: SearchReportV1,
    /// Canonical JSON of `report`.
    pub report_bytes: Vec<u8>,
    pub report_digest: ContentHash,
    pub scenario_digest: ContentHash,
    /// Hash over the scenario and report digests.
    pub run_digest: ContentHash,
}

impl RunReport {
    #[must_use]
    pub fn path(&self) -> &PathResult {
        &self.report.path
    }

    #[must_use]
    pub fn strategy(&self) -> Strategy {
        self.report.strategy
    }
}

/// Check placement and build the engine input.
///
/// # Errors
///
/// [`RunError::Scenario`] for placement violations, [`RunError::Search`] for
/// engine-level input errors.
pub fn prepare(scenario: &Scenario) -> Result<Problem, RunError> {
    scenario
        .validate_placement()
        .map_err(ScenarioError::from)?;
    Ok(scenario.problem()?)
}

/// Run the scenario's own strategy.
///
/// # Errors
///
/// See [`prepare`]; also [`RunError::Search`] for an invalid policy and
/// [`RunError::CanonFailed`] if the report cannot be canonicalized.
pub fn run_scenario(scenario: &Scenario) -> Result<RunReport, RunError> {
    let problem = prepare(scenario)?;
    run_problem(scenario, problem, scenario.strategy)
}

fn run_problem(
    scenario: &Scenario,
    problem: Problem,
    strategy: Strategy,
) -> Result<RunReport, RunError> {
    let result = search(&problem, strategy, &scenario.policy)?;
    let report = SearchReportV1::from_result(&result, &scenario.policy);
    let report_bytes = report.to_canonical_json_bytes().map_err(canon_failed)?;
    let report_digest = canonical_hash(HashDomain::SearchReport, &report_bytes);
    let scenario_digest = scenario.digest().map_err(canon_failed)?;
    let binding = serde_json::json!({
        "report_digest": report_digest.as_str(),
        "scenario_digest": scenario_digest.as_str(),
    });
    let run_digest = canonical_hash(
        HashDomain::RunReport,
        &canonical_json_bytes(&binding).map_err(canon_failed)?,
    );
    tracing::info!(
        %strategy,
        found = report.path.is_found(),
        turns = ?report.path.turns(),
        termination = report.termination.as_str(),
        %run_digest,
        "run finished"
    );
    Ok(RunReport {
        problem,
        report,
        report_bytes,
        report_digest,
        scenario_digest,
        run_digest,
    })
}

/// Outcomes of a strategy race.
#[derive(Debug)]
pub struct RaceOutcome {
    /// One entry per requested strategy, in request order.
    pub runs: Vec<(Strategy, Result<RunReport, RunError>)>,
    /// Index into `runs` of the `Found` path with the fewest turns; ties go
    /// to the earlier entry.
    pub fastest: Option<usize>,
}

impl RaceOutcome {
    #[must_use]
    pub fn winner(&self) -> Option<&RunReport> {
        let (_, run) = self.runs.get(self.fastest?)?;
        run.as_ref().ok()
    }
}

/// Run several strategies concurrently on one scenario.
///
/// Placement and input validation happen once up front; each worker gets an
/// independent clone of the problem.
///
/// # Errors
///
/// Returns the [`prepare`] error when the scenario is unusable. Per-strategy
/// failures are reported inside [`RaceOutcome::runs`].
pub fn race_strategies(
    scenario: &Scenario,
    strategies: &[Strategy],
) -> Result<RaceOutcome, RunError> {
    let problem = prepare(scenario)?;
    let runs: Vec<(Strategy, Result<RunReport, RunError>)> = std::thread::scope(|scope| {
        let handles: Vec<_> = strategies
            .iter()
            .map(|&strategy| {
                let problem = problem.clone();
                (
                    strategy,
                    scope.spawn(move || run_problem(scenario, problem, strategy)),
                )
            })
            .collect();
        handles
            .into_iter()
            .map(|(strategy, handle)| {
                let run = handle
                    .join()
                    .unwrap_or(Err(RunError::WorkerPanicked { strategy }));
                (strategy, run)
            })
            .collect()
    });

    let mut fastest: Option<(usize, u32)> = None;
    for (i, (_, run)) in runs.iter().enumerate() {
        let Some(turns) = run.as_ref().ok().and_then(|r| r.path().turns()) else {
            continue;
        };
        let better = match fastest {
            None => true,
            Some((_, best)) => turns < best,
        };
        if better {
            fastest = Some((i, turns));
        }
    }
    Ok(RaceOutcome {
        runs,
        fastest: fastest.map(|(i, _)| i),
    })
}
