//! Shared helpers for pursuit benchmark suites.

use pursuit_kernel::geometry::cell::Cell;
use pursuit_kernel::motion::evader::Direction;
use pursuit_kernel::proof::canon::{canonical_json_bytes, CanonError};
use pursuit_kernel::proof::hash::{canonical_hash, ContentHash};
use pursuit_kernel::proof::hash_domain::HashDomain;
use pursuit_search::{EvaderSpec, Problem, SearchError};

/// A board of `dimension` with the hunter near the centre and `count`
/// evaders placed on a fixed diagonal pattern, cycling through the four
/// directions.
///
/// # Errors
///
/// Propagates [`SearchError`] when the layout does not fit the board.
pub fn scaled_problem(dimension: i32, count: usize) -> Result<Problem, SearchError> {
    let centre = dimension / 2;
    let span = dimension - 2;
    let evaders: Vec<EvaderSpec> = (0..count)
        .zip(0i32..)
        .map(|(i, k)| {
            let x = 1 + (3 * k + 1).rem_euclid(span);
            let y = 1 + (5 * k + 2).rem_euclid(span);
            EvaderSpec::new(Cell::new(x, y), Direction::ALL[i % 4])
        })
        .collect();
    Problem::new(dimension, Cell::new(centre, centre - 1), &evaders)
}

/// Digest of a benchmark input, printed alongside results so regressions
/// can be matched to identical inputs.
///
/// # Errors
///
/// Propagates canonicalization errors.
pub fn input_digest(problem: &Problem) -> Result<ContentHash, CanonError> {
    let value = serde_json::json!({
        "dimension": problem.board().dimension(),
        "hunter": [problem.hunter().x, problem.hunter().y],
        "evaders": problem
            .evaders()
            .iter()
            .map(|e| serde_json::json!([e.start.x, e.start.y, e.direction.as_str()]))
            .collect::<Vec<_>>(),
    });
    Ok(canonical_hash(HashDomain::BenchInput, &canonical_json_bytes(&value)?))
}
