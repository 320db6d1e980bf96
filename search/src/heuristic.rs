//! Quadrant-decomposition distance estimates for best-first search.
//!
//! Three variants share one context ([`HeuristicKind`]). Candidates whose
//! quadrant is empty are not dropped: the search re-scores them with
//! [`QuadrantHeuristic::deferred`] so best-first stays complete.
//!
//! All values are fixed-point integers in milli-cells so that priorities
//! order identically on every platform.

use pursuit_kernel::geometry::cell::Cell;
use pursuit_kernel::motion::evader::EvaderSet;

use crate::policy::HeuristicKind;
use crate::problem::Problem;

/// Fixed-point scale: one cell (or one turn) is 1000 units.
pub const DISTANCE_SCALE: i64 = 1000;

/// Quadrant of a cell relative to an origin. Cells on an axis belong to the
/// first quadrant (in declaration order) whose test they satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Quadrant {
    NorthEast,
    NorthWest,
    SouthWest,
    SouthEast,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Self::NorthEast,
        Self::NorthWest,
        Self::SouthWest,
        Self::SouthEast,
    ];

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::NorthEast => 0,
            Self::NorthWest => 1,
            Self::SouthWest => 2,
            Self::SouthEast => 3,
        }
    }

    #[must_use]
    pub fn classify(origin: Cell, cell: Cell) -> Self {
        let (x, y, px, py) = (cell.x, cell.y, origin.x, origin.y);
        if x >= px && y >= py {
            Self::NorthEast
        } else if x <= px && y >= py {
            Self::NorthWest
        } else if x <= px && y <= py {
            Self::SouthWest
        } else if x >= px && y <= py {
            Self::SouthEast
        } else {
            let fallback = Self::by_sign(origin, cell);
            tracing::warn!(
                %origin, %cell, ?fallback,
                "cell matched no quadrant test; using sign fallback"
            );
            fallback
        }
    }

    fn by_sign(origin: Cell, cell: Cell) -> Self {
        match (cell.x < origin.x, cell.y < origin.y) {
            (false, false) => Self::NorthEast,
            (true, false) => Self::NorthWest,
            (true, true) => Self::SouthWest,
            (false, true) => Self::SouthEast,
        }
    }
}

/// Result of evaluating one candidate cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Estimate {
    Finite(i64),
    /// No live evader in the candidate's quadrant.
    Infinite,
    /// Some intermediate value left the `i64` range.
    Overflow,
}

/// `round(sqrt(n))` for non-negative `n`, or `None` for negative input.
#[must_use]
pub fn isqrt_rounded(n: i64) -> Option<i64> {
    if n < 0 {
        return None;
    }
    if n < 2 {
        return Some(n);
    }
    // Newton iteration from above; converges to floor(sqrt(n)).
    let mut x = n;
    let mut y = n / 2 + 1;
    while y < x {
        x = y;
        y = (x + n / x) / 2;
    }
    // round up when n > x^2 + x, i.e. sqrt(n) >= x + 0.5
    Some(if n - x * x > x { x + 1 } else { x })
}

/// Euclidean distance between two cells in milli-cells.
#[must_use]
pub fn milli_distance(a: Cell, b: Cell) -> Option<i64> {
    let scaled = a
        .distance_squared(b)
        .checked_mul(DISTANCE_SCALE * DISTANCE_SCALE)?;
    isqrt_rounded(scaled)
}

/// Smallest milli-distance from `from` to any target. `None` when
/// `targets` is empty or a distance overflows.
fn nearest(from: Cell, targets: &[Cell]) -> Option<i64> {
    let mut best: Option<i64> = None;
    for &at in targets {
        let d = milli_distance(from, at)?;
        best = Some(best.map_or(d, |b| b.min(d)));
    }
    best
}

/// Length of the greedy nearest-neighbour walk from `from` through every
/// target. Ties go to the earlier target.
fn greedy_tour(from: Cell, targets: &[Cell]) -> Option<i64> {
    let mut left = targets.to_vec();
    let mut at = from;
    let mut total: i64 = 0;
    while !left.is_empty() {
        let mut best: Option<(usize, i64)> = None;
        for (i, &next) in left.iter().enumerate() {
            let d = milli_distance(at, next)?;
            match best {
                Some((_, b)) if b <= d => {}
                _ => best = Some((i, d)),
            }
        }
        let (i, d) = best?;
        total = total.checked_add(d)?;
        at = left.remove(i);
    }
    Some(total)
}

/// Per-expansion heuristic context.
///
/// Built once for the node being expanded, then queried for each candidate.
#[derive(Debug, Clone)]
pub struct QuadrantHeuristic {
    origin: Cell,
    kind: HeuristicKind,
    scale: i64,
    live_count: i64,
    /// Live evader locations at the children's ply, grouped by quadrant.
    by_quadrant: [Vec<Cell>; 4],
    /// Every live evader location at the children's ply, in id order.
    locations: Vec<Cell>,
    /// Every cell of every live evader's window at the children's ply.
    window_cells: Vec<Cell>,
}

impl QuadrantHeuristic {
    /// Context for children at `child_ply` of a node at `origin` with
    /// `live` evaders still to catch.
    #[must_use]
    pub fn new(
        problem: &Problem,
        origin: Cell,
        live: EvaderSet,
        child_ply: u32,
        scale: i64,
        kind: HeuristicKind,
    ) -> Self {
        let board = problem.board();
        let mut by_quadrant: [Vec<Cell>; 4] = Default::default();
        let mut locations = Vec::new();
        let mut window_cells = Vec::new();
        for id in live.iter() {
            let Some(evader) = problem.evader(id) else {
                continue;
            };
            let window = evader.catch_window(board, child_ply);
            window_cells.extend(window.current);
            window_cells.extend(window.adjacent);
            if let Some(at) = window.location() {
                by_quadrant[Quadrant::classify(origin, at).index()].push(at);
                locations.push(at);
            }
        }
        Self {
            origin,
            kind,
            scale,
            live_count: i64::from(live.len()),
            by_quadrant,
            locations,
            window_cells,
        }
    }

    #[must_use]
    pub fn quadrant_count(&self, quadrant: Quadrant) -> usize {
        self.by_quadrant[quadrant.index()].len()
    }

    /// Score `candidate`. A cell in a live evader's window is `0`; a cell
    /// whose quadrant holds no live evader is [`Estimate::Infinite`].
    #[must_use]
    pub fn estimate(&self, candidate: Cell) -> Estimate {
        if self.window_cells.contains(&candidate) {
            return Estimate::Finite(0);
        }
        let quadrant = &self.by_quadrant[Quadrant::classify(self.origin, candidate).index()];
        if quadrant.is_empty() {
            return Estimate::Infinite;
        }
        self.score(candidate, quadrant, 0)
    }

    /// Finite score for a candidate [`QuadrantHeuristic::estimate`] rated
    /// infinite: the same formula over every live evader regardless of
    /// quadrant, plus one evader's weight.
    #[must_use]
    pub fn deferred(&self, candidate: Cell) -> Estimate {
        if self.locations.is_empty() {
            return Estimate::Infinite;
        }
        let Some(penalty) = self.scale.checked_mul(DISTANCE_SCALE) else {
            return Estimate::Overflow;
        };
        self.score(candidate, &self.locations, penalty)
    }

    fn score(&self, candidate: Cell, targets: &[Cell], penalty: i64) -> Estimate {
        let Some(nearest) = nearest(candidate, targets) else {
            return Estimate::Overflow;
        };
        let Ok(count) = i64::try_from(targets.len()) else {
            return Estimate::Overflow;
        };
        let base = self
            .live_count
            .checked_mul(self.scale)
            .and_then(|v| v.checked_mul(DISTANCE_SCALE))
            .and_then(|v| v.checked_add(nearest))
            .and_then(|v| v.checked_add(penalty));
        let extra = match self.kind {
            HeuristicKind::Nearest => Some(0),
            HeuristicKind::Quadrant => count.checked_mul(DISTANCE_SCALE),
            HeuristicKind::Tour => greedy_tour(candidate, targets)
                .and_then(|t| count.checked_mul(DISTANCE_SCALE)?.checked_add(t)),
        };
        base.zip(extra)
            .and_then(|(b, e)| b.checked_add(e))
            .map_or(Estimate::Overflow, Estimate::Finite)
    }
}
