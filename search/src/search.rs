//! Search entry point and expansion loop.
//!
//! One loop drives all three strategies; they differ only in the frontier
//! container, the equivalence key tag, child ordering (depth-first) and
//! cost bookkeeping (best-first).

use std::collections::HashMap;

use pursuit_kernel::geometry::cell::Cell;
use pursuit_kernel::motion::evader::EvaderSet;
use pursuit_kernel::motion::knight::MoveTable;

use crate::error::SearchError;
use crate::frontier::{BestFirstFrontier, FifoFrontier, Frontier, LifoFrontier};
use crate::heuristic::{Estimate, QuadrantHeuristic, DISTANCE_SCALE};
use crate::node::{KeyTag, NodeId, NodeKey, StateNode};
use crate::path::PathResult;
use crate::policy::{SearchPolicyV1, Strategy};
use crate::problem::Problem;

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReasonV1 {
    /// A node with nothing left to catch was popped.
    GoalReached { node: NodeId },
    /// The frontier emptied with evaders still remaining.
    FrontierExhausted,
    /// `max_expansions` was reached before a goal.
    ExpansionBudgetExceeded,
}

impl TerminationReasonV1 {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::GoalReached { .. } => "goal_reached",
            Self::FrontierExhausted => "frontier_exhausted",
            Self::ExpansionBudgetExceeded => "expansion_budget_exceeded",
        }
    }
}

/// Counters collected during one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes_created: u64,
    pub expansions: u64,
    pub duplicates_suppressed: u64,
    /// Children dropped because a remaining evader could no longer be caught.
    pub escape_pruned: u64,
    /// Best-first children with an empty quadrant, re-scored and kept.
    pub heuristic_deferred: u64,
    /// Best-first children with no finite estimate at all.
    pub heuristic_pruned: u64,
    /// Best-first children whose cost left the `i64` range.
    pub overflow_discarded: u64,
    /// Children beyond `max_depth`.
    pub depth_skipped: u64,
    pub frontier_high_water: u64,
}

/// Result of a search run.
///
/// Holds every node created, so callers can inspect the tree after the fact.
/// Check [`SearchResult::path`] for the outcome and
/// [`SearchResult::termination`] for the reason.
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub strategy: Strategy,
    pub path: PathResult,
    pub termination: TerminationReasonV1,
    /// All nodes, indexed by [`NodeId`].
    pub nodes: Vec<StateNode>,
    pub goal: Option<NodeId>,
    pub stats: SearchStats,
}

impl SearchResult {
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        matches!(self.termination, TerminationReasonV1::GoalReached { .. })
    }

    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&StateNode> {
        self.nodes.get(id.index())
    }

    /// Nodes from the root to the goal; empty when no goal was reached.
    #[must_use]
    pub fn goal_chain(&self) -> Vec<StateNode> {
        self.goal
            .map(|goal| chain(&self.nodes, goal))
            .unwrap_or_default()
    }
}

fn chain(nodes: &[StateNode], goal: NodeId) -> Vec<StateNode> {
    let mut out = Vec::new();
    let mut cursor = Some(goal);
    while let Some(id) = cursor {
        let Some(node) = nodes.get(id.index()) else {
            break;
        };
        out.push(*node);
        // Parents are always created before their children.
        cursor = node.parent.filter(|p| *p < id);
    }
    out.reverse();
    out
}

/// Hunter cells from the root to `goal`, following parent links.
#[must_use]
pub fn reconstruct_path(nodes: &[StateNode], goal: NodeId) -> Vec<Cell> {
    chain(nodes, goal).into_iter().map(|n| n.cell).collect()
}

/// Run `strategy` on `problem`.
///
/// Failing to catch everyone is not an error: the result carries
/// [`PathResult::NotFound`] and the termination reason.
///
/// # Errors
///
/// Returns [`SearchError::InvalidPolicy`] when the policy fails validation.
pub fn search(
    problem: &Problem,
    strategy: Strategy,
    policy: &SearchPolicyV1,
) -> Result<SearchResult, SearchError> {
    policy.validate()?;
    tracing::debug!(
        %strategy,
        dimension = problem.board().dimension(),
        hunter = %problem.hunter(),
        evaders = problem.evaders().len(),
        "search start"
    );
    let run = Run::new(problem, strategy, policy);
    let result = match strategy {
        Strategy::BreadthFirst => run.drive(FifoFrontier::new()),
        Strategy::DepthFirst => run.drive(LifoFrontier::new()),
        Strategy::BestFirst => run.drive(BestFirstFrontier::new()),
    };
    tracing::debug!(
        %strategy,
        termination = result.termination.as_str(),
        turns = ?result.path.turns(),
        expansions = result.stats.expansions,
        nodes = result.stats.nodes_created,
        "search done"
    );
    Ok(result)
}

struct Run<'a> {
    problem: &'a Problem,
    strategy: Strategy,
    policy: &'a SearchPolicyV1,
    moves: MoveTable,
    nodes: Vec<StateNode>,
    /// Equivalence key to the best cost seen for it.
    closed: HashMap<NodeKey, i64>,
    stats: SearchStats,
    scale: i64,
}

impl<'a> Run<'a> {
    fn new(problem: &'a Problem, strategy: Strategy, policy: &'a SearchPolicyV1) -> Self {
        let board = *problem.board();
        Self {
            problem,
            strategy,
            policy,
            moves: MoveTable::new(board),
            nodes: Vec::new(),
            closed: HashMap::new(),
            stats: SearchStats::default(),
            scale: policy
                .heuristic_scale
                .unwrap_or_else(|| i64::from(board.dimension())),
        }
    }

    fn tag(&self, depth: u32, previous: Option<Cell>) -> KeyTag {
        match self.strategy {
            // Depth stays in the key: without it a deep visit shadows a
            // shallower copy of the same state and depth-first loses paths.
            Strategy::DepthFirst => KeyTag::Previous {
                depth,
                cell: previous,
            },
            Strategy::BreadthFirst | Strategy::BestFirst => KeyTag::Depth(depth),
        }
    }

    fn drive<F: Frontier>(mut self, mut frontier: F) -> SearchResult {
        let hunter = self.problem.hunter();
        let remaining = self.problem.all_evaders();
        let root_key = NodeKey {
            cell: hunter,
            remaining,
            tag: self.tag(0, None),
        };
        self.closed.insert(root_key, 0);
        if let Some(root) = self.create(None, hunter, remaining, 0, 0, 0, root_key) {
            frontier.push(&root);
        }

        let termination = loop {
            let Some(id) = frontier.pop() else {
                break TerminationReasonV1::FrontierExhausted;
            };
            let Some(&node) = self.nodes.get(id.index()) else {
                continue;
            };
            if self.is_stale(&node) {
                continue;
            }
            let caught = self
                .problem
                .caught_at(node.cell, node.remaining, node.depth);
            let live = node.remaining.difference(caught);
            if live.is_empty() {
                break TerminationReasonV1::GoalReached { node: id };
            }
            if self.stats.expansions >= self.policy.max_expansions {
                break TerminationReasonV1::ExpansionBudgetExceeded;
            }
            self.stats.expansions += 1;
            self.expand(&node, live, &mut frontier);
        };

        self.stats.frontier_high_water = frontier.high_water();
        let goal = match termination {
            TerminationReasonV1::GoalReached { node } => Some(node),
            _ => None,
        };
        let path = goal.map_or(PathResult::NotFound, |g| {
            PathResult::from_cells(reconstruct_path(&self.nodes, g))
        });
        SearchResult {
            strategy: self.strategy,
            path,
            termination,
            nodes: self.nodes,
            goal,
            stats: self.stats,
        }
    }

    /// A best-first entry superseded by a cheaper push of the same key.
    fn is_stale(&self, node: &StateNode) -> bool {
        self.strategy == Strategy::BestFirst
            && self
                .closed
                .get(&node.key)
                .is_some_and(|best| *best < node.f_cost())
    }

    fn expand<F: Frontier>(&mut self, node: &StateNode, live: EvaderSet, frontier: &mut F) {
        let candidates: Vec<Cell> = self.moves.moves_from(node.cell).iter().copied().collect();
        let fanout = candidates.len() as u64;

        let Some(depth) = node
            .depth
            .checked_add(1)
            .filter(|d| *d <= self.policy.max_depth)
        else {
            self.stats.depth_skipped += fanout;
            return;
        };
        // Every child shares `live`, so the horizon check covers the whole fan-out.
        if !self.problem.all_catchable_at(live, depth) {
            self.stats.escape_pruned += fanout;
            return;
        }

        let ordered = match self.strategy {
            Strategy::DepthFirst => self.captures_last(candidates, live, depth),
            Strategy::BreadthFirst | Strategy::BestFirst => candidates,
        };
        let heuristic = (self.strategy == Strategy::BestFirst)
            .then(|| {
                QuadrantHeuristic::new(
                    self.problem,
                    node.cell,
                    live,
                    depth,
                    self.scale,
                    self.policy.heuristic,
                )
            });
        let g_cost = if heuristic.is_some() {
            i64::from(depth).checked_mul(DISTANCE_SCALE)
        } else {
            Some(0)
        };

        for cell in ordered {
            let (g, h) = match (&heuristic, g_cost) {
                (None, _) => (0, 0),
                (Some(_), None) => {
                    self.stats.overflow_discarded += 1;
                    continue;
                }
                (Some(heuristic), Some(g)) => {
                    let estimate = match heuristic.estimate(cell) {
                        Estimate::Infinite => {
                            self.stats.heuristic_deferred += 1;
                            heuristic.deferred(cell)
                        }
                        other => other,
                    };
                    match estimate {
                        Estimate::Finite(h) => (g, h),
                        Estimate::Infinite => {
                            self.stats.heuristic_pruned += 1;
                            continue;
                        }
                        Estimate::Overflow => {
                            self.stats.overflow_discarded += 1;
                            continue;
                        }
                    }
                }
            };
            let Some(cost) = g.checked_add(h) else {
                self.stats.overflow_discarded += 1;
                continue;
            };

            let key = NodeKey {
                cell,
                remaining: live,
                tag: self.tag(depth, Some(node.cell)),
            };
            if !self.admit(key, cost) {
                self.stats.duplicates_suppressed += 1;
                continue;
            }
            if let Some(child) = self.create(Some(node.id), cell, live, depth, g, h, key) {
                frontier.push(&child);
            }
        }
    }

    /// Record `key` at `cost`. Returns `false` for a duplicate.
    fn admit(&mut self, key: NodeKey, cost: i64) -> bool {
        match self.closed.get_mut(&key) {
            None => {
                self.closed.insert(key, cost);
                true
            }
            Some(best) if self.strategy == Strategy::BestFirst && cost < *best => {
                *best = cost;
                true
            }
            Some(_) => false,
        }
    }

    /// Stable partition: non-capturing moves, then capturing moves, so a
    /// stack pops the capturing ones first.
    fn captures_last(&self, candidates: Vec<Cell>, live: EvaderSet, depth: u32) -> Vec<Cell> {
        let (captures, quiet): (Vec<Cell>, Vec<Cell>) = candidates
            .into_iter()
            .partition(|c| !self.problem.caught_at(*c, live, depth).is_empty());
        let mut ordered = quiet;
        ordered.extend(captures);
        ordered
    }

    #[allow(clippy::too_many_arguments)]
    fn create(
        &mut self,
        parent: Option<NodeId>,
        cell: Cell,
        remaining: EvaderSet,
        depth: u32,
        g_cost: i64,
        h_cost: i64,
        key: NodeKey,
    ) -> Option<StateNode> {
        let Ok(raw) = u32::try_from(self.nodes.len()) else {
            self.stats.overflow_discarded += 1;
            return None;
        };
        let node = StateNode {
            id: NodeId(raw),
            parent,
            cell,
            remaining,
            depth,
            g_cost,
            h_cost,
            key,
        };
        self.nodes.push(node);
        self.stats.nodes_created += 1;
        Some(node)
    }
}
