//! Search-tree nodes, their equivalence keys and frontier ordering.
//!
//! Nodes live in an arena (`Vec<StateNode>`) owned by the search run; a
//! parent link is an index into that arena, never a second owner.

use pursuit_kernel::geometry::cell::Cell;
use pursuit_kernel::motion::evader::EvaderSet;

/// Arena index of a node. Also its creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Strategy-specific part of a node's equivalence key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyTag {
    /// Breadth-first and best-first: nodes at different depths are distinct.
    Depth(u32),
    /// Depth-first: depth plus the hunter cell one ply earlier (`None` at
    /// the root).
    Previous { depth: u32, cell: Option<Cell> },
}

/// Two nodes with equal keys are the same search state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeKey {
    pub cell: Cell,
    pub remaining: EvaderSet,
    pub tag: KeyTag,
}

/// One immutable node of the search tree.
///
/// `remaining` is the set of evaders not yet caught on the way *into* this
/// node; evaders caught at `cell` itself are subtracted when the node is
/// expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateNode {
    pub id: NodeId,
    pub parent: Option<NodeId>,
    pub cell: Cell,
    pub remaining: EvaderSet,
    pub depth: u32,
    /// Cost so far in milli-turns (`depth * DISTANCE_SCALE`). Zero outside
    /// best-first.
    pub g_cost: i64,
    /// Heuristic estimate in milli-cells. Zero outside best-first.
    pub h_cost: i64,
    pub key: NodeKey,
}

impl StateNode {
    /// `g_cost + h_cost`. Both halves were range-checked when the node was
    /// built, so this saturates only on a corrupted node.
    #[must_use]
    pub fn f_cost(&self) -> i64 {
        self.g_cost.saturating_add(self.h_cost)
    }
}

/// Best-first ordering key: lowest priority first, then insertion order.
///
/// Used as `Reverse<FrontierKey>` in a max-heap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FrontierKey {
    pub priority: i64,
    pub id: NodeId,
}

impl From<&StateNode> for FrontierKey {
    fn from(node: &StateNode) -> Self {
        Self {
            priority: node.f_cost(),
            id: node.id,
        }
    }
}
