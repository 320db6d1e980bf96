//! Frontier containers, one per strategy.
//!
//! Frontiers hold arena ids only. Deduplication lives in the search loop
//! because its rule differs per strategy.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use crate::node::{FrontierKey, NodeId, StateNode};

/// Open list shared by the three strategies.
pub trait Frontier {
    fn push(&mut self, node: &StateNode);
    fn pop(&mut self) -> Option<NodeId>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Largest size seen so far.
    fn high_water(&self) -> u64;
}

fn bump(high_water: &mut u64, len: usize) {
    let size = len as u64;
    if size > *high_water {
        *high_water = size;
    }
}

/// Breadth-first queue.
#[derive(Debug, Default)]
pub struct FifoFrontier {
    queue: VecDeque<NodeId>,
    high_water: u64,
}

impl FifoFrontier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for FifoFrontier {
    fn push(&mut self, node: &StateNode) {
        self.queue.push_back(node.id);
        bump(&mut self.high_water, self.queue.len());
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn high_water(&self) -> u64 {
        self.high_water
    }
}

/// Depth-first stack.
#[derive(Debug, Default)]
pub struct LifoFrontier {
    stack: Vec<NodeId>,
    high_water: u64,
}

impl LifoFrontier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for LifoFrontier {
    fn push(&mut self, node: &StateNode) {
        self.stack.push(node.id);
        bump(&mut self.high_water, self.stack.len());
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.stack.pop()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }

    fn high_water(&self) -> u64 {
        self.high_water
    }
}

/// Min-priority queue on [`FrontierKey`].
///
/// `BinaryHeap` is a max-heap, hence `Reverse`. Ids grow monotonically, so
/// equal priorities pop in insertion order.
#[derive(Debug, Default)]
pub struct BestFirstFrontier {
    heap: BinaryHeap<Reverse<FrontierKey>>,
    high_water: u64,
}

impl BestFirstFrontier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lowest key without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<FrontierKey> {
        self.heap.peek().map(|Reverse(k)| *k)
    }
}

impl Frontier for BestFirstFrontier {
    fn push(&mut self, node: &StateNode) {
        self.heap.push(Reverse(FrontierKey::from(node)));
        bump(&mut self.high_water, self.heap.len());
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.heap.pop().map(|Reverse(k)| k.id)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn high_water(&self) -> u64 {
        self.high_water
    }
}
