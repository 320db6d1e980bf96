//! Pursuit Search: the knight-versus-pawns search engine.
//!
//! Three interchangeable strategies (breadth-first, depth-first with
//! capture-first ordering, and best-first on a quadrant heuristic) explore
//! hunter cell × remaining evaders × ply and return a [`PathResult`].
//!
//! # Crate dependency graph
//!
//! ```text
//! pursuit_kernel  ←  pursuit_search  ←  pursuit_harness
//! (board, motion)    (nodes, frontier)   (scenarios, runner, playback)
//! ```
//!
//! # Key types
//!
//! - [`Problem`] -- validated board, hunter start and evaders
//! - [`SearchPolicyV1`] / [`Strategy`] -- budgets and strategy tag
//! - [`StateNode`] -- arena node with its equivalence key
//! - [`SearchResult`] -- path, termination reason, nodes and counters
//! - [`SearchReportV1`] -- canonical JSON summary with a content hash

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod frontier;
pub mod heuristic;
pub mod node;
pub mod path;
pub mod policy;
pub mod problem;
pub mod report;
pub mod search;

pub use error::{InputError, SearchError};
pub use node::{NodeId, NodeKey, StateNode};
pub use path::PathResult;
pub use policy::{HeuristicKind, SearchPolicyV1, Strategy};
pub use problem::{EvaderSpec, Problem};
pub use report::SearchReportV1;
pub use search::{search, SearchResult, SearchStats, TerminationReasonV1};
