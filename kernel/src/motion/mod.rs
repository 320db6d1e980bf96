//! Piece motion: the hunter's knight moves and the evaders' straight-line drift.

pub mod evader;
pub mod knight;
