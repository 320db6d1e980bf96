//! Board geometry: cells, the bounded grid, and the dense cell index.

pub mod board;
pub mod cell;
