//! Pursuit Kernel: board geometry and piece motion for the knight-and-pawns
//! pursuit puzzle.
//!
//! # Modules
//!
//! - [`geometry`] -- cells, the bounded board, dense cell indexes
//! - [`motion`] -- the hunter's knight moves and evader trajectories
//! - [`proof`] -- canonical JSON and domain-separated content hashes
//!
//! # Dependency direction
//!
//! `geometry` ← `motion`; `proof` depends on nothing internal.
//! Everything here is pure: no search state, no I/O.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod geometry;
pub mod motion;
pub mod proof;
