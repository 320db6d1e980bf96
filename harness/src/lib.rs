//! Pursuit Harness: the engine's outer collaborators.
//!
//! The harness loads scenario documents, enforces the caller-side placement
//! rules, runs one or several strategies and packages the outcome as a
//! hashed report. It also turns a found path into a cancellable playback
//! script. It does NOT implement search logic; it delegates to
//! `pursuit_search`.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod playback;
pub mod runner;
pub mod scenario;
