//! The engine's answer: an ordered hunter path, or an explicit "no solution".

use pursuit_kernel::geometry::cell::Cell;
use pursuit_kernel::proof::canon::{canonical_json_bytes, CanonError};
use pursuit_kernel::proof::hash::{canonical_hash, ContentHash};
use pursuit_kernel::proof::hash_domain::HashDomain;

/// Outcome of a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathResult {
    /// `cells` runs from the hunter's start to the cell that completed the
    /// last capture; `turns == cells.len() - 1`.
    Found { cells: Vec<Cell>, turns: u32 },
    NotFound,
}

impl PathResult {
    /// Wrap a reconstructed cell sequence. An empty sequence is `NotFound`.
    #[must_use]
    pub fn from_cells(cells: Vec<Cell>) -> Self {
        if cells.is_empty() {
            return Self::NotFound;
        }
        let turns = u32::try_from(cells.len() - 1).unwrap_or(u32::MAX);
        Self::Found { cells, turns }
    }

    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }

    /// The path cells; empty for `NotFound`.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        match self {
            Self::Found { cells, .. } => cells,
            Self::NotFound => &[],
        }
    }

    #[must_use]
    pub fn turns(&self) -> Option<u32> {
        match self {
            Self::Found { turns, .. } => Some(*turns),
            Self::NotFound => None,
        }
    }

    #[must_use]
    pub fn last_cell(&self) -> Option<Cell> {
        self.cells().last().copied()
    }

    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        match self {
            Self::Found { cells, turns } => serde_json::json!({
                "found": true,
                "turns": turns,
                "cells": cells.iter().map(|c| [c.x, c.y]).collect::<Vec<_>>(),
            }),
            Self::NotFound => serde_json::json!({ "found": false }),
        }
    }

    /// Content hash of the canonical JSON form.
    ///
    /// # Errors
    ///
    /// Propagates [`CanonError`] from canonicalization.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = canonical_json_bytes(&self.to_json_value())?;
        Ok(canonical_hash(HashDomain::SearchPath, &bytes))
    }
}
