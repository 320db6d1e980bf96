//! The immutable search input: board, hunter start, evaders.

use pursuit_kernel::geometry::board::Board;
use pursuit_kernel::geometry::cell::Cell;
use pursuit_kernel::motion::evader::{Direction, Evader, EvaderId, EvaderSet, MAX_EVADERS};

use crate::error::{InputError, SearchError};

/// Caller-supplied evader descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvaderSpec {
    pub start: Cell,
    pub direction: Direction,
}

impl EvaderSpec {
    #[must_use]
    pub const fn new(start: Cell, direction: Direction) -> Self {
        Self { start, direction }
    }
}

/// A validated pursuit problem.
///
/// Cheap to clone; each concurrent search should own its own copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    board: Board,
    hunter: Cell,
    evaders: Vec<Evader>,
}

impl Problem {
    /// Validate and build a problem. Evader ids follow list order.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidInput`] when the dimension is below 3,
    /// the hunter or an evader starts outside the interior, two evaders
    /// share a start cell, or there are more than 64 evaders.
    pub fn new(dimension: i32, hunter: Cell, evaders: &[EvaderSpec]) -> Result<Self, SearchError> {
        let board =
            Board::new(dimension).map_err(|_| InputError::DimensionTooSmall { dimension })?;
        if !board.is_interior(hunter) {
            return Err(InputError::HunterOutsideInterior { cell: hunter }.into());
        }
        if evaders.len() > MAX_EVADERS {
            return Err(InputError::TooManyEvaders {
                count: evaders.len(),
                max: MAX_EVADERS,
            }
            .into());
        }
        for (index, spec) in evaders.iter().enumerate() {
            if !board.is_interior(spec.start) {
                return Err(InputError::EvaderOutsideInterior {
                    index,
                    cell: spec.start,
                }
                .into());
            }
            if let Some(first) = evaders[..index].iter().position(|e| e.start == spec.start) {
                return Err(InputError::DuplicateEvaderStart {
                    first,
                    second: index,
                    cell: spec.start,
                }
                .into());
            }
        }

        let evaders = evaders
            .iter()
            .zip(0u8..)
            .map(|(spec, id)| Evader::new(EvaderId(id), spec.start, spec.direction))
            .collect();
        Ok(Self {
            board,
            hunter,
            evaders,
        })
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn hunter(&self) -> Cell {
        self.hunter
    }

    #[must_use]
    pub fn evaders(&self) -> &[Evader] {
        &self.evaders
    }

    #[must_use]
    pub fn evader(&self, id: EvaderId) -> Option<&Evader> {
        self.evaders.get(id.index())
    }

    /// Every evader id.
    #[must_use]
    pub fn all_evaders(&self) -> EvaderSet {
        EvaderSet::first_n(self.evaders.len())
    }

    /// Members of `candidates` whose catch window at `ply` contains `cell`.
    #[must_use]
    pub fn caught_at(&self, cell: Cell, candidates: EvaderSet, ply: u32) -> EvaderSet {
        candidates
            .iter()
            .filter(|id| {
                self.evader(*id)
                    .is_some_and(|e| e.catch_window(&self.board, ply).contains(cell))
            })
            .collect()
    }

    /// Whether every member of `set` can still be caught at `ply`.
    #[must_use]
    pub fn all_catchable_at(&self, set: EvaderSet, ply: u32) -> bool {
        set.iter().all(|id| {
            self.evader(id)
                .is_some_and(|e| e.is_catchable_at(&self.board, ply))
        })
    }
}
