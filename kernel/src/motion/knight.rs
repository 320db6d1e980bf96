//! Hunter move generation.
//!
//! Moves are built per axis-quadrant. Each of the four blocks (left, right,
//! up, down) first tests the full two-cell offset along its axis and only
//! when that lands outside the interior falls back to the one-cell offset
//! paired with a two-cell step on the other axis. A hunter hugging an edge
//! therefore still sees the reduced set of jumps available to it.
//!
//! The result is a set in canonical order (ascending [`CellIndex`]), which
//! is the enumeration order every search strategy expands children in.

use std::collections::HashMap;

use crate::geometry::board::{Board, CellIndex};
use crate::geometry::cell::Cell;

/// The eight knight offsets.
pub const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Deduplicated legal destinations in canonical order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveSet {
    cells: Vec<Cell>,
}

impl MoveSet {
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.binary_search(&cell).is_ok()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Cell] {
        &self.cells
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    fn insert_interior(&mut self, board: &Board, cell: Cell) {
        if board.is_interior(cell) && !self.cells.contains(&cell) {
            self.cells.push(cell);
        }
    }

    /// `Cell` orders by `(x, y)`, which is exactly `x * d + y` order.
    fn canonicalize(mut self) -> Self {
        self.cells.sort_unstable();
        self
    }
}

impl<'a> IntoIterator for &'a MoveSet {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

/// Enumerate the hunter's legal destinations from `from`.
///
/// An origin outside the interior has no legal moves.
#[must_use]
pub fn legal_moves(board: &Board, from: Cell) -> MoveSet {
    let mut moves = MoveSet::default();
    if !board.is_interior(from) {
        return moves;
    }

    // Left, then right.
    for sx in [-1, 1] {
        if board.axis_in_interior(from.x + 2 * sx) {
            moves.insert_interior(board, from.offset(2 * sx, 1));
            moves.insert_interior(board, from.offset(2 * sx, -1));
        } else if board.axis_in_interior(from.x + sx) {
            moves.insert_interior(board, from.offset(sx, 2));
            moves.insert_interior(board, from.offset(sx, -2));
        }
    }

    // Up, then down.
    for sy in [1, -1] {
        if board.axis_in_interior(from.y + 2 * sy) {
            moves.insert_interior(board, from.offset(1, 2 * sy));
            moves.insert_interior(board, from.offset(-1, 2 * sy));
        } else if board.axis_in_interior(from.y + sy) {
            moves.insert_interior(board, from.offset(-2, sy));
            moves.insert_interior(board, from.offset(2, sy));
        }
    }

    moves.canonicalize()
}

/// Memoized legal moves, filled on first lookup of each cell.
///
/// Only cells the search actually reaches are stored, so very large boards
/// cost nothing up front. Border and off-board cells map to the empty set.
#[derive(Debug, Clone)]
pub struct MoveTable {
    board: Board,
    by_index: HashMap<CellIndex, MoveSet>,
}

impl MoveTable {
    #[must_use]
    pub fn new(board: Board) -> Self {
        Self {
            board,
            by_index: HashMap::new(),
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of cells memoized so far.
    #[must_use]
    pub fn cached(&self) -> usize {
        self.by_index.len()
    }

    /// Legal moves from `cell`; empty for border or off-board cells.
    pub fn moves_from(&mut self, cell: Cell) -> &MoveSet {
        static EMPTY: MoveSet = MoveSet { cells: Vec::new() };
        if !self.board.is_interior(cell) {
            return &EMPTY;
        }
        let Some(idx) = self.board.index_of(cell) else {
            return &EMPTY;
        };
        let board = self.board;
        self.by_index
            .entry(idx)
            .or_insert_with(|| legal_moves(&board, cell))
    }
}
