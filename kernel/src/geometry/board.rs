//! Immutable grid geometry.
//!
//! A board of dimension `d` has `d * d` cells. The outermost ring is
//! unreachable terrain; the playable interior is `[1, d-2]` on each axis.
//! Every cell (border included) has a dense [`CellIndex`] so the search
//! can key states on a small integer instead of a coordinate pair.

use super::cell::Cell;

/// Smallest dimension with a non-empty interior.
pub const MIN_DIMENSION: i32 = 3;

/// Dense integer id of an on-board cell: `x * d + y`.
///
/// 64 bits wide: `d * d` exceeds `u32` once `d` passes 65535.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellIndex(pub u64);

impl CellIndex {
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Error constructing a [`Board`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Dimension below [`MIN_DIMENSION`].
    DimensionTooSmall { dimension: i32 },
}

impl std::fmt::Display for BoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DimensionTooSmall { dimension } => write!(
                f,
                "board dimension {dimension} is below the minimum of {MIN_DIMENSION}"
            ),
        }
    }
}

impl std::error::Error for BoardError {}

/// Square board geometry, fixed for the lifetime of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    dimension: i32,
}

impl Board {
    /// # Errors
    ///
    /// Returns [`BoardError::DimensionTooSmall`] if `dimension < 3`.
    pub fn new(dimension: i32) -> Result<Self, BoardError> {
        if dimension < MIN_DIMENSION {
            return Err(BoardError::DimensionTooSmall { dimension });
        }
        Ok(Self { dimension })
    }

    #[must_use]
    pub const fn dimension(&self) -> i32 {
        self.dimension
    }

    /// Lowest interior coordinate on either axis.
    #[must_use]
    pub const fn interior_min(&self) -> i32 {
        1
    }

    /// Highest interior coordinate on either axis.
    #[must_use]
    pub const fn interior_max(&self) -> i32 {
        self.dimension - 2
    }

    /// Whether `cell` lies in the playable interior.
    #[must_use]
    pub fn is_interior(&self, cell: Cell) -> bool {
        self.axis_in_interior(cell.x) && self.axis_in_interior(cell.y)
    }

    /// Whether a single coordinate lies in `[1, d-2]`.
    #[must_use]
    pub fn axis_in_interior(&self, v: i32) -> bool {
        (self.interior_min()..=self.interior_max()).contains(&v)
    }

    /// Whether `cell` is anywhere on the board, border included.
    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        (0..self.dimension).contains(&cell.x) && (0..self.dimension).contains(&cell.y)
    }

    /// Total number of cells (`d * d`).
    #[must_use]
    pub fn cell_count(&self) -> u64 {
        let d = u64::from(self.dimension.unsigned_abs());
        d * d
    }

    /// Map an on-board cell to its dense index. `None` for off-board cells.
    #[must_use]
    pub fn index_of(&self, cell: Cell) -> Option<CellIndex> {
        if !self.contains(cell) {
            return None;
        }
        let raw = i64::from(cell.x) * i64::from(self.dimension) + i64::from(cell.y);
        u64::try_from(raw).ok().map(CellIndex)
    }

    /// Inverse of [`Board::index_of`]. `None` for indexes past `d * d`.
    #[must_use]
    pub fn cell_of(&self, index: CellIndex) -> Option<Cell> {
        if index.0 >= self.cell_count() {
            return None;
        }
        let d = u64::from(self.dimension.unsigned_abs());
        let x = i32::try_from(index.0 / d).ok()?;
        let y = i32::try_from(index.0 % d).ok()?;
        Some(Cell::new(x, y))
    }

    /// All interior cells in ascending index order.
    pub fn interior_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let (lo, hi) = (self.interior_min(), self.interior_max());
        (lo..=hi).flat_map(move |x| (lo..=hi).map(move |y| Cell::new(x, y)))
    }
}
