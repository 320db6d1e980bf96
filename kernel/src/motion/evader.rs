//! Evader motion model.
//!
//! An evader walks one cell per ply in a fixed compass direction and never
//! reacts to the hunter. Its position at any ply is a pure function of
//! `(start, direction, ply)`; nothing here is ever mutated during a search.

use crate::geometry::board::Board;
use crate::geometry::cell::Cell;

/// Maximum number of evaders a single search can track.
pub const MAX_EVADERS: usize = 64;

/// Axis-aligned compass direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Toward increasing `y`.
    North,
    /// Toward increasing `x`.
    East,
    /// Toward decreasing `y`.
    South,
    /// Toward decreasing `x`.
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Unit step `(dx, dy)`.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::North => (0, 1),
            Self::East => (1, 0),
            Self::South => (0, -1),
            Self::West => (-1, 0),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::North => "north",
            Self::East => "east",
            Self::South => "south",
            Self::West => "west",
        }
    }

    /// Plies until an evader at `start` heading this way stands outside the
    /// interior.
    #[must_use]
    pub fn steps_to_exit(self, board: &Board, start: Cell) -> u32 {
        let d = board.dimension();
        let steps = match self {
            Self::North => d - 1 - start.y,
            Self::East => d - 1 - start.x,
            Self::South => start.y,
            Self::West => start.x,
        };
        steps.max(0).unsigned_abs()
    }

    /// Direction giving the longest run before escape. Horizontal wins ties;
    /// a vertical run must be strictly longer to be chosen.
    #[must_use]
    pub fn longest_run(board: &Board, start: Cell) -> Self {
        let pick = |a: Self, b: Self| {
            if b.steps_to_exit(board, start) > a.steps_to_exit(board, start) {
                b
            } else {
                a
            }
        };
        let horizontal = pick(Self::East, Self::West);
        let vertical = pick(Self::North, Self::South);
        pick(horizontal, vertical)
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error parsing a [`Direction`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDirectionError {
    pub raw: String,
}

impl std::fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown direction {:?} (expected north, east, south or west)",
            self.raw
        )
    }
}

impl std::error::Error for ParseDirectionError {}

impl std::str::FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseDirectionError { raw: s.to_string() })
    }
}

/// Stable evader identifier: its position in the caller's evader list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EvaderId(pub u8);

impl EvaderId {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// The pair of cells checked for a capture at one ply.
///
/// `current` is where the evader stands after its move this ply; `adjacent`
/// is where it stood before (absent at ply 0). A hunter landing on either
/// catches it. A side is `None` once it falls outside the interior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatchWindow {
    pub current: Option<Cell>,
    pub adjacent: Option<Cell>,
}

impl CatchWindow {
    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        self.current == Some(cell) || self.adjacent == Some(cell)
    }

    /// At least one side of the window is still on the interior.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.current.is_some() || self.adjacent.is_some()
    }

    /// The best known location: `current`, else `adjacent`.
    #[must_use]
    pub fn location(&self) -> Option<Cell> {
        self.current.or(self.adjacent)
    }
}

/// A deterministic straight-line mover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Evader {
    pub id: EvaderId,
    pub start: Cell,
    pub direction: Direction,
}

impl Evader {
    #[must_use]
    pub const fn new(id: EvaderId, start: Cell, direction: Direction) -> Self {
        Self {
            id,
            start,
            direction,
        }
    }

    #[must_use]
    pub fn steps_to_exit(&self, board: &Board) -> u32 {
        self.direction.steps_to_exit(board, self.start)
    }

    /// Unclipped projection after `ply` moves.
    #[must_use]
    pub fn projected(&self, ply: u32) -> Cell {
        let (dx, dy) = self.direction.delta();
        let n = i32::try_from(ply).unwrap_or(i32::MAX);
        self.start.offset(dx.saturating_mul(n), dy.saturating_mul(n))
    }

    /// Position after `ply` moves, or `None` once it has left the interior.
    #[must_use]
    pub fn position_at(&self, board: &Board, ply: u32) -> Option<Cell> {
        if ply >= self.steps_to_exit(board) {
            return None;
        }
        let cell = self.projected(ply);
        board.is_interior(cell).then_some(cell)
    }

    /// The capture window at `ply`.
    #[must_use]
    pub fn catch_window(&self, board: &Board, ply: u32) -> CatchWindow {
        CatchWindow {
            current: self.position_at(board, ply),
            adjacent: ply
                .checked_sub(1)
                .and_then(|prev| self.position_at(board, prev)),
        }
    }

    /// Whether some hunter cell can still catch this evader at `ply`.
    #[must_use]
    pub fn is_catchable_at(&self, board: &Board, ply: u32) -> bool {
        ply <= self.steps_to_exit(board)
    }
}

/// A set of evader ids, one bit per id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct EvaderSet(u64);

impl EvaderSet {
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Ids `0..count`. `count` is clamped to [`MAX_EVADERS`].
    #[must_use]
    pub const fn first_n(count: usize) -> Self {
        if count >= MAX_EVADERS {
            Self(u64::MAX)
        } else {
            Self((1u64 << count) - 1)
        }
    }

    #[must_use]
    pub const fn bits(self) -> u64 {
        self.0
    }

    #[must_use]
    pub const fn contains(self, id: EvaderId) -> bool {
        (id.0 as usize) < MAX_EVADERS && self.0 & (1u64 << (id.0 as u32)) != 0
    }

    pub fn insert(&mut self, id: EvaderId) {
        if id.index() < MAX_EVADERS {
            self.0 |= 1u64 << u32::from(id.0);
        }
    }

    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    #[must_use]
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Members in ascending id order.
    pub fn iter(self) -> impl Iterator<Item = EvaderId> {
        let bits = self.0;
        (0u8..64)
            .filter(move |&i| bits & (1u64 << u32::from(i)) != 0)
            .map(EvaderId)
    }
}

impl FromIterator<EvaderId> for EvaderSet {
    fn from_iter<T: IntoIterator<Item = EvaderId>>(iter: T) -> Self {
        let mut set = Self::empty();
        for id in iter {
            set.insert(id);
        }
        set
    }
}
