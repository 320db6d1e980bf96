//! Typed search errors.
//!
//! `SearchError` covers pre-flight failures only. A search that runs and
//! fails to catch everyone is not an error: it returns a result whose
//! [`crate::path::PathResult`] is `NotFound` and whose termination reason
//! says why.

use pursuit_kernel::geometry::cell::Cell;

/// Rejected search input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Board dimension below 3 (including zero and negative values).
    DimensionTooSmall { dimension: i32 },
    /// The hunter does not start on the interior.
    HunterOutsideInterior { cell: Cell },
    /// An evader does not start on the interior.
    EvaderOutsideInterior { index: usize, cell: Cell },
    /// Two evaders share a start cell.
    DuplicateEvaderStart {
        first: usize,
        second: usize,
        cell: Cell,
    },
    /// More evaders than an [`pursuit_kernel::motion::evader::EvaderSet`] can hold.
    TooManyEvaders { count: usize, max: usize },
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DimensionTooSmall { dimension } => {
                write!(f, "board dimension {dimension} is below 3")
            }
            Self::HunterOutsideInterior { cell } => {
                write!(f, "hunter start {cell} is outside the interior")
            }
            Self::EvaderOutsideInterior { index, cell } => {
                write!(f, "evader {index} start {cell} is outside the interior")
            }
            Self::DuplicateEvaderStart {
                first,
                second,
                cell,
            } => write!(f, "evaders {first} and {second} both start at {cell}"),
            Self::TooManyEvaders { count, max } => {
                write!(f, "{count} evaders exceeds the limit of {max}")
            }
        }
    }
}

/// Typed failure for pre-flight search validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The board, hunter or evader list is malformed.
    InvalidInput(InputError),
    /// A policy budget is unusable.
    InvalidPolicy { detail: String },
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(e) => write!(f, "invalid search input: {e}"),
            Self::InvalidPolicy { detail } => write!(f, "invalid search policy: {detail}"),
        }
    }
}

impl std::error::Error for SearchError {}

impl From<InputError> for SearchError {
    fn from(e: InputError) -> Self {
        Self::InvalidInput(e)
    }
}
