//! Search strategy selection and budget configuration.

use crate::error::SearchError;

/// Which expansion order to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Strategy {
    /// FIFO frontier; dedup on `(cell, remaining, depth)`.
    BreadthFirst,
    /// LIFO frontier with capturing moves popped first; dedup on
    /// `(cell, remaining, depth, previous cell)`.
    DepthFirst,
    /// Priority queue on `depth + quadrant heuristic`; dedup keeps the
    /// cheapest cost per `(cell, remaining, depth)`.
    BestFirst,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Self::BreadthFirst, Self::DepthFirst, Self::BestFirst];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BreadthFirst => "breadth_first",
            Self::DepthFirst => "depth_first",
            Self::BestFirst => "best_first",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error parsing a [`Strategy`] tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStrategyError {
    pub raw: String,
}

impl std::fmt::Display for ParseStrategyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown strategy {:?} (expected breadth_first, depth_first or best_first)",
            self.raw
        )
    }
}

impl std::error::Error for ParseStrategyError {}

impl std::str::FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "breadth_first" | "bfs" => Ok(Self::BreadthFirst),
            "depth_first" | "dfs" => Ok(Self::DepthFirst),
            "best_first" | "astar" => Ok(Self::BestFirst),
            _ => Err(ParseStrategyError { raw: s.to_string() }),
        }
    }
}

/// Which distance estimate best-first ranks candidates with.
///
/// All three share the capture-window zero and the empty-quadrant rule;
/// they differ in how the evaders of the candidate's quadrant are scored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HeuristicKind {
    /// Live-count weight + nearest evader + evaders in the quadrant.
    #[default]
    Quadrant,
    /// Live-count weight + nearest evader.
    Nearest,
    /// [`HeuristicKind::Quadrant`] plus the length of a greedy
    /// nearest-neighbour walk through every evader in the quadrant.
    Tour,
}

impl HeuristicKind {
    pub const ALL: [HeuristicKind; 3] = [Self::Quadrant, Self::Nearest, Self::Tour];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Quadrant => "quadrant",
            Self::Nearest => "nearest",
            Self::Tour => "tour",
        }
    }
}

impl std::fmt::Display for HeuristicKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error parsing a [`HeuristicKind`] tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseHeuristicKindError {
    pub raw: String,
}

impl std::fmt::Display for ParseHeuristicKindError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown heuristic {:?} (expected quadrant, nearest or tour)",
            self.raw
        )
    }
}

impl std::error::Error for ParseHeuristicKindError {}

impl std::str::FromStr for HeuristicKind {
    type Err = ParseHeuristicKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "quadrant" | "h1" => Ok(Self::Quadrant),
            "nearest" | "h2" => Ok(Self::Nearest),
            "tour" | "h3" => Ok(Self::Tour),
            _ => Err(ParseHeuristicKindError { raw: s.to_string() }),
        }
    }
}

/// Search budgets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPolicyV1 {
    /// Hard cap on node expansions.
    pub max_expansions: u64,
    /// Children deeper than this are not generated.
    pub max_depth: u32,
    /// Per-evader weight in the best-first heuristic. `None` uses the
    /// board dimension.
    pub heuristic_scale: Option<i64>,
    /// Best-first estimate. Ignored by the other strategies.
    pub heuristic: HeuristicKind,
}

impl SearchPolicyV1 {
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] for a zero expansion budget, a
    /// zero depth budget, or a non-positive heuristic scale.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_expansions == 0 {
            return Err(SearchError::InvalidPolicy {
                detail: "max_expansions must be at least 1".into(),
            });
        }
        if self.max_depth == 0 {
            return Err(SearchError::InvalidPolicy {
                detail: "max_depth must be at least 1".into(),
            });
        }
        if let Some(scale) = self.heuristic_scale {
            if scale <= 0 {
                return Err(SearchError::InvalidPolicy {
                    detail: format!("heuristic_scale must be positive, got {scale}"),
                });
            }
        }
        Ok(())
    }

    /// JSON projection for reports. `heuristic_scale` is `null` when unset.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "heuristic": self.heuristic.as_str(),
            "heuristic_scale": self.heuristic_scale,
            "max_depth": self.max_depth,
            "max_expansions": self.max_expansions,
        })
    }
}

impl Default for SearchPolicyV1 {
    fn default() -> Self {
        Self {
            max_expansions: 1_000_000,
            max_depth: 256,
            heuristic_scale: None,
            heuristic: HeuristicKind::Quadrant,
        }
    }
}
