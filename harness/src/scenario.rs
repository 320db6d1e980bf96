//! Scenario documents: the JSON description of one pursuit puzzle.
//!
//! ```json
//! {"dimension": 10, "hunter": [5, 5],
//!  "evaders": [{"start": [8, 3], "direction": "east"}],
//!  "strategy": "breadth_first",
//!  "policy": {"max_expansions": 1000000, "max_depth": 256, "heuristic": "quadrant"}}
//! ```
//!
//! `strategy` and `policy` are optional, as is each evader's `direction`
//! (defaults to the evader's longest straight run across the interior).

use std::path::Path;

use pursuit_kernel::geometry::board::Board;
use pursuit_kernel::geometry::cell::Cell;
use pursuit_kernel::motion::evader::Direction;
use pursuit_kernel::motion::knight::legal_moves;
use pursuit_kernel::proof::canon::{canonical_json_bytes, CanonError};
use pursuit_kernel::proof::hash::{canonical_hash, ContentHash};
use pursuit_kernel::proof::hash_domain::HashDomain;
use pursuit_search::{EvaderSpec, HeuristicKind, Problem, SearchError, SearchPolicyV1, Strategy};
use serde_json::Value;

/// Caller-side placement rule broken by a scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// An evader starts on the hunter's cell.
    EvaderOnHunter { index: usize, cell: Cell },
    /// An evader starts on one of the hunter's opening moves.
    EvaderOnHunterMove { index: usize, cell: Cell },
}

impl std::fmt::Display for PlacementError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EvaderOnHunter { index, cell } => {
                write!(f, "evader {index} starts on the hunter at {cell}")
            }
            Self::EvaderOnHunterMove { index, cell } => {
                write!(f, "evader {index} starts on the hunter's opening move {cell}")
            }
        }
    }
}

/// Error loading or validating a scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScenarioError {
    /// Reading the file failed.
    Io { path: String, detail: String },
    /// The bytes are not JSON.
    Parse { detail: String },
    /// A required field is absent.
    MissingField { field: String },
    /// A field has the wrong shape or value.
    InvalidField { field: String, detail: String },
    /// A caller-side placement rule is broken.
    Placement(PlacementError),
}

impl std::fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, detail } => write!(f, "I/O error reading {path}: {detail}"),
            Self::Parse { detail } => write!(f, "scenario is not valid JSON: {detail}"),
            Self::MissingField { field } => write!(f, "scenario is missing `{field}`"),
            Self::InvalidField { field, detail } => write!(f, "invalid `{field}`: {detail}"),
            Self::Placement(e) => write!(f, "placement rejected: {e}"),
        }
    }
}

impl std::error::Error for ScenarioError {}

impl From<PlacementError> for ScenarioError {
    fn from(e: PlacementError) -> Self {
        Self::Placement(e)
    }
}

/// A parsed scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub dimension: i32,
    pub hunter: Cell,
    pub evaders: Vec<EvaderSpec>,
    pub strategy: Strategy,
    pub policy: SearchPolicyV1,
}

fn invalid(field: &str, detail: impl Into<String>) -> ScenarioError {
    ScenarioError::InvalidField {
        field: field.to_string(),
        detail: detail.into(),
    }
}

fn required<'v>(
    obj: &'v serde_json::Map<String, Value>,
    field: &str,
) -> Result<&'v Value, ScenarioError> {
    obj.get(field).ok_or_else(|| ScenarioError::MissingField {
        field: field.to_string(),
    })
}

fn parse_i32(value: &Value, field: &str) -> Result<i32, ScenarioError> {
    value
        .as_i64()
        .and_then(|v| i32::try_from(v).ok())
        .ok_or_else(|| invalid(field, format!("expected a 32-bit integer, got {value}")))
}

fn parse_cell(value: &Value, field: &str) -> Result<Cell, ScenarioError> {
    match value.as_array().map(Vec::as_slice) {
        Some([x, y]) => Ok(Cell::new(parse_i32(x, field)?, parse_i32(y, field)?)),
        _ => Err(invalid(field, format!("expected [x, y], got {value}"))),
    }
}

fn parse_u64(value: &Value, field: &str) -> Result<u64, ScenarioError> {
    value
        .as_u64()
        .ok_or_else(|| invalid(field, format!("expected a non-negative integer, got {value}")))
}

fn parse_policy(value: &Value) -> Result<SearchPolicyV1, ScenarioError> {
    let obj = value
        .as_object()
        .ok_or_else(|| invalid("policy", "expected an object"))?;
    let mut policy = SearchPolicyV1::default();
    if let Some(v) = obj.get("max_expansions") {
        policy.max_expansions = parse_u64(v, "policy.max_expansions")?;
    }
    if let Some(v) = obj.get("max_depth") {
        policy.max_depth = u32::try_from(parse_u64(v, "policy.max_depth")?)
            .map_err(|_| invalid("policy.max_depth", "exceeds u32"))?;
    }
    match obj.get("heuristic_scale") {
        None | Some(Value::Null) => {}
        Some(v) => {
            policy.heuristic_scale = Some(
                v.as_i64()
                    .ok_or_else(|| invalid("policy.heuristic_scale", format!("got {v}")))?,
            );
        }
    }
    if let Some(v) = obj.get("heuristic") {
        let tag = v
            .as_str()
            .ok_or_else(|| invalid("policy.heuristic", format!("expected a string, got {v}")))?;
        policy.heuristic = tag
            .parse::<HeuristicKind>()
            .map_err(|e| invalid("policy.heuristic", e.to_string()))?;
    }
    Ok(policy)
}

impl Scenario {
    /// Parse a scenario document.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::Parse`] for malformed JSON and
    /// `MissingField` / `InvalidField` for schema problems. Placement rules
    /// are checked separately by [`Scenario::validate_placement`].
    pub fn from_json_bytes(bytes: &[u8]) -> Result<Self, ScenarioError> {
        let root: Value = serde_json::from_slice(bytes).map_err(|e| ScenarioError::Parse {
            detail: e.to_string(),
        })?;
        let obj = root
            .as_object()
            .ok_or_else(|| invalid("<root>", "expected an object"))?;

        let dimension = parse_i32(required(obj, "dimension")?, "dimension")?;
        let hunter = parse_cell(required(obj, "hunter")?, "hunter")?;
        let board = Board::new(dimension).ok();

        let raw_evaders = required(obj, "evaders")?
            .as_array()
            .ok_or_else(|| invalid("evaders", "expected an array"))?;
        let mut evaders = Vec::with_capacity(raw_evaders.len());
        for (i, raw) in raw_evaders.iter().enumerate() {
            let field = format!("evaders[{i}]");
            let e = raw
                .as_object()
                .ok_or_else(|| invalid(&field, "expected an object"))?;
            let start = parse_cell(required(e, "start")?, &format!("{field}.start"))?;
            let direction = match e.get("direction") {
                Some(v) => v
                    .as_str()
                    .ok_or_else(|| invalid(&format!("{field}.direction"), "expected a string"))?
                    .parse::<Direction>()
                    .map_err(|err| invalid(&format!("{field}.direction"), err.to_string()))?,
                None => match &board {
                    Some(board) => Direction::longest_run(board, start),
                    None => {
                        return Err(invalid(
                            "dimension",
                            "cannot default an evader direction on an invalid board",
                        ))
                    }
                },
            };
            evaders.push(EvaderSpec::new(start, direction));
        }

        let strategy = match obj.get("strategy") {
            None => Strategy::BreadthFirst,
            Some(v) => v
                .as_str()
                .ok_or_else(|| invalid("strategy", "expected a string"))?
                .parse::<Strategy>()
                .map_err(|e| invalid("strategy", e.to_string()))?,
        };
        let policy = match obj.get("policy") {
            None => SearchPolicyV1::default(),
            Some(v) => parse_policy(v)?,
        };

        Ok(Self {
            dimension,
            hunter,
            evaders,
            strategy,
            policy,
        })
    }

    /// Load and parse a scenario file.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::Io`] when the file cannot be read, otherwise
    /// as [`Scenario::from_json_bytes`].
    pub fn from_path(path: &Path) -> Result<Self, ScenarioError> {
        let bytes = std::fs::read(path).map_err(|e| ScenarioError::Io {
            path: path.display().to_string(),
            detail: e.to_string(),
        })?;
        Self::from_json_bytes(&bytes)
    }

    /// Caller-side placement rules: no evader on the hunter, and none on a
    /// cell the hunter can reach with its first move. Skipped when the
    /// dimension itself is invalid; the engine reports that.
    ///
    /// # Errors
    ///
    /// Returns the first [`PlacementError`] in evader order.
    pub fn validate_placement(&self) -> Result<(), PlacementError> {
        let Ok(board) = Board::new(self.dimension) else {
            return Ok(());
        };
        let opening = legal_moves(&board, self.hunter);
        for (index, e) in self.evaders.iter().enumerate() {
            if e.start == self.hunter {
                return Err(PlacementError::EvaderOnHunter {
                    index,
                    cell: e.start,
                });
            }
            if opening.contains(e.start) {
                return Err(PlacementError::EvaderOnHunterMove {
                    index,
                    cell: e.start,
                });
            }
        }
        Ok(())
    }

    /// Build the engine input.
    ///
    /// # Errors
    ///
    /// Propagates [`SearchError::InvalidInput`] from [`Problem::new`].
    pub fn problem(&self) -> Result<Problem, SearchError> {
        Problem::new(self.dimension, self.hunter, &self.evaders)
    }

    /// Canonical form with every default made explicit.
    #[must_use]
    pub fn to_json_value(&self) -> Value {
        serde_json::json!({
            "dimension": self.dimension,
            "hunter": [self.hunter.x, self.hunter.y],
            "evaders": self.evaders.iter().map(|e| serde_json::json!({
                "start": [e.start.x, e.start.y],
                "direction": e.direction.as_str(),
            })).collect::<Vec<_>>(),
            "strategy": self.strategy.as_str(),
            "policy": self.policy.to_json_value(),
        })
    }

    /// # Errors
    ///
    /// Propagates [`CanonError`].
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = canonical_json_bytes(&self.to_json_value())?;
        Ok(canonical_hash(HashDomain::Scenario, &bytes))
    }
}
