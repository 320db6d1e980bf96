//! Canonical JSON bytes: the one serialization used for hashing.
//!
//! Rules:
//!
//! 1. Object keys sorted lexicographically (byte order), at every depth.
//! 2. Compact form, no whitespace.
//! 3. Numbers must be integers; floats are rejected so digests never depend
//!    on float formatting.
//! 4. Arrays keep their order.

/// Error producing canonical JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanonError {
    /// A JSON number was not an integer.
    NonIntegerNumber { raw: String },
    /// Serialization itself failed.
    Serialize { detail: String },
}

impl std::fmt::Display for CanonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonIntegerNumber { raw } => {
                write!(f, "non-integer number in canonical JSON: {raw}")
            }
            Self::Serialize { detail } => write!(f, "canonical JSON serialization: {detail}"),
        }
    }
}

impl std::error::Error for CanonError {}

/// Produce canonical JSON bytes from a `serde_json::Value`.
///
/// # Errors
///
/// Returns [`CanonError::NonIntegerNumber`] if any number is not an `i64`
/// or `u64`.
pub fn canonical_json_bytes(value: &serde_json::Value) -> Result<Vec<u8>, CanonError> {
    let sorted = canonicalize(value)?;
    serde_json::to_vec(&sorted).map_err(|e| CanonError::Serialize {
        detail: e.to_string(),
    })
}

/// Rebuild `value` with sorted object keys, rejecting non-integer numbers.
fn canonicalize(value: &serde_json::Value) -> Result<serde_json::Value, CanonError> {
    use serde_json::Value;

    Ok(match value {
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                Value::Number(n.clone())
            } else {
                return Err(CanonError::NonIntegerNumber { raw: n.to_string() });
            }
        }
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(canonicalize)
                .collect::<Result<Vec<_>, _>>()?,
        ),
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            let mut out = serde_json::Map::new();
            for key in keys {
                out.insert(key.clone(), canonicalize(&map[key])?);
            }
            Value::Object(out)
        }
        Value::Null | Value::Bool(_) | Value::String(_) => value.clone(),
    })
}
