//! `SearchReportV1`: the canonical, hashable summary of one search run.
//!
//! Built in memory from a [`SearchResult`]; nothing is written to disk.

use pursuit_kernel::proof::canon::{canonical_json_bytes, CanonError};
use pursuit_kernel::proof::hash::{canonical_hash, ContentHash};
use pursuit_kernel::proof::hash_domain::HashDomain;

use crate::path::PathResult;
use crate::policy::{SearchPolicyV1, Strategy};
use crate::search::{SearchResult, SearchStats, TerminationReasonV1};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReportV1 {
    pub strategy: Strategy,
    pub policy: SearchPolicyV1,
    pub termination: TerminationReasonV1,
    pub stats: SearchStats,
    pub path: PathResult,
}

impl SearchReportV1 {
    #[must_use]
    pub fn from_result(result: &SearchResult, policy: &SearchPolicyV1) -> Self {
        Self {
            strategy: result.strategy,
            policy: policy.clone(),
            termination: result.termination,
            stats: result.stats,
            path: result.path.clone(),
        }
    }

    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        let s = &self.stats;
        let mut termination = serde_json::json!({ "kind": self.termination.as_str() });
        if let TerminationReasonV1::GoalReached { node } = self.termination {
            termination["node_id"] = serde_json::json!(node.0);
        }
        serde_json::json!({
            "schema_version": "search_report.v1",
            "strategy": self.strategy.as_str(),
            "policy": self.policy.to_json_value(),
            "termination": termination,
            "stats": {
                "nodes_created": s.nodes_created,
                "expansions": s.expansions,
                "duplicates_suppressed": s.duplicates_suppressed,
                "escape_pruned": s.escape_pruned,
                "heuristic_deferred": s.heuristic_deferred,
                "heuristic_pruned": s.heuristic_pruned,
                "overflow_discarded": s.overflow_discarded,
                "depth_skipped": s.depth_skipped,
                "frontier_high_water": s.frontier_high_water,
            },
            "path": self.path.to_json_value(),
        })
    }

    /// # Errors
    ///
    /// Propagates [`CanonError`] from canonicalization.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json_value())
    }

    /// # Errors
    ///
    /// Propagates [`CanonError`] from canonicalization.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(canonical_hash(HashDomain::SearchReport, &bytes))
    }
}
