//! `SearchTranscript`: per-expansion audit log.
//!
//! The snapshot in [`crate::state::SearchState`] says where a search is; the
//! transcript says how it got there. Each expansion records the node taken
//! off the frontier and what happened to every neighbor it touched. The
//! canonical JSON form is content-addressed so two runs can be compared by
//! digest alone.

use pathlab_kernel::graph::scenario::NodeId;
use pathlab_kernel::proof::canon::{to_canonical_json_bytes, CanonError};
use pathlab_kernel::proof::hash::{canonical_hash, ContentHash};
use pathlab_kernel::proof::hash_domain::HashDomain;
use serde::Serialize;

use crate::strategy::Strategy;

/// What one outgoing edge did during an expansion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NeighborOutcome {
    /// First discovery; appended to the frontier.
    Discovered { cost: u64 },
    /// Already on the frontier and the new route is cheaper.
    Relaxed { from_cost: u64, to_cost: u64 },
    /// Already on the frontier; the recorded route stands.
    Retained {
        existing_cost: u64,
        candidate_cost: u64,
    },
    /// Already expanded; never reopened.
    AlreadyExplored,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NeighborRecord {
    pub node: NodeId,
    pub weight: u64,
    pub outcome: NeighborOutcome,
}

/// One frontier pop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepRecord {
    /// 1-based, equal to `step_count` after the step.
    pub step: u64,
    pub node: NodeId,
    /// Path cost of `node` when it was popped.
    pub cost: u64,
    /// The popped node was the goal; `neighbors` is empty.
    pub goal: bool,
    pub neighbors: Vec<NeighborRecord>,
    pub frontier_after: Vec<NodeId>,
}

/// Ordered log of every expansion in one engine run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchTranscript {
    pub scenario: String,
    pub strategy: Strategy,
    pub steps: Vec<StepRecord>,
}

impl SearchTranscript {
    #[must_use]
    pub fn new(scenario: &str, strategy: Strategy) -> Self {
        Self {
            scenario: scenario.to_string(),
            strategy,
            steps: Vec::new(),
        }
    }

    /// Expanded node ids in pop order, goal included.
    #[must_use]
    pub fn expansion_order(&self) -> Vec<&NodeId> {
        self.steps.iter().map(|s| &s.node).collect()
    }

    /// Number of relaxations across the run.
    #[must_use]
    pub fn relaxation_count(&self) -> usize {
        self.steps
            .iter()
            .flat_map(|s| &s.neighbors)
            .filter(|n| matches!(n.outcome, NeighborOutcome::Relaxed { .. }))
            .count()
    }

    /// Serialize to canonical JSON bytes (sorted keys, compact).
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        to_canonical_json_bytes(self)
    }

    /// Content hash of the canonical JSON form.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(canonical_hash(HashDomain::SearchTranscript, &bytes))
    }
}
