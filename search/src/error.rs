//! Typed search errors.
//!
//! `InvalidScenario` is a pre-flight failure: no engine exists. `BrokenChain`
//! is an engine defect detected mid-search; the engine halts and keeps
//! returning it.

use pathlab_kernel::graph::scenario::{NodeId, ScenarioError};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The scenario failed validation at construction.
    #[error("invalid scenario: {0}")]
    InvalidScenario(#[from] ScenarioError),
    /// Walking parent links from the goal did not end at the start.
    #[error("parent chain broken at node {node} while reconstructing the goal path")]
    BrokenChain { node: NodeId },
}
