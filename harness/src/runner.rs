//! Harness runner: steps an engine to the end and reports what happened.
//!
//! # Pipeline
//!
//! ```text
//! policy.validate() → SearchEngine::create()
//!   → [step() × N, N ≤ max_steps] → transcript digest → RunReport
//! ```
//!
//! Hitting `max_steps` is an outcome, not an error. Errors are reserved for
//! invalid input and engine defects.

use pathlab_kernel::graph::catalog::catalog;
use pathlab_kernel::graph::scenario::{NodeId, Scenario};
use pathlab_kernel::proof::canon::{to_canonical_json_bytes, CanonError};
use pathlab_kernel::proof::hash::{canonical_hash, ContentHash};
use pathlab_kernel::proof::hash_domain::HashDomain;
use pathlab_search::engine::SearchEngine;
use pathlab_search::error::SearchError;
use pathlab_search::state::SearchPhase;
use pathlab_search::strategy::Strategy;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::policy::{PolicyError, RunPolicy};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RunError {
    #[error(transparent)]
    Policy(#[from] PolicyError),
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error("canonical JSON failed: {0}")]
    Canon(#[from] CanonError),
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunOutcome {
    Solved,
    Exhausted,
    /// The driver stopped stepping; the engine was still running.
    StepCapReached,
}

/// Summary of one (scenario, strategy) run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub scenario: String,
    pub strategy: Strategy,
    pub outcome: RunOutcome,
    /// Empty unless solved.
    pub path: Vec<NodeId>,
    /// Zero unless solved.
    pub total_cost: u64,
    pub steps: u64,
    /// Nodes expanded, goal excluded.
    pub explored: usize,
    pub max_frontier_size: usize,
    pub transcript_digest: String,
}

impl RunReport {
    /// Edges on the found path.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Content hash of the canonical JSON form.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = to_canonical_json_bytes(self)?;
        Ok(canonical_hash(HashDomain::RunReport, &bytes))
    }
}

/// Step a fresh engine until it terminates or `policy.max_steps` expansions
/// have been performed.
///
/// # Errors
///
/// - [`RunError::Policy`] if the policy is invalid.
/// - [`RunError::Search`] if the scenario is invalid or the engine halts.
/// - [`RunError::Canon`] if the transcript cannot be hashed.
pub fn run_to_completion(
    scenario: &Scenario,
    strategy: Strategy,
    policy: &RunPolicy,
) -> Result<RunReport, RunError> {
    policy.validate()?;
    let mut engine = SearchEngine::create(scenario, strategy)?;
    while !engine.is_terminal() && engine.state().step_count < policy.max_steps {
        engine.step()?;
    }

    let outcome = match engine.phase() {
        SearchPhase::Solved => RunOutcome::Solved,
        SearchPhase::Exhausted => RunOutcome::Exhausted,
        SearchPhase::Unstarted | SearchPhase::Running => {
            warn!(
                scenario = %scenario.name,
                %strategy,
                max_steps = policy.max_steps,
                frontier = engine.state().frontier.len(),
                "step cap reached before the search terminated"
            );
            RunOutcome::StepCapReached
        }
    };

    let transcript_digest = engine.transcript().digest()?;
    let state = engine.state();
    let report = RunReport {
        scenario: scenario.name.clone(),
        strategy,
        outcome,
        path: state.path.clone(),
        total_cost: state.total_cost,
        steps: state.step_count,
        explored: state.explored.len(),
        max_frontier_size: state.max_frontier_size,
        transcript_digest: transcript_digest.as_str().to_string(),
    };
    debug!(
        scenario = %report.scenario,
        %strategy,
        outcome = ?report.outcome,
        steps = report.steps,
        total_cost = report.total_cost,
        "run finished"
    );
    Ok(report)
}

/// One independent run per strategy, in [`Strategy::ALL`] order.
///
/// # Errors
///
/// The first error from [`run_to_completion`].
pub fn compare_strategies(
    scenario: &Scenario,
    policy: &RunPolicy,
) -> Result<Vec<RunReport>, RunError> {
    Strategy::ALL
        .into_iter()
        .map(|strategy| run_to_completion(scenario, strategy, policy))
        .collect()
}

/// Every catalog scenario against every strategy, scenario-major.
///
/// # Errors
///
/// The first error from [`run_to_completion`].
pub fn run_catalog(policy: &RunPolicy) -> Result<Vec<RunReport>, RunError> {
    let mut reports = Vec::new();
    for scenario in catalog() {
        reports.extend(compare_strategies(&scenario, policy)?);
    }
    Ok(reports)
}
