//! Run policy: the step cap a driver imposes on an engine.
//!
//! The engine itself never stops on its own budget. A driver that embeds it
//! (an automated test, a timer loop) decides how many expansions it is
//! willing to pay for, and reports hitting the cap as an outcome.

use pathlab_kernel::graph::scenario::Scenario;
use pathlab_kernel::proof::canon::{to_canonical_json_bytes, CanonError};
use pathlab_kernel::proof::hash::{canonical_hash, ContentHash};
use pathlab_kernel::proof::hash_domain::HashDomain;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default cap on expansions per run.
pub const DEFAULT_MAX_STEPS: u64 = 1_000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    /// A zero budget would never let the engine leave `Unstarted`.
    #[error("max_steps must be at least 1")]
    ZeroStepBudget,
    #[error("run policy JSON is malformed: {detail}")]
    Malformed { detail: String },
}

/// Driver configuration. Missing JSON fields take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunPolicy {
    /// Hard cap on `step` calls that perform an expansion.
    pub max_steps: u64,
}

impl Default for RunPolicy {
    fn default() -> Self {
        Self {
            max_steps: DEFAULT_MAX_STEPS,
        }
    }
}

impl RunPolicy {
    /// The tightest cap that can never cut off a well-formed search: every
    /// node is expanded at most once.
    #[must_use]
    pub fn bounded_by(scenario: &Scenario) -> Self {
        Self {
            max_steps: u64::try_from(scenario.nodes.len()).unwrap_or(u64::MAX).max(1),
        }
    }

    /// # Errors
    ///
    /// Returns [`PolicyError::ZeroStepBudget`] if `max_steps` is zero.
    pub fn validate(&self) -> Result<(), PolicyError> {
        if self.max_steps == 0 {
            return Err(PolicyError::ZeroStepBudget);
        }
        Ok(())
    }

    /// Parse and validate.
    ///
    /// # Errors
    ///
    /// [`PolicyError::Malformed`] for bad JSON or unknown fields, otherwise
    /// any error from [`RunPolicy::validate`].
    pub fn from_json(input: &str) -> Result<Self, PolicyError> {
        let policy: Self = serde_json::from_str(input).map_err(|e| PolicyError::Malformed {
            detail: e.to_string(),
        })?;
        policy.validate()?;
        Ok(policy)
    }

    /// Content hash of the canonical JSON form.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = to_canonical_json_bytes(self)?;
        Ok(canonical_hash(HashDomain::RunPolicy, &bytes))
    }
}
