//! Scenario: an immutable directed weighted graph with a start and a goal.
//!
//! Scenarios are small and loaded wholesale. [`Scenario::validate`] is the
//! only gate between raw data and the search engine; nothing downstream
//! re-checks node references.

use std::borrow::Borrow;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::proof::canon::{to_canonical_json_bytes, CanonError};
use crate::proof::hash::{canonical_hash, ContentHash};
use crate::proof::hash_domain::HashDomain;

/// Default start node id.
pub const DEFAULT_START: &str = "S";

/// Default goal node id.
pub const DEFAULT_GOAL: &str = "G";

/// Node identifier, unique within a scenario.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for NodeId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for NodeId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A graph vertex. Coordinates are for display only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub label: String,
    pub x: i32,
    pub y: i32,
}

impl Node {
    #[must_use]
    pub fn new(id: &str, label: &str, x: i32, y: i32) -> Self {
        Self {
            id: NodeId::from(id),
            label: label.to_string(),
            x,
            y,
        }
    }
}

/// A directed, weighted edge. Weights are unsigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: u64,
}

impl Edge {
    #[must_use]
    pub fn new(from: &str, to: &str, weight: u64) -> Self {
        Self {
            from: NodeId::from(from),
            to: NodeId::from(to),
            weight,
        }
    }
}

/// Malformed scenario data. Fatal at engine construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScenarioError {
    #[error("node id {id} is declared more than once")]
    DuplicateNode { id: NodeId },
    #[error("start node {id} is not declared")]
    MissingStart { id: NodeId },
    #[error("goal node {id} is not declared")]
    MissingGoal { id: NodeId },
    #[error("edge {from}->{to} references undeclared node {missing}")]
    DanglingEdge {
        from: NodeId,
        to: NodeId,
        missing: NodeId,
    },
    #[error("no scenario named {name:?}")]
    UnknownScenario { name: String },
    #[error("scenario JSON is malformed: {detail}")]
    Malformed { detail: String },
}

/// A named, immutable search problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub description: String,
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    #[serde(default = "default_start")]
    pub start: NodeId,
    #[serde(default = "default_goal")]
    pub goal: NodeId,
}

fn default_start() -> NodeId {
    NodeId::from(DEFAULT_START)
}

fn default_goal() -> NodeId {
    NodeId::from(DEFAULT_GOAL)
}

impl Scenario {
    /// Build a scenario with the default `S`/`G` endpoints.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        nodes: Vec<Node>,
        edges: Vec<Edge>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            nodes,
            edges,
            start: default_start(),
            goal: default_goal(),
        }
    }

    /// Replace the start and goal ids.
    #[must_use]
    pub fn with_endpoints(mut self, start: &str, goal: &str) -> Self {
        self.start = NodeId::from(start);
        self.goal = NodeId::from(goal);
        self
    }

    /// Parse a scenario from JSON. Missing `start`/`goal` default to `S`/`G`.
    ///
    /// The result is validated before it is returned.
    ///
    /// # Errors
    ///
    /// [`ScenarioError::Malformed`] for unparseable input, otherwise any
    /// error from [`Scenario::validate`].
    pub fn from_json(input: &str) -> Result<Self, ScenarioError> {
        let scenario: Self =
            serde_json::from_str(input).map_err(|e| ScenarioError::Malformed {
                detail: e.to_string(),
            })?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Check structural invariants.
    ///
    /// Node ids are checked for duplicates first, then start, then goal, then
    /// edges in declaration order. The first violation is reported.
    ///
    /// # Errors
    ///
    /// See [`ScenarioError`].
    pub fn validate(&self) -> Result<(), ScenarioError> {
        let mut ids: BTreeSet<&str> = BTreeSet::new();
        for node in &self.nodes {
            if !ids.insert(node.id.as_str()) {
                return Err(ScenarioError::DuplicateNode {
                    id: node.id.clone(),
                });
            }
        }
        if !ids.contains(self.start.as_str()) {
            return Err(ScenarioError::MissingStart {
                id: self.start.clone(),
            });
        }
        if !ids.contains(self.goal.as_str()) {
            return Err(ScenarioError::MissingGoal {
                id: self.goal.clone(),
            });
        }
        for edge in &self.edges {
            for end in [&edge.from, &edge.to] {
                if !ids.contains(end.as_str()) {
                    return Err(ScenarioError::DanglingEdge {
                        from: edge.from.clone(),
                        to: edge.to.clone(),
                        missing: end.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.node(id).is_some()
    }

    /// Outgoing edges of `from`, in declaration order.
    pub fn outgoing<'a>(&'a self, from: &'a str) -> impl Iterator<Item = &'a Edge> + 'a {
        self.edges.iter().filter(move |e| e.from == from)
    }

    /// Content hash of the canonical JSON form.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if the scenario cannot be serialized.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = to_canonical_json_bytes(self)?;
        Ok(canonical_hash(HashDomain::Scenario, &bytes))
    }
}
