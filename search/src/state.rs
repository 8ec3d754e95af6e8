//! The snapshot handed to a presentation layer after every step.

use std::collections::BTreeMap;

use pathlab_kernel::graph::scenario::NodeId;
use serde::Serialize;

/// Where a search is in its lifecycle.
///
/// `Solved` and `Exhausted` are absorbing: further steps change nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchPhase {
    Unstarted,
    Running,
    Solved,
    Exhausted,
}

impl SearchPhase {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Solved | Self::Exhausted)
    }
}

/// Best known path cost to a discovered node, and the node it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CostRecord {
    pub cost: u64,
    /// `None` only for the start node.
    pub parent: Option<NodeId>,
}

/// Read-only view of one search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchState {
    /// Most recently expanded node; `None` before the first step.
    pub current: Option<NodeId>,
    /// Awaiting expansion, in insertion order.
    pub frontier: Vec<NodeId>,
    /// Expanded nodes, in expansion order. The goal is never listed here.
    pub explored: Vec<NodeId>,
    /// Cost/parent bookkeeping. Absent means undiscovered.
    pub costs: BTreeMap<NodeId, CostRecord>,
    /// Start..goal; empty until the goal is expanded.
    pub path: Vec<NodeId>,
    /// Cost of `path`; zero until solved.
    pub total_cost: u64,
    pub step_count: u64,
    /// Peak frontier length, including the initial `[start]`.
    pub max_frontier_size: usize,
    pub phase: SearchPhase,
}

impl SearchState {
    /// Fresh state: `frontier = [start]`, `costs[start] = (0, none)`.
    #[must_use]
    pub fn initial(start: &NodeId) -> Self {
        let mut costs = BTreeMap::new();
        costs.insert(
            start.clone(),
            CostRecord {
                cost: 0,
                parent: None,
            },
        );
        Self {
            current: None,
            frontier: vec![start.clone()],
            explored: Vec::new(),
            costs,
            path: Vec::new(),
            total_cost: 0,
            step_count: 0,
            max_frontier_size: 1,
            phase: SearchPhase::Unstarted,
        }
    }

    #[must_use]
    pub fn cost_of(&self, id: &str) -> Option<u64> {
        self.costs.get(id).map(|r| r.cost)
    }

    #[must_use]
    pub fn parent_of(&self, id: &str) -> Option<&NodeId> {
        self.costs.get(id).and_then(|r| r.parent.as_ref())
    }

    #[must_use]
    pub fn is_explored(&self, id: &str) -> bool {
        self.explored.iter().any(|n| n == id)
    }

    #[must_use]
    pub fn in_frontier(&self, id: &str) -> bool {
        self.frontier.iter().any(|n| n == id)
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        is_terminal(self)
    }
}

/// Solved or exhausted.
#[must_use]
pub fn is_terminal(state: &SearchState) -> bool {
    state.phase.is_terminal()
}
