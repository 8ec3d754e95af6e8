//! The stepwise search engine.
//!
//! # Step
//!
//! ```text
//! terminal? ── yes ──> return state unchanged
//!    │ no
//! pop frontier (FIFO | LIFO | min cost, earliest insertion on ties)
//!    │
//! goal? ── yes ──> walk parents goal→start, reverse, Solved
//!    │ no
//! mark explored; for each outgoing edge to an unexplored neighbor:
//!    new      → append, record (cost, parent)
//!    frontier → relax if UCS/Dijkstra and strictly cheaper
//!    │
//! Running, or Exhausted if the frontier is now empty
//! ```

use std::collections::{BTreeMap, BTreeSet};

use pathlab_kernel::graph::scenario::{NodeId, Scenario};
use tracing::{debug, error, info};

use crate::error::SearchError;
use crate::frontier::Frontier;
use crate::state::{CostRecord, SearchPhase, SearchState};
use crate::strategy::Strategy;
use crate::transcript::{NeighborOutcome, NeighborRecord, SearchTranscript, StepRecord};

/// One search over one scenario with one strategy.
///
/// Engines share nothing; comparing strategies side by side means one engine
/// per strategy.
#[derive(Debug)]
pub struct SearchEngine<'a> {
    scenario: &'a Scenario,
    strategy: Strategy,
    frontier: Frontier,
    explored: BTreeSet<NodeId>,
    state: SearchState,
    transcript: SearchTranscript,
    halted: Option<SearchError>,
}

impl<'a> SearchEngine<'a> {
    /// Validate `scenario` and seed the frontier with its start node.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidScenario`] if validation fails.
    pub fn create(scenario: &'a Scenario, strategy: Strategy) -> Result<Self, SearchError> {
        scenario.validate()?;
        let mut frontier = Frontier::for_strategy(strategy);
        frontier.push(scenario.start.clone(), 0);
        debug!(
            scenario = %scenario.name,
            %strategy,
            start = %scenario.start,
            goal = %scenario.goal,
            "search engine created"
        );
        Ok(Self {
            scenario,
            strategy,
            frontier,
            explored: BTreeSet::new(),
            state: SearchState::initial(&scenario.start),
            transcript: SearchTranscript::new(&scenario.name, strategy),
            halted: None,
        })
    }

    /// Perform one expansion and return the updated snapshot.
    ///
    /// Once the search is solved or exhausted this returns the unchanged
    /// state.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::BrokenChain`] if the goal path cannot be
    /// reconstructed. The engine is halted afterwards and every later call
    /// returns the same error.
    pub fn step(&mut self) -> Result<&SearchState, SearchError> {
        if let Some(err) = &self.halted {
            return Err(err.clone());
        }
        if self.state.phase.is_terminal() {
            return Ok(&self.state);
        }
        let Some(node) = self.frontier.pop() else {
            self.state.phase = SearchPhase::Exhausted;
            return Ok(&self.state);
        };
        let Some(cost) = self.state.cost_of(node.as_str()) else {
            return Err(self.halt(SearchError::BrokenChain { node }));
        };

        if node == self.scenario.goal {
            return self.finish_at_goal(node, cost);
        }

        self.explored.insert(node.clone());
        self.state.explored.push(node.clone());

        let scenario = self.scenario;
        let mut neighbors = Vec::new();
        for edge in scenario.outgoing(node.as_str()) {
            let outcome = self.visit_neighbor(&node, cost, &edge.to, edge.weight);
            neighbors.push(NeighborRecord {
                node: edge.to.clone(),
                weight: edge.weight,
                outcome,
            });
        }

        self.state.step_count += 1;
        self.state.current = Some(node.clone());
        self.state.frontier = self.frontier.ids();
        self.state.max_frontier_size = self.state.max_frontier_size.max(self.frontier.high_water());
        self.state.phase = if self.frontier.is_empty() {
            SearchPhase::Exhausted
        } else {
            SearchPhase::Running
        };

        debug!(
            strategy = %self.strategy,
            step = self.state.step_count,
            %node,
            cost,
            frontier = self.frontier.len(),
            "expanded node"
        );
        if self.state.phase == SearchPhase::Exhausted {
            info!(
                scenario = %self.scenario.name,
                strategy = %self.strategy,
                steps = self.state.step_count,
                "frontier exhausted without reaching the goal"
            );
        }

        self.transcript.steps.push(StepRecord {
            step: self.state.step_count,
            node,
            cost,
            goal: false,
            neighbors,
            frontier_after: self.state.frontier.clone(),
        });
        Ok(&self.state)
    }

    fn visit_neighbor(
        &mut self,
        parent: &NodeId,
        parent_cost: u64,
        neighbor: &NodeId,
        weight: u64,
    ) -> NeighborOutcome {
        if self.explored.contains(neighbor) {
            return NeighborOutcome::AlreadyExplored;
        }
        let candidate = parent_cost.saturating_add(weight);
        let record = CostRecord {
            cost: candidate,
            parent: Some(parent.clone()),
        };
        match self.frontier.cost_of(neighbor.as_str()) {
            None => {
                self.frontier.push(neighbor.clone(), candidate);
                self.state.costs.insert(neighbor.clone(), record);
                NeighborOutcome::Discovered { cost: candidate }
            }
            Some(existing) if self.strategy.relaxes() && candidate < existing => {
                self.frontier.reprioritize(neighbor, candidate);
                self.state.costs.insert(neighbor.clone(), record);
                NeighborOutcome::Relaxed {
                    from_cost: existing,
                    to_cost: candidate,
                }
            }
            Some(existing) => NeighborOutcome::Retained {
                existing_cost: existing,
                candidate_cost: candidate,
            },
        }
    }

    fn finish_at_goal(&mut self, goal: NodeId, cost: u64) -> Result<&SearchState, SearchError> {
        let path = match reconstruct_path(&self.state.costs, &self.scenario.start, &goal) {
            Ok(path) => path,
            Err(err) => return Err(self.halt(err)),
        };

        self.state.step_count += 1;
        self.state.current = Some(goal.clone());
        self.state.frontier = self.frontier.ids();
        self.state.total_cost = cost;
        self.state.phase = SearchPhase::Solved;
        info!(
            scenario = %self.scenario.name,
            strategy = %self.strategy,
            steps = self.state.step_count,
            total_cost = cost,
            path_len = path.len(),
            "goal reached"
        );
        self.state.path = path;

        self.transcript.steps.push(StepRecord {
            step: self.state.step_count,
            node: goal,
            cost,
            goal: true,
            neighbors: Vec::new(),
            frontier_after: self.state.frontier.clone(),
        });
        Ok(&self.state)
    }

    fn halt(&mut self, err: SearchError) -> SearchError {
        error!(
            scenario = %self.scenario.name,
            strategy = %self.strategy,
            error = %err,
            "search halted on internal invariant violation"
        );
        self.halted = Some(err.clone());
        err
    }

    #[must_use]
    pub fn state(&self) -> &SearchState {
        &self.state
    }

    #[must_use]
    pub fn phase(&self) -> SearchPhase {
        self.state.phase
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    /// The error that halted this engine, if any.
    #[must_use]
    pub fn halted(&self) -> Option<&SearchError> {
        self.halted.as_ref()
    }

    #[must_use]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    #[must_use]
    pub fn scenario(&self) -> &'a Scenario {
        self.scenario
    }

    #[must_use]
    pub fn transcript(&self) -> &SearchTranscript {
        &self.transcript
    }
}

/// Walk parent links from `goal` back to `start` and return `start..=goal`.
///
/// # Errors
///
/// Returns [`SearchError::BrokenChain`] naming the first node whose record
/// is missing or parentless before `start` is reached, or the node at which
/// the walk exceeds the number of recorded nodes (a parent cycle).
pub fn reconstruct_path(
    costs: &BTreeMap<NodeId, CostRecord>,
    start: &NodeId,
    goal: &NodeId,
) -> Result<Vec<NodeId>, SearchError> {
    let mut path = vec![goal.clone()];
    let mut cursor = goal;
    while cursor != start {
        let parent = costs
            .get(cursor)
            .and_then(|record| record.parent.as_ref())
            .ok_or_else(|| SearchError::BrokenChain {
                node: cursor.clone(),
            })?;
        if path.len() >= costs.len() {
            return Err(SearchError::BrokenChain {
                node: parent.clone(),
            });
        }
        path.push(parent.clone());
        cursor = parent;
    }
    path.reverse();
    Ok(path)
}
