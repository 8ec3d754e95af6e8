//! Per-step lock: invariants that must hold after every single `step`, for
//! every strategy on every catalog scenario.

use std::collections::BTreeSet;

use pathlab_kernel::graph::catalog::catalog;
use pathlab_kernel::graph::scenario::{Edge, Node, NodeId, Scenario};
use pathlab_search::engine::SearchEngine;
use pathlab_search::state::{SearchPhase, SearchState};
use pathlab_search::strategy::Strategy;

fn assert_well_formed(state: &SearchState, scenario: &Scenario, label: &str) {
    let frontier: BTreeSet<&NodeId> = state.frontier.iter().collect();
    assert_eq!(frontier.len(), state.frontier.len(), "{label}: frontier has duplicates");

    let explored: BTreeSet<&NodeId> = state.explored.iter().collect();
    assert_eq!(explored.len(), state.explored.len(), "{label}: node expanded twice");
    assert!(
        frontier.is_disjoint(&explored),
        "{label}: frontier and explored overlap"
    );

    for id in state.frontier.iter().chain(&state.explored) {
        assert!(scenario.contains(id.as_str()), "{label}: unknown node {id}");
        assert!(state.cost_of(id.as_str()).is_some(), "{label}: {id} has no cost");
    }
    assert!(state.max_frontier_size >= state.frontier.len(), "{label}: peak below size");
    assert!(!state.is_explored(scenario.goal.as_str()), "{label}: goal listed as explored");

    if state.phase == SearchPhase::Solved {
        assert_eq!(state.path.first(), Some(&scenario.start), "{label}");
        assert_eq!(state.path.last(), Some(&scenario.goal), "{label}");
        assert_eq!(state.cost_of(scenario.goal.as_str()), Some(state.total_cost));
    } else {
        assert!(state.path.is_empty(), "{label}: path before solved");
        assert_eq!(state.total_cost, 0, "{label}: cost before solved");
    }
}

#[test]
fn invariants_hold_after_every_step() {
    for scenario in catalog() {
        for strategy in Strategy::ALL {
            let label = format!("{strategy} on {}", scenario.name);
            let mut engine = SearchEngine::create(&scenario, strategy).unwrap();
            assert_well_formed(engine.state(), &scenario, &label);

            let mut last_count = 0;
            while !engine.is_terminal() {
                let state = engine.step().unwrap();
                assert_eq!(state.step_count, last_count + 1, "{label}");
                last_count = state.step_count;
                assert_well_formed(state, &scenario, &label);
            }
            let bound = u64::try_from(scenario.nodes.len()).unwrap();
            assert!(last_count <= bound, "{label}: {last_count} steps");
        }
    }
}

#[test]
fn terminal_states_absorb_further_steps() {
    for scenario in catalog() {
        for strategy in Strategy::ALL {
            let mut engine = SearchEngine::create(&scenario, strategy).unwrap();
            while !engine.is_terminal() {
                engine.step().unwrap();
            }
            let settled = engine.state().clone();
            let transcript_len = engine.transcript().steps.len();
            for _ in 0..3 {
                assert_eq!(engine.step().unwrap(), &settled);
            }
            assert_eq!(engine.transcript().steps.len(), transcript_len);
        }
    }
}

#[test]
fn exhausted_search_reports_no_path() {
    // The only edge out of the start leads away from the goal.
    let scenario = Scenario::new(
        "island",
        "goal has no incoming edge",
        vec![
            Node::new("S", "Start", 0, 0),
            Node::new("A", "A", 1, 0),
            Node::new("G", "Goal", 2, 0),
        ],
        vec![Edge::new("S", "A", 1), Edge::new("G", "A", 1)],
    );
    for strategy in Strategy::ALL {
        let mut engine = SearchEngine::create(&scenario, strategy).unwrap();
        while !engine.is_terminal() {
            engine.step().unwrap();
        }
        let state = engine.state();
        assert_eq!(state.phase, SearchPhase::Exhausted, "{strategy}");
        assert!(state.path.is_empty());
        assert!(state.frontier.is_empty());
        assert_eq!(state.explored, ["S", "A"]);
    }
}

#[test]
fn start_equal_to_goal_solves_in_one_step() {
    let scenario = Scenario::new(
        "trivial",
        "start is the goal",
        vec![Node::new("S", "Start", 0, 0), Node::new("G", "Goal", 1, 0)],
        vec![Edge::new("S", "G", 3)],
    )
    .with_endpoints("S", "S");
    for strategy in Strategy::ALL {
        let mut engine = SearchEngine::create(&scenario, strategy).unwrap();
        let state = engine.step().unwrap();
        assert_eq!(state.phase, SearchPhase::Solved);
        assert_eq!(state.path, ["S"]);
        assert_eq!(state.total_cost, 0);
        assert_eq!(state.step_count, 1);
    }
}
