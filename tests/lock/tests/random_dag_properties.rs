//! Property lock: randomly generated DAGs against the brute-force oracle.

use lock_tests::oracle::{dag, min_cost, min_edges, path_cost};
use pathlab_harness::policy::RunPolicy;
use pathlab_harness::runner::{run_to_completion, RunOutcome};
use pathlab_kernel::graph::scenario::Scenario;
use pathlab_search::engine::SearchEngine;
use pathlab_search::strategy::Strategy;
use proptest::prelude::*;
use proptest::strategy::Strategy as _;

fn arb_dag() -> impl proptest::strategy::Strategy<Value = Scenario> {
    (2usize..=8).prop_flat_map(|n| {
        proptest::collection::vec((0..n, 0..n, 0u64..10), 0..24)
            .prop_map(move |triples| dag(n, &triples))
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn cost_ordered_strategies_are_optimal(scenario in arb_dag()) {
        let best = min_cost(&scenario);
        for strategy in [Strategy::Ucs, Strategy::Dijkstra] {
            let report = run_to_completion(&scenario, strategy, &RunPolicy::default()).unwrap();
            match best {
                Some(cost) => {
                    prop_assert_eq!(report.outcome, RunOutcome::Solved);
                    prop_assert_eq!(report.total_cost, cost);
                }
                None => prop_assert_eq!(report.outcome, RunOutcome::Exhausted),
            }
        }
    }

    #[test]
    fn bfs_finds_a_fewest_edge_path(scenario in arb_dag()) {
        let report = run_to_completion(&scenario, Strategy::Bfs, &RunPolicy::default()).unwrap();
        match min_edges(&scenario) {
            Some(fewest) => {
                prop_assert_eq!(report.edge_count(), fewest);
                prop_assert_eq!(path_cost(&scenario, &report.path), Some(report.total_cost));
            }
            None => prop_assert_eq!(report.outcome, RunOutcome::Exhausted),
        }
    }

    #[test]
    fn every_strategy_terminates_within_node_count(scenario in arb_dag()) {
        let policy = RunPolicy::bounded_by(&scenario);
        for strategy in Strategy::ALL {
            let report = run_to_completion(&scenario, strategy, &policy).unwrap();
            prop_assert_ne!(report.outcome, RunOutcome::StepCapReached);
            prop_assert_eq!(report.outcome == RunOutcome::Solved, min_cost(&scenario).is_some());
        }
    }

    #[test]
    fn transcript_matches_snapshot(scenario in arb_dag()) {
        for strategy in Strategy::ALL {
            let mut engine = SearchEngine::create(&scenario, strategy).unwrap();
            while !engine.is_terminal() {
                engine.step().unwrap();
            }
            let state = engine.state();
            let transcript = engine.transcript();
            prop_assert_eq!(u64::try_from(transcript.steps.len()).unwrap(), state.step_count);
            let expanded: Vec<_> = transcript
                .steps
                .iter()
                .filter(|s| !s.goal)
                .map(|s| s.node.clone())
                .collect();
            prop_assert_eq!(&expanded, &state.explored);
            if !strategy.relaxes() {
                prop_assert_eq!(transcript.relaxation_count(), 0);
            }
        }
    }
}
