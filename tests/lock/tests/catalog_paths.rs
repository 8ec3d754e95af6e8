//! Catalog lock: every built-in scenario, every strategy, checked against
//! brute-force enumeration.

use lock_tests::oracle::{min_cost, min_edges, path_cost};
use pathlab_harness::policy::RunPolicy;
use pathlab_harness::runner::{compare_strategies, run_to_completion, RunOutcome};
use pathlab_kernel::graph::catalog::{catalog, ScenarioKind};
use pathlab_search::strategy::Strategy;

// ---------------------------------------------------------------------------
// Optimality
// ---------------------------------------------------------------------------

#[test]
fn cost_ordered_strategies_match_enumeration() {
    for scenario in catalog() {
        let best = min_cost(&scenario).expect("catalog goals are reachable");
        for strategy in [Strategy::Ucs, Strategy::Dijkstra] {
            let report = run_to_completion(&scenario, strategy, &RunPolicy::default()).unwrap();
            assert_eq!(report.outcome, RunOutcome::Solved);
            assert_eq!(
                report.total_cost, best,
                "{strategy} on {} is not optimal",
                scenario.name
            );
        }
    }
}

#[test]
fn bfs_path_has_fewest_edges() {
    for scenario in catalog() {
        let fewest = min_edges(&scenario).expect("catalog goals are reachable");
        let report = run_to_completion(&scenario, Strategy::Bfs, &RunPolicy::default()).unwrap();
        assert_eq!(report.edge_count(), fewest, "BFS on {}", scenario.name);
    }
}

#[test]
fn reported_cost_is_the_cost_of_the_reported_path() {
    for scenario in catalog() {
        for report in compare_strategies(&scenario, &RunPolicy::default()).unwrap() {
            assert_eq!(report.path.first(), Some(&scenario.start));
            assert_eq!(report.path.last(), Some(&scenario.goal));
            assert_eq!(
                path_cost(&scenario, &report.path),
                Some(report.total_cost),
                "{} on {}",
                report.strategy,
                scenario.name
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Named scenario expectations
// ---------------------------------------------------------------------------

#[test]
fn standard_cheapest_route() {
    let scenario = ScenarioKind::Standard.scenario();
    for strategy in [Strategy::Ucs, Strategy::Dijkstra] {
        let report = run_to_completion(&scenario, strategy, &RunPolicy::default()).unwrap();
        assert_eq!(report.path, ["S", "A", "C", "G"]);
        assert_eq!(report.total_cost, 11);
    }
}

#[test]
fn variable_cost_separates_hops_from_weight() {
    let scenario = ScenarioKind::VariableCost.scenario();
    let bfs = run_to_completion(&scenario, Strategy::Bfs, &RunPolicy::default()).unwrap();
    assert_eq!(bfs.path, ["S", "A", "G"]);
    assert_eq!(bfs.total_cost, 20);

    for strategy in [Strategy::Ucs, Strategy::Dijkstra] {
        let report = run_to_completion(&scenario, strategy, &RunPolicy::default()).unwrap();
        assert_eq!(report.path, ["S", "B", "C", "D", "G"]);
        assert_eq!(report.total_cost, 4);
    }
}

#[test]
fn uniform_weights_make_bfs_and_ucs_agree() {
    let scenario = ScenarioKind::UniformCost.scenario();
    let bfs = run_to_completion(&scenario, Strategy::Bfs, &RunPolicy::default()).unwrap();
    let ucs = run_to_completion(&scenario, Strategy::Ucs, &RunPolicy::default()).unwrap();
    assert_eq!(bfs.path, ucs.path);
    assert_eq!(bfs.total_cost, ucs.total_cost);
    assert_eq!(bfs.total_cost, 3);
}

#[test]
fn deep_narrow_dfs_goes_straight_down() {
    let scenario = ScenarioKind::DeepNarrow.scenario();
    let report = run_to_completion(&scenario, Strategy::Dfs, &RunPolicy::default()).unwrap();
    assert_eq!(report.path, ["S", "B", "B1", "B2", "B3", "G"]);
    assert_eq!(report.explored, 5);
    assert_eq!(report.steps, 6);
}

#[test]
fn wide_shallow_bfs_pays_for_the_first_layer() {
    let scenario = ScenarioKind::WideShallow.scenario();
    let bfs = run_to_completion(&scenario, Strategy::Bfs, &RunPolicy::default()).unwrap();
    let ucs = run_to_completion(&scenario, Strategy::Ucs, &RunPolicy::default()).unwrap();
    assert_eq!(bfs.total_cost, 11);
    assert_eq!(ucs.total_cost, 2);
    assert_eq!(ucs.path, ["S", "E", "G"]);
}
