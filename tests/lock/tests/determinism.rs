//! In-process determinism: N=10 runs of the whole catalog produce identical
//! transcripts, reports and digests.

use pathlab_harness::policy::RunPolicy;
use pathlab_harness::runner::run_catalog;
use pathlab_kernel::graph::catalog::catalog;
use pathlab_search::engine::SearchEngine;
use pathlab_search::strategy::Strategy;

#[test]
fn catalog_reports_deterministic_n10() {
    let first = run_catalog(&RunPolicy::default()).unwrap();
    for i in 1..10 {
        let again = run_catalog(&RunPolicy::default()).unwrap();
        assert_eq!(first, again, "reports differed on run {i}");
    }
}

#[test]
fn transcript_bytes_deterministic_n10() {
    for scenario in catalog() {
        for strategy in Strategy::ALL {
            let bytes = || {
                let mut engine = SearchEngine::create(&scenario, strategy).unwrap();
                while !engine.is_terminal() {
                    engine.step().unwrap();
                }
                engine.transcript().to_canonical_json_bytes().unwrap()
            };
            let first = bytes();
            for i in 1..10 {
                assert_eq!(first, bytes(), "{strategy} on {} differed on run {i}", scenario.name);
            }
        }
    }
}

#[test]
fn strategies_leave_distinct_transcripts() {
    // Same scenario, different frontier discipline: the digests must not
    // collide even where the final paths agree.
    let scenario = pathlab_kernel::graph::catalog::ScenarioKind::UniformCost.scenario();
    let digests: Vec<String> = [Strategy::Bfs, Strategy::Dfs, Strategy::Ucs]
        .into_iter()
        .map(|strategy| {
            let mut engine = SearchEngine::create(&scenario, strategy).unwrap();
            while !engine.is_terminal() {
                engine.step().unwrap();
            }
            engine.transcript().digest().unwrap().as_str().to_string()
        })
        .collect();
    assert_ne!(digests[0], digests[1]);
    assert_ne!(digests[0], digests[2]);
    assert_ne!(digests[1], digests[2]);
}
