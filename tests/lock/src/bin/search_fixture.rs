//! Binary that runs every catalog scenario under every strategy and prints
//! deterministic output lines for cross-process verification.
//!
//! Usage: `search_fixture`
//!
//! Output: one block of `key=value` lines per run on stdout. Logs go to
//! stderr, filtered by `RUST_LOG` (default `warn`).

use std::error::Error;

use pathlab_harness::policy::RunPolicy;
use pathlab_harness::runner::run_catalog;
use pathlab_kernel::graph::catalog::catalog;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

fn setup_logging() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    setup_logging();

    let policy = RunPolicy::default();
    println!("policy_digest={}", policy.digest()?);
    for scenario in catalog() {
        println!("scenario_digest[{}]={}", scenario.name, scenario.digest()?);
    }

    let reports = run_catalog(&policy)?;
    for report in &reports {
        let key = format!("{}/{}", report.scenario, report.strategy.id());
        let path: Vec<&str> = report.path.iter().map(|n| n.as_str()).collect();
        println!("[{key}]");
        println!("outcome={:?}", report.outcome);
        println!("path={}", path.join(","));
        println!("total_cost={}", report.total_cost);
        println!("steps={}", report.steps);
        println!("max_frontier_size={}", report.max_frontier_size);
        println!("transcript_digest={}", report.transcript_digest);
        println!("report_digest={}", report.digest()?);
    }
    println!("run_count={}", reports.len());
    Ok(())
}
