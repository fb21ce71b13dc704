//! Runs both eviction policies over the built-in workload and prints the
//! per-reference traces and the cross-policy summary.

use pagesim::policy::PolicyKind;
use pagesim::sim::{report, run_trial, workload};

fn main() -> pagesim::Result<()> {
    env_logger::init();

    let refs = workload::reference_pages();
    let trace_capacity = workload::RESIDENT_SET_SIZES[0];

    let mut results = Vec::new();
    for &capacity in &workload::RESIDENT_SET_SIZES {
        for kind in PolicyKind::ALL {
            let trial = run_trial(kind, capacity, &refs)?;

            // The full trace is only interesting once; print it for the
            // smallest resident set and summarize the rest.
            if capacity == trace_capacity {
                println!("{kind}, resident set size {capacity}");
                println!("{}", report::trace_table(&trial));
                println!();
            }
            results.push(trial);
        }
    }

    println!("{}", report::summary_table(&results));
    Ok(())
}
