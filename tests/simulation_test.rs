//! Simulation Tests
//!
//! Pins the golden fault counts for the built-in 33-reference workload.
//! The counts are a deterministic function of the reference string and
//! capacity, so any change here means a policy's behavior changed.

use pagesim::policy::PolicyKind;
use pagesim::sim::{report, run_trial, workload, TrialResult};
use pagesim::PageId;

fn run(kind: PolicyKind, capacity: usize) -> TrialResult {
    run_trial(kind, capacity, &workload::reference_pages()).unwrap()
}

// ============================================================================
// Golden fault counts
// ============================================================================

#[test]
fn test_golden_fault_counts() {
    // (capacity, fifo faults, lru faults)
    let golden = [(3, 20, 19), (5, 16, 16), (7, 14, 13)];

    for (capacity, fifo_faults, lru_faults) in golden {
        assert_eq!(run(PolicyKind::Fifo, capacity).fault_count, fifo_faults);
        assert_eq!(run(PolicyKind::Lru, capacity).fault_count, lru_faults);
    }
}

#[test]
fn test_fault_frequency_is_count_over_length() {
    let fifo = run(PolicyKind::Fifo, 3);
    assert_eq!(fifo.fault_frequency(), 20.0 / 33.0);

    let lru = run(PolicyKind::Lru, 3);
    assert_eq!(lru.fault_frequency(), 19.0 / 33.0);
}

// ============================================================================
// Trace shape
// ============================================================================

#[test]
fn test_trace_covers_every_reference() {
    for kind in PolicyKind::ALL {
        let trial = run(kind, 3);
        assert_eq!(trial.steps.len(), workload::REFERENCE_STRING.len());

        for (step, &raw) in trial.steps.iter().zip(&workload::REFERENCE_STRING) {
            assert_eq!(step.page, PageId::new(raw));
            assert!(step.resident.len() <= 3);
        }
    }
}

#[test]
fn test_first_fault_fills_free_slot() {
    for kind in PolicyKind::ALL {
        let trial = run(kind, 3);
        let first = &trial.steps[0];
        assert!(first.outcome.faulted);
        assert_eq!(first.outcome.evicted, None);
        assert_eq!(first.resident, vec![PageId::new(1)]);
    }
}

#[test]
fn test_first_overflow_diverges_between_policies() {
    // The workload opens 1,1,1,1,0,3,1,1,3,5: the reference to 5 is the
    // first overflow of a capacity-3 table. FIFO drops the oldest arrival
    // (1); LRU drops the stalest access (0).
    let fifo = run(PolicyKind::Fifo, 3);
    assert_eq!(fifo.steps[9].outcome.evicted, Some(PageId::new(1)));

    let lru = run(PolicyKind::Lru, 3);
    assert_eq!(lru.steps[9].outcome.evicted, Some(PageId::new(0)));
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn test_summary_table_holds_golden_frequencies() {
    let mut results = Vec::new();
    for &capacity in &workload::RESIDENT_SET_SIZES {
        for kind in PolicyKind::ALL {
            results.push(run(kind, capacity));
        }
    }

    let rendered = report::summary_table(&results).to_string();
    assert!(rendered.contains("0.606061")); // FIFO, capacity 3
    assert!(rendered.contains("0.575758")); // LRU, capacity 3
    assert!(rendered.contains("0.484848")); // both, capacity 5
    assert!(rendered.contains("0.393939")); // LRU, capacity 7
}
