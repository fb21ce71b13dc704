//! Running one policy over a reference string.

use crate::common::{PageId, Result};
use crate::policy::{LoadOutcome, PolicyKind};

/// What happened at one step of a trial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRecord {
    /// The page that was referenced.
    pub page: PageId,

    /// Fault / eviction outcome of the reference.
    pub outcome: LoadOutcome,

    /// Snapshot of the resident set immediately after the reference.
    pub resident: Vec<PageId>,
}

/// The full record of one (policy, capacity) run.
#[derive(Debug, Clone, PartialEq)]
pub struct TrialResult {
    /// Which policy ran.
    pub kind: PolicyKind,

    /// The capacity the policy instance was built with.
    pub capacity: usize,

    /// One record per reference, in order.
    pub steps: Vec<StepRecord>,

    /// Total page faults over the run.
    pub fault_count: u64,
}

impl TrialResult {
    /// Fault frequency: faults per reference, in `[0.0, 1.0]`.
    pub fn fault_frequency(&self) -> f64 {
        if self.steps.is_empty() {
            0.0
        } else {
            self.fault_count as f64 / self.steps.len() as f64
        }
    }
}

/// Run `kind` at `capacity` over `refs`, recording every step.
///
/// Each trial owns a fresh policy instance; nothing is shared between
/// trials.
///
/// # Errors
/// `Error::ZeroCapacity` if `capacity` is 0.
///
/// # Example
/// ```
/// use pagesim::policy::PolicyKind;
/// use pagesim::sim::{run_trial, workload};
///
/// let refs = workload::reference_pages();
/// let trial = run_trial(PolicyKind::Fifo, 3, &refs).unwrap();
/// assert_eq!(trial.fault_count, 20);
/// ```
pub fn run_trial(kind: PolicyKind, capacity: usize, refs: &[PageId]) -> Result<TrialResult> {
    let mut policy = kind.build(capacity)?;

    let mut steps = Vec::with_capacity(refs.len());
    for &page in refs {
        let outcome = policy.load_page(page);
        if outcome.faulted {
            log::debug!(
                "{kind} capacity {capacity}: fault on {page}, evicted {:?}",
                outcome.evicted
            );
        }
        steps.push(StepRecord {
            page,
            outcome,
            resident: policy.resident_pages(),
        });
    }

    Ok(TrialResult {
        kind,
        capacity,
        fault_count: policy.fault_count(),
        steps,
    })
}
