//! FIFO (First-In-First-Out) replacement policy.
//!
//! Evicts the page that has resided longest, independent of reuse.

use std::collections::VecDeque;

use crate::common::{Error, PageId, Result};
use crate::policy::{LoadOutcome, ReplacementPolicy};

/// A page table with FIFO eviction.
///
/// Resident pages live in a queue in arrival order (front = oldest).
/// A hit neither faults nor reorders: FIFO deliberately ignores reuse,
/// which is exactly what separates it from LRU.
///
/// # Example
/// ```
/// use pagesim::policy::{FifoPolicy, ReplacementPolicy};
/// use pagesim::PageId;
///
/// let mut fifo = FifoPolicy::new(2).unwrap();
/// fifo.load_page(PageId::new(1));
/// fifo.load_page(PageId::new(2));
/// let outcome = fifo.load_page(PageId::new(3));
/// assert_eq!(outcome.evicted, Some(PageId::new(1)));
/// ```
pub struct FifoPolicy {
    /// Resident pages in arrival order (front = oldest). No duplicates.
    queue: VecDeque<PageId>,

    /// Maximum resident pages, immutable after construction.
    capacity: usize,

    /// Page faults since construction.
    fault_count: u64,
}

impl FifoPolicy {
    /// Create a FIFO page table holding at most `capacity` pages.
    ///
    /// # Errors
    /// `Error::ZeroCapacity` if `capacity` is 0.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::ZeroCapacity);
        }
        Ok(Self {
            queue: VecDeque::with_capacity(capacity),
            capacity,
            fault_count: 0,
        })
    }
}

impl ReplacementPolicy for FifoPolicy {
    fn capacity(&self) -> usize {
        self.capacity
    }

    /// Snapshot of the resident set in arrival order (oldest first).
    fn resident_pages(&self) -> Vec<PageId> {
        self.queue.iter().copied().collect()
    }

    fn load_page(&mut self, page: PageId) -> LoadOutcome {
        // Linear scan; capacity is small and the simulation is not
        // latency-critical.
        if self.queue.contains(&page) {
            return LoadOutcome::hit();
        }

        self.fault_count += 1;
        self.queue.push_back(page);

        // Insert first, then evict the oldest arrival if over capacity.
        let evicted = if self.queue.len() > self.capacity {
            self.queue.pop_front()
        } else {
            None
        };
        LoadOutcome::fault(evicted)
    }

    fn fault_count(&self) -> u64 {
        self.fault_count
    }
}
