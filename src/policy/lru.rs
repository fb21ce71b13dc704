//! LRU (Least-Recently-Used) replacement policy.
//!
//! Evicts the page whose most recent access is furthest in the past.

use std::cmp::Reverse;
use std::collections::HashMap;

use crate::common::{Error, PageId, Result};
use crate::policy::{LoadOutcome, ReplacementPolicy};

/// A page table with LRU eviction.
///
/// Each resident page carries a recency counter: 0 means "touched by the
/// most recent reference". Every `load_page` call resets the referenced
/// page to 0 — hit or miss — and ages every other resident by +1. This is
/// what separates LRU from FIFO: a repeat access rescues a page from
/// eviction.
///
/// The whole-table aging pass makes each reference O(capacity). That is a
/// deliberate simplicity trade-off for a simulator with single-digit
/// capacities; a production LRU would keep an intrusive list or a
/// monotonic timestamp instead.
///
/// # Eviction tie-break
/// When over capacity, the page with the maximum counter is evicted.
/// Among equal counters the smallest `PageId` loses. Under this aging
/// scheme counters of distinct residents are always pairwise distinct, so
/// the tie-break is pinned for determinism rather than ever exercised.
///
/// # Example
/// ```
/// use pagesim::policy::{LruPolicy, ReplacementPolicy};
/// use pagesim::PageId;
///
/// let mut lru = LruPolicy::new(2).unwrap();
/// lru.load_page(PageId::new(1));
/// lru.load_page(PageId::new(2));
/// lru.load_page(PageId::new(1)); // rescue 1
/// let outcome = lru.load_page(PageId::new(3));
/// assert_eq!(outcome.evicted, Some(PageId::new(2)));
/// ```
pub struct LruPolicy {
    /// Resident pages mapped to their recency counter (0 = most recent).
    ages: HashMap<PageId, u64>,

    /// Maximum resident pages, immutable after construction.
    capacity: usize,

    /// Page faults since construction.
    fault_count: u64,
}

impl LruPolicy {
    /// Create an LRU page table holding at most `capacity` pages.
    ///
    /// # Errors
    /// `Error::ZeroCapacity` if `capacity` is 0.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::ZeroCapacity);
        }
        Ok(Self {
            ages: HashMap::with_capacity(capacity),
            capacity,
            fault_count: 0,
        })
    }

    /// The page that would be evicted next: maximum counter, smallest
    /// `PageId` among equals.
    fn victim(&self) -> Option<PageId> {
        self.ages
            .iter()
            .max_by_key(|&(page, age)| (*age, Reverse(*page)))
            .map(|(page, _)| *page)
    }
}

impl ReplacementPolicy for LruPolicy {
    fn capacity(&self) -> usize {
        self.capacity
    }

    /// Snapshot of the resident set, most recently used first.
    ///
    /// The backing map is unordered, so the snapshot sorts by recency to
    /// stay deterministic.
    fn resident_pages(&self) -> Vec<PageId> {
        let mut pages: Vec<(PageId, u64)> =
            self.ages.iter().map(|(page, age)| (*page, *age)).collect();
        pages.sort_by_key(|&(page, age)| (age, page));
        pages.into_iter().map(|(page, _)| page).collect()
    }

    fn load_page(&mut self, page: PageId) -> LoadOutcome {
        let faulted = !self.ages.contains_key(&page);
        if faulted {
            self.fault_count += 1;
        }

        // Age the whole table, then reset the touched page to 0. On a hit
        // the insert overwrites the page's aged counter.
        for age in self.ages.values_mut() {
            *age += 1;
        }
        self.ages.insert(page, 0);

        // Insert first, then evict the stalest page if over capacity. The
        // just-inserted page has counter 0 and can never be the victim.
        let evicted = if self.ages.len() > self.capacity {
            let victim = self.victim();
            if let Some(v) = victim {
                self.ages.remove(&v);
            }
            victim
        } else {
            None
        };

        LoadOutcome { faulted, evicted }
    }

    fn fault_count(&self) -> u64 {
        self.fault_count
    }
}
