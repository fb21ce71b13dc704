//! Eviction policy implementations (replacers).
//!
//! Both policies implement the [`ReplacementPolicy`] trait so the
//! simulation driver can treat them polymorphically and swap one for the
//! other at runtime.
//!
//! Currently implements:
//! - [`FifoPolicy`] - evicts the page resident longest, ignoring reuse
//! - [`LruPolicy`] - evicts the page whose last access is furthest in the past

mod fifo;
mod lru;

use std::fmt;

use crate::common::{PageId, Result};

pub use fifo::FifoPolicy;
pub use lru::LruPolicy;

/// The result of one [`ReplacementPolicy::load_page`] call.
///
/// `evicted` is `None` either because the reference was a hit (no fault,
/// nothing to make room for) or because the table was still filling up
/// (faulted, but under capacity). It is never a sentinel page value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOutcome {
    /// Whether the referenced page was absent from the resident set.
    pub faulted: bool,

    /// The page removed to make room, if any.
    pub evicted: Option<PageId>,
}

impl LoadOutcome {
    /// The page was already resident.
    pub(crate) fn hit() -> Self {
        Self {
            faulted: false,
            evicted: None,
        }
    }

    /// The page was absent and had to be faulted in.
    pub(crate) fn fault(evicted: Option<PageId>) -> Self {
        Self {
            faulted: true,
            evicted,
        }
    }
}

/// The shared contract both eviction policies implement.
///
/// A policy instance is created with a fixed capacity and a zero fault
/// count, and is mutated only through [`load_page`](Self::load_page).
/// Instances are single-threaded and not shared: the driver constructs one
/// fresh instance per (policy, capacity) trial.
///
/// # Invariants
/// - `resident_pages().len() <= capacity()` after every call.
/// - `fault_count()` is non-decreasing and increases by exactly 1 iff the
///   referenced page was absent immediately before the call.
pub trait ReplacementPolicy {
    /// The maximum number of resident pages, fixed at construction.
    fn capacity(&self) -> usize;

    /// A snapshot copy of the current resident set.
    ///
    /// FIFO returns pages in arrival order (oldest first); LRU returns
    /// them most-recently-used first. See each implementation.
    fn resident_pages(&self) -> Vec<PageId>;

    /// Reference `page`, faulting it in if absent.
    ///
    /// Insertion happens before any eviction, so the resident set briefly
    /// holds `capacity() + 1` pages inside this call but never after it
    /// returns.
    fn load_page(&mut self, page: PageId) -> LoadOutcome;

    /// Total page faults since construction.
    fn fault_count(&self) -> u64;
}

/// Selects one of the available eviction policies.
///
/// # Example
/// ```
/// use pagesim::policy::{PolicyKind, ReplacementPolicy};
/// use pagesim::PageId;
///
/// let mut policy = PolicyKind::Lru.build(3).unwrap();
/// assert!(policy.load_page(PageId::new(1)).faulted);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyKind {
    Fifo,
    Lru,
}

impl PolicyKind {
    /// Every available policy, in the order trials run them.
    pub const ALL: [PolicyKind; 2] = [PolicyKind::Fifo, PolicyKind::Lru];

    /// Construct a boxed policy instance with the given capacity.
    ///
    /// # Errors
    /// `Error::ZeroCapacity` if `capacity` is 0.
    pub fn build(self, capacity: usize) -> Result<Box<dyn ReplacementPolicy>> {
        Ok(match self {
            PolicyKind::Fifo => Box::new(FifoPolicy::new(capacity)?),
            PolicyKind::Lru => Box::new(LruPolicy::new(capacity)?),
        })
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolicyKind::Fifo => write!(f, "FIFO"),
            PolicyKind::Lru => write!(f, "LRU"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Error;

    #[test]
    fn test_kind_display() {
        assert_eq!(format!("{}", PolicyKind::Fifo), "FIFO");
        assert_eq!(format!("{}", PolicyKind::Lru), "LRU");
    }

    #[test]
    fn test_build_rejects_zero_capacity() {
        for kind in PolicyKind::ALL {
            assert_eq!(kind.build(0).err(), Some(Error::ZeroCapacity));
        }
    }

    #[test]
    fn test_build_reports_capacity() {
        for kind in PolicyKind::ALL {
            let policy = kind.build(5).unwrap();
            assert_eq!(policy.capacity(), 5);
            assert_eq!(policy.fault_count(), 0);
            assert!(policy.resident_pages().is_empty());
        }
    }
}
