//! pagesim - A page-replacement simulator with swappable eviction policies.
//!
//! # Architecture
//! ```text
//! ┌───────────────────────────────────────────────────────┐
//! │                       pagesim                         │
//! ├───────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────┐  │
//! │  │          Simulation Driver (sim/)               │  │
//! │  │   workload → run_trial → TrialResult → report   │  │
//! │  └─────────────────────────────────────────────────┘  │
//! │                          ↓                            │
//! │  ┌─────────────────────────────────────────────────┐  │
//! │  │   Eviction Policies (policy/)  [Swappable]      │  │
//! │  │  ┌───────────────────────────────────────────┐  │  │
//! │  │  │   ReplacementPolicy:  FIFO  ←─OR─→  LRU   │  │  │
//! │  │  └───────────────────────────────────────────┘  │  │
//! │  └─────────────────────────────────────────────────┘  │
//! └───────────────────────────────────────────────────────┘
//! ```
//!
//! The policies are the core: bounded page tables that count faults and
//! pick eviction victims. The driver feeds a fixed reference string into
//! one fresh instance per (policy, capacity) pairing and renders the
//! results as tables. Pages are opaque integers; there is no address
//! translation, no disk, and no concurrency.
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, Error)
//! - [`policy`] - The [`ReplacementPolicy`] trait and both implementations
//! - [`sim`] - Trial driver, built-in workload, and table rendering
//!
//! # Quick Start
//! ```
//! use pagesim::policy::{PolicyKind, ReplacementPolicy};
//! use pagesim::PageId;
//!
//! let mut lru = PolicyKind::Lru.build(3).unwrap();
//! let outcome = lru.load_page(PageId::new(1));
//! assert!(outcome.faulted);
//! assert_eq!(lru.fault_count(), 1);
//! ```

pub mod common;
pub mod policy;
pub mod sim;

// Re-export commonly used items at crate root for convenience
pub use common::{Error, PageId, Result};
pub use policy::{FifoPolicy, LoadOutcome, LruPolicy, PolicyKind, ReplacementPolicy};
