//! The built-in test workload.

use crate::common::PageId;

/// The fixed 33-reference page string every trial replays.
pub const REFERENCE_STRING: [u32; 33] = [
    1, 1, 1, 1, 0, 3, 1, 1, 3, 5, 1, 8, 1, 3, 5, 13, //
    15, 6, 1, 1, 3, 6, 7, 8, 9, 3, 1, 1, 4, 4, 4, 1, 2,
];

/// The resident-set sizes (page-table capacities) trialled per policy.
pub const RESIDENT_SET_SIZES: [usize; 3] = [3, 5, 7];

/// The reference string as typed pages.
pub fn reference_pages() -> Vec<PageId> {
    REFERENCE_STRING.iter().copied().map(PageId::new).collect()
}
