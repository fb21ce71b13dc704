//! Page identifier type.

use std::fmt;

/// Identifies a page in the simulated workload.
///
/// Pages are opaque: a `PageId` has no internal structure and the policies
/// only ever compare them for equality (plus ordering for the LRU
/// tie-break). There is no sentinel value — "no page evicted" is expressed
/// as `Option<PageId>`, so every `u32` is a legitimate page.
///
/// # Example
/// ```
/// use pagesim::PageId;
///
/// let page = PageId::new(42);
/// assert_eq!(page.0, 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(pub u32);

impl PageId {
    /// Create a new PageId.
    #[inline]
    pub fn new(id: u32) -> Self {
        PageId(id)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Page({})", self.0)
    }
}
