//! Error types for pagesim.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
/// This is a common Rust pattern (see `std::io::Result`).
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in pagesim.
///
/// The policies themselves are infallible once constructed: every
/// `load_page` call on a valid instance succeeds deterministically. The
/// only caller-responsibility boundary is construction, which rejects a
/// capacity of zero instead of producing undefined eviction behavior.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A policy was constructed with capacity 0.
    ///
    /// A zero-capacity table would fault on every reference and evict the
    /// page it just inserted, which is never what a caller wants.
    #[error("policy capacity must be at least 1")]
    ZeroCapacity,
}
