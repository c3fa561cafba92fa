//! Crate error type and result alias.

use std::collections::TryReserveError;

/// Result alias for fallible table operations.
pub type Result<T> = std::result::Result<T, TableError>;

/// Errors surfaced by table creation and insertion.
///
/// A grow failure *during* an insert is absorbed and never surfaces here:
/// the triggering pair is already committed, so the insert reports success
/// and the table keeps operating over its usual occupancy threshold.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// The slot array could not be allocated.
    #[error("slot array allocation failed: {0}")]
    Alloc(#[from] TryReserveError),

    /// A new key was offered but every slot was probed without finding room.
    ///
    /// Only reachable once the table is saturated, which requires an
    /// earlier grow to have failed; overwrites of existing keys still
    /// succeed in that state.
    #[error("no free slot for key {key} ({len}/{capacity} slots occupied)")]
    Full {
        /// Key whose insertion was rejected.
        key: i32,
        /// Live entries at the time of the failed probe.
        len: usize,
        /// Slot count at the time of the failed probe.
        capacity: usize,
    },
}
