//! probe-table: A single-threaded open-addressing hash table from `i32`
//! keys to `i32` values, with linear probing and doubling growth.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: an embeddable integer key/value store that owns its bucket
//!   array outright, so occupancy, placement and growth can be reasoned
//!   about (and tested) directly instead of delegated to a
//!   general-purpose map.
//! - Layers:
//!   - ProbeTable: the structural core. One flat slot array, a fixed
//!     avalanche mix for placement, linear probing with wrap-around,
//!     overwrite-in-place for repeated keys, and a doubling grow once
//!     occupancy exceeds 7/10 after a new key commits.
//!   - TableHandle: an owning facade for callers that pass around a
//!     handle which may refer to no table at all. Operations on a
//!     closed handle are defined outcomes (rejected insert, missed
//!     lookup, no-op close) rather than faults.
//!
//! Constraints
//! - Single-threaded: mutation requires `&mut self`; callers wanting
//!   shared access put the table behind their own lock.
//! - Deterministic placement: the slot index is a pure function of the
//!   key's bit pattern and the current slot count. Growth recomputes
//!   every index from that same function, which is why a per-instance
//!   seeded hasher is ruled out.
//! - No removal: lookups stop at the first empty slot, which is sound
//!   only because entries are never vacated. Removal would need
//!   tombstones and is deliberately absent.
//! - Allocation is checked, never assumed: the slot array is reserved
//!   via `try_reserve_exact`, and failures surface as `TableError`
//!   values instead of aborting.
//!
//! Growth and failure semantics
//! - The 7/10 threshold is evaluated with integer arithmetic
//!   (`len * 10 > capacity * 7`) after the triggering key is already in
//!   place, so a grow failure cannot lose that key.
//! - When the doubled array cannot be allocated the insert still
//!   succeeds and the table keeps operating above its threshold with
//!   longer probe runs. The next threshold crossing retries the
//!   doubling.
//! - Probe loops are bounded by the slot count, so even a table left
//!   saturated by repeated allocation failures terminates: lookups miss
//!   and inserts of new keys report `TableError::Full`.
//!
//! Notes and non-goals
//! - No iteration or enumeration of entries.
//! - No per-entry heap allocations; one slot array holds everything.
//! - Operations never panic on any caller input, including a closed
//!   `TableHandle`.
//! - Public API surface is `ProbeTable`, `TableHandle` and the error
//!   types; the mixing function is an implementation detail.

mod error;
mod hash;
mod probe_table;
mod probe_table_proptest;
mod table_handle;

// Public surface
pub use error::{Result, TableError};
pub use probe_table::{ProbeTable, DEFAULT_CAPACITY};
pub use table_handle::TableHandle;
