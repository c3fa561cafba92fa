//! TableHandle: owning facade where "no table" is a defined state rather
//! than a fault.

use crate::probe_table::ProbeTable;

/// A handle that either owns a live [`ProbeTable`] or is closed.
///
/// Every operation is defined on a closed handle: [`insert`] reports
/// failure and [`get`] reports a miss, while [`close`] is a no-op. A
/// handle whose open failed starts out closed. The owned table is
/// released on `close` or on drop, whichever comes first.
///
/// [`insert`]: TableHandle::insert
/// [`get`]: TableHandle::get
/// [`close`]: TableHandle::close
#[derive(Debug, Default)]
pub struct TableHandle {
    table: Option<ProbeTable>,
}

impl TableHandle {
    /// Open a table with `capacity` slots (a request of 0 is raised to 1).
    ///
    /// When the slot array cannot be allocated the handle comes back
    /// closed; use [`ProbeTable::with_capacity`] directly to observe the
    /// allocation error itself.
    pub fn open(capacity: usize) -> Self {
        match ProbeTable::with_capacity(capacity) {
            Ok(table) => Self { table: Some(table) },
            Err(err) => {
                log::debug!("open with capacity {capacity} failed: {err}");
                Self { table: None }
            }
        }
    }

    /// A handle that refers to no table. Same as `TableHandle::default()`.
    pub fn closed() -> Self {
        Self { table: None }
    }

    /// Whether the handle currently owns a table.
    pub fn is_open(&self) -> bool {
        self.table.is_some()
    }

    /// Insert or overwrite `key -> value`.
    ///
    /// `false` when the handle is closed, or when a saturated table had
    /// no slot left for a brand-new key; `true` otherwise (overwrites
    /// included).
    pub fn insert(&mut self, key: i32, value: i32) -> bool {
        match self.table.as_mut() {
            Some(table) => table.insert(key, value).is_ok(),
            None => false,
        }
    }

    /// Value stored under `key`; `None` when the key is absent or the
    /// handle is closed.
    pub fn get(&self, key: i32) -> Option<i32> {
        self.table.as_ref()?.get(key)
    }

    /// Live pairs in the owned table; 0 when closed.
    pub fn len(&self) -> usize {
        self.table.as_ref().map_or(0, ProbeTable::len)
    }

    /// Whether no pairs are stored (trivially true when closed).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Slot count of the owned table; 0 when closed.
    pub fn capacity(&self) -> usize {
        self.table.as_ref().map_or(0, ProbeTable::capacity)
    }

    /// Release the owned table, if any. Idempotent: closing a closed
    /// handle does nothing. The handle stays usable afterwards with the
    /// defined closed-handle outcomes.
    pub fn close(&mut self) {
        self.table = None;
    }
}

impl From<ProbeTable> for TableHandle {
    fn from(table: ProbeTable) -> Self {
        Self { table: Some(table) }
    }
}
