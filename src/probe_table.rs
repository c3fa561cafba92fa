//! ProbeTable: the open-addressing core. One flat slot array with
//! linear probing, doubling its capacity at a fixed occupancy threshold.

use crate::error::{Result, TableError};
use crate::hash::slot_index;
use core::fmt;

/// Slot count used by [`ProbeTable::new`].
pub const DEFAULT_CAPACITY: usize = 16;

// Occupancy threshold as a ratio: grow once len/capacity exceeds 7/10.
const LOAD_NUM: usize = 7;
const LOAD_DEN: usize = 10;

/// One slot of the array. `Empty` means never occupied: nothing ever
/// vacates a slot (there is no removal), which is what lets lookups stop
/// at the first empty slot they meet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Slot {
    Empty,
    Occupied { key: i32, value: i32 },
}

/// A single-threaded hash table mapping `i32` keys to `i32` values.
///
/// Placement is open addressing with linear probing; growth doubles the
/// slot array once occupancy exceeds 7/10 after a new key commits. The
/// table is an ordinary owned value: dropping it releases the slot array.
pub struct ProbeTable {
    slots: Vec<Slot>,
    len: usize,
}

impl ProbeTable {
    /// Create a table with [`DEFAULT_CAPACITY`] slots.
    pub fn new() -> Result<Self> {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a table with `capacity` slots; a request of 0 is raised to 1.
    ///
    /// Fails only when the slot array cannot be allocated.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let slots = Self::alloc_slots(capacity.max(1))?;
        Ok(Self { slots, len: 0 })
    }

    /// Number of live key/value pairs.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the table holds no pairs.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current slot count. Never shrinks; doubles on growth.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Value stored under `key`, or `None` if the key is absent.
    ///
    /// Probes linearly from the key's home slot; an empty slot proves
    /// absence because insertion never leaves holes behind an occupied
    /// run. The probe is bounded by one full wrap so that even a
    /// saturated table (possible only after a failed grow) terminates.
    pub fn get(&self, key: i32) -> Option<i32> {
        let capacity = self.slots.len();
        let mut idx = slot_index(key, capacity);
        for _ in 0..capacity {
            match self.slots[idx] {
                Slot::Occupied { key: occupant, value } if occupant == key => return Some(value),
                Slot::Empty => return None,
                Slot::Occupied { .. } => {}
            }
            idx += 1;
            if idx == capacity {
                idx = 0;
            }
        }
        // Full wrap without an empty slot: saturated table, key absent.
        None
    }

    /// Whether `key` is present.
    pub fn contains_key(&self, key: i32) -> bool {
        self.get(key).is_some()
    }

    /// Insert `key -> value`, overwriting in place if the key is present.
    ///
    /// Returns `Ok(Some(previous))` on overwrite (occupancy unchanged) and
    /// `Ok(None)` when a new key was placed. A new key that pushes
    /// occupancy past 7/10 triggers a doubling grow after it has
    /// committed, so the fresh pair is re-placed along with the rest; a
    /// grow that cannot allocate is absorbed and the insert still
    /// succeeds. `Err(TableError::Full)` is only possible on a saturated
    /// table with no slot left for a brand-new key.
    pub fn insert(&mut self, key: i32, value: i32) -> Result<Option<i32>> {
        let capacity = self.slots.len();
        let mut idx = slot_index(key, capacity);
        for _ in 0..capacity {
            match self.slots[idx] {
                Slot::Occupied { key: occupant, value: previous } if occupant == key => {
                    self.slots[idx] = Slot::Occupied { key, value };
                    return Ok(Some(previous));
                }
                Slot::Empty => {
                    self.slots[idx] = Slot::Occupied { key, value };
                    self.len += 1;
                    self.grow_if_loaded();
                    return Ok(None);
                }
                Slot::Occupied { .. } => {}
            }
            idx += 1;
            if idx == capacity {
                idx = 0;
            }
        }
        Err(TableError::Full {
            key,
            len: self.len,
            capacity,
        })
    }

    /// Double the slot array once occupancy crosses the threshold. Runs
    /// only after a new key has committed.
    fn grow_if_loaded(&mut self) {
        let capacity = self.slots.len();
        if self.len * LOAD_DEN <= capacity * LOAD_NUM {
            return;
        }
        let target = capacity.saturating_mul(2);
        match self.grow(target) {
            Ok(()) => {
                log::debug!(
                    "grew slot array {capacity} -> {target} ({} entries re-placed)",
                    self.len
                );
            }
            Err(err) => {
                // Absorbed: the pair is already committed and the table
                // stays correct, with longer probe runs until a later
                // grow succeeds.
                log::warn!("grow {capacity} -> {target} failed ({err}); continuing over threshold");
            }
        }
    }

    /// Re-place every occupied slot into a freshly allocated array of
    /// `new_capacity` slots, then swap it in. On allocation failure the
    /// table is left untouched.
    fn grow(&mut self, new_capacity: usize) -> Result<()> {
        debug_assert!(new_capacity > self.len, "grown array must fit all entries");
        let mut next = Self::alloc_slots(new_capacity)?;
        for slot in &self.slots {
            if let Slot::Occupied { key, value } = *slot {
                // Keys are unique and the new array is strictly larger,
                // so an empty slot is always reachable.
                let mut idx = slot_index(key, new_capacity);
                while next[idx] != Slot::Empty {
                    idx += 1;
                    if idx == new_capacity {
                        idx = 0;
                    }
                }
                next[idx] = Slot::Occupied { key, value };
            }
        }
        self.slots = next;
        Ok(())
    }

    fn alloc_slots(slot_count: usize) -> Result<Vec<Slot>> {
        let mut slots = Vec::new();
        slots.try_reserve_exact(slot_count)?;
        slots.resize(slot_count, Slot::Empty);
        Ok(slots)
    }
}

impl fmt::Debug for ProbeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProbeTable")
            .field("len", &self.len)
            .field("capacity", &self.slots.len())
            .finish()
    }
}
