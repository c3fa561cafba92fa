//! Deterministic key mixing for slot placement.
//!
//! Placement must be reproducible: every grow recomputes each key's index
//! from scratch against the new slot count, so the same key has to reach
//! the same home slot from the same function every time. Keys are mixed
//! with a fixed avalanche function instead of a seeded hasher. The mix
//! operates on the key's raw bit pattern, so negative keys are
//! well-defined, and it avalanches strongly enough that runs of
//! sequential keys spread across the table instead of clustering.

/// Avalanche mix over the key's unsigned bit pattern.
///
/// Two xor-shift/multiply rounds plus a final shift; a bijection on
/// `u32`, so distinct keys never collapse to one mixed value (they may
/// still collide after reduction modulo the slot count).
#[inline]
pub(crate) fn mix(key: i32) -> u32 {
    let mut h = key as u32;
    h ^= h >> 16;
    h = h.wrapping_mul(0x85eb_ca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2_ae35);
    h ^= h >> 16;
    h
}

/// Home slot for `key` in an array of `slot_count` slots.
///
/// Reduction is by modulo, not bit masking: slot counts start at a
/// caller-chosen value and double from there, so they are not generally
/// powers of two.
#[inline]
pub(crate) fn slot_index(key: i32, slot_count: usize) -> usize {
    debug_assert!(slot_count > 0, "slot array must not be empty");
    mix(key) as usize % slot_count
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    /// Invariant: the mix is a pure function of the key bits; repeated
    /// calls and sign-symmetric bit patterns agree.
    #[test]
    fn mix_is_deterministic() {
        for key in [0, 1, -1, 42, -42, i32::MIN, i32::MAX] {
            assert_eq!(mix(key), mix(key));
        }
        // -1i32 and u32::MAX share a bit pattern; the mix sees only bits.
        assert_eq!(mix(-1), mix(u32::MAX as i32));
    }

    /// Invariant: the mix is injective over any key sample (it is a
    /// bijection on u32), so collisions can only come from reduction.
    #[test]
    fn mix_does_not_collapse_keys() {
        let mixed: HashSet<u32> = (-2000..2000).map(mix).collect();
        assert_eq!(mixed.len(), 4000);
    }

    /// Invariant: sequential keys do not pile onto a few home slots; with
    /// 2000 keys over 8 slots every slot is reached.
    #[test]
    fn sequential_keys_spread_over_small_tables() {
        for slot_count in [8usize, 10, 16, 31] {
            let hit: HashSet<usize> = (0..2000).map(|k| slot_index(k, slot_count)).collect();
            assert_eq!(hit.len(), slot_count, "slot_count {slot_count}");
        }
    }

    /// Invariant: reduction stays in range for non-power-of-two counts.
    #[test]
    fn slot_index_stays_in_range() {
        for slot_count in [1usize, 2, 7, 10, 1000] {
            for key in [0, 5, -5, i32::MIN, i32::MAX] {
                assert!(slot_index(key, slot_count) < slot_count);
            }
        }
    }
}
