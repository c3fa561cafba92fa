#![cfg(test)]

// Property tests for ProbeTable kept inside the crate so they can state
// occupancy invariants alongside the public surface.

use crate::probe_table::ProbeTable;
use proptest::prelude::*;
use std::collections::HashMap;

// Pool-indexed operations to improve shrinking: indices shrink to earlier
// keys, pool length shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum Op {
    Insert(usize, i32),
    Get(usize),
    Probe(i32),
}

fn arb_scenario() -> impl Strategy<Value = (usize, Vec<i32>, Vec<Op>)> {
    (0usize..=24, proptest::collection::vec(any::<i32>(), 1..=12)).prop_flat_map(
        |(initial_capacity, pool)| {
            let idxs: Vec<usize> = (0..pool.len()).collect();
            let idx = proptest::sample::select(idxs);
            let op = prop_oneof![
                (idx.clone(), any::<i32>()).prop_map(|(i, v)| Op::Insert(i, v)),
                idx.prop_map(Op::Get),
                any::<i32>().prop_map(Op::Probe),
            ];
            proptest::collection::vec(op, 1..200)
                .prop_map(move |ops| (initial_capacity, pool.clone(), ops))
        },
    )
}

// Property: state-machine equivalence against std::collections::HashMap.
// Invariants exercised across random operation sequences:
// - New keys raise occupancy by one; overwrites return the previous value
//   and leave occupancy unchanged.
// - `get`/`contains_key` parity with the model for pooled and arbitrary keys.
// - Occupancy stays at or below 7/10 of the slot count after every op, and
//   the slot count only ever doubles from its starting value.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((initial_capacity, pool, ops) in arb_scenario()) {
        let mut sut = ProbeTable::with_capacity(initial_capacity).unwrap();
        let mut model: HashMap<i32, i32> = HashMap::new();
        let starting_capacity = sut.capacity();

        for op in ops {
            match op {
                Op::Insert(i, v) => {
                    let k = pool[i];
                    let previous = sut.insert(k, v).unwrap();
                    prop_assert_eq!(previous, model.insert(k, v));
                }
                Op::Get(i) => {
                    let k = pool[i];
                    prop_assert_eq!(sut.get(k), model.get(&k).copied());
                }
                Op::Probe(k) => {
                    prop_assert_eq!(sut.get(k), model.get(&k).copied());
                    prop_assert_eq!(sut.contains_key(k), model.contains_key(&k));
                }
            }

            // Post-conditions after each op
            prop_assert_eq!(sut.len(), model.len());
            prop_assert_eq!(sut.is_empty(), model.is_empty());
            prop_assert!(sut.len() * 10 <= sut.capacity() * 7);
            prop_assert_eq!(sut.capacity() % starting_capacity, 0);
            prop_assert!((sut.capacity() / starting_capacity).is_power_of_two());
        }

        // Full sweep: every model entry is found with its latest value.
        for (k, v) in &model {
            prop_assert_eq!(sut.get(*k), Some(*v));
        }
    }
}

// Property: dense sequential key runs, the bulk-load shape, never lose an
// entry; growth keeps occupancy at or below 7/10 throughout, from any
// starting capacity including the degenerate 0.
proptest! {
    #[test]
    fn prop_sequential_runs_survive_growth(
        start in -10_000i32..10_000,
        n in 1usize..400,
        initial_capacity in 0usize..=16,
    ) {
        let mut sut = ProbeTable::with_capacity(initial_capacity).unwrap();
        for offset in 0..n as i32 {
            let key = start + offset;
            sut.insert(key, key * 2).unwrap();
            prop_assert!(sut.len() * 10 <= sut.capacity() * 7);
        }
        prop_assert_eq!(sut.len(), n);
        for offset in 0..n as i32 {
            let key = start + offset;
            prop_assert_eq!(sut.get(key), Some(key * 2));
        }
    }
}
