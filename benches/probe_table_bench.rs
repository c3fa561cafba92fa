use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use probe_table::ProbeTable;
use std::time::Duration;

fn lcg(mut s: u64) -> impl Iterator<Item = u64> {
    std::iter::from_fn(move || {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        Some(s)
    })
}

fn key(n: u64) -> i32 {
    n as i32
}

fn bench_insert_grow(c: &mut Criterion) {
    c.bench_function("probe_table_insert_10k_grow", |b| {
        b.iter_batched(
            || ProbeTable::with_capacity(8).unwrap(),
            |mut t| {
                // Starts small so the measurement includes every doubling.
                for (i, x) in lcg(1).take(10_000).enumerate() {
                    t.insert(key(x), i as i32).unwrap();
                }
                black_box(t)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_insert_presized(c: &mut Criterion) {
    c.bench_function("probe_table_insert_10k_presized", |b| {
        b.iter_batched(
            // 32768 slots keep 10k keys under the 7/10 threshold, so no
            // grow runs during the loop.
            || ProbeTable::with_capacity(32_768).unwrap(),
            |mut t| {
                for (i, x) in lcg(1).take(10_000).enumerate() {
                    t.insert(key(x), i as i32).unwrap();
                }
                black_box(t)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_get_hit(c: &mut Criterion) {
    c.bench_function("probe_table_get_hit", |b| {
        let mut t = ProbeTable::new().unwrap();
        // Even keys only; the miss bench probes the odd half.
        let keys: Vec<i32> = lcg(7).take(20_000).map(|x| key(x) & !1).collect();
        for (i, k) in keys.iter().enumerate() {
            t.insert(*k, i as i32).unwrap();
        }
        let mut it = keys.iter().cycle();
        b.iter(|| {
            let k = it.next().unwrap();
            black_box(t.get(*k));
        })
    });
}

fn bench_get_miss(c: &mut Criterion) {
    c.bench_function("probe_table_get_miss", |b| {
        let mut t = ProbeTable::new().unwrap();
        for (i, x) in lcg(11).take(10_000).enumerate() {
            t.insert(key(x) & !1, i as i32).unwrap();
        }
        // Odd keys are never inserted, so every probe is a miss.
        let mut miss = lcg(0xdead_beef);
        b.iter(|| {
            let k = key(miss.next().unwrap()) | 1;
            black_box(t.get(k));
        })
    });
}

fn bench_config() -> Criterion {
    Criterion::default()
        .sample_size(50)
        .measurement_time(Duration::from_secs(8))
        .warm_up_time(Duration::from_secs(2))
}

criterion_group! {
    name = benches;
    config = bench_config();
    targets = bench_insert_grow, bench_insert_presized, bench_get_hit, bench_get_miss
}
criterion_main!(benches);
