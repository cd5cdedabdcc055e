use chained_hashmap::ChainedHashMap;
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use std::time::Duration;

fn lcg(mut s: u64) -> impl Iterator<Item = u64> {
    std::iter::from_fn(move || {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        Some(s)
    })
}

fn key(n: u64) -> String {
    format!("k{:016x}", n)
}

// Buckets sized to keep chains short for throughput runs; the map itself
// never resizes.
const BENCH_BUCKETS: usize = 4096;

fn bench_insert(c: &mut Criterion) {
    c.bench_function("chained_hashmap_insert_10k", |b| {
        b.iter_batched(
            || ChainedHashMap::<String, u64>::with_buckets(BENCH_BUCKETS),
            |mut m| {
                for (i, x) in lcg(1).take(10_000).enumerate() {
                    m.insert(key(x), i as u64);
                }
                black_box(m)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_get_hit(c: &mut Criterion) {
    c.bench_function("chained_hashmap_get_hit", |b| {
        let mut m = ChainedHashMap::with_buckets(BENCH_BUCKETS);
        let keys: Vec<_> = lcg(7).take(20_000).map(key).collect();
        for (i, k) in keys.iter().cloned().enumerate() {
            m.insert(k, i as u64);
        }
        let mut it = keys.iter().cycle();
        b.iter(|| {
            let k = it.next().unwrap();
            let v = m.get(k).unwrap();
            black_box(v);
        })
    });
}

fn bench_get_miss(c: &mut Criterion) {
    c.bench_function("chained_hashmap_get_miss", |b| {
        let mut m = ChainedHashMap::with_buckets(BENCH_BUCKETS);
        for (i, x) in lcg(11).take(10_000).enumerate() {
            m.insert(key(x), i as u64);
        }
        let mut miss = lcg(0xdead_beef);
        b.iter(|| {
            // generate keys unlikely in map
            let k = key(miss.next().unwrap());
            black_box(m.get(&k).is_err());
        })
    });
}

fn bench_overwrite(c: &mut Criterion) {
    c.bench_function("chained_hashmap_overwrite", |b| {
        let mut m = ChainedHashMap::with_buckets(64);
        m.insert("key".to_string(), 0u64);
        let mut i = 0u64;
        b.iter(|| {
            i += 1;
            black_box(m.insert("key".to_string(), i));
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
    targets = bench_insert, bench_get_hit, bench_get_miss, bench_overwrite
}
criterion_main!(benches);
