//! Insert benchmarks for `BloomFilter::add` and friends.
//!
//! 1. **By Size**: latency as capacity grows (cache effects only, O(1) work)
//! 2. **By False Positive Rate**: lower rate means more probes per add
//! 3. **By Key Length**: hashing cost for 8, 32 and 256 byte keys
//! 4. **Locking Strategy**: per-call lock vs. `add_batch` vs. write guard vs. `add_mut`

use bloomguard::BloomFilter;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

mod common;
use common::*;

fn bench_insert_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert/by_size");
    let items = generate_strings(1000, 32);

    for &size in SIZES {
        let filter = BloomFilter::with_estimate(size, 0.01).unwrap();
        group.throughput(Throughput::Elements(items.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &items, |b, items| {
            b.iter(|| {
                for item in items {
                    filter.add(black_box(item.as_bytes()));
                }
            });
        });
    }

    group.finish();
}

fn bench_insert_by_fp_rate(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert/by_fp_rate");
    let items = generate_strings(1000, 32);

    for &p in FP_RATES {
        let filter = BloomFilter::with_estimate(100_000, p).unwrap();
        group.throughput(Throughput::Elements(items.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(p), &items, |b, items| {
            b.iter(|| {
                for item in items {
                    filter.add(black_box(item.as_bytes()));
                }
            });
        });
    }

    group.finish();
}

fn bench_insert_by_key_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert/by_key_length");
    let filter = BloomFilter::with_estimate(100_000, 0.01).unwrap();

    let short = generate_u64_keys(1000);
    group.throughput(Throughput::Elements(short.len() as u64));
    group.bench_function("8", |b| {
        b.iter(|| {
            for key in &short {
                filter.add(black_box(key));
            }
        });
    });

    for len in [32usize, 256] {
        let items = generate_strings(1000, len);
        group.bench_with_input(BenchmarkId::from_parameter(len), &items, |b, items| {
            b.iter(|| {
                for item in items {
                    filter.add(black_box(item.as_bytes()));
                }
            });
        });
    }

    group.finish();
}

fn bench_insert_locking(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert/locking");
    let items = generate_urls(1000);
    group.throughput(Throughput::Elements(items.len() as u64));

    let filter = BloomFilter::with_estimate(100_000, 0.01).unwrap();
    group.bench_function("per_call", |b| {
        b.iter(|| {
            for item in &items {
                filter.add(black_box(item.as_bytes()));
            }
        });
    });

    group.bench_function("add_batch", |b| {
        b.iter(|| filter.add_batch(black_box(&items)));
    });

    group.bench_function("write_guard", |b| {
        b.iter(|| {
            let mut guard = filter.write();
            for item in &items {
                guard.add(black_box(item.as_bytes()));
            }
        });
    });

    let mut exclusive = BloomFilter::with_estimate(100_000, 0.01).unwrap();
    group.bench_function("add_mut", |b| {
        b.iter(|| {
            for item in &items {
                exclusive.add_mut(black_box(item.as_bytes()));
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_insert_by_size,
    bench_insert_by_fp_rate,
    bench_insert_by_key_length,
    bench_insert_locking
);
criterion_main!(benches);
