//! Shared data generators and constants for all benchmarks.
#![allow(dead_code)]

use rand::distributions::Alphanumeric;
use rand::{thread_rng, Rng};

/// Filter capacities exercised by size-scaling benchmarks.
pub const SIZES: &[u64] = &[1_000, 10_000, 100_000, 1_000_000];

/// False positive rates exercised by rate-scaling benchmarks.
pub const FP_RATES: &[f64] = &[0.1, 0.01, 0.001, 0.0001];

/// Thread counts for contention benchmarks.
pub const THREAD_COUNTS: &[usize] = &[1, 2, 4, 8];

/// Random alphanumeric string of `len` bytes.
#[inline]
pub fn random_string(len: usize) -> String {
    thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// `count` independent random strings of `len` bytes each.
pub fn generate_strings(count: usize, len: usize) -> Vec<String> {
    (0..count).map(|_| random_string(len)).collect()
}

/// Predictable keys: "item_00000000", "item_00000001", ...
pub fn generate_sequential_strings(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("item_{:08}", i)).collect()
}

/// URL-like keys, the typical crawler dedup workload.
pub fn generate_urls(count: usize) -> Vec<String> {
    (0..count)
        .map(|_| format!("https://example.com/path/{}", random_string(16)))
        .collect()
}

/// Random 8-byte keys.
pub fn generate_u64_keys(count: usize) -> Vec<[u8; 8]> {
    let mut rng = thread_rng();
    (0..count).map(|_| rng.gen::<u64>().to_le_bytes()).collect()
}

/// Keys disjoint from [`generate_sequential_strings`], for negative lookups.
pub fn generate_absent_strings(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("absent_{:08}", i)).collect()
}
