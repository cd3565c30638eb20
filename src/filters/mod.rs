//! Bloom filter implementations.
//!
//! - [`BloomFilter`] - fixed-size filter with internal reader/writer locking

pub mod standard;

pub use standard::BloomFilter;
