//! BloomGuard: a thread-safe Bloom filter over byte strings.
//!
//! A Bloom filter answers "have I seen this item?" with one-sided error:
//! - **False positives**: may report an item that was never added
//! - **Zero false negatives**: an added item is always reported
//!
//! Items are opaque byte slices. Each item is digested once into a 128-bit
//! value, split into two 64-bit halves `a` and `b`, and the `k` bit positions
//! are `(a + i·b) mod m` for `i` in `0..k`.
//!
//! # Quick Start
//!
//! ```
//! use bloomguard::BloomFilter;
//!
//! // Size for 1000 items at a 3% false positive rate
//! let filter = BloomFilter::with_estimate(1000, 0.03).unwrap();
//! assert_eq!((filter.bit_count(), filter.hash_count()), (7299, 6));
//!
//! filter.add(b"foo");
//! assert!(filter.contains(b"foo"));
//! assert!(!filter.contains(b"bar"));
//! ```
//!
//! # Concurrency
//!
//! [`BloomFilter`] guards its bit array with a `parking_lot::RwLock`. `add`
//! takes the exclusive lock, `contains` the shared one, so any number of
//! readers proceed in parallel between writes. Callers running many
//! operations in a row can hold the lock themselves through
//! [`BloomFilter::write`] and [`BloomFilter::read`]:
//!
//! ```
//! use bloomguard::BloomFilter;
//!
//! let filter = BloomFilter::new(1 << 16, 7).unwrap();
//!
//! let mut guard = filter.write();
//! for i in 0..500u32 {
//!     guard.add(&i.to_le_bytes());
//! }
//! drop(guard);
//!
//! assert!(filter.read().contains(&499u32.to_le_bytes()));
//! ```
//!
//! # Hashing
//!
//! The default digest is MurmurHash3 x64_128 with seed 0, via the `murmur3`
//! crate. Any [`DigestHasher`](hash::DigestHasher), including a plain
//! closure returning `(u64, u64)`, can replace it per filter:
//!
//! ```
//! use bloomguard::{BloomFilter, FilterOptions};
//! use bloomguard::hash::Murmur3Hasher;
//!
//! let options = FilterOptions::new().with_hasher(Murmur3Hasher::with_seed(0x5eed));
//! let filter = BloomFilter::with_estimate_and_options(1000, 0.01, options).unwrap();
//! assert_eq!(filter.hasher_name(), "Murmur3_x64_128");
//! ```
//!
//! # Features
//!
//! - `xxhash` - XXH3-128 digest hasher (`hash::Xxh3Hasher`)
//! - `trace` - per-operation `tracing::trace!` events
//!
//! Construction always emits one `tracing::debug!` event with the chosen
//! `(m, k)` and hasher.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::bool_assert_comparison)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

/// Core data structures, traits and parameter math
pub mod core;

/// Error types and result aliases
pub mod error;

/// Filter implementations
pub mod filters;

/// Digest hashers and probe generation
pub mod hash;

/// Caller-held lock guards
pub mod sync;

/// Construction options and the type-state builder
pub mod builder;

pub use error::{BloomError, Result};

pub use core::filter::BloomMembership;
pub use core::params::FilterParameters;

pub use filters::BloomFilter;

pub use builder::{BloomFilterBuilder, FilterOptions};

pub use sync::{FilterReadGuard, FilterWriteGuard};

pub use hash::{DigestHasher, Murmur3Hasher};

/// Prelude module for convenient imports.
///
/// # Examples
///
/// ```
/// use bloomguard::prelude::*;
///
/// let filter = BloomFilter::with_estimate(1000, 0.01).unwrap();
/// filter.add(b"hello");
/// assert!(filter.contains(b"hello"));
/// ```
pub mod prelude {
    pub use crate::builder::{BloomFilterBuilder, FilterOptions};
    pub use crate::core::filter::BloomMembership;
    pub use crate::core::params::FilterParameters;
    pub use crate::error::{BloomError, Result};
    pub use crate::filters::BloomFilter;
    pub use crate::hash::{Digest, DigestHasher, Murmur3Hasher};
    pub use crate::sync::{FilterReadGuard, FilterWriteGuard};

    #[cfg(feature = "xxhash")]
    pub use crate::hash::Xxh3Hasher;
}
