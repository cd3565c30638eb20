//! Hashing for Bloom filters: digests and probe positions.
//!
//! # Module Structure
//!
//! ```text
//! hash/
//! ├── hasher.rs  - DigestHasher trait and Murmur3Hasher (default)
//! ├── probe.rs   - ProbeGenerator: k positions from one digest
//! ├── xxhash.rs  - Xxh3Hasher (optional, feature = "xxhash")
//! └── mod.rs     - Digest type and re-exports
//! ```
//!
//! Each `add` or `contains` computes exactly one 128-bit [`Digest`] for the
//! item. The [`ProbeGenerator`] then turns its two halves into `k` bit
//! positions by double hashing, so `k` never costs more than one hash.
//!
//! # Choosing a Hasher
//!
//! | Hasher | Feature | Notes |
//! |--------|---------|-------|
//! | [`Murmur3Hasher`] | (default) | MurmurHash3 x64/128 |
//! | `Xxh3Hasher` | `xxhash` | XXH3-128, faster on long keys |
//! | closure | (default) | any `Fn(&[u8]) -> (u64, u64) + Send + Sync` |
//!
//! # Examples
//!
//! ```
//! use bloomguard::core::params::FilterParameters;
//! use bloomguard::hash::{DigestHasher, Murmur3Hasher, ProbeGenerator};
//!
//! let params = FilterParameters::new(1000, 7).unwrap();
//! let digest = Murmur3Hasher::new().digest(b"test");
//!
//! let positions: Vec<u64> = ProbeGenerator::new(params).probes(digest).collect();
//! assert_eq!(positions.len(), 7);
//! assert!(positions.iter().all(|&p| p < 1000));
//! ```

pub mod hasher;
pub mod probe;

#[cfg(feature = "xxhash")]
pub mod xxhash;

pub use hasher::{DigestHasher, Murmur3Hasher};
pub use probe::{ProbeGenerator, Probes};

#[cfg(feature = "xxhash")]
pub use xxhash::Xxh3Hasher;

/// The hasher used when no override is configured.
pub type DefaultHasher = Murmur3Hasher;

/// 128-bit item digest split into two 64-bit halves.
///
/// Computed once per `add`/`contains` call and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest {
    /// First half: the probe start.
    pub a: u64,
    /// Second half: the probe stride.
    pub b: u64,
}

impl Digest {
    /// Create a digest from its halves.
    #[must_use]
    #[inline]
    pub const fn new(a: u64, b: u64) -> Self {
        Self { a, b }
    }

    /// Both halves as a tuple.
    #[must_use]
    #[inline]
    pub const fn halves(&self) -> (u64, u64) {
        (self.a, self.b)
    }
}

impl From<(u64, u64)> for Digest {
    #[inline]
    fn from((a, b): (u64, u64)) -> Self {
        Self { a, b }
    }
}

/// Low 64 bits become `a`, high 64 bits become `b`.
impl From<u128> for Digest {
    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    fn from(value: u128) -> Self {
        Self {
            a: value as u64,
            b: (value >> 64) as u64,
        }
    }
}
