//! Digest capability used by Bloom filters.
//!
//! A filter needs exactly one thing from its hash function: map an arbitrary
//! byte sequence to two independent 64-bit values. [`DigestHasher`] is that
//! capability. Everything downstream of the digest (probe positions, bit
//! marking) lives in the filter itself.
//!
//! # Separation of Concerns
//!
//! - **`DigestHasher`**: produces a 128-bit [`Digest`] from bytes
//! - **`ProbeGenerator`**: derives `k` positions from the digest (see `probe` module)
//! - **`BloomFilter`**: composes hasher + probe generator + bit storage
//!
//! # Implementations
//!
//! - [`Murmur3Hasher`]: MurmurHash3 x64/128, the default
//! - `Xxh3Hasher`: XXH3-128 (feature `xxhash`)
//! - any `Fn(&[u8]) -> (u64, u64) + Send + Sync` closure
//!
//! # Examples
//!
//! ```
//! use bloomguard::hash::{DigestHasher, Murmur3Hasher};
//!
//! let hasher = Murmur3Hasher::new();
//! let d1 = hasher.digest(b"hello");
//! let d2 = hasher.digest(b"hello");
//! assert_eq!(d1, d2);
//!
//! // Closures are hashers too
//! let fixed = |_: &[u8]| (7u64, 11u64);
//! assert_eq!(fixed.digest(b"anything").halves(), (7, 11));
//! ```

use super::Digest;

/// Capability mapping a byte sequence to a 128-bit [`Digest`].
///
/// # Requirements
///
/// - **Determinism**: the same input always yields the same digest. A
///   non-deterministic hasher causes false negatives.
/// - **Independence**: the two halves should be independent and uniformly
///   distributed. This is not validated. A weak hasher silently raises the
///   false positive rate; it never causes an error.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; one hasher instance is shared by all
/// threads using a filter, and digests are computed outside the filter lock.
pub trait DigestHasher: Send + Sync {
    /// Hash `item` into two 64-bit halves.
    fn digest(&self, item: &[u8]) -> Digest;

    /// Human-readable name for logging and debugging.
    fn name(&self) -> &'static str {
        "custom"
    }
}

impl<F> DigestHasher for F
where
    F: Fn(&[u8]) -> (u64, u64) + Send + Sync,
{
    #[inline]
    fn digest(&self, item: &[u8]) -> Digest {
        Digest::from(self(item))
    }
}

/// MurmurHash3 x64/128 digest hasher.
///
/// The default hasher for every filter. With seed 0 the output matches the
/// reference `MurmurHash3_x64_128`: the first 64-bit output word becomes
/// [`Digest::a`] and the second becomes [`Digest::b`].
///
/// # Examples
///
/// ```
/// use bloomguard::hash::{DigestHasher, Murmur3Hasher};
///
/// let hasher = Murmur3Hasher::new();
/// assert_eq!(hasher.digest(b"").halves(), (0, 0));
/// assert_ne!(hasher.digest(b"foo"), hasher.digest(b"bar"));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Murmur3Hasher {
    seed: u32,
}

impl Murmur3Hasher {
    /// Create a hasher with seed 0.
    #[must_use]
    pub const fn new() -> Self {
        Self { seed: 0 }
    }

    /// Create a hasher with an explicit seed.
    ///
    /// Filters that must agree on bit positions need the same seed.
    #[must_use]
    pub const fn with_seed(seed: u32) -> Self {
        Self { seed }
    }

    /// Seed in use.
    #[must_use]
    pub const fn seed(&self) -> u32 {
        self.seed
    }
}

impl DigestHasher for Murmur3Hasher {
    #[inline]
    fn digest(&self, item: &[u8]) -> Digest {
        let mut reader = item;
        // Reading from a byte slice never returns an I/O error
        let hash = murmur3::murmur3_x64_128(&mut reader, self.seed)
            .expect("reading from an in-memory slice cannot fail");
        Digest::from(hash)
    }

    fn name(&self) -> &'static str {
        "Murmur3_x64_128"
    }
}
