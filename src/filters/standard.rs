//! Read/write-locked Bloom filter.
//!
//! # Algorithm
//!
//! A Bloom filter supports two operations:
//!
//! - **add**: mark `k` bit positions derived from the item's digest
//! - **contains**: test the same `k` positions; any unset bit proves absence
//!
//! # Properties
//!
//! - **False positives**: possible, bounded by `(m, k)` and the load
//! - **False negatives**: never
//! - **Time complexity**: one 128-bit digest plus O(k) bit operations
//! - **Monotonic**: bits are never cleared, so a positive answer stays positive
//!
//! # Concurrency Model
//!
//! The bit array is the only shared mutable state. It sits behind a single
//! `parking_lot::RwLock`:
//!
//! | Operation | Lock |
//! |-----------|------|
//! | `add`, `add_batch` | exclusive (one writer, no readers) |
//! | `contains`, `contains_batch` | shared (any number of readers) |
//! | `write()` guard | exclusive, held by the caller |
//! | `read()` guard | shared, held by the caller |
//! | `add_mut`, `contains_mut` | none, `&mut self` proves exclusivity |
//!
//! Digests are computed before the lock is taken, so lock hold times cover
//! only the `k` bit operations. Nothing here performs I/O or yields; lock
//! acquisition can block briefly under contention and never indefinitely.
//!
//! ## Usage Patterns
//!
//! ### Shared across threads
//!
//! ```
//! use bloomguard::BloomFilter;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let filter = Arc::new(BloomFilter::with_estimate(10_000, 0.01).unwrap());
//!
//! let handles: Vec<_> = (0..4u32)
//!     .map(|t| {
//!         let filter = Arc::clone(&filter);
//!         thread::spawn(move || {
//!             for i in 0..100u32 {
//!                 filter.add(format!("{}-{}", t, i).as_bytes());
//!             }
//!         })
//!     })
//!     .collect();
//!
//! for h in handles {
//!     h.join().unwrap();
//! }
//!
//! assert!(filter.contains(b"3-99"));
//! ```
//!
//! ### Bulk loading under one lock
//!
//! ```
//! use bloomguard::BloomFilter;
//!
//! let filter = BloomFilter::with_estimate(10_000, 0.01).unwrap();
//! filter.add_batch((0..1000u32).map(|i| i.to_le_bytes()));
//! assert!(filter.contains(&7u32.to_le_bytes()));
//! ```

#![allow(clippy::cast_precision_loss)]

use crate::builder::FilterOptions;
use crate::core::bitset::BitArray;
use crate::core::filter::BloomMembership;
use crate::core::params::FilterParameters;
use crate::error::Result;
use crate::hash::{Digest, DigestHasher, ProbeGenerator};
use crate::sync::{FilterReadGuard, FilterWriteGuard};
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

/// Bloom filter over byte strings with internal reader/writer locking.
///
/// Owns exactly one [`BitArray`] and one [`FilterParameters`], plus the
/// digest hasher chosen at construction. `Send + Sync`; share it with `Arc`.
///
/// # Examples
///
/// ```
/// use bloomguard::BloomFilter;
///
/// let filter = BloomFilter::with_estimate(1000, 0.03).unwrap();
/// assert!(!filter.contains(b"foo"));
///
/// filter.add(b"foo");
/// assert!(filter.contains(b"foo"));
/// ```
pub struct BloomFilter {
    params: FilterParameters,
    probes: ProbeGenerator,
    hasher: Arc<dyn DigestHasher>,
    bits: RwLock<BitArray>,
}

impl BloomFilter {
    /// Create a filter with `m` bits and `k` probes per item, using the
    /// default hasher.
    ///
    /// # Errors
    ///
    /// [`BloomError::InvalidArgument`](crate::BloomError::InvalidArgument)
    /// if `m == 0` or `k == 0`. Nothing is allocated on failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomguard::BloomFilter;
    ///
    /// assert!(BloomFilter::new(1024, 5).is_ok());
    /// assert!(BloomFilter::new(0, 5).is_err());
    /// assert!(BloomFilter::new(1024, 0).is_err());
    /// ```
    pub fn new(m: u64, k: u64) -> Result<Self> {
        Self::with_options(m, k, FilterOptions::default())
    }

    /// Create a filter sized for about `n` items at false positive rate `p`.
    ///
    /// # Errors
    ///
    /// [`BloomError::InvalidArgument`](crate::BloomError::InvalidArgument)
    /// if `n == 0` or `p` is not in `(0, 1)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomguard::BloomFilter;
    ///
    /// let filter = BloomFilter::with_estimate(1000, 0.03).unwrap();
    /// assert_eq!(filter.bit_count(), 7299);
    /// assert_eq!(filter.hash_count(), 6);
    ///
    /// for p in [-1.0, 0.0, 1.0, 2.0] {
    ///     assert!(BloomFilter::with_estimate(1_000_000, p).is_err());
    /// }
    /// ```
    pub fn with_estimate(n: u64, p: f64) -> Result<Self> {
        Self::with_estimate_and_options(n, p, FilterOptions::default())
    }

    /// Like [`new`](Self::new), with explicit [`FilterOptions`].
    ///
    /// # Errors
    ///
    /// Same as [`new`](Self::new).
    pub fn with_options(m: u64, k: u64, options: FilterOptions) -> Result<Self> {
        let params = FilterParameters::new(m, k)?;
        Ok(Self::from_parameters(params, options))
    }

    /// Like [`with_estimate`](Self::with_estimate), with explicit [`FilterOptions`].
    ///
    /// # Errors
    ///
    /// Same as [`with_estimate`](Self::with_estimate).
    pub fn with_estimate_and_options(n: u64, p: f64, options: FilterOptions) -> Result<Self> {
        let params = FilterParameters::estimate(n, p)?;
        Ok(Self::from_parameters(params, options))
    }

    /// Build a filter from already validated parameters.
    #[must_use]
    pub fn from_parameters(params: FilterParameters, options: FilterOptions) -> Self {
        let hasher = options.into_hasher();
        let bits = BitArray::new(params.bits());

        tracing::debug!(
            m = params.bits(),
            k = params.hashes(),
            words = bits.word_count(),
            hasher = hasher.name(),
            "constructed bloom filter"
        );

        Self {
            params,
            probes: ProbeGenerator::new(params),
            hasher,
            bits: RwLock::new(bits),
        }
    }

    /// Add `item`, taking the exclusive lock for the duration of the marks.
    ///
    /// Idempotent: adding the same item twice leaves the same bits set as
    /// adding it once.
    pub fn add(&self, item: &[u8]) {
        #[cfg(feature = "trace")]
        tracing::trace!(len = item.len(), "BloomFilter::add");

        let digest = self.digest(item);
        let mut bits = self.bits.write();
        self.mark_digest(&mut bits, digest);
    }

    /// Check `item`, taking the shared lock.
    ///
    /// `false` means the item was definitely never added. `true` means it
    /// probably was; the answer may be a false positive.
    #[must_use]
    pub fn contains(&self, item: &[u8]) -> bool {
        #[cfg(feature = "trace")]
        tracing::trace!(len = item.len(), "BloomFilter::contains");

        let digest = self.digest(item);
        let bits = self.bits.read();
        self.test_digest(&bits, digest)
    }

    /// Add every item under a single exclusive acquisition.
    ///
    /// Digests are computed up front, outside the lock.
    pub fn add_batch<I, T>(&self, items: I)
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        let digests: Vec<Digest> = items
            .into_iter()
            .map(|item| self.digest(item.as_ref()))
            .collect();

        #[cfg(feature = "trace")]
        tracing::trace!(count = digests.len(), "BloomFilter::add_batch");

        let mut bits = self.bits.write();
        for digest in digests {
            self.mark_digest(&mut bits, digest);
        }
    }

    /// Check every item under a single shared acquisition.
    #[must_use]
    pub fn contains_batch<I, T>(&self, items: I) -> Vec<bool>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        let digests: Vec<Digest> = items
            .into_iter()
            .map(|item| self.digest(item.as_ref()))
            .collect();

        #[cfg(feature = "trace")]
        tracing::trace!(count = digests.len(), "BloomFilter::contains_batch");

        let bits = self.bits.read();
        digests
            .into_iter()
            .map(|digest| self.test_digest(&bits, digest))
            .collect()
    }

    /// Take the exclusive lock and hand it to the caller.
    ///
    /// See [`FilterWriteGuard`] for batched adds without per-call locking.
    pub fn write(&self) -> FilterWriteGuard<'_> {
        FilterWriteGuard::new(self, self.bits.write())
    }

    /// Take the shared lock and hand it to the caller.
    pub fn read(&self) -> FilterReadGuard<'_> {
        FilterReadGuard::new(self, self.bits.read())
    }

    /// Add `item` without any locking; `&mut self` already guarantees
    /// exclusive access.
    pub fn add_mut(&mut self, item: &[u8]) {
        let digest = self.digest(item);
        let probes = self.probes;
        let bits = self.bits.get_mut();
        for position in probes.probes(digest) {
            bits.mark(position);
        }
    }

    /// Check `item` without any locking; `&mut self` already guarantees
    /// exclusive access.
    #[must_use]
    pub fn contains_mut(&mut self, item: &[u8]) -> bool {
        let digest = self.digest(item);
        let probes = self.probes;
        let bits = self.bits.get_mut();
        for position in probes.probes(digest) {
            if !bits.test(position) {
                return false;
            }
        }
        true
    }

    /// The `(m, k)` this filter was built with.
    #[must_use]
    #[inline]
    pub fn parameters(&self) -> FilterParameters {
        self.params
    }

    /// Number of bits `m`.
    #[must_use]
    #[inline]
    pub fn bit_count(&self) -> u64 {
        self.params.bits()
    }

    /// Number of probes per item `k`.
    #[must_use]
    #[inline]
    pub fn hash_count(&self) -> u64 {
        self.params.hashes()
    }

    /// Name of the configured digest hasher.
    #[must_use]
    pub fn hasher_name(&self) -> &'static str {
        self.hasher.name()
    }

    /// Number of set bits.
    #[must_use]
    pub fn count_ones(&self) -> u64 {
        self.bits.read().count_ones()
    }

    /// Fraction of bits set, in `[0, 1]`.
    #[must_use]
    pub fn fill_ratio(&self) -> f64 {
        self.count_ones() as f64 / self.bit_count() as f64
    }

    /// `true` if no bit is set, i.e. nothing was ever added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count_ones() == 0
    }

    /// Estimate how many distinct items were added.
    ///
    /// Uses `n ≈ -(m/k) × ln(1 - X/m)` where `X` is the number of set bits.
    /// Returns `f64::INFINITY` once every bit is set.
    #[must_use]
    pub fn estimated_item_count(&self) -> f64 {
        let ones = self.count_ones();
        if ones == 0 {
            return 0.0;
        }

        let m = self.bit_count() as f64;
        let k = self.hash_count() as f64;
        -(m / k) * (1.0 - ones as f64 / m).ln()
    }

    /// Current false positive probability, `fill_ratio^k`.
    #[must_use]
    pub fn estimated_fp_rate(&self) -> f64 {
        self.fill_ratio().powf(self.hash_count() as f64)
    }

    /// Approximate heap plus inline size in bytes.
    #[must_use]
    pub fn memory_usage(&self) -> usize {
        self.bits.read().memory_bytes() + std::mem::size_of::<Self>()
    }

    /// Copy of the current bit array.
    #[must_use]
    pub fn snapshot(&self) -> BitArray {
        self.bits.read().clone()
    }

    #[inline]
    pub(crate) fn digest(&self, item: &[u8]) -> Digest {
        self.hasher.digest(item)
    }

    #[inline]
    pub(crate) fn mark_digest(&self, bits: &mut BitArray, digest: Digest) {
        for position in self.probes.probes(digest) {
            bits.mark(position);
        }
    }

    /// Absent as soon as any probed bit is unset.
    #[inline]
    pub(crate) fn test_digest(&self, bits: &BitArray, digest: Digest) -> bool {
        for position in self.probes.probes(digest) {
            if !bits.test(position) {
                return false;
            }
        }
        true
    }
}

impl Clone for BloomFilter {
    /// Independent copy sharing the same hasher instance.
    fn clone(&self) -> Self {
        Self {
            params: self.params,
            probes: self.probes,
            hasher: Arc::clone(&self.hasher),
            bits: RwLock::new(self.snapshot()),
        }
    }
}

impl fmt::Debug for BloomFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BloomFilter")
            .field("m", &self.bit_count())
            .field("k", &self.hash_count())
            .field("hasher", &self.hasher_name())
            .field("ones", &self.count_ones())
            .finish()
    }
}

impl BloomMembership for BloomFilter {
    #[inline]
    fn add(&self, item: &[u8]) {
        BloomFilter::add(self, item);
    }

    #[inline]
    fn contains(&self, item: &[u8]) -> bool {
        BloomFilter::contains(self, item)
    }

    fn add_all(&self, items: &[&[u8]]) {
        self.add_batch(items.iter().copied());
    }
}
