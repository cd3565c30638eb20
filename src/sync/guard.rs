//! Caller-held lock guards for batched filter access.
//!
//! [`BloomFilter::add`] and [`BloomFilter::contains`] acquire and release the
//! filter's `RwLock` on every call. When a caller runs many operations in a
//! row, it can take the lock once and work through a guard instead:
//!
//! - [`FilterWriteGuard`] holds the exclusive lock: `add` and `contains`
//! - [`FilterReadGuard`] holds the shared lock: `contains` only
//!
//! Guard operations have exactly the same semantics as the filter's own
//! methods, minus the per-call locking. The lock is released when the guard
//! is dropped, on every exit path. While a write guard is alive, every other
//! thread calling into the filter blocks, so keep the scope short.
//!
//! # Examples
//!
//! ```
//! use bloomguard::BloomFilter;
//!
//! let filter = BloomFilter::with_estimate(10_000, 0.01).unwrap();
//!
//! {
//!     let mut batch = filter.write();
//!     for i in 0..1000u32 {
//!         batch.add(&i.to_be_bytes());
//!     }
//! } // exclusive lock released here
//!
//! let reader = filter.read();
//! assert!(reader.contains(&42u32.to_be_bytes()));
//! ```
//!
//! [`BloomFilter::add`]: crate::BloomFilter::add
//! [`BloomFilter::contains`]: crate::BloomFilter::contains

use crate::core::bitset::BitArray;
use crate::filters::BloomFilter;
use parking_lot::{RwLockReadGuard, RwLockWriteGuard};

/// Exclusive access to a filter's bit array for a batch of operations.
///
/// Created by [`BloomFilter::write`](crate::BloomFilter::write).
#[must_use = "the exclusive lock is released as soon as the guard is dropped"]
pub struct FilterWriteGuard<'a> {
    filter: &'a BloomFilter,
    bits: RwLockWriteGuard<'a, BitArray>,
}

impl<'a> FilterWriteGuard<'a> {
    pub(crate) fn new(filter: &'a BloomFilter, bits: RwLockWriteGuard<'a, BitArray>) -> Self {
        Self { filter, bits }
    }

    /// Add `item` under the already-held exclusive lock.
    #[inline]
    pub fn add(&mut self, item: &[u8]) {
        let digest = self.filter.digest(item);
        self.filter.mark_digest(&mut self.bits, digest);
    }

    /// Add every item under the already-held exclusive lock.
    pub fn add_batch<I, T>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        for item in items {
            self.add(item.as_ref());
        }
    }

    /// Membership check under the already-held exclusive lock.
    #[must_use]
    #[inline]
    pub fn contains(&self, item: &[u8]) -> bool {
        let digest = self.filter.digest(item);
        self.filter.test_digest(&self.bits, digest)
    }

    /// Downgrade to a shared guard without letting another writer in between.
    pub fn downgrade(self) -> FilterReadGuard<'a> {
        FilterReadGuard::new(self.filter, RwLockWriteGuard::downgrade(self.bits))
    }
}

/// Shared access to a filter's bit array for a batch of queries.
///
/// Created by [`BloomFilter::read`](crate::BloomFilter::read). Any number of
/// read guards may coexist; writers wait until all are dropped.
#[must_use = "the shared lock is released as soon as the guard is dropped"]
pub struct FilterReadGuard<'a> {
    filter: &'a BloomFilter,
    bits: RwLockReadGuard<'a, BitArray>,
}

impl<'a> FilterReadGuard<'a> {
    pub(crate) fn new(filter: &'a BloomFilter, bits: RwLockReadGuard<'a, BitArray>) -> Self {
        Self { filter, bits }
    }

    /// Membership check under the already-held shared lock.
    #[must_use]
    #[inline]
    pub fn contains(&self, item: &[u8]) -> bool {
        let digest = self.filter.digest(item);
        self.filter.test_digest(&self.bits, digest)
    }

    /// Check every item under the already-held shared lock.
    pub fn contains_batch<I, T>(&self, items: I) -> Vec<bool>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        items
            .into_iter()
            .map(|item| self.contains(item.as_ref()))
            .collect()
    }

    /// Number of set bits, read under the held lock.
    #[must_use]
    pub fn count_ones(&self) -> u64 {
        self.bits.count_ones()
    }
}
