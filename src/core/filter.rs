//! Membership trait for Bloom filters.
//!
//! [`BloomMembership`] is the capability every caller needs from a Bloom
//! filter: record an item, and ask whether an item may have been recorded.
//! Both methods take `&self`; implementations handle their own exclusion.
//!
//! # Guarantees
//!
//! 1. **No false negatives**: after `add(x)`, `contains(x)` is `true`
//! 2. **Monotonic positives**: once `contains(x)` is `true` it stays `true`
//! 3. **Bounded false positives**: governed by the filter's `(m, k)` and load
//!
//! The trait is object safe, so heterogeneous filters can sit behind
//! `Arc<dyn BloomMembership>`.
//!
//! # Examples
//!
//! ```
//! use bloomguard::{BloomFilter, BloomMembership};
//! use std::sync::Arc;
//!
//! fn seen_before(filter: &dyn BloomMembership, key: &[u8]) -> bool {
//!     let seen = filter.contains(key);
//!     filter.add(key);
//!     seen
//! }
//!
//! let filter: Arc<dyn BloomMembership> = Arc::new(BloomFilter::with_estimate(1000, 0.01).unwrap());
//! assert!(!seen_before(filter.as_ref(), b"packet-1"));
//! assert!(seen_before(filter.as_ref(), b"packet-1"));
//! ```

/// Probabilistic set membership over byte strings.
pub trait BloomMembership: Send + Sync {
    /// Record `item` in the filter.
    fn add(&self, item: &[u8]);

    /// Return `false` if `item` was definitely never added, `true` if it may
    /// have been.
    #[must_use]
    fn contains(&self, item: &[u8]) -> bool;

    /// Record every item, in order.
    fn add_all(&self, items: &[&[u8]]) {
        for item in items {
            self.add(item);
        }
    }

    /// `true` only if every item may be present.
    #[must_use]
    fn contains_all(&self, items: &[&[u8]]) -> bool {
        items.iter().all(|item| self.contains(item))
    }
}
