//! Construction-time configuration for Bloom filters.
//!
//! Two ways to configure a filter:
//!
//! - [`FilterOptions`]: the option set accepted by the `with_options`
//!   constructors. Today it carries the digest hasher override.
//! - [`BloomFilterBuilder`]: a type-state builder that collects sizing and
//!   options, refusing at compile time to build without sizing.
//!
//! Options are fixed once the filter exists. There is no global or runtime
//! replaceable hasher.
//!
//! # Examples
//!
//! ```
//! use bloomguard::builder::{BloomFilterBuilder, FilterOptions};
//! use bloomguard::BloomFilter;
//!
//! // Options value passed to a constructor
//! let options = FilterOptions::new().with_hasher(|item: &[u8]| (item.len() as u64, 31u64));
//! let filter = BloomFilter::with_options(1024, 3, options).unwrap();
//! assert_eq!(filter.hasher_name(), "custom");
//!
//! // Builder
//! let filter = BloomFilterBuilder::new()
//!     .expected_items(10_000)
//!     .false_positive_rate(0.01)
//!     .build()
//!     .unwrap();
//! assert_eq!(filter.hash_count(), 7);
//! ```

pub mod standard;

pub use standard::{BloomFilterBuilder, Complete, Initial, WithItems};

use crate::hash::{DefaultHasher, DigestHasher};
use std::fmt;
use std::sync::Arc;

/// Options recognised when constructing a [`BloomFilter`](crate::BloomFilter).
///
/// | Option | Default | Effect |
/// |--------|---------|--------|
/// | `hasher` | [`Murmur3Hasher`](crate::hash::Murmur3Hasher) | digest function for items |
#[derive(Clone)]
pub struct FilterOptions {
    hasher: Arc<dyn DigestHasher>,
}

impl FilterOptions {
    /// Options with every value at its default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the digest hasher.
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomguard::builder::FilterOptions;
    /// use bloomguard::hash::Murmur3Hasher;
    ///
    /// let options = FilterOptions::new().with_hasher(Murmur3Hasher::with_seed(42));
    /// assert_eq!(options.hasher().name(), "Murmur3_x64_128");
    /// ```
    #[must_use]
    pub fn with_hasher<H>(mut self, hasher: H) -> Self
    where
        H: DigestHasher + 'static,
    {
        self.hasher = Arc::new(hasher);
        self
    }

    /// Override the digest hasher with one that is already shared.
    ///
    /// Lets several filters use one hasher instance.
    #[must_use]
    pub fn with_shared_hasher(mut self, hasher: Arc<dyn DigestHasher>) -> Self {
        self.hasher = hasher;
        self
    }

    /// The configured hasher.
    #[must_use]
    pub fn hasher(&self) -> &Arc<dyn DigestHasher> {
        &self.hasher
    }

    pub(crate) fn into_hasher(self) -> Arc<dyn DigestHasher> {
        self.hasher
    }
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            hasher: Arc::new(DefaultHasher::new()),
        }
    }
}

impl fmt::Debug for FilterOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterOptions")
            .field("hasher", &self.hasher.name())
            .finish()
    }
}
