//! Type-state builder for [`BloomFilter`].
//!
//! The builder progresses through states, so sizing cannot be forgotten:
//!
//! ```text
//! Initial ──.dimensions(m, k)──────────────────────────────▶ Complete ──.build()──▶ BloomFilter
//!    │                                                         ▲
//!    └──.expected_items(n)──▶ WithItems ──.false_positive_rate(p)┘
//! ```
//!
//! `.hasher(..)` is available in every state.
//!
//! # Examples
//!
//! ## Estimated sizing
//!
//! ```
//! use bloomguard::builder::BloomFilterBuilder;
//!
//! let filter = BloomFilterBuilder::new()
//!     .expected_items(1000)
//!     .false_positive_rate(0.03)
//!     .build()
//!     .unwrap();
//! assert_eq!(filter.bit_count(), 7299);
//! ```
//!
//! ## Explicit sizing with a custom hasher
//!
//! ```
//! use bloomguard::builder::BloomFilterBuilder;
//! use bloomguard::hash::Murmur3Hasher;
//!
//! let filter = BloomFilterBuilder::new()
//!     .dimensions(4096, 5)
//!     .hasher(Murmur3Hasher::with_seed(7))
//!     .build()
//!     .unwrap();
//! assert_eq!(filter.hash_count(), 5);
//! ```
//!
//! ## Error Handling
//!
//! ```
//! use bloomguard::builder::BloomFilterBuilder;
//!
//! let result = BloomFilterBuilder::new()
//!     .expected_items(0)
//!     .false_positive_rate(0.01)
//!     .build();
//! assert!(result.is_err());
//! ```

use super::FilterOptions;
use crate::core::params::FilterParameters;
use crate::error::Result;
use crate::filters::BloomFilter;
use crate::hash::DigestHasher;
use std::marker::PhantomData;

/// Type-state marker: no sizing provided yet.
#[derive(Debug)]
pub struct Initial;

/// Type-state marker: expected item count set, false positive rate pending.
#[derive(Debug)]
pub struct WithItems;

/// Type-state marker: sizing complete, ready to build.
#[derive(Debug)]
pub struct Complete;

#[derive(Debug, Clone, Copy)]
enum Sizing {
    Unset,
    Items(u64),
    Estimate { n: u64, p: f64 },
    Explicit { m: u64, k: u64 },
}

/// Builder for [`BloomFilter`] with type-state guarantees.
#[derive(Debug)]
pub struct BloomFilterBuilder<State = Initial> {
    sizing: Sizing,
    options: FilterOptions,
    _state: PhantomData<State>,
}

impl BloomFilterBuilder<Initial> {
    /// Create a builder with default options.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sizing: Sizing::Unset,
            options: FilterOptions::default(),
            _state: PhantomData,
        }
    }

    /// Size the filter explicitly: `m` bits, `k` probes per item.
    ///
    /// Validation happens in [`build`](BloomFilterBuilder::build).
    #[must_use]
    pub fn dimensions(self, m: u64, k: u64) -> BloomFilterBuilder<Complete> {
        self.transition(Sizing::Explicit { m, k })
    }

    /// Set the expected number of items. Must be followed by
    /// [`false_positive_rate`](BloomFilterBuilder::false_positive_rate).
    #[must_use]
    pub fn expected_items(self, n: u64) -> BloomFilterBuilder<WithItems> {
        self.transition(Sizing::Items(n))
    }
}

impl Default for BloomFilterBuilder<Initial> {
    fn default() -> Self {
        Self::new()
    }
}

impl BloomFilterBuilder<WithItems> {
    /// Set the target false positive rate, in `(0, 1)`.
    #[must_use]
    pub fn false_positive_rate(self, p: f64) -> BloomFilterBuilder<Complete> {
        let n = match self.sizing {
            Sizing::Items(n) => n,
            // The WithItems state is only reachable through expected_items
            _ => unreachable!("WithItems builder without an item count"),
        };
        self.transition(Sizing::Estimate { n, p })
    }
}

impl BloomFilterBuilder<Complete> {
    /// Validate the sizing and construct the filter.
    ///
    /// # Errors
    ///
    /// [`BloomError::InvalidArgument`](crate::BloomError::InvalidArgument)
    /// for `n == 0`, `p ∉ (0, 1)`, `m == 0` or `k == 0`.
    pub fn build(self) -> Result<BloomFilter> {
        let params = match self.sizing {
            Sizing::Explicit { m, k } => FilterParameters::new(m, k)?,
            Sizing::Estimate { n, p } => FilterParameters::estimate(n, p)?,
            Sizing::Unset | Sizing::Items(_) => {
                unreachable!("Complete builder without full sizing")
            }
        };
        Ok(BloomFilter::from_parameters(params, self.options))
    }
}

impl<State> BloomFilterBuilder<State> {
    /// Override the digest hasher (optional, any state).
    #[must_use]
    pub fn hasher<H>(mut self, hasher: H) -> Self
    where
        H: DigestHasher + 'static,
    {
        self.options = self.options.with_hasher(hasher);
        self
    }

    /// Replace all options at once (optional, any state).
    #[must_use]
    pub fn options(mut self, options: FilterOptions) -> Self {
        self.options = options;
        self
    }

    fn transition<Next>(self, sizing: Sizing) -> BloomFilterBuilder<Next> {
        BloomFilterBuilder {
            sizing,
            options: self.options,
            _state: PhantomData,
        }
    }
}
