//! Parameter estimation for Bloom filters.
//!
//! Given:
//! - `n`: expected number of items
//! - `p`: target false positive probability
//!
//! the filter is sized as:
//! - `m = ⌈log₂(e) × log₂(1/p) × n⌉` bits, which is the familiar
//!   `m = -n × ln(p) / (ln 2)²` written in base-2 logarithms
//! - `k = ⌈ln 2 × m / n⌉` hash functions
//!
//! Both are rounded up. Rounding down would undersize the filter and push the
//! observed false positive rate above the target.
//!
//! Once built, the false positive rate after inserting `n` items is
//! approximately `(1 - e^(-kn/m))^k`; see [`expected_fp_rate`].
//!
//! # References
//!
//! - Bloom, Burton H. (1970). "Space/Time Trade-offs in Hash Coding with Allowable Errors"
//! - Kirsch & Mitzenmacher (2006). "Less Hashing, Same Performance: Building a Better Bloom Filter"

#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]

use crate::error::{BloomError, Result};
use std::f64::consts::{LN_2, LOG2_E};

/// (ln 2)², used by [`bits_per_item`].
const LN2_SQUARED: f64 = LN_2 * LN_2;

/// Validated `(m, k)` pair describing a filter's shape.
///
/// Both fields are strictly positive. The pair is immutable once built; a
/// [`BloomFilter`](crate::BloomFilter) keeps exactly one of these for its
/// whole lifetime.
///
/// # Examples
///
/// ```
/// use bloomguard::core::params::FilterParameters;
///
/// let params = FilterParameters::estimate(1000, 0.03).unwrap();
/// assert_eq!(params.bits(), 7299);
/// assert_eq!(params.hashes(), 6);
///
/// assert!(FilterParameters::new(0, 3).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FilterParameters {
    bits: u64,
    hashes: u64,
}

impl FilterParameters {
    /// Build parameters from an explicit bit count `m` and hash count `k`.
    ///
    /// # Errors
    ///
    /// [`BloomError::InvalidArgument`] if `m == 0` or `k == 0`.
    pub fn new(m: u64, k: u64) -> Result<Self> {
        if m == 0 {
            return Err(BloomError::invalid_argument(
                "m",
                m,
                "bit array size must be greater than 0",
            ));
        }

        if k == 0 {
            return Err(BloomError::invalid_argument(
                "k",
                k,
                "hash function count must be greater than 0",
            ));
        }

        Ok(Self { bits: m, hashes: k })
    }

    /// Derive parameters for about `n` items at false positive rate `p`.
    ///
    /// # Errors
    ///
    /// Propagates the validation failures of [`estimate`].
    pub fn estimate(n: u64, p: f64) -> Result<Self> {
        let (m, k) = estimate(n, p)?;
        Self::new(m, k)
    }

    /// Number of addressable bits (`m`).
    #[must_use]
    #[inline]
    pub const fn bits(&self) -> u64 {
        self.bits
    }

    /// Number of probe positions per item (`k`).
    #[must_use]
    #[inline]
    pub const fn hashes(&self) -> u64 {
        self.hashes
    }
}

/// Estimate `(m, k)` for about `n` items with false positive rate `p`.
///
/// # Errors
///
/// - `n == 0`
/// - `p` not in the open interval `(0, 1)`, including NaN
/// - the resulting `m` does not fit in a `u64`
///
/// # Examples
///
/// ```
/// use bloomguard::core::params::estimate;
///
/// let (m, k) = estimate(1000, 0.01).unwrap();
/// assert_eq!(m, 9586);
/// assert_eq!(k, 7);
///
/// assert!(estimate(0, 0.01).is_err());
/// assert!(estimate(1000, 1.0).is_err());
/// ```
pub fn estimate(n: u64, p: f64) -> Result<(u64, u64)> {
    let m = optimal_bit_count(n, p)?;
    let k = optimal_hash_count(m, n)?;

    tracing::debug!(n, p, m, k, "estimated bloom filter parameters");

    Ok((m, k))
}

/// Optimal bit count `m = ⌈log₂(e) × log₂(1/p) × n⌉`.
///
/// # Errors
///
/// See [`estimate`].
pub fn optimal_bit_count(n: u64, p: f64) -> Result<u64> {
    validate_item_count(n)?;
    validate_fp_rate(p)?;

    let m = (LOG2_E * (1.0 / p).log2() * n as f64).ceil();

    // `as` saturates, so out-of-range values have to be caught explicitly
    if !m.is_finite() || m >= u64::MAX as f64 {
        return Err(BloomError::invalid_argument(
            "p",
            p,
            "required bit array size exceeds u64 range for this item count",
        ));
    }

    Ok((m as u64).max(1))
}

/// Optimal hash count `k = ⌈ln 2 × m / n⌉`.
///
/// # Errors
///
/// [`BloomError::InvalidArgument`] if `m == 0` or `n == 0`.
///
/// # Examples
///
/// ```
/// use bloomguard::core::params::optimal_hash_count;
///
/// assert_eq!(optimal_hash_count(9586, 1000).unwrap(), 7);
/// assert_eq!(optimal_hash_count(10, 1_000_000).unwrap(), 1);
/// ```
pub fn optimal_hash_count(m: u64, n: u64) -> Result<u64> {
    if m == 0 {
        return Err(BloomError::invalid_argument(
            "m",
            m,
            "bit array size must be greater than 0",
        ));
    }
    validate_item_count(n)?;

    let k = (LN_2 * m as f64 / n as f64).ceil();
    Ok((k as u64).max(1))
}

/// Theoretical false positive rate `(1 - e^(-kn/m))^k` after `n` insertions.
///
/// Returns `0.0` for an empty filter (`n == 0`).
///
/// # Errors
///
/// [`BloomError::InvalidArgument`] if `m == 0` or `k == 0`.
///
/// # Examples
///
/// ```
/// use bloomguard::core::params::{estimate, expected_fp_rate};
///
/// let (m, k) = estimate(1000, 0.01).unwrap();
/// let fp = expected_fp_rate(m, 1000, k).unwrap();
/// assert!(fp < 0.011);
/// ```
pub fn expected_fp_rate(m: u64, n: u64, k: u64) -> Result<f64> {
    let params = FilterParameters::new(m, k)?;

    if n == 0 {
        return Ok(0.0);
    }

    let k = params.hashes() as f64;
    let exponent = -(k * n as f64) / params.bits() as f64;
    let fp_rate = (1.0 - exponent.exp()).powf(k);

    Ok(fp_rate.clamp(0.0, 1.0))
}

/// Bits needed per item for false positive rate `p`: `-ln(p) / (ln 2)²`.
///
/// # Errors
///
/// [`BloomError::InvalidArgument`] if `p` is not in `(0, 1)`.
///
/// # Examples
///
/// ```
/// use bloomguard::core::params::bits_per_item;
///
/// let bpi = bits_per_item(0.01).unwrap();
/// assert!((bpi - 9.585).abs() < 0.01);
/// ```
pub fn bits_per_item(p: f64) -> Result<f64> {
    validate_fp_rate(p)?;
    Ok(-p.ln() / LN2_SQUARED)
}

#[inline]
fn validate_item_count(n: u64) -> Result<()> {
    if n == 0 {
        return Err(BloomError::invalid_argument(
            "n",
            n,
            "expected item count must be greater than 0",
        ));
    }
    Ok(())
}

#[inline]
fn validate_fp_rate(p: f64) -> Result<()> {
    // Written positively so NaN is rejected too
    if !(p > 0.0 && p < 1.0) {
        return Err(BloomError::invalid_argument(
            "p",
            p,
            "false positive rate must lie in the open interval (0, 1)",
        ));
    }
    Ok(())
}
