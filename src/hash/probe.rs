//! Probe position derivation by double hashing.
//!
//! For `k` probe positions derived from the two digest halves `a` and `b`:
//!
//! ```text
//! a' = a mod m,  b' = b mod m
//! gᵢ = (a' + i·b') mod m      for i in 0..k
//! ```
//!
//! Kirsch & Mitzenmacher show that two independent hash values simulate `k`
//! independent hash functions with no asymptotic penalty on the false positive
//! rate. The product and sum are evaluated in `u128`: with `a', b' < m ≤ 2⁶⁴`
//! and `i < 2⁶⁴`, `a' + i·b'` stays below `2¹²⁸`, so nothing is truncated
//! before the final reduction.
//!
//! # References
//!
//! - Kirsch, A., & Mitzenmacher, M. (2006). "Less Hashing, Same Performance: Building a Better Bloom Filter"

#![allow(clippy::cast_possible_truncation)]

use super::Digest;
use crate::core::params::FilterParameters;
use std::iter::FusedIterator;

/// Derives `k` bit positions in `[0, m)` from a digest.
///
/// # Examples
///
/// ```
/// use bloomguard::core::params::FilterParameters;
/// use bloomguard::hash::{Digest, ProbeGenerator};
///
/// let probes = ProbeGenerator::new(FilterParameters::new(10, 4).unwrap());
/// let positions: Vec<u64> = probes.probes(Digest::new(3, 4)).collect();
/// assert_eq!(positions, vec![3, 7, 1, 5]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeGenerator {
    m: u64,
    k: u64,
}

impl ProbeGenerator {
    /// Create a generator for the filter shape `params`.
    #[must_use]
    pub const fn new(params: FilterParameters) -> Self {
        Self {
            m: params.bits(),
            k: params.hashes(),
        }
    }

    /// Number of positions produced per digest.
    #[must_use]
    #[inline]
    pub const fn count(&self) -> u64 {
        self.k
    }

    /// Lazily yield the `k` positions for `digest`.
    #[must_use]
    #[inline]
    pub fn probes(&self, digest: Digest) -> Probes {
        Probes {
            a: digest.a % self.m,
            b: digest.b % self.m,
            m: self.m,
            next: 0,
            k: self.k,
        }
    }
}

/// Iterator over the probe positions of one digest.
///
/// Produced by [`ProbeGenerator::probes`]. Lazy, so a membership check can
/// stop at the first unset bit.
#[derive(Debug, Clone)]
pub struct Probes {
    a: u64,
    b: u64,
    m: u64,
    next: u64,
    k: u64,
}

impl Iterator for Probes {
    type Item = u64;

    #[inline]
    fn next(&mut self) -> Option<u64> {
        if self.next >= self.k {
            return None;
        }

        let i = u128::from(self.next);
        let position = (u128::from(self.a) + i * u128::from(self.b)) % u128::from(self.m);
        self.next += 1;

        Some(position as u64)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.k - self.next;
        match usize::try_from(remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl FusedIterator for Probes {}
