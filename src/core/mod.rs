//! Core types, traits, and parameter math.
//!
//! ```text
//! core/
//! ├── filter.rs    - BloomMembership trait
//! ├── bitset.rs    - Fixed-size bit array
//! ├── params.rs    - (m, k) estimation and validation
//! └── mod.rs       - This file
//! ```
//!
//! Nothing in here locks. [`BitArray`] is plain owned data; the filter in
//! [`crate::filters`] decides how it is shared.
//!
//! # Examples
//!
//! ```
//! use bloomguard::core::params::{estimate, expected_fp_rate};
//!
//! let (m, k) = estimate(1000, 0.01).unwrap();
//! assert_eq!((m, k), (9586, 7));
//!
//! let fp = expected_fp_rate(m, 1000, k).unwrap();
//! assert!(fp < 0.011);
//! ```

pub mod bitset;
pub mod filter;
pub mod params;

pub use bitset::BitArray;
pub use filter::BloomMembership;
pub use params::{
    bits_per_item, estimate, expected_fp_rate, optimal_bit_count, optimal_hash_count,
    FilterParameters,
};
