//! Lock guards handed out by [`BloomFilter`](crate::BloomFilter).
//!
//! The filter owns one `parking_lot::RwLock` around its bit array. The
//! guards in this module let a caller keep that lock across a sequence of
//! operations instead of re-acquiring it per call.

pub mod guard;

pub use guard::{FilterReadGuard, FilterWriteGuard};
