//! Error types for Bloom filter construction.
//!
//! Every failure in this crate is detected synchronously while validating
//! construction parameters, before any storage is allocated. Once a
//! [`BloomFilter`](crate::BloomFilter) exists, `add` and `contains` are total
//! and never return an error.
//!
//! # Error Propagation
//!
//! ```
//! use bloomguard::{BloomError, Result};
//! use bloomguard::core::params::estimate;
//!
//! fn plan(n: u64, p: f64) -> Result<(u64, u64)> {
//!     let (m, k) = estimate(n, p)?;
//!     Ok((m, k))
//! }
//!
//! assert!(plan(1000, 0.01).is_ok());
//! assert!(matches!(
//!     plan(0, 0.01),
//!     Err(BloomError::InvalidArgument { name: "n", .. })
//! ));
//! ```

#![allow(clippy::module_name_repetitions)]

/// Result type alias for Bloom filter operations.
pub type Result<T> = std::result::Result<T, BloomError>;

/// Errors that can occur while sizing or constructing a Bloom filter.
///
/// There is a single kind, [`BloomError::InvalidArgument`], raised for:
///
/// - `n == 0` (expected item count)
/// - `p` outside the open interval `(0, 1)` (target false positive rate)
/// - `m == 0` (bit array size)
/// - `k == 0` (hash function count)
///
/// The `Display` output starts with `invalid argument <name>(<value>)` so the
/// offending argument can be identified from the message alone.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BloomError {
    /// A construction or estimation argument violated its precondition.
    #[error("invalid argument {name}({value}): {reason}")]
    InvalidArgument {
        /// Name of the offending argument (`"n"`, `"p"`, `"m"` or `"k"`).
        name: &'static str,
        /// The rejected value, rendered for diagnostics.
        value: String,
        /// Which constraint the value broke.
        reason: &'static str,
    },
}

impl BloomError {
    /// Create an `InvalidArgument` error.
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomguard::BloomError;
    ///
    /// let err = BloomError::invalid_argument("m", 0, "bit array size must be greater than 0");
    /// assert_eq!(
    ///     err.to_string(),
    ///     "invalid argument m(0): bit array size must be greater than 0"
    /// );
    /// ```
    #[must_use]
    pub fn invalid_argument(
        name: &'static str,
        value: impl ToString,
        reason: &'static str,
    ) -> Self {
        Self::InvalidArgument {
            name,
            value: value.to_string(),
            reason,
        }
    }

    /// Name of the argument that caused this error.
    #[must_use]
    pub fn argument(&self) -> &'static str {
        match self {
            Self::InvalidArgument { name, .. } => name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_argument_and_value() {
        let err = BloomError::invalid_argument("n", 0u64, "expected item count must be greater than 0");
        let display = err.to_string();
        assert!(display.starts_with("invalid argument n(0)"));
        assert!(display.contains("greater than 0"));
    }

    #[test]
    fn test_display_float_value() {
        let err = BloomError::invalid_argument("p", 1.5f64, "must lie in (0, 1)");
        assert!(err.to_string().contains("invalid argument p(1.5)"));
    }

    #[test]
    fn test_argument_accessor() {
        let err = BloomError::invalid_argument("k", 0u64, "hash count must be greater than 0");
        assert_eq!(err.argument(), "k");
    }

    #[test]
    fn test_error_implements_std_error() {
        let _err: Box<dyn std::error::Error + Send + Sync> =
            Box::new(BloomError::invalid_argument("m", 0u64, "test"));
    }

    #[test]
    fn test_error_clone_eq() {
        let err1 = BloomError::invalid_argument("m", 0u64, "test");
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn inner() -> Result<()> {
            Err(BloomError::invalid_argument("n", 0u64, "test"))
        }

        fn outer() -> Result<()> {
            inner()?;
            Ok(())
        }

        assert!(outer().is_err());
    }
}
