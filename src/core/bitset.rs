//! Packed bit storage for Bloom filters.
//!
//! `BitArray` is a fixed-size bit array backed by `Box<[u64]>`. Each 64-bit
//! word stores 64 bits in little-endian bit order:
//!
//! ```text
//! Word 0: [bit 0][bit 1]...[bit 63]
//! Word 1: [bit 64][bit 65]...[bit 127]
//! ```
//!
//! The array performs no synchronization of its own. Shared access goes through
//! the `RwLock` owned by [`BloomFilter`](crate::BloomFilter): `mark` needs
//! `&mut self`, `test` needs `&self`, which is exactly what the write and read
//! guards hand out.
//!
//! # Performance Characteristics
//!
//! - Space: `⌈m/64⌉ * 8` bytes for `m` bits
//! - `mark`: O(1), one OR on a word
//! - `test`: O(1), one load plus mask
//! - `count_ones`: O(m/64), uses the CPU popcount instruction
//!
//! # Examples
//!
//! ```
//! use bloomguard::core::bitset::BitArray;
//!
//! let mut bits = BitArray::new(100);
//! bits.mark(42);
//! assert!(bits.test(42));
//! assert!(!bits.test(43));
//! assert_eq!(bits.count_ones(), 1);
//! ```

#![allow(clippy::cast_possible_truncation)]

/// Width in bits of one storage unit.
pub const WORD_BITS: u64 = u64::BITS as u64;

/// Fixed-size packed bit array over the index space `[0, m)`.
///
/// All bits start clear. Bits are only ever set, never cleared, and the
/// allocation is never resized after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitArray {
    words: Box<[u64]>,
    len: u64,
}

impl BitArray {
    /// Allocate a bit array addressing `m` bits, all clear.
    ///
    /// `⌈m / 64⌉` words are allocated. Callers validate `m > 0` up front
    /// (see [`FilterParameters`](crate::core::params::FilterParameters)); a
    /// zero-length array is representable but has no addressable bits.
    ///
    /// # Panics
    ///
    /// Panics if the word count does not fit in `usize` on this platform.
    #[must_use]
    pub fn new(m: u64) -> Self {
        let words = usize::try_from(Self::words_for(m))
            .unwrap_or_else(|_| panic!("bit array of {} bits exceeds addressable memory", m));

        Self {
            words: vec![0u64; words].into_boxed_slice(),
            len: m,
        }
    }

    /// Number of words needed to hold `m` bits.
    #[must_use]
    #[inline]
    pub const fn words_for(m: u64) -> u64 {
        if m % WORD_BITS == 0 {
            m / WORD_BITS
        } else {
            m / WORD_BITS + 1
        }
    }

    /// Number of addressable bits.
    #[must_use]
    #[inline]
    pub const fn len(&self) -> u64 {
        self.len
    }

    /// `true` only for a zero-length array.
    #[must_use]
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of backing words.
    #[must_use]
    #[inline]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Set bit `index`. Idempotent.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`. Probe positions are always reduced modulo
    /// `m`, so an out-of-range index means a broken caller.
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomguard::core::bitset::BitArray;
    ///
    /// let mut bits = BitArray::new(64);
    /// bits.mark(10);
    /// bits.mark(10);
    /// assert!(bits.test(10));
    /// assert_eq!(bits.count_ones(), 1);
    /// ```
    #[inline]
    pub fn mark(&mut self, index: u64) {
        let (word, mask) = self.locate(index);
        self.words[word] |= mask;
    }

    /// Return whether bit `index` is set.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    #[must_use]
    #[inline]
    pub fn test(&self, index: u64) -> bool {
        let (word, mask) = self.locate(index);
        self.words[word] & mask != 0
    }

    /// Count set bits.
    #[must_use]
    pub fn count_ones(&self) -> u64 {
        self.words.iter().map(|w| u64::from(w.count_ones())).sum()
    }

    /// Bytes of bit storage.
    #[must_use]
    pub fn memory_bytes(&self) -> usize {
        std::mem::size_of_val(&*self.words)
    }

    #[inline]
    fn locate(&self, index: u64) -> (usize, u64) {
        assert!(
            index < self.len,
            "BitArray index out of bounds: index={} len={}",
            index,
            self.len
        );

        ((index / WORD_BITS) as usize, 1u64 << (index % WORD_BITS))
    }
}
