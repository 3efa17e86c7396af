//! Stable per-location seeds and day-bucketed fractions
//!
//! The seed is the sum of the key's UTF-16 code units. Only its value modulo
//! 100 and 1000 is ever used. It must stay stable across processes, platforms
//! and releases, which `std::hash` does not promise. Anagrams share a seed.

/// Deterministic seed derived from a location key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct LocationSeed(u64);

impl LocationSeed {
    /// Derive the seed for `key`; the empty key yields 0
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        Self(key.encode_utf16().map(u64::from).sum())
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    /// Bucket `0..100` for a metric offset on a given day of month
    ///
    /// The same seed, day and offset always land in the same bucket, and
    /// neighbouring offsets never share one.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn percentile(self, day: u32, offset: u32) -> u32 {
        let mixed = self.0 + u64::from(day) + u64::from(offset);
        // Always < 100
        (mixed % 100) as u32
    }

    /// Fraction in `[0, 1)` with three decimals, used to spread coordinates
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn permille(self) -> f64 {
        (self.0 % 1000) as f64 / 1000.0
    }
}
