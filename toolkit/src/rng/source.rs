//! Random sources: system entropy and a seedable xorshift64* generator
//!
//! Every action that needs randomness draws 64-bit values from a
//! [`RandomSource`] owned by the caller. Two implementations are provided:
//!
//! - [`SystemSource`]: OS entropy, different on every run.
//! - [`SeededSource`]: xorshift64*, a fast PRNG with 64-bit state whose
//!   output depends only on the seed. Same seed → same sequence on every
//!   platform, which is what makes seeded runs reproducible.
//!
//! # Seeding from text
//!
//! Callers usually hold a human-readable seed phrase rather than an integer.
//! [`seed_from_text`] folds the phrase's UTF-8 bytes into a `u64` with a
//! fixed rolling hash so that the same phrase yields the same seed in any
//! implementation of this toolkit. The hash is part of the compatibility
//! contract and must not be swapped for a different one.

use serde::{Deserialize, Serialize};

/// Uniform interface over a randomness source.
///
/// A source produces independent, uniformly distributed 64-bit values on
/// demand; advancing internal state is the only side effect. All provided
/// helpers reduce to [`next_u64`](RandomSource::next_u64), so implementors
/// only supply that one method.
///
/// # Example
/// ```
/// use actionkit_core::{RandomSource, SeededSource};
///
/// let mut source = SeededSource::new(12345);
/// let value = source.next_u64();
/// let die = source.range(1, 7); // [1, 7)
/// ```
pub trait RandomSource {
    /// Produce the next random `u64`, advancing internal state.
    fn next_u64(&mut self) -> u64;

    /// Produce a value in `[0, bound)`.
    ///
    /// # Panics
    /// Panics if `bound` is zero.
    fn next_below(&mut self, bound: u64) -> u64 {
        assert!(bound > 0, "bound must be positive");
        self.next_u64() % bound
    }

    /// Produce a value in `[min, max)`.
    ///
    /// # Panics
    /// Panics if `min >= max`.
    ///
    /// # Example
    /// ```
    /// use actionkit_core::{RandomSource, SeededSource};
    ///
    /// let mut source = SeededSource::new(12345);
    /// let offset = source.range(0, 100); // [0, 100)
    /// assert!((0..100).contains(&offset));
    /// ```
    fn range(&mut self, min: i64, max: i64) -> i64 {
        assert!(min < max, "min must be less than max");

        let value = self.next_u64();
        let span = (max - min) as u64;
        min + (value % span) as i64
    }
}

/// Derive a 64-bit seed from arbitrary text.
///
/// Folds the text's UTF-8 bytes with the rolling hash
/// `h = 127 * (h & 0x00FF_FFFF_FFFF_FFFF) + byte`, starting from 5381.
/// The mask keeps the product below 2^63, so the arithmetic cannot
/// overflow. Stable across platforms and releases; seeded runs recorded
/// with a phrase stay replayable.
///
/// # Example
/// ```
/// use actionkit_core::seed_from_text;
///
/// assert_eq!(seed_from_text(""), 5381);
/// assert_eq!(seed_from_text("a"), seed_from_text("a"));
/// assert_ne!(seed_from_text("a"), seed_from_text("b"));
/// ```
pub fn seed_from_text(text: &str) -> u64 {
    let mut seed: u64 = 5381;
    for byte in text.bytes() {
        seed = 127 * (seed & 0x00FF_FFFF_FFFF_FFFF) + u64::from(byte);
    }
    seed
}

/// Deterministic random source using xorshift64*.
///
/// xorshift64* passes TestU01's BigCrush statistical tests, uses a single
/// 64-bit state word, and is platform-independent. Not cryptographically
/// secure; never use it for secrets.
///
/// # Example
/// ```
/// use actionkit_core::{RandomSource, SeededSource};
///
/// let mut a = SeededSource::from_text("lunch order");
/// let mut b = SeededSource::from_text("lunch order");
/// assert_eq!(a.next_u64(), b.next_u64());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeededSource {
    /// Internal state (64-bit)
    state: u64,
}

impl SeededSource {
    /// Create a new source with the given seed.
    ///
    /// A zero seed is remapped to 1; zero is the xorshift lockup state.
    pub fn new(seed: u64) -> Self {
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Create a new source seeded from text via [`seed_from_text`].
    pub fn from_text(text: &str) -> Self {
        Self::new(seed_from_text(text))
    }

    /// Current state, for checkpointing and replay.
    ///
    /// # Example
    /// ```
    /// use actionkit_core::{RandomSource, SeededSource};
    ///
    /// let mut source = SeededSource::new(12345);
    /// source.next_u64();
    ///
    /// // Resume later from the captured state.
    /// let mut resumed = SeededSource::new(source.state());
    /// assert_eq!(source.next_u64(), resumed.next_u64());
    /// ```
    pub fn state(&self) -> u64 {
        self.state
    }
}

impl RandomSource for SeededSource {
    fn next_u64(&mut self) -> u64 {
        // xorshift64* algorithm
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }
}

/// Random source backed by operating-system entropy.
///
/// Wraps [`rand::rngs::OsRng`]; every instance draws from the same OS pool,
/// so the type carries no state of its own.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemSource;

impl SystemSource {
    /// Create a new system-entropy source.
    pub fn new() -> Self {
        Self
    }
}

impl RandomSource for SystemSource {
    fn next_u64(&mut self) -> u64 {
        use rand::RngCore;

        rand::rngs::OsRng.next_u64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_seed_converted_to_nonzero() {
        let source = SeededSource::new(0);
        assert_ne!(source.state(), 0, "Zero seed should be converted to 1");
    }

    #[test]
    #[should_panic(expected = "min must be less than max")]
    fn test_range_invalid_bounds() {
        let mut source = SeededSource::new(12345);
        source.range(100, 50); // min > max should panic
    }

    #[test]
    #[should_panic(expected = "bound must be positive")]
    fn test_next_below_zero_bound() {
        let mut source = SeededSource::new(12345);
        source.next_below(0);
    }

    #[test]
    fn test_next_below_stays_under_bound() {
        let mut source = SeededSource::new(12345);

        for _ in 0..1000 {
            let val = source.next_below(7);
            assert!(val < 7, "next_below(7) produced {}", val);
        }
    }

    #[test]
    fn test_seed_from_text_known_values() {
        // Pinned by hand from the rolling hash definition:
        // h = 127 * (h & 0x00FF_FFFF_FFFF_FFFF) + byte, starting at 5381.
        assert_eq!(seed_from_text(""), 5381);
        assert_eq!(seed_from_text("a"), 683_484);
        assert_eq!(seed_from_text("ab"), 86_802_566);
    }

    #[test]
    fn test_seed_from_text_walks_utf8_bytes() {
        // "é" is two bytes (0xC3, 0xA9), folded one at a time.
        assert_eq!(seed_from_text("é"), 86_815_083);
    }

    #[test]
    fn test_system_source_produces_distinct_values() {
        let mut source = SystemSource::new();
        let values: Vec<u64> = (0..8).map(|_| source.next_u64()).collect();

        assert!(
            values.windows(2).any(|w| w[0] != w[1]),
            "system source returned a constant sequence: {:?}",
            values
        );
    }
}
