//! Per-invocation execution context.
//!
//! The random source is chosen exactly once, from the global `--seed` flag,
//! and handed to every handler through this context. Nothing else in the
//! binary touches entropy, so a seeded invocation is reproducible end to
//! end.

use actionkit_core::{RandomSource, SeededSource, SystemSource};

/// Owns the random source for one invocation.
pub struct ActionContext {
    source: Box<dyn RandomSource>,
}

impl ActionContext {
    /// Build the context from an optional seed phrase.
    ///
    /// With a phrase the source is deterministic (same phrase, same
    /// outputs); without one it draws from OS entropy.
    pub fn from_seed_text(seed: Option<&str>) -> Self {
        let source: Box<dyn RandomSource> = match seed {
            Some(text) => Box::new(SeededSource::from_text(text)),
            None => Box::new(SystemSource::new()),
        };
        Self { source }
    }

    /// The source handlers draw from.
    pub fn source(&mut self) -> &mut dyn RandomSource {
        self.source.as_mut()
    }

    /// Draw an integer from the inclusive range `[min, max]`.
    ///
    /// Works for the full i64 domain; the span is computed in u64 so
    /// `[i64::MIN, i64::MAX]` does not overflow. Callers validate
    /// `min <= max` before calling.
    pub fn draw_inclusive(&mut self, min: i64, max: i64) -> i64 {
        let span = max.wrapping_sub(min) as u64;
        if span == u64::MAX {
            // Every u64 maps to a distinct i64; no reduction needed.
            self.source.next_u64() as i64
        } else {
            min.wrapping_add(self.source.next_below(span + 1) as i64)
        }
    }
}
