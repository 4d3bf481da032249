//! Action Toolkit Core - utility actions library
//!
//! A collection of small, independent utility actions behind one crate:
//! random generation, text shaping, identifiers, and date arithmetic.
//!
//! # Architecture
//!
//! - **rng**: Random sources (system and seeded) plus sampling helpers
//! - **text**: Random string generation and casing transforms
//! - **ident**: UUID minting
//! - **dates**: Date shifting, differences, parsing, formatting
//! - **net**: JSON-over-HTTP fetching (feature `net`, on by default)
//!
//! # Critical Invariants
//!
//! 1. No ambient randomness: every drawing operation takes a caller-owned
//!    [`RandomSource`]
//! 2. Seeded runs are reproducible across platforms (xorshift64*, fixed
//!    text-to-seed hash)
//! 3. Actions are independent; none keeps state beyond its arguments

// Module declarations
pub mod dates;
pub mod ident;
pub mod rng;
pub mod text;

// Re-exports for convenience
pub use dates::{DateError, DateStyle, ShiftUnit};
pub use rng::{seed_from_text, RandomSource, SeededSource, SystemSource};
pub use text::{
    casing::CasingStyle,
    random::{CharacterClass, CharacterClassSet, RandomTextBuilder},
};

// HTTP module (when feature enabled)
#[cfg(feature = "net")]
pub mod net;

#[cfg(feature = "net")]
pub use net::{FetchError, JsonFetcher};
