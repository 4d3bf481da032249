//! Text actions: random string generation and casing transforms
//!
//! Both halves are pure string manipulation. Random generation takes its
//! entropy through the [`rng`](crate::rng) seam; the casing transforms are
//! deterministic functions of their input.

pub mod casing;
pub mod random;

pub use casing::CasingStyle;
pub use random::{CharacterClass, CharacterClassSet, RandomTextBuilder};
