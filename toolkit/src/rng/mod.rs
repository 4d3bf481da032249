//! Random number generation
//!
//! The [`RandomSource`] trait is the single seam between actions and
//! randomness. Actions never reach for ambient entropy; they take a
//! `&mut impl RandomSource` (or `&mut dyn RandomSource`) and the caller
//! decides whether that is [`SystemSource`] or a replayable
//! [`SeededSource`].

pub mod sample;
mod source;

pub use source::{seed_from_text, RandomSource, SeededSource, SystemSource};
