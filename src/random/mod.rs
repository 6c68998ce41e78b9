//! Seeded randomness.
//!
//! Everything the engine draws comes from a [`SeededRandom`] built from the
//! organizer's seed text, so the same inputs always give the same draw.
//!
//! # Submodules
//!
//! - `seeded`: djb2 seed hashing and the Mulberry32 float stream
//! - `shuffle`: Fisher–Yates over a [`RandomSource`]
//! - `phrase`: festive random seed phrases (thread RNG, not reproducible)

mod phrase;
mod seeded;
mod shuffle;

pub use phrase::{generate_random_seed, generate_random_seed_with};
pub use seeded::{hash_seed, RandomSource, SeededRandom};
pub use shuffle::{seeded_shuffle, shuffle_in_place};
