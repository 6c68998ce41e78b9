//! Seed hashing and the seeded number stream.
//!
//! Both functions are bit-exact contracts: links shared between organizers
//! are only reproducible if every implementation hashes the same seed text
//! to the same integer and derives the same float stream from it.
//!
//! # Reference
//! - Bernstein, djb2 string hash (XOR variant)
//! - Tommy Ettinger, Mulberry32

/// A source of floats in `[0, 1)`.
///
/// The shuffle and the assignment engine consume randomness only through
/// this trait, so a draw is fully determined by the source's state.
pub trait RandomSource {
    /// Returns the next float in `[0, 1)` and advances the source.
    fn next_f64(&mut self) -> f64;
}

impl<F: FnMut() -> f64> RandomSource for F {
    fn next_f64(&mut self) -> f64 {
        self()
    }
}

const DJB2_INIT: u32 = 5381;
const MULBERRY_INCREMENT: u32 = 0x6D2B_79F5;
const TWO_POW_32: f64 = 4_294_967_296.0;

/// Hashes seed text to a 32-bit integer (djb2, XOR variant).
///
/// Characters are processed as UTF-16 code units, so names outside the
/// Basic Multilingual Plane contribute both surrogate halves.
///
/// # Algorithm
/// `acc = 5381; for c in text { acc = (acc * 33) ^ c }` with wrapping
/// 32-bit arithmetic.
pub fn hash_seed(text: &str) -> u32 {
    text.encode_utf16().fold(DJB2_INIT, |acc, unit| {
        acc.wrapping_mul(33) ^ u32::from(unit)
    })
}

/// Seeded Mulberry32 generator.
///
/// One instance is created per draw and threaded through every attempt;
/// it is never re-seeded mid-draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededRandom {
    state: u32,
}

impl SeededRandom {
    /// Creates a generator from a numeric seed.
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Creates a generator from seed text via [`hash_seed`].
    pub fn from_seed_text(text: &str) -> Self {
        Self::new(hash_seed(text))
    }

    /// Advances the state and returns the next raw 32-bit output.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(MULBERRY_INCREMENT);
        let s = self.state;
        let mut t = (s ^ (s >> 15)).wrapping_mul(s | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }
}

impl RandomSource for SeededRandom {
    fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / TWO_POW_32
    }
}
