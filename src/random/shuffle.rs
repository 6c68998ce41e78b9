//! Reproducible Fisher–Yates shuffle.
//!
//! # Reference
//! Knuth (1997), "The Art of Computer Programming", Vol. 2, Algorithm 3.4.2P

use super::RandomSource;

/// Shuffles `items` in place, consuming exactly `len - 1` draws.
///
/// # Algorithm
/// For `i` from `len - 1` down to 1: `j = floor(r * (i + 1))`, swap `i` and `j`.
/// The draw order is part of the reproducibility contract.
pub fn shuffle_in_place<T, R: RandomSource + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let r = rng.next_f64();
        // r < 1, so j <= i; the min guards against a misbehaving source.
        let j = ((r * (i + 1) as f64).floor() as usize).min(i);
        items.swap(i, j);
    }
}

/// Returns a shuffled copy of `items`, leaving the input untouched.
pub fn seeded_shuffle<T: Clone, R: RandomSource + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut shuffled = items.to_vec();
    shuffle_in_place(&mut shuffled, rng);
    shuffled
}
