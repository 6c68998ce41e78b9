//! Random seed phrases for organizers who don't want to invent one.

use rand::seq::IndexedRandom;
use rand::Rng;

const SEED_WORDS: [&str; 16] = [
    "snowflake",
    "reindeer",
    "chimney",
    "mistletoe",
    "jingle",
    "sleigh",
    "carol",
    "frost",
    "cocoa",
    "holly",
    "tinsel",
    "candy",
    "gingerbread",
    "nutcracker",
    "ornament",
    "wreath",
];

/// Generates a seed phrase like `"frost-cocoa-holly-42"` from the thread RNG.
///
/// This is the only non-deterministic entry point in the crate. The phrase
/// only seeds a draw; it is not a secret.
pub fn generate_random_seed() -> String {
    generate_random_seed_with(&mut rand::rng())
}

/// Generates a seed phrase from a caller-supplied RNG.
pub fn generate_random_seed_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut parts: Vec<String> = (0..3)
        .filter_map(|_| SEED_WORDS.choose(rng).map(|w| w.to_string()))
        .collect();
    parts.push(rng.random_range(0..100u32).to_string());
    parts.join("-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_phrase_shape() {
        let phrase = generate_random_seed();
        let parts: Vec<&str> = phrase.split('-').collect();
        assert_eq!(parts.len(), 4);
        for word in &parts[..3] {
            assert!(SEED_WORDS.contains(word), "unexpected word {word}");
        }
        let n: u32 = parts[3].parse().unwrap();
        assert!(n < 100);
    }

    #[test]
    fn test_phrase_reproducible_with_seeded_rng() {
        let a = generate_random_seed_with(&mut SmallRng::seed_from_u64(42));
        let b = generate_random_seed_with(&mut SmallRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
