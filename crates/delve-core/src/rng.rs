//! Random number generation for dungeon building.
//!
//! Uses a seeded ChaCha RNG behind a two-word seed so chunk generation can
//! be reseeded deterministically from derived chunk seeds.

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Dungeon random number generator.
///
/// Wraps ChaCha8Rng for reproducible generation. The internal state is two
/// 64-bit seed words; note that stream position is not serialized, only
/// the seed pair, so a deserialized generator restarts its stream. Dungeon
/// generation reseeds before every chunk anyway.
#[derive(Debug, Clone)]
pub struct DelveRng {
    rng: ChaCha8Rng,
    seed: (u64, u64),
}

// Custom serialization: only the seed pair travels, the generator is
// recreated on deserialize.
impl Serialize for DelveRng {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.seed.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for DelveRng {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (s0, s1) = <(u64, u64)>::deserialize(deserializer)?;
        Ok(DelveRng::from_pair(s0, s1))
    }
}

/// Expand two seed words into a full ChaCha seed block. The upper half
/// mixes the words so `(a, b)` and `(b, a)` differ in every lane.
fn seed_block(s0: u64, s1: u64) -> [u8; 32] {
    let mut block = [0u8; 32];
    block[..8].copy_from_slice(&s0.to_le_bytes());
    block[8..16].copy_from_slice(&s1.to_le_bytes());
    block[16..24].copy_from_slice(&(s0 ^ s1.rotate_left(32)).to_le_bytes());
    block[24..32].copy_from_slice(&(s1 ^ s0.rotate_left(32)).to_le_bytes());
    block
}

impl DelveRng {
    /// Create a generator from a two-word seed.
    pub fn from_pair(s0: u64, s1: u64) -> Self {
        Self {
            rng: ChaCha8Rng::from_seed(seed_block(s0, s1)),
            seed: (s0, s1),
        }
    }

    /// Create a generator with a random seed pair.
    pub fn from_entropy() -> Self {
        let (s0, s1) = rand::random();
        Self::from_pair(s0, s1)
    }

    /// The seed pair this generator was last (re)seeded with.
    pub fn seed(&self) -> (u64, u64) {
        self.seed
    }

    /// Restart the stream from a new seed pair.
    pub fn reseed_pair(&mut self, s0: u64, s1: u64) {
        self.rng = ChaCha8Rng::from_seed(seed_block(s0, s1));
        self.seed = (s0, s1);
    }
}

impl Default for DelveRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RngCore for DelveRng {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.rng.try_fill_bytes(dest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_reproducibility() {
        let mut a = DelveRng::from_pair(42, 7);
        let mut b = DelveRng::from_pair(42, 7);
        for _ in 0..100 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn test_seed_words_both_matter() {
        let mut a = DelveRng::from_pair(42, 7);
        let mut b = DelveRng::from_pair(42, 8);
        let mut c = DelveRng::from_pair(7, 42);
        let x = a.next_u64();
        assert_ne!(x, b.next_u64());
        assert_ne!(x, c.next_u64());
    }

    #[test]
    fn test_reseed_restarts_stream() {
        let mut rng = DelveRng::from_pair(1, 2);
        let first: Vec<u64> = (0..8).map(|_| rng.next_u64()).collect();

        rng.reseed_pair(1, 2);
        let second: Vec<u64> = (0..8).map(|_| rng.next_u64()).collect();
        assert_eq!(first, second);
        assert_eq!(rng.seed(), (1, 2));

        rng.reseed_pair(3, 4);
        let third: Vec<u64> = (0..8).map(|_| rng.next_u64()).collect();
        assert_ne!(first, third);
    }

    #[test]
    fn test_uniform_draws_in_range() {
        let mut rng = DelveRng::from_pair(5, 5);
        for _ in 0..1000 {
            let f = rng.gen_range(0.0f32..1.0);
            assert!((0.0..1.0).contains(&f));
            let n = rng.gen_range(0..4usize);
            assert!(n < 4);
        }
    }

    #[test]
    fn test_serde_keeps_seed_only() {
        let mut rng = DelveRng::from_pair(11, 13);
        // Advance the stream; serialization intentionally forgets position
        let _ = rng.next_u64();

        let json = serde_json::to_string(&rng).unwrap();
        let mut restored: DelveRng = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.seed(), (11, 13));

        let mut fresh = DelveRng::from_pair(11, 13);
        assert_eq!(restored.next_u64(), fresh.next_u64());
    }
}
