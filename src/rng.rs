//! `SeededRng`: the deterministic random source behind every "random-looking" choice.
//!
//! The stream is fully specified so that another implementation can reproduce it
//! bit for bit:
//!
//! - **Seeding:** `state = splitmix64(seed)`; a zero result is replaced by
//!   [`ZERO_STATE_REPLACEMENT`] (xorshift has a fixed point at zero).
//! - **Step (xorshift64\*):**
//!   ```text
//!   x ^= x >> 12;  x ^= x << 25;  x ^= x >> 27;
//!   state = x;     output = x * 0x2545F4914F6CDD1D  (wrapping)
//!   ```
//! - **Bounded draw:** `below(bound)` rejects outputs at or above the largest
//!   multiple of `bound` and returns `output % bound`.
//! - **Shuffle:** Fisher–Yates from the back: for `i` in `len-1 ..= 1`,
//!   swap `i` with `below(i + 1)`.
//!
//! Byte and text seeds go through [`hash_seed`] first.

use crate::seed::{hash_seed, SeedKey};
use rand::{RngCore, SeedableRng};

const SPLITMIX_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;
const XORSHIFT_MULTIPLIER: u64 = 0x2545_F491_4F6C_DD1D;
/// State used when seeding would otherwise leave the generator at zero.
pub const ZERO_STATE_REPLACEMENT: u64 = 0x853C_49E6_748F_EA9B;

fn splitmix64(seed: u64) -> u64 {
    let mut z = seed.wrapping_add(SPLITMIX_GAMMA);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Deterministic pseudo-random stream (xorshift64\* seeded through splitmix64).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    /// Stream for a 64-bit seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let state = match splitmix64(seed) {
            0 => ZERO_STATE_REPLACEMENT,
            s => s,
        };
        Self { state }
    }

    /// Stream for arbitrary seed bytes.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::new(hash_seed(bytes))
    }

    /// Stream for a seed string (e.g. `"TETRAD_v1|2025-01-01"`).
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self::from_bytes(text.as_bytes())
    }

    /// Stream for a puzzle key.
    #[must_use]
    pub fn from_key(key: &SeedKey) -> Self {
        Self::new(key.seed())
    }

    /// Advance the state and return the next 64-bit output.
    pub fn step(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(XORSHIFT_MULTIPLIER)
    }

    /// Uniform draw in `0..bound`. `bound` of 0 returns 0 without advancing.
    pub fn below(&mut self, bound: u64) -> u64 {
        if bound == 0 {
            return 0;
        }
        // largest multiple of `bound` that fits; anything at or above it is biased
        let zone = u64::MAX - (u64::MAX % bound);
        loop {
            let x = self.step();
            if x < zone {
                return x % bound;
            }
        }
    }

    /// Uniform index in `0..len`.
    pub fn index(&mut self, len: usize) -> usize {
        // len fits in u64 on every supported target, and the result is < len
        self.below(len as u64) as usize
    }

    /// In-place Fisher–Yates shuffle, continuing this stream.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.index(i + 1);
            items.swap(i, j);
        }
    }
}

impl RngCore for SeededRng {
    fn next_u32(&mut self) -> u32 {
        // high bits of xorshift64* are the strongest
        (self.step() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.step()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.step().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for SeededRng {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u64::from_le_bytes(seed))
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::new(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = SeededRng::new(12345);
        let mut b = SeededRng::new(12345);
        for _ in 0..100 {
            assert_eq!(a.step(), b.step());
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = SeededRng::new(1);
        let mut b = SeededRng::new(2);
        let xs: Vec<u64> = (0..8).map(|_| a.step()).collect();
        let ys: Vec<u64> = (0..8).map(|_| b.step()).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn test_zero_seed_is_usable() {
        let mut rng = SeededRng::new(0);
        let xs: Vec<u64> = (0..4).map(|_| rng.step()).collect();
        assert!(xs.iter().any(|&x| x != 0));
    }

    #[test]
    fn test_step_function_matches_definition() {
        let mut rng = SeededRng::new(99);
        let mut x = splitmix64(99);
        for _ in 0..16 {
            x ^= x >> 12;
            x ^= x << 25;
            x ^= x >> 27;
            assert_eq!(rng.step(), x.wrapping_mul(XORSHIFT_MULTIPLIER));
        }
    }

    #[test]
    fn test_splitmix_reference_value() {
        // first output of the reference splitmix64 generator seeded with 0
        assert_eq!(splitmix64(0), 0xE220_A839_7B1D_CDAF);
    }

    #[test]
    fn test_text_seed_matches_hashed_seed() {
        let mut a = SeededRng::from_text("TETRAD_v1|2025-01-01");
        let mut b = SeededRng::new(hash_seed(b"TETRAD_v1|2025-01-01"));
        assert_eq!(a.step(), b.step());
    }

    #[test]
    fn test_from_key_matches_text() {
        let key = SeedKey::level("forest", 3, 77);
        let mut a = SeededRng::from_key(&key);
        let mut b = SeededRng::from_text("forest|3|77");
        assert_eq!(a.step(), b.step());
    }

    #[test]
    fn test_below_stays_in_range() {
        let mut rng = SeededRng::new(7);
        for bound in [1u64, 2, 3, 10, 1000, u64::MAX] {
            for _ in 0..200 {
                assert!(rng.below(bound) < bound);
            }
        }
        assert_eq!(rng.below(0), 0);
    }

    #[test]
    fn test_below_covers_small_range() {
        let mut rng = SeededRng::new(2024);
        let mut seen = [false; 6];
        for _ in 0..500 {
            seen[rng.index(6)] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let mut rng = SeededRng::new(5);
        let mut items: Vec<u32> = (0..50).collect();
        rng.shuffle(&mut items);

        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<_>>());
        assert_ne!(items, sorted, "50 items should not come back in order");
    }

    #[test]
    fn test_shuffle_is_deterministic() {
        let mut a: Vec<char> = "ballarealeadlady".chars().collect();
        let mut b = a.clone();
        SeededRng::new(31).shuffle(&mut a);
        SeededRng::new(31).shuffle(&mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn test_shuffle_trivial_slices() {
        let mut rng = SeededRng::new(1);
        let before = rng.clone();
        let mut empty: [u8; 0] = [];
        rng.shuffle(&mut empty);
        let mut one = [9];
        rng.shuffle(&mut one);
        assert_eq!(one, [9]);
        // nothing was drawn
        assert_eq!(rng, before);
    }

    #[test]
    fn test_rand_traits() {
        let mut a = SeededRng::seed_from_u64(8);
        let mut b = SeededRng::new(8);
        assert_eq!(a.next_u64(), b.step());

        let mut c = SeededRng::from_seed(8u64.to_le_bytes());
        let mut d = SeededRng::new(8);
        let x: u32 = c.gen_range(0..100);
        let y: u32 = d.gen_range(0..100);
        assert_eq!(x, y);
        assert!(x < 100);

        let mut buf = [0u8; 13];
        SeededRng::new(4).fill_bytes(&mut buf);
        assert!(buf.iter().any(|&byte| byte != 0));
    }
}
