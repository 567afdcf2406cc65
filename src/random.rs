//! Seeded, reproducible shuffling.
//!
//! Each variation shuffles its unconstrained performances with a generator
//! seeded by its own index, so "variation N" always starts from the same
//! base order regardless of what else ran in the process.
//!
//! # Algorithm
//!
//! [`SeededSequence`] is a chained map: every draw feeds the previous output
//! through the splitmix64 finalizer to obtain the next one. [`shuffle`] is a
//! backward Fisher-Yates pass driven by fractions from that sequence.
//!
//! # Reference
//! Knuth (1997), "The Art of Computer Programming", Vol. 2, Algorithm 3.4.2P

use rand::RngCore;

const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// Deterministic pseudo-random sequence derived from a seed.
///
/// Also implements [`RngCore`], so it can stand in as a replayable random
/// source wherever a `rand::Rng` is expected.
#[derive(Debug, Clone)]
pub struct SeededSequence {
    state: u64,
}

impl SeededSequence {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Next raw value; becomes the state for the following draw.
    fn advance(&mut self) -> u64 {
        let mut z = self.state.wrapping_add(GOLDEN_GAMMA);
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^= z >> 31;
        self.state = z;
        z
    }

    /// Next fraction in `[0, 1)`.
    pub fn next_fraction(&mut self) -> f64 {
        // Top 53 bits fill an f64 mantissa exactly.
        (self.advance() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }
}

impl RngCore for SeededSequence {
    fn next_u32(&mut self) -> u32 {
        (self.advance() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.advance()
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(8) {
            let bytes = self.advance().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

/// Returns a seeded permutation of `items`.
///
/// Deterministic per `(items, seed)`.
pub fn shuffle<T: Clone>(items: &[T], seed: u64) -> Vec<T> {
    let mut out = items.to_vec();
    shuffle_in_place(&mut out, seed);
    out
}

/// In-place variant of [`shuffle`].
pub fn shuffle_in_place<T>(items: &mut [T], seed: u64) {
    let mut seq = SeededSequence::new(seed);
    for i in (1..items.len()).rev() {
        let j = ((seq.next_fraction() * (i + 1) as f64) as usize).min(i);
        items.swap(i, j);
    }
}
