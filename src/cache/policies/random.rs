//! Random replacement policy.
//!
//! Evicts a way chosen uniformly at random from the full set. Randomness
//! comes from a xorshift generator rather than a full RNG crate: the
//! sequence is deterministic for a given seed, which keeps simulation runs
//! reproducible.

use super::ReplacementPolicy;

/// Default xorshift seed (any nonzero value works).
const DEFAULT_SEED: u64 = 0x9E37_79B9_7F4A_7C15;

/// Random policy state.
#[derive(Debug, Clone)]
pub struct RandomPolicy {
    /// Number of ways in each set.
    ways: usize,
    /// Internal xorshift state; never zero.
    state: u64,
}

impl RandomPolicy {
    /// Creates a new random policy instance.
    ///
    /// # Arguments
    ///
    /// * `sets` - The number of sets (unused by this policy but part of the
    ///   construction interface shared with stateful policies).
    /// * `ways` - The associativity (number of ways) of the cache.
    pub const fn new(sets: usize, ways: usize) -> Self {
        Self::with_seed(sets, ways, DEFAULT_SEED)
    }

    /// Creates a random policy with an explicit seed.
    ///
    /// A zero seed (a xorshift fixed point) is replaced by the default seed.
    ///
    /// # Arguments
    ///
    /// * `sets` - The number of sets (unused by this policy).
    /// * `ways` - The associativity (number of ways) of the cache.
    /// * `seed` - Initial generator state.
    pub const fn with_seed(_sets: usize, ways: usize, seed: u64) -> Self {
        Self {
            ways,
            state: if seed == 0 { DEFAULT_SEED } else { seed },
        }
    }
}

impl ReplacementPolicy for RandomPolicy {
    /// Access patterns do not affect random replacement; this is a no-op.
    fn update(&mut self, _set: usize, _way: usize) {}

    /// Advances the xorshift state and maps it onto a way index.
    fn get_victim(&mut self, _set: usize) -> usize {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        (x as usize) % self.ways
    }
}
