//! Deterministic random source for partner selection
//!
//! The engine draws uniform integers through the `RandomSource` trait so the
//! generator can be swapped in tests. The default implementation wraps a
//! seeded `StdRng`: identical seed and identical call sequence give an
//! identical output sequence.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Trait for deterministic uniform integer sources
pub trait RandomSource {
    /// Uniform integer in `[0, n)`
    fn next_int(&mut self, n: usize) -> usize;
}

/// Default seeded generator backed by `rand::rngs::StdRng`
pub struct SeededRng {
    rng: StdRng,
}

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRng {
    fn next_int(&mut self, n: usize) -> usize {
        self.rng.gen_range(0..n)
    }
}
