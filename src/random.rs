//! Injected randomness

use rand::{rngs::StdRng, Rng, RngCore, SeedableRng};

/// Source of uniformly distributed integers.
///
/// Generation only ever asks for a value in `[0, n)`, so anything able to
/// answer that can drive it. Every [`rand::RngCore`] qualifies; tests
/// substitute scripted sources to pin an exact draw sequence.
pub trait RandomSource {
    /// Uniform integer in `[0, n)`. Callers guarantee `n > 0`.
    fn below(&mut self, n: usize) -> usize;
}

impl<R: RngCore + ?Sized> RandomSource for R {
    fn below(&mut self, n: usize) -> usize {
        self.gen_range(0..n)
    }
}

/// Standard generator, seeded when `seed` is given and from entropy otherwise.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    if let Some(state) = seed {
        StdRng::seed_from_u64(state)
    } else {
        StdRng::from_entropy()
    }
}
