//! Random index generation shared by the samplers.

use rand::distributions::Uniform;
use rand::prelude::*;

/// Upper bound on draws spent filling one set of unique indices.
///
/// Collisions are resampled; with at least as many candidates as requested
/// slots this cap is practically never reached, but it keeps the loop bounded
/// for tiny ranges.
pub const MAX_UNIQUE_DRAWS: usize = 1000;

/// Uniform integer generator over an injectable RNG.
///
/// By default this uses an OS-seeded `StdRng`; test code can construct it from
/// a fixed seed, or hand in any other `Rng`, for reproducible behavior.
pub struct UniformRandomGenerator<R: Rng = StdRng> {
    rng: R,
}

impl UniformRandomGenerator<StdRng> {
    /// Construct with a random seed (suitable for production use).
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Construct with a fixed seed (useful for tests).
    pub fn from_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for UniformRandomGenerator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> UniformRandomGenerator<R> {
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Fill `out` with distinct integers drawn uniformly from `[min, max]`.
    ///
    /// Each slot is drawn independently and redrawn on collision with an
    /// earlier slot. Returns `false` if the range is too small to hold
    /// `out.len()` distinct values or if [`MAX_UNIQUE_DRAWS`] is exhausted;
    /// `out` is unspecified in that case.
    pub fn gen_unique(&mut self, out: &mut [usize], min: usize, max: usize) -> bool {
        if min > max || max - min < out.len().saturating_sub(1) {
            return false;
        }
        let dist = Uniform::new_inclusive(min, max);
        let mut draws = 0usize;
        for i in 0..out.len() {
            loop {
                if draws == MAX_UNIQUE_DRAWS {
                    return false;
                }
                draws += 1;
                let candidate = self.rng.sample(&dist);
                if out[..i].iter().all(|&v| v != candidate) {
                    out[i] = candidate;
                    break;
                }
            }
        }
        true
    }
}
