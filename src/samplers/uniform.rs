//! Uniform random sampler drawing minimal samples without replacement.

use crate::core::Sampler;
use crate::point_cloud::PointCloud;
use crate::utils::UniformRandomGenerator;
use rand::rngs::StdRng;
use rand::Rng;

/// Uniform random sampler drawing minimal samples without replacement.
///
/// Indices are drawn independently and uniformly; a collision inside one
/// sample triggers a redraw of that slot.
pub struct UniformRandomSampler<R: Rng = StdRng> {
    rng: UniformRandomGenerator<R>,
}

impl Default for UniformRandomSampler<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl UniformRandomSampler<StdRng> {
    /// Construct a new sampler with a random seed.
    pub fn new() -> Self {
        Self {
            rng: UniformRandomGenerator::new(),
        }
    }

    /// Construct a sampler from a fixed seed (primarily for tests).
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: UniformRandomGenerator::from_seed(seed),
        }
    }
}

impl<R: Rng> UniformRandomSampler<R> {
    /// Construct a sampler on top of a caller-provided RNG.
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng: UniformRandomGenerator::from_rng(rng),
        }
    }
}

impl<R: Rng> Sampler for UniformRandomSampler<R> {
    fn sample(
        &mut self,
        cloud: &PointCloud,
        sample_size: usize,
        out_indices: &mut [usize],
    ) -> bool {
        let n = cloud.len();
        if sample_size == 0 || n == 0 || sample_size > n || out_indices.len() < sample_size {
            return false;
        }

        // Sample unique indices in the range [0, n-1].
        self.rng.gen_unique(&mut out_indices[..sample_size], 0, n - 1)
    }
}
