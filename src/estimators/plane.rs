//! Plane estimator for 3D point clouds.

use crate::core::Estimator;
use crate::models::Plane;
use crate::point_cloud::PointCloud;

/// Plane estimator for 3D point clouds.
///
/// Estimates planes in the form ax + by + cz + d = 0 from three points.
/// The plane parameters are normalized so that a² + b² + c² = 1.
pub struct PlaneEstimator {
    degeneracy_epsilon: f32,
}

impl Default for PlaneEstimator {
    fn default() -> Self {
        Self::new(1e-6)
    }
}

impl PlaneEstimator {
    /// `degeneracy_epsilon` is the smallest accepted length of the raw cross
    /// product; shorter normals mark collinear or coincident samples.
    pub fn new(degeneracy_epsilon: f32) -> Self {
        Self { degeneracy_epsilon }
    }
}

impl Estimator for PlaneEstimator {
    type Model = Plane;

    fn sample_size(&self) -> usize {
        3 // A plane requires 3 points
    }

    fn is_valid_sample(&self, cloud: &PointCloud, sample: &[usize]) -> bool {
        if sample.len() < self.sample_size() {
            return false;
        }
        let sample = &sample[..self.sample_size()];
        if sample.iter().any(|&i| i >= cloud.len()) {
            return false;
        }
        // Check for distinct indices
        for i in 0..sample.len() {
            for j in (i + 1)..sample.len() {
                if sample[i] == sample[j] {
                    return false;
                }
            }
        }
        true
    }

    fn estimate_model(&self, cloud: &PointCloud, sample: &[usize]) -> Vec<Self::Model> {
        let [i1, i2, i3] = match sample {
            [a, b, c, ..] => [*a, *b, *c],
            _ => return Vec::new(),
        };
        match (cloud.get(i1), cloud.get(i2), cloud.get(i3)) {
            (Some(p1), Some(p2), Some(p3)) => {
                Plane::from_points(p1, p2, p3, self.degeneracy_epsilon)
                    .into_iter()
                    .collect()
            }
            _ => Vec::new(),
        }
    }

    fn is_valid_model(
        &self,
        model: &Self::Model,
        _cloud: &PointCloud,
        _sample: &[usize],
    ) -> bool {
        // Check that the plane is finite and its normal is unit length
        let norm_sq = model.normal().norm_squared();
        model.is_finite() && (norm_sq - 1.0).abs() < 1e-4
    }
}
