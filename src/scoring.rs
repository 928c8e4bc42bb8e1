//! Scoring primitives.
//!
//! This module provides the inlier-count score and a RANSAC-style scoring
//! implementation that plugs into the generic `Scoring` trait from `core`.

use crate::core::Scoring;
use crate::point_cloud::PointCloud;
use crate::types::Point3D;

/// Consensus score: the number of inliers supporting a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Score {
    pub inlier_count: usize,
}

impl Score {
    pub fn new(inlier_count: usize) -> Self {
        Self { inlier_count }
    }
}

/// RANSAC-style scoring that counts inliers using a user-provided residual
/// function.
///
/// The residual function takes `(point, model)` and returns a non-negative
/// residual. A point is an inlier when its residual is strictly below the
/// threshold.
pub struct RansacInlierCountScoring<M, F>
where
    F: Fn(&Point3D, &M) -> f32,
{
    threshold: f32,
    residual_fn: F,
    _marker: std::marker::PhantomData<fn(&M)>,
}

impl<M, F> RansacInlierCountScoring<M, F>
where
    F: Fn(&Point3D, &M) -> f32,
{
    pub fn new(threshold: f32, residual_fn: F) -> Self {
        Self {
            threshold,
            residual_fn,
            _marker: std::marker::PhantomData,
        }
    }
}

impl<M, F> Scoring<M> for RansacInlierCountScoring<M, F>
where
    F: Fn(&Point3D, &M) -> f32,
{
    type Score = Score;

    fn score(&self, cloud: &PointCloud, model: &M, inliers_out: &mut Vec<usize>) -> Self::Score {
        inliers_out.clear();
        for (i, p) in cloud.iter().enumerate() {
            if (self.residual_fn)(p, model) < self.threshold {
                inliers_out.push(i);
            }
        }
        Score::new(inliers_out.len())
    }
}

#[cfg(test)]
mod tests {
    use super::{RansacInlierCountScoring, Score};
    use crate::core::Scoring;
    use crate::point_cloud::PointCloud;
    use crate::types::Point3D;

    #[derive(Clone, Debug)]
    struct UnitModel;

    #[test]
    fn ransac_inlier_count_scoring_counts_correctly() {
        // Each point's x coordinate is treated as its residual.
        let cloud: PointCloud = [0.1_f32, 0.4, 0.6, 1.0, 0.3]
            .iter()
            .map(|&r| Point3D::new(r, 0.0, 0.0))
            .collect();

        let scoring = RansacInlierCountScoring::new(0.5, |p: &Point3D, _m: &UnitModel| p.x);
        let mut inliers = Vec::new();
        let s: Score = scoring.score(&cloud, &UnitModel, &mut inliers);

        assert_eq!(s.inlier_count, 3);
        assert_eq!(inliers, vec![0, 1, 4]);
    }

    #[test]
    fn threshold_is_strict() {
        let cloud: PointCloud = [0.5_f32, 0.49]
            .iter()
            .map(|&r| Point3D::new(r, 0.0, 0.0))
            .collect();
        let scoring = RansacInlierCountScoring::new(0.5, |p: &Point3D, _m: &UnitModel| p.x);
        let mut inliers = vec![7, 8, 9];
        let s = scoring.score(&cloud, &UnitModel, &mut inliers);

        assert_eq!(s, Score::new(1));
        assert_eq!(inliers, vec![1]);
    }

    #[test]
    fn scores_order_by_inlier_count() {
        assert!(Score::new(5) > Score::new(4));
        assert_eq!(Score::new(3).max(Score::new(2)), Score::new(3));
    }
}
