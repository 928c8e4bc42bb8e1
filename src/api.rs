//! High-level entry points.
//!
//! [`find_plane`] is the per-frame call: it validates the raw inverse-depth
//! buffer, back-projects it and fits the dominant plane. [`estimate_plane`]
//! runs the plane search alone on an existing [`PointCloud`].

use crate::core::{Ransac, Sampler};
use crate::error::PlaneError;
use crate::estimators::PlaneEstimator;
use crate::models::{DetectedPlane, Plane};
use crate::point_cloud::PointCloud;
use crate::samplers::UniformRandomSampler;
use crate::scoring::RansacInlierCountScoring;
use crate::settings::{PlaneDetectorSettings, RansacSettings};
use crate::types::{CameraIntrinsics, InverseDepthGrid, Point3D};
use log::{debug, warn};

/// Why an estimation produced no plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyReason {
    /// The cloud had fewer than three points or fewer than `min_inliers`.
    InsufficientData,
    /// No hypothesis reached `min_inliers` support.
    NoQualifyingPlane,
    /// `max_results` was zero.
    NoCapacity,
}

/// Result of a plane estimation: zero or one plane plus diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct EstimationResult {
    /// The best plane, if it met the support requirement.
    pub plane: Option<DetectedPlane>,
    /// Indices into the point cloud of the plane's inliers (empty without a plane).
    pub inliers: Vec<usize>,
    /// Set exactly when `plane` is `None`.
    pub empty_reason: Option<EmptyReason>,
    /// Number of points in the cloud the search ran on.
    pub point_count: usize,
    /// Number of iterations performed.
    pub iterations: usize,
    /// Iterations skipped on degenerate or unusable samples.
    pub skipped_iterations: usize,
}

impl EstimationResult {
    fn empty(reason: EmptyReason, point_count: usize) -> Self {
        Self {
            plane: None,
            inliers: Vec::new(),
            empty_reason: Some(reason),
            point_count,
            iterations: 0,
            skipped_iterations: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.plane.is_none()
    }

    /// Detected planes as a slice of length zero or one.
    pub fn planes(&self) -> &[DetectedPlane] {
        self.plane.as_slice()
    }
}

/// Fit the dominant plane in an inverse-depth map using an OS-seeded sampler.
///
/// # Arguments
/// * `depth` - Row-major relative inverse depths, `width * height` values
/// * `width`, `height` - Grid dimensions in pixels
/// * `intrinsics` - Pinhole intrinsics matching the grid resolution
/// * `settings` - Back-projection and RANSAC settings
///
/// # Errors
/// Fails only on malformed input: a buffer whose length does not match the
/// dimensions, a zero dimension, or a zero focal length. Too few valid points
/// and unsupported planes are reported through an empty [`EstimationResult`].
pub fn find_plane(
    depth: &[f32],
    width: usize,
    height: usize,
    intrinsics: &CameraIntrinsics,
    settings: &PlaneDetectorSettings,
) -> Result<EstimationResult, PlaneError> {
    let mut sampler = UniformRandomSampler::new();
    find_plane_with_sampler(depth, width, height, intrinsics, settings, &mut sampler)
}

/// Same as [`find_plane`] with a caller-provided sampler, e.g. a seeded
/// [`UniformRandomSampler`] for reproducible results.
pub fn find_plane_with_sampler<S: Sampler>(
    depth: &[f32],
    width: usize,
    height: usize,
    intrinsics: &CameraIntrinsics,
    settings: &PlaneDetectorSettings,
    sampler: &mut S,
) -> Result<EstimationResult, PlaneError> {
    let grid = InverseDepthGrid::new(depth, width, height)?;
    intrinsics.validate()?;
    debug!(
        "fitting plane on {}x{} grid, intrinsics fx={} fy={} cx={} cy={}",
        width, height, intrinsics.fx, intrinsics.fy, intrinsics.cx, intrinsics.cy
    );

    let cloud = PointCloud::from_inverse_depth(&grid, intrinsics, &settings.point_cloud);
    Ok(estimate_plane(&cloud, &settings.ransac, sampler))
}

/// Fit the dominant plane of `cloud` with a fixed-budget RANSAC.
///
/// At most one plane is returned, and only if its support is at least
/// `settings.min_inliers`.
pub fn estimate_plane<S: Sampler>(
    cloud: &PointCloud,
    settings: &RansacSettings,
    sampler: &mut S,
) -> EstimationResult {
    let n = cloud.len();
    debug!(
        "ransac: threshold={} min_inliers={} max_iterations={} points={}",
        settings.distance_threshold, settings.min_inliers, settings.max_iterations, n
    );

    if n < 3 || n < settings.min_inliers {
        warn!(
            "point cloud has {} points, need at least 3 and min_inliers ({}); no plane fitted",
            n, settings.min_inliers
        );
        return EstimationResult::empty(EmptyReason::InsufficientData, n);
    }
    if settings.max_results == 0 {
        warn!("result capacity is zero; skipping plane search");
        return EstimationResult::empty(EmptyReason::NoCapacity, n);
    }

    let estimator = PlaneEstimator::new(settings.degeneracy_epsilon);
    let scoring = RansacInlierCountScoring::new(
        settings.distance_threshold,
        |p: &Point3D, plane: &Plane| plane.distance(p),
    );
    let mut ransac = Ransac::new(*settings, estimator, sampler, scoring);
    ransac.run(cloud);

    let mut result = EstimationResult {
        plane: None,
        inliers: Vec::new(),
        empty_reason: None,
        point_count: n,
        iterations: ransac.iteration,
        skipped_iterations: ransac.skipped_iterations,
    };

    match (ransac.best_model, ransac.best_score) {
        (Some(plane), Some(score)) if score.inlier_count >= settings.min_inliers => {
            debug!(
                "plane found: {:.4}x + {:.4}y + {:.4}z + {:.4} = 0 with {} inliers (min {})",
                plane.a, plane.b, plane.c, plane.d, score.inlier_count, settings.min_inliers
            );
            result.plane = Some(DetectedPlane::new(plane, score.inlier_count));
            result.inliers = ransac.best_inliers;
        }
        (_, best) => {
            debug!(
                "no qualifying plane: best support {} < min {} ({} of {} iterations skipped)",
                best.map_or(0, |s| s.inlier_count),
                settings.min_inliers,
                result.skipped_iterations,
                result.iterations
            );
            result.empty_reason = Some(EmptyReason::NoQualifyingPlane);
        }
    }
    result
}
