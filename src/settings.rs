//! Configuration types for point-cloud construction and plane fitting.
//!
//! Every struct deserializes with `#[serde(default)]`, so a settings file only
//! needs to name the values it overrides.

use crate::error::PlaneError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Direction of +Y in the generated point cloud.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAxis {
    /// +Y points toward the camera's "up": image rows are negated.
    #[default]
    Up,
    /// +Y follows image rows downward (plain pinhole convention).
    Down,
}

impl VerticalAxis {
    /// Sign applied to the back-projected Y coordinate.
    pub fn y_sign(self) -> f32 {
        match self {
            VerticalAxis::Up => -1.0,
            VerticalAxis::Down => 1.0,
        }
    }
}

/// Settings controlling back-projection of the inverse-depth grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointCloudSettings {
    /// Inverse depths at or below this value are treated as unknown.
    pub validity_epsilon: f32,
    /// Points with a relative depth beyond this ceiling are dropped.
    pub max_depth: f32,
    pub vertical_axis: VerticalAxis,
}

impl Default for PointCloudSettings {
    fn default() -> Self {
        Self {
            validity_epsilon: 1e-5,
            max_depth: 1000.0,
            vertical_axis: VerticalAxis::Up,
        }
    }
}

/// Settings for the fixed-budget RANSAC plane search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RansacSettings {
    /// Points strictly closer than this to a candidate plane are inliers.
    /// Same relative units as the point cloud.
    pub distance_threshold: f32,
    /// Minimum support for a plane to be reported.
    pub min_inliers: usize,
    /// Number of hypotheses drawn. There is no early termination.
    pub max_iterations: usize,
    /// Minimal samples whose cross product is shorter than this are collinear.
    pub degeneracy_epsilon: f32,
    /// Capacity of the caller's result buffer. Zero suppresses output.
    pub max_results: usize,
}

impl Default for RansacSettings {
    fn default() -> Self {
        Self {
            distance_threshold: 0.05,
            min_inliers: 100,
            max_iterations: 100,
            degeneracy_epsilon: 1e-6,
            max_results: 1,
        }
    }
}

/// Full configuration for [`find_plane`](crate::api::find_plane).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaneDetectorSettings {
    pub point_cloud: PointCloudSettings,
    pub ransac: RansacSettings,
}

impl PlaneDetectorSettings {
    pub fn from_json_str(json: &str) -> Result<Self, PlaneError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load settings from a JSON file.
    pub fn load(path: &Path) -> Result<Self, PlaneError> {
        let data = fs::read_to_string(path).map_err(|source| PlaneError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_constants() {
        let cfg = PlaneDetectorSettings::default();
        assert!((cfg.point_cloud.validity_epsilon - 1e-5).abs() < 1e-12);
        assert_eq!(cfg.point_cloud.max_depth, 1000.0);
        assert_eq!(cfg.point_cloud.vertical_axis, VerticalAxis::Up);
        assert_eq!(cfg.ransac.max_results, 1);
        assert!((cfg.ransac.degeneracy_epsilon - 1e-6).abs() < 1e-12);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = PlaneDetectorSettings::from_json_str(
            r#"{ "ransac": { "min_inliers": 10, "max_iterations": 50 },
                 "point_cloud": { "vertical_axis": "down" } }"#,
        )
        .unwrap();
        assert_eq!(cfg.ransac.min_inliers, 10);
        assert_eq!(cfg.ransac.max_iterations, 50);
        assert_eq!(cfg.ransac.distance_threshold, 0.05);
        assert_eq!(cfg.point_cloud.vertical_axis, VerticalAxis::Down);
        assert_eq!(cfg.point_cloud.max_depth, 1000.0);
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = PlaneDetectorSettings::from_json_str("{ \"ransac\": 3 }").unwrap_err();
        assert!(matches!(err, PlaneError::Config(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = PlaneDetectorSettings::load(Path::new("/nonexistent/plane.json")).unwrap_err();
        assert!(matches!(err, PlaneError::Io { .. }));
    }

    #[test]
    fn y_sign_follows_axis() {
        assert_eq!(VerticalAxis::Up.y_sign(), -1.0);
        assert_eq!(VerticalAxis::Down.y_sign(), 1.0);
    }
}
