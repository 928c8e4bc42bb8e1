//! Error type for the plane detection pipeline.
//!
//! Only malformed input is an error. An empty or undersized point cloud, a
//! degenerate sample, or a plane that never reaches the inlier threshold are
//! ordinary outcomes reported through [`EstimationResult`](crate::api::EstimationResult).

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum PlaneError {
    #[error("depth grid has zero extent ({width}x{height})")]
    EmptyGrid { width: usize, height: usize },
    #[error("depth buffer holds {actual} values but a {width}x{height} grid needs {expected}")]
    ShapeMismatch {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },
    #[error("focal lengths must be finite and non-zero (fx = {fx}, fy = {fy})")]
    InvalidFocalLength { fx: f32, fy: f32 },
    #[error("failed to read settings {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings: {0}")]
    Config(#[from] serde_json::Error),
}
