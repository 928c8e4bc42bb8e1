//! Estimators for geometric models.
//!
//! - Plane estimation from three points

pub mod plane;

pub use plane::PlaneEstimator;
