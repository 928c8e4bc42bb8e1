//! # depth-plane - Dominant plane extraction from inverse-depth maps
//!
//! `depth-plane` turns a dense relative inverse-depth map (as produced by
//! monocular depth-estimation networks) into a 3D point cloud and finds the
//! single plane with the largest RANSAC support, e.g. the wall in front of
//! the camera.
//!
//! ## Quick Start
//!
//! ```rust
//! use depth_plane::samplers::UniformRandomSampler;
//! use depth_plane::{find_plane_with_sampler, CameraIntrinsics, PlaneDetectorSettings};
//!
//! // A 4x4 frame at constant inverse depth 0.5 is a fronto-parallel wall at Z = 2.
//! let (width, height) = (4, 4);
//! let depth = vec![0.5_f32; width * height];
//! let intrinsics = CameraIntrinsics::new(4.0, 4.0, 2.0, 2.0);
//!
//! let mut settings = PlaneDetectorSettings::default();
//! settings.ransac.min_inliers = 10;
//! settings.ransac.max_iterations = 50;
//!
//! // Fixed seed for a reproducible fit; `find_plane` seeds from the OS instead.
//! let mut sampler = UniformRandomSampler::from_seed(7);
//! let result =
//!     find_plane_with_sampler(&depth, width, height, &intrinsics, &settings, &mut sampler)?;
//!
//! let wall = result.plane.expect("a constant-depth frame is planar");
//! assert_eq!(wall.inlier_count, 16);
//! assert!((wall.plane.c.abs() - 1.0).abs() < 1e-5);
//! # Ok::<(), depth_plane::PlaneError>(())
//! ```
//!
//! ## Coordinate frame
//!
//! Pixels are back-projected with the pinhole model, `Z = 1 / inverse_depth`
//! (relative units, not metric). By default +Y points toward the camera's
//! "up", so a vertical wall has a small Y component in its normal; see
//! [`VerticalAxis`](settings::VerticalAxis).
//!
//! ## Extending the Library
//!
//! The RANSAC loop in [`core`](crate::core) is generic over three traits:
//!
//! - **[`Estimator`](core::Estimator)**: minimal sample to candidate models
//! - **[`Sampler`](core::Sampler)**: source of minimal samples, and of all randomness
//! - **[`Scoring<M>`](core::Scoring)**: support of a candidate model
//!
//! ### Example: Custom Sampler
//!
//! ```rust
//! use depth_plane::core::Sampler;
//! use depth_plane::point_cloud::PointCloud;
//!
//! /// Walks consecutive triples; handy for reproducing a specific hypothesis.
//! struct SlidingSampler {
//!     start: usize,
//! }
//!
//! impl Sampler for SlidingSampler {
//!     fn sample(
//!         &mut self,
//!         cloud: &PointCloud,
//!         sample_size: usize,
//!         out_indices: &mut [usize],
//!     ) -> bool {
//!         if cloud.len() < sample_size || out_indices.len() < sample_size {
//!             return false;
//!         }
//!         for (k, slot) in out_indices[..sample_size].iter_mut().enumerate() {
//!             *slot = (self.start + k) % cloud.len();
//!         }
//!         self.start += 1;
//!         true
//!     }
//! }
//! ```
//!
//! ## Modules
//!
//! - **[`api`]**: One-call entry points and the estimation result
//! - **[`core`](crate::core)**: Core traits and the `Ransac` driver
//! - **[`estimators`]**: The three-point plane estimator
//! - **[`samplers`]**: Uniform random sampling
//! - **[`scoring`]**: Inlier-count scoring
//! - **[`point_cloud`]**: Point clouds and back-projection
//! - **[`models`]**: Plane model types
//! - **[`settings`]**: Configuration types
//! - **[`types`]**: Intrinsics and the inverse-depth grid view

pub mod api;
pub mod core;
pub mod error;
pub mod estimators;
pub mod models;
pub mod point_cloud;
pub mod samplers;
pub mod scoring;
pub mod settings;
pub mod types;
pub mod utils;

// Re-export high-level API
pub use api::{estimate_plane, find_plane, find_plane_with_sampler, EmptyReason, EstimationResult};

// Re-export core traits for easy access
pub use crate::core::{Estimator, Sampler, Scoring};

pub use error::PlaneError;
pub use models::{DetectedPlane, Plane};
pub use point_cloud::PointCloud;
pub use settings::{PlaneDetectorSettings, PointCloudSettings, RansacSettings, VerticalAxis};
pub use types::{CameraIntrinsics, InverseDepthGrid, Point3D};
