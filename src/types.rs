//! Core shared types: the point type, camera intrinsics and the borrowed
//! inverse-depth grid handed in by the caller.

use crate::error::PlaneError;
use nalgebra::Point3;
use serde::{Deserialize, Serialize};

/// Camera-relative 3D point in relative (non-metric) units.
pub type Point3D = Point3<f32>;

/// Pinhole intrinsics in pixel units.
///
/// These are supplied by the caller (usually from a calibration step that
/// lives outside this crate). Only the focal lengths are checked, since they
/// appear as denominators during back-projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraIntrinsics {
    pub fx: f32,
    pub fy: f32,
    pub cx: f32,
    pub cy: f32,
}

impl CameraIntrinsics {
    pub fn new(fx: f32, fy: f32, cx: f32, cy: f32) -> Self {
        Self { fx, fy, cx, cy }
    }

    /// Reject zero or non-finite focal lengths.
    pub fn validate(&self) -> Result<(), PlaneError> {
        let usable = |f: f32| f.is_finite() && f != 0.0;
        if usable(self.fx) && usable(self.fy) {
            Ok(())
        } else {
            Err(PlaneError::InvalidFocalLength {
                fx: self.fx,
                fy: self.fy,
            })
        }
    }
}

/// Read-only view over a row-major grid of relative inverse depths.
///
/// Larger values are closer to the camera. Non-positive or tiny values mark
/// pixels without a usable depth estimate.
#[derive(Debug, Clone, Copy)]
pub struct InverseDepthGrid<'a> {
    data: &'a [f32],
    width: usize,
    height: usize,
}

impl<'a> InverseDepthGrid<'a> {
    /// Wrap `data` as a `width` x `height` grid, checking that the shape matches.
    pub fn new(data: &'a [f32], width: usize, height: usize) -> Result<Self, PlaneError> {
        if width == 0 || height == 0 {
            return Err(PlaneError::EmptyGrid { width, height });
        }
        let expected = width.checked_mul(height);
        if expected != Some(data.len()) {
            return Err(PlaneError::ShapeMismatch {
                width,
                height,
                expected: expected.unwrap_or(usize::MAX),
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Iterate `(u, v, inverse_depth)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, f32)> + 'a {
        let width = self.width;
        self.data
            .chunks_exact(width)
            .enumerate()
            .flat_map(|(v, row)| row.iter().enumerate().map(move |(u, &d)| (u, v, d)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_rejects_length_mismatch() {
        let data = [1.0_f32; 5];
        match InverseDepthGrid::new(&data, 2, 3) {
            Err(PlaneError::ShapeMismatch {
                expected, actual, ..
            }) => {
                assert_eq!(expected, 6);
                assert_eq!(actual, 5);
            }
            other => panic!("expected shape mismatch, got {other:?}"),
        }
    }

    #[test]
    fn grid_rejects_zero_extent() {
        let data: [f32; 0] = [];
        assert!(matches!(
            InverseDepthGrid::new(&data, 0, 4),
            Err(PlaneError::EmptyGrid { .. })
        ));
        assert!(matches!(
            InverseDepthGrid::new(&data, 4, 0),
            Err(PlaneError::EmptyGrid { .. })
        ));
    }

    #[test]
    fn grid_rejects_overflowing_dimensions() {
        let data = [1.0_f32; 4];
        assert!(matches!(
            InverseDepthGrid::new(&data, usize::MAX, 2),
            Err(PlaneError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn cells_are_row_major() {
        let data = [0.0_f32, 1.0, 2.0, 3.0, 4.0, 5.0];
        let grid = InverseDepthGrid::new(&data, 3, 2).unwrap();
        let cells: Vec<_> = grid.cells().collect();
        assert_eq!(cells[1], (1, 0, 1.0));
        assert_eq!(cells[3], (0, 1, 3.0));
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[5], (2, 1, 5.0));
    }

    #[test]
    fn intrinsics_reject_zero_focal_length() {
        assert!(CameraIntrinsics::new(500.0, 500.0, 320.0, 240.0)
            .validate()
            .is_ok());
        assert!(CameraIntrinsics::new(0.0, 500.0, 320.0, 240.0)
            .validate()
            .is_err());
        assert!(CameraIntrinsics::new(500.0, f32::NAN, 320.0, 240.0)
            .validate()
            .is_err());
    }
}
