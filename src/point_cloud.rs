//! Point clouds and pinhole back-projection of inverse-depth grids.

use crate::settings::PointCloudSettings;
use crate::types::{CameraIntrinsics, InverseDepthGrid, Point3D};
use log::debug;
use std::ops::Index;

/// Ordered set of camera-relative points.
///
/// A cloud is built fresh for each estimation call. It can be re-filtered by
/// index with [`select`](Self::select) and [`without`](Self::without), e.g. to
/// drop the inliers of a plane that was already extracted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointCloud {
    points: Vec<Point3D>,
}

impl PointCloud {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    pub fn from_points(points: Vec<Point3D>) -> Self {
        Self { points }
    }

    /// Back-project every valid cell of `grid` through the pinhole model.
    ///
    /// A cell is kept when its inverse depth is above
    /// `settings.validity_epsilon` and the resulting depth `Z = 1 / d` is
    /// finite and no larger than `settings.max_depth`. Then
    /// `X = (u - cx) Z / fx` and `Y = ±(v - cy) Z / fy`, the sign following
    /// `settings.vertical_axis`.
    ///
    /// Intrinsics are used as given; see [`CameraIntrinsics::validate`].
    pub fn from_inverse_depth(
        grid: &InverseDepthGrid<'_>,
        intrinsics: &CameraIntrinsics,
        settings: &PointCloudSettings,
    ) -> Self {
        let y_sign = settings.vertical_axis.y_sign();
        let mut cloud = Self::with_capacity(grid.width() * grid.height() / 4);

        for (u, v, inverse_depth) in grid.cells() {
            // NaN fails this comparison as well.
            if !(inverse_depth > settings.validity_epsilon) {
                continue;
            }
            let z = 1.0 / inverse_depth;
            if !z.is_finite() || z > settings.max_depth {
                continue;
            }
            let x = (u as f32 - intrinsics.cx) * z / intrinsics.fx;
            let y = y_sign * (v as f32 - intrinsics.cy) * z / intrinsics.fy;
            cloud.push(Point3D::new(x, y, z));
        }

        debug!(
            "built point cloud with {} of {} cells ({}x{})",
            cloud.len(),
            grid.width() * grid.height(),
            grid.width(),
            grid.height()
        );
        cloud
    }

    pub fn push(&mut self, point: Point3D) {
        self.points.push(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Point3D> {
        self.points.get(index)
    }

    pub fn points(&self) -> &[Point3D] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point3D> {
        self.points.iter()
    }

    /// New cloud holding the points at `indices`, in that order.
    /// Out-of-range indices are skipped.
    pub fn select(&self, indices: &[usize]) -> Self {
        indices
            .iter()
            .filter_map(|&i| self.points.get(i).copied())
            .collect()
    }

    /// New cloud with the points at `indices` removed, order preserved.
    pub fn without(&self, indices: &[usize]) -> Self {
        let mut keep = vec![true; self.points.len()];
        for &i in indices {
            if let Some(k) = keep.get_mut(i) {
                *k = false;
            }
        }
        self.points
            .iter()
            .zip(keep)
            .filter_map(|(p, k)| k.then_some(*p))
            .collect()
    }
}

impl Index<usize> for PointCloud {
    type Output = Point3D;

    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}

impl FromIterator<Point3D> for PointCloud {
    fn from_iter<I: IntoIterator<Item = Point3D>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a PointCloud {
    type Item = &'a Point3D;
    type IntoIter = std::slice::Iter<'a, Point3D>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
