//! Geometric models produced by the estimator.

use crate::types::Point3D;
use nalgebra::Vector3;

/// Plane `a·x + b·y + c·z + d = 0` with a unit-length normal `(a, b, c)`.
///
/// Because the normal is normalized, `|a·x + b·y + c·z + d|` is directly the
/// perpendicular distance of a point to the plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
}

impl Plane {
    pub fn new(a: f32, b: f32, c: f32, d: f32) -> Self {
        Self { a, b, c, d }
    }

    /// Plane through three points.
    ///
    /// The normal is `(p2 - p1) × (p3 - p1)` normalized, so swapping two points
    /// flips its orientation. Returns `None` when the un-normalized normal is
    /// shorter than `min_normal_norm` (collinear or coincident points).
    pub fn from_points(
        p1: &Point3D,
        p2: &Point3D,
        p3: &Point3D,
        min_normal_norm: f32,
    ) -> Option<Self> {
        let normal = (p2 - p1).cross(&(p3 - p1));
        let norm = normal.norm();
        // Also rejects NaN.
        if !(norm >= min_normal_norm) || norm == 0.0 {
            return None;
        }
        let n = normal / norm;
        let d = -n.dot(&p1.coords);
        Some(Self::new(n.x, n.y, n.z, d))
    }

    pub fn normal(&self) -> Vector3<f32> {
        Vector3::new(self.a, self.b, self.c)
    }

    pub fn signed_distance(&self, p: &Point3D) -> f32 {
        self.a * p.x + self.b * p.y + self.c * p.z + self.d
    }

    pub fn distance(&self, p: &Point3D) -> f32 {
        self.signed_distance(p).abs()
    }

    /// Same plane with the opposite normal orientation.
    pub fn flipped(&self) -> Self {
        Self::new(-self.a, -self.b, -self.c, -self.d)
    }

    pub fn is_finite(&self) -> bool {
        self.a.is_finite() && self.b.is_finite() && self.c.is_finite() && self.d.is_finite()
    }

    pub fn to_array(&self) -> [f32; 4] {
        [self.a, self.b, self.c, self.d]
    }
}

/// A plane accepted by the estimator together with its support.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DetectedPlane {
    pub plane: Plane,
    pub inlier_count: usize,
}

impl DetectedPlane {
    pub fn new(plane: Plane, inlier_count: usize) -> Self {
        Self {
            plane,
            inlier_count,
        }
    }
}
