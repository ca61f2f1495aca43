// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use tracing::{debug, trace};
use vmath_core::{MathError, Real, Vec3};

use crate::types::hit::Hit;
use crate::types::interval::Interval;
use crate::types::ray::Ray;

/// Below this `|n · dir|` a ray counts as parallel to a plane.
const PARALLEL_EPSILON: Real = 1e-7;

/// Infinite plane of points `p` with `normal · p = d`.
///
/// Invariants:
/// - `normal` is unit length. The constructors taking a normal use it as
///   given; [`Plane::from_points`] normalises its own.
/// - `d` is the signed distance of the plane from the origin along `normal`.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plane {
    /// Unit normal.
    pub normal: Vec3,
    /// Signed distance from the origin.
    pub d: Real,
}

impl Plane {
    /// Creates a plane from a unit normal and signed distance.
    pub const fn new(normal: Vec3, d: Real) -> Self {
        Self { normal, d }
    }

    /// Plane through `point` with unit `normal`.
    pub fn from_point_normal(point: Vec3, normal: Vec3) -> Self {
        Self::new(normal, normal.dot(&point))
    }

    /// Plane through three points, facing `(v1 − v0) × (v2 − v0)`.
    ///
    /// # Errors
    /// [`MathError::Degenerate`] when the points are (nearly) collinear.
    pub fn from_points(v0: Vec3, v1: Vec3, v2: Vec3) -> Result<Self, MathError> {
        let normal = (v1 - v0).cross(&(v2 - v0)).normalize();
        if normal == Vec3::ZERO {
            debug!(?v0, ?v1, ?v2, "plane through collinear points");
            return Err(MathError::Degenerate("plane points are collinear"));
        }
        Ok(Self::from_point_normal(v0, normal))
    }

    /// Same plane facing the other way.
    #[must_use]
    pub fn inverted(&self) -> Self {
        Self::new(-self.normal, -self.d)
    }

    /// The point of the plane closest to the origin (`normal · d`).
    pub fn point(&self) -> Vec3 {
        self.normal.scale(self.d)
    }

    /// Positive on the side the normal points to.
    pub fn signed_distance(&self, p: &Vec3) -> Real {
        self.normal.dot(p) - self.d
    }

    /// Unsigned distance from `p` to the plane.
    pub fn distance(&self, p: &Vec3) -> Real {
        self.signed_distance(p).abs()
    }

    /// Orthogonal projection of `p` onto the plane.
    pub fn project(&self, p: &Vec3) -> Vec3 {
        *p - self.normal.scale(self.signed_distance(p))
    }

    /// Intersects `ray` with the plane, accepting only `t` inside `window`.
    ///
    /// Returns `None` when the ray runs parallel to the plane or the crossing
    /// lies outside the window. The hit normal is the plane normal.
    pub fn intersect_ray(&self, ray: &Ray, window: Interval) -> Option<Hit> {
        let ndotdir = self.normal.dot(&ray.dir);
        if ndotdir.abs() < PARALLEL_EPSILON {
            trace!(ndotdir, "ray parallel to plane");
            return None;
        }
        let t = self.normal.dot(&(self.point() - ray.origin)) / ndotdir;
        if !window.contains(t) {
            return None;
        }
        Some(Hit {
            t,
            point: ray.at(t),
            normal: self.normal,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_points_faces_counter_clockwise_winding() {
        let plane = Plane::from_points(
            Vec3::new(0.0, 0.0, 2.0),
            Vec3::new(1.0, 0.0, 2.0),
            Vec3::new(0.0, 1.0, 2.0),
        );
        assert_eq!(plane, Ok(Plane::new(Vec3::UNIT_Z, 2.0)));
    }

    #[test]
    fn collinear_points_are_degenerate() {
        let plane = Plane::from_points(Vec3::ZERO, Vec3::UNIT_X, Vec3::new(2.0, 0.0, 0.0));
        assert!(matches!(plane, Err(MathError::Degenerate(_))));
    }

    #[test]
    fn inverted_plane_negates_signed_distance() {
        let plane = Plane::new(Vec3::UNIT_Y, 1.0);
        let p = Vec3::new(3.0, 4.0, -1.0);
        assert_eq!(plane.signed_distance(&p), 3.0);
        assert_eq!(plane.inverted().signed_distance(&p), -3.0);
        assert_eq!(plane.project(&p), Vec3::new(3.0, 1.0, -1.0));
    }
}
