// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use tracing::debug;
use vmath_core::{MathError, Real, Vec3};

use crate::types::hit::Hit;
use crate::types::interval::Interval;
use crate::types::ray::Ray;

/// Sphere given by centre and radius. The radius is expected to be
/// non-negative but is not checked.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sphere {
    /// Centre.
    pub center: Vec3,
    /// Radius.
    pub radius: Real,
}

impl Sphere {
    /// Creates a sphere.
    pub const fn new(center: Vec3, radius: Real) -> Self {
        Self { center, radius }
    }

    /// Whether `p` lies inside or on the surface.
    pub fn contains_point(&self, p: &Vec3) -> bool {
        (*p - self.center).length_squared() <= self.radius * self.radius
    }

    /// Intersects `ray` with the surface.
    ///
    /// Solves `a·t² + b·t + c = 0` and keeps the nearer root when it lies in
    /// `window`, otherwise the farther one. `None` when the discriminant is
    /// negative, the direction is zero, or neither root is in the window.
    /// A ray starting inside the sphere therefore reports its exit point.
    pub fn intersect_ray(&self, ray: &Ray, window: Interval) -> Option<Hit> {
        let a = ray.dir.dot(&ray.dir);
        if a == 0.0 {
            return None;
        }
        let b = 2.0 * ray.dir.dot(&(ray.origin - self.center));
        let c = self.center.length_squared() + ray.origin.length_squared()
            - 2.0 * self.center.dot(&ray.origin)
            - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }
        let root = discriminant.sqrt();
        let near = (-b - root) / (2.0 * a);
        let far = (-b + root) / (2.0 * a);

        let t = [near, far].into_iter().find(|&t| window.contains(t))?;
        let point = ray.at(t);
        Some(Hit {
            t,
            point,
            normal: (point - self.center).normalize(),
        })
    }

    /// Sphere/sphere intersection is not provided.
    ///
    /// # Errors
    /// Always [`MathError::Unsupported`]; callers must not read this as a miss.
    pub fn intersect_sphere(&self, other: &Self) -> Result<Option<Hit>, MathError> {
        debug!(this = ?self, ?other, "sphere-sphere intersection requested");
        Err(MathError::Unsupported("sphere-sphere intersection"))
    }
}
