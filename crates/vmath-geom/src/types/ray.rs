// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use core::any::Any;
use core::fmt;

use tracing::trace;
use vmath_core::{Mat4, Real, Vec3};

use crate::types::hit::Hit;

/// Start-up values for new rays.
///
/// Passed explicitly to [`Ray::with_config`]; there is no global default
/// medium. With the `serde` feature it can be loaded from any serde format,
/// and missing fields fall back to [`RayConfig::default`].
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RayConfig {
    /// Refractive index of the medium rays start in.
    pub ambient_ior: Real,
    /// Energy carried by a freshly spawned ray.
    pub initial_energy: Real,
}

impl Default for RayConfig {
    fn default() -> Self {
        Self {
            ambient_ior: 1.0,
            initial_energy: 1.0,
        }
    }
}

/// Ray `origin + t·dir` plus the medium state a tracer needs.
///
/// `dir` is not normalised; whether its length matters depends on the
/// [`crate::Interval`] used when intersecting.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ray {
    /// Start point.
    pub origin: Vec3,
    /// Direction (and, for segment rays, extent).
    pub dir: Vec3,
    /// Remaining energy.
    pub energy: Real,
    /// Number of bounces that produced this ray.
    pub depth: u32,
    /// Refractive index of the medium the ray currently travels through.
    pub ior: Real,
    /// Time stamp for motion blur.
    pub time: Real,
}

impl Ray {
    /// Creates a ray using [`RayConfig::default`].
    pub fn new(origin: Vec3, dir: Vec3) -> Self {
        Self::with_config(origin, dir, &RayConfig::default())
    }

    /// Creates a ray starting in the medium described by `config`.
    pub fn with_config(origin: Vec3, dir: Vec3, config: &RayConfig) -> Self {
        Self {
            origin,
            dir,
            energy: config.initial_energy,
            depth: 0,
            ior: config.ambient_ior,
            time: 0.0,
        }
    }

    /// Point at parameter `t`.
    pub fn at(&self, t: Real) -> Vec3 {
        self.origin + self.dir.scale(t)
    }

    /// Ray in the space of `m`: the origin moves as a point, the direction
    /// only through the upper 3x3 block.
    #[must_use]
    pub fn transformed(&self, m: &Mat4) -> Self {
        Self {
            origin: m.transform_point(&self.origin),
            dir: m.transform_direction(&self.dir),
            ..*self
        }
    }

    /// Mirror bounce spawned at `hit`.
    #[must_use]
    pub fn reflected(&self, hit: &Hit) -> Self {
        Self {
            origin: hit.point,
            dir: self.dir.reflect(&hit.normal),
            depth: self.depth + 1,
            ..*self
        }
    }

    /// Transmission through the surface at `hit` into a medium of index
    /// `to_ior`.
    ///
    /// The normal is flipped when the ray leaves through the back face. Under
    /// total internal reflection the ray bounces and stays in its medium.
    /// The direction keeps its length so segment rays keep their extent.
    #[must_use]
    pub fn refracted(&self, hit: &Hit, to_ior: Real) -> Self {
        let length = self.dir.length();
        let unit = self.dir.normalize();
        let normal = if hit.is_front_face(&unit) {
            hit.normal
        } else {
            -hit.normal
        };
        let ratio = self.ior / to_ior;
        let cos_inc = -unit.dot(&normal);
        let total_internal = 1.0 + ratio * ratio * (cos_inc * cos_inc - 1.0) < 0.0;
        Self {
            origin: hit.point,
            dir: unit.refract(&normal, ratio).scale(length),
            depth: self.depth + 1,
            ior: if total_internal { self.ior } else { to_ior },
            ..*self
        }
    }
}

/// Cleanup run on a [`PayloadRay`]'s data when it is released.
pub type ReleaseHook = Box<dyn FnOnce(Box<dyn Any + Send>) + Send>;

/// A [`Ray`] with one owned slot of caller data.
///
/// The data arrives together with a release hook. The hook receives the data
/// exactly once: when the data is replaced, when [`PayloadRay::release`] is
/// called, or when the `PayloadRay` is dropped. [`PayloadRay::take_payload`]
/// hands the data back instead, and the hook never runs.
pub struct PayloadRay {
    ray: Ray,
    slot: Option<(Box<dyn Any + Send>, ReleaseHook)>,
}

impl PayloadRay {
    /// Wraps `ray` with an empty slot.
    pub fn new(ray: Ray) -> Self {
        Self { ray, slot: None }
    }

    /// The wrapped ray.
    pub fn ray(&self) -> &Ray {
        &self.ray
    }

    /// Mutable access to the wrapped ray.
    pub fn ray_mut(&mut self) -> &mut Ray {
        &mut self.ray
    }

    /// Stores `data`, releasing whatever was attached before.
    pub fn attach<T, F>(&mut self, data: T, on_release: F)
    where
        T: Any + Send,
        F: FnOnce(Box<dyn Any + Send>) + Send + 'static,
    {
        self.release();
        self.slot = Some((Box::new(data), Box::new(on_release)));
    }

    /// Whether data is attached.
    pub fn has_payload(&self) -> bool {
        self.slot.is_some()
    }

    /// Borrows the attached data if it is a `T`.
    pub fn payload<T: Any>(&self) -> Option<&T> {
        self.slot.as_ref().and_then(|(data, _)| data.downcast_ref())
    }

    /// Mutably borrows the attached data if it is a `T`.
    pub fn payload_mut<T: Any>(&mut self) -> Option<&mut T> {
        self.slot.as_mut().and_then(|(data, _)| data.downcast_mut())
    }

    /// Removes the data without running its hook.
    pub fn take_payload(&mut self) -> Option<Box<dyn Any + Send>> {
        self.slot.take().map(|(data, _)| data)
    }

    /// Runs the hook on the attached data. Does nothing when the slot is empty.
    pub fn release(&mut self) {
        if let Some((data, hook)) = self.slot.take() {
            trace!(depth = self.ray.depth, "releasing ray payload");
            hook(data);
        }
    }

    /// Releases the payload and returns the bare ray.
    pub fn into_ray(mut self) -> Ray {
        self.release();
        self.ray
    }
}

impl From<Ray> for PayloadRay {
    fn from(ray: Ray) -> Self {
        Self::new(ray)
    }
}

impl Drop for PayloadRay {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for PayloadRay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PayloadRay")
            .field("ray", &self.ray)
            .field("has_payload", &self.has_payload())
            .finish()
    }
}
