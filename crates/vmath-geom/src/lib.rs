// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![deny(rust_2018_idioms, missing_docs)]
#![doc = r"Geometry primitives built on `vmath-core`.

This crate provides:
- Parametric windows (`Interval`) and intersection records (`Hit`).
- Planes (`Plane`) and spheres (`Sphere`) with ray intersection tests.
- Rays (`Ray`) carrying medium state, configured by an explicit `RayConfig`.
- Rays with an owned extra-data slot and a release hook (`PayloadRay`).
- Orthonormal frames (`Basis`) built from a forward direction.

Design notes:
- Every intersection takes an explicit `Interval`; there is no implied range.
- A miss is `None`. Only invalid or unsupported requests return `MathError`.
- No process-wide state: ray defaults come from the `RayConfig` passed in.
"]

/// Orthonormal frames.
pub mod basis;
/// Foundational geometric types.
pub mod types;

pub use basis::{Basis, Handedness};
pub use types::hit::Hit;
pub use types::interval::Interval;
pub use types::plane::Plane;
pub use types::ray::{PayloadRay, Ray, RayConfig, ReleaseHook};
pub use types::sphere::Sphere;
pub use vmath_core::MathError;
