// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Linear algebra primitives, quaternions, interpolation curves, gradient
//! noise, and a seedable PRNG.
//!
//! Matrices are stored row-major and act on column vectors (`M · v`), so the
//! translation of an affine transform lives in the last column.

mod interp;
mod mat3;
mod mat4;
mod noise;
mod prng;
mod quat;
pub mod scalar;
mod sph;
mod vec2;
mod vec3;
mod vec4;

pub use interp::{bezier, bspline, gaussian, integral, lerp, smoothstep, spline};
pub use mat3::Mat3;
pub use mat4::Mat4;
pub use noise::{fbm1, fbm2, fbm3, noise1, noise2, noise3, turbulence1, turbulence2, turbulence3, PerlinNoise};
pub use prng::Prng;
pub use quat::Quat;
pub use scalar::{consts, Real, EPSILON, ERROR_MARGIN, SMALL_NUMBER, XSMALL_NUMBER};
pub use sph::SphVec;
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::Vec4;

/// Clamps `value` to the inclusive `[min, max]` range.
pub fn clamp(value: Real, min: Real, max: Real) -> Real {
    assert!(min <= max, "invalid clamp range: {min} > {max}");
    value.max(min).min(max)
}

/// Converts degrees to radians.
pub fn deg_to_rad(value: Real) -> Real {
    value * (consts::PI / 180.0)
}

/// Converts radians to degrees.
pub fn rad_to_deg(value: Real) -> Real {
    value * (360.0 / consts::TAU)
}
