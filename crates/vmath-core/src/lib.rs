// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! vmath-core: small fixed-size linear algebra for graphics and simulation.
//!
//! Everything here is a pure function over `Copy` value types: vectors in two
//! to four dimensions, 3x3/4x4 matrices, quaternions, spherical vectors,
//! interpolation curves, and gradient noise. Geometry primitives built on top
//! of these (planes, spheres, rays, bases) live in `vmath-geom`.
//!
//! Scalar width is chosen at compile time: [`math::Real`] is `f64` unless the
//! `single_precision` feature is enabled.

pub mod math;

mod error;

pub use error::MathError;
pub use math::{Mat3, Mat4, PerlinNoise, Prng, Quat, Real, SphVec, Vec2, Vec3, Vec4};
