// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Core geometry types used by the intersection routines.
//!
//! Parametric conventions:
//! - A ray point is `origin + t·dir`; `dir` is not required to be unit length.
//! - With [`interval::Interval::SEGMENT`] the direction encodes the maximum
//!   travel distance, so only `t ∈ [1e-7, 1]` counts.
//! - With [`interval::Interval::FORWARD`] the ray is a half-line.
//! - The `1e-7` lower bound keeps a ray from re-hitting the surface it was
//!   spawned on.

#[doc = "Intersection records."]
pub mod hit;
#[doc = "Closed parameter windows."]
pub mod interval;
#[doc = "Infinite planes in `n · p = d` form."]
pub mod plane;
#[doc = "Rays, ray configuration, and rays with attached data."]
pub mod ray;
#[doc = "Spheres."]
pub mod sphere;
