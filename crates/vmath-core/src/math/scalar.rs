// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Scalar width selection and the tolerance constants shared by every module.
//!
//! `Real` is `f64` by default. Enabling the `single_precision` feature swaps it
//! for `f32`; all literals in this crate are written so they coerce to either
//! width, and tolerance constants below are chosen to stay meaningful in both.

/// Floating point type used by every vector, matrix, and quaternion.
#[cfg(not(feature = "single_precision"))]
pub type Real = f64;

/// Floating point type used by every vector, matrix, and quaternion.
#[cfg(feature = "single_precision")]
pub type Real = f32;

/// Mathematical constants at the selected scalar width.
pub mod consts {
    #[cfg(not(feature = "single_precision"))]
    pub use core::f64::consts::{E, FRAC_PI_2, FRAC_PI_4, PI, TAU};

    #[cfg(feature = "single_precision")]
    pub use core::f32::consts::{E, FRAC_PI_2, FRAC_PI_4, PI, TAU};
}

/// Threshold below which a sine is treated as zero (SLERP fallback).
pub const SMALL_NUMBER: Real = 1e-4;

/// Threshold below which a determinant is treated as zero.
pub const XSMALL_NUMBER: Real = 1e-8;

/// Comparison tolerance for results that should be exact up to rounding.
pub const ERROR_MARGIN: Real = 1e-6;

/// Degeneracy threshold: vectors and quaternions at or below this length are
/// considered zero by `normalize`.
pub const EPSILON: Real = 1e-6;
