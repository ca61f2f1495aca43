// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use thiserror::Error;

use crate::math::Real;

/// Failures surfaced by checked math operations.
///
/// Geometric misses (a ray that does not hit anything) are not errors; those
/// are reported as `None` by the intersection routines.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MathError {
    /// The matrix (or quaternion) has no inverse.
    #[error("singular value: determinant {determinant} is too close to zero")]
    Singular {
        /// Determinant (or squared norm) that failed the check.
        determinant: Real,
    },
    /// A value required to be unit length was not.
    #[error("{what} must be unit length, got length {length}")]
    NotUnitLength {
        /// Which argument failed the check.
        what: &'static str,
        /// Measured length.
        length: Real,
    },
    /// Inputs collapse to a degenerate configuration (zero vector, collinear points).
    #[error("degenerate input: {0}")]
    Degenerate(&'static str),
    /// The operation is declared but not supported.
    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),
}
