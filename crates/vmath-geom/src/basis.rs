// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use tracing::{debug, trace};
use vmath_core::math::SMALL_NUMBER;
use vmath_core::{Mat3, Mat4, MathError, Quat, Real, Vec3};

/// Which way [`Basis::from_dir`] points the `k` axis.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Handedness {
    /// `k` follows the input direction (forward is `+k`). The frame satisfies
    /// `i × j = k`, so [`Basis::to_mat3`] is a proper rotation.
    #[default]
    Left,
    /// `k` opposes the input direction (forward is `−k`).
    ///
    /// Only `k` is negated, so the frame is a reflection: `i × j = −k` and
    /// [`Basis::to_mat3`] has determinant `−1`. Its matrix is not a rotation
    /// and must not be passed to [`Mat3::to_quat`](vmath_core::Mat3::to_quat).
    Right,
}

/// Frame of three axes `i`, `j`, `k`.
///
/// Orthonormality is established by [`Basis::from_dir`] and preserved by the
/// rotations, but not re-checked; see [`Basis::is_orthonormal`].
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Basis {
    /// First axis ("right").
    pub i: Vec3,
    /// Second axis ("up").
    pub j: Vec3,
    /// Third axis ("forward" or "back", per [`Handedness`]).
    pub k: Vec3,
}

impl Basis {
    /// Frame from three axes, taken as given.
    pub const fn new(i: Vec3, j: Vec3, k: Vec3) -> Self {
        Self { i, j, k }
    }

    /// Orthonormal frame looking along `dir`.
    ///
    /// `k = normalize(dir)`, `i = normalize(up × k)`, `j = k × i` with
    /// `up = +Y`. When `dir` is within `SMALL_NUMBER` of ±Y, `+Z` is used as
    /// the reference axis instead. [`Handedness::Right`] then negates `k`
    /// alone, which turns the frame into a reflection.
    ///
    /// # Errors
    /// [`MathError::Degenerate`] when `dir` has (near) zero length.
    pub fn from_dir(dir: Vec3, handedness: Handedness) -> Result<Self, MathError> {
        let k = dir.normalize();
        if k == Vec3::ZERO {
            debug!(?dir, "basis from zero direction");
            return Err(MathError::Degenerate("basis direction has zero length"));
        }
        let mut up = Vec3::UNIT_Y;
        if up.dot(&k).abs() > 1.0 - SMALL_NUMBER {
            trace!(?dir, "direction parallel to +Y, using +Z as reference");
            up = Vec3::UNIT_Z;
        }
        let i = up.cross(&k).normalize();
        let j = k.cross(&i);
        let k = match handedness {
            Handedness::Left => k,
            Handedness::Right => -k,
        };
        Ok(Self { i, j, k })
    }

    fn map(&self, f: impl Fn(&Vec3) -> Vec3) -> Self {
        Self::new(f(&self.i), f(&self.j), f(&self.k))
    }

    /// Rotates all axes by `Rx · Ry · Rz` of the given angles.
    #[must_use]
    pub fn rotated_euler(&self, angles: Vec3) -> Self {
        let m = Mat3::rotation_euler(angles);
        self.map(|v| m.transform(v))
    }

    /// Rotates all axes by `angle` radians about unit `axis`.
    #[must_use]
    pub fn rotated_axis_angle(&self, axis: Vec3, angle: Real) -> Self {
        let m = Mat3::rotation_axis_angle(axis, angle);
        self.map(|v| m.transform(v))
    }

    /// Rotates all axes by the upper 3x3 block of `m`; translation is ignored.
    #[must_use]
    pub fn rotated_by_matrix(&self, m: &Mat4) -> Self {
        self.map(|v| m.transform_direction(v))
    }

    /// Rotates all axes by a unit quaternion.
    #[must_use]
    pub fn rotated_by_quat(&self, q: &Quat) -> Self {
        self.map(|v| v.rotate(q))
    }

    /// Matrix with `i`, `j`, `k` as columns. Frames built with
    /// [`Handedness::Right`] give determinant `−1`.
    pub fn to_mat3(&self) -> Mat3 {
        Mat3::from_columns(self.i, self.j, self.k)
    }

    /// Homogeneous form of [`Basis::to_mat3`] (no translation, bottom row
    /// `[0 0 0 1]`).
    pub fn to_mat4(&self) -> Mat4 {
        self.to_mat3().to_mat4()
    }

    /// Whether the axes are unit length and pairwise orthogonal within
    /// `tolerance`.
    pub fn is_orthonormal(&self, tolerance: Real) -> bool {
        let unit = [self.i, self.j, self.k]
            .iter()
            .all(|v| (v.length() - 1.0).abs() <= tolerance);
        unit && self.i.dot(&self.j).abs() <= tolerance
            && self.j.dot(&self.k).abs() <= tolerance
            && self.k.dot(&self.i).abs() <= tolerance
    }
}

impl Default for Basis {
    fn default() -> Self {
        Self::new(Vec3::UNIT_X, Vec3::UNIT_Y, Vec3::UNIT_Z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_z_reproduces_world_axes() {
        let basis = Basis::from_dir(Vec3::new(0.0, 0.0, 3.0), Handedness::Left);
        assert_eq!(basis, Ok(Basis::default()));
    }

    #[test]
    fn right_handed_flips_k_only() {
        let left = Basis::from_dir(Vec3::UNIT_X, Handedness::Left);
        let right = Basis::from_dir(Vec3::UNIT_X, Handedness::Right);
        let (Ok(left), Ok(right)) = (left, right) else {
            unreachable!("unit direction is never degenerate");
        };
        assert_eq!(right.i, left.i);
        assert_eq!(right.j, left.j);
        assert_eq!(right.k, -left.k);
    }

    #[test]
    fn right_handed_frame_is_a_reflection() {
        for dir in [Vec3::UNIT_X, Vec3::new(0.3, -0.4, 2.0), Vec3::UNIT_Y] {
            let left = Basis::from_dir(dir, Handedness::Left);
            let right = Basis::from_dir(dir, Handedness::Right);
            let (Ok(left), Ok(right)) = (left, right) else {
                unreachable!("nonzero direction is never degenerate");
            };
            assert!((left.to_mat3().determinant() - 1.0).abs() < 1e-6);
            assert!((right.to_mat3().determinant() + 1.0).abs() < 1e-6);
            let flipped = right.i.cross(&right.j) + right.k;
            assert!(flipped.length() < 1e-6, "{dir:?}");
        }
    }

    #[test]
    fn matrix_columns_are_axes() {
        let basis = Basis::new(Vec3::UNIT_Y, Vec3::UNIT_Z, Vec3::UNIT_X);
        let m = basis.to_mat4();
        assert_eq!(m.at(1, 0), 1.0);
        assert_eq!(m.at(2, 1), 1.0);
        assert_eq!(m.at(0, 2), 1.0);
        assert_eq!(m.at(3, 3), 1.0);
        assert_eq!(m.at(3, 0), 0.0);
    }
}
