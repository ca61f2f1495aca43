// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use std::io;

use tracing::debug;

use crate::math::{Mat4, Quat, Real, Vec3, XSMALL_NUMBER};
use crate::MathError;

/// Row‑major 3×3 matrix acting on column vectors.
///
/// Doubles as a pure 3D rotation/scale and as a homogeneous 2D transform (see
/// [`Mat3::translation_2d`] and [`crate::math::Vec2::transform`]).
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat3 {
    data: [Real; 9],
}

impl Mat3 {
    /// Returns the identity matrix.
    pub const fn identity() -> Self {
        Self {
            data: [
                1.0, 0.0, 0.0, //
                0.0, 1.0, 0.0, //
                0.0, 0.0, 1.0,
            ],
        }
    }

    /// Creates a matrix from rows.
    pub const fn new(rows: [[Real; 3]; 3]) -> Self {
        let [r0, r1, r2] = rows;
        Self {
            data: [
                r0[0], r0[1], r0[2], //
                r1[0], r1[1], r1[2], //
                r2[0], r2[1], r2[2],
            ],
        }
    }

    /// Builds the matrix whose columns are `i`, `j`, and `k`.
    pub fn from_columns(i: Vec3, j: Vec3, k: Vec3) -> Self {
        Self::new([
            [i.x(), j.x(), k.x()],
            [i.y(), j.y(), k.y()],
            [i.z(), j.z(), k.z()],
        ])
    }

    /// Returns the matrix as rows.
    pub fn to_rows(self) -> [[Real; 3]; 3] {
        let mut rows = [[0.0; 3]; 3];
        for (r, row) in rows.iter_mut().enumerate() {
            row.copy_from_slice(&self.data[r * 3..r * 3 + 3]);
        }
        rows
    }

    /// Returns the matrix as a flat row‑major array.
    pub fn to_array(self) -> [Real; 9] {
        self.data
    }

    /// Element at `row`, `col`.
    pub fn at(&self, row: usize, col: usize) -> Real {
        self.data[row * 3 + col]
    }

    /// Overwrites the element at `row`, `col`.
    pub fn set(&mut self, row: usize, col: usize, value: Real) {
        self.data[row * 3 + col] = value;
    }

    /// Returns row `idx`.
    pub fn row(&self, idx: usize) -> Vec3 {
        Vec3::new(self.at(idx, 0), self.at(idx, 1), self.at(idx, 2))
    }

    /// Returns column `idx`.
    pub fn column(&self, idx: usize) -> Vec3 {
        Vec3::new(self.at(0, idx), self.at(1, idx), self.at(2, idx))
    }

    /// Copy of the matrix with row `idx` replaced.
    pub fn with_row(&self, idx: usize, row: Vec3) -> Self {
        let mut out = *self;
        for col in 0..3 {
            out.set(idx, col, row.component(col));
        }
        out
    }

    /// Copy of the matrix with column `idx` replaced.
    pub fn with_column(&self, idx: usize, column: Vec3) -> Self {
        let mut out = *self;
        for row in 0..3 {
            out.set(row, idx, column.component(row));
        }
        out
    }

    /// Builds a non-uniform scale matrix.
    pub const fn scaling(sx: Real, sy: Real, sz: Real) -> Self {
        Self::new([[sx, 0.0, 0.0], [0.0, sy, 0.0], [0.0, 0.0, sz]])
    }

    /// Homogeneous 2D translation.
    pub const fn translation_2d(tx: Real, ty: Real) -> Self {
        Self::new([[1.0, 0.0, tx], [0.0, 1.0, ty], [0.0, 0.0, 1.0]])
    }

    /// Homogeneous 2D counter-clockwise rotation by `angle` radians.
    pub fn rotation_2d(angle: Real) -> Self {
        Self::rotation_z(angle)
    }

    /// Rotation around the X axis by `angle` radians.
    pub fn rotation_x(angle: Real) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([[1.0, 0.0, 0.0], [0.0, c, -s], [0.0, s, c]])
    }

    /// Rotation around the Y axis by `angle` radians.
    pub fn rotation_y(angle: Real) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([[c, 0.0, s], [0.0, 1.0, 0.0], [-s, 0.0, c]])
    }

    /// Rotation around the Z axis by `angle` radians.
    pub fn rotation_z(angle: Real) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([[c, -s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Rodrigues rotation about a unit `axis` by `angle` radians.
    pub fn rotation_axis_angle(axis: Vec3, angle: Real) -> Self {
        let [x, y, z] = axis.to_array();
        let (sina, cosa) = angle.sin_cos();
        let omc = 1.0 - cosa;
        Self::new([
            [
                x * x + (1.0 - x * x) * cosa,
                x * y * omc - z * sina,
                x * z * omc + y * sina,
            ],
            [
                x * y * omc + z * sina,
                y * y + (1.0 - y * y) * cosa,
                y * z * omc - x * sina,
            ],
            [
                x * z * omc - y * sina,
                y * z * omc + x * sina,
                z * z + (1.0 - z * z) * cosa,
            ],
        ])
    }

    /// Builds `Rx(angles.x) · Ry(angles.y) · Rz(angles.z)`.
    pub fn rotation_euler(angles: Vec3) -> Self {
        Self::rotation_x(angles.x())
            .multiply(&Self::rotation_y(angles.y()))
            .multiply(&Self::rotation_z(angles.z()))
    }

    /// Multiplies the matrix with another matrix (`self * rhs`).
    pub fn multiply(&self, rhs: &Self) -> Self {
        let mut out = [0.0; 9];
        for row in 0..3 {
            for col in 0..3 {
                let mut sum = 0.0;
                for k in 0..3 {
                    sum += self.at(row, k) * rhs.at(k, col);
                }
                out[row * 3 + col] = sum;
            }
        }
        Self { data: out }
    }

    /// Multiplies every element by `scalar`.
    pub fn scale_by(&self, scalar: Real) -> Self {
        let mut out = self.data;
        for v in &mut out {
            *v *= scalar;
        }
        Self { data: out }
    }

    /// `self · v`.
    pub fn transform(&self, v: &Vec3) -> Vec3 {
        Vec3::new(self.row(0).dot(v), self.row(1).dot(v), self.row(2).dot(v))
    }

    /// Returns the transpose.
    pub fn transpose(&self) -> Self {
        let mut out = [0.0; 9];
        for row in 0..3 {
            for col in 0..3 {
                out[col * 3 + row] = self.at(row, col);
            }
        }
        Self { data: out }
    }

    /// Determinant by cofactor expansion along the first row.
    pub fn determinant(&self) -> Real {
        let m = |r: usize, c: usize| self.at(r, c);
        m(0, 0) * (m(1, 1) * m(2, 2) - m(2, 1) * m(1, 2))
            - m(0, 1) * (m(1, 0) * m(2, 2) - m(2, 0) * m(1, 2))
            + m(0, 2) * (m(1, 0) * m(2, 1) - m(2, 0) * m(1, 1))
    }

    /// Inverse via the adjugate.
    ///
    /// [`MathError::Singular`] when `|det|` is at most `XSMALL_NUMBER` times
    /// the smaller of the row-length and column-length products, so the
    /// cutoff follows the scale of the matrix.
    pub fn inverse(&self) -> Result<Self, MathError> {
        let determinant = self.determinant();
        let rows: Real = (0..3).map(|i| self.row(i).length()).product();
        let cols: Real = (0..3).map(|i| self.column(i).length()).product();
        let bound = rows.min(cols);
        if determinant.abs() <= XSMALL_NUMBER * bound {
            debug!(determinant, bound, "refusing to invert singular 3x3 matrix");
            return Err(MathError::Singular { determinant });
        }
        // Columns of the adjugate are cross products of the rows.
        let r0 = self.row(0);
        let r1 = self.row(1);
        let r2 = self.row(2);
        let adj = Self::from_columns(r1.cross(&r2), r2.cross(&r0), r0.cross(&r1));
        Ok(adj.scale_by(1.0 / determinant))
    }

    /// Extracts the rotation as a unit quaternion.
    ///
    /// The matrix must be a pure rotation. Branches on the largest diagonal
    /// term so the square root argument never approaches zero.
    pub fn to_quat(&self) -> Quat {
        let m = |r: usize, c: usize| self.at(r, c);
        let trace = m(0, 0) + m(1, 1) + m(2, 2);
        if trace > 0.0 {
            let s = (trace + 1.0).sqrt() * 2.0;
            Quat::new(
                (m(2, 1) - m(1, 2)) / s,
                (m(0, 2) - m(2, 0)) / s,
                (m(1, 0) - m(0, 1)) / s,
                0.25 * s,
            )
        } else if m(0, 0) > m(1, 1) && m(0, 0) > m(2, 2) {
            let s = (1.0 + m(0, 0) - m(1, 1) - m(2, 2)).sqrt() * 2.0;
            Quat::new(
                0.25 * s,
                (m(0, 1) + m(1, 0)) / s,
                (m(0, 2) + m(2, 0)) / s,
                (m(2, 1) - m(1, 2)) / s,
            )
        } else if m(1, 1) > m(2, 2) {
            let s = (1.0 + m(1, 1) - m(0, 0) - m(2, 2)).sqrt() * 2.0;
            Quat::new(
                (m(0, 1) + m(1, 0)) / s,
                0.25 * s,
                (m(1, 2) + m(2, 1)) / s,
                (m(0, 2) - m(2, 0)) / s,
            )
        } else {
            let s = (1.0 + m(2, 2) - m(0, 0) - m(1, 1)).sqrt() * 2.0;
            Quat::new(
                (m(0, 2) + m(2, 0)) / s,
                (m(1, 2) + m(2, 1)) / s,
                0.25 * s,
                (m(1, 0) - m(0, 1)) / s,
            )
        }
    }

    /// Embeds the matrix in the upper-left block of a 4x4 identity.
    pub fn to_mat4(&self) -> Mat4 {
        let mut out = Mat4::identity();
        for row in 0..3 {
            for col in 0..3 {
                out.set(row, col, self.at(row, col));
            }
        }
        out
    }

    /// Writes the `Display` form to `out`.
    pub fn dump<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{self}")
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<[Real; 9]> for Mat3 {
    fn from(value: [Real; 9]) -> Self {
        Self { data: value }
    }
}

/// Keeps the upper-left 3x3 block.
impl From<Mat4> for Mat3 {
    fn from(value: Mat4) -> Self {
        let mut out = [0.0; 9];
        for row in 0..3 {
            for col in 0..3 {
                out[row * 3 + col] = value.at(row, col);
            }
        }
        Self { data: out }
    }
}

impl core::ops::Mul for Mat3 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl core::ops::Add for Mat3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        let mut out = self.data;
        for (a, b) in out.iter_mut().zip(rhs.data.iter()) {
            *a += b;
        }
        Self { data: out }
    }
}

impl core::ops::Sub for Mat3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        let mut out = self.data;
        for (a, b) in out.iter_mut().zip(rhs.data.iter()) {
            *a -= b;
        }
        Self { data: out }
    }
}

impl fmt::Display for Mat3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            writeln!(
                f,
                "[ {:12.5} {:12.5} {:12.5} ]",
                self.at(row, 0),
                self.at(row, 1),
                self.at(row, 2)
            )?;
        }
        Ok(())
    }
}
