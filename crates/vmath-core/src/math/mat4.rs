// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use std::io;

use tracing::debug;

use crate::math::{Mat3, Quat, Real, Vec3, Vec4, XSMALL_NUMBER};
use crate::MathError;

/// Row‑major 4×4 matrix acting on column vectors (`M · v`).
///
/// - `at(row, col)` addresses the grid directly; translation occupies the
///   last column (`at(0, 3)`, `at(1, 3)`, `at(2, 3)`).
/// - Represents affine transforms and projections; point/direction helpers
///   treat inputs homogeneously (`w = 1` for points, `w = 0` for directions).
///
/// # Examples
/// Basic transformations:
/// ```
/// use vmath_core::math::{Mat4, Vec3};
/// let t = Mat4::translation(5.0, -3.0, 2.0);
/// let p = Vec3::new(2.0, 4.0, -1.0);
/// assert_eq!(t.transform_point(&p).to_array(), [7.0, 1.0, 1.0]);
/// ```
///
/// # Inversion
/// [`Mat4::inverse`] goes through the classical adjoint: the determinant by
/// first-row cofactor expansion, the adjoint from all sixteen 3x3 minors. A
/// determinant that is at most [`XSMALL_NUMBER`] times its Hadamard bound
/// (the smaller of the row-length and column-length products) is reported as
/// [`MathError::Singular`] instead of dividing through. The threshold scales
/// with the matrix, so a uniformly tiny transform still inverts.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat4 {
    data: [Real; 16],
}

/// Indices `0..4` with `skip` removed, in order.
const fn others(skip: usize) -> [usize; 3] {
    match skip {
        0 => [1, 2, 3],
        1 => [0, 2, 3],
        2 => [0, 1, 3],
        _ => [0, 1, 2],
    }
}

impl Mat4 {
    /// Returns the identity matrix.
    pub const fn identity() -> Self {
        Self {
            data: [
                1.0, 0.0, 0.0, 0.0, // row 0
                0.0, 1.0, 0.0, 0.0, // row 1
                0.0, 0.0, 1.0, 0.0, // row 2
                0.0, 0.0, 0.0, 1.0, // row 3
            ],
        }
    }

    /// Creates a matrix from rows.
    pub const fn new(rows: [[Real; 4]; 4]) -> Self {
        let [r0, r1, r2, r3] = rows;
        Self {
            data: [
                r0[0], r0[1], r0[2], r0[3], //
                r1[0], r1[1], r1[2], r1[3], //
                r2[0], r2[1], r2[2], r2[3], //
                r3[0], r3[1], r3[2], r3[3],
            ],
        }
    }

    /// Returns the matrix as rows.
    pub fn to_rows(self) -> [[Real; 4]; 4] {
        let mut rows = [[0.0; 4]; 4];
        for (r, row) in rows.iter_mut().enumerate() {
            row.copy_from_slice(&self.data[r * 4..r * 4 + 4]);
        }
        rows
    }

    /// Returns the matrix as a flat row‑major array.
    pub fn to_array(self) -> [Real; 16] {
        self.data
    }

    /// Element at `row`, `col`.
    pub fn at(&self, row: usize, col: usize) -> Real {
        self.data[row * 4 + col]
    }

    /// Overwrites the element at `row`, `col`.
    pub fn set(&mut self, row: usize, col: usize, value: Real) {
        self.data[row * 4 + col] = value;
    }

    /// Returns row `idx`.
    pub fn row(&self, idx: usize) -> Vec4 {
        Vec4::new(self.at(idx, 0), self.at(idx, 1), self.at(idx, 2), self.at(idx, 3))
    }

    /// Returns column `idx`.
    pub fn column(&self, idx: usize) -> Vec4 {
        Vec4::new(self.at(0, idx), self.at(1, idx), self.at(2, idx), self.at(3, idx))
    }

    /// Copy of the matrix with row `idx` replaced.
    pub fn with_row(&self, idx: usize, row: Vec4) -> Self {
        let mut out = *self;
        for col in 0..4 {
            out.set(idx, col, row.component(col));
        }
        out
    }

    /// Copy of the matrix with column `idx` replaced.
    pub fn with_column(&self, idx: usize, column: Vec4) -> Self {
        let mut out = *self;
        for row in 0..4 {
            out.set(row, idx, column.component(row));
        }
        out
    }

    /// Builds a translation matrix.
    pub const fn translation(tx: Real, ty: Real, tz: Real) -> Self {
        Self::new([
            [1.0, 0.0, 0.0, tx],
            [0.0, 1.0, 0.0, ty],
            [0.0, 0.0, 1.0, tz],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Builds a non-uniform scale matrix.
    pub const fn scaling(sx: Real, sy: Real, sz: Real) -> Self {
        Self::new([
            [sx, 0.0, 0.0, 0.0],
            [0.0, sy, 0.0, 0.0],
            [0.0, 0.0, sz, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Builds a rotation matrix around the X axis by `angle` radians.
    pub fn rotation_x(angle: Real) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, c, -s, 0.0],
            [0.0, s, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Builds a rotation matrix around the Y axis by `angle` radians.
    pub fn rotation_y(angle: Real) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([
            [c, 0.0, s, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [-s, 0.0, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Builds a rotation matrix around the Z axis by `angle` radians.
    pub fn rotation_z(angle: Real) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([
            [c, -s, 0.0, 0.0],
            [s, c, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Builds a rotation matrix from a unit `axis` and `angle` in radians.
    ///
    /// The axis is not normalised; a non-unit axis yields a matrix that also
    /// scales.
    pub fn rotation_axis_angle(axis: Vec3, angle: Real) -> Self {
        Mat3::rotation_axis_angle(axis, angle).to_mat4()
    }

    /// Builds `Rx(angles.x) · Ry(angles.y) · Rz(angles.z)`.
    pub fn rotation_euler(angles: Vec3) -> Self {
        Self::rotation_x(angles.x())
            .multiply(&Self::rotation_y(angles.y()))
            .multiply(&Self::rotation_z(angles.z()))
    }

    /// Constructs a rotation matrix from a unit quaternion.
    ///
    /// This simply forwards to [`Quat::to_mat4`].
    pub fn from_quat(q: &Quat) -> Self {
        q.to_mat4()
    }

    /// Right-handed perspective projection into OpenGL clip space.
    ///
    /// `vfov` is the vertical field of view in radians. Points on the near
    /// plane map to `z/w = -1` and points on the far plane to `z/w = 1`.
    pub fn perspective(vfov: Real, aspect: Real, znear: Real, zfar: Real) -> Self {
        let f = 1.0 / (vfov * 0.5).tan();
        let range = znear - zfar;
        Self::new([
            [f / aspect, 0.0, 0.0, 0.0],
            [0.0, f, 0.0, 0.0],
            [0.0, 0.0, (zfar + znear) / range, 2.0 * zfar * znear / range],
            [0.0, 0.0, -1.0, 0.0],
        ])
    }

    /// Orthographic projection mapping the given box onto `[-1, 1]³`.
    pub fn orthographic(
        left: Real,
        right: Real,
        bottom: Real,
        top: Real,
        znear: Real,
        zfar: Real,
    ) -> Self {
        let dx = right - left;
        let dy = top - bottom;
        let dz = zfar - znear;
        Self::new([
            [2.0 / dx, 0.0, 0.0, -(right + left) / dx],
            [0.0, 2.0 / dy, 0.0, -(top + bottom) / dy],
            [0.0, 0.0, -2.0 / dz, -(zfar + znear) / dz],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Multiplies the matrix with another matrix (`self * rhs`).
    ///
    /// # Examples
    /// ```
    /// use vmath_core::math::Mat4;
    /// let a = Mat4::identity();
    /// let b = Mat4::scaling(2.0, 3.0, 4.0);
    /// assert_eq!(a.multiply(&b).to_array(), b.to_array());
    /// ```
    pub fn multiply(&self, rhs: &Self) -> Self {
        let mut out = [0.0; 16];
        for row in 0..4 {
            for col in 0..4 {
                let mut sum = 0.0;
                for k in 0..4 {
                    sum += self.at(row, k) * rhs.at(k, col);
                }
                out[row * 4 + col] = sum;
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

    /// Appends a translation (`self * T`).
    pub fn translated(&self, tx: Real, ty: Real, tz: Real) -> Self {
        self.multiply(&Self::translation(tx, ty, tz))
    }

    /// Appends a scale (`self * S`).
    pub fn scaled(&self, sx: Real, sy: Real, sz: Real) -> Self {
        self.multiply(&Self::scaling(sx, sy, sz))
    }

    /// Appends an X rotation (`self * Rx`).
    pub fn rotated_x(&self, angle: Real) -> Self {
        self.multiply(&Self::rotation_x(angle))
    }

    /// Appends a Y rotation (`self * Ry`).
    pub fn rotated_y(&self, angle: Real) -> Self {
        self.multiply(&Self::rotation_y(angle))
    }

    /// Appends a Z rotation (`self * Rz`).
    pub fn rotated_z(&self, angle: Real) -> Self {
        self.multiply(&Self::rotation_z(angle))
    }

    /// Appends an axis/angle rotation.
    pub fn rotated_axis_angle(&self, axis: Vec3, angle: Real) -> Self {
        self.multiply(&Self::rotation_axis_angle(axis, angle))
    }

    /// Appends a quaternion rotation.
    pub fn rotated_quat(&self, q: &Quat) -> Self {
        self.multiply(&q.to_mat4())
    }

    /// Returns the transpose.
    pub fn transpose(&self) -> Self {
        let mut out = [0.0; 16];
        for row in 0..4 {
            for col in 0..4 {
                out[col * 4 + row] = self.at(row, col);
            }
        }
        Self { data: out }
    }

    /// Determinant of the 3x3 submatrix left after deleting `row` and `col`.
    fn minor(&self, row: usize, col: usize) -> Real {
        let r = others(row);
        let c = others(col);
        let m = |i: usize, j: usize| self.at(r[i], c[j]);
        m(0, 0) * (m(1, 1) * m(2, 2) - m(2, 1) * m(1, 2))
            - m(0, 1) * (m(1, 0) * m(2, 2) - m(2, 0) * m(1, 2))
            + m(0, 2) * (m(1, 0) * m(2, 1) - m(2, 0) * m(1, 1))
    }

    /// Determinant by cofactor expansion along the first row.
    pub fn determinant(&self) -> Real {
        self.at(0, 0) * self.minor(0, 0) - self.at(0, 1) * self.minor(0, 1)
            + self.at(0, 2) * self.minor(0, 2)
            - self.at(0, 3) * self.minor(0, 3)
    }

    /// Classical adjoint: transpose of the cofactor matrix.
    ///
    /// `adjoint(M) · M == determinant(M) · I` holds for every matrix, singular
    /// or not.
    pub fn adjoint(&self) -> Self {
        let mut minors = [0.0; 16];
        for row in 0..4 {
            for col in 0..4 {
                minors[row * 4 + col] = self.minor(row, col);
            }
        }
        let mut adj = Self { data: minors }.transpose();
        for row in 0..4 {
            for col in 0..4 {
                if (row + col) % 2 == 1 {
                    adj.set(row, col, -adj.at(row, col));
                }
            }
        }
        adj
    }

    /// Inverse via `adjoint / determinant`.
    ///
    /// Returns [`MathError::Singular`] when `|det|` is at most
    /// `XSMALL_NUMBER` times the Hadamard bound of the matrix.
    ///
    /// # Examples
    /// ```
    /// use vmath_core::math::{Mat4, Vec3};
    /// let m = Mat4::translation(1.0, 2.0, 3.0);
    /// let inv = m.inverse().unwrap();
    /// let p = inv.transform_point(&Vec3::new(1.0, 2.0, 3.0));
    /// assert_eq!(p.to_array(), [0.0, 0.0, 0.0]);
    /// assert!(Mat4::scaling(1.0, 0.0, 1.0).inverse().is_err());
    /// ```
    pub fn inverse(&self) -> Result<Self, MathError> {
        let determinant = self.determinant();
        let bound = self.hadamard_bound();
        if determinant.abs() <= XSMALL_NUMBER * bound {
            debug!(determinant, bound, "refusing to invert singular 4x4 matrix");
            return Err(MathError::Singular { determinant });
        }
        Ok(self.adjoint().scale_by(1.0 / determinant))
    }

    /// Upper bound on `|det|`: the smaller of the row-length and
    /// column-length products.
    fn hadamard_bound(&self) -> Real {
        let rows: Real = (0..4).map(|i| self.row(i).length()).product();
        let cols: Real = (0..4).map(|i| self.column(i).length()).product();
        rows.min(cols)
    }

    /// Translation part (last column).
    pub fn get_translation(&self) -> Vec3 {
        Vec3::new(self.at(0, 3), self.at(1, 3), self.at(2, 3))
    }

    /// Scale factors, measured as the lengths of the first three columns.
    pub fn get_scaling(&self) -> Vec3 {
        Vec3::new(
            self.column(0).xyz().length(),
            self.column(1).xyz().length(),
            self.column(2).xyz().length(),
        )
    }

    /// Extracts the rotation of the upper 3x3 block as a quaternion.
    ///
    /// The block is assumed to be a pure rotation; scale it out first.
    pub fn to_quat(&self) -> Quat {
        Mat3::from(*self).to_quat()
    }

    /// Transforms a point (assumes `w = 1`, no perspective divide).
    pub fn transform_point(&self, point: &Vec3) -> Vec3 {
        self.transform_vec4(&Vec4::from_vec3(*point, 1.0)).xyz()
    }

    /// Transforms a direction vector (ignores translation, `w = 0`).
    pub fn transform_direction(&self, direction: &Vec3) -> Vec3 {
        self.transform_vec4(&Vec4::from_vec3(*direction, 0.0)).xyz()
    }

    /// Full homogeneous product `self · v`.
    pub fn transform_vec4(&self, v: &Vec4) -> Vec4 {
        let mut out = [0.0; 4];
        for (row, slot) in out.iter_mut().enumerate() {
            *slot = self.row(row).dot(v);
        }
        Vec4::from(out)
    }

    /// Writes the `Display` form to `out`.
    pub fn dump<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{self}")
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<[Real; 16]> for Mat4 {
    fn from(value: [Real; 16]) -> Self {
        Self { data: value }
    }
}

impl From<Mat3> for Mat4 {
    fn from(value: Mat3) -> Self {
        value.to_mat4()
    }
}

impl core::ops::Mul for Mat4 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl core::ops::Add for Mat4 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        let mut out = self.data;
        for (a, b) in out.iter_mut().zip(rhs.data.iter()) {
            *a += b;
        }
        Self { data: out }
    }
}

impl core::ops::Sub for Mat4 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        let mut out = self.data;
        for (a, b) in out.iter_mut().zip(rhs.data.iter()) {
            *a -= b;
        }
        Self { data: out }
    }
}

/// One `[ a b c d ]` line per row, each value in a 12-wide, 5-decimal field.
impl fmt::Display for Mat4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..4 {
            writeln!(
                f,
                "[ {:12.5} {:12.5} {:12.5} {:12.5} ]",
                self.at(row, 0),
                self.at(row, 1),
                self.at(row, 2),
                self.at(row, 3)
            )?;
        }
        Ok(())
    }
}
