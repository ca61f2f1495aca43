// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};
use std::io;

use crate::math::{Mat3, Mat4, Real, Vec3, EPSILON, SMALL_NUMBER, XSMALL_NUMBER};
use crate::MathError;

/// Allowed deviation from unit length for checked axis construction.
const UNIT_TOLERANCE: Real = 1e-3;

/// Quaternion stored as `(x, y, z, w)`: vector part `v = (x, y, z)` and
/// scalar part `s = w`.
///
/// * All angles are expressed in radians.
/// * Rotation use requires unit length, which is not enforced; call
///   [`Quat::normalize`] after accumulating products.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quat {
    data: [Real; 4],
}

impl Quat {
    /// Creates a quaternion from components.
    ///
    /// Callers should provide finite components; use
    /// [`Quat::from_axis_angle`] for axis/angle construction.
    pub const fn new(x: Real, y: Real, z: Real, w: Real) -> Self {
        Self { data: [x, y, z, w] }
    }

    /// Creates a quaternion from its scalar and vector parts.
    pub fn from_parts(s: Real, v: Vec3) -> Self {
        Self::new(v.x(), v.y(), v.z(), s)
    }

    /// Returns the identity quaternion.
    pub const fn identity() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    /// Returns the quaternion as an `(x, y, z, w)` array.
    pub fn to_array(self) -> [Real; 4] {
        self.data
    }

    fn component(&self, idx: usize) -> Real {
        self.data[idx]
    }

    /// Scalar part.
    pub fn s(&self) -> Real {
        self.data[3]
    }

    /// Vector part.
    pub fn v(&self) -> Vec3 {
        Vec3::new(self.data[0], self.data[1], self.data[2])
    }

    /// Constructs a rotation of `angle` radians about a unit `axis`.
    ///
    /// `s = cos(angle/2)`, `v = axis · sin(angle/2)`. The axis is used as
    /// given; a non-unit axis produces a non-unit quaternion. Use
    /// [`Quat::try_from_axis_angle`] to have the axis checked.
    pub fn from_axis_angle(axis: Vec3, angle: Real) -> Self {
        let half = angle * 0.5;
        let (sin_half, cos_half) = half.sin_cos();
        Self::from_parts(cos_half, axis.scale(sin_half))
    }

    /// Checked variant of [`Quat::from_axis_angle`].
    ///
    /// Fails with [`MathError::NotUnitLength`] unless `|axis|` is within
    /// `1e-3` of one.
    pub fn try_from_axis_angle(axis: Vec3, angle: Real) -> Result<Self, MathError> {
        let length = axis.length();
        if (length - 1.0).abs() > UNIT_TOLERANCE {
            return Err(MathError::NotUnitLength {
                what: "rotation axis",
                length,
            });
        }
        Ok(Self::from_axis_angle(axis, angle))
    }

    /// Hamilton product of two quaternions (`self * other`).
    ///
    /// `s = s1·s2 − v1·v2`, `v = s1·v2 + s2·v1 + v1×v2`. Operand order
    /// matters: applying rotation `B` and then `A` is `A * B`.
    ///
    /// # Examples
    /// ```
    /// use vmath_core::math::consts::FRAC_PI_2;
    /// use vmath_core::math::{Quat, Vec3};
    /// let yaw = Quat::from_axis_angle(Vec3::UNIT_Y, FRAC_PI_2);
    /// let pitch = Quat::from_axis_angle(Vec3::UNIT_X, FRAC_PI_2);
    /// // Non‑commutative: pitch*yaw is different
    /// assert_ne!(yaw.multiply(&pitch), pitch.multiply(&yaw));
    /// ```
    pub fn multiply(&self, other: &Self) -> Self {
        let ax = self.component(0);
        let ay = self.component(1);
        let az = self.component(2);
        let aw = self.component(3);

        let bx = other.component(0);
        let by = other.component(1);
        let bz = other.component(2);
        let bw = other.component(3);

        Self::new(
            aw * bx + ax * bw + ay * bz - az * by,
            aw * by - ax * bz + ay * bw + az * bx,
            aw * bz + ax * by - ay * bx + az * bw,
            aw * bw - ax * bx - ay * by - az * bz,
        )
    }

    /// Multiplies every component by `scalar`.
    pub fn scale(&self, scalar: Real) -> Self {
        Self::new(
            self.component(0) * scalar,
            self.component(1) * scalar,
            self.component(2) * scalar,
            self.component(3) * scalar,
        )
    }

    /// 4-component dot product.
    pub fn dot(&self, other: &Self) -> Real {
        self.component(0) * other.component(0)
            + self.component(1) * other.component(1)
            + self.component(2) * other.component(2)
            + self.component(3) * other.component(3)
    }

    /// Negates the vector part.
    pub fn conjugate(&self) -> Self {
        Self::new(
            -self.component(0),
            -self.component(1),
            -self.component(2),
            self.component(3),
        )
    }

    /// Squared norm (`q · q*`).
    pub fn length_squared(&self) -> Real {
        self.dot(self)
    }

    /// Norm.
    pub fn length(&self) -> Real {
        self.length_squared().sqrt()
    }

    /// Normalises the quaternion; returns identity when norm is ≤ `EPSILON`.
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len <= EPSILON {
            return Self::identity();
        }
        self.scale(1.0 / len)
    }

    /// `q⁻¹ = q* / |q|²`; equals the conjugate for unit quaternions.
    pub fn inverse(&self) -> Result<Self, MathError> {
        let len_sq = self.length_squared();
        if len_sq < XSMALL_NUMBER {
            return Err(MathError::Singular {
                determinant: len_sq,
            });
        }
        Ok(self.conjugate().scale(1.0 / len_sq))
    }

    /// Appends a rotation of `angle` radians about unit `axis` (`self * r`).
    pub fn rotate(&self, axis: Vec3, angle: Real) -> Self {
        self.multiply(&Self::from_axis_angle(axis, angle))
    }

    /// Applies `q`'s rotation to this quaternion: `q · self · q*`.
    pub fn rotated_by(&self, q: &Self) -> Self {
        q.multiply(self).multiply(&q.conjugate())
    }

    /// Rotation matrix of a unit quaternion.
    pub fn to_mat3(&self) -> Mat3 {
        let s = self.s();
        let [x, y, z] = self.v().to_array();
        Mat3::new([
            [
                1.0 - 2.0 * y * y - 2.0 * z * z,
                2.0 * x * y - 2.0 * s * z,
                2.0 * z * x + 2.0 * s * y,
            ],
            [
                2.0 * x * y + 2.0 * s * z,
                1.0 - 2.0 * x * x - 2.0 * z * z,
                2.0 * y * z - 2.0 * s * x,
            ],
            [
                2.0 * z * x - 2.0 * s * y,
                2.0 * y * z + 2.0 * s * x,
                1.0 - 2.0 * x * x - 2.0 * y * y,
            ],
        ])
    }

    /// Homogeneous rotation matrix of a unit quaternion.
    pub fn to_mat4(&self) -> Mat4 {
        self.to_mat3().to_mat4()
    }

    /// Spherical linear interpolation from `self` (`t = 0`) to `other` (`t = 1`).
    ///
    /// Always travels the shorter arc: when `self · other < 0` the start is
    /// negated first, since `q` and `-q` encode the same rotation. Nearly
    /// parallel inputs (`|sin θ| < SMALL_NUMBER`) fall back to a linear blend.
    /// The result is not renormalised; see [`Quat::slerp_normalized`].
    pub fn slerp(&self, other: &Self, t: Real) -> Self {
        let mut start = *self;
        let mut dot = start.dot(other);
        if dot < 0.0 {
            start = -start;
            dot = -dot;
        }
        let dot = dot.clamp(-1.0, 1.0);

        let angle = dot.acos();
        let sin_angle = angle.sin();
        let (a, b) = if sin_angle.abs() < SMALL_NUMBER {
            (1.0 - t, t)
        } else {
            (
                ((1.0 - t) * angle).sin() / sin_angle,
                (t * angle).sin() / sin_angle,
            )
        };

        start.scale(a) + other.scale(b)
    }

    /// [`Quat::slerp`] followed by [`Quat::normalize`].
    pub fn slerp_normalized(&self, other: &Self, t: Real) -> Self {
        self.slerp(other, t).normalize()
    }

    /// Writes the `Display` form to `out`.
    pub fn dump<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{self}")
    }
}

impl Default for Quat {
    fn default() -> Self {
        Self::identity()
    }
}

impl Add for Quat {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.component(0) + rhs.component(0),
            self.component(1) + rhs.component(1),
            self.component(2) + rhs.component(2),
            self.component(3) + rhs.component(3),
        )
    }
}

impl Sub for Quat {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        self + (-rhs)
    }
}

impl Neg for Quat {
    type Output = Self;
    fn neg(self) -> Self {
        self.scale(-1.0)
    }
}

impl Mul for Quat {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl Mul<Real> for Quat {
    type Output = Self;
    fn mul(self, rhs: Real) -> Self {
        self.scale(rhs)
    }
}

/// Converts an `(x, y, z, w)` array into a `Quat`.
///
/// The components are taken verbatim; normalization is not enforced.
impl From<[Real; 4]> for Quat {
    fn from(value: [Real; 4]) -> Self {
        Self { data: value }
    }
}

/// `([ x y z ] w)` with four decimals.
impl fmt::Display for Quat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "([ {:.4} {:.4} {:.4} ] {:.4})",
            self.component(0),
            self.component(1),
            self.component(2),
            self.component(3)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::consts::FRAC_PI_2;

    #[test]
    fn hamilton_product_matches_scalar_vector_form() {
        let a = Quat::new(1.0, 2.0, 3.0, 4.0);
        let b = Quat::new(-2.0, 0.5, 1.0, 3.0);
        let s = a.s() * b.s() - a.v().dot(&b.v());
        let v = b.v().scale(a.s()) + a.v().scale(b.s()) + a.v().cross(&b.v());
        assert_eq!(a.multiply(&b), Quat::from_parts(s, v));
    }

    #[test]
    fn zero_quaternion_has_no_inverse() {
        let zero = Quat::new(0.0, 0.0, 0.0, 0.0);
        assert!(matches!(zero.inverse(), Err(MathError::Singular { .. })));
    }

    #[test]
    fn checked_axis_rejects_non_unit_axis() {
        let err = Quat::try_from_axis_angle(Vec3::new(0.0, 2.0, 0.0), FRAC_PI_2);
        assert_eq!(
            err,
            Err(MathError::NotUnitLength {
                what: "rotation axis",
                length: 2.0
            })
        );
        assert!(Quat::try_from_axis_angle(Vec3::UNIT_Z, FRAC_PI_2).is_ok());
    }

    #[test]
    fn display_prints_vector_then_scalar() {
        assert_eq!(
            Quat::identity().to_string(),
            "([ 0.0000 0.0000 0.0000 ] 1.0000)"
        );
    }
}
