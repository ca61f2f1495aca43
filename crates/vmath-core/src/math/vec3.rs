// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::ops::{Add, Div, Mul, Neg, Sub};

use crate::math::{Mat3, Quat, Real, EPSILON};

/// 3D vector used for points, directions, and normals.
///
/// * Whether a value is a point or a direction depends on the calling context;
///   use [`crate::math::Mat4::transform_point`] for points (homogeneous `w = 1`)
///   and [`crate::math::Mat4::transform_direction`] for directions (`w = 0`).
/// * Arithmetic is available both as operators (`+`, `-`, unary `-`, `* s`,
///   `/ s`) and as named methods for the products.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    data: [Real; 3],
}

impl Vec3 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Unit vector pointing along the positive X axis.
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit vector pointing along the positive Y axis.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit vector pointing along the positive Z axis.
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a vector from components.
    ///
    /// Callers must ensure values are finite.
    pub const fn new(x: Real, y: Real, z: Real) -> Self {
        Self { data: [x, y, z] }
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [Real; 3] {
        self.data
    }

    pub(crate) fn component(&self, idx: usize) -> Real {
        self.data[idx]
    }

    /// X component.
    pub fn x(&self) -> Real {
        self.data[0]
    }

    /// Y component.
    pub fn y(&self) -> Real {
        self.data[1]
    }

    /// Z component.
    pub fn z(&self) -> Real {
        self.data[2]
    }

    /// Scales the vector by a scalar.
    pub fn scale(&self, scalar: Real) -> Self {
        Self::new(
            self.component(0) * scalar,
            self.component(1) * scalar,
            self.component(2) * scalar,
        )
    }

    /// Dot product with another vector.
    pub fn dot(&self, other: &Self) -> Real {
        self.component(0) * other.component(0)
            + self.component(1) * other.component(1)
            + self.component(2) * other.component(2)
    }

    /// Cross product with another vector.
    pub fn cross(&self, other: &Self) -> Self {
        let ax = self.component(0);
        let ay = self.component(1);
        let az = self.component(2);
        let bx = other.component(0);
        let by = other.component(1);
        let bz = other.component(2);
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }

    /// Vector length (magnitude).
    pub fn length(&self) -> Real {
        self.dot(self).sqrt()
    }

    /// Squared magnitude of the vector.
    pub fn length_squared(&self) -> Real {
        self.dot(self)
    }

    /// Distance between two points.
    pub fn distance(&self, other: &Self) -> Real {
        (*self - *other).length()
    }

    /// Normalises the vector, returning the zero vector if length ≤ `EPSILON`.
    ///
    /// `EPSILON` is a degeneracy threshold: callers detect degenerate input by
    /// checking for the zero vector afterwards.
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len <= EPSILON {
            return Self::ZERO;
        }
        self.scale(1.0 / len)
    }

    /// Linear interpolation towards `other` (`t = 0` gives `self`).
    pub fn lerp(&self, other: &Self, t: Real) -> Self {
        *self + (*other - *self).scale(t)
    }

    /// Mirrors an incident direction about the surface `normal`.
    ///
    /// `normal` must be unit length. The result keeps the incident length and
    /// points away from the surface when `self` points into it.
    pub fn reflect(&self, normal: &Self) -> Self {
        *self - normal.scale(2.0 * self.dot(normal))
    }

    /// Bends an incident direction through a surface by Snell's law.
    ///
    /// `ior_ratio` is `n_from / n_to`. Both `self` and `normal` must be unit
    /// length, with `normal` facing the incident side. On total internal
    /// reflection the reflected direction is returned instead.
    pub fn refract(&self, normal: &Self, ior_ratio: Real) -> Self {
        let cos_inc = -self.dot(normal);
        let radical = 1.0 + ior_ratio * ior_ratio * (cos_inc * cos_inc - 1.0);
        if radical < 0.0 {
            return self.reflect(normal);
        }
        let beta = ior_ratio * cos_inc - radical.sqrt();
        self.scale(ior_ratio) + normal.scale(beta)
    }

    /// Multiplies the vector by a 3x3 matrix (`m · v`).
    pub fn transform(&self, m: &Mat3) -> Self {
        m.transform(self)
    }

    /// Rotates the vector by a unit quaternion (`q · v · q*`).
    pub fn rotate(&self, q: &Quat) -> Self {
        let pure = Quat::from_parts(0.0, *self);
        pure.rotated_by(q).v()
    }
}

impl Add for Vec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.component(0) + rhs.component(0),
            self.component(1) + rhs.component(1),
            self.component(2) + rhs.component(2),
        )
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(
            self.component(0) - rhs.component(0),
            self.component(1) - rhs.component(1),
            self.component(2) - rhs.component(2),
        )
    }
}

impl Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self {
        self.scale(-1.0)
    }
}

impl Mul<Real> for Vec3 {
    type Output = Self;
    fn mul(self, rhs: Real) -> Self {
        self.scale(rhs)
    }
}

impl Div<Real> for Vec3 {
    type Output = Self;
    fn div(self, rhs: Real) -> Self {
        self.scale(1.0 / rhs)
    }
}

/// Converts a 3-element array into a `Vec3` interpreted as `(x, y, z)`.
///
/// # Examples
/// ```
/// use vmath_core::math::Vec3;
/// let v = Vec3::from([1.0, 2.0, 3.0]);
/// assert_eq!(v.to_array(), [1.0, 2.0, 3.0]);
/// ```
impl From<[Real; 3]> for Vec3 {
    fn from(value: [Real; 3]) -> Self {
        Self { data: value }
    }
}
