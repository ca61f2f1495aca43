// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::ops::{Add, Mul, Neg, Sub};

use crate::math::{Mat4, Real, Vec3, EPSILON};

/// Homogeneous 4D vector.
///
/// Used for clip-space positions and as the row/column type of [`Mat4`].
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec4 {
    data: [Real; 4],
}

impl Vec4 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a vector from components.
    pub const fn new(x: Real, y: Real, z: Real, w: Real) -> Self {
        Self { data: [x, y, z, w] }
    }

    /// Extends a 3D vector with the given `w`.
    pub fn from_vec3(v: Vec3, w: Real) -> Self {
        Self::new(v.x(), v.y(), v.z(), w)
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [Real; 4] {
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

    /// W component.
    pub fn w(&self) -> Real {
        self.data[3]
    }

    /// Drops `w`.
    pub fn xyz(&self) -> Vec3 {
        Vec3::new(self.data[0], self.data[1], self.data[2])
    }

    /// Performs the perspective divide, returning `xyz / w`.
    ///
    /// When `w` is zero (a direction) the xyz part is returned unchanged.
    pub fn to_vec3_projected(&self) -> Vec3 {
        let w = self.data[3];
        if w == 0.0 {
            return self.xyz();
        }
        self.xyz().scale(1.0 / w)
    }

    /// Scales every component by a scalar.
    pub fn scale(&self, scalar: Real) -> Self {
        Self::new(
            self.data[0] * scalar,
            self.data[1] * scalar,
            self.data[2] * scalar,
            self.data[3] * scalar,
        )
    }

    /// 4-component dot product.
    pub fn dot(&self, other: &Self) -> Real {
        self.data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a * b)
            .sum()
    }

    /// Vector length (magnitude).
    pub fn length(&self) -> Real {
        self.dot(self).sqrt()
    }

    /// Squared magnitude of the vector.
    pub fn length_squared(&self) -> Real {
        self.dot(self)
    }

    /// Normalises the vector, returning the zero vector if length ≤ `EPSILON`.
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len <= EPSILON {
            return Self::ZERO;
        }
        self.scale(1.0 / len)
    }

    /// Linear interpolation towards `other`.
    pub fn lerp(&self, other: &Self, t: Real) -> Self {
        *self + (*other - *self).scale(t)
    }

    /// Multiplies by a 4x4 matrix (`m · v`), with no perspective divide.
    pub fn transform(&self, m: &Mat4) -> Self {
        m.transform_vec4(self)
    }
}

impl Add for Vec4 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.data[0] + rhs.data[0],
            self.data[1] + rhs.data[1],
            self.data[2] + rhs.data[2],
            self.data[3] + rhs.data[3],
        )
    }
}

impl Sub for Vec4 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(
            self.data[0] - rhs.data[0],
            self.data[1] - rhs.data[1],
            self.data[2] - rhs.data[2],
            self.data[3] - rhs.data[3],
        )
    }
}

impl Neg for Vec4 {
    type Output = Self;
    fn neg(self) -> Self {
        self.scale(-1.0)
    }
}

impl Mul<Real> for Vec4 {
    type Output = Self;
    fn mul(self, rhs: Real) -> Self {
        self.scale(rhs)
    }
}

impl From<[Real; 4]> for Vec4 {
    fn from(value: [Real; 4]) -> Self {
        Self { data: value }
    }
}
