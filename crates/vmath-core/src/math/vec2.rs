// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::ops::{Add, Div, Mul, Neg, Sub};

use crate::math::{Mat3, Real, EPSILON};

/// 2D vector for planar points and directions.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    data: [Real; 2],
}

impl Vec2 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Unit vector along +X.
    pub const UNIT_X: Self = Self::new(1.0, 0.0);

    /// Unit vector along +Y.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0);

    /// Creates a vector from components.
    pub const fn new(x: Real, y: Real) -> Self {
        Self { data: [x, y] }
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [Real; 2] {
        self.data
    }

    /// X component.
    pub fn x(&self) -> Real {
        self.data[0]
    }

    /// Y component.
    pub fn y(&self) -> Real {
        self.data[1]
    }

    /// Scales the vector by a scalar.
    pub fn scale(&self, scalar: Real) -> Self {
        Self::new(self.data[0] * scalar, self.data[1] * scalar)
    }

    /// Dot product with another vector.
    pub fn dot(&self, other: &Self) -> Real {
        self.data[0] * other.data[0] + self.data[1] * other.data[1]
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

    /// Rotates counter-clockwise by `angle` radians about the origin.
    pub fn rotate(&self, angle: Real) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(
            self.data[0] * c - self.data[1] * s,
            self.data[0] * s + self.data[1] * c,
        )
    }

    /// Transforms the vector as a homogeneous 2D point (`w = 1`).
    ///
    /// Pairs with [`Mat3::translation_2d`] and [`Mat3::rotation_2d`].
    pub fn transform(&self, m: &Mat3) -> Self {
        let [x, y] = self.data;
        Self::new(
            m.at(0, 0) * x + m.at(0, 1) * y + m.at(0, 2),
            m.at(1, 0) * x + m.at(1, 1) * y + m.at(1, 2),
        )
    }
}

impl Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.data[0] + rhs.data[0], self.data[1] + rhs.data[1])
    }
}

impl Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.data[0] - rhs.data[0], self.data[1] - rhs.data[1])
    }
}

impl Neg for Vec2 {
    type Output = Self;
    fn neg(self) -> Self {
        self.scale(-1.0)
    }
}

impl Mul<Real> for Vec2 {
    type Output = Self;
    fn mul(self, rhs: Real) -> Self {
        self.scale(rhs)
    }
}

impl Div<Real> for Vec2 {
    type Output = Self;
    fn div(self, rhs: Real) -> Self {
        self.scale(1.0 / rhs)
    }
}

impl From<[Real; 2]> for Vec2 {
    fn from(value: [Real; 2]) -> Self {
        Self { data: value }
    }
}
