// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::math::{Real, Vec3};

/// Vector in spherical coordinates.
///
/// `theta` is the azimuth in the XZ plane measured from +X towards +Z,
/// `phi` the polar angle measured from +Y, and `r` the radius.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SphVec {
    /// Azimuth in radians.
    pub theta: Real,
    /// Polar angle in radians, `0` along +Y.
    pub phi: Real,
    /// Radius.
    pub r: Real,
}

impl SphVec {
    /// Creates a spherical vector from its angles and radius.
    pub const fn new(theta: Real, phi: Real, r: Real) -> Self {
        Self { theta, phi, r }
    }

    /// Converts back to cartesian coordinates.
    pub fn to_vec3(&self) -> Vec3 {
        let (sin_phi, cos_phi) = self.phi.sin_cos();
        let (sin_theta, cos_theta) = self.theta.sin_cos();
        Vec3::new(
            self.r * cos_theta * sin_phi,
            self.r * cos_phi,
            self.r * sin_theta * sin_phi,
        )
    }
}

impl Default for SphVec {
    fn default() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }
}

/// The zero vector maps to `r = 0` with both angles zero.
impl From<Vec3> for SphVec {
    fn from(v: Vec3) -> Self {
        let r = v.length();
        if r == 0.0 {
            return Self::new(0.0, 0.0, 0.0);
        }
        let cos_phi = (v.y() / r).clamp(-1.0, 1.0);
        Self::new(v.z().atan2(v.x()), cos_phi.acos(), r)
    }
}

impl From<SphVec> for Vec3 {
    fn from(s: SphVec) -> Self {
        s.to_vec3()
    }
}
