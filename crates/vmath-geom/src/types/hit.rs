// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use vmath_core::{Real, Vec3};

/// Where a ray met a surface.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Hit {
    /// Ray parameter at the hit.
    pub t: Real,
    /// `origin + t·dir`.
    pub point: Vec3,
    /// Unit surface normal at `point`, facing out of the surface (not
    /// flipped towards the ray).
    pub normal: Vec3,
}

impl Hit {
    /// Whether the ray arrived from the side the normal points to.
    pub fn is_front_face(&self, dir: &Vec3) -> bool {
        dir.dot(&self.normal) < 0.0
    }
}
