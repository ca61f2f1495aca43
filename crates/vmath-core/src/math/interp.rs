// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Scalar interpolation, cubic curves, and small numeric helpers.

use crate::math::{consts::TAU, Mat4, Real, Vec4};

/// Uniform cubic B-spline basis (scaled by 1/6 at evaluation).
const BSPLINE_BASIS: Mat4 = Mat4::new([
    [-1.0, 3.0, -3.0, 1.0],
    [3.0, -6.0, 3.0, 0.0],
    [-3.0, 0.0, 3.0, 0.0],
    [1.0, 4.0, 1.0, 0.0],
]);

/// Catmull-Rom basis (scaled by 1/2 at evaluation).
const CATMULL_ROM_BASIS: Mat4 = Mat4::new([
    [-1.0, 3.0, -3.0, 1.0],
    [2.0, -5.0, 4.0, -1.0],
    [-1.0, 0.0, 1.0, 0.0],
    [0.0, 2.0, 0.0, 0.0],
]);

/// Evaluates `[t³ t² t 1] · basis · [a b c d]ᵀ`.
fn cubic(basis: &Mat4, controls: Vec4, t: Real) -> Real {
    let tsq = t * t;
    let tvec = Vec4::new(tsq * t, tsq, t, 1.0);
    basis.transpose().transform_vec4(&tvec).dot(&controls)
}

/// Linear interpolation: `a` at `t = 0`, `b` at `t = 1`.
pub fn lerp(a: Real, b: Real, t: Real) -> Real {
    a + (b - a) * t
}

/// Hermite step from 0 (at `x <= a`) to 1 (at `x >= b`).
pub fn smoothstep(a: Real, b: Real, x: Real) -> Real {
    if x < a {
        return 0.0;
    }
    if x >= b {
        return 1.0;
    }
    let t = (x - a) / (b - a);
    t * t * (3.0 - 2.0 * t)
}

/// Normal distribution density at `x`.
pub fn gaussian(x: Real, mean: Real, sdev: Real) -> Real {
    let d = x - mean;
    (-(d * d) / (2.0 * sdev * sdev)).exp() / (sdev * TAU.sqrt())
}

/// Left Riemann sum of `f` over `[low, high]` with `samples` rectangles.
pub fn integral<F>(f: F, low: Real, high: Real, samples: u32) -> Real
where
    F: Fn(Real) -> Real,
{
    if samples == 0 {
        return 0.0;
    }
    let h = (high - low) / samples as Real;
    (0..samples).map(|i| f(low + h * i as Real) * h).sum()
}

/// Uniform cubic B-spline segment over control values `a..d`.
///
/// Approximating: the curve passes near, not through, `b` and `c`.
pub fn bspline(a: Real, b: Real, c: Real, d: Real, t: Real) -> Real {
    cubic(&BSPLINE_BASIS, Vec4::new(a, b, c, d), t) / 6.0
}

/// Catmull-Rom segment: passes through `b` at `t = 0` and `c` at `t = 1`.
pub fn spline(a: Real, b: Real, c: Real, d: Real, t: Real) -> Real {
    cubic(&CATMULL_ROM_BASIS, Vec4::new(a, b, c, d), t) * 0.5
}

/// Cubic Bézier with end points `a`, `d` and control points `b`, `c`.
pub fn bezier(a: Real, b: Real, c: Real, d: Real, t: Real) -> Real {
    let omt = 1.0 - t;
    omt * omt * omt * a + 3.0 * omt * omt * t * b + 3.0 * omt * t * t * c + t * t * t * d
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catmull_rom_interpolates_inner_controls() {
        assert_eq!(spline(7.0, 2.0, 5.0, -1.0, 0.0), 2.0);
        assert_eq!(spline(7.0, 2.0, 5.0, -1.0, 1.0), 5.0);
    }

    #[test]
    fn bspline_reproduces_constants() {
        for t in [0.0, 0.25, 0.5, 1.0] {
            assert!((bspline(3.0, 3.0, 3.0, 3.0, t) - 3.0).abs() < 1e-6);
        }
    }

    #[test]
    fn smoothstep_is_clamped_and_symmetric() {
        assert_eq!(smoothstep(1.0, 3.0, 0.0), 0.0);
        assert_eq!(smoothstep(1.0, 3.0, 5.0), 1.0);
        assert_eq!(smoothstep(1.0, 3.0, 2.0), 0.5);
    }

    #[test]
    fn integral_of_zero_samples_is_zero() {
        assert_eq!(integral(|x| x, 0.0, 1.0, 0), 0.0);
    }
}
