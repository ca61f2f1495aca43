// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Gradient (Perlin) noise with fractal sums.
//!
//! The permutation table is shuffled by [`Prng`], so a seed fully determines
//! every value. The free functions share one lazily built table that is never
//! written after construction.

use once_cell::sync::Lazy;

use crate::math::{Prng, Real};

const TABLE_SIZE: usize = 256;

/// Seed of the process-wide table behind the free functions.
const DEFAULT_SEED: u64 = 0x5eed_0f_7ab1e;

static DEFAULT_NOISE: Lazy<PerlinNoise> = Lazy::new(|| PerlinNoise::new(DEFAULT_SEED));

/// Quintic fade curve `6t⁵ − 15t⁴ + 10t³`.
fn fade(t: Real) -> Real {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

fn mix(a: Real, b: Real, t: Real) -> Real {
    a + (b - a) * t
}

/// Splits a coordinate into its wrapped lattice cell and fractional part.
fn cell(x: Real) -> (usize, Real) {
    let floor = x.floor();
    ((floor as i64 & 255) as usize, x - floor)
}

fn grad1(hash: usize, x: Real) -> Real {
    if hash & 1 == 0 {
        x
    } else {
        -x
    }
}

/// One of twelve cube-edge gradients (plus four repeats) dotted with `(x, y, z)`.
fn grad3(hash: usize, x: Real, y: Real, z: Real) -> Real {
    let h = hash & 15;
    let u = if h < 8 { x } else { y };
    let v = if h < 4 {
        y
    } else if h == 12 || h == 14 {
        x
    } else {
        z
    };
    let u = if h & 1 == 0 { u } else { -u };
    let v = if h & 2 == 0 { v } else { -v };
    u + v
}

/// Sums `octaves` layers, each at double the frequency and half the
/// amplitude of the previous one.
fn fractal_sum<F>(octaves: u32, layer: F) -> Real
where
    F: Fn(Real) -> Real,
{
    let mut sum = 0.0;
    let mut freq = 1.0;
    for _ in 0..octaves {
        sum += layer(freq) / freq;
        freq *= 2.0;
    }
    sum
}

/// Seeded gradient noise generator.
///
/// Values are zero at integer lattice points and stay within roughly `±1`.
#[derive(Debug, Clone)]
pub struct PerlinNoise {
    perm: [usize; TABLE_SIZE * 2],
}

impl PerlinNoise {
    /// Builds the permutation table from `seed`.
    pub fn new(seed: u64) -> Self {
        let mut base: [usize; TABLE_SIZE] = core::array::from_fn(|i| i);
        Prng::from_seed_u64(seed).shuffle(&mut base);
        let perm = core::array::from_fn(|i| base[i % TABLE_SIZE]);
        Self { perm }
    }

    /// 1D noise.
    pub fn noise1(&self, x: Real) -> Real {
        let (xi, xf) = cell(x);
        let p = &self.perm;
        let a = grad1(p[xi], xf);
        let b = grad1(p[xi + 1], xf - 1.0);
        // Scaled so the extremes reach ±1 like the higher dimensions.
        2.0 * mix(a, b, fade(xf))
    }

    /// 2D noise (the `z = 0` slice of [`PerlinNoise::noise3`]).
    pub fn noise2(&self, x: Real, y: Real) -> Real {
        self.noise3(x, y, 0.0)
    }

    /// 3D noise.
    pub fn noise3(&self, x: Real, y: Real, z: Real) -> Real {
        let (xi, x) = cell(x);
        let (yi, y) = cell(y);
        let (zi, z) = cell(z);
        let (u, v, w) = (fade(x), fade(y), fade(z));
        let p = &self.perm;

        let a = p[xi] + yi;
        let aa = p[a] + zi;
        let ab = p[a + 1] + zi;
        let b = p[xi + 1] + yi;
        let ba = p[b] + zi;
        let bb = p[b + 1] + zi;

        let near = mix(
            mix(grad3(p[aa], x, y, z), grad3(p[ba], x - 1.0, y, z), u),
            mix(grad3(p[ab], x, y - 1.0, z), grad3(p[bb], x - 1.0, y - 1.0, z), u),
            v,
        );
        let far = mix(
            mix(
                grad3(p[aa + 1], x, y, z - 1.0),
                grad3(p[ba + 1], x - 1.0, y, z - 1.0),
                u,
            ),
            mix(
                grad3(p[ab + 1], x, y - 1.0, z - 1.0),
                grad3(p[bb + 1], x - 1.0, y - 1.0, z - 1.0),
                u,
            ),
            v,
        );
        mix(near, far, w)
    }

    /// Fractal sum of `octaves` 1D noise layers, each at double frequency and
    /// half amplitude.
    pub fn fbm1(&self, x: Real, octaves: u32) -> Real {
        fractal_sum(octaves, |freq| self.noise1(x * freq))
    }

    /// 2D fractal sum.
    pub fn fbm2(&self, x: Real, y: Real, octaves: u32) -> Real {
        fractal_sum(octaves, |freq| self.noise2(x * freq, y * freq))
    }

    /// 3D fractal sum.
    pub fn fbm3(&self, x: Real, y: Real, z: Real, octaves: u32) -> Real {
        fractal_sum(octaves, |freq| self.noise3(x * freq, y * freq, z * freq))
    }

    /// Like [`PerlinNoise::fbm1`] but summing `|noise|`.
    pub fn turbulence1(&self, x: Real, octaves: u32) -> Real {
        fractal_sum(octaves, |freq| self.noise1(x * freq).abs())
    }

    /// 2D turbulence.
    pub fn turbulence2(&self, x: Real, y: Real, octaves: u32) -> Real {
        fractal_sum(octaves, |freq| self.noise2(x * freq, y * freq).abs())
    }

    /// 3D turbulence.
    pub fn turbulence3(&self, x: Real, y: Real, z: Real, octaves: u32) -> Real {
        fractal_sum(octaves, |freq| {
            self.noise3(x * freq, y * freq, z * freq).abs()
        })
    }
}

/// 1D noise from the shared table.
pub fn noise1(x: Real) -> Real {
    DEFAULT_NOISE.noise1(x)
}

/// 2D noise from the shared table.
pub fn noise2(x: Real, y: Real) -> Real {
    DEFAULT_NOISE.noise2(x, y)
}

/// 3D noise from the shared table.
pub fn noise3(x: Real, y: Real, z: Real) -> Real {
    DEFAULT_NOISE.noise3(x, y, z)
}

/// 1D fractal sum from the shared table.
pub fn fbm1(x: Real, octaves: u32) -> Real {
    DEFAULT_NOISE.fbm1(x, octaves)
}

/// 2D fractal sum from the shared table.
pub fn fbm2(x: Real, y: Real, octaves: u32) -> Real {
    DEFAULT_NOISE.fbm2(x, y, octaves)
}

/// 3D fractal sum from the shared table.
pub fn fbm3(x: Real, y: Real, z: Real, octaves: u32) -> Real {
    DEFAULT_NOISE.fbm3(x, y, z, octaves)
}

/// 1D turbulence from the shared table.
pub fn turbulence1(x: Real, octaves: u32) -> Real {
    DEFAULT_NOISE.turbulence1(x, octaves)
}

/// 2D turbulence from the shared table.
pub fn turbulence2(x: Real, y: Real, octaves: u32) -> Real {
    DEFAULT_NOISE.turbulence2(x, y, octaves)
}

/// 3D turbulence from the shared table.
pub fn turbulence3(x: Real, y: Real, z: Real, octaves: u32) -> Real {
    DEFAULT_NOISE.turbulence3(x, y, z, octaves)
}
