// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::math::{consts::TAU, Real, SphVec, Vec3};

/// Stateful `xoroshiro128+` pseudo-random number generator.
///
/// * Not cryptographically secure; use for sampling and noise tables only.
/// * Matching seeds yield identical sequences across supported platforms, so
///   anything built from it (noise permutation tables, jittered samples) is
///   reproducible.
#[derive(Debug, Clone, Copy)]
pub struct Prng {
    state: [u64; 2],
}

impl Prng {
    /// Constructs a PRNG from two 64-bit seeds.
    pub fn from_seed(seed0: u64, seed1: u64) -> Self {
        let mut state = [seed0, seed1];
        if state[0] == 0 && state[1] == 0 {
            state[0] = 0x9e37_79b9_7f4a_7c15;
        }
        Self { state }
    }

    /// Constructs a PRNG from a single 64-bit seed via SplitMix64 expansion.
    pub fn from_seed_u64(seed: u64) -> Self {
        fn splitmix64(state: &mut u64) -> u64 {
            *state = state.wrapping_add(0x9e37_79b9_7f4a_7c15);
            let mut z = *state;
            z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
            z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
            z ^ (z >> 31)
        }

        let mut sm_state = seed;
        let mut state = [splitmix64(&mut sm_state), splitmix64(&mut sm_state)];
        if state[0] == 0 && state[1] == 0 {
            state[0] = 0x9e37_79b9_7f4a_7c15;
        }
        Self { state }
    }

    fn next_u64(&mut self) -> u64 {
        let s0 = self.state[0];
        let mut s1 = self.state[1];
        let result = s0.wrapping_add(s1);

        s1 ^= s0;
        self.state[0] = s0.rotate_left(55) ^ s1 ^ (s1 << 14);
        self.state[1] = s1.rotate_left(36);

        result
    }

    /// Uniform integer in `[0, span)` by rejection sampling (no modulo bias).
    fn next_below(&mut self, span: u64) -> u64 {
        if span.is_power_of_two() {
            return self.next_u64() & (span - 1);
        }
        let bound = u64::MAX - u64::MAX % span;
        loop {
            let candidate = self.next_u64();
            if candidate < bound {
                break candidate % span;
            }
        }
    }

    /// Returns the next value in `[0, 1)`.
    ///
    /// The high state bits fill the mantissa of a number in `[1, 2)`, which is
    /// then shifted down; this keeps sampling uniform at either scalar width.
    pub fn next_real(&mut self) -> Real {
        let raw = self.next_u64();
        #[cfg(not(feature = "single_precision"))]
        {
            f64::from_bits((raw >> 12) | 0x3ff0_0000_0000_0000) - 1.0
        }
        #[cfg(feature = "single_precision")]
        {
            f32::from_bits(((raw >> 41) as u32) | 0x3f80_0000) - 1.0
        }
    }

    /// Returns a value in `[0, range)`.
    pub fn frand(&mut self, range: Real) -> Real {
        self.next_real() * range
    }

    /// Returns the next integer in the inclusive range `[min, max]`.
    ///
    /// Uses rejection sampling to avoid modulo bias, ensuring every value in
    /// the range is produced with equal probability.
    pub fn next_int(&mut self, min: i32, max: i32) -> i32 {
        assert!(min <= max, "invalid range: {min}..={max}");
        let span = (i64::from(max) - i64::from(min)) as u64 + 1;
        if span == 1 {
            return min;
        }
        let offset = self.next_below(span) as i64 + i64::from(min);
        offset as i32
    }

    /// Uniformly distributed point on the surface of a sphere of `radius`
    /// centred at the origin.
    pub fn sphrand(&mut self, radius: Real) -> Vec3 {
        let theta = TAU * self.next_real();
        let phi = (2.0 * self.next_real() - 1.0).clamp(-1.0, 1.0).acos();
        SphVec::new(theta, phi, radius).to_vec3()
    }

    /// Fisher–Yates shuffle of `items` in place.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.next_below(i as u64 + 1) as usize;
            items.swap(i, j);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_int_returns_single_value_for_equal_bounds() {
        let mut prng = Prng::from_seed(42, 99);
        assert_eq!(prng.next_int(7, 7), 7);
    }

    #[test]
    fn next_int_handles_full_i32_range() {
        let mut prng = Prng::from_seed(0xDEADBEEF, 0xFACEFEED);
        let values: Vec<i32> = (0..3).map(|_| prng.next_int(i32::MIN, i32::MAX)).collect();
        assert_eq!(values, vec![1501347292, 1946982111, -117316573]);
    }

    #[test]
    fn next_real_stays_in_unit_interval() {
        let mut prng = Prng::from_seed_u64(7);
        for _ in 0..1000 {
            let v = prng.next_real();
            assert!((0.0..1.0).contains(&v), "{v} escaped [0, 1)");
        }
    }

    #[test]
    fn sphrand_lands_on_requested_radius() {
        let mut prng = Prng::from_seed_u64(11);
        for _ in 0..100 {
            let p = prng.sphrand(2.5);
            assert!((p.length() - 2.5).abs() < 1e-4);
        }
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut prng = Prng::from_seed_u64(3);
        let mut items: Vec<u32> = (0..64).collect();
        prng.shuffle(&mut items);
        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..64).collect::<Vec<u32>>());
    }
}
