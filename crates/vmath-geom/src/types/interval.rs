// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use vmath_core::Real;

/// Smallest accepted ray parameter.
const MIN_T: Real = 1e-7;

/// Closed interval `[min, max]` of accepted ray parameters.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval {
    /// Lower bound (inclusive).
    pub min: Real,
    /// Upper bound (inclusive).
    pub max: Real,
}

impl Interval {
    /// Segment window `[1e-7, 1]`: the direction vector is the full travel.
    pub const SEGMENT: Self = Self::new(MIN_T, 1.0);

    /// Half-line window `[1e-7, ∞)`.
    pub const FORWARD: Self = Self::new(MIN_T, Real::INFINITY);

    /// Interval containing nothing.
    pub const EMPTY: Self = Self::new(Real::INFINITY, Real::NEG_INFINITY);

    /// Creates `[min, max]`. `min > max` yields an empty interval.
    pub const fn new(min: Real, max: Real) -> Self {
        Self { min, max }
    }

    /// `max - min`; negative for an empty interval.
    pub fn size(&self) -> Real {
        self.max - self.min
    }

    /// Inclusive membership.
    pub fn contains(&self, x: Real) -> bool {
        self.min <= x && x <= self.max
    }

    /// Exclusive membership.
    pub fn surrounds(&self, x: Real) -> bool {
        self.min < x && x < self.max
    }

    /// Returns a copy with `max` lowered to `t`, for closest-hit searches.
    #[must_use]
    pub fn shrunk_to(&self, t: Real) -> Self {
        Self::new(self.min, self.max.min(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_is_closed_at_both_ends() {
        assert!(Interval::SEGMENT.contains(1.0));
        assert!(Interval::SEGMENT.contains(MIN_T));
        assert!(!Interval::SEGMENT.contains(0.0));
        assert!(!Interval::SEGMENT.surrounds(1.0));
    }

    #[test]
    fn forward_is_unbounded_and_empty_is_empty() {
        assert!(Interval::FORWARD.contains(1.0e12));
        assert!(!Interval::EMPTY.contains(0.0));
        assert!(Interval::EMPTY.size() < 0.0);
    }

    #[test]
    fn shrinking_never_widens() {
        let w = Interval::SEGMENT.shrunk_to(4.0);
        assert_eq!(w, Interval::SEGMENT);
        assert_eq!(Interval::FORWARD.shrunk_to(4.0).max, 4.0);
    }
}
