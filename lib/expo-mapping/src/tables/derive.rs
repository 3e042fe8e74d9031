//! Exact derivation of significand thresholds with native integer arithmetic.
//!
//! The threshold for position `k` at scale `s` is the smallest integer `M` in `[2^52, 2^53)` such that
//! `M^(2^s) >= 2^(52 * 2^s + k)`, with its implicit leading bit stripped. Starting from an `exp2` estimate, candidates
//! are tested by squaring them `s` times while keeping a lower and an upper bound of the power in 128-bit floating
//! point, rounded toward zero and away from it respectively. When the bounds straddle the target, the comparison is
//! undecidable and derivation fails rather than guess.

use std::time::Instant;

use snafu::ensure;
use tracing::debug;

use super::{decided, MIN_TABLE_SCALE};
use crate::{
    error::InvalidScale,
    float::{FloatBits, SIGNIFICAND_MASK, SIGNIFICAND_WIDTH},
    MappingError, MAX_SCALE,
};

const IMPLICIT_BIT: u64 = 1 << SIGNIFICAND_WIDTH;

/// Number of candidate adjustments tolerated before giving up on an estimate.
const MAX_ADJUSTMENTS: u32 = 64;

/// Derives the table of significand thresholds for the given scale.
///
/// This is exact, but takes time proportional to `s * 2^s`: a few seconds for the largest scales in a release build.
///
/// # Errors
///
/// If the scale is not in `[1, 20]`, or an entry cannot be decided, an error is returned.
pub fn derive_thresholds(scale: i32) -> Result<Vec<u64>, MappingError> {
    ensure!(
        (MIN_TABLE_SCALE..=MAX_SCALE).contains(&scale),
        InvalidScale {
            scale,
            min_scale: MIN_TABLE_SCALE,
            max_scale: MAX_SCALE
        }
    );

    let start = Instant::now();
    let squarings = scale.unsigned_abs();
    let thresholds = (0..1usize << squarings)
        .map(|position| decided(derive_threshold(squarings, position), scale, position))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(
        scale,
        entries = thresholds.len(),
        elapsed = ?start.elapsed(),
        "Derived significand thresholds."
    );

    Ok(thresholds)
}

/// Derives a single threshold, or `None` if it cannot be decided.
pub(crate) fn derive_threshold(squarings: u32, position: usize) -> Option<u64> {
    let buckets = (1u64 << squarings) as f64;
    let estimate = (position as f64 / buckets).exp2();
    refine_threshold(squarings, position, FloatBits::new(estimate).significand())
}

/// Walks from an estimated significand to the exact threshold, or returns `None` if it cannot be decided.
///
/// The estimate must be within a few ulps of the threshold.
pub(crate) fn refine_threshold(squarings: u32, position: usize, estimate: u64) -> Option<u64> {
    let mut candidate = estimate | IMPLICIT_BIT;

    let mut adjustments = 0;
    while !reaches(candidate, squarings, position)? {
        candidate += 1;
        adjustments += 1;
        if adjustments > MAX_ADJUSTMENTS {
            return None;
        }
    }
    while reaches(candidate - 1, squarings, position)? {
        candidate -= 1;
        adjustments += 1;
        if adjustments > MAX_ADJUSTMENTS {
            return None;
        }
    }

    Some(candidate & SIGNIFICAND_MASK)
}

/// Decides whether `candidate^(2^squarings) >= 2^(52 * 2^squarings + position)`.
///
/// `candidate` includes the implicit leading bit.
pub(crate) fn reaches(candidate: u64, squarings: u32, position: usize) -> Option<bool> {
    let target = (i64::from(SIGNIFICAND_WIDTH) << squarings) + position as i64;

    let mut lower = Wide::new(candidate);
    let mut upper = lower;
    for _ in 0..squarings {
        lower = lower.square(false);
        upper = upper.square(true);
    }

    // `lower >= 2^(127 + exponent)` and `upper < 2^(128 + exponent)`.
    if lower.exponent + 127 >= target {
        Some(true)
    } else if upper.exponent + 128 <= target {
        Some(false)
    } else {
        None
    }
}

/// A positive number `significand * 2^exponent`, with the top bit of `significand` set.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Wide {
    significand: u128,
    exponent: i64,
}

impl Wide {
    fn new(value: u64) -> Self {
        debug_assert!(value != 0);

        let shift = u128::from(value).leading_zeros();
        Self {
            significand: u128::from(value) << shift,
            exponent: -i64::from(shift),
        }
    }

    /// Squares the number, keeping the top 128 bits of the product and rounding the dropped bits away.
    fn square(self, round_up: bool) -> Self {
        let (high, low) = widening_square(self.significand);

        // The product of two normalized significands has its top bit in one of the two highest positions.
        let (mut significand, dropped, carry) = if high >> 127 == 1 {
            (high, low, 128)
        } else {
            ((high << 1) | (low >> 127), low << 1, 127)
        };
        let mut exponent = 2 * self.exponent + carry;

        if round_up && dropped != 0 {
            significand = match significand.checked_add(1) {
                Some(significand) => significand,
                None => {
                    exponent += 1;
                    1 << 127
                }
            };
        }

        Self { significand, exponent }
    }
}

/// Returns the high and low halves of `value * value`.
fn widening_square(value: u128) -> (u128, u128) {
    let high = value >> 64;
    let low = value & u128::from(u64::MAX);

    // value^2 = high^2 * 2^128 + 2 * high * low * 2^64 + low^2
    let cross = high * low;
    let (low_half, carry) = (low * low).overflowing_add(cross << 65);
    let high_half = high * high + (cross >> 63) + u128::from(carry);

    (high_half, low_half)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::{embedded_thresholds, MAX_EMBEDDED_SCALE};

    #[test]
    fn widening_square_known_values() {
        assert_eq!(widening_square(0), (0, 0));
        assert_eq!(widening_square(3), (0, 9));
        assert_eq!(widening_square(1 << 64), (1, 0));
        assert_eq!(widening_square(u128::MAX), (u128::MAX - 1, 1));

        let value = (1u128 << 127) | 1;
        assert_eq!(widening_square(value), ((1 << 126) | 1, 1));
    }

    #[test]
    fn wide_square_bounds() {
        // 3^2 = 9 is exact in both directions.
        let three = Wide::new(3);
        assert_eq!(three.square(false), three.square(true));

        // (2^127 + 1)^2 needs more than 128 bits.
        let value = Wide {
            significand: (1 << 127) | 1,
            exponent: 0,
        };
        let lower = value.square(false);
        let upper = value.square(true);
        assert_eq!(lower.exponent, upper.exponent);
        assert_eq!(lower.significand + 1, upper.significand);
    }

    #[test]
    fn first_position_is_one() {
        for squarings in 1..=MAX_SCALE.unsigned_abs() {
            assert_eq!(reaches(IMPLICIT_BIT, squarings, 0), Some(true));
            assert_eq!(reaches(IMPLICIT_BIT - 1, squarings, 0), Some(false));
            assert_eq!(derive_threshold(squarings, 0), Some(0));
        }
    }

    #[test]
    fn matches_embedded_tables() {
        for scale in MIN_TABLE_SCALE..=MAX_EMBEDDED_SCALE {
            let derived = derive_thresholds(scale).unwrap();
            assert_eq!(Some(&derived[..]), embedded_thresholds(scale), "scale {}", scale);
        }
    }

    #[test]
    fn known_entries_at_large_scales() {
        assert_eq!(derive_threshold(12, 516), Some(0x175be85981993));
        assert_eq!(derive_threshold(12, 1100), Some(0x3460b1b9fd712));
        assert_eq!(derive_threshold(16, 33311), Some(0x6c1fb62ada2a1));
        assert_eq!(derive_threshold(16, 65535), Some(0xfffe9d1c4b0f4));
    }

    #[test]
    fn refines_from_nearby_estimates() {
        let thresholds = embedded_thresholds(MAX_EMBEDDED_SCALE).unwrap();
        let squarings = MAX_EMBEDDED_SCALE.unsigned_abs();
        for position in [1, 100, 513, thresholds.len() - 1] {
            let threshold = thresholds[position];
            for estimate in [threshold - 3, threshold - 1, threshold, threshold + 1, threshold + 3] {
                assert_eq!(refine_threshold(squarings, position, estimate), Some(threshold));
            }
        }
    }

    #[test]
    fn invalid_scales() {
        assert!(derive_thresholds(0).is_err());
        assert!(derive_thresholds(21).is_err());
    }
}
