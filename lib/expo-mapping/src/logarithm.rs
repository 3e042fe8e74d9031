use std::f64::consts::LN_2;

use snafu::ensure;

use crate::{
    error::{InvalidArgument, InvalidScale, OutOfRange},
    float::{self, FloatBits, SIGNIFICAND_WIDTH},
    tables::{reaches, refine_threshold},
    BucketBoundary, IndexMapping, MappingError, MAX_SCALE,
};

/// Distance from an integer, in buckets, below which a logarithm estimate is checked exactly.
///
/// The estimate is off by less than `1e-9` buckets at every scale.
const SETTLE_MARGIN: f64 = 1e-6;

/// Index mapping for positive scales, based on the natural logarithm.
///
/// The value is split into its binary exponent `e` and its fraction `f` in `[1, 2)`, and the index is
/// `e * 2^s + floor(ln(f) * 2^s / ln(2))`. Only the sub-bucket within the binary exponent depends on floating-point
/// arithmetic. When the scaled logarithm lands close enough to an integer for rounding to matter, the sub-bucket is
/// settled exactly by raising the significand to the power `2^s` in wide integer arithmetic. Lower boundaries start
/// from `exp(k * ln(2) / 2^s)` and are refined the same way.
///
/// Indices and lower boundaries are therefore identical to those of
/// [`LookupTableMapping`][crate::LookupTableMapping], without a table and at the cost of a logarithm per call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LogarithmMapping {
    scale: i32,
    scale_factor: f64,
    inverse_scale_factor: f64,
    boundary: BucketBoundary,
    min_index: i64,
    max_index: i64,
}

impl LogarithmMapping {
    /// The smallest scale supported by this mapping.
    pub const MIN_SCALE: i32 = 1;

    /// Creates a new `LogarithmMapping` with the given scale and the default bucket boundary convention.
    ///
    /// # Errors
    ///
    /// If the scale is not in `[1, 20]`, an error is returned.
    pub fn new(scale: i32) -> Result<Self, MappingError> {
        Self::with_boundary(scale, BucketBoundary::default())
    }

    /// Creates a new `LogarithmMapping` with the given scale and bucket boundary convention.
    ///
    /// # Errors
    ///
    /// If the scale is not in `[1, 20]`, an error is returned.
    pub fn with_boundary(scale: i32, boundary: BucketBoundary) -> Result<Self, MappingError> {
        ensure!(
            (Self::MIN_SCALE..=MAX_SCALE).contains(&scale),
            InvalidScale {
                scale,
                min_scale: Self::MIN_SCALE,
                max_scale: MAX_SCALE
            }
        );

        let buckets_per_exponent = f64::from(1u32 << scale);
        let mut mapping = Self {
            scale,
            scale_factor: buckets_per_exponent / LN_2,
            inverse_scale_factor: LN_2 / buckets_per_exponent,
            boundary,
            min_index: 0,
            max_index: 0,
        };
        mapping.min_index = mapping.index_of(FloatBits::new(float::MIN_VALUE));
        mapping.max_index = mapping.index_of(FloatBits::new(f64::MAX));

        Ok(mapping)
    }

    /// Returns `2^s / ln(2)`, the factor converting a natural logarithm into a number of buckets.
    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    /// Returns `ln(2) / 2^s`, the natural logarithm of the base.
    pub fn inverse_scale_factor(&self) -> f64 {
        self.inverse_scale_factor
    }

    #[inline]
    fn sub_index_mask(&self) -> i64 {
        (1 << self.scale) - 1
    }

    #[inline]
    fn index_of(&self, bits: FloatBits) -> i64 {
        let (exponent, significand) = bits.normalize();

        // `ln(f)` is in `[0, ln(2))`, so truncating floors it. Rounding can still push fractions just below 2 up to
        // `2^s`, which belongs to the next binary exponent.
        let estimate = float::fraction(significand).ln() * self.scale_factor;
        let mut sub_index = (estimate as i64).min(self.sub_index_mask());

        let offset = estimate - estimate.floor();
        if !(SETTLE_MARGIN..=1.0 - SETTLE_MARGIN).contains(&offset) {
            sub_index = self.settle(sub_index, significand);
        }

        (i64::from(exponent) << self.scale) + sub_index - self.boundary.correction(significand)
    }

    /// Corrects a sub-index estimate that may be one bucket off, by comparing the significand against the thresholds
    /// of the estimated bucket and the next one.
    fn settle(&self, estimate: i64, significand: u64) -> i64 {
        let squarings = self.scale.unsigned_abs();
        let candidate = significand | (1 << SIGNIFICAND_WIDTH);
        let reaches_position = |position: i64| reaches(candidate, squarings, position as usize);

        if estimate > 0 && reaches_position(estimate) == Some(false) {
            estimate - 1
        } else if estimate < self.sub_index_mask() && reaches_position(estimate + 1) == Some(true) {
            estimate + 1
        } else {
            estimate
        }
    }

    /// Returns the significand of the smallest double not below `2^(sub_index / 2^s)`.
    fn threshold(&self, sub_index: i64) -> u64 {
        // `b^k` for `k < 2^s` is in `[1, 2)`, so only its significand carries over.
        let estimate = FloatBits::new((sub_index as f64 * self.inverse_scale_factor).exp()).significand();

        // Thresholds up to the largest scale are all decidable; the estimate only stands in if one were not.
        refine_threshold(self.scale.unsigned_abs(), sub_index as usize, estimate).unwrap_or(estimate)
    }
}

impl IndexMapping for LogarithmMapping {
    #[inline]
    fn map_to_index(&self, value: f64) -> Result<i64, MappingError> {
        ensure!(float::is_positive_finite(value), InvalidArgument { value });

        Ok(self.index_of(FloatBits::new(value)))
    }

    fn lower_boundary(&self, index: i64) -> Result<f64, MappingError> {
        ensure!(
            (self.min_index..=self.max_index).contains(&index),
            OutOfRange {
                index,
                min_index: self.min_index,
                max_index: self.max_index
            }
        );

        let exponent = index >> self.scale;
        if exponent < i64::from(float::MIN_SUBNORMAL_EXPONENT) {
            return Ok(float::MIN_VALUE);
        }

        // `b^k` for `k < 2^s` is in `[1, 2)`, so only its significand carries over.
        let sub_index = index & self.sub_index_mask();
        Ok(float::compose(exponent as i32, self.threshold(sub_index)))
    }

    fn scale(&self) -> i32 {
        self.scale
    }

    fn boundary(&self) -> BucketBoundary {
        self.boundary
    }

    fn min_index(&self) -> i64 {
        self.min_index
    }

    fn max_index(&self) -> i64 {
        self.max_index
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::ApproxEqUlps as _;

    use super::*;
    use crate::LookupTableMapping;

    #[test]
    fn scale_three() {
        let mapping = LogarithmMapping::new(3).unwrap();
        assert_eq!(mapping.map_to_index(1.0), Ok(0));
        assert_eq!(mapping.map_to_index(1.5), Ok(4));
        assert_eq!(mapping.map_to_index(2.0), Ok(8));
        assert_eq!(mapping.map_to_index(0.5), Ok(-8));
        assert_eq!(mapping.map_to_index(1.09), Ok(0));
        assert_eq!(mapping.map_to_index(1.1), Ok(1));

        let mapping = LogarithmMapping::with_boundary(3, BucketBoundary::UpperInclusive).unwrap();
        assert_eq!(mapping.map_to_index(1.0), Ok(-1));
        assert_eq!(mapping.map_to_index(2.0), Ok(7));
        assert_eq!(mapping.map_to_index(1.5), Ok(4));
    }

    #[test]
    fn fractions_near_two_stay_in_their_exponent() {
        for scale in 1..=MAX_SCALE {
            let mapping = LogarithmMapping::new(scale).unwrap();
            let below_two = f64::from_bits(2f64.to_bits() - 1);
            assert_eq!(mapping.map_to_index(below_two), Ok((1 << scale) - 1));
            assert_eq!(mapping.map_to_index(f64::MAX), Ok(mapping.max_index()));
            assert_eq!(mapping.max_index(), (1024 << scale) - 1);
        }
    }

    #[test]
    fn scale_factors() {
        let mapping = LogarithmMapping::new(1).unwrap();
        assert!(mapping.scale_factor().approx_eq_ulps(&(2.0 / LN_2), 1));
        assert!(mapping.inverse_scale_factor().approx_eq_ulps(&(LN_2 / 2.0), 1));
    }

    #[test]
    fn lower_boundaries() {
        let mapping = LogarithmMapping::new(3).unwrap();
        assert_eq!(mapping.lower_boundary(0), Ok(1.0));
        assert_eq!(mapping.lower_boundary(8), Ok(2.0));
        assert_eq!(mapping.lower_boundary(-8), Ok(0.5));

        // The smallest double not below `sqrt(2)` happens to be the nearest one.
        assert_eq!(mapping.lower_boundary(4), Ok(2f64.sqrt()));

        let boundary = mapping.lower_boundary(1).unwrap();
        assert!(boundary.approx_eq_ulps(&2f64.powf(0.125), 2));
        assert_eq!(mapping.map_to_index(boundary), Ok(1));
    }

    #[test]
    fn matches_lookup_table_near_thresholds() {
        let mapping = LogarithmMapping::new(4).unwrap();
        assert_eq!(mapping.map_to_index(1.6104903319492543), Ok(10));

        let mapping = LogarithmMapping::new(2).unwrap();
        let boundary = mapping.lower_boundary(1).unwrap();
        assert_eq!(boundary, f64::from_bits(0x3FF3_06FE_0A31_B716));
        assert_eq!(mapping.map_to_index(boundary), Ok(1));
        assert_eq!(mapping.map_to_index(f64::from_bits(boundary.to_bits() - 1)), Ok(0));

        for scale in [4, 9, 13] {
            let mapping = LogarithmMapping::new(scale).unwrap();
            let lookup = LookupTableMapping::new(scale).unwrap();
            for position in 1..lookup.table().size().min(512) {
                let threshold = lookup.lower_boundary(position as i64).unwrap();
                let bits = threshold.to_bits();
                for value in [bits - 1, bits, bits + 1].map(f64::from_bits) {
                    assert_eq!(
                        mapping.map_to_index(value),
                        lookup.map_to_index(value),
                        "scale {}: {:e}",
                        scale,
                        value
                    );
                }
                assert_eq!(mapping.lower_boundary(position as i64), Ok(threshold));
            }
        }
    }

    #[test]
    fn settles_estimates_one_bucket_off() {
        let mapping = LogarithmMapping::new(4).unwrap();
        let significand = FloatBits::new(1.6104903319492543).significand();
        assert_eq!(mapping.settle(11, significand), 10);
        assert_eq!(mapping.settle(9, significand), 10);
        assert_eq!(mapping.settle(10, significand), 10);
        assert_eq!(mapping.settle(0, 0), 0);
        assert_eq!(mapping.settle(15, float::SIGNIFICAND_MASK), 15);
    }

    #[test]
    fn lower_boundary_range() {
        let mapping = LogarithmMapping::new(3).unwrap();
        assert_eq!(mapping.min_index(), -1074 << 3);
        assert_eq!(mapping.lower_boundary(mapping.min_index()), Ok(float::MIN_VALUE));
        assert!(mapping.lower_boundary(mapping.min_index() - 1).is_err());
        assert!(mapping.lower_boundary(mapping.max_index() + 1).is_err());

        let mapping = LogarithmMapping::with_boundary(3, BucketBoundary::UpperInclusive).unwrap();
        assert_eq!(mapping.min_index(), (-1074 << 3) - 1);
        assert_eq!(mapping.lower_boundary(mapping.min_index()), Ok(float::MIN_VALUE));
    }

    #[test]
    fn invalid_scales() {
        for scale in [-1, 0, 21] {
            assert_eq!(
                LogarithmMapping::new(scale),
                Err(MappingError::InvalidScale {
                    scale,
                    min_scale: 1,
                    max_scale: 20
                })
            );
        }
    }

    #[test]
    fn invalid_values() {
        let mapping = LogarithmMapping::new(5).unwrap();
        assert!(mapping.map_to_index(0.0).is_err());
        assert!(mapping.map_to_index(-3.0).is_err());
        assert!(mapping.map_to_index(f64::NAN).is_err());
        assert!(mapping.map_to_index(f64::INFINITY).is_err());
    }
}
