use snafu::ensure;

use crate::{
    error::{InvalidArgument, InvalidScale, OutOfRange},
    float::{self, FloatBits},
    BucketBoundary, IndexMapping, MappingError, MIN_SCALE,
};

/// Index mapping for non-positive scales.
///
/// With a scale of `s <= 0`, every bucket spans exactly `2^-s` binary exponents, so the index of a value is its base-2
/// exponent shifted right by `-s`. Lower boundaries are exact powers of two. No logarithm or table is involved.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ExponentMapping {
    scale: i32,
    shift: u32,
    boundary: BucketBoundary,
    min_index: i64,
    max_index: i64,
}

impl ExponentMapping {
    /// The largest scale supported by this mapping.
    pub const MAX_SCALE: i32 = 0;

    /// Creates a new `ExponentMapping` with the given scale and the default bucket boundary convention.
    ///
    /// # Errors
    ///
    /// If the scale is not in `[-10, 0]`, an error is returned.
    pub fn new(scale: i32) -> Result<Self, MappingError> {
        Self::with_boundary(scale, BucketBoundary::default())
    }

    /// Creates a new `ExponentMapping` with the given scale and bucket boundary convention.
    ///
    /// # Errors
    ///
    /// If the scale is not in `[-10, 0]`, an error is returned.
    pub fn with_boundary(scale: i32, boundary: BucketBoundary) -> Result<Self, MappingError> {
        ensure!(
            (MIN_SCALE..=Self::MAX_SCALE).contains(&scale),
            InvalidScale {
                scale,
                min_scale: MIN_SCALE,
                max_scale: Self::MAX_SCALE
            }
        );

        let shift = scale.unsigned_abs();
        Ok(Self {
            scale,
            shift,
            boundary,
            min_index: index_of(FloatBits::new(float::MIN_VALUE), shift, boundary),
            max_index: index_of(FloatBits::new(f64::MAX), shift, boundary),
        })
    }
}

#[inline]
fn index_of(bits: FloatBits, shift: u32, boundary: BucketBoundary) -> i64 {
    let (exponent, significand) = bits.normalize();

    // Arithmetic shift, so negative exponents round toward negative infinity.
    (i64::from(exponent) - boundary.correction(significand)) >> shift
}

impl IndexMapping for ExponentMapping {
    #[inline]
    fn map_to_index(&self, value: f64) -> Result<i64, MappingError> {
        ensure!(float::is_positive_finite(value), InvalidArgument { value });

        Ok(index_of(FloatBits::new(value), self.shift, self.boundary))
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

        // The lowest bucket may start below the smallest subnormal value.
        let exponent = index << self.shift;
        if exponent < i64::from(float::MIN_SUBNORMAL_EXPONENT) {
            return Ok(float::MIN_VALUE);
        }

        Ok(float::compose(exponent as i32, 0))
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
    use super::*;

    fn lower(scale: i32) -> ExponentMapping {
        ExponentMapping::new(scale).unwrap()
    }

    fn upper(scale: i32) -> ExponentMapping {
        ExponentMapping::with_boundary(scale, BucketBoundary::UpperInclusive).unwrap()
    }

    #[test]
    fn scale_zero() {
        let mapping = lower(0);
        let cases = [
            (1.0, 0),
            (1.5, 0),
            (2.0, 1),
            (3.0, 1),
            (4.0, 2),
            (0.75, -1),
            (0.5, -1),
            (0.25, -2),
        ];
        for (value, expected) in cases {
            assert_eq!(mapping.map_to_index(value), Ok(expected), "value {}", value);
        }
    }

    #[test]
    fn scale_zero_upper_inclusive() {
        let mapping = upper(0);
        let cases = [
            (4.0, 1),
            (3.0, 1),
            (2.0, 0),
            (1.5, 0),
            (1.0, -1),
            (0.75, -1),
            (0.5, -2),
            (0.25, -3),
        ];
        for (value, expected) in cases {
            assert_eq!(mapping.map_to_index(value), Ok(expected), "value {}", value);
        }
    }

    #[test]
    fn scale_negative_one() {
        let mapping = lower(-1);
        let cases = [
            (16.0, 2),
            (15.0, 1),
            (8.0, 1),
            (4.0, 1),
            (3.9, 0),
            (3.0, 0),
            (2.0, 0),
            (1.0, 0),
            (0.75, -1),
            (0.5, -1),
            (0.25, -1),
            (0.2, -2),
            (0.125, -2),
            (0.0625, -2),
            (0.06, -3),
        ];
        for (value, expected) in cases {
            assert_eq!(mapping.map_to_index(value), Ok(expected), "value {}", value);
        }
    }

    #[test]
    fn scale_negative_four() {
        for mapping in [lower(-4), upper(-4)] {
            let cases = [
                (f64::from_bits(0x1), -68),
                (f64::from_bits(0x2), -68),
                (f64::from_bits(0x3), -68),
                (f64::MIN_POSITIVE, -64),
                (f64::MIN_POSITIVE * 2.0, -64),
                (f64::MIN_POSITIVE * 4.0, -64),
                (f64::MAX, 63),
                (f64::MAX / 2.0, 63),
                (f64::MAX / 4.0, 63),
                (17.0, 0),
                (16.0 * 1.5, 0),
                (16.0 * 0.75, 0),
                (0.125, -1),
                (0.0625 * 0.75, -1),
            ];
            for (value, expected) in cases {
                assert_eq!(
                    mapping.map_to_index(value),
                    Ok(expected),
                    "value {:e} with {:?}",
                    value,
                    mapping.boundary()
                );
            }
        }
    }

    #[test]
    fn index_range() {
        let mapping = lower(0);
        assert_eq!(mapping.min_index(), -1074);
        assert_eq!(mapping.max_index(), 1023);

        let mapping = upper(0);
        assert_eq!(mapping.min_index(), -1075);
        assert_eq!(mapping.max_index(), 1023);

        let mapping = lower(-4);
        assert_eq!(mapping.min_index(), -68);
        assert_eq!(mapping.max_index(), 63);

        let mapping = lower(-10);
        assert_eq!(mapping.min_index(), -2);
        assert_eq!(mapping.max_index(), 0);
    }

    #[test]
    fn lower_boundaries() {
        let mapping = lower(0);
        assert_eq!(mapping.lower_boundary(0), Ok(1.0));
        assert_eq!(mapping.lower_boundary(1), Ok(2.0));
        assert_eq!(mapping.lower_boundary(-1), Ok(0.5));
        assert_eq!(mapping.lower_boundary(1023), Ok(2f64.powi(1023)));
        assert_eq!(mapping.lower_boundary(-1022), Ok(f64::MIN_POSITIVE));
        assert_eq!(mapping.lower_boundary(-1074), Ok(float::MIN_VALUE));

        let mapping = lower(-1);
        assert_eq!(mapping.lower_boundary(1), Ok(4.0));
        assert_eq!(mapping.lower_boundary(-1), Ok(0.25));

        let mapping = lower(-10);
        assert_eq!(mapping.lower_boundary(0), Ok(1.0));
        assert_eq!(mapping.lower_boundary(-1), Ok(f64::from_bits(1 << 50)));
        assert_eq!(mapping.lower_boundary(-2), Ok(float::MIN_VALUE));
    }

    #[test]
    fn lower_boundary_out_of_range() {
        let mapping = lower(0);
        assert_eq!(
            mapping.lower_boundary(1024),
            Err(MappingError::OutOfRange {
                index: 1024,
                min_index: -1074,
                max_index: 1023
            })
        );
        assert!(mapping.lower_boundary(-1075).is_err());

        let mapping = upper(0);
        assert_eq!(mapping.lower_boundary(-1075), Ok(float::MIN_VALUE));
        assert!(mapping.lower_boundary(-1076).is_err());
    }

    #[test]
    fn invalid_values() {
        let mapping = lower(0);
        for value in [0.0, -0.0, -1.0, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(mapping.map_to_index(value), Err(MappingError::InvalidArgument { value }));
        }
        assert!(matches!(
            mapping.map_to_index(f64::NAN),
            Err(MappingError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn invalid_scales() {
        for scale in [-11, 1, 20, i32::MIN, i32::MAX] {
            assert_eq!(
                ExponentMapping::new(scale),
                Err(MappingError::InvalidScale {
                    scale,
                    min_scale: -10,
                    max_scale: 0
                })
            );
        }
        for scale in -10..=0 {
            assert_eq!(lower(scale).scale(), scale);
        }
    }
}
