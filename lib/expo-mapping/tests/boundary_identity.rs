//! Exact powers of two sit on bucket boundaries, and map to the bucket their convention assigns them to.

use expo_mapping::{BucketBoundary, ExponentMapping, IndexMapping as _, MAX_SCALE, MIN_SCALE};

use crate::common::{exact_mappings, logarithm_mappings, next_down, next_up, pow2};

mod common;

const MIN_EXPONENT: i32 = -1074;
const MAX_EXPONENT: i32 = 1023;

#[test]
fn test_upper_inclusive_positive_scales() {
    let mut mappings = exact_mappings(BucketBoundary::UpperInclusive);
    mappings.retain(|mapping| mapping.scale() >= 0);
    for mapping in mappings {
        let scale = mapping.scale();
        for exponent in MIN_EXPONENT..=MAX_EXPONENT {
            let value = pow2(exponent);
            let index = i64::from(exponent) << scale;
            assert_eq!(mapping.map_to_index(value), Ok(index - 1), "scale {}: 2^{}", scale, exponent);
            assert_eq!(mapping.lower_boundary(index), Ok(value), "scale {}: 2^{}", scale, exponent);
        }
    }
}

#[test]
fn test_lower_inclusive_positive_scales() {
    let mut mappings = exact_mappings(BucketBoundary::LowerInclusive);
    mappings.retain(|mapping| mapping.scale() >= 0);
    for mapping in mappings {
        let scale = mapping.scale();
        for exponent in MIN_EXPONENT..=MAX_EXPONENT {
            let value = pow2(exponent);
            let index = i64::from(exponent) << scale;
            assert_eq!(mapping.map_to_index(value), Ok(index), "scale {}: 2^{}", scale, exponent);
            assert_eq!(mapping.lower_boundary(index), Ok(value), "scale {}: 2^{}", scale, exponent);
        }
    }
}

#[test]
fn test_logarithm_powers_of_two() {
    for boundary in [BucketBoundary::LowerInclusive, BucketBoundary::UpperInclusive] {
        let correction = i64::from(boundary == BucketBoundary::UpperInclusive);
        for mapping in logarithm_mappings(boundary) {
            let scale = mapping.scale();
            for exponent in MIN_EXPONENT..=MAX_EXPONENT {
                let index = i64::from(exponent) << scale;
                assert_eq!(mapping.map_to_index(pow2(exponent)), Ok(index - correction));
                assert_eq!(mapping.lower_boundary(index), Ok(pow2(exponent)));
            }
        }
    }
}

#[test]
fn test_negative_scales() {
    // Each bucket spans `2^-s` exponents, so only every `2^-s`-th power of two is a boundary.
    for scale in MIN_SCALE..0 {
        let span = 1i32 << scale.unsigned_abs();
        let lower = ExponentMapping::new(scale).unwrap();
        let upper = ExponentMapping::with_boundary(scale, BucketBoundary::UpperInclusive).unwrap();
        for exponent in (MIN_EXPONENT..=MAX_EXPONENT).filter(|exponent| exponent % span == 0) {
            let index = i64::from(exponent / span);
            let value = pow2(exponent);
            assert_eq!(lower.map_to_index(value), Ok(index));
            assert_eq!(upper.map_to_index(value), Ok(index - 1));
            assert_eq!(lower.lower_boundary(index), Ok(value));
            assert_eq!(upper.lower_boundary(index), Ok(value));
        }
    }
}

#[test]
fn test_neighbors_of_powers_of_two() {
    // Only the power of two itself depends on the convention.
    for scale in 0..=MAX_SCALE {
        let lower = exact_mappings(BucketBoundary::LowerInclusive)
            .into_iter()
            .find(|mapping| mapping.scale() == scale)
            .unwrap();
        let upper = exact_mappings(BucketBoundary::UpperInclusive)
            .into_iter()
            .find(|mapping| mapping.scale() == scale)
            .unwrap();
        for exponent in [-1022, -1, 0, 1, 52, 1000] {
            let value = pow2(exponent);
            let index = i64::from(exponent) << scale;
            for neighbor in [next_down(value), next_up(value)] {
                assert_eq!(lower.map_to_index(neighbor), upper.map_to_index(neighbor));
            }
            assert_eq!(lower.map_to_index(next_down(value)), Ok(index - 1));
            assert_eq!(lower.map_to_index(next_up(value)), Ok(index));
        }
    }
}
