//! Every value lies between the lower boundary of its bucket and the lower boundary of the next bucket.

use expo_mapping::{float::FloatBits, BucketBoundary, ExponentMapping, IndexMapping, Mapping};
use proptest::{prelude::*, test_runner::TestCaseError};
use rand::{rngs::SmallRng, Rng as _, SeedableRng as _};

use crate::common::{
    all_mappings, arb_positive_finite, arb_subnormal, around_boundary, next_down, pow2, random_positive_finite,
    swept_indices,
};

const BOUNDARIES: [BucketBoundary; 2] = [BucketBoundary::LowerInclusive, BucketBoundary::UpperInclusive];

fn check<M: IndexMapping>(mapping: &M, value: f64) -> Result<(), TestCaseError> {
    match mapping.boundary() {
        BucketBoundary::LowerInclusive => check_lower_inclusive(mapping, value),
        BucketBoundary::UpperInclusive => check_upper_inclusive(mapping, value),
    }
}

mod common;

fn check_lower_inclusive<M: IndexMapping>(mapping: &M, value: f64) -> Result<(), TestCaseError> {
    let index = mapping.map_to_index(value).unwrap();
    let lower = mapping.lower_boundary(index).unwrap();
    prop_assert!(
        lower <= value,
        "scale {}: bucket {} starts at {:e}, above {:e}",
        mapping.scale(),
        index,
        lower,
        value
    );

    // The last bucket is unbounded within the doubles.
    if index < mapping.max_index() {
        let upper = mapping.lower_boundary(index + 1).unwrap();
        prop_assert!(
            value < upper,
            "scale {}: bucket {} ends at {:e}, not above {:e}",
            mapping.scale(),
            index,
            upper,
            value
        );
    }
    Ok(())
}

fn check_upper_inclusive<M: IndexMapping>(mapping: &M, value: f64) -> Result<(), TestCaseError> {
    let index = mapping.map_to_index(value).unwrap();
    let lower = mapping.lower_boundary(index).unwrap();
    prop_assert!(lower <= value, "scale {}: {:e} below bucket {}", mapping.scale(), value, index);

    // Exact powers of two never open a bucket, unless the true boundary was clamped or rounded onto them.
    let bits = FloatBits::new(value);
    if bits.is_power_of_two() && value >= f64::MIN_POSITIVE {
        prop_assert!(lower < value, "scale {}: {:e} opens bucket {}", mapping.scale(), value, index);
    }

    if index < mapping.max_index() {
        let upper = mapping.lower_boundary(index + 1).unwrap();
        prop_assert!(value <= upper, "scale {}: {:e} above bucket {}", mapping.scale(), value, index);
    }
    Ok(())
}

#[test]
fn test_negative_scale_subnormals() {
    for boundary in [BucketBoundary::LowerInclusive, BucketBoundary::UpperInclusive] {
        let mapping = ExponentMapping::with_boundary(-4, boundary).unwrap();
        for value in [pow2(-1074), pow2(-1073)] {
            let index = mapping.map_to_index(value).unwrap();
            assert_eq!(index, -68);

            let lower = mapping.lower_boundary(index).unwrap();
            let upper = mapping.lower_boundary(index + 1).unwrap();
            assert!(lower.is_normal() || lower.is_subnormal());
            assert!(upper.is_normal() || upper.is_subnormal());
            assert!(lower <= value && value < upper);
        }
    }
}

#[test]
fn test_smallest_value_in_bucket() {
    // Lower boundaries are the smallest doubles of their buckets. Below the normal range, a bucket may hold no double
    // at all, so only buckets starting at normal values are checked.
    let mut rng = SmallRng::seed_from_u64(0x5EED);
    for mapping in all_mappings(BucketBoundary::LowerInclusive) {
        let first_normal = mapping.map_to_index(f64::MIN_POSITIVE).unwrap();
        for _ in 0..200 {
            let index = rng.random_range(first_normal..=mapping.max_index());
            let lower = mapping.lower_boundary(index).unwrap();
            assert_eq!(mapping.map_to_index(lower), Ok(index), "scale {}", mapping.scale());

            let below = mapping.map_to_index(next_down(lower)).unwrap();
            assert!(below < index, "scale {}: bucket {}", mapping.scale(), index);
        }
    }
}

#[test]
fn test_random_values() {
    let mut rng = SmallRng::seed_from_u64(0xC0FFEE);
    let mappings = BOUNDARIES.into_iter().flat_map(all_mappings).collect::<Vec<_>>();
    for _ in 0..2000 {
        let value = random_positive_finite(&mut rng);
        for mapping in &mappings {
            check(mapping, value).unwrap();
        }
    }
}

#[test]
fn test_extreme_values() {
    let values = [
        pow2(-1074),
        pow2(-1073),
        f64::from_bits(3),
        next_down(f64::MIN_POSITIVE),
        f64::MIN_POSITIVE,
        1.0,
        next_down(2.0),
        next_down(f64::MAX),
        f64::MAX,
    ];
    for boundary in BOUNDARIES {
        for mapping in all_mappings(boundary) {
            for value in values {
                check(&mapping, value).unwrap();
            }
        }
    }
}

#[test]
fn test_values_around_boundaries() {
    for boundary in BOUNDARIES {
        for mapping in all_mappings(boundary) {
            for exponent in [-1070, -1022, -1, 0, 1023] {
                for index in swept_indices(&mapping, exponent) {
                    for value in around_boundary(&mapping, index) {
                        check(&mapping, value).unwrap();
                    }
                }
            }
        }
    }
}

proptest! {
    #[test]
    fn property_test_lower_inclusive_containment(value in arb_positive_finite()) {
        for mapping in all_mappings(BucketBoundary::LowerInclusive) {
            check_lower_inclusive(&mapping, value)?;
        }
    }

    #[test]
    fn property_test_upper_inclusive_containment(value in arb_positive_finite()) {
        for mapping in all_mappings(BucketBoundary::UpperInclusive) {
            check_upper_inclusive(&mapping, value)?;
        }
    }

    #[test]
    fn property_test_subnormal_containment(value in arb_subnormal()) {
        for boundary in BOUNDARIES {
            for mapping in all_mappings(boundary) {
                check(&mapping, value)?;
            }
        }
    }

    #[test]
    fn property_test_default_mapping_containment(scale in -10i32..=10, value in arb_positive_finite()) {
        check_lower_inclusive(&Mapping::new(scale).unwrap(), value)?;
    }
}
