//! The logarithm and lookup-table mappings agree on every positive scale.

use expo_mapping::{BucketBoundary, IndexMapping as _, LogarithmMapping, LookupTableMapping, MAX_SCALE};
use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng as _, SeedableRng as _};

use crate::common::{arb_positive_finite, arb_subnormal, around_boundary, random_subnormal, swept_indices};

mod common;

const BOUNDARIES: [BucketBoundary; 2] = [BucketBoundary::LowerInclusive, BucketBoundary::UpperInclusive];

fn mapping_pairs() -> Vec<(LogarithmMapping, LookupTableMapping)> {
    let mut pairs = Vec::new();
    for boundary in BOUNDARIES {
        for scale in LogarithmMapping::MIN_SCALE..=MAX_SCALE {
            pairs.push((
                LogarithmMapping::with_boundary(scale, boundary).unwrap(),
                LookupTableMapping::with_boundary(scale, boundary).unwrap(),
            ));
        }
    }
    pairs
}

#[test]
fn test_scale_ten_unit_interval() {
    let mut rng = SmallRng::seed_from_u64(1000);
    let logarithm = LogarithmMapping::new(10).unwrap();
    let lookup = LookupTableMapping::new(10).unwrap();
    for _ in 0..1000 {
        let value = rng.random_range(1.0..2.0);
        assert_eq!(
            logarithm.map_to_index(value),
            lookup.map_to_index(value),
            "value {:e}",
            value
        );
    }
}

#[test]
fn test_index_range() {
    for (logarithm, lookup) in mapping_pairs() {
        assert_eq!(logarithm.min_index(), lookup.min_index());
        assert_eq!(logarithm.max_index(), lookup.max_index());
    }
}

#[test]
fn test_subnormal_indices() {
    let mut rng = SmallRng::seed_from_u64(0xDE40);
    let pairs = mapping_pairs();
    for _ in 0..1000 {
        let value = random_subnormal(&mut rng);
        for (logarithm, lookup) in &pairs {
            assert_eq!(
                logarithm.map_to_index(value),
                lookup.map_to_index(value),
                "scale {}: value {:e}",
                lookup.scale(),
                value
            );
        }
    }
}

#[test]
fn test_exact_lower_boundaries_on_powers_of_two() {
    for (logarithm, lookup) in mapping_pairs() {
        let scale = lookup.scale();
        for exponent in [-1074i64, -1030, -1022, -1, 0, 1, 100, 1023] {
            let index = exponent << scale;
            assert_eq!(logarithm.lower_boundary(index), lookup.lower_boundary(index));
        }
    }
}

#[test]
fn test_lower_boundaries() {
    let mut rng = SmallRng::seed_from_u64(0xB0B);
    for (logarithm, lookup) in mapping_pairs() {
        for _ in 0..500 {
            let index = rng.random_range(lookup.min_index()..=lookup.max_index());
            assert_eq!(
                logarithm.lower_boundary(index),
                lookup.lower_boundary(index),
                "scale {}: bucket {}",
                lookup.scale(),
                index
            );
        }
    }
}

#[test]
fn test_values_around_thresholds() {
    for (logarithm, lookup) in mapping_pairs() {
        for exponent in [-1060, -1022, 0, 700] {
            for index in swept_indices(&lookup, exponent) {
                assert_eq!(logarithm.lower_boundary(index), lookup.lower_boundary(index));
                for value in around_boundary(&lookup, index) {
                    assert_eq!(
                        logarithm.map_to_index(value),
                        lookup.map_to_index(value),
                        "scale {}: value {:e}",
                        lookup.scale(),
                        value
                    );
                }
            }
        }
    }
}

proptest! {
    #[test]
    fn property_test_map_to_index_agreement(value in arb_positive_finite()) {
        for (logarithm, lookup) in mapping_pairs() {
            prop_assert_eq!(logarithm.map_to_index(value), lookup.map_to_index(value), "scale {}", lookup.scale());
        }
    }

    #[test]
    fn property_test_subnormal_agreement(value in arb_subnormal()) {
        for (logarithm, lookup) in mapping_pairs() {
            prop_assert_eq!(logarithm.map_to_index(value), lookup.map_to_index(value), "scale {}", lookup.scale());
        }
    }
}
