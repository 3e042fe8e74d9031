//! Bucket indices never decrease as values increase.

use expo_mapping::{float, BucketBoundary, IndexMapping, LookupTableMapping};
use proptest::prelude::*;

use crate::common::{arb_positive_finite, exact_mappings, logarithm_mappings};

mod common;

/// Checks that the indices of consecutive doubles starting at `start` never decrease.
fn check_sweep<M: IndexMapping>(mapping: &M, start: u64, count: u64) {
    let mut previous = i64::MIN;
    for bits in start..start + count {
        let index = mapping.map_to_index(f64::from_bits(bits)).unwrap();
        assert!(index >= previous, "scale {}: {:#x}", mapping.scale(), bits);
        previous = index;
    }
}

#[test]
fn test_sweep_across_thresholds() {
    for boundary in [BucketBoundary::LowerInclusive, BucketBoundary::UpperInclusive] {
        for scale in [1, 4, 8] {
            let mapping = LookupTableMapping::with_boundary(scale, boundary).unwrap();
            for &threshold in mapping.table().thresholds() {
                for exponent in [-1022, 0, 1000] {
                    let bits = float::compose(exponent, threshold).to_bits();
                    check_sweep(&mapping, bits - 3, 7);
                }
            }
        }
    }
}

#[test]
fn test_sweep_across_normal_range() {
    let start = f64::MIN_POSITIVE.to_bits() - 100;
    for mapping in exact_mappings(BucketBoundary::LowerInclusive) {
        check_sweep(&mapping, 1, 200);
        check_sweep(&mapping, start, 200);
        check_sweep(&mapping, f64::MAX.to_bits() - 200, 201);
    }
    for mapping in logarithm_mappings(BucketBoundary::UpperInclusive) {
        check_sweep(&mapping, 1, 200);
        check_sweep(&mapping, start, 200);
    }
}

proptest! {
    #[test]
    fn property_test_exact_mappings_monotonic(a in arb_positive_finite(), b in arb_positive_finite()) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        for boundary in [BucketBoundary::LowerInclusive, BucketBoundary::UpperInclusive] {
            for mapping in exact_mappings(boundary) {
                prop_assert!(mapping.map_to_index(low)? <= mapping.map_to_index(high)?);
            }
        }
    }

    #[test]
    fn property_test_logarithm_mappings_monotonic(a in arb_positive_finite(), b in arb_positive_finite()) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        for mapping in logarithm_mappings(BucketBoundary::LowerInclusive) {
            prop_assert!(mapping.map_to_index(low)? <= mapping.map_to_index(high)?);
        }
    }
}
