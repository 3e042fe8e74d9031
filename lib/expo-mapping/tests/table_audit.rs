//! Audits significand thresholds with arbitrary-precision integers.
//!
//! Entry `k` of the table for scale `s` is correct when `M = 2^52 + T[k]` is the smallest integer with
//! `M^(2^s) >= 2^(52 * 2^s + k)`.

use expo_mapping::{
    float::SIGNIFICAND_WIDTH,
    tables::{embedded_thresholds, MAX_EMBEDDED_SCALE},
    ConstantsTable, MAX_SCALE,
};
use num_bigint::BigUint;
use num_traits::One as _;
use rand::{rngs::SmallRng, Rng as _, SeedableRng as _};

fn assert_exact(scale: i32, position: usize, threshold: u64) {
    let size = 1usize << scale;
    let target = BigUint::one() << (SIGNIFICAND_WIDTH as usize * size + position);
    let candidate = BigUint::from(threshold | (1 << SIGNIFICAND_WIDTH));
    let below = &candidate - 1u32;

    assert!(
        candidate.pow(size as u32) >= target,
        "scale {}: entry {} ({:#x}) is too small",
        scale,
        position,
        threshold
    );
    assert!(
        below.pow(size as u32) < target,
        "scale {}: entry {} ({:#x}) is too large",
        scale,
        position,
        threshold
    );
}

#[test]
fn test_scale_six_random_entries() {
    let mut rng = SmallRng::seed_from_u64(6);
    let table = ConstantsTable::for_scale(6).unwrap();
    for _ in 0..25 {
        let position = rng.random_range(0..table.size());
        assert_exact(6, position, table.thresholds()[position]);
    }
}

#[test]
fn test_small_embedded_tables() {
    for scale in 1..=7 {
        let thresholds = embedded_thresholds(scale).unwrap();
        for (position, &threshold) in thresholds.iter().enumerate() {
            assert_exact(scale, position, threshold);
        }
    }
}

#[test]
fn test_large_embedded_tables() {
    let mut rng = SmallRng::seed_from_u64(0xA0D17);
    for scale in 8..=MAX_EMBEDDED_SCALE {
        let thresholds = embedded_thresholds(scale).unwrap();
        for position in [0, 1, thresholds.len() / 2, thresholds.len() - 1] {
            assert_exact(scale, position, thresholds[position]);
        }
        for _ in 0..16 {
            let position = rng.random_range(0..thresholds.len());
            assert_exact(scale, position, thresholds[position]);
        }
    }
}

#[test]
fn test_derived_tables() {
    let mut rng = SmallRng::seed_from_u64(0xDE417ED);
    for scale in [11, 12] {
        let table = ConstantsTable::for_scale(scale).unwrap();
        for _ in 0..4 {
            let position = rng.random_range(0..table.size());
            assert_exact(scale, position, table.thresholds()[position]);
        }
        assert_exact(scale, table.size() - 1, table.thresholds()[table.size() - 1]);
    }
}

fn assert_nested(scale: i32) {
    let coarse = ConstantsTable::for_scale(scale).unwrap().thresholds();
    let fine = ConstantsTable::for_scale(scale + 1).unwrap().thresholds();
    assert_eq!(fine.len(), 2 * coarse.len());
    for (position, &threshold) in coarse.iter().enumerate() {
        assert_eq!(fine[2 * position], threshold, "scale {}: entry {}", scale, position);
    }
}

fn audit_sampled(scale: i32, rng: &mut SmallRng) {
    let table = ConstantsTable::for_scale(scale).unwrap();
    let last = table.size() - 1;
    for position in [1, rng.random_range(2..last), last] {
        assert_exact(scale, position, table.thresholds()[position]);
    }
}

#[test]
fn test_derived_tables_nest() {
    for scale in MAX_EMBEDDED_SCALE..17 {
        assert_nested(scale);
    }
}

#[test]
fn test_sampled_derived_entries() {
    let mut rng = SmallRng::seed_from_u64(0x5A3D);
    for scale in 13..=15 {
        audit_sampled(scale, &mut rng);
    }
}

/// Derives and audits the largest tables, which takes a while outside of release builds.
#[test]
#[ignore]
fn test_largest_derived_tables() {
    let mut rng = SmallRng::seed_from_u64(0x1A26E);
    for scale in 17..MAX_SCALE {
        assert_nested(scale);
    }
    for scale in 16..=MAX_SCALE {
        audit_sampled(scale, &mut rng);
    }
}
