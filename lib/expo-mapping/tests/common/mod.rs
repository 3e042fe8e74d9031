#![allow(dead_code)]

use expo_mapping::{
    float, BucketBoundary, ExponentMapping, IndexMapping, LogarithmMapping, LookupTableMapping, Mapping, MAX_SCALE,
    MIN_SCALE,
};
use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng as _};

/// Bits of `+inf`, the first value past the positive finite doubles.
pub const POSITIVE_INFINITY_BITS: u64 = 0x7FF0_0000_0000_0000;

pub fn pow2(exponent: i32) -> f64 {
    float::compose(exponent, 0)
}

pub fn next_up(value: f64) -> f64 {
    f64::from_bits(value.to_bits() + 1)
}

pub fn next_down(value: f64) -> f64 {
    f64::from_bits(value.to_bits() - 1)
}

/// Every exact mapping: the exponent mapping at non-positive scales and the lookup-table mapping at positive ones.
pub fn exact_mappings(boundary: BucketBoundary) -> Vec<Mapping> {
    let mut mappings = Vec::new();
    for scale in MIN_SCALE..=ExponentMapping::MAX_SCALE {
        mappings.push(ExponentMapping::with_boundary(scale, boundary).unwrap().into());
    }
    for scale in LogarithmMapping::MIN_SCALE..=MAX_SCALE {
        mappings.push(LookupTableMapping::with_boundary(scale, boundary).unwrap().into());
    }
    mappings
}

pub fn logarithm_mappings(boundary: BucketBoundary) -> Vec<LogarithmMapping> {
    (LogarithmMapping::MIN_SCALE..=MAX_SCALE)
        .map(|scale| LogarithmMapping::with_boundary(scale, boundary).unwrap())
        .collect()
}

/// Every mapping at every scale, including the logarithm mapping.
pub fn all_mappings(boundary: BucketBoundary) -> Vec<Mapping> {
    let mut mappings = exact_mappings(boundary);
    mappings.extend(logarithm_mappings(boundary).into_iter().map(Mapping::from));
    mappings
}

/// Bucket indices opening within the binary exponent `exponent`.
///
/// Every bucket up to scale 8 is included. Above that, 256 evenly spread buckets and the last one are.
pub fn swept_indices<M: IndexMapping>(mapping: &M, exponent: i64) -> Vec<i64> {
    let scale = mapping.scale();
    if scale <= 0 {
        return vec![exponent >> -scale];
    }

    let size = 1i64 << scale;
    let step = (size >> 8).max(1) as usize;
    let first = exponent << scale;
    (0..size)
        .step_by(step)
        .chain([size - 1])
        .map(|position| first + position)
        .filter(|index| (mapping.min_index()..=mapping.max_index()).contains(index))
        .collect()
}

/// The lower boundary of the bucket, and the doubles on either side of it.
pub fn around_boundary<M: IndexMapping>(mapping: &M, index: i64) -> Vec<f64> {
    let bits = mapping.lower_boundary(index).unwrap().to_bits();
    [bits - 1, bits, bits + 1]
        .into_iter()
        .map(f64::from_bits)
        .filter(|&value| float::is_positive_finite(value))
        .collect()
}

/// Any positive finite double, with every binary exponent equally likely to be hit.
pub fn arb_positive_finite() -> impl Strategy<Value = f64> {
    (1..POSITIVE_INFINITY_BITS).prop_map(f64::from_bits)
}

pub fn arb_subnormal() -> impl Strategy<Value = f64> {
    (1..1u64 << 52).prop_map(f64::from_bits)
}

pub fn random_positive_finite(rng: &mut SmallRng) -> f64 {
    f64::from_bits(rng.random_range(1..POSITIVE_INFINITY_BITS))
}

pub fn random_subnormal(rng: &mut SmallRng) -> f64 {
    f64::from_bits(rng.random_range(1..1u64 << 52))
}
