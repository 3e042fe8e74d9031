//! Index mappings for base-2 exponential histograms.
//!
//! An exponential histogram with scale `s` partitions the positive real line into buckets whose boundaries are the
//! powers of the base `b = 2^(2^-s)`. This crate provides the mappings between a positive, finite `f64` and the index of
//! the bucket holding it, and from a bucket index back to the (exact) lower boundary of that bucket, following the
//! base-2 exponential histogram described by OpenTelemetry's OTEP 149.
//!
//! # Mappings
//!
//! - [`ExponentMapping`]: scales `-10..=0`. Uses only the exponent field of the value, so no table is needed.
//! - [`LogarithmMapping`]: scales `1..=20`. Uses the natural logarithm of the value's significand, settling values
//!   within rounding distance of a boundary with integer arithmetic.
//! - [`LookupTableMapping`]: scales `1..=20`. Uses a [`ConstantsTable`] of exact significand thresholds.
//!
//! At positive scales, both mappings are bit-exact and agree on every index and lower boundary.
//!
//! All mappings implement [`IndexMapping`], and [`Mapping`] holds any of them behind a single concrete type for callers
//! that choose the strategy at runtime.
//!
//! # Quick Start
//!
//! ```
//! use expo_mapping::{IndexMapping as _, LookupTableMapping};
//!
//! let mapping = LookupTableMapping::new(3).unwrap();
//!
//! let index = mapping.map_to_index(1.5).unwrap();
//! assert_eq!(index, 4);
//!
//! let lower = mapping.lower_boundary(index).unwrap();
//! let upper = mapping.lower_boundary(index + 1).unwrap();
//! assert!(lower <= 1.5 && 1.5 < upper);
//! ```
//!
//! # Bucket boundaries
//!
//! Values that are exact powers of two sit on bucket boundaries. By default they belong to the bucket they open
//! ([`BucketBoundary::LowerInclusive`]), but mappings can also be built so that they belong to the bucket they close
//! ([`BucketBoundary::UpperInclusive`]), matching the convention used by newer OpenTelemetry SDKs.
//!
//! # Features
//!
//! The `serde` feature enables deserializing a [`MappingConfiguration`] (and its component enums) with `serde`.
#![deny(warnings)]
#![deny(missing_docs)]

mod boundary;
pub use self::boundary::BucketBoundary;

mod error;
pub use self::error::MappingError;

mod exponent;
pub use self::exponent::ExponentMapping;

pub mod float;

mod logarithm;
pub use self::logarithm::LogarithmMapping;

mod lookup;
pub use self::lookup::LookupTableMapping;

mod mapping;
pub use self::mapping::{Mapping, MappingConfiguration, MappingStrategy};

pub mod tables;
pub use self::tables::ConstantsTable;

/// The smallest supported scale.
///
/// At this scale, each bucket spans `2^10` binary exponents, so the whole `f64` range fits in just a few buckets.
pub const MIN_SCALE: i32 = -10;

/// The largest supported scale.
pub const MAX_SCALE: i32 = 20;

/// Maps values to bucket indices and vice versa.
///
/// Implementations are immutable after construction and may be shared freely between threads.
pub trait IndexMapping {
    /// Returns the index of the bucket holding the given value.
    ///
    /// # Errors
    ///
    /// If the value is not a positive, finite number (zero, negative, NaN, or infinite), an error is returned.
    fn map_to_index(&self, value: f64) -> Result<i64, MappingError>;

    /// Returns the lower boundary of the bucket with the given index.
    ///
    /// # Errors
    ///
    /// If the index falls outside of `[min_index, max_index]`, an error is returned.
    fn lower_boundary(&self, index: i64) -> Result<f64, MappingError>;

    /// Returns the scale of this mapping.
    fn scale(&self) -> i32;

    /// Returns the bucket boundary convention of this mapping.
    fn boundary(&self) -> BucketBoundary;

    /// Returns the index of the bucket holding the smallest positive subnormal value.
    fn min_index(&self) -> i64;

    /// Returns the index of the bucket holding `f64::MAX`.
    fn max_index(&self) -> i64;
}
