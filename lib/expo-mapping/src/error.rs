use snafu::Snafu;

/// An index mapping error.
#[derive(Clone, Debug, PartialEq, Snafu)]
#[snafu(context(suffix(false)), visibility(pub(crate)))]
pub enum MappingError {
    /// The value given to `map_to_index` was not a positive, finite number.
    ///
    /// Callers typically route such values to dedicated zero or overflow buckets.
    #[snafu(display("Value must be a positive, finite number, got {}.", value))]
    InvalidArgument {
        /// The rejected value.
        value: f64,
    },

    /// The index given to `lower_boundary` has no representable lower boundary.
    #[snafu(display(
        "Index {} is out of range: lower boundaries are only representable for indices in [{}, {}].",
        index,
        min_index,
        max_index
    ))]
    OutOfRange {
        /// The rejected index.
        index: i64,

        /// Smallest valid index for the mapping.
        min_index: i64,

        /// Largest valid index for the mapping.
        max_index: i64,
    },

    /// The scale is not supported by the requested mapping.
    #[snafu(display("Scale {} is outside of the permitted range [{}, {}].", scale, min_scale, max_scale))]
    InvalidScale {
        /// The rejected scale.
        scale: i32,

        /// Smallest permitted scale.
        min_scale: i32,

        /// Largest permitted scale.
        max_scale: i32,
    },

    /// A table entry could not be proven exact with native arithmetic.
    ///
    /// The table for this scale must be produced offline with the arbitrary-precision generator instead.
    #[snafu(display(
        "Unable to decide the significand threshold at position {} for scale {}.",
        position,
        scale
    ))]
    UndecidableThreshold {
        /// Scale of the table being derived.
        scale: i32,

        /// Position of the undecidable entry.
        position: usize,
    },
}
