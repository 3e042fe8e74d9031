use snafu::ensure;

use crate::{
    error::{InvalidArgument, OutOfRange},
    float::{self, FloatBits},
    BucketBoundary, ConstantsTable, IndexMapping, MappingError,
};

/// Largest scale at which a linear scan of the table beats a binary search.
const LINEAR_SEARCH_MAX_SCALE: i32 = 3;

/// Index mapping for positive scales, based on a table of significand thresholds.
///
/// Entry `k` of the [`ConstantsTable`] is the significand of the smallest double that is not less than `2^(k/2^s)`, so
/// the sub-bucket of a value within its binary exponent is the number of entries (past the first) that its significand
/// reaches. Indices are bit-exact and lower boundaries are the smallest doubles not below the true boundaries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LookupTableMapping {
    table: ConstantsTable,
    boundary: BucketBoundary,
    min_index: i64,
    max_index: i64,
}

impl LookupTableMapping {
    /// Creates a new `LookupTableMapping` with the given scale and the default bucket boundary convention.
    ///
    /// # Errors
    ///
    /// If the scale is not in `[1, 20]`, or the table for the scale cannot be derived, an error is returned.
    pub fn new(scale: i32) -> Result<Self, MappingError> {
        Self::with_boundary(scale, BucketBoundary::default())
    }

    /// Creates a new `LookupTableMapping` with the given scale and bucket boundary convention.
    ///
    /// # Errors
    ///
    /// If the scale is not in `[1, 20]`, or the table for the scale cannot be derived, an error is returned.
    pub fn with_boundary(scale: i32, boundary: BucketBoundary) -> Result<Self, MappingError> {
        ConstantsTable::for_scale(scale).map(|table| Self::from_table(table, boundary))
    }

    /// Creates a new `LookupTableMapping` over the given table.
    pub fn from_table(table: ConstantsTable, boundary: BucketBoundary) -> Self {
        let mut mapping = Self {
            table,
            boundary,
            min_index: 0,
            max_index: 0,
        };
        mapping.min_index = mapping.index_of(FloatBits::new(float::MIN_VALUE));
        mapping.max_index = mapping.index_of(FloatBits::new(f64::MAX));
        mapping
    }

    /// Returns the table backing this mapping.
    pub fn table(&self) -> ConstantsTable {
        self.table
    }

    #[inline]
    fn index_of(&self, bits: FloatBits) -> i64 {
        let (exponent, significand) = bits.normalize();
        let sub_index = search(self.table.thresholds(), self.table.scale(), significand) as i64;

        (i64::from(exponent) << self.table.scale()) + sub_index - self.boundary.correction(significand)
    }
}

/// Returns the largest `k` such that `thresholds[k] <= significand`.
///
/// `thresholds` must be sorted, start with `0`, and hold exactly `2^scale` entries.
#[inline]
fn search(thresholds: &[u64], scale: i32, significand: u64) -> usize {
    if scale <= LINEAR_SEARCH_MAX_SCALE {
        // Branch-free count of the thresholds reached, skipping the first one which is always reached.
        return thresholds[1..]
            .iter()
            .map(|&threshold| usize::from(threshold <= significand))
            .sum();
    }

    // Exactly `scale` halving steps. Each step only moves forward, so no bounds are crossed.
    let mut position = 0;
    let mut step = thresholds.len() >> 1;
    while step > 0 {
        position += step * usize::from(thresholds[position + step] <= significand);
        step >>= 1;
    }
    position
}

impl IndexMapping for LookupTableMapping {
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

        let scale = self.table.scale();
        let exponent = index >> scale;
        if exponent < i64::from(float::MIN_SUBNORMAL_EXPONENT) {
            return Ok(float::MIN_VALUE);
        }

        let sub_index = (index & ((1 << scale) - 1)) as usize;
        Ok(float::compose(exponent as i32, self.table.thresholds()[sub_index]))
    }

    fn scale(&self) -> i32 {
        self.table.scale()
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
