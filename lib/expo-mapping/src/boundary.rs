/// Which bucket an exact power of the base belongs to.
///
/// Bucket boundaries fall on exact powers of two for every scale, and those are the only boundaries a double can hit
/// exactly. The two conventions therefore only disagree on exact powers of two (including subnormal ones), which map to
/// the bucket they open under `LowerInclusive` and to the bucket they close under `UpperInclusive`.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BucketBoundary {
    /// Bucket `i` holds the values in `[b^i, b^(i+1))`.
    #[default]
    LowerInclusive,

    /// Bucket `i` holds the values in `(b^i, b^(i+1)]`.
    UpperInclusive,
}

impl BucketBoundary {
    /// Returns the amount to subtract from a lower-inclusive index to honor this convention.
    ///
    /// `significand` is the normalized significand of the value, without its implicit leading bit.
    #[inline]
    pub(crate) const fn correction(self, significand: u64) -> i64 {
        match self {
            Self::LowerInclusive => 0,
            Self::UpperInclusive => (significand == 0) as i64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correction_only_applies_to_exact_powers_of_two() {
        assert_eq!(BucketBoundary::LowerInclusive.correction(0), 0);
        assert_eq!(BucketBoundary::LowerInclusive.correction(1), 0);
        assert_eq!(BucketBoundary::UpperInclusive.correction(0), 1);
        assert_eq!(BucketBoundary::UpperInclusive.correction(1), 0);
        assert_eq!(BucketBoundary::UpperInclusive.correction(crate::float::SIGNIFICAND_MASK), 0);
    }

    #[test]
    fn default_is_lower_inclusive() {
        assert_eq!(BucketBoundary::default(), BucketBoundary::LowerInclusive);
    }
}
