use snafu::ensure;
use tracing::debug;

use crate::{
    error::InvalidScale, BucketBoundary, ExponentMapping, IndexMapping, LogarithmMapping, LookupTableMapping,
    MappingError, MAX_SCALE, MIN_SCALE,
};

/// How positive scales map values to indices.
///
/// Non-positive scales always use [`ExponentMapping`].
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MappingStrategy {
    /// Bit-exact mapping through a table of significand thresholds.
    #[default]
    LookupTable,

    /// Table-free mapping through the natural logarithm.
    Logarithm,
}

/// Configuration of an index mapping.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct MappingConfiguration {
    /// Scale of the histogram, in `[-10, 20]`.
    pub scale: i32,

    /// Mapping used for positive scales.
    ///
    /// Defaults to [`MappingStrategy::LookupTable`].
    #[cfg_attr(feature = "serde", serde(default))]
    pub strategy: MappingStrategy,

    /// Bucket boundary convention.
    ///
    /// Defaults to [`BucketBoundary::LowerInclusive`].
    #[cfg_attr(feature = "serde", serde(default))]
    pub boundary: BucketBoundary,
}

impl MappingConfiguration {
    /// Creates a new `MappingConfiguration` with the given scale and default settings.
    pub const fn new(scale: i32) -> Self {
        Self {
            scale,
            strategy: MappingStrategy::LookupTable,
            boundary: BucketBoundary::LowerInclusive,
        }
    }

    /// Sets the mapping used for positive scales.
    pub const fn with_strategy(mut self, strategy: MappingStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the bucket boundary convention.
    pub const fn with_boundary(mut self, boundary: BucketBoundary) -> Self {
        self.boundary = boundary;
        self
    }

    /// Builds the mapping described by this configuration.
    ///
    /// # Errors
    ///
    /// If the scale is not in `[-10, 20]`, or the table for the scale cannot be derived, an error is returned.
    pub fn build(&self) -> Result<Mapping, MappingError> {
        ensure!(
            (MIN_SCALE..=MAX_SCALE).contains(&self.scale),
            InvalidScale {
                scale: self.scale,
                min_scale: MIN_SCALE,
                max_scale: MAX_SCALE
            }
        );

        let mapping = if self.scale <= ExponentMapping::MAX_SCALE {
            Mapping::Exponent(ExponentMapping::with_boundary(self.scale, self.boundary)?)
        } else {
            match self.strategy {
                MappingStrategy::LookupTable => {
                    Mapping::LookupTable(LookupTableMapping::with_boundary(self.scale, self.boundary)?)
                }
                MappingStrategy::Logarithm => {
                    Mapping::Logarithm(LogarithmMapping::with_boundary(self.scale, self.boundary)?)
                }
            }
        };

        debug!(
            scale = self.scale,
            strategy = ?self.strategy,
            boundary = ?self.boundary,
            "Built index mapping."
        );

        Ok(mapping)
    }
}

/// Any index mapping.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Mapping {
    /// Mapping for non-positive scales.
    Exponent(ExponentMapping),

    /// Logarithm-based mapping for positive scales.
    Logarithm(LogarithmMapping),

    /// Table-based mapping for positive scales.
    LookupTable(LookupTableMapping),
}

impl Mapping {
    /// Creates the default mapping for the given scale.
    ///
    /// # Errors
    ///
    /// If the scale is not in `[-10, 20]`, or the table for the scale cannot be derived, an error is returned.
    pub fn new(scale: i32) -> Result<Self, MappingError> {
        MappingConfiguration::new(scale).build()
    }
}

impl From<ExponentMapping> for Mapping {
    fn from(mapping: ExponentMapping) -> Self {
        Self::Exponent(mapping)
    }
}

impl From<LogarithmMapping> for Mapping {
    fn from(mapping: LogarithmMapping) -> Self {
        Self::Logarithm(mapping)
    }
}

impl From<LookupTableMapping> for Mapping {
    fn from(mapping: LookupTableMapping) -> Self {
        Self::LookupTable(mapping)
    }
}

macro_rules! delegate {
    ($self:ident, $mapping:ident => $call:expr) => {
        match $self {
            Self::Exponent($mapping) => $call,
            Self::Logarithm($mapping) => $call,
            Self::LookupTable($mapping) => $call,
        }
    };
}

impl IndexMapping for Mapping {
    #[inline]
    fn map_to_index(&self, value: f64) -> Result<i64, MappingError> {
        delegate!(self, mapping => mapping.map_to_index(value))
    }

    fn lower_boundary(&self, index: i64) -> Result<f64, MappingError> {
        delegate!(self, mapping => mapping.lower_boundary(index))
    }

    fn scale(&self) -> i32 {
        delegate!(self, mapping => mapping.scale())
    }

    fn boundary(&self) -> BucketBoundary {
        delegate!(self, mapping => mapping.boundary())
    }

    fn min_index(&self) -> i64 {
        delegate!(self, mapping => mapping.min_index())
    }

    fn max_index(&self) -> i64 {
        delegate!(self, mapping => mapping.max_index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mappings() {
        assert!(matches!(Mapping::new(-10), Ok(Mapping::Exponent(_))));
        assert!(matches!(Mapping::new(0), Ok(Mapping::Exponent(_))));
        assert!(matches!(Mapping::new(1), Ok(Mapping::LookupTable(_))));
        assert!(matches!(Mapping::new(10), Ok(Mapping::LookupTable(_))));
    }

    #[test]
    fn strategy_only_applies_to_positive_scales() {
        let config = MappingConfiguration::new(0).with_strategy(MappingStrategy::Logarithm);
        assert!(matches!(config.build(), Ok(Mapping::Exponent(_))));

        let config = MappingConfiguration::new(4).with_strategy(MappingStrategy::Logarithm);
        assert!(matches!(config.build(), Ok(Mapping::Logarithm(_))));
    }

    #[test]
    fn delegates_to_inner_mapping() {
        let config = MappingConfiguration::new(3).with_boundary(BucketBoundary::UpperInclusive);
        let mapping = config.build().unwrap();
        assert_eq!(mapping.scale(), 3);
        assert_eq!(mapping.boundary(), BucketBoundary::UpperInclusive);
        assert_eq!(mapping.map_to_index(1.0), Ok(-1));
        assert_eq!(mapping.lower_boundary(0), Ok(1.0));

        let inner = LookupTableMapping::with_boundary(3, BucketBoundary::UpperInclusive).unwrap();
        assert_eq!(mapping, Mapping::from(inner));
        assert_eq!(mapping.min_index(), inner.min_index());
        assert_eq!(mapping.max_index(), inner.max_index());
    }

    #[test]
    fn invalid_scales() {
        for scale in [-11, 21] {
            assert_eq!(
                Mapping::new(scale),
                Err(MappingError::InvalidScale {
                    scale,
                    min_scale: -10,
                    max_scale: 20
                })
            );
        }
    }
}
