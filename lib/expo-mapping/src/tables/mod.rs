//! Significand threshold tables.
//!
//! The table for scale `s` holds `2^s` entries, where entry `k` is the 52-bit significand (without its implicit leading
//! bit) of the smallest double that is not less than `2^(k/2^s)`. Every entry is exact: it is decided with integer
//! arithmetic, never with floating-point functions.
//!
//! Tables for scales up to [`MAX_EMBEDDED_SCALE`] are embedded in the crate, generated offline by `expo-table-gen`.
//! Tables for larger scales are derived on first use and cached for the lifetime of the process.

use std::sync::OnceLock;

use snafu::{ensure, OptionExt as _};

use crate::{
    error::{InvalidScale, UndecidableThreshold},
    MappingError, MAX_SCALE,
};

mod derive;
pub use self::derive::derive_thresholds;
pub(crate) use self::derive::{reaches, refine_threshold};

mod scale01;
mod scale02;
mod scale03;
mod scale04;
mod scale05;
mod scale06;
mod scale07;
mod scale08;
mod scale09;
mod scale10;

/// The largest scale whose table is embedded in the crate.
pub const MAX_EMBEDDED_SCALE: i32 = 10;

/// The smallest scale with a table.
pub const MIN_TABLE_SCALE: i32 = 1;

const DERIVED_SCALES: usize = (MAX_SCALE - MAX_EMBEDDED_SCALE) as usize;

static DERIVED: [OnceLock<Box<[u64]>>; DERIVED_SCALES] = [const { OnceLock::new() }; DERIVED_SCALES];

/// Returns the embedded table for the given scale, if any.
pub fn embedded_thresholds(scale: i32) -> Option<&'static [u64]> {
    let thresholds: &'static [u64] = match scale {
        1 => &scale01::THRESHOLDS,
        2 => &scale02::THRESHOLDS,
        3 => &scale03::THRESHOLDS,
        4 => &scale04::THRESHOLDS,
        5 => &scale05::THRESHOLDS,
        6 => &scale06::THRESHOLDS,
        7 => &scale07::THRESHOLDS,
        8 => &scale08::THRESHOLDS,
        9 => &scale09::THRESHOLDS,
        10 => &scale10::THRESHOLDS,
        _ => return None,
    };
    Some(thresholds)
}

fn derived_thresholds(scale: i32) -> Result<&'static [u64], MappingError> {
    let slot = DERIVED
        .get((scale - MAX_EMBEDDED_SCALE - 1) as usize)
        .context(InvalidScale {
            scale,
            min_scale: MIN_TABLE_SCALE,
            max_scale: MAX_SCALE,
        })?;

    if let Some(thresholds) = slot.get() {
        return Ok(thresholds);
    }

    // Concurrent first uses may both derive the table, but only one result is kept.
    let thresholds = derive_thresholds(scale)?.into_boxed_slice();
    Ok(slot.get_or_init(|| thresholds))
}

/// A table of significand thresholds for a single scale.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ConstantsTable {
    scale: i32,
    thresholds: &'static [u64],
}

impl ConstantsTable {
    /// Returns the table for the given scale.
    ///
    /// Scales above [`MAX_EMBEDDED_SCALE`] are derived on first use, which can take a few seconds at the largest scales.
    ///
    /// # Errors
    ///
    /// If the scale is not in `[1, 20]`, or the table for the scale cannot be derived, an error is returned.
    pub fn for_scale(scale: i32) -> Result<Self, MappingError> {
        ensure!(
            (MIN_TABLE_SCALE..=MAX_SCALE).contains(&scale),
            InvalidScale {
                scale,
                min_scale: MIN_TABLE_SCALE,
                max_scale: MAX_SCALE
            }
        );

        let thresholds = match embedded_thresholds(scale) {
            Some(thresholds) => thresholds,
            None => derived_thresholds(scale)?,
        };
        Ok(Self { scale, thresholds })
    }

    /// Returns the scale of this table.
    pub fn scale(&self) -> i32 {
        self.scale
    }

    /// Returns the number of entries in this table, `2^scale`.
    pub fn size(&self) -> usize {
        self.thresholds.len()
    }

    /// Returns the entries of this table, in increasing order.
    pub fn thresholds(&self) -> &'static [u64] {
        self.thresholds
    }

    /// Returns the entry at the given position, if any.
    pub fn threshold(&self, position: usize) -> Option<u64> {
        self.thresholds.get(position).copied()
    }
}

/// Checks that a derived entry was decided, attaching its position otherwise.
pub(crate) fn decided(threshold: Option<u64>, scale: i32, position: usize) -> Result<u64, MappingError> {
    threshold.context(UndecidableThreshold { scale, position })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::float::SIGNIFICAND_MASK;

    #[test]
    fn embedded_tables_are_well_formed() {
        for scale in MIN_TABLE_SCALE..=MAX_EMBEDDED_SCALE {
            let table = ConstantsTable::for_scale(scale).unwrap();
            assert_eq!(table.scale(), scale);
            assert_eq!(table.size(), 1 << scale);
            assert_eq!(table.threshold(0), Some(0));
            assert_eq!(table.threshold(table.size()), None);
            assert!(table.thresholds().windows(2).all(|pair| pair[0] < pair[1]));
            assert!(table.thresholds().iter().all(|&threshold| threshold <= SIGNIFICAND_MASK));
        }
    }

    #[test]
    fn embedded_tables_nest() {
        // Entry `k` at scale `s` is entry `2k` at scale `s + 1`.
        for scale in MIN_TABLE_SCALE..MAX_EMBEDDED_SCALE {
            let coarse = embedded_thresholds(scale).unwrap();
            let fine = embedded_thresholds(scale + 1).unwrap();
            for (position, &threshold) in coarse.iter().enumerate() {
                assert_eq!(fine[position * 2], threshold);
            }
        }
    }

    #[test]
    fn known_entries() {
        assert_eq!(embedded_thresholds(1), Some(&[0x0, 0x6a09e667f3bcd][..]));
        assert_eq!(
            embedded_thresholds(2),
            Some(&[0x0, 0x306fe0a31b716, 0x6a09e667f3bcd, 0xae89f995ad3ae][..])
        );
        assert_eq!(ConstantsTable::for_scale(4).unwrap().threshold(1), Some(0xb5586cf98910));
    }

    #[test]
    fn invalid_scales() {
        for scale in [-1, 0, 21] {
            assert_eq!(
                ConstantsTable::for_scale(scale),
                Err(MappingError::InvalidScale {
                    scale,
                    min_scale: 1,
                    max_scale: 20
                })
            );
        }
        assert_eq!(embedded_thresholds(11), None);
    }

    #[test]
    fn derived_tables_are_cached() {
        let first = ConstantsTable::for_scale(11).unwrap();
        let second = ConstantsTable::for_scale(11).unwrap();
        assert_eq!(first.size(), 1 << 11);
        assert!(std::ptr::eq(first.thresholds(), second.thresholds()));

        let coarse = embedded_thresholds(10).unwrap();
        for (position, &threshold) in coarse.iter().enumerate() {
            assert_eq!(first.thresholds()[position * 2], threshold);
        }
    }
}
