//! Bit-level access to IEEE 754 double-precision values.

/// Width of the significand field, in bits.
pub const SIGNIFICAND_WIDTH: u32 = 52;

/// Mask of the significand field.
pub const SIGNIFICAND_MASK: u64 = (1 << SIGNIFICAND_WIDTH) - 1;

/// Width of the exponent field, in bits.
pub const EXPONENT_WIDTH: u32 = 11;

/// Mask of the exponent field, once shifted down past the significand.
pub const EXPONENT_MASK: u64 = (1 << EXPONENT_WIDTH) - 1;

/// Bias of the exponent field.
pub const EXPONENT_BIAS: i32 = 1023;

/// Exponent of the smallest positive normal value, `2^-1022`.
pub const MIN_NORMAL_EXPONENT: i32 = -1022;

/// Exponent of the largest finite values.
pub const MAX_NORMAL_EXPONENT: i32 = 1023;

/// Exponent of the smallest positive subnormal value, `2^-1074`.
pub const MIN_SUBNORMAL_EXPONENT: i32 = MIN_NORMAL_EXPONENT - SIGNIFICAND_WIDTH as i32;

/// The smallest positive subnormal value, `2^-1074`.
pub const MIN_VALUE: f64 = 5e-324;

const IMPLICIT_BIT: u64 = 1 << SIGNIFICAND_WIDTH;
const ONE_BITS: u64 = (EXPONENT_BIAS as u64) << SIGNIFICAND_WIDTH;

/// The raw bits of a double-precision value.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct FloatBits(u64);

impl FloatBits {
    /// Creates a `FloatBits` from the given value.
    pub fn new(value: f64) -> Self {
        Self(value.to_bits())
    }

    /// Creates a `FloatBits` from raw bits.
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    /// Returns the raw bits.
    pub const fn to_bits(self) -> u64 {
        self.0
    }

    /// Returns the sign bit.
    pub const fn sign(self) -> u64 {
        self.0 >> 63
    }

    /// Returns the biased exponent field.
    ///
    /// This is `0` for zero and subnormal values, and `2047` for infinities and NaN.
    pub const fn biased_exponent(self) -> u64 {
        (self.0 >> SIGNIFICAND_WIDTH) & EXPONENT_MASK
    }

    /// Returns the significand field, without the implicit leading bit.
    pub const fn significand(self) -> u64 {
        self.0 & SIGNIFICAND_MASK
    }

    /// Returns `true` if the value is subnormal.
    pub const fn is_subnormal(self) -> bool {
        self.biased_exponent() == 0 && self.significand() != 0
    }

    /// Returns the normalized exponent and significand of the value.
    ///
    /// The magnitude of a finite, nonzero value is `2^exponent * (1 + significand / 2^52)`. For normal values this is
    /// just the unbiased exponent field and the significand field. Subnormal values are normalized by shifting their
    /// leading set bit into the implicit position, which yields exponents down to `-1074`.
    #[inline]
    pub const fn normalize(self) -> (i32, u64) {
        let biased_exponent = self.biased_exponent();
        let significand = self.significand();
        if biased_exponent != 0 {
            return (biased_exponent as i32 - EXPONENT_BIAS, significand);
        }

        let shift = significand.leading_zeros() - EXPONENT_WIDTH;
        (
            MIN_NORMAL_EXPONENT - shift as i32,
            (significand << shift) & SIGNIFICAND_MASK,
        )
    }

    /// Returns the base-2 exponent of the value, `floor(log2(|value|))`.
    ///
    /// The smallest subnormal value has an exponent of `-1074`.
    pub const fn exponent(self) -> i32 {
        self.normalize().0
    }

    /// Returns `true` if the magnitude of the value is an exact power of two.
    ///
    /// This includes subnormal powers of two, whose significand field has a single bit set.
    pub const fn is_power_of_two(self) -> bool {
        let magnitude = self.0 & !(1 << 63);
        magnitude != 0 && self.biased_exponent() != EXPONENT_MASK && self.normalize().1 == 0
    }
}

/// Returns `true` if the value can be mapped to a bucket index.
#[inline]
pub fn is_positive_finite(value: f64) -> bool {
    value > 0.0 && value.is_finite()
}

/// Returns the value `1 + significand / 2^52`, in `[1, 2)`.
#[inline]
pub(crate) fn fraction(significand: u64) -> f64 {
    f64::from_bits(ONE_BITS | significand)
}

/// Composes the value `2^exponent * (1 + significand / 2^52)`.
///
/// `exponent` must be in `[-1074, 1023]` and `significand` must fit in 52 bits. Values that fall below the normal range
/// are rounded up to the next subnormal value, so the result is never less than the exact value.
#[inline]
pub fn compose(exponent: i32, significand: u64) -> f64 {
    debug_assert!((MIN_SUBNORMAL_EXPONENT..=MAX_NORMAL_EXPONENT).contains(&exponent));
    debug_assert!(significand <= SIGNIFICAND_MASK);

    if exponent >= MIN_NORMAL_EXPONENT {
        let biased_exponent = (exponent + EXPONENT_BIAS) as u64;
        return f64::from_bits((biased_exponent << SIGNIFICAND_WIDTH) | significand);
    }

    // Below the normal range, the value is a multiple of the smallest subnormal.
    let shift = (MIN_NORMAL_EXPONENT - exponent) as u32;
    let full_significand = IMPLICIT_BIT | significand;
    let units = (full_significand + (1 << shift) - 1) >> shift;
    f64::from_bits(units)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn normal_fields() {
        let one = FloatBits::new(1.0);
        assert_eq!(one.sign(), 0);
        assert_eq!(one.biased_exponent(), EXPONENT_BIAS as u64);
        assert_eq!(one.significand(), 0);
        assert_eq!(one.normalize(), (0, 0));
        assert!(one.is_power_of_two());

        let neg = FloatBits::new(-2.0);
        assert_eq!(neg.sign(), 1);
        assert_eq!(neg.exponent(), 1);

        let one_and_half = FloatBits::new(1.5);
        assert_eq!(one_and_half.normalize(), (0, 1 << 51));
        assert!(!one_and_half.is_power_of_two());

        assert_eq!(FloatBits::new(f64::MAX).normalize(), (MAX_NORMAL_EXPONENT, SIGNIFICAND_MASK));
        assert_eq!(FloatBits::new(f64::MIN_POSITIVE).normalize(), (MIN_NORMAL_EXPONENT, 0));
    }

    #[test]
    fn special_fields() {
        assert_eq!(FloatBits::new(f64::INFINITY).biased_exponent(), EXPONENT_MASK);
        assert_eq!(FloatBits::new(f64::NAN).biased_exponent(), EXPONENT_MASK);
        assert_eq!(FloatBits::new(0.0).biased_exponent(), 0);
        assert!(!FloatBits::new(0.0).is_power_of_two());
        assert!(!FloatBits::new(f64::INFINITY).is_power_of_two());
        assert!(!FloatBits::new(0.0).is_subnormal());
    }

    #[test]
    fn subnormal_normalization() {
        let min = FloatBits::new(MIN_VALUE);
        assert_eq!(min.to_bits(), 1);
        assert!(min.is_subnormal());
        assert_eq!(min.normalize(), (MIN_SUBNORMAL_EXPONENT, 0));
        assert!(min.is_power_of_two());

        assert_eq!(FloatBits::from_bits(2).normalize(), (-1073, 0));
        assert_eq!(FloatBits::from_bits(3).normalize(), (-1073, 1 << 51));

        let largest_subnormal = FloatBits::from_bits(SIGNIFICAND_MASK);
        assert!(largest_subnormal.is_subnormal());
        assert_eq!(largest_subnormal.normalize(), (-1023, SIGNIFICAND_MASK - 1));
        assert!(!largest_subnormal.is_power_of_two());
    }

    #[test]
    fn compose_exact_values() {
        assert_eq!(compose(0, 0), 1.0);
        assert_eq!(compose(1, 1 << 51), 3.0);
        assert_eq!(compose(-1, 0), 0.5);
        assert_eq!(compose(MAX_NORMAL_EXPONENT, SIGNIFICAND_MASK), f64::MAX);
        assert_eq!(compose(MIN_NORMAL_EXPONENT, 0), f64::MIN_POSITIVE);
        assert_eq!(compose(MIN_SUBNORMAL_EXPONENT, 0), MIN_VALUE);
        assert_eq!(compose(-1023, 1 << 51).to_bits(), (1 << 51) | (1 << 50));
    }

    #[test]
    fn compose_rounds_subnormals_up() {
        // 2^-1074 * (1 + 2^-52) lies strictly between the two smallest subnormals.
        assert_eq!(compose(MIN_SUBNORMAL_EXPONENT, 1).to_bits(), 2);

        // Just below the smallest normal value, rounding up reaches it.
        assert_eq!(compose(-1023, SIGNIFICAND_MASK), f64::MIN_POSITIVE);
    }

    #[test]
    fn positive_finite() {
        assert!(is_positive_finite(1.0));
        assert!(is_positive_finite(MIN_VALUE));
        assert!(is_positive_finite(f64::MAX));
        assert!(!is_positive_finite(0.0));
        assert!(!is_positive_finite(-0.0));
        assert!(!is_positive_finite(-1.0));
        assert!(!is_positive_finite(f64::INFINITY));
        assert!(!is_positive_finite(f64::NAN));
    }

    proptest! {
        #[test]
        fn property_test_normalize_compose(bits in 1u64..0x7FF0_0000_0000_0000) {
            let (exponent, significand) = FloatBits::from_bits(bits).normalize();
            prop_assert_eq!(compose(exponent, significand).to_bits(), bits);
        }

        #[test]
        fn property_test_exponent_brackets_value(bits in 1u64..0x7FF0_0000_0000_0000) {
            let value = f64::from_bits(bits);
            let exponent = FloatBits::new(value).exponent();
            prop_assert!(compose(exponent, 0) <= value);
            if exponent < MAX_NORMAL_EXPONENT {
                prop_assert!(value < compose(exponent + 1, 0));
            }
        }
    }
}
