//! From<T>, TryFrom<T> impls and integer extraction

use crate::{DecimalError, FixedDecimal, DIGITS_PER_LIMB, LIMB_BASE};

use num_integer::Integer;

use std::cmp::Ordering;
use std::convert::TryFrom;

impl FixedDecimal {
    /// Decimal holding an `i64` value exactly.
    #[inline]
    pub fn from_i64(val: i64) -> FixedDecimal {
        FixedDecimal::from_magnitude(val < 0, val.unsigned_abs() as u128)
    }

    /// Decimal holding a `u64` value exactly.
    #[inline]
    pub fn from_u64(val: u64) -> FixedDecimal {
        FixedDecimal::from_magnitude(false, val as u128)
    }

    /// Decimal holding an `i128` value exactly; 39 digits fit the
    /// 65-digit envelope with room to spare.
    #[inline]
    pub fn from_i128(val: i128) -> FixedDecimal {
        FixedDecimal::from_magnitude(val < 0, val.unsigned_abs())
    }

    /// Decimal holding a `u128` value exactly.
    #[inline]
    pub fn from_u128(val: u128) -> FixedDecimal {
        FixedDecimal::from_magnitude(false, val)
    }

    fn from_magnitude(neg: bool, mut val: u128) -> FixedDecimal {
        let mut fd = FixedDecimal::zero();
        if val == 0 {
            return fd;
        }
        let mut i = 0;
        while val != 0 {
            let (q, r) = val.div_rem(&(LIMB_BASE as u128));
            fd.limbs[i] = r as u32;
            i += 1;
            val = q;
        }
        // possible maximum integral digits; exact scans cost a pass
        fd.intg = (i * DIGITS_PER_LIMB) as u8;
        if neg {
            fd.set_negative();
        }
        fd
    }

    /// Round to an integer (half away from zero) and clamp into the
    /// `i64` range. The receiver is not modified; rounding happens in a
    /// scratch copy.
    ///
    /// NaN extracts as 0 and the infinities as the matching `i64`
    /// extreme.
    pub fn to_i64_saturating(&self) -> i64 {
        if self.is_nan() {
            return 0;
        }
        if self.is_inf() {
            return if self.is_negative() { i64::MIN } else { i64::MAX };
        }
        let mut rounded = FixedDecimal::zero();
        self.round_to(&mut rounded, 0);
        let neg = rounded.is_negative();
        if neg {
            let min = FixedDecimal::from_i64(i64::MIN);
            if rounded.compare(&min) != Ordering::Greater {
                return i64::MIN;
            }
        } else {
            let max = FixedDecimal::from_i64(i64::MAX);
            if rounded.compare(&max) != Ordering::Less {
                return i64::MAX;
            }
        }
        // |value| < 2^63 here, so the top-down accumulation cannot
        // overflow even through padded leading zero limbs
        let mut sum: i128 = 0;
        for &v in rounded.limbs[..rounded.intg_units()].iter().rev() {
            sum = sum * LIMB_BASE as i128 + v as i128;
        }
        if neg {
            -(sum as i64)
        } else {
            sum as i64
        }
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {$(
        impl From<$t> for FixedDecimal {
            #[inline]
            fn from(n: $t) -> FixedDecimal {
                FixedDecimal::from_i128(n as i128)
            }
        }
    )*};
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {$(
        impl From<$t> for FixedDecimal {
            #[inline]
            fn from(n: $t) -> FixedDecimal {
                FixedDecimal::from_u128(n as u128)
            }
        }
    )*};
}

impl_from_signed!(i8, i16, i32, i64, i128);
impl_from_unsigned!(u8, u16, u32, u64, u128);

impl TryFrom<&str> for FixedDecimal {
    type Error = DecimalError;

    #[inline]
    fn try_from(s: &str) -> Result<FixedDecimal, DecimalError> {
        FixedDecimal::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_int64() {
        assert_eq!(FixedDecimal::from(0i64).to_string_with_scale(-1), "0");
        assert_eq!(FixedDecimal::from(42i64).to_string_with_scale(-1), "42");
        assert_eq!(FixedDecimal::from(-1i64).to_string_with_scale(-1), "-1");
        assert_eq!(
            FixedDecimal::from(1i64 << 32).to_string_with_scale(-1),
            "4294967296"
        );
        assert_eq!(
            FixedDecimal::from(i64::MAX).to_string_with_scale(-1),
            "9223372036854775807"
        );
        assert_eq!(
            FixedDecimal::from(i64::MIN).to_string_with_scale(-1),
            "-9223372036854775808"
        );
    }

    #[test]
    fn test_from_u128() {
        assert_eq!(
            FixedDecimal::from(u128::MAX).to_string_with_scale(-1),
            "340282366920938463463374607431768211455"
        );
    }

    #[test]
    fn test_to_i64_saturating() {
        let cases: &[(&str, i64)] = &[
            ("0", 0),
            ("1", 1),
            ("-1", -1),
            ("1.499", 1),
            ("1.5", 2),
            ("-1.5", -2),
            ("9223372036854775807", i64::MAX),
            ("-9223372036854775808", i64::MIN),
            ("9223372036854775808", i64::MAX),
            ("99999999999999999999", i64::MAX),
            ("-99999999999999999999", i64::MIN),
        ];
        for &(input, expected) in cases {
            let fd: FixedDecimal = input.parse().unwrap();
            assert_eq!(fd.to_i64_saturating(), expected, "input {}", input);
        }
    }

    #[test]
    fn test_to_i64_saturating_does_not_mutate() {
        let fd: FixedDecimal = "1.5".parse().unwrap();
        let _ = fd.to_i64_saturating();
        assert_eq!(fd.to_string_with_scale(-1), "1.5");
    }

    #[test]
    fn test_try_from_str() {
        use std::convert::TryFrom;

        assert!(FixedDecimal::try_from("1.25").is_ok());
        assert_eq!(
            FixedDecimal::try_from("bogus"),
            Err(DecimalError::ConversionSyntax)
        );
    }
}
