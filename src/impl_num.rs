//! Code for num_traits

use num_traits::{FromPrimitive, Num, One, Signed, ToPrimitive, Zero};

use crate::{DecimalError, FixedDecimal, LIMB_BASE};

impl Zero for FixedDecimal {
    #[inline]
    fn zero() -> FixedDecimal {
        FixedDecimal::zero()
    }

    /// Numeric zero test: any finite value with all-zero limbs counts,
    /// including widths like `0.00`, unlike the canonical-form check
    /// of the inherent `is_zero`.
    #[inline]
    fn is_zero(&self) -> bool {
        !self.is_special() && self.all_limbs_zero()
    }
}

impl One for FixedDecimal {
    #[inline]
    fn one() -> FixedDecimal {
        FixedDecimal::one()
    }
}

impl Num for FixedDecimal {
    type FromStrRadixErr = DecimalError;

    /// Creates and initializes a FixedDecimal. Only radix 10 is
    /// meaningful for a decimal type.
    #[inline]
    fn from_str_radix(s: &str, radix: u32) -> Result<FixedDecimal, DecimalError> {
        if radix != 10 {
            return Err(DecimalError::ConversionSyntax);
        }
        FixedDecimal::parse(s)
    }
}

impl Signed for FixedDecimal {
    fn abs(&self) -> FixedDecimal {
        let mut r = *self;
        r.set_positive();
        r
    }

    fn abs_sub(&self, other: &FixedDecimal) -> FixedDecimal {
        if self <= other {
            Zero::zero()
        } else {
            self - other
        }
    }

    fn signum(&self) -> FixedDecimal {
        if self.is_nan() {
            return *self;
        }
        if Zero::is_zero(self) {
            FixedDecimal::zero()
        } else if FixedDecimal::is_negative(self) {
            -FixedDecimal::one()
        } else {
            FixedDecimal::one()
        }
    }

    fn is_positive(&self) -> bool {
        !self.is_nan() && !FixedDecimal::is_negative(self) && !Zero::is_zero(self)
    }

    fn is_negative(&self) -> bool {
        FixedDecimal::is_negative(self)
    }
}

impl FromPrimitive for FixedDecimal {
    #[inline]
    fn from_i64(n: i64) -> Option<FixedDecimal> {
        Some(FixedDecimal::from_i64(n))
    }

    #[inline]
    fn from_u64(n: u64) -> Option<FixedDecimal> {
        Some(FixedDecimal::from_u64(n))
    }

    #[inline]
    fn from_i128(n: i128) -> Option<FixedDecimal> {
        Some(FixedDecimal::from_i128(n))
    }

    #[inline]
    fn from_u128(n: u128) -> Option<FixedDecimal> {
        Some(FixedDecimal::from_u128(n))
    }
}

impl FixedDecimal {
    /// Integer part as an unsigned magnitude, ignoring the fraction;
    /// None when it cannot fit an i128.
    fn integral_magnitude(&self) -> Option<i128> {
        let fu = self.frac_units();
        let mut sum: i128 = 0;
        for &v in self.limbs[fu..fu + self.intg_units()].iter().rev() {
            sum = sum
                .checked_mul(LIMB_BASE as i128)?
                .checked_add(v as i128)?;
        }
        Some(sum)
    }
}

impl ToPrimitive for FixedDecimal {
    /// Truncates toward zero, like the float conversions do.
    fn to_i64(&self) -> Option<i64> {
        self.to_i128().and_then(|n| n.to_i64())
    }

    fn to_i128(&self) -> Option<i128> {
        if self.is_special() {
            return None;
        }
        let mag = self.integral_magnitude()?;
        if FixedDecimal::is_negative(self) {
            Some(-mag)
        } else {
            Some(mag)
        }
    }

    fn to_u64(&self) -> Option<u64> {
        self.to_u128().and_then(|n| n.to_u64())
    }

    fn to_u128(&self) -> Option<u128> {
        if self.is_special() {
            return None;
        }
        let mag = self.integral_magnitude()?;
        if FixedDecimal::is_negative(self) && mag != 0 {
            return None;
        }
        mag.to_u128()
    }

    fn to_f64(&self) -> Option<f64> {
        if self.is_nan() {
            return Some(f64::NAN);
        }
        if self.is_inf() {
            return Some(if FixedDecimal::is_negative(self) {
                f64::NEG_INFINITY
            } else {
                f64::INFINITY
            });
        }
        self.to_string_with_scale(-1).parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_one() {
        assert!(Zero::is_zero(&FixedDecimal::zero()));
        let wide_zero: FixedDecimal = "0.00".parse().unwrap();
        assert!(Zero::is_zero(&wide_zero));
        assert!(!wide_zero.is_zero()); // not canonical

        let one: FixedDecimal = One::one();
        assert_eq!(one.to_string_with_scale(-1), "1");
    }

    #[test]
    fn test_from_str_radix() {
        assert!(FixedDecimal::from_str_radix("10.5", 10).is_ok());
        assert_eq!(
            FixedDecimal::from_str_radix("ff", 16),
            Err(DecimalError::ConversionSyntax)
        );
    }

    #[test]
    fn test_signed() {
        let n: FixedDecimal = "-12.5".parse().unwrap();
        assert_eq!(n.abs().to_string_with_scale(-1), "12.5");
        assert_eq!(n.signum().to_string_with_scale(-1), "-1");
        assert!(Signed::is_negative(&n));
        assert!(!Signed::is_positive(&n));
        assert_eq!(FixedDecimal::zero().signum().to_string_with_scale(-1), "0");
    }

    #[test]
    fn test_to_primitive_truncates() {
        let n: FixedDecimal = "12.9".parse().unwrap();
        assert_eq!(n.to_i64(), Some(12));
        assert_eq!(n.to_u64(), Some(12));

        let n: FixedDecimal = "-0.9".parse().unwrap();
        assert_eq!(n.to_i64(), Some(0));
        assert_eq!(n.to_u64(), Some(0));

        let n: FixedDecimal = "-12.9".parse().unwrap();
        assert_eq!(n.to_i64(), Some(-12));
        assert_eq!(n.to_u64(), None);

        let big: FixedDecimal = "1e40".parse().unwrap();
        assert_eq!(big.to_i64(), None);
        assert_eq!(big.to_u128(), None);
    }

    #[test]
    fn test_to_f64() {
        let n: FixedDecimal = "1.5".parse().unwrap();
        assert_eq!(n.to_f64(), Some(1.5));
        let inf: FixedDecimal = "Inf".parse().unwrap();
        assert_eq!(inf.to_f64(), Some(f64::INFINITY));
    }
}
