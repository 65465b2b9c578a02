//! Implement math operations: Add, Sub, etc
//!
//! The operators wrap the `*_any_to` destination methods, so NaN and
//! infinity flow through them the way they do in SQL expressions.
//! Division, remainder and multiplication panic where the fallible
//! methods would report [`DecimalError`](crate::DecimalError), same as
//! the primitive integer operators do on division by zero.

use crate::{FixedDecimal, DIV_INCR_FRAC};

use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign};

impl Neg for FixedDecimal {
    type Output = FixedDecimal;

    #[inline]
    fn neg(mut self) -> FixedDecimal {
        if self.is_negative() {
            self.set_positive();
        } else {
            self.set_negative();
        }
        self
    }
}

impl<'a> Neg for &'a FixedDecimal {
    type Output = FixedDecimal;

    #[inline]
    fn neg(self) -> FixedDecimal {
        -*self
    }
}

impl<'a, 'b> Add<&'b FixedDecimal> for &'a FixedDecimal {
    type Output = FixedDecimal;

    #[inline]
    fn add(self, rhs: &FixedDecimal) -> FixedDecimal {
        let mut dest = FixedDecimal::zero();
        self.add_any_to(rhs, &mut dest);
        dest
    }
}
forward_binop_to_ref_ref!(impl Add for FixedDecimal, add);

impl<'a, 'b> Sub<&'b FixedDecimal> for &'a FixedDecimal {
    type Output = FixedDecimal;

    #[inline]
    fn sub(self, rhs: &FixedDecimal) -> FixedDecimal {
        let mut dest = FixedDecimal::zero();
        self.sub_any_to(rhs, &mut dest);
        dest
    }
}
forward_binop_to_ref_ref!(impl Sub for FixedDecimal, sub);

impl<'a, 'b> Mul<&'b FixedDecimal> for &'a FixedDecimal {
    type Output = FixedDecimal;

    /// # Panics
    ///
    /// Panics when the product overflows 65 integer digits.
    #[inline]
    fn mul(self, rhs: &FixedDecimal) -> FixedDecimal {
        let mut dest = FixedDecimal::zero();
        match self.mul_any_to(rhs, &mut dest) {
            Ok(()) => dest,
            Err(e) => panic!("decimal multiplication failed: {}", e),
        }
    }
}
forward_binop_to_ref_ref!(impl Mul for FixedDecimal, mul);

impl<'a, 'b> Div<&'b FixedDecimal> for &'a FixedDecimal {
    type Output = FixedDecimal;

    /// # Panics
    ///
    /// Panics on division by zero or quotient overflow.
    #[inline]
    fn div(self, rhs: &FixedDecimal) -> FixedDecimal {
        let mut dest = FixedDecimal::zero();
        match self.div_any_to(rhs, &mut dest, DIV_INCR_FRAC) {
            Ok(()) => dest,
            Err(e) => panic!("decimal division failed: {}", e),
        }
    }
}
forward_binop_to_ref_ref!(impl Div for FixedDecimal, div);

impl<'a, 'b> Rem<&'b FixedDecimal> for &'a FixedDecimal {
    type Output = FixedDecimal;

    /// # Panics
    ///
    /// Panics when the divisor is zero.
    #[inline]
    fn rem(self, rhs: &FixedDecimal) -> FixedDecimal {
        let mut dest = FixedDecimal::zero();
        match self.rem_any_to(rhs, &mut dest) {
            Ok(()) => dest,
            Err(e) => panic!("decimal remainder failed: {}", e),
        }
    }
}
forward_binop_to_ref_ref!(impl Rem for FixedDecimal, rem);

impl<'a> AddAssign<&'a FixedDecimal> for FixedDecimal {
    #[inline]
    fn add_assign(&mut self, rhs: &FixedDecimal) {
        *self = &*self + rhs;
    }
}
forward_assignop_to_ref!(impl AddAssign for FixedDecimal, add_assign);

impl<'a> SubAssign<&'a FixedDecimal> for FixedDecimal {
    #[inline]
    fn sub_assign(&mut self, rhs: &FixedDecimal) {
        *self = &*self - rhs;
    }
}
forward_assignop_to_ref!(impl SubAssign for FixedDecimal, sub_assign);

impl<'a> MulAssign<&'a FixedDecimal> for FixedDecimal {
    #[inline]
    fn mul_assign(&mut self, rhs: &FixedDecimal) {
        *self = &*self * rhs;
    }
}
forward_assignop_to_ref!(impl MulAssign for FixedDecimal, mul_assign);

impl<'a> DivAssign<&'a FixedDecimal> for FixedDecimal {
    #[inline]
    fn div_assign(&mut self, rhs: &FixedDecimal) {
        *self = &*self / rhs;
    }
}
forward_assignop_to_ref!(impl DivAssign for FixedDecimal, div_assign);

impl<'a> RemAssign<&'a FixedDecimal> for FixedDecimal {
    #[inline]
    fn rem_assign(&mut self, rhs: &FixedDecimal) {
        *self = &*self % rhs;
    }
}
forward_assignop_to_ref!(impl RemAssign for FixedDecimal, rem_assign);

impl Sum for FixedDecimal {
    fn sum<I: Iterator<Item = FixedDecimal>>(iter: I) -> FixedDecimal {
        iter.fold(FixedDecimal::zero(), |acc, d| acc + d)
    }
}

impl<'a> Sum<&'a FixedDecimal> for FixedDecimal {
    fn sum<I: Iterator<Item = &'a FixedDecimal>>(iter: I) -> FixedDecimal {
        iter.fold(FixedDecimal::zero(), |acc, d| acc + d)
    }
}

macro_rules! impl_binop_for_primitive {
    ($($t:ty),*) => {$(
        impl_binop_for_primitive!(IMPL $t : Add, add);
        impl_binop_for_primitive!(IMPL $t : Sub, sub);
        impl_binop_for_primitive!(IMPL $t : Mul, mul);
        impl_binop_for_primitive!(IMPL $t : Div, div);
        impl_binop_for_primitive!(IMPL $t : Rem, rem);
    )*};
    (IMPL $t:ty : $imp:ident, $method:ident) => {
        impl $imp<$t> for FixedDecimal {
            type Output = FixedDecimal;

            #[inline]
            fn $method(self, rhs: $t) -> FixedDecimal {
                $imp::$method(self, FixedDecimal::from(rhs))
            }
        }

        impl<'a> $imp<$t> for &'a FixedDecimal {
            type Output = FixedDecimal;

            #[inline]
            fn $method(self, rhs: $t) -> FixedDecimal {
                $imp::$method(self, FixedDecimal::from(rhs))
            }
        }

        impl $imp<FixedDecimal> for $t {
            type Output = FixedDecimal;

            #[inline]
            fn $method(self, rhs: FixedDecimal) -> FixedDecimal {
                $imp::$method(FixedDecimal::from(self), rhs)
            }
        }

        impl<'a> $imp<&'a FixedDecimal> for $t {
            type Output = FixedDecimal;

            #[inline]
            fn $method(self, rhs: &FixedDecimal) -> FixedDecimal {
                $imp::$method(FixedDecimal::from(self), rhs)
            }
        }
    };
}

impl_binop_for_primitive!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neg() {
        let one: FixedDecimal = "1".parse().unwrap();
        assert_eq!((-one).to_string_with_scale(-1), "-1");
        assert_eq!((-(-one)).to_string_with_scale(-1), "1");

        // negating zero keeps it canonical
        let zero = FixedDecimal::zero();
        let neg_zero = -zero;
        assert!(!neg_zero.is_negative());
        assert_eq!(neg_zero.to_string_with_scale(-1), "0");
    }

    #[test]
    fn test_operators_match_dest_methods() {
        let a: FixedDecimal = "1.00000000001".parse().unwrap();
        let b: FixedDecimal = "1000.01".parse().unwrap();

        assert_eq!((a + b).to_string_with_scale(-1), "1001.01000000001");
        assert_eq!((a - b).to_string_with_scale(-1), "-999.00999999999");
        assert_eq!((a * b).to_string_with_scale(-1), "1000.0100000100001");
        assert_eq!((&a + &b), (a + b));
        assert_eq!((&a * &b), (a * b));
    }

    #[test]
    fn test_assign_ops() {
        let mut acc: FixedDecimal = "1.5".parse().unwrap();
        acc += FixedDecimal::from(1);
        assert_eq!(acc.to_string_with_scale(-1), "2.5");
        acc -= FixedDecimal::from(4);
        assert_eq!(acc.to_string_with_scale(-1), "-1.5");
        acc *= FixedDecimal::from(-2);
        assert_eq!(acc.to_string_with_scale(-1), "3.0");
    }

    #[test]
    fn test_primitive_operands() {
        let d: FixedDecimal = "0.5".parse().unwrap();
        assert_eq!((d + 1u32).to_string_with_scale(-1), "1.5");
        assert_eq!((2i64 * d).to_string_with_scale(-1), "1.0");
        assert_eq!((1i32 - d).to_string_with_scale(-1), "0.5");
    }

    #[test]
    fn test_sum() {
        let values: Vec<FixedDecimal> =
            ["0.1", "0.2", "0.3"].iter().map(|s| s.parse().unwrap()).collect();
        let total: FixedDecimal = values.iter().sum();
        assert_eq!(total.to_string_with_scale(-1), "0.6");
    }

    #[test]
    #[should_panic(expected = "decimal division failed")]
    fn test_div_by_zero_panics() {
        let _ = FixedDecimal::one() / FixedDecimal::zero();
    }
}
