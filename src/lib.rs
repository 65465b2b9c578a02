// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A fixed-capacity decimal number
//!
//! `FixedDecimal` stores an exact decimal value in nine base-10^9 limbs,
//! following the semantics of the SQL `DECIMAL` type: up to 65 integer
//! digits, up to 30 fractional digits, plus a sign and the special
//! states positive infinity and NaN. Unlike a float, arithmetic is
//! exact (`0.1 + 0.2 == 0.3`); unlike a heap-backed big-decimal, a
//! value never allocates and is always the same handful of bytes.
//!
//! Arithmetic writes into a caller-owned destination so hot loops can
//! reuse storage:
//!
//! ```
//! use fixed_decimal::FixedDecimal;
//!
//! let price: FixedDecimal = "1.00000000001".parse().unwrap();
//! let qty: FixedDecimal = "1000.01".parse().unwrap();
//!
//! let mut total = FixedDecimal::zero();
//! price.mul_to(&qty, &mut total).unwrap();
//! assert_eq!(total.to_string(), "1000.0100000100001");
//! ```
//!
//! The usual operator traits are also implemented and return fresh
//! values; division and multiplication panic where the fallible methods
//! would return [`DecimalError`].

use std::fmt;

#[macro_use]
mod macros;

// limb primitives and the arithmetic kernels
pub(crate) mod arithmetic;

// PartialEq / PartialOrd and the three-way comparator
mod impl_cmp;

// From<T> / TryFrom<T> impls and integer extraction
mod impl_convert;

// Implementations of std::fmt traits and stringification routines
mod impl_fmt;

// Implementations of num_traits
mod impl_num;

// Add<T>, Sub<T>, etc...
mod impl_ops;

mod impl_trait_from_str;

// construct FixedDecimals from strings
mod parsing;

// Routines for rounding
mod rounding;

// Implementations for deserializations and serializations
#[cfg(feature = "serde")]
mod impl_serde;

use crate::arithmetic::units_for;

/// Decimal digits stored per limb
pub const DIGITS_PER_LIMB: usize = 9;

/// Value at which one limb overflows into the next; limbs are base
/// 1,000,000,000
pub const LIMB_BASE: u32 = 1_000_000_000;

/// Maximum total number of decimal digits in a value
pub const MAX_DIGITS: usize = 65;

/// Maximum number of fractional decimal digits in a value
pub const MAX_FRAC: usize = 30;

/// Number of limbs in a value; DECIMAL(65, 28) needs all nine
pub const MAX_LIMBS: usize = 9;

/// Minimum extra fractional digits requested by division beyond the
/// width of its operands
pub const DIV_INCR_FRAC: usize = 4;

/// Limbs needed for the widest fractional part (30 digits)
pub(crate) const MAX_FRAC_LIMBS: usize =
    (MAX_FRAC + DIGITS_PER_LIMB - 1) / DIGITS_PER_LIMB;

/// Error conditions reported by decimal operations
///
/// All failures are synchronous; after an error the destination value
/// is safe to reuse but holds no meaningful number until rewritten.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecimalError {
    /// Malformed numeric string, or a parsed exponent outside the
    /// representable range
    ConversionSyntax,
    /// The exact result does not fit in nine limbs and 65 integer digits
    Overflow,
    /// The divisor has no non-zero limbs
    DivisionByZero,
}

impl fmt::Display for DecimalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use DecimalError::*;

        match *self {
            ConversionSyntax => "invalid decimal string".fmt(f),
            Overflow => "decimal value does not fit 65 digits".fmt(f),
            DivisionByZero => "decimal division by zero".fmt(f),
        }
    }
}

impl std::error::Error for DecimalError {}

/// Numeric class of a value
///
/// A value is exactly one of these at a time, which keeps the NaN and
/// infinity states mutually exclusive by construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Class {
    Normal,
    Inf,
    Nan,
}

/// A fixed-capacity decimal number.
///
/// The value is `(-1)^neg * limbs * 10^-frac`, where `limbs` is read as
/// one little-endian base-10^9 integer: fractional digits occupy the
/// low `ceil(frac / 9)` limbs and integer digits the limbs directly
/// above them. Limbs above the occupied range are zero.
///
/// `intg` counts integer digits and may be padded up to a whole number
/// of limbs after arithmetic; consumers must not assume it is the exact
/// count of significant digits. `frac` counts fractional digits
/// exactly.
#[derive(Clone, Copy)]
pub struct FixedDecimal {
    // integer digit count, 0..=65, possibly limb-padded
    intg: u8,
    // fractional digit count, 0..=30
    frac: u8,
    // sign; never set while all limbs are zero
    neg: bool,
    class: Class,
    limbs: [u32; MAX_LIMBS],
}

impl FixedDecimal {
    /// The canonical zero: one integer digit, no fraction, positive.
    #[inline]
    pub const fn zero() -> FixedDecimal {
        FixedDecimal {
            intg: 1,
            frac: 0,
            neg: false,
            class: Class::Normal,
            limbs: [0; MAX_LIMBS],
        }
    }

    /// The value 1.
    #[inline]
    pub const fn one() -> FixedDecimal {
        let mut fd = FixedDecimal::zero();
        fd.limbs[0] = 1;
        fd
    }

    /// True if the sign flag is set.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.neg
    }

    /// True if this value is not a number.
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.class == Class::Nan
    }

    /// True if this value is infinite.
    #[inline]
    pub fn is_inf(&self) -> bool {
        self.class == Class::Inf
    }

    /// True if this value is NaN or infinite.
    #[inline]
    pub fn is_special(&self) -> bool {
        self.class != Class::Normal
    }

    /// True if this value is the canonical zero.
    ///
    /// A zero-valued decimal that still carries fractional width (such
    /// as the result of parsing `"0.00"`) is *not* canonical; it prints
    /// its width and compares equal to zero, but does not take the zero
    /// fast paths inside the kernels.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.limbs[0] == 0 && self.intg == 1 && self.frac == 0 && self.class == Class::Normal
    }

    /// Reset to the canonical zero.
    #[inline]
    pub fn set_zero(&mut self) {
        *self = FixedDecimal::zero();
    }

    /// Reset to the value 1.
    #[inline]
    pub fn set_one(&mut self) {
        *self = FixedDecimal::one();
    }

    /// Set the sign flag, canonicalizing a finite all-zero value to
    /// the canonical zero so that no negative zero can be observed.
    pub fn set_negative(&mut self) {
        self.neg = true;
        if self.class == Class::Normal && self.all_limbs_zero() {
            self.set_zero();
        }
    }

    /// Clear the sign flag.
    #[inline]
    pub fn set_positive(&mut self) {
        self.neg = false;
    }

    /// Turn this value into NaN. The limbs and digit counts become
    /// meaningless and are ignored by every consumer.
    #[inline]
    pub fn set_nan(&mut self) {
        self.class = Class::Nan;
    }

    /// Turn this value into an infinity, keeping the current sign.
    #[inline]
    pub fn set_inf(&mut self) {
        self.class = Class::Inf;
    }

    /// Clear the special state and the sign flag.
    #[inline]
    pub fn set_normal(&mut self) {
        self.class = Class::Normal;
        self.neg = false;
    }

    /// Stored count of integer digits.
    ///
    /// After add/sub/mul this is expanded to a whole number of limbs;
    /// only parsing and rounding leave an exact digit count here.
    #[inline]
    pub fn intg_digits(&self) -> u8 {
        self.intg
    }

    /// Stored count of fractional digits.
    #[inline]
    pub fn frac_digits(&self) -> u8 {
        self.frac
    }

    /// Limbs occupied by the integer part.
    #[inline]
    pub fn intg_units(&self) -> usize {
        units_for(self.intg as usize)
    }

    /// Limbs occupied by the fractional part.
    #[inline]
    pub fn frac_units(&self) -> usize {
        units_for(self.frac as usize)
    }

    #[inline]
    pub(crate) fn all_limbs_zero(&self) -> bool {
        self.limbs.iter().all(|&v| v == 0)
    }

    /// Parse a decimal from a string slice.
    ///
    /// Accepts an optional sign, digits with an optional decimal point,
    /// an optional exponent, and the case-insensitive specials `inf`,
    /// `infinity` and `nan`.
    #[inline]
    pub fn parse(s: &str) -> Result<FixedDecimal, DecimalError> {
        FixedDecimal::parse_bytes(s.as_bytes())
    }

    /// Parse a decimal from ASCII bytes.
    pub fn parse_bytes(bytes: &[u8]) -> Result<FixedDecimal, DecimalError> {
        let mut fd = FixedDecimal::zero();
        parsing::parse_into(bytes, &mut fd)?;
        Ok(fd)
    }

    /// dest = self + rhs for finite operands.
    ///
    /// Never signals overflow: the 65/30 digit envelope leaves room for
    /// the final carry limb. `dest` must not alias either operand.
    #[inline]
    pub fn add_to(&self, rhs: &FixedDecimal, dest: &mut FixedDecimal) {
        arithmetic::addition::add(self, rhs, dest)
    }

    /// dest = self + rhs, accepting NaN and infinity operands.
    #[inline]
    pub fn add_any_to(&self, rhs: &FixedDecimal, dest: &mut FixedDecimal) {
        arithmetic::addition::add_any(self, rhs, dest)
    }

    /// dest = self - rhs for finite operands.
    #[inline]
    pub fn sub_to(&self, rhs: &FixedDecimal, dest: &mut FixedDecimal) {
        arithmetic::subtraction::sub(self, rhs, dest)
    }

    /// dest = self - rhs, accepting NaN and infinity operands.
    #[inline]
    pub fn sub_any_to(&self, rhs: &FixedDecimal, dest: &mut FixedDecimal) {
        arithmetic::subtraction::sub_any(self, rhs, dest)
    }

    /// dest = self * rhs for finite operands.
    ///
    /// Fails with [`DecimalError::Overflow`] when the product's integer
    /// part exceeds nine limbs; the fractional part is truncated to fit
    /// instead of failing.
    #[inline]
    pub fn mul_to(&self, rhs: &FixedDecimal, dest: &mut FixedDecimal) -> Result<(), DecimalError> {
        arithmetic::multiplication::mul(self, rhs, dest)
    }

    /// dest = self * rhs, accepting NaN and infinity operands.
    #[inline]
    pub fn mul_any_to(
        &self,
        rhs: &FixedDecimal,
        dest: &mut FixedDecimal,
    ) -> Result<(), DecimalError> {
        arithmetic::multiplication::mul_any(self, rhs, dest)
    }

    /// dest = self / rhs for finite operands.
    ///
    /// `incr_frac` asks for that many fractional digits in the quotient
    /// beyond what the operand widths already provide; because digits
    /// live in nine-digit limbs the delivered width is rounded up to a
    /// limb boundary. [`DIV_INCR_FRAC`] is the conventional value.
    #[inline]
    pub fn div_to(
        &self,
        rhs: &FixedDecimal,
        dest: &mut FixedDecimal,
        incr_frac: usize,
    ) -> Result<(), DecimalError> {
        arithmetic::division::div(self, rhs, dest, incr_frac)
    }

    /// dest = self / rhs, accepting NaN and infinity operands.
    #[inline]
    pub fn div_any_to(
        &self,
        rhs: &FixedDecimal,
        dest: &mut FixedDecimal,
        incr_frac: usize,
    ) -> Result<(), DecimalError> {
        arithmetic::division::div_any(self, rhs, dest, incr_frac)
    }

    /// dest = self mod rhs for finite operands.
    ///
    /// The remainder keeps the dividend's sign and the wider fractional
    /// width of the two operands.
    #[inline]
    pub fn rem_to(&self, rhs: &FixedDecimal, dest: &mut FixedDecimal) -> Result<(), DecimalError> {
        arithmetic::modulo::rem(self, rhs, dest)
    }

    /// dest = self mod rhs, accepting NaN and infinity operands.
    #[inline]
    pub fn rem_any_to(
        &self,
        rhs: &FixedDecimal,
        dest: &mut FixedDecimal,
    ) -> Result<(), DecimalError> {
        arithmetic::modulo::rem_any(self, rhs, dest)
    }
}

impl Default for FixedDecimal {
    #[inline]
    fn default() -> FixedDecimal {
        FixedDecimal::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    include!("lib.tests.rs");
}

#[cfg(all(test, feature = "property-tests"))]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    include!("lib.tests.property-tests.rs");
}
