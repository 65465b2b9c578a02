//! Implementation of std::fmt traits & other stringification routines

use crate::arithmetic::limb_leading_zeros;
use crate::{FixedDecimal, DIGITS_PER_LIMB, LIMB_BASE};

use std::fmt;

impl FixedDecimal {
    /// Render at a requested fractional width.
    ///
    /// * `scale < 0`: every stored fractional digit is emitted, and the
    ///   decimal point is dropped when there are none;
    /// * `scale == 0`: integer part only;
    /// * `scale > 0`: exactly `scale` fractional digits, zero padded or
    ///   truncated as needed. Truncation does not round; round first
    ///   when rounding is wanted.
    ///
    /// Specials render as `Infinity`, `-Infinity` and `NaN`.
    pub fn to_string_with_scale(&self, scale: i32) -> String {
        if self.is_nan() {
            return "NaN".to_string();
        }
        let mut buf = String::with_capacity(self.intg as usize + self.frac as usize + 2);
        if self.is_inf() {
            if self.is_negative() {
                buf.push('-');
            }
            buf.push_str("Infinity");
            return buf;
        }
        self.push_abs(&mut buf, scale);
        if self.is_negative() && has_nonzero_digit(&buf) {
            buf.insert(0, '-');
        }
        buf
    }

    /// Append the unsigned rendering of a finite value.
    fn push_abs(&self, buf: &mut String, scale: i32) {
        let (intg_units, frac_units) = (self.intg_units(), self.frac_units());
        if intg_units > 0 {
            // the stored integer width may be padded; skip whole zero
            // limbs before the first significant one
            let mut up = (frac_units + intg_units) as isize - 1;
            while up >= frac_units as isize && self.limbs[up as usize] == 0 {
                up -= 1;
            }
            if up < frac_units as isize {
                buf.push('0');
            } else {
                push_limb_digits(buf, self.limbs[up as usize]);
                up -= 1;
                while up >= frac_units as isize {
                    push_limb_prefix(buf, self.limbs[up as usize], DIGITS_PER_LIMB);
                    up -= 1;
                }
            }
        } else {
            buf.push('0');
        }

        if scale == 0 {
            return;
        }
        if scale < 0 {
            if frac_units > 0 {
                buf.push('.');
                self.push_frac_digits(buf, self.frac_digits() as usize);
            }
            return;
        }

        let scale = scale as usize;
        buf.push('.');
        if frac_units == 0 {
            push_zeros(buf, scale);
            return;
        }
        let stored = frac_units * DIGITS_PER_LIMB;
        if scale <= stored {
            self.push_frac_digits(buf, scale);
        } else {
            // beyond the stored limbs only zeros remain
            self.push_frac_digits(buf, stored);
            push_zeros(buf, scale - stored);
        }
    }

    /// Append the top `count` fractional digits.
    fn push_frac_digits(&self, buf: &mut String, mut count: usize) {
        let mut up = self.frac_units() as isize - 1;
        while up >= 0 && count > 0 {
            let width = count.min(DIGITS_PER_LIMB);
            push_limb_prefix(buf, self.limbs[up as usize], width);
            count -= width;
            up -= 1;
        }
    }
}

/// Append the limb without leading zeros; the caller has ruled out a
/// zero limb.
fn push_limb_digits(buf: &mut String, v: u32) {
    debug_assert!(v > 0);
    push_digits(buf, v, DIGITS_PER_LIMB - limb_leading_zeros(v));
}

/// Append the top `width` digits of a nine-digit limb, zero padded.
fn push_limb_prefix(buf: &mut String, v: u32, width: usize) {
    let mut v = v;
    // chop digits that fall below the kept width
    for _ in 0..DIGITS_PER_LIMB - width {
        v /= 10;
    }
    push_digits(buf, v, width);
}

fn push_digits(buf: &mut String, v: u32, width: usize) {
    debug_assert!(width >= 1 && v < LIMB_BASE);
    let mut pow = 10u32.pow(width as u32 - 1);
    let mut v = v;
    loop {
        buf.push((b'0' + (v / pow) as u8) as char);
        if pow == 1 {
            break;
        }
        v %= pow;
        pow /= 10;
    }
}

fn push_zeros(buf: &mut String, count: usize) {
    for _ in 0..count {
        buf.push('0');
    }
}

fn has_nonzero_digit(rendered: &str) -> bool {
    rendered.bytes().any(|b| b != b'0' && b != b'.')
}

impl fmt::Display for FixedDecimal {
    /// The standard `{:.N}` precision selects the output scale, so
    /// `format!("{:.2}", d)` prints two fractional digits; without a
    /// precision every stored fractional digit is printed.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_nan() {
            return f.write_str("NaN");
        }
        if self.is_inf() {
            return f.pad_integral(!self.is_negative(), "", "Infinity");
        }
        let scale = match f.precision() {
            Some(p) => p as i32,
            None => -1,
        };
        let mut digits = String::with_capacity(self.intg as usize + self.frac as usize + 1);
        self.push_abs(&mut digits, scale);
        // a magnitude truncated away entirely prints unsigned; no
        // output scale may ever show -0
        let non_negative = !self.is_negative() || !has_nonzero_digit(&digits);
        f.pad_integral(non_negative, "", &digits)
    }
}

impl fmt::Debug for FixedDecimal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if f.alternate() {
            write!(f, "FixedDecimal(\"{}\")", self)
        } else {
            write!(
                f,
                "FixedDecimal(class={:?}, neg={}, intg={}, frac={}, limbs={:?})",
                self.class, self.neg, self.intg, self.frac, self.limbs
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    include!("impl_fmt.tests.rs");
}
