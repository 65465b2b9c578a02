//! Routines for parsing strings into FixedDecimals
//!
//! One pass over the bytes records the sign, the span of digits, the
//! decimal point and the exponent; a second pass packs the digits into
//! limbs most-significant-first. No intermediate buffer is built: the
//! scanner only remembers indices into the input.

use crate::arithmetic::{mod9, units_for, POW10};
use crate::{DecimalError, FixedDecimal, DIGITS_PER_LIMB, MAX_DIGITS, MAX_FRAC};

/// Parse ASCII bytes into `dest`.
///
/// Grammar: `[+-]? ( digits ('.' digits?)? | '.' digits )
/// ([eE][+-]?digits)?`, or the case-insensitive specials `inf`,
/// `infinity` and `nan` (a sign before a special is accepted and
/// ignored). `nan` may be followed by zeros only; a non-zero NaN
/// payload is a syntax error.
pub(crate) fn parse_into(bytes: &[u8], dest: &mut FixedDecimal) -> Result<(), DecimalError> {
    let mut exp: i32 = 0;
    let mut digit_count: i32 = 0;
    let mut dot_idx: isize = -1;
    let mut last: isize = -1; // index of the last digit seen
    let mut first = 0; // index of the first digit (never the dot)
    let mut neg = false;
    let mut more_to_process = false;

    let mut i = 0;
    while i < bytes.len() {
        let c = bytes[i];
        if c.is_ascii_digit() {
            last = i as isize;
            digit_count += 1;
            i += 1;
            continue;
        }
        if c == b'.' && dot_idx == -1 {
            dot_idx = i as isize;
            if i == first {
                first += 1; // first digit must follow the dot
            }
            i += 1;
            continue;
        }
        if i == 0 {
            if c == b'-' {
                first += 1;
                neg = true;
                i += 1;
                continue;
            }
            if c == b'+' {
                first += 1;
                i += 1;
                continue;
            }
        }
        // not a digit nor a valid '+', '-' or '.'
        more_to_process = true;
        break;
    }

    if last == -1 {
        // no digits yet; only the specials remain possible
        if !more_to_process || dot_idx != -1 {
            return Err(DecimalError::ConversionSyntax);
        }
        let rest = &bytes[i..];
        dest.set_zero();
        if rest.eq_ignore_ascii_case(b"inf") || rest.eq_ignore_ascii_case(b"infinity") {
            dest.set_inf();
            return Ok(());
        }
        if rest.len() >= 3 && rest[..3].eq_ignore_ascii_case(b"nan") {
            // TODO: support NaN payloads; for now only zeros may follow
            if rest[3..].iter().all(|&c| c == b'0') {
                dest.set_nan();
                return Ok(());
            }
        }
        return Err(DecimalError::ConversionSyntax);
    } else if more_to_process {
        // digits were seen; an exponent is the only valid remainder
        let c = bytes[i];
        if c != b'e' && c != b'E' {
            return Err(DecimalError::ConversionSyntax);
        }
        i += 1;
        if i >= bytes.len() {
            return Err(DecimalError::ConversionSyntax);
        }
        let mut neg_exp = false;
        match bytes[i] {
            b'-' => {
                neg_exp = true;
                i += 1;
            }
            b'+' => {
                i += 1;
            }
            _ => {}
        }
        if i >= bytes.len() {
            return Err(DecimalError::ConversionSyntax);
        }
        // strip insignificant zeros
        while bytes[i] == b'0' && i != bytes.len() - 1 {
            i += 1;
        }
        // the largest in-range exponent has two digits; a longer run
        // cannot fit no matter its value
        if bytes.len() - i >= 4 {
            return Err(DecimalError::ConversionSyntax);
        }
        while i < bytes.len() {
            let c = bytes[i];
            if !c.is_ascii_digit() {
                return Err(DecimalError::ConversionSyntax);
            }
            exp = exp * 10 + (c - b'0') as i32;
            i += 1;
        }
        if (!neg_exp && exp > MAX_DIGITS as i32) || (neg_exp && exp > MAX_FRAC as i32) {
            return Err(DecimalError::ConversionSyntax);
        }
        if neg_exp {
            exp = -exp;
        }
    }

    // syntax is good: first/last bound the digits, dot_idx the point
    let frac_digits = if dot_idx == -1 || last < dot_idx {
        0
    } else {
        (last - dot_idx) as i32
    };
    let mut frac = frac_digits - exp;
    let digits;
    let mut heading_zeros = 0;
    if frac == 0 {
        digits = digit_count;
    } else if frac > 0 {
        if digit_count > frac {
            // both integer and fractional digits present
            digits = digit_count;
        } else {
            // fraction only, possibly with zeros above the first digit
            digits = frac;
            heading_zeros = frac - digit_count;
        }
    } else {
        // the exponent moves the point right past every digit
        digits = digit_count - frac;
        frac = 0;
    }

    if digits > MAX_DIGITS as i32 {
        return Err(DecimalError::ConversionSyntax);
    }

    dest.set_zero();
    let intg_units = units_for((digits - frac) as usize);
    let frac_units = units_for(frac as usize);
    // fill limbs from the highest down
    let mut up = (intg_units + frac_units) as isize - 1;
    let mut i = first;
    if intg_units > 0 {
        let mut out: u32 = 0;
        let mut cut = digits - frac;
        loop {
            let c = bytes[i];
            if c == b'.' {
                // the dot may sit inside the integer span after
                // exponent normalization
                i += 1;
                continue;
            }
            out = out * 10 + (c - b'0') as u32;
            cut -= 1;
            if cut == 0 {
                break;
            }
            if i as isize == last {
                break; // no more digits; the rest is zero fill
            }
            i += 1;
            if mod9(cut as usize) > 0 {
                continue;
            }
            dest.limbs[up as usize] = out;
            up -= 1;
            out = 0;
        }
        i += 1;
        // a partial top unit is left-shifted into place; remaining
        // units below it are zero (e.g. "1E20")
        let re = mod9(cut as usize);
        dest.limbs[up as usize] = out * POW10[re];
        up -= 1;
        cut -= re as i32;
        while cut > 0 {
            dest.limbs[up as usize] = 0;
            up -= 1;
            cut -= DIGITS_PER_LIMB as i32;
        }
    }
    if frac_units > 0 {
        let mut out: u32 = 0;
        let mut cut = DIGITS_PER_LIMB as i32;
        while heading_zeros >= DIGITS_PER_LIMB as i32 {
            dest.limbs[up as usize] = 0;
            up -= 1;
            heading_zeros -= DIGITS_PER_LIMB as i32;
        }
        cut -= heading_zeros;
        loop {
            let c = bytes[i];
            if c == b'.' {
                i += 1;
                continue;
            }
            cut -= 1;
            out += (c - b'0') as u32 * POW10[cut as usize];
            if i as isize == last {
                break;
            }
            i += 1;
            if cut > 0 {
                continue;
            }
            dest.limbs[up as usize] = out;
            up -= 1;
            cut = DIGITS_PER_LIMB as i32;
            out = 0;
        }
        dest.limbs[up as usize] = out;
    }
    dest.intg = (digits - frac) as u8;
    dest.frac = frac as u8;
    if neg {
        dest.set_negative();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    include!("parsing.tests.rs");
}
