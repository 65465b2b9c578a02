//! Modulo of decimal values
//!
//! Runs the same normalized division machinery as the divide kernel
//! but keeps the remainder instead of the quotient. Both operands are
//! first left-shifted so their fractional widths agree; after the last
//! multiply-subtract the dividend buffer holds the remainder scaled by
//! the normalization factor, which divides back out evenly.

use crate::arithmetic::division::top_nonzero_limb;
use crate::arithmetic::{add_with_carry, limbs_ge, sub_with_borrow, units_for};
use crate::impl_cmp::cmp_abs_parts;
use crate::{DecimalError, FixedDecimal, DIGITS_PER_LIMB, LIMB_BASE, MAX_LIMBS};
use std::cmp::Ordering;

/// dest = lhs mod rhs with NaN/Infinity dispatch.
pub(crate) fn rem_any(
    lhs: &FixedDecimal,
    rhs: &FixedDecimal,
    dest: &mut FixedDecimal,
) -> Result<(), DecimalError> {
    if lhs.is_nan() || rhs.is_nan() {
        dest.set_nan();
        return Ok(());
    }
    if lhs.is_inf() || rhs.is_inf() {
        dest.set_inf();
        return Ok(());
    }
    rem(lhs, rhs, dest)
}

/// dest = lhs mod rhs for finite operands; the remainder takes the
/// dividend's sign.
pub(crate) fn rem(
    lhs: &FixedDecimal,
    rhs: &FixedDecimal,
    dest: &mut FixedDecimal,
) -> Result<(), DecimalError> {
    let neg = lhs.is_negative();
    mod_abs(lhs, rhs, dest)?;
    if neg {
        dest.set_negative();
    }
    Ok(())
}

/// Remainder of two absolute values.
fn mod_abs(
    lhs: &FixedDecimal,
    rhs: &FixedDecimal,
    dest: &mut FixedDecimal,
) -> Result<(), DecimalError> {
    dest.set_zero();
    let (liu, lfu) = (lhs.intg_units(), lhs.frac_units());
    let (riu, rfu) = (rhs.intg_units(), rhs.frac_units());
    let lhs_frac = lhs.frac_digits();
    let rhs_frac = rhs.frac_digits();

    let rhs_nonzero = match top_nonzero_limb(&rhs.limbs[..riu + rfu]) {
        Some(idx) => idx,
        None => return Err(DecimalError::DivisionByZero),
    };
    let lhs_nonzero = match top_nonzero_limb(&lhs.limbs[..liu + lfu]) {
        Some(idx) => idx,
        None => {
            dest.set_zero();
            return Ok(());
        }
    };

    match cmp_abs_parts(liu, lfu, &lhs.limbs, riu, rfu, &rhs.limbs) {
        Ordering::Less => {
            // |lhs| < |rhs|: the remainder is the dividend, widened to
            // the larger fractional width
            if rfu > lfu {
                dest.limbs[rfu - lfu..rfu + liu].copy_from_slice(&lhs.limbs[..lfu + liu]);
                dest.intg = lhs.intg_digits();
                dest.frac = rhs_frac;
            } else {
                dest.limbs[..lfu + liu].copy_from_slice(&lhs.limbs[..lfu + liu]);
                dest.intg = lhs.intg_digits();
                dest.frac = lhs_frac.max(rhs_frac);
            }
            return Ok(());
        }
        Ordering::Equal => {
            // equal magnitudes leave a zero at the aligned width
            dest.intg = 0;
            dest.frac = lhs_frac.max(rhs_frac);
            return Ok(());
        }
        Ordering::Greater => {}
    }

    let remainder_frac = lhs_frac.max(rhs_frac) as usize;
    let remainder_frac_units = units_for(remainder_frac);

    let mut dividend_shift: isize = 0;
    if !limbs_ge(&lhs.limbs[..=lhs_nonzero], &rhs.limbs[..=rhs_nonzero]) {
        // dividend starts one limb lower, exactly as in division
        dividend_shift = -1;
    }

    // zero-pad the bottom of whichever operand is fractionally narrower
    let mut lhs_left_shift = 0;
    let mut rhs_left_shift = 0;
    if lfu < rfu {
        lhs_left_shift = rfu - lfu;
    } else if lfu > rfu {
        rhs_left_shift = lfu - rfu;
    }

    if rhs_nonzero == 0 {
        // short division; quotient limbs above the divisor's scale are
        // computed only to advance the remainder
        let d = rhs.limbs[0] as u64;
        let mut buf = [0u32; MAX_LIMBS * 2];
        let buf_len = lhs_left_shift + lhs_nonzero + 1;
        buf[lhs_left_shift..buf_len].copy_from_slice(&lhs.limbs[..=lhs_nonzero]);
        let mut rem: u64 = 0;
        if dividend_shift < 0 {
            rem = lhs.limbs[lhs_nonzero] as u64;
        }
        let stop = rhs_left_shift as isize;
        let mut i = buf_len as isize - 1 + dividend_shift;
        while i >= stop {
            let u = rem * LIMB_BASE as u64 + buf[i as usize] as u64;
            let q = u / d;
            rem = u - q * d;
            i -= 1;
        }
        let mut result_nonzero: isize = -1;
        if rem > 0 {
            dest.limbs[(i + 1) as usize] = rem as u32;
            result_nonzero = i + 1;
        }
        // limbs below the divisor's scale pass through untouched
        while i >= 0 {
            dest.limbs[i as usize] = buf[i as usize];
            if buf[i as usize] > 0 && result_nonzero < 0 {
                result_nonzero = i;
            }
            i -= 1;
        }
        set_remainder_widths(dest, result_nonzero, remainder_frac, remainder_frac_units);
        return Ok(());
    }

    let buf1_len = lhs_nonzero + 1 + lhs_left_shift;
    let buf2_len = rhs_nonzero + 1 + rhs_left_shift;

    // D1: normalization, as in the divide kernel
    let norm_factor = (LIMB_BASE / (rhs.limbs[rhs_nonzero] + 1)) as u64;
    let mut buf1 = [0u32; MAX_LIMBS * 2];
    let mut buf2 = [0u32; MAX_LIMBS * 2];
    if norm_factor == 1 {
        buf1[lhs_left_shift..buf1_len].copy_from_slice(&lhs.limbs[..=lhs_nonzero]);
        buf2[rhs_left_shift..buf2_len].copy_from_slice(&rhs.limbs[..=rhs_nonzero]);
    } else {
        let mut carry: u64 = 0;
        for i in 0..=lhs_nonzero {
            let v = lhs.limbs[i] as u64 * norm_factor + carry;
            carry = v / LIMB_BASE as u64;
            buf1[i + lhs_left_shift] = (v - carry * LIMB_BASE as u64) as u32;
        }
        buf1[buf1_len] = carry as u32;
        carry = 0;
        for i in 0..=rhs_nonzero {
            let v = rhs.limbs[i] as u64 * norm_factor + carry;
            carry = v / LIMB_BASE as u64;
            buf2[i + rhs_left_shift] = (v - carry * LIMB_BASE as u64) as u32;
        }
        debug_assert_eq!(carry, 0);
    }

    let stop = buf2_len as isize - 1;
    let vd0 = buf2[rhs_nonzero + rhs_left_shift] as u64;
    let vd1 = buf2[rhs_nonzero + rhs_left_shift - 1] as u64;
    let mut i = buf1_len as isize + dividend_shift - 1;
    while i >= stop {
        // D3: guess the quotient limb
        let u0 = buf1[(i + 1) as usize] as u64;
        let u1 = buf1[i as usize] as u64;
        let v = u0 * LIMB_BASE as u64 + u1;
        let mut qhat = v / vd0;
        let mut rhat = v - qhat * vd0;
        debug_assert!(qhat < LIMB_BASE as u64);
        let u2 = if i > 0 { buf1[(i - 1) as usize] as u64 } else { 0 };
        while qhat * vd1 > rhat * LIMB_BASE as u64 + u2 {
            qhat -= 1;
            rhat += vd0;
        }

        // D4: multiply and subtract over the shifted divisor
        let mut mul_carry: u64 = 0;
        let mut borrow = 0;
        let mut ms_idx = (i - stop) as usize;
        for k in 0..buf2_len {
            let m = qhat * buf2[k] as u64 + mul_carry;
            mul_carry = m / LIMB_BASE as u64;
            let m0 = (m - mul_carry * LIMB_BASE as u64) as u32;
            buf1[ms_idx] = sub_with_borrow(buf1[ms_idx], m0, &mut borrow);
            ms_idx += 1;
        }
        let top = buf1[ms_idx] as i64 - mul_carry as i64 - borrow as i64;
        if top < 0 {
            // D6: overshot by one; restore the remainder
            let mut carry = 0;
            let mut idx = (i - stop) as usize;
            for k in 0..buf2_len {
                buf1[idx] = add_with_carry(buf1[idx], buf2[k], &mut carry);
                idx += 1;
            }
        } else {
            debug_assert_eq!(top, 0);
        }
        buf1[ms_idx] = 0;
        i -= 1;
    }
    debug_assert_eq!(buf1[buf1_len], 0);

    // un-normalize: both operands were scaled by norm_factor, so it
    // divides the remainder exactly
    let mut rem: u64 = 0;
    let mut result_nonzero: isize = -1;
    for i in (0..buf1_len).rev() {
        let v = rem * LIMB_BASE as u64 + buf1[i] as u64;
        if v == 0 {
            continue;
        }
        let q = v / norm_factor;
        rem = v - q * norm_factor;
        if q > 0 && result_nonzero < 0 {
            result_nonzero = i as isize;
        }
        dest.limbs[i] = q as u32;
    }
    debug_assert_eq!(rem, 0);

    set_remainder_widths(dest, result_nonzero, remainder_frac, remainder_frac_units);
    Ok(())
}

/// The remainder's integer width comes from its highest non-zero limb;
/// its fractional width is the aligned operand width.
fn set_remainder_widths(
    dest: &mut FixedDecimal,
    result_nonzero: isize,
    remainder_frac: usize,
    remainder_frac_units: usize,
) {
    if result_nonzero >= remainder_frac_units as isize {
        let intg_units = result_nonzero as usize + 1 - remainder_frac_units;
        dest.intg = (intg_units * DIGITS_PER_LIMB) as u8;
    } else {
        dest.intg = 0;
    }
    dest.frac = remainder_frac as u8;
}

#[cfg(test)]
mod tests {
    use super::*;

    include!("modulo.tests.rs");
}
