//! Division of decimal values
//!
//! Knuth TAOCP 4.3.1 Algorithm D over base-10^9 limbs, extended to
//! fractional operands: both operands are viewed as plain limb runs
//! (fraction below integer) and the quotient's decimal point is placed
//! by digit bookkeeping before any limb is divided.
//!
//! A single-limb divisor takes the short path, one `u64` division per
//! quotient limb. Multi-limb divisors are normalized (D1) so the top
//! divisor limb is at least half the base, which lets the two-limb
//! guess (D3) be off by at most one after the `vd1` tightening loop;
//! the rare overestimate is repaired by the add-back step (D6).

use crate::arithmetic::{
    add_with_carry, limb_leading_zeros, limbs_ge, sub_with_borrow, units_for,
};
use crate::{DecimalError, FixedDecimal, DIGITS_PER_LIMB, LIMB_BASE, MAX_FRAC_LIMBS, MAX_LIMBS};

// normalized dividend, one growth limb above `result_units + lhs` limbs
const DIVIDEND_LIMBS: usize = MAX_LIMBS * 2 + 1;

/// dest = lhs / rhs with NaN/Infinity dispatch.
pub(crate) fn div_any(
    lhs: &FixedDecimal,
    rhs: &FixedDecimal,
    dest: &mut FixedDecimal,
    incr_frac: usize,
) -> Result<(), DecimalError> {
    if lhs.is_nan() || rhs.is_nan() {
        dest.set_nan();
        return Ok(());
    }
    if lhs.is_inf() || rhs.is_inf() {
        dest.set_inf();
        return Ok(());
    }
    div(lhs, rhs, dest, incr_frac)
}

/// dest = lhs / rhs for finite operands.
///
/// `incr_frac` is the requested fractional precision beyond the widths
/// of the operands; the delivered precision is rounded up to a whole
/// number of limbs.
pub(crate) fn div(
    lhs: &FixedDecimal,
    rhs: &FixedDecimal,
    dest: &mut FixedDecimal,
    incr_frac: usize,
) -> Result<(), DecimalError> {
    let neg = lhs.is_negative() != rhs.is_negative();
    div_abs(lhs, rhs, dest, incr_frac)?;
    if neg {
        dest.set_negative();
    }
    Ok(())
}

/// Quotient of two absolute values.
fn div_abs(
    lhs: &FixedDecimal,
    rhs: &FixedDecimal,
    dest: &mut FixedDecimal,
    mut incr_frac: usize,
) -> Result<(), DecimalError> {
    dest.set_zero();
    let (liu, lfu) = (lhs.intg_units(), lhs.frac_units());
    let (riu, rfu) = (rhs.intg_units(), rhs.frac_units());
    let lhs_frac = lhs.frac_digits() as usize;
    let rhs_frac = rhs.frac_digits() as usize;
    // fractional widths extended to the limb boundary
    let lhs_ext_frac = lfu * DIGITS_PER_LIMB;
    let rhs_ext_frac = rfu * DIGITS_PER_LIMB;

    let rhs_nonzero = match top_nonzero_limb(&rhs.limbs[..riu + rfu]) {
        Some(idx) => idx,
        None => return Err(DecimalError::DivisionByZero),
    };
    // divisor digits counted from its top non-zero digit down to limb 0
    let rhs_prec =
        rhs_nonzero * DIGITS_PER_LIMB + DIGITS_PER_LIMB - limb_leading_zeros(rhs.limbs[rhs_nonzero]);

    let lhs_nonzero = match top_nonzero_limb(&lhs.limbs[..liu + lfu]) {
        Some(idx) => idx,
        None => {
            dest.set_zero();
            return Ok(());
        }
    };
    let lhs_prec =
        lhs_nonzero * DIGITS_PER_LIMB + DIGITS_PER_LIMB - limb_leading_zeros(lhs.limbs[lhs_nonzero]);

    // the limb-boundary extension already grants extra quotient digits;
    // only the remainder of the request costs additional limbs
    incr_frac = incr_frac
        .saturating_sub((lhs_ext_frac - lhs_frac) + (rhs_ext_frac - rhs_frac));

    let mut result_frac_units = units_for(lhs_ext_frac + rhs_ext_frac + incr_frac);
    if result_frac_units > MAX_FRAC_LIMBS {
        result_frac_units = MAX_FRAC_LIMBS;
    }

    // quotient integer digits, biased by one depending on whether the
    // dividend's leading limbs reach the divisor's
    let mut result_intg =
        (lhs_prec as isize - lhs_ext_frac as isize) - (rhs_prec as isize - rhs_ext_frac as isize);
    let mut dividend_shift: isize = 0;
    if limbs_ge(&lhs.limbs[..=lhs_nonzero], &rhs.limbs[..=rhs_nonzero]) {
        result_intg += 1;
    } else {
        // first quotient limb aligns one limb lower in the dividend
        dividend_shift = -1;
    }

    let result_intg_units;
    let result_start_idx: isize;
    if result_intg > 0 {
        result_intg_units = units_for(result_intg as usize);
        if result_intg_units > MAX_LIMBS {
            return Err(DecimalError::Overflow);
        }
        if result_intg_units + result_frac_units > MAX_LIMBS {
            result_frac_units = MAX_LIMBS - result_intg_units;
        }
        result_start_idx = (result_frac_units + result_intg_units) as isize - 1;
    } else {
        result_intg_units = 0;
        let result_start_offset = units_for((1 - result_intg) as usize);
        result_start_idx = result_frac_units as isize - result_start_offset as isize;
        result_intg = 0;
    }
    let result_units = result_intg_units + result_frac_units;

    if rhs_nonzero == 0 {
        // short division: single-limb divisor
        let d = rhs.limbs[0] as u64;
        let mut rem: u64 = 0;
        if dividend_shift < 0 {
            rem = lhs.limbs[lhs_nonzero] as u64;
        }
        let mut i = lhs_nonzero as isize + dividend_shift;
        let mut j = result_start_idx;
        while j >= 0 {
            let u = if i >= 0 {
                rem * LIMB_BASE as u64 + lhs.limbs[i as usize] as u64
            } else {
                rem * LIMB_BASE as u64
            };
            let q = u / d;
            rem = u - q * d;
            dest.limbs[j as usize] = q as u32;
            i -= 1;
            j -= 1;
        }
        dest.intg = result_intg as u8;
        dest.frac = (result_frac_units * DIGITS_PER_LIMB) as u8;
        return Ok(());
    }

    // D1: normalize so the divisor's top limb is >= LIMB_BASE / 2
    let norm_factor = (LIMB_BASE / (rhs.limbs[rhs_nonzero] + 1)) as u64;
    let mut buf1 = [0u32; DIVIDEND_LIMBS];
    let mut buf2 = [0u32; MAX_LIMBS];
    if norm_factor == 1 {
        buf1[result_units..result_units + lhs_nonzero + 1]
            .copy_from_slice(&lhs.limbs[..=lhs_nonzero]);
        buf2[..=rhs_nonzero].copy_from_slice(&rhs.limbs[..=rhs_nonzero]);
    } else {
        let mut carry: u64 = 0;
        let mut j = result_units;
        for i in 0..=lhs_nonzero {
            let v = lhs.limbs[i] as u64 * norm_factor + carry;
            carry = v / LIMB_BASE as u64;
            buf1[j] = (v - carry * LIMB_BASE as u64) as u32;
            j += 1;
        }
        buf1[j] = carry as u32;
        carry = 0;
        for i in 0..=rhs_nonzero {
            let v = rhs.limbs[i] as u64 * norm_factor + carry;
            carry = v / LIMB_BASE as u64;
            buf2[i] = (v - carry * LIMB_BASE as u64) as u32;
        }
        // the divisor cannot gain a limb: norm_factor was chosen from
        // its top limb
        debug_assert_eq!(carry, 0);
    }

    let vd0 = buf2[rhs_nonzero] as u64;
    let vd1 = buf2[rhs_nonzero - 1] as u64;
    let mut i = (result_units + lhs_nonzero) as isize + dividend_shift;
    let mut j = result_start_idx;
    while j >= 0 {
        // D3: guess the quotient limb from the top three dividend limbs
        let u0 = buf1[(i + 1) as usize] as u64;
        let u1 = if i >= 0 { buf1[i as usize] as u64 } else { 0 };
        let v = u0 * LIMB_BASE as u64 + u1;
        let mut qhat = v / vd0;
        let mut rhat = v - qhat * vd0;
        debug_assert!(qhat < LIMB_BASE as u64);
        let u2 = if i > 0 { buf1[(i - 1) as usize] as u64 } else { 0 };
        while qhat * vd1 > rhat * LIMB_BASE as u64 + u2 {
            qhat -= 1;
            rhat += vd0;
        }

        // D4: dividend -= qhat * divisor, tracking the multiplication
        // carry and the subtraction borrow together
        let mut mul_carry: u64 = 0;
        let mut borrow = 0;
        let mut ms_idx = i - rhs_nonzero as isize;
        for k in 0..=rhs_nonzero {
            let m = qhat * buf2[k] as u64 + mul_carry;
            mul_carry = m / LIMB_BASE as u64;
            let m0 = (m - mul_carry * LIMB_BASE as u64) as u32;
            if ms_idx < 0 {
                // positions below the kept precision: the digits are
                // discarded but the borrow still propagates
                let _ = sub_with_borrow(0, m0, &mut borrow);
            } else {
                buf1[ms_idx as usize] = sub_with_borrow(buf1[ms_idx as usize], m0, &mut borrow);
            }
            ms_idx += 1;
        }
        let top = buf1[ms_idx as usize] as i64 - mul_carry as i64 - borrow as i64;
        if top < 0 {
            // D6: the guess was one too high; add the divisor back once
            qhat -= 1;
            let mut carry = 0;
            let mut idx = i - rhs_nonzero as isize;
            for k in 0..=rhs_nonzero {
                if idx >= 0 {
                    buf1[idx as usize] = add_with_carry(buf1[idx as usize], buf2[k], &mut carry);
                }
                idx += 1;
            }
        } else {
            debug_assert_eq!(top, 0);
        }
        // the step's remainder fits below the top limb either way
        buf1[ms_idx as usize] = 0;
        dest.limbs[j as usize] = qhat as u32;
        i -= 1;
        j -= 1;
    }
    dest.intg = result_intg as u8;
    dest.frac = (result_frac_units * DIGITS_PER_LIMB) as u8;
    Ok(())
}

/// Highest index with a non-zero limb, scanning the occupied range
/// top-down; `None` when every limb is zero.
pub(crate) fn top_nonzero_limb(limbs: &[u32]) -> Option<usize> {
    limbs.iter().rposition(|&v| v != 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    include!("division.tests.rs");
}
