//! Multiplication of decimal values
//!
//! Schoolbook product over base-10^9 limbs. The fractional width of
//! the exact product is the sum of the operand widths; when that would
//! not fit next to the integer part, the lowest product limbs are
//! truncated deterministically before they are ever computed. Partial
//! products that land entirely below the kept range are skipped, and
//! the one limb straddling the cut contributes only its carry.

use crate::arithmetic::units_for;
use crate::{DecimalError, FixedDecimal, DIGITS_PER_LIMB, LIMB_BASE, MAX_FRAC_LIMBS, MAX_LIMBS};

/// dest = lhs * rhs with NaN/Infinity dispatch.
pub(crate) fn mul_any(
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
    mul(lhs, rhs, dest)
}

/// dest = lhs * rhs for finite operands.
pub(crate) fn mul(
    lhs: &FixedDecimal,
    rhs: &FixedDecimal,
    dest: &mut FixedDecimal,
) -> Result<(), DecimalError> {
    if lhs.is_zero() || rhs.is_zero() {
        dest.set_zero();
        return Ok(());
    }
    let neg = lhs.is_negative() != rhs.is_negative();
    mul_abs(lhs, rhs, dest)?;
    if neg {
        dest.set_negative();
    }
    Ok(())
}

/// Product of two absolute values.
pub(crate) fn mul_abs(
    lhs: &FixedDecimal,
    rhs: &FixedDecimal,
    dest: &mut FixedDecimal,
) -> Result<(), DecimalError> {
    dest.set_zero();
    // the exact product has the sum of the operand digit counts on
    // both sides of the point
    let result_intg_digits = lhs.intg_digits() as usize + rhs.intg_digits() as usize;
    let result_intg_units = units_for(result_intg_digits);
    let result_frac_digits = lhs.frac_digits() as usize + rhs.frac_digits() as usize;
    let mut result_frac_units = units_for(result_frac_digits);
    if result_intg_units > MAX_LIMBS {
        return Err(DecimalError::Overflow);
    }
    if result_intg_units + result_frac_units > MAX_LIMBS {
        // the integer part wins; truncate fractional limbs
        result_frac_units = MAX_LIMBS - result_intg_units;
    }
    if result_frac_units > MAX_FRAC_LIMBS {
        result_frac_units = MAX_FRAC_LIMBS;
    }
    let (liu, lfu) = (lhs.intg_units(), lhs.frac_units());
    let (riu, rfu) = (rhs.intg_units(), rhs.frac_units());
    // limbs of the exact product that will be discarded from the
    // bottom. A partial product at position < -1 can be skipped
    // entirely; at exactly -1 only its carry into limb 0 survives.
    let shift_units = (lfu + rfu - result_frac_units) as isize;
    let mut carry: u64 = 0;
    let mut top_idx: isize = 0;
    for (rhs_idx, &rv) in rhs.limbs[..riu + rfu].iter().enumerate() {
        for (lhs_idx, &lv) in lhs.limbs[..liu + lfu].iter().enumerate() {
            let idx = lhs_idx as isize + rhs_idx as isize - shift_units;
            top_idx = idx;
            if idx < -1 {
                continue;
            }
            if idx == -1 {
                let v = lv as u64 * rv as u64;
                if v < LIMB_BASE as u64 {
                    continue;
                }
                // only the overflow into limb 0 is kept
                carry = v / LIMB_BASE as u64;
                continue;
            }
            let v = lv as u64 * rv as u64 + dest.limbs[idx as usize] as u64 + carry;
            carry = v / LIMB_BASE as u64;
            dest.limbs[idx as usize] = (v - carry * LIMB_BASE as u64) as u32;
        }
        if top_idx + 1 < MAX_LIMBS as isize {
            dest.limbs[(top_idx + 1) as usize] = carry as u32;
        } else if carry > 0 {
            return Err(DecimalError::Overflow);
        }
        carry = 0;
    }
    dest.frac = result_frac_digits.min(result_frac_units * DIGITS_PER_LIMB) as u8;
    dest.intg = (result_intg_units * DIGITS_PER_LIMB) as u8;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    include!("multiplication.tests.rs");
}
