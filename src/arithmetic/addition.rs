//! Addition of decimal values
//!
//! The absolute-value kernel splits the limbs of both operands into
//! three segments relative to their overlap:
//!
//! ```txt
//! lhs:  |  xxxx  |  xxxx.xxxx  |
//! rhs:           |  yyyy.yyyy  |  yyyy  |
//! ---------------------------------------
//!       |intgSeg |  commonSeg  |fracSeg |
//! ```
//!
//! The frac-only segment is copied straight into the destination, the
//! common segment is added limb-wise with carry, and the intg-only
//! segment is the longer operand's limbs plus the running carry.

use crate::arithmetic::add_with_carry;
use crate::arithmetic::subtraction::sub_abs;
use crate::{FixedDecimal, DIGITS_PER_LIMB};

/// dest = lhs + rhs with NaN/Infinity dispatch: NaN wins over Infinity,
/// Infinity over the finite path.
pub(crate) fn add_any(lhs: &FixedDecimal, rhs: &FixedDecimal, dest: &mut FixedDecimal) {
    if lhs.is_nan() || rhs.is_nan() {
        dest.set_nan();
        return;
    }
    if lhs.is_inf() || rhs.is_inf() {
        dest.set_inf();
        return;
    }
    add(lhs, rhs, dest)
}

/// dest = lhs + rhs for finite operands.
pub(crate) fn add(lhs: &FixedDecimal, rhs: &FixedDecimal, dest: &mut FixedDecimal) {
    if lhs.is_zero() {
        *dest = *rhs;
        return;
    }
    if rhs.is_zero() {
        *dest = *lhs;
        return;
    }
    let lneg = lhs.is_negative();
    let rneg = rhs.is_negative();
    if lneg == rneg {
        add_abs(lhs, rhs, dest);
        if lneg {
            dest.set_negative();
        }
        return;
    }

    // signs differ: the result takes the sign of the larger magnitude
    let diff_neg = sub_abs(lhs, rhs, dest);
    if diff_neg != lneg {
        dest.set_negative();
    }
}

/// Sum of two absolute values.
///
/// The output fraction width is the wider of the two operands; the
/// output integer width is the larger operand's limb count expanded to
/// whole limbs, one limb more when the final carry spilled into a new
/// top limb.
pub(crate) fn add_abs(lhs: &FixedDecimal, rhs: &FixedDecimal, dest: &mut FixedDecimal) {
    dest.set_zero();
    let (liu, lfu) = (lhs.intg_units(), lhs.frac_units());
    let (riu, rfu) = (rhs.intg_units(), rhs.frac_units());
    debug_assert!(liu.max(riu) + lfu.max(rfu) <= crate::MAX_LIMBS);

    let mut lhs_idx = 0;
    let mut rhs_idx = 0;
    let mut idx = 0;
    if lfu > rfu {
        // lhs has the longer fracSeg
        while lhs_idx < lfu - rfu {
            dest.limbs[lhs_idx] = lhs.limbs[lhs_idx];
            lhs_idx += 1;
        }
        idx = lhs_idx;
    } else if rfu > lfu {
        // rhs has the longer fracSeg
        while rhs_idx < rfu - lfu {
            dest.limbs[rhs_idx] = rhs.limbs[rhs_idx];
            rhs_idx += 1;
        }
        idx = rhs_idx;
    }

    let mut carry = 0;
    let stop = idx + liu.min(riu) + lfu.min(rfu);
    while idx < stop {
        dest.limbs[idx] = add_with_carry(lhs.limbs[lhs_idx], rhs.limbs[rhs_idx], &mut carry);
        idx += 1;
        lhs_idx += 1;
        rhs_idx += 1;
    }

    if liu > riu {
        // lhs has the longer intgSeg
        let stop = lhs_idx + (liu - riu);
        while lhs_idx < stop {
            dest.limbs[idx] = add_with_carry(lhs.limbs[lhs_idx], 0, &mut carry);
            idx += 1;
            lhs_idx += 1;
        }
        if carry > 0 {
            dest.limbs[idx] = carry;
        }
    } else if riu > liu {
        // rhs has the longer intgSeg
        let stop = rhs_idx + (riu - liu);
        while rhs_idx < stop {
            dest.limbs[idx] = add_with_carry(rhs.limbs[rhs_idx], 0, &mut carry);
            idx += 1;
            rhs_idx += 1;
        }
        if carry > 0 {
            dest.limbs[idx] = carry;
        }
    } else if carry != 0 {
        // no intgSeg left but the common segment carried out
        dest.limbs[idx] = carry;
    }

    dest.frac = lhs.frac.max(rhs.frac);
    // scanning for the exact top digit costs a pass, so the integer
    // width is stored as whole limbs; a final carry occupies one more
    dest.intg = ((liu.max(riu) + carry as usize) * DIGITS_PER_LIMB) as u8;
}

#[cfg(test)]
mod tests {
    use super::*;

    include!("addition.tests.rs");
}
