//! Subtraction of decimal values
//!
//! Shares the three-segment walk with addition, except the borrow can
//! survive to the top limb. A final borrow means the subtrahend's
//! magnitude was larger; the destination then holds the ten's
//! complement of the difference and a second pass re-subtracts every
//! limb from zero to recover the magnitude, reporting the flipped sign
//! to the caller.

use crate::arithmetic::addition::add_abs;
use crate::arithmetic::sub_with_borrow;
use crate::{FixedDecimal, DIGITS_PER_LIMB};

/// dest = lhs - rhs with NaN/Infinity dispatch.
pub(crate) fn sub_any(lhs: &FixedDecimal, rhs: &FixedDecimal, dest: &mut FixedDecimal) {
    if lhs.is_nan() || rhs.is_nan() {
        dest.set_nan();
        return;
    }
    if lhs.is_inf() || rhs.is_inf() {
        dest.set_inf();
        return;
    }
    sub(lhs, rhs, dest)
}

/// dest = lhs - rhs for finite operands.
pub(crate) fn sub(lhs: &FixedDecimal, rhs: &FixedDecimal, dest: &mut FixedDecimal) {
    if lhs.is_zero() {
        // 0 - b == -b
        *dest = *rhs;
        if dest.is_negative() {
            dest.set_positive();
        } else {
            dest.set_negative();
        }
        return;
    }
    if rhs.is_zero() {
        *dest = *lhs;
        return;
    }
    let lneg = lhs.is_negative();
    let rneg = rhs.is_negative();

    if lneg != rneg {
        // a - (-b) == a + b; the magnitudes add, lhs keeps its sign
        add_abs(lhs, rhs, dest);
        if lneg {
            dest.set_negative();
        }
        return;
    }

    let diff_neg = sub_abs(lhs, rhs, dest);
    if diff_neg != lneg {
        dest.set_negative();
    }
}

/// Difference of two absolute values; returns true when the result is
/// negative (|lhs| < |rhs|).
pub(crate) fn sub_abs(lhs: &FixedDecimal, rhs: &FixedDecimal, dest: &mut FixedDecimal) -> bool {
    dest.set_zero();
    let (liu, lfu) = (lhs.intg_units(), lhs.frac_units());
    let (riu, rfu) = (rhs.intg_units(), rhs.frac_units());
    debug_assert!(liu.max(riu) + lfu.max(rfu) <= crate::MAX_LIMBS);

    let mut lhs_idx = 0;
    let mut rhs_idx = 0;
    let mut idx = 0;
    let mut borrow = 0;
    if lfu > rfu {
        // lhs has the longer fracSeg, copied as-is
        while lhs_idx < lfu - rfu {
            dest.limbs[lhs_idx] = lhs.limbs[lhs_idx];
            lhs_idx += 1;
        }
        idx = lhs_idx;
    } else if rfu > lfu {
        // rhs has the longer fracSeg, subtracted from zero limbs
        while rhs_idx < rfu - lfu {
            dest.limbs[rhs_idx] = sub_with_borrow(0, rhs.limbs[rhs_idx], &mut borrow);
            rhs_idx += 1;
        }
        idx = rhs_idx;
    }

    let stop = idx + liu.min(riu) + lfu.min(rfu);
    while idx < stop {
        dest.limbs[idx] = sub_with_borrow(lhs.limbs[lhs_idx], rhs.limbs[rhs_idx], &mut borrow);
        idx += 1;
        lhs_idx += 1;
        rhs_idx += 1;
    }

    if liu > riu {
        let stop = lhs_idx + (liu - riu);
        while lhs_idx < stop {
            dest.limbs[idx] = sub_with_borrow(lhs.limbs[lhs_idx], 0, &mut borrow);
            idx += 1;
            lhs_idx += 1;
        }
    } else if riu > liu {
        let stop = rhs_idx + (riu - liu);
        while rhs_idx < stop {
            dest.limbs[idx] = sub_with_borrow(0, rhs.limbs[rhs_idx], &mut borrow);
            idx += 1;
            rhs_idx += 1;
        }
    }

    let neg = borrow == 1;
    if neg {
        // lhs was smaller; re-subtract every written limb from zero to
        // turn the complement into the magnitude
        borrow = 0;
        for limb in dest.limbs[..idx].iter_mut() {
            *limb = sub_with_borrow(0, *limb, &mut borrow);
        }
    }

    dest.frac = lhs.frac.max(rhs.frac);
    // integer width stored as whole limbs; see add_abs
    dest.intg = (liu.max(riu) * DIGITS_PER_LIMB) as u8;
    neg
}

#[cfg(test)]
mod tests {
    use super::*;

    include!("subtraction.tests.rs");
}
