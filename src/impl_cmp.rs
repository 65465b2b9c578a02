//! Comparison of decimal values
//!
//! The three-way `compare` is defined for finite values. The trait
//! impls extend it over the special states the IEEE way: NaN is
//! unordered and never equal to anything (itself included), and the
//! infinities sit beyond every finite value. `Ord`, `Eq` and `Hash`
//! are deliberately absent because NaN breaks totality.

use crate::{FixedDecimal, MAX_LIMBS};

use std::cmp::Ordering;

impl FixedDecimal {
    /// Three-way comparison of two finite values.
    ///
    /// Values of different fractional widths compare by numeric value;
    /// `1.000` equals `1`. The behavior for NaN or infinite operands is
    /// unspecified; use the `PartialOrd` impl when specials may occur.
    pub fn compare(&self, rhs: &FixedDecimal) -> Ordering {
        let lneg = self.is_negative();
        let rneg = rhs.is_negative();
        if lneg {
            if rneg {
                // both negative: larger magnitude is the smaller value
                return cmp_abs(rhs, self);
            }
            return Ordering::Less;
        }
        if rneg {
            return Ordering::Greater;
        }
        cmp_abs(self, rhs)
    }
}

fn cmp_abs(lhs: &FixedDecimal, rhs: &FixedDecimal) -> Ordering {
    cmp_abs_parts(
        lhs.intg_units(),
        lhs.frac_units(),
        &lhs.limbs,
        rhs.intg_units(),
        rhs.frac_units(),
        &rhs.limbs,
    )
}

/// Magnitude comparison over raw limb layouts; shared with the modulo
/// kernel, which compares before committing to a division.
///
/// Excess integer limbs of the wider operand decide immediately if any
/// is non-zero. With integer widths equalized, both operands walk from
/// most significant limb downward, the shorter fractional tail reading
/// as implicit zero limbs.
pub(crate) fn cmp_abs_parts(
    mut liu: usize,
    lfu: usize,
    llimbs: &[u32; MAX_LIMBS],
    mut riu: usize,
    rfu: usize,
    rlimbs: &[u32; MAX_LIMBS],
) -> Ordering {
    while liu > 0 && liu > riu {
        if llimbs[lfu + liu - 1] > 0 {
            return Ordering::Greater;
        }
        liu -= 1;
    }
    while riu > 0 && riu > liu {
        if rlimbs[rfu + riu - 1] > 0 {
            return Ordering::Less;
        }
        riu -= 1;
    }

    // equal integer limb counts; walk downward in lockstep
    let mut i = (liu + lfu) as isize - 1;
    let mut j = (riu + rfu) as isize - 1;
    while i >= 0 && j >= 0 {
        let lv = llimbs[i as usize];
        let rv = rlimbs[j as usize];
        if lv != rv {
            return if lv > rv {
                Ordering::Greater
            } else {
                Ordering::Less
            };
        }
        i -= 1;
        j -= 1;
    }
    while i >= 0 {
        if llimbs[i as usize] > 0 {
            return Ordering::Greater;
        }
        i -= 1;
    }
    while j >= 0 {
        if rlimbs[j as usize] > 0 {
            return Ordering::Less;
        }
        j -= 1;
    }
    Ordering::Equal
}

impl PartialEq for FixedDecimal {
    fn eq(&self, rhs: &FixedDecimal) -> bool {
        if self.is_nan() || rhs.is_nan() {
            return false;
        }
        match (self.is_inf(), rhs.is_inf()) {
            (true, true) => self.is_negative() == rhs.is_negative(),
            (false, false) => self.compare(rhs) == Ordering::Equal,
            _ => false,
        }
    }
}

impl PartialOrd for FixedDecimal {
    fn partial_cmp(&self, rhs: &FixedDecimal) -> Option<Ordering> {
        if self.is_nan() || rhs.is_nan() {
            return None;
        }
        let ord = match (self.is_inf(), rhs.is_inf()) {
            (true, true) => inf_rank(self).cmp(&inf_rank(rhs)),
            (true, false) => inf_rank(self).cmp(&0),
            (false, true) => 0.cmp(&inf_rank(rhs)),
            (false, false) => self.compare(rhs),
        };
        Some(ord)
    }
}

/// -1 for negative infinity, +1 for positive; finite values rank 0
fn inf_rank(fd: &FixedDecimal) -> i32 {
    if fd.is_negative() {
        -1
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    include!("impl_cmp.tests.rs");
}
