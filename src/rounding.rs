//! Rounding of decimal values
//!
//! MySQL's DECIMAL rounds half away from zero and nothing else, so
//! that is the only mode here: 5..9 in the first dropped digit rounds
//! the magnitude up, 0..4 truncates, and the sign is reapplied after.
//! The scale may be negative to round into the integer part, matching
//! MySQL/Oracle `ROUND(x, n)` behavior.
//!
//! If more rounding modes are ever needed, every routine in this file
//! has to be reconsidered carefully.

use crate::arithmetic::{add_with_carry, div9, limb_ge_half, mod9, units_for, POW10};
use crate::{FixedDecimal, DIGITS_PER_LIMB, LIMB_BASE, MAX_FRAC};

impl FixedDecimal {
    /// Round in place so the value carries exactly `scale` fractional
    /// digits. Negative `scale` rounds to a power of ten inside the
    /// integer part. NaN and infinity are not meaningful here; the
    /// caller guards.
    pub fn round(&mut self, scale: i32) {
        debug_assert!(scale <= MAX_FRAC as i32);
        let cur_frac = self.frac_digits() as i32;
        let intg_units = self.intg_units();
        let mut frac_units = self.frac_units();
        if scale >= cur_frac {
            // magnitude unchanged; grow the stored fractional width
            let new_frac_units = units_for(scale as usize);
            if new_frac_units > frac_units {
                // slide the whole value up and zero the vacated limbs
                let diff = new_frac_units - frac_units;
                self.limbs.copy_within(0..frac_units + intg_units, diff);
                for limb in self.limbs[..diff].iter_mut() {
                    *limb = 0;
                }
            }
            self.frac = scale as u8;
            return;
        }

        let trunc; // digits to truncate or round away
        let mut carry = 0;
        let round_frac;
        if scale < 0 {
            let intg = (-scale) as usize;
            if intg + 1 > self.intg_digits() as usize {
                // rounding position is above every stored digit
                self.set_zero();
                return;
            }
            // drop the fractional limbs entirely
            self.limbs.copy_within(frac_units..frac_units + intg_units, 0);
            for limb in self.limbs[intg_units..intg_units + frac_units].iter_mut() {
                *limb = 0;
            }
            frac_units = 0;
            round_frac = 0;
            trunc = intg;
        } else {
            round_frac = scale as u8;
            // limbs that must survive for the rounding decision
            let keep_units = units_for(scale as usize + 1);
            if keep_units < frac_units {
                let mut keep = keep_units;
                if mod9(scale as usize) == 0 {
                    // the decision digit tops the limb right below the
                    // new low-water mark; capture its carry now
                    if limb_ge_half(self.limbs[frac_units - keep]) {
                        carry = 1;
                    }
                    keep -= 1;
                }
                self.limbs
                    .copy_within(frac_units - keep..frac_units + intg_units, 0);
                for limb in self.limbs[keep + intg_units..frac_units + intg_units].iter_mut() {
                    *limb = 0;
                }
                frac_units = keep;
            } else if keep_units > frac_units {
                // scale < cur_frac bounds keep_units by frac_units
                unreachable!()
            } else if mod9(scale as usize) == 0 {
                // keeping exactly the stored limbs, cut at a limb edge
                if limb_ge_half(self.limbs[0]) {
                    carry = 1;
                }
                self.limbs.copy_within(1..frac_units + intg_units, 0);
                self.limbs[frac_units + intg_units - 1] = 0;
                frac_units -= 1;
            }
            trunc = frac_units * DIGITS_PER_LIMB - scale as usize;
        }
        self.round_half_up_at(intg_units, frac_units, trunc, round_frac, carry);
    }

    /// Round into `dest`, leaving this value untouched.
    pub fn round_to(&self, dest: &mut FixedDecimal, scale: i32) {
        *dest = *self;
        dest.round(scale);
    }

    /// Digit-wise half-away-from-zero round at `trunc` digits above the
    /// bottom limb, followed by carry propagation and zeroing of
    /// everything below the rounding position.
    fn round_half_up_at(
        &mut self,
        intg_units: usize,
        frac_units: usize,
        trunc: usize,
        round_frac: u8,
        mut carry: u32,
    ) {
        let mut round_idx = div9(trunc);
        let round_pos = mod9(trunc);
        let clear_idx = round_idx;
        if round_pos != 0 {
            // split the limb at the rounding position; POW10[pos] / 2
            // is the half point 5, 50, 500, ... for that position
            let splitter = POW10[round_pos];
            let v = self.limbs[round_idx];
            let r = v % splitter;
            let mut v = v - r;
            if r >= splitter / 2 {
                v += splitter;
            }
            if v >= LIMB_BASE {
                v -= LIMB_BASE;
                carry = 1;
            }
            self.limbs[round_idx] = v;
            round_idx += 1;
        } else if round_idx > 0 && carry == 0 {
            // cut exactly at a limb edge inside the integer part; the
            // decision limb is the one about to be cleared
            if limb_ge_half(self.limbs[round_idx - 1]) {
                carry = 1;
            }
        }
        let end_idx = intg_units + frac_units;
        while carry > 0 && round_idx < end_idx {
            self.limbs[round_idx] = add_with_carry(self.limbs[round_idx], 0, &mut carry);
            round_idx += 1;
        }
        let mut intg_units = intg_units;
        if carry > 0 {
            // carried past the top; the integer part grows one limb
            self.limbs[end_idx] = 1;
            intg_units += 1;
        }

        for limb in self.limbs[..clear_idx].iter_mut() {
            *limb = 0;
        }
        self.intg = (intg_units * DIGITS_PER_LIMB) as u8;
        self.frac = round_frac;
        if self.neg && self.all_limbs_zero() {
            // a magnitude rounded away entirely must not stay negative
            self.neg = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    include!("rounding.tests.rs");
}
