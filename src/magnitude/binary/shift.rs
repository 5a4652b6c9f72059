//! Bit shifts on binary-radix magnitudes.
//!
//! A shift by `k` bits splits into a limb shift by `k / 32` and an in-limb
//! shift by `k % 32`. These operate on unsigned magnitudes only; the
//! arithmetic-rounding-toward-minus-infinity behaviour for negative signed
//! values lives in [`crate::int`], which composes these with the sign.

use crate::magnitude::binary::{normalize, BinaryMagnitude, RADIX_BITS};

/// Shifts `limbs` left by `bits`, returning freshly allocated canonical limbs.
#[must_use]
pub fn shl_bits(limbs: &[u32], bits: u32) -> Vec<u32> {
    if bits == 0 {
        let mut out = limbs.to_vec();
        normalize(&mut out);
        return out;
    }
    let limb_shift = (bits / RADIX_BITS) as usize;
    let bit_shift = bits % RADIX_BITS;

    let mut out = vec![0u32; limb_shift];
    if bit_shift == 0 {
        out.extend_from_slice(limbs);
    } else {
        let mut carry: u32 = 0;
        for &limb in limbs {
            out.push((limb << bit_shift) | carry);
            carry = limb >> (RADIX_BITS - bit_shift);
        }
        if carry != 0 {
            out.push(carry);
        }
    }
    normalize(&mut out);
    out
}

/// Shifts `limbs` right by `bits` (logical shift; no sign extension).
#[must_use]
pub fn shr_bits(limbs: &[u32], bits: u32) -> Vec<u32> {
    let limb_shift = (bits / RADIX_BITS) as usize;
    let bit_shift = bits % RADIX_BITS;

    if limb_shift >= limbs.len() {
        return vec![0];
    }

    let mut out: Vec<u32> = limbs[limb_shift..].to_vec();
    if bit_shift != 0 {
        let mut carry: u32 = 0;
        for limb in out.iter_mut().rev() {
            let new_carry = *limb << (RADIX_BITS - bit_shift);
            *limb = (*limb >> bit_shift) | carry;
            carry = new_carry;
        }
    }
    normalize(&mut out);
    out
}

impl BinaryMagnitude {
    /// `self << bits`.
    #[must_use]
    pub fn shl(&self, bits: u32) -> Self {
        BinaryMagnitude::from_limbs(shl_bits(&self.limbs, bits))
    }

    /// `self >> bits` (logical, truncating).
    #[must_use]
    pub fn shr(&self, bits: u32) -> Self {
        BinaryMagnitude::from_limbs(shr_bits(&self.limbs, bits))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shl_by_whole_limb() {
        assert_eq!(shl_bits(&[1], 32), vec![0, 1]);
    }

    #[test]
    fn shl_by_partial_limb_carries() {
        assert_eq!(shl_bits(&[1 << 31], 1), vec![0, 1]);
    }

    #[test]
    fn shr_by_whole_limb() {
        assert_eq!(shr_bits(&[0, 1], 32), vec![1]);
    }

    #[test]
    fn shr_by_partial_limb_borrows_from_above() {
        assert_eq!(shr_bits(&[0, 1], 1), vec![1 << 31]);
    }

    #[test]
    fn shift_by_zero_is_identity() {
        assert_eq!(shl_bits(&[7, 8], 0), vec![7, 8]);
        assert_eq!(shr_bits(&[7, 8], 0), vec![7, 8]);
    }
}
