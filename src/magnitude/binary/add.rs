//! Addition and subtraction on binary-radix limb slices.
//!
//! Every entry point here takes `&[u32]` slice views so that callers such
//! as [`super::mul::mul_karatsuba`] can operate on sub-ranges of a shared
//! buffer without allocating a copy first.

use crate::errors::{ArithError, ArithResult};
use crate::magnitude::binary::{normalize, significant_len, BinaryMagnitude};

/// `a + b`, returned as freshly allocated canonical limbs.
///
/// Carries limb-by-limb through a `u64` accumulator; grows by at most one
/// limb over `max(|a|, |b|)`.
#[must_use]
pub fn add_slices(a: &[u32], b: &[u32]) -> Vec<u32> {
    let mut out = a.to_vec();
    add_assign_slices(&mut out, b);
    out
}

/// `a <- a + b`, resizing `a` in place. Grows by at most one limb.
pub fn add_assign_slices(a: &mut Vec<u32>, b: &[u32]) {
    if a.len() < b.len() {
        a.resize(b.len(), 0);
    }
    let mut carry: u64 = 0;
    for i in 0..a.len() {
        let bi = b.get(i).copied().unwrap_or(0) as u64;
        let sum = a[i] as u64 + bi + carry;
        a[i] = sum as u32;
        carry = sum >> 32;
    }
    if carry != 0 {
        a.push(carry as u32);
    }
    normalize(a);
}

/// Adds `source` into `target` starting at limb `offset`, extending
/// `target` as needed. This is the offset-add primitive Karatsuba's
/// reassembly step (`z2*B^2m + z1*B^m + z0`) relies on to avoid shifting or
/// copying the summands first.
pub fn add_at_offset(target: &mut Vec<u32>, source: &[u32], offset: usize) {
    let needed = offset + source.len();
    if target.len() < needed {
        target.resize(needed, 0);
    }
    let mut carry: u64 = 0;
    let mut i = 0;
    while i < source.len() || carry != 0 {
        let t = target[offset + i] as u64;
        let s = source.get(i).copied().unwrap_or(0) as u64;
        let sum = t + s + carry;
        target[offset + i] = sum as u32;
        carry = sum >> 32;
        i += 1;
        if offset + i >= target.len() && carry != 0 {
            target.push(0);
        }
    }
    normalize(target);
}

/// `a - b`, failing with [`ArithError::UnsignedUnderflow`] if `a < b`.
pub fn sub_slices(a: &[u32], b: &[u32]) -> ArithResult<Vec<u32>> {
    let mut out = a.to_vec();
    sub_assign_slices(&mut out, b)?;
    Ok(out)
}

/// `a <- a - b` in place, shrinking `a` by trimming leading (most
/// significant) zero limbs. Fails without modifying `a` if `a < b`.
pub fn sub_assign_slices(a: &mut Vec<u32>, b: &[u32]) -> ArithResult<()> {
    if significant_len(a) < significant_len(b)
        || (significant_len(a) == significant_len(b) && cmp_sig(a, b) == std::cmp::Ordering::Less)
    {
        return Err(ArithError::UnsignedUnderflow);
    }
    let mut borrow: i64 = 0;
    for i in 0..a.len() {
        let bi = b.get(i).copied().unwrap_or(0) as i64;
        let mut diff = a[i] as i64 - bi - borrow;
        if diff < 0 {
            diff += 1i64 << 32;
            borrow = 1;
        } else {
            borrow = 0;
        }
        a[i] = diff as u32;
    }
    debug_assert_eq!(borrow, 0, "underflow slipped past the pre-check");
    normalize(a);
    Ok(())
}

fn cmp_sig(a: &[u32], b: &[u32]) -> std::cmp::Ordering {
    let n = significant_len(a).max(significant_len(b));
    for i in (0..n).rev() {
        let ai = a.get(i).copied().unwrap_or(0);
        let bi = b.get(i).copied().unwrap_or(0);
        if ai != bi {
            return ai.cmp(&bi);
        }
    }
    std::cmp::Ordering::Equal
}

impl BinaryMagnitude {
    /// `self + other`.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        BinaryMagnitude::from_limbs(add_slices(&self.limbs, &other.limbs))
    }

    /// `self <- self + other`, mutating this value's limb buffer in place.
    pub fn add_assign_in_place(&mut self, other: &Self) {
        add_assign_slices(&mut self.limbs, &other.limbs);
    }

    /// `self - other`, failing if `self < other`.
    pub fn sub(&self, other: &Self) -> ArithResult<Self> {
        Ok(BinaryMagnitude::from_limbs(sub_slices(&self.limbs, &other.limbs)?))
    }

    /// `self <- self - other` in place.
    pub fn sub_assign_in_place(&mut self, other: &Self) -> ArithResult<()> {
        sub_assign_slices(&mut self.limbs, &other.limbs)
    }

    /// `self <- self + 1`, walking the limb vector only until a
    /// non-overflowing limb is found (the accumulator-loop fast path used
    /// by `Int`'s `+= 1`).
    pub fn increment_in_place(&mut self) {
        for limb in self.limbs.iter_mut() {
            let (sum, overflow) = limb.overflowing_add(1);
            *limb = sum;
            if !overflow {
                return;
            }
        }
        self.limbs.push(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_carries_into_new_limb() {
        let a = vec![u32::MAX];
        let b = vec![1];
        let sum = add_slices(&a, &b);
        assert_eq!(sum, vec![0, 1]);
    }

    #[test]
    fn add_at_offset_places_source_correctly() {
        let mut target = vec![1, 2];
        add_at_offset(&mut target, &[5, 6], 2);
        assert_eq!(target, vec![1, 2, 5, 6]);
    }

    #[test]
    fn add_at_offset_propagates_carry_beyond_source_len() {
        let mut target = vec![1, u32::MAX, u32::MAX];
        add_at_offset(&mut target, &[1], 1);
        assert_eq!(target, vec![1, 0, 0, 1]);
    }

    #[test]
    fn sub_shrinks_leading_zero_limbs() {
        let a = vec![0, 1]; // 2^32
        let b = vec![1];
        let diff = sub_slices(&a, &b).unwrap();
        assert_eq!(diff, vec![u32::MAX]);
    }

    #[test]
    fn sub_underflow_is_an_error() {
        assert_eq!(sub_slices(&[1], &[2]), Err(ArithError::UnsignedUnderflow));
    }

    #[test]
    fn increment_ripples_through_full_carry_chain() {
        let mut m = BinaryMagnitude::from_limbs(vec![u32::MAX, u32::MAX]);
        m.increment_in_place();
        assert_eq!(m.limbs(), &[0, 0, 1]);
    }
}
