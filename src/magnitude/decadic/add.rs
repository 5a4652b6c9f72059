//! Addition and subtraction on decadic-radix limb slices.
//!
//! Structurally identical to [`super::super::binary::add`]; the only
//! difference is the carry/borrow arithmetic works modulo [`super::RADIX`]
//! instead of `2^32`.

use crate::errors::{ArithError, ArithResult};
use crate::magnitude::decadic::{normalize, significant_len, DecadicMagnitude, RADIX};

/// `a + b`, returned as freshly allocated canonical limbs.
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
        a[i] = (sum % RADIX as u64) as u32;
        carry = sum / RADIX as u64;
    }
    if carry != 0 {
        a.push(carry as u32);
    }
    normalize(a);
}

/// Adds `source` into `target` starting at limb `offset`, extending
/// `target` as needed. Used by Karatsuba/Toom-Cook reassembly the same way
/// [`crate::magnitude::binary::add::add_at_offset`] is.
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
        target[offset + i] = (sum % RADIX as u64) as u32;
        carry = sum / RADIX as u64;
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

/// `a <- a - b` in place, shrinking `a` by trimming leading zero limbs.
/// Fails without modifying `a` if `a < b`.
pub fn sub_assign_slices(a: &mut Vec<u32>, b: &[u32]) -> ArithResult<()> {
    if crate::magnitude::decadic::cmp_slices(a, b) == std::cmp::Ordering::Less {
        return Err(ArithError::UnsignedUnderflow);
    }
    let mut borrow: i64 = 0;
    for i in 0..a.len() {
        let bi = b.get(i).copied().unwrap_or(0) as i64;
        let mut diff = a[i] as i64 - bi - borrow;
        if diff < 0 {
            diff += RADIX as i64;
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

impl DecadicMagnitude {
    /// `self + other`.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        DecadicMagnitude::from_limbs(add_slices(&self.limbs, &other.limbs))
    }

    /// `self <- self + other`, mutating this value's limb buffer in place.
    pub fn add_assign_in_place(&mut self, other: &Self) {
        add_assign_slices(&mut self.limbs, &other.limbs);
    }

    /// `self - other`, failing if `self < other`.
    pub fn sub(&self, other: &Self) -> ArithResult<Self> {
        Ok(DecadicMagnitude::from_limbs(sub_slices(&self.limbs, &other.limbs)?))
    }

    /// `self <- self - other` in place.
    pub fn sub_assign_in_place(&mut self, other: &Self) -> ArithResult<()> {
        sub_assign_slices(&mut self.limbs, &other.limbs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_carries_into_new_limb_at_radix_boundary() {
        let a = vec![RADIX - 1];
        let b = vec![1];
        assert_eq!(add_slices(&a, &b), vec![0, 1]);
    }

    #[test]
    fn add_at_offset_places_source_correctly() {
        let mut target = vec![1, 2];
        add_at_offset(&mut target, &[5, 6], 2);
        assert_eq!(target, vec![1, 2, 5, 6]);
    }

    #[test]
    fn sub_shrinks_leading_zero_limbs() {
        let a = vec![0, 1]; // RADIX
        let b = vec![1];
        let diff = sub_slices(&a, &b).unwrap();
        assert_eq!(diff, vec![RADIX - 1]);
    }

    #[test]
    fn sub_underflow_is_an_error() {
        assert_eq!(sub_slices(&[1], &[2]), Err(ArithError::UnsignedUnderflow));
    }
}
