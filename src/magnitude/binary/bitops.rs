//! Bitwise AND/OR/XOR on non-negative binary magnitudes: the fast path for
//! operands that are already known to be non-negative. Python-style
//! two's-complement emulation for negative operands is built on top of
//! these in [`crate::int::bitops`], which knows about sign; this module
//! only ever sees unsigned limb vectors.

use crate::magnitude::binary::{normalize, BinaryMagnitude};

fn zip_with(a: &[u32], b: &[u32], f: impl Fn(u32, u32) -> u32) -> Vec<u32> {
    let n = a.len().max(b.len());
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let ai = a.get(i).copied().unwrap_or(0);
        let bi = b.get(i).copied().unwrap_or(0);
        out.push(f(ai, bi));
    }
    normalize(&mut out);
    out
}

/// Limb-wise AND, zero-extending the shorter operand.
#[must_use]
pub fn and_slices(a: &[u32], b: &[u32]) -> Vec<u32> {
    zip_with(a, b, |x, y| x & y)
}

/// Limb-wise OR, zero-extending the shorter operand.
#[must_use]
pub fn or_slices(a: &[u32], b: &[u32]) -> Vec<u32> {
    zip_with(a, b, |x, y| x | y)
}

/// Limb-wise XOR, zero-extending the shorter operand.
#[must_use]
pub fn xor_slices(a: &[u32], b: &[u32]) -> Vec<u32> {
    zip_with(a, b, |x, y| x ^ y)
}

impl BinaryMagnitude {
    /// `self & other` (both treated as non-negative).
    #[must_use]
    pub fn bitand(&self, other: &Self) -> Self {
        BinaryMagnitude::from_limbs(and_slices(&self.limbs, &other.limbs))
    }

    /// `self | other` (both treated as non-negative).
    #[must_use]
    pub fn bitor(&self, other: &Self) -> Self {
        BinaryMagnitude::from_limbs(or_slices(&self.limbs, &other.limbs))
    }

    /// `self ^ other` (both treated as non-negative).
    #[must_use]
    pub fn bitxor(&self, other: &Self) -> Self {
        BinaryMagnitude::from_limbs(xor_slices(&self.limbs, &other.limbs))
    }
}
