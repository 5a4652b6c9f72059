//! Multiplication on binary-radix limb slices.
//!
//! Three algorithms, dispatched by operand size: a linear one-limb path, a
//! schoolbook `O(n*m)` path with a wide accumulator, and Karatsuba above the
//! schoolbook cutoff. The binary kernel does not need Toom-Cook-3 — that is
//! the decadic kernel's path for very large coefficients — since Karatsuba
//! alone covers the sizes `Int` realistically reaches.

use crate::magnitude::binary::add::add_at_offset;
use crate::magnitude::binary::{normalize, significant_len, BinaryMagnitude};

/// Operand size (in limbs) above which schoolbook multiplication switches
/// to Karatsuba.
pub const KARATSUBA_CUTOFF: usize = 48;

/// `a * b` over arbitrary-size limb slices, dispatching to the cheapest
/// applicable algorithm.
#[must_use]
pub fn mul_slices(a: &[u32], b: &[u32]) -> Vec<u32> {
    let na = significant_len(a);
    let nb = significant_len(b);
    if na == 0 || nb == 0 {
        return vec![0];
    }
    if na == 1 {
        return mul_limb(b, a[0]);
    }
    if nb == 1 {
        return mul_limb(a, b[0]);
    }
    if na.max(nb) <= KARATSUBA_CUTOFF {
        mul_schoolbook(&a[..na], &b[..nb])
    } else {
        mul_karatsuba(&a[..na], &b[..nb])
    }
}

/// Multiplies a magnitude by a single limb with a running carry.
#[must_use]
pub fn mul_limb(a: &[u32], b: u32) -> Vec<u32> {
    if b == 0 {
        return vec![0];
    }
    let mut out = Vec::with_capacity(a.len() + 1);
    let mut carry: u64 = 0;
    for &limb in a {
        let prod = limb as u64 * b as u64 + carry;
        out.push(prod as u32);
        carry = prod >> 32;
    }
    if carry != 0 {
        out.push(carry as u32);
    }
    normalize(&mut out);
    out
}

/// Schoolbook `O(n*m)` multiplication with a widened (`u64`) running
/// accumulator per output limb. Any zero limb in the outer (`a`) operand
/// short-circuits its column.
#[must_use]
pub fn mul_schoolbook(a: &[u32], b: &[u32]) -> Vec<u32> {
    let mut out = vec![0u32; a.len() + b.len()];
    for (i, &ai) in a.iter().enumerate() {
        if ai == 0 {
            continue;
        }
        let mut carry: u64 = 0;
        for (j, &bj) in b.iter().enumerate() {
            // Bounds are guaranteed by the `out` sizing above; kept as
            // ordinary indexing here rather than raw pointers.
            let idx = i + j;
            let prod = ai as u64 * bj as u64 + out[idx] as u64 + carry;
            out[idx] = prod as u32;
            carry = prod >> 32;
        }
        let mut idx = i + b.len();
        while carry != 0 {
            let sum = out[idx] as u64 + carry;
            out[idx] = sum as u32;
            carry = sum >> 32;
            idx += 1;
        }
    }
    normalize(&mut out);
    out
}

/// Karatsuba multiplication, splitting at `m = max(|a|, |b|) / 2` limbs.
///
/// Computes `z0 = a0*b0`, `z2 = a1*b1`,
/// `z1 = (a0+a1)*(b0+b1) - z0 - z2`, and assembles
/// `z2*B^2m + z1*B^m + z0` with [`add_at_offset`]. When one operand is no
/// larger than the split point, only two recursive multiplications are
/// needed (`a1`/`b1` is empty), handling the asymmetric-length case without
/// a separate code path.
#[must_use]
pub fn mul_karatsuba(a: &[u32], b: &[u32]) -> Vec<u32> {
    let n = a.len().max(b.len());
    if n <= KARATSUBA_CUTOFF {
        return mul_schoolbook(a, b);
    }
    let m = n / 2;

    let (a0, a1) = split_at(a, m);
    let (b0, b1) = split_at(b, m);

    let z0 = mul_karatsuba(a0, b0);

    if a1.is_empty() || b1.is_empty() {
        // Asymmetric case: only the cross term survives beyond z0.
        let cross = if a1.is_empty() {
            mul_karatsuba(a0, b1)
        } else {
            mul_karatsuba(a1, b0)
        };
        let mut out = z0;
        add_at_offset(&mut out, &cross, m);
        return out;
    }

    let z2 = mul_karatsuba(a1, b1);

    let a_sum = crate::magnitude::binary::add::add_slices(a0, a1);
    let b_sum = crate::magnitude::binary::add::add_slices(b0, b1);
    let cross = mul_karatsuba(&a_sum, &b_sum);

    // z1 = cross - z0 - z2; all three operands are non-negative integers and
    // cross >= z0 + z2 always holds by construction, so these subtractions
    // cannot underflow.
    let mut z1 = cross;
    crate::magnitude::binary::add::sub_assign_slices(&mut z1, &z0)
        .expect("karatsuba cross term must dominate z0");
    crate::magnitude::binary::add::sub_assign_slices(&mut z1, &z2)
        .expect("karatsuba cross term must dominate z0 + z2");

    let mut out = z0;
    add_at_offset(&mut out, &z1, m);
    add_at_offset(&mut out, &z2, 2 * m);
    out
}

fn split_at(limbs: &[u32], m: usize) -> (&[u32], &[u32]) {
    if limbs.len() <= m {
        (limbs, &[])
    } else {
        (&limbs[..m], &limbs[m..])
    }
}

impl BinaryMagnitude {
    /// `self * other`.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        BinaryMagnitude::from_limbs(mul_slices(&self.limbs, &other.limbs))
    }
}
