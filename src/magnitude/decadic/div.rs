//! Division on decadic-radix limb slices.
//!
//! Structurally the same dispatch as [`crate::magnitude::binary::div`]:
//! single-limb, divisor-is-a-power-of-the-radix, Knuth D below the large
//! divisor cutoff, slice-based Burnikel-Ziegler above it. The one
//! structural difference from the binary kernel is normalisation: Knuth D
//! needs the divisor's leading limb to be at least `RADIX / 2`, and since
//! the radix here is `10^9` rather than a power of two, that normalisation
//! is a scalar multiply by a small factor rather than a bit shift.

use crate::errors::{ArithError, ArithResult};
use crate::magnitude::decadic::mul::{mul_limb, mul_slices};
use crate::magnitude::decadic::{cmp_slices, normalize, significant_len, RADIX};
use std::cmp::Ordering;

/// Divisor length (in limbs) at or above which division switches from
/// Knuth's Algorithm D to slice-based Burnikel-Ziegler.
pub const DIVISOR_LARGE_CUTOFF: usize = 64;

/// Below this divisor length (within the Burnikel-Ziegler recursion), fall
/// back to Knuth D directly.
const BZ_LEAF_CUTOFF: usize = 16;

/// `(a / b, a % b)`. Fails with [`ArithError::DivideByZero`] if `b` is zero.
pub fn div_rem(a: &[u32], b: &[u32]) -> ArithResult<(Vec<u32>, Vec<u32>)> {
    let nb = significant_len(b);
    if nb == 0 {
        return Err(ArithError::DivideByZero);
    }
    let na = significant_len(a);
    if na == 0 || cmp_slices(a, b) == Ordering::Less {
        let mut r = a[..na].to_vec();
        normalize(&mut r);
        return Ok((vec![0], r));
    }

    if nb == 1 {
        let (q, r) = div_rem_single_limb(&a[..na], b[0]);
        return Ok((q, vec![r]));
    }

    if let Some(k) = power_of_radix_shift(&b[..nb]) {
        let mut q = a[..na].to_vec();
        let r: Vec<u32> = if k >= q.len() { std::mem::take(&mut q) } else { q.drain(..k).collect() };
        normalize(&mut q);
        let mut r = r;
        normalize(&mut r);
        return Ok((q, r));
    }

    if nb < DIVISOR_LARGE_CUTOFF {
        Ok(div_rem_knuth(&a[..na], &b[..nb]))
    } else {
        Ok(div_rem_burnikel_ziegler(&a[..na], &b[..nb]))
    }
}

/// `b == RADIX^k` for some `k` (top limb `1`, all lower limbs `0`).
fn power_of_radix_shift(b: &[u32]) -> Option<usize> {
    let n = b.len();
    if n == 0 || b[n - 1] != 1 {
        return None;
    }
    if b[..n - 1].iter().any(|&l| l != 0) {
        return None;
    }
    Some(n - 1)
}

/// Single-pass long division by a one-limb divisor.
pub fn div_rem_single_limb(a: &[u32], d: u32) -> (Vec<u32>, u32) {
    debug_assert!(d != 0);
    let mut q = vec![0u32; a.len()];
    let mut rem: u64 = 0;
    for i in (0..a.len()).rev() {
        let cur = rem * RADIX as u64 + a[i] as u64;
        q[i] = (cur / d as u64) as u32;
        rem = cur % d as u64;
    }
    normalize(&mut q);
    (q, rem as u32)
}

/// Knuth's Algorithm D, generalised to radix [`RADIX`]: normalises by
/// multiplying both operands by a small scalar factor so the divisor's top
/// limb is at least `RADIX / 2`, then estimates each quotient limb by
/// 3-by-2 division of the dividend's running top three limbs against the
/// divisor's top two, correcting down by at most two.
pub fn div_rem_knuth(a: &[u32], b: &[u32]) -> (Vec<u32>, Vec<u32>) {
    let n = significant_len(b);
    debug_assert!(n >= 2, "single-limb divisors go through div_rem_single_limb");
    let m_plus_n = significant_len(a);
    if m_plus_n < n {
        return (vec![0], a.to_vec());
    }
    let m = m_plus_n - n;

    // D1: normalise so the divisor's top limb is >= RADIX/2.
    let d = RADIX as u64 / (b[n - 1] as u64 + 1);
    let bn = {
        let mut v = mul_limb(&b[..n], d as u32);
        v.resize(n, 0);
        v
    };
    let mut u = {
        let mut v = mul_limb(&a[..m_plus_n], d as u32);
        v.resize(m_plus_n + 1, 0);
        v
    };

    let mut q = vec![0u32; m + 1];

    for j in (0..=m).rev() {
        let numerator3 = [limb_at(&u, j + n - 2), limb_at(&u, j + n - 1), limb_at(&u, j + n)];
        let mut qhat = div_3by2(&numerator3, &[bn[n - 2], bn[n - 1]]);

        loop {
            let mut borrow: i64 = 0;
            let mut mul_carry: u64 = 0;
            let mut tmp = vec![0u32; n];
            for i in 0..n {
                let prod = qhat as u64 * bn[i] as u64 + mul_carry;
                mul_carry = prod / RADIX as u64;
                let sub = (prod % RADIX as u64) as i64 + borrow;
                let mut diff = limb_at(&u, j + i) as i64 - sub;
                if diff < 0 {
                    diff += RADIX as i64;
                    borrow = 1;
                } else {
                    borrow = 0;
                }
                tmp[i] = diff as u32;
            }
            let top = limb_at(&u, j + n) as i64 - mul_carry as i64 - borrow;
            if top < 0 {
                qhat -= 1;
                continue;
            }
            for i in 0..n {
                set_limb_at(&mut u, j + i, tmp[i]);
            }
            set_limb_at(&mut u, j + n, top as u32);
            break;
        }
        q[j] = qhat;
    }

    // D8: de-normalise the remainder by dividing out the scalar factor.
    let (r, rem) = div_rem_single_limb(&u[..n], d as u32);
    debug_assert_eq!(rem, 0, "normalising scalar must divide the scaled remainder exactly");

    let mut q = q;
    normalize(&mut q);
    let mut r = r;
    normalize(&mut r);
    (q, r)
}

fn limb_at(v: &[u32], i: usize) -> u32 {
    v.get(i).copied().unwrap_or(0)
}

fn set_limb_at(v: &mut [u32], i: usize, val: u32) {
    v[i] = val;
}

/// 3-limb-by-2-limb quotient digit estimate against a normalised divisor
/// (`d[1] >= RADIX/2`). May overestimate by up to two; the caller's
/// multiply-subtract retry loop corrects that.
fn div_3by2(n: &[u32; 3], d: &[u32; 2]) -> u32 {
    debug_assert!(d[1] as u64 * 2 >= RADIX as u64);
    let num_hi = n[2] as u64 * RADIX as u64 + n[1] as u64;
    if n[2] as u64 == d[1] as u64 {
        return RADIX - 1;
    }
    let mut qhat = (num_hi / d[1] as u64).min((RADIX - 1) as u64);
    let mut rhat = num_hi - qhat * d[1] as u64;

    while rhat < RADIX as u64
        && qhat as u128 * d[0] as u128 > (rhat as u128 * RADIX as u128 + n[0] as u128)
    {
        qhat -= 1;
        rhat += d[1] as u64;
    }
    qhat as u32
}

// ---------------------------------------------------------------------
// Slice-based Burnikel-Ziegler division (same decomposition as the binary
// kernel, recursing on this module's own Knuth D leaf).
// ---------------------------------------------------------------------

fn pad_to(v: &[u32], len: usize) -> Vec<u32> {
    let mut out = vec![0u32; len];
    let copy_len = v.len().min(len);
    out[..copy_len].copy_from_slice(&v[..copy_len]);
    out
}

fn shift_limbs(v: &[u32], k: usize) -> Vec<u32> {
    let mut out = vec![0u32; k];
    out.extend_from_slice(v);
    out
}

fn big_add(a: &[u32], b: &[u32]) -> Vec<u32> {
    crate::magnitude::decadic::add_slices(a, b)
}

fn big_sub(a: &[u32], b: &[u32]) -> Vec<u32> {
    crate::magnitude::decadic::sub_slices(a, b).expect("caller must guarantee a >= b")
}

fn big_lt(a: &[u32], b: &[u32]) -> bool {
    cmp_slices(a, b) == Ordering::Less
}

/// Top-level Burnikel-Ziegler entry point.
pub fn div_rem_burnikel_ziegler(a: &[u32], b: &[u32]) -> (Vec<u32>, Vec<u32>) {
    let n0 = significant_len(b);
    let n = n0 + (n0 % 2);
    let b_n = pad_to(&b[..n0], n);

    let na = significant_len(a);
    let t = na.div_ceil(n).max(2);
    let a_pad = pad_to(&a[..na], t * n);

    let mut blocks: Vec<Vec<u32>> = Vec::with_capacity(t);
    for i in 0..t {
        blocks.push(a_pad[i * n..(i + 1) * n].to_vec());
    }

    let mut remainder = blocks[t - 1].clone();
    let mut quotient = vec![0u32; (t - 1) * n];

    for i in (0..=t - 2).rev() {
        let dividend_2n = {
            let mut v = blocks[i].clone();
            v.extend_from_slice(&remainder);
            v
        };
        let (qi, ri) = div2n1n(&dividend_2n, &b_n, n);
        quotient[i * n..(i + 1) * n].copy_from_slice(&qi);
        remainder = ri;
    }

    normalize(&mut quotient);
    normalize(&mut remainder);
    (quotient, remainder)
}

fn div2n1n(a: &[u32], b: &[u32], n: usize) -> (Vec<u32>, Vec<u32>) {
    debug_assert_eq!(a.len(), 2 * n);
    debug_assert_eq!(b.len(), n);
    if n < BZ_LEAF_CUTOFF || n % 2 == 1 {
        let (q, r) = div_rem_knuth_any(a, b);
        return (pad_to(&q, n), pad_to(&r, n));
    }

    let half = n / 2;
    let a_top3half = &a[half..2 * n];
    let a_bottom_half = &a[..half];

    let (q1, r1) = div3n2n(a_top3half, b, half);

    let mut a2 = a_bottom_half.to_vec();
    a2.extend_from_slice(&r1);
    let (q0, r0) = div3n2n(&a2, b, half);

    let mut q = pad_to(&q0, half);
    q.extend_from_slice(&pad_to(&q1, half));
    (pad_to(&q, n), pad_to(&r0, n))
}

fn div3n2n(a: &[u32], b: &[u32], k: usize) -> (Vec<u32>, Vec<u32>) {
    debug_assert_eq!(a.len(), 3 * k);
    debug_assert_eq!(b.len(), 2 * k);

    let b1 = &b[k..2 * k];
    let b0 = &b[..k];
    let a_top2k = &a[k..3 * k];
    let a0 = &a[..k];
    let a1 = &a[2 * k..3 * k];

    let (q, mut r1) = if big_lt(a1, b1) {
        div2n1n(a_top2k, b1, k)
    } else {
        let q_max = vec![RADIX - 1; k];
        let r1 = big_sub(a_top2k, &mul_slices(&q_max, b1));
        (q_max, r1)
    };
    normalize(&mut r1);

    let d = mul_slices(&q, b0);
    let mut r = shift_limbs(&r1, k);
    r = big_add(&r, a0);

    let mut q = q;
    while big_lt(&r, &d) {
        r = big_add(&r, b);
        crate::magnitude::decadic::add::sub_assign_slices(&mut q, &[1])
            .expect("q is >= 1 whenever a correction step is needed");
    }
    r = big_sub(&r, &d);

    (pad_to(&q, k), pad_to(&r, 2 * k))
}

fn div_rem_knuth_any(a: &[u32], b: &[u32]) -> (Vec<u32>, Vec<u32>) {
    let nb = significant_len(b);
    if nb == 0 {
        return (vec![0], a.to_vec());
    }
    if nb == 1 {
        let (q, r) = div_rem_single_limb(a, b[0]);
        return (q, vec![r]);
    }
    div_rem_knuth(a, &b[..nb])
}
