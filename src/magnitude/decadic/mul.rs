//! Multiplication on decadic-radix limb slices.
//!
//! Four algorithms, dispatched by operand size: a one-limb path, schoolbook
//! below [`KARATSUBA_CUTOFF`], Karatsuba between that and
//! [`TOOM_COOK_CUTOFF`], and Toom-Cook 3-way above it. Toom-Cook-3 is a
//! decadic-kernel-only path: the binary kernel never
//! reaches sizes where the extra evaluation/interpolation overhead pays
//! for itself, but the decimal coefficient can grow large enough under
//! repeated multiplication that it does.

use crate::magnitude::decadic::add::{add_at_offset, add_slices, sub_slices};
use crate::magnitude::decadic::{carry_reduce, normalize, significant_len, DecadicMagnitude, RADIX};

/// Operand size (in limbs) above which schoolbook multiplication switches
/// to Karatsuba.
pub const KARATSUBA_CUTOFF: usize = 48;

/// Operand size (in limbs) above which Karatsuba switches to Toom-Cook-3.
pub const TOOM_COOK_CUTOFF: usize = 2000;

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
    let n = na.max(nb);
    if n <= KARATSUBA_CUTOFF {
        mul_schoolbook(&a[..na], &b[..nb])
    } else if n <= TOOM_COOK_CUTOFF {
        mul_karatsuba(&a[..na], &b[..nb])
    } else {
        mul_toom3(&a[..na], &b[..nb])
    }
}

/// Multiplies a magnitude by a single limb (`< RADIX`) with a running carry.
#[must_use]
pub fn mul_limb(a: &[u32], b: u32) -> Vec<u32> {
    if b == 0 {
        return vec![0];
    }
    let mut out = Vec::with_capacity(a.len() + 1);
    let mut carry: u64 = 0;
    for &limb in a {
        let prod = limb as u64 * b as u64 + carry;
        out.push((prod % RADIX as u64) as u32);
        carry = prod / RADIX as u64;
    }
    while carry != 0 {
        out.push((carry % RADIX as u64) as u32);
        carry /= RADIX as u64;
    }
    normalize(&mut out);
    out
}

/// Schoolbook `O(n*m)` multiplication with a widened (`u64`) running
/// accumulator per output limb.
#[must_use]
pub fn mul_schoolbook(a: &[u32], b: &[u32]) -> Vec<u32> {
    let mut out = vec![0u64; a.len() + b.len()];
    for (i, &ai) in a.iter().enumerate() {
        if ai == 0 {
            continue;
        }
        for (j, &bj) in b.iter().enumerate() {
            out[i + j] += ai as u64 * bj as u64;
        }
    }
    let mut result: Vec<u32> = Vec::with_capacity(out.len());
    let mut carry: u64 = 0;
    for limb in out {
        let v = limb + carry;
        result.push((v % RADIX as u64) as u32);
        carry = v / RADIX as u64;
    }
    while carry != 0 {
        result.push((carry % RADIX as u64) as u32);
        carry /= RADIX as u64;
    }
    normalize(&mut result);
    result
}

/// Karatsuba multiplication, splitting at `m = max(|a|, |b|) / 2` limbs.
/// See [`crate::magnitude::binary::mul::mul_karatsuba`] for the shared
/// derivation; this is the same algorithm over decadic limbs.
#[must_use]
pub fn mul_karatsuba(a: &[u32], b: &[u32]) -> Vec<u32> {
    let n = a.len().max(b.len());
    if n <= KARATSUBA_CUTOFF {
        return mul_schoolbook(a, b);
    }
    let m = n / 2;

    let (a0, a1) = split_at(a, m);
    let (b0, b1) = split_at(b, m);

    let z0 = mul_slices(a0, b0);

    if a1.is_empty() || b1.is_empty() {
        let cross = if a1.is_empty() { mul_slices(a0, b1) } else { mul_slices(a1, b0) };
        let mut out = z0;
        add_at_offset(&mut out, &cross, m);
        return out;
    }

    let z2 = mul_slices(a1, b1);

    let a_sum = add_slices(a0, a1);
    let b_sum = add_slices(b0, b1);
    let cross = mul_slices(&a_sum, &b_sum);

    let mut z1 = cross;
    sub_assign_nonneg(&mut z1, &z0);
    sub_assign_nonneg(&mut z1, &z2);

    let mut out = z0;
    add_at_offset(&mut out, &z1, m);
    add_at_offset(&mut out, &z2, 2 * m);
    out
}

fn sub_assign_nonneg(a: &mut Vec<u32>, b: &[u32]) {
    *a = sub_slices(a, b).expect("karatsuba/toom cross term must dominate its subtrahend");
}

fn split_at(limbs: &[u32], m: usize) -> (&[u32], &[u32]) {
    if limbs.len() <= m {
        (limbs, &[])
    } else {
        (&limbs[..m], &limbs[m..])
    }
}

/// A value that may be negative during Toom-Cook's evaluation/interpolation
/// steps, even though every input and the final result are non-negative
/// magnitudes. Scoped entirely to this module — it is not a general signed
/// integer and never escapes to [`crate::int`].
#[derive(Clone)]
struct Signed {
    mag: Vec<u32>,
    neg: bool,
}

impl Signed {
    fn nonneg(mag: Vec<u32>) -> Self {
        Signed { mag, neg: false }
    }

    fn is_zero(&self) -> bool {
        significant_len(&self.mag) == 0
    }

    fn add(&self, other: &Signed) -> Signed {
        if self.neg == other.neg {
            let mag = add_slices(&self.mag, &other.mag);
            let neg = self.neg && significant_len(&mag) != 0;
            Signed { mag, neg }
        } else {
            match crate::magnitude::decadic::cmp_slices(&self.mag, &other.mag) {
                std::cmp::Ordering::Equal => Signed::nonneg(vec![0]),
                std::cmp::Ordering::Greater => {
                    Signed { mag: sub_slices(&self.mag, &other.mag).unwrap(), neg: self.neg }
                }
                std::cmp::Ordering::Less => {
                    Signed { mag: sub_slices(&other.mag, &self.mag).unwrap(), neg: other.neg }
                }
            }
        }
    }

    fn sub(&self, other: &Signed) -> Signed {
        self.add(&Signed { mag: other.mag.clone(), neg: !other.neg })
    }

    fn mul(&self, other: &Signed) -> Signed {
        let mag = mul_slices(&self.mag, &other.mag);
        let neg = (self.neg ^ other.neg) && significant_len(&mag) != 0;
        Signed { mag, neg }
    }

    /// Exact division by a small positive scalar (`2`, `4`, `6`, `16`); the
    /// Toom-Cook-3 interpolation formulas only ever divide evenly.
    fn div_exact_small(&self, d: u32) -> Signed {
        let (q, r) = div_rem_limb(&self.mag, d);
        debug_assert_eq!(r, 0, "toom-cook-3 interpolation division must be exact");
        Signed { mag: q, neg: self.neg && significant_len(&q) != 0 }
    }

    /// `self` is known to be non-negative by construction (a true
    /// polynomial coefficient); unwraps the magnitude, asserting that.
    fn into_nonneg(self) -> Vec<u32> {
        debug_assert!(!self.neg || self.is_zero(), "toom-cook-3 coefficient expected non-negative");
        self.mag
    }
}

fn div_rem_limb(a: &[u32], d: u32) -> (Vec<u32>, u32) {
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

fn small_multiple(a: &[u32], k: u32) -> Signed {
    Signed::nonneg(mul_limb(a, k))
}

/// Toom-Cook 3-way multiplication: splits each operand into three `k`-limb
/// parts, evaluates the resulting degree-2 polynomials at `0, 1, -1, 2,
/// infinity`, multiplies pointwise (recursing back into [`mul_slices`],
/// which may itself dispatch to Toom-Cook-3 again for large sub-products),
/// and interpolates the degree-4 product polynomial back from those five
/// values with Bodrato's exact-division formulas.
#[must_use]
pub fn mul_toom3(a: &[u32], b: &[u32]) -> Vec<u32> {
    let n = a.len().max(b.len());
    if n <= TOOM_COOK_CUTOFF {
        return mul_karatsuba(a, b);
    }
    let k = n.div_ceil(3);

    let (a0, a1, a2) = split3(a, k);
    let (b0, b1, b2) = split3(b, k);

    // p(x) = a0 + a1*x + a2*x^2, evaluated at the five Toom-3 points.
    let pa = eval_points(a0, a1, a2);
    let pb = eval_points(b0, b1, b2);

    let v0 = pa.p0.mul(&pb.p0);
    let v1 = pa.p1.mul(&pb.p1);
    let vm1 = pa.pm1.mul(&pb.pm1);
    let v2 = pa.p2.mul(&pb.p2);
    let vinf = pa.pinf.mul(&pb.pinf);

    let c0 = v0.clone();
    let c4 = vinf.clone();

    // c2 = (v1 + vm1)/2 - v0 - vinf
    let c2 = v1.add(&vm1).div_exact_small(2).sub(&v0).sub(&vinf);

    // a_coef = (v1 - vm1)/2 (the combined odd-coefficient term c1 + c3)
    let a_coef = v1.sub(&vm1).div_exact_small(2);

    // b_coef = v2 - v0 - 16*vinf - 4*c2
    let sixteen_vinf = small_multiple(&vinf.mag, 16);
    let four_c2 = small_multiple(&c2.mag, 4);
    let b_coef = v2.sub(&v0).sub(&sixteen_vinf).sub(&four_c2);

    // c3 = (b_coef - 2*a_coef)/6 ; c1 = a_coef - c3
    let two_a = small_multiple(&a_coef.mag, 2);
    let c3 = b_coef.sub(&two_a).div_exact_small(6);
    let c1 = a_coef.sub(&c3);

    let mut out = c0.into_nonneg();
    add_at_offset(&mut out, &c1.into_nonneg(), k);
    add_at_offset(&mut out, &c2.into_nonneg(), 2 * k);
    add_at_offset(&mut out, &c3.into_nonneg(), 3 * k);
    add_at_offset(&mut out, &c4.into_nonneg(), 4 * k);
    out
}

struct EvalPoints {
    p0: Signed,
    p1: Signed,
    pm1: Signed,
    p2: Signed,
    pinf: Signed,
}

fn eval_points(x0: &[u32], x1: &[u32], x2: &[u32]) -> EvalPoints {
    let x0 = Signed::nonneg(x0.to_vec());
    let x1 = Signed::nonneg(x1.to_vec());
    let x2 = Signed::nonneg(x2.to_vec());

    let p0 = x0.clone();
    let p1 = x0.add(&x1).add(&x2);
    let pm1 = x0.add(&x2).sub(&x1);
    let p2 = x0.add(&small_multiple(&x1.mag, 2)).add(&small_multiple(&x2.mag, 4));
    let pinf = x2;

    EvalPoints { p0, p1, pm1, p2, pinf }
}

/// Splits `limbs` into three parts of up to `k` limbs each, low to high.
fn split3(limbs: &[u32], k: usize) -> (&[u32], &[u32], &[u32]) {
    let n = limbs.len();
    let a0 = &limbs[..k.min(n)];
    let a1 = if n > k { &limbs[k..(2 * k).min(n)] } else { &[] };
    let a2 = if n > 2 * k { &limbs[2 * k..n] } else { &[] };
    (a0, a1, a2)
}

impl DecadicMagnitude {
    /// `self * other`.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        let mut limbs = mul_slices(&self.limbs, &other.limbs);
        carry_reduce(&mut limbs);
        normalize(&mut limbs);
        DecadicMagnitude { limbs }
    }
}
