//! Decadic (radix `10^9`) magnitude: the limb vector backing
//! [`crate::decimal::Decimal`]'s coefficient.
//!
//! Kept as an independent specialisation from [`super::binary`] rather than
//! a shared generic: the two radices pick different multiplication
//! thresholds (this kernel needs Toom-Cook-3 for very large coefficients;
//! the binary kernel never reaches sizes where that pays for itself) and
//! division normalisation differs (a decadic normalising factor is a small
//! scalar multiply, not a power-of-two shift).

mod add;
mod convert;
mod div;
mod mul;
mod ops;
mod scale;

pub use add::{add_assign_slices, add_slices, sub_assign_slices, sub_slices};
pub use convert::{from_decimal_string, to_decimal_string};
pub use div::{div_rem, DIVISOR_LARGE_CUTOFF};
pub use mul::{mul_slices, KARATSUBA_CUTOFF, TOOM_COOK_CUTOFF};
pub use scale::{scale_down, scale_up};

use std::cmp::Ordering;

/// Radix of the decadic magnitude kernel: `10^9`, the largest power of ten
/// that fits in a `u32` limb with headroom for carry arithmetic in a `u64`
/// accumulator.
pub const RADIX: u32 = 1_000_000_000;

/// Decimal digits represented by one limb.
pub const DIGITS_PER_LIMB: u32 = 9;

/// A non-negative arbitrary-precision integer stored as little-endian
/// base-`10^9` limbs.
///
/// Canonical invariants mirror [`super::binary::BinaryMagnitude`]: at least
/// one limb, no trailing (most-significant) zero limb unless the value is
/// zero, and every limb strictly less than [`RADIX`].
#[derive(Clone, Debug, Eq)]
pub struct DecadicMagnitude {
    /// Little-endian limbs; `limbs[0]` is least significant. Each limb is
    /// `< RADIX`.
    pub(crate) limbs: Vec<u32>,
}

impl DecadicMagnitude {
    /// The value zero.
    #[must_use]
    pub fn zero() -> Self {
        DecadicMagnitude { limbs: vec![0] }
    }

    /// Builds a magnitude from limbs already known to satisfy the canonical
    /// invariants (normalised, every limb `< RADIX`). Debug builds assert
    /// this; release builds trust the caller.
    #[must_use]
    pub fn from_limbs_unchecked(limbs: Vec<u32>) -> Self {
        let m = DecadicMagnitude { limbs };
        debug_assert!(m.is_canonical(), "from_limbs_unchecked given non-canonical limbs");
        m
    }

    /// Builds a magnitude from arbitrary `u32` limbs, reducing each limb
    /// modulo [`RADIX`] (propagating the overflow into the next limb) and
    /// trimming trailing zero limbs.
    #[must_use]
    pub fn from_limbs(limbs: Vec<u32>) -> Self {
        let mut out = limbs;
        carry_reduce(&mut out);
        normalize(&mut out);
        DecadicMagnitude { limbs: out }
    }

    pub(crate) fn is_canonical(&self) -> bool {
        !self.limbs.is_empty()
            && (self.limbs.len() == 1 || *self.limbs.last().unwrap() != 0)
            && self.limbs.iter().all(|&l| l < RADIX)
    }

    /// Borrows the little-endian limb slice.
    #[must_use]
    pub fn limbs(&self) -> &[u32] {
        &self.limbs
    }

    /// True if the value is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.limbs.len() == 1 && self.limbs[0] == 0
    }

    /// Number of limbs in the canonical representation.
    #[must_use]
    pub fn limb_len(&self) -> usize {
        self.limbs.len()
    }

    /// Number of significant decimal digits (`1` for zero).
    #[must_use]
    pub fn digit_count(&self) -> usize {
        let n = significant_len(&self.limbs);
        if n == 0 {
            return 1;
        }
        let top = self.limbs[n - 1];
        (n - 1) * DIGITS_PER_LIMB as usize + decimal_digits(top)
    }
}

fn decimal_digits(mut v: u32) -> usize {
    if v == 0 {
        return 1;
    }
    let mut n = 0;
    while v > 0 {
        n += 1;
        v /= 10;
    }
    n
}

impl PartialEq for DecadicMagnitude {
    fn eq(&self, other: &Self) -> bool {
        cmp_slices(&self.limbs, &other.limbs) == Ordering::Equal
    }
}

impl PartialOrd for DecadicMagnitude {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DecadicMagnitude {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_slices(&self.limbs, &other.limbs)
    }
}

/// Propagates any limb `>= RADIX` into the next limb. Used by
/// [`DecadicMagnitude::from_limbs`] to accept raw accumulator output
/// without requiring every intermediate sum to already be reduced.
pub(crate) fn carry_reduce(limbs: &mut Vec<u32>) {
    let mut carry: u64 = 0;
    for limb in limbs.iter_mut() {
        let v = *limb as u64 + carry;
        *limb = (v % RADIX as u64) as u32;
        carry = v / RADIX as u64;
    }
    while carry != 0 {
        limbs.push((carry % RADIX as u64) as u32);
        carry /= RADIX as u64;
    }
}

/// Strips trailing (most-significant) zero limbs, keeping at least one.
pub(crate) fn normalize(limbs: &mut Vec<u32>) {
    while limbs.len() > 1 && *limbs.last().unwrap() == 0 {
        limbs.pop();
    }
    if limbs.is_empty() {
        limbs.push(0);
    }
}

/// Compares two limb slices as big integers, ignoring any non-canonical
/// trailing zeros on either side.
pub(crate) fn cmp_slices(a: &[u32], b: &[u32]) -> Ordering {
    let la = significant_len(a);
    let lb = significant_len(b);
    if la != lb {
        return la.cmp(&lb);
    }
    for i in (0..la).rev() {
        if a[i] != b[i] {
            return a[i].cmp(&b[i]);
        }
    }
    Ordering::Equal
}

/// Length of a limb slice excluding trailing zero limbs (at least 0).
pub(crate) fn significant_len(limbs: &[u32]) -> usize {
    let mut n = limbs.len();
    while n > 0 && limbs[n - 1] == 0 {
        n -= 1;
    }
    n
}

impl From<u64> for DecadicMagnitude {
    fn from(value: u64) -> Self {
        let mut limbs = Vec::new();
        let mut v = value;
        if v == 0 {
            limbs.push(0);
        }
        while v > 0 {
            limbs.push((v % RADIX as u64) as u32);
            v /= RADIX as u64;
        }
        DecadicMagnitude { limbs }
    }
}

impl From<u32> for DecadicMagnitude {
    fn from(value: u32) -> Self {
        DecadicMagnitude::from(value as u64)
    }
}
