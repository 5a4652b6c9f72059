//! Binary (radix 2^32) magnitude: the limb vector backing [`crate::int::Int`].

mod add;
mod bitops;
mod convert;
mod div;
mod mul;
mod ops;
mod shift;
mod sqrt;

pub use add::{add_assign_slices, add_slices, sub_assign_slices, sub_slices};
pub use convert::{from_decimal_string, to_decimal_string};
pub use div::{div_rem, DIVISOR_LARGE_CUTOFF};
pub use mul::{mul_slices, KARATSUBA_CUTOFF};
pub use sqrt::isqrt;

use std::cmp::Ordering;

/// Radix of the binary magnitude kernel: `2^32`.
pub const RADIX_BITS: u32 = 32;

/// A non-negative arbitrary-precision integer stored as little-endian
/// base-`2^32` limbs.
///
/// The canonical invariants are: at least one limb, no
/// trailing (most-significant) zero limb unless the value is zero, and
/// every limb is a valid `u32` (automatically true of the storage type).
/// [`BinaryMagnitude::from_limbs`] enforces these; [`BinaryMagnitude::from_limbs_unchecked`]
/// does not and exists only for hot internal paths that immediately
/// re-normalise before the value escapes to a caller.
#[derive(Clone, Debug, Eq)]
pub struct BinaryMagnitude {
    /// Little-endian limbs; `limbs[0]` is least significant.
    pub(crate) limbs: Vec<u32>,
}

impl BinaryMagnitude {
    /// The value zero.
    #[must_use]
    pub fn zero() -> Self {
        BinaryMagnitude { limbs: vec![0] }
    }

    /// Builds a magnitude from limbs already known to satisfy the canonical
    /// invariants. Debug builds assert this; release builds trust the caller.
    #[must_use]
    pub fn from_limbs_unchecked(limbs: Vec<u32>) -> Self {
        let m = BinaryMagnitude { limbs };
        debug_assert!(m.is_canonical(), "from_limbs_unchecked given non-canonical limbs");
        m
    }

    /// Builds a magnitude from arbitrary limbs, normalising away trailing
    /// zero limbs and guaranteeing at least one limb remains.
    #[must_use]
    pub fn from_limbs(mut limbs: Vec<u32>) -> Self {
        normalize(&mut limbs);
        BinaryMagnitude { limbs }
    }

    pub(crate) fn is_canonical(&self) -> bool {
        !self.limbs.is_empty() && (self.limbs.len() == 1 || *self.limbs.last().unwrap() != 0)
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

    /// Number of significant bits (0 for the zero value).
    #[must_use]
    pub fn bit_len(&self) -> u32 {
        if self.is_zero() {
            return 0;
        }
        let top = *self.limbs.last().unwrap();
        (self.limbs.len() as u32 - 1) * RADIX_BITS + (RADIX_BITS - top.leading_zeros())
    }
}

impl PartialEq for BinaryMagnitude {
    fn eq(&self, other: &Self) -> bool {
        cmp_slices(&self.limbs, &other.limbs) == Ordering::Equal
    }
}

impl PartialOrd for BinaryMagnitude {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BinaryMagnitude {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_slices(&self.limbs, &other.limbs)
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

/// `true` if every limb in the slice is zero.
pub(crate) fn is_zero_slice(limbs: &[u32]) -> bool {
    limbs.iter().all(|&l| l == 0)
}

impl From<u64> for BinaryMagnitude {
    fn from(value: u64) -> Self {
        BinaryMagnitude::from_limbs(vec![value as u32, (value >> 32) as u32])
    }
}

impl From<u32> for BinaryMagnitude {
    fn from(value: u32) -> Self {
        BinaryMagnitude::from_limbs(vec![value])
    }
}
