//! Python-style two's-complement bitwise AND/OR/XOR/NOT, and signed shifts.
//!
//! A negative value is treated as though sign-extended with infinitely
//! many 1-bits: `-x` is represented as the bitwise complement of `x - 1`.
//! Each binary operator is applied limb-by-limb against that virtual
//! extension, and the result's sign is recovered from whichever extension
//! bit the combinator itself produces. When both operands are non-negative
//! this collapses to operating directly on the magnitude limbs, with no
//! two's-complement detour at all.

use crate::int::{Int, Sign};
use crate::magnitude::binary::BinaryMagnitude;

/// A limb vector plus the implicit bit every position beyond its end
/// carries: `false` (all-zero) for a non-negative operand, `true`
/// (all-one) for a negative one.
struct TwosComplement {
    limbs: Vec<u32>,
    ext: bool,
}

fn encode(x: &Int) -> TwosComplement {
    if x.is_negative() {
        let m = x.magnitude.sub(&BinaryMagnitude::from(1u32)).expect("|x| >= 1 for negative x");
        TwosComplement { limbs: m.limbs().iter().map(|&l| !l).collect(), ext: true }
    } else {
        TwosComplement { limbs: x.magnitude.limbs().to_vec(), ext: false }
    }
}

fn decode(limbs: Vec<u32>, ext: bool) -> Int {
    if !ext {
        Int::new(BinaryMagnitude::from_limbs(limbs), Sign::NonNegative)
    } else {
        let inverted: Vec<u32> = limbs.iter().map(|&l| !l).collect();
        let mag = BinaryMagnitude::from_limbs(inverted).add(&BinaryMagnitude::from(1u32));
        Int::new(mag, Sign::Negative)
    }
}

fn combine(a: &Int, b: &Int, f: impl Fn(u32, u32) -> u32, fext: impl Fn(bool, bool) -> bool) -> Int {
    let ea = encode(a);
    let eb = encode(b);
    let n = ea.limbs.len().max(eb.limbs.len());
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let la = ea.limbs.get(i).copied().unwrap_or(if ea.ext { u32::MAX } else { 0 });
        let lb = eb.limbs.get(i).copied().unwrap_or(if eb.ext { u32::MAX } else { 0 });
        out.push(f(la, lb));
    }
    decode(out, fext(ea.ext, eb.ext))
}

impl Int {
    /// `self & other`, Python two's-complement semantics.
    #[must_use]
    pub fn bitand(&self, other: &Self) -> Self {
        if !self.is_negative() && !other.is_negative() {
            return Int::new(self.magnitude.bitand(&other.magnitude), Sign::NonNegative);
        }
        combine(self, other, |a, b| a & b, |a, b| a && b)
    }

    /// `self | other`, Python two's-complement semantics.
    #[must_use]
    pub fn bitor(&self, other: &Self) -> Self {
        if !self.is_negative() && !other.is_negative() {
            return Int::new(self.magnitude.bitor(&other.magnitude), Sign::NonNegative);
        }
        combine(self, other, |a, b| a | b, |a, b| a || b)
    }

    /// `self ^ other`, Python two's-complement semantics.
    #[must_use]
    pub fn bitxor(&self, other: &Self) -> Self {
        if !self.is_negative() && !other.is_negative() {
            return Int::new(self.magnitude.bitxor(&other.magnitude), Sign::NonNegative);
        }
        combine(self, other, |a, b| a ^ b, |a, b| a != b)
    }

    /// `!self`, i.e. `-self - 1`.
    #[must_use]
    pub fn bitnot(&self) -> Self {
        self.neg().sub(&Int::one())
    }

    /// `self << bits`. Shifting left preserves sign: multiplying by a
    /// power of two never changes which side of zero a value is on.
    #[must_use]
    pub fn shl(&self, bits: u32) -> Self {
        if self.is_zero() {
            return Int::zero();
        }
        Int::new(self.magnitude.shl(bits), self.sign)
    }

    /// `self >> bits`, arithmetic shift rounding toward `-inf` for
    /// negative values (not truncation): for `self < 0`,
    /// `floor(self / 2^bits) = -(((|self| - 1) >> bits) + 1)`.
    #[must_use]
    pub fn shr(&self, bits: u32) -> Self {
        if !self.is_negative() {
            return Int::new(self.magnitude.shr(bits), Sign::NonNegative);
        }
        let m_minus_one = self.magnitude.sub(&BinaryMagnitude::from(1u32)).expect("|self| >= 1 for negative self");
        let shifted = m_minus_one.shr(bits).add(&BinaryMagnitude::from(1u32));
        Int::new(shifted, Sign::Negative)
    }
}
