//! Number-theoretic operations on [`Int`]: binary GCD, the iterative
//! extended Euclidean algorithm, LCM, modular exponentiation, and modular
//! inverse.

use crate::errors::{ArithError, ArithResult};
use crate::int::Int;

/// `u*a + v*b = gcd`, the output of [`Int::extended_gcd`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtendedGcd {
    pub gcd: Int,
    pub u: Int,
    pub v: Int,
}

/// Number of trailing zero bits in `|x|` (`0` if `x` is zero).
fn trailing_zero_bits(x: &Int) -> u32 {
    let mut count = 0u32;
    for &limb in x.magnitude().limbs() {
        if limb == 0 {
            count += 32;
        } else {
            count += limb.trailing_zeros();
            break;
        }
    }
    count
}

impl Int {
    /// `gcd(|self|, |other|)` via Stein's binary GCD algorithm: repeatedly
    /// strip common factors of two, then reduce by subtraction (which for
    /// two odd numbers always produces an even difference, so the next
    /// iteration has more factors of two to strip).
    #[must_use]
    pub fn gcd(&self, other: &Self) -> Self {
        let mut a = self.abs();
        let mut b = other.abs();
        if a.is_zero() {
            return b;
        }
        if b.is_zero() {
            return a;
        }

        let shift = trailing_zero_bits(&a).min(trailing_zero_bits(&b));
        a = a.shr(trailing_zero_bits(&a));

        loop {
            b = b.shr(trailing_zero_bits(&b));
            if a > b {
                std::mem::swap(&mut a, &mut b);
            }
            b = b.sub(&a);
            if b.is_zero() {
                break;
            }
        }
        a.shl(shift)
    }

    /// Iterative extended Euclidean algorithm: returns `(gcd, u, v)` with
    /// `u*self + v*other = gcd`.
    #[must_use]
    pub fn extended_gcd(&self, other: &Self) -> ExtendedGcd {
        let (mut old_r, mut r) = (self.clone(), other.clone());
        let (mut old_s, mut s) = (Int::one(), Int::zero());
        let (mut old_t, mut t) = (Int::zero(), Int::one());

        while !r.is_zero() {
            let q = old_r.div_trunc(&r).expect("r is checked non-zero by the loop condition");

            let new_r = old_r.sub(&q.mul(&r));
            old_r = r;
            r = new_r;

            let new_s = old_s.sub(&q.mul(&s));
            old_s = s;
            s = new_s;

            let new_t = old_t.sub(&q.mul(&t));
            old_t = t;
            t = new_t;
        }

        ExtendedGcd { gcd: old_r, u: old_s, v: old_t }
    }

    /// `lcm(self, other) = (|self| / gcd(self, other)) * |other|`; zero if
    /// either operand is zero.
    #[must_use]
    pub fn lcm(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Int::zero();
        }
        let g = self.gcd(other);
        self.abs().div_trunc(&g).expect("gcd divides self exactly").mul(&other.abs())
    }

    /// `self^exp mod modulus`, reducing the running product and the
    /// squared base at every step so intermediates never exceed
    /// `modulus^2`. Negative exponents route through [`Int::mod_inverse`].
    pub fn modpow(&self, exp: &Self, modulus: &Self) -> ArithResult<Self> {
        if modulus.is_zero() {
            return Err(ArithError::DivideByZero);
        }
        if exp.is_negative() {
            let inv = self.mod_inverse(modulus)?;
            return inv.modpow(&exp.neg(), modulus);
        }

        let mut base = self.mod_floor(modulus)?;
        let mut result = Int::one().mod_floor(modulus)?;
        let mut e = exp.clone();
        while !e.is_zero() {
            if e.magnitude().limbs()[0] & 1 == 1 {
                result = result.mul(&base).mod_floor(modulus)?;
            }
            base = base.mul(&base).mod_floor(modulus)?;
            e = e.shr(1);
        }
        Ok(result)
    }

    /// Modular inverse via the extended Euclidean algorithm. Fails with
    /// [`ArithError::NotInvertible`] if `gcd(self, modulus) != 1`.
    pub fn mod_inverse(&self, modulus: &Self) -> ArithResult<Self> {
        let eg = self.extended_gcd(modulus);
        if eg.gcd != Int::one() {
            return Err(ArithError::NotInvertible);
        }
        eg.u.mod_floor(modulus)
    }
}
