//! `std::ops` operator overloads for [`BinaryMagnitude`].
//!
//! Thin delegations to the named methods in [`super::add`] and
//! [`super::mul`]; subtraction panics on underflow (via `.expect`) because
//! operator overloading has no room for a `Result` — callers that need the
//! fallible form use [`BinaryMagnitude::sub`] directly.

use crate::magnitude::binary::BinaryMagnitude;
use std::ops::{Add, Mul, Sub};

impl Add for &BinaryMagnitude {
    type Output = BinaryMagnitude;

    fn add(self, rhs: Self) -> BinaryMagnitude {
        BinaryMagnitude::add(self, rhs)
    }
}

impl Sub for &BinaryMagnitude {
    type Output = BinaryMagnitude;

    /// Panics if `self < rhs`; magnitude subtraction has no signed result.
    fn sub(self, rhs: Self) -> BinaryMagnitude {
        BinaryMagnitude::sub(self, rhs).expect("magnitude subtraction underflowed")
    }
}

impl Mul for &BinaryMagnitude {
    type Output = BinaryMagnitude;

    fn mul(self, rhs: Self) -> BinaryMagnitude {
        BinaryMagnitude::mul(self, rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_operator_matches_method() {
        let a = BinaryMagnitude::from(10u32);
        let b = BinaryMagnitude::from(20u32);
        assert_eq!(&a + &b, a.add(&b));
    }

    #[test]
    fn mul_operator_matches_method() {
        let a = BinaryMagnitude::from(6u32);
        let b = BinaryMagnitude::from(7u32);
        assert_eq!(&a * &b, a.mul(&b));
    }

    #[test]
    #[should_panic]
    fn sub_operator_panics_on_underflow() {
        let a = BinaryMagnitude::from(1u32);
        let b = BinaryMagnitude::from(2u32);
        let _ = &a - &b;
    }
}
