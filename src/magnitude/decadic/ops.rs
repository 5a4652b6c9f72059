//! `std::ops` operator overloads for [`DecadicMagnitude`], mirroring
//! [`crate::magnitude::binary::ops`].

use crate::magnitude::decadic::DecadicMagnitude;
use std::ops::{Add, Mul, Sub};

impl Add for &DecadicMagnitude {
    type Output = DecadicMagnitude;

    fn add(self, rhs: Self) -> DecadicMagnitude {
        DecadicMagnitude::add(self, rhs)
    }
}

impl Sub for &DecadicMagnitude {
    type Output = DecadicMagnitude;

    /// Panics if `self < rhs`; magnitude subtraction has no signed result.
    fn sub(self, rhs: Self) -> DecadicMagnitude {
        DecadicMagnitude::sub(self, rhs).expect("magnitude subtraction underflowed")
    }
}

impl Mul for &DecadicMagnitude {
    type Output = DecadicMagnitude;

    fn mul(self, rhs: Self) -> DecadicMagnitude {
        DecadicMagnitude::mul(self, rhs)
    }
}
