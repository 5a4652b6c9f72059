//! `std::ops` operator overloads for [`Int`], mirroring
//! [`crate::magnitude::binary::ops`]. Division and modulo get no operator
//! overload: the signed layer has two distinct flavours (floor vs.
//! truncating) and a single `/`/`%` could not pick one without surprising
//! callers, so [`Int::div_floor`]/[`Int::div_trunc`]/etc. are called by
//! name instead.

use crate::int::Int;
use std::ops::{Add, BitAnd, BitOr, BitXor, Mul, Neg, Not, Shl, Shr, Sub};

impl Add for &Int {
    type Output = Int;
    fn add(self, rhs: Self) -> Int {
        Int::add(self, rhs)
    }
}

impl Sub for &Int {
    type Output = Int;
    fn sub(self, rhs: Self) -> Int {
        Int::sub(self, rhs)
    }
}

impl Mul for &Int {
    type Output = Int;
    fn mul(self, rhs: Self) -> Int {
        Int::mul(self, rhs)
    }
}

impl Neg for &Int {
    type Output = Int;
    fn neg(self) -> Int {
        Int::neg(self)
    }
}

impl BitAnd for &Int {
    type Output = Int;
    fn bitand(self, rhs: Self) -> Int {
        Int::bitand(self, rhs)
    }
}

impl BitOr for &Int {
    type Output = Int;
    fn bitor(self, rhs: Self) -> Int {
        Int::bitor(self, rhs)
    }
}

impl BitXor for &Int {
    type Output = Int;
    fn bitxor(self, rhs: Self) -> Int {
        Int::bitxor(self, rhs)
    }
}

impl Not for &Int {
    type Output = Int;
    fn not(self) -> Int {
        Int::bitnot(self)
    }
}

impl Shl<u32> for &Int {
    type Output = Int;
    fn shl(self, bits: u32) -> Int {
        Int::shl(self, bits)
    }
}

impl Shr<u32> for &Int {
    type Output = Int;
    fn shr(self, bits: u32) -> Int {
        Int::shr(self, bits)
    }
}
