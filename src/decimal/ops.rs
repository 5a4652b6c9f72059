//! `std::ops` operator overloads for [`Decimal`], mirroring
//! [`crate::int::ops`]. No `Div`/`Rem` overload: the layer exposes three
//! distinct division flavours (floor, truncating, and `true_divide` with
//! its explicit precision and rounding mode), so callers reach for those
//! by name instead of via `/`/`%`.

use crate::decimal::Decimal;
use std::ops::{Add, Mul, Neg, Sub};

impl Add for &Decimal {
    type Output = Decimal;
    fn add(self, rhs: Self) -> Decimal {
        Decimal::add(self, rhs)
    }
}

impl Sub for &Decimal {
    type Output = Decimal;
    fn sub(self, rhs: Self) -> Decimal {
        Decimal::sub(self, rhs)
    }
}

impl Mul for &Decimal {
    type Output = Decimal;
    fn mul(self, rhs: Self) -> Decimal {
        Decimal::mul(self, rhs)
    }
}

impl Neg for &Decimal {
    type Output = Decimal;
    fn neg(self) -> Decimal {
        Decimal::neg(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operators_match_named_methods() {
        let a: Decimal = "6.5".parse().unwrap();
        let b: Decimal = "2.25".parse().unwrap();
        assert_eq!(&a + &b, a.add(&b));
        assert_eq!(&a - &b, a.sub(&b));
        assert_eq!(&a * &b, a.mul(&b));
        assert_eq!(-&a, a.neg());
    }
}
