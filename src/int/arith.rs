//! Signed addition, subtraction, multiplication, and the floor/truncating
//! division and modulo families.
//!
//! Addition/subtraction sign logic: like signs add magnitudes and keep the
//! common sign; unlike signs subtract the smaller magnitude from the
//! larger and take the sign of the larger. Floor-division and
//! truncating-division only differ when the true quotient is negative and
//! non-integral: floor rounds toward `-inf`, truncation rounds toward `0`.
//! Each division flavour picks its remainder so that
//! `dividend = quotient * divisor + remainder` holds exactly.

use crate::errors::{ArithError, ArithResult};
use crate::int::{Int, Sign};

impl Int {
    /// `self + other`.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        match (self.sign, other.sign) {
            (Sign::NonNegative, Sign::NonNegative) | (Sign::Negative, Sign::Negative) => {
                Int::new(self.magnitude.add(&other.magnitude), self.sign)
            }
            _ => {
                if self.magnitude >= other.magnitude {
                    let diff = self.magnitude.sub(&other.magnitude).expect("checked self >= other");
                    Int::new(diff, self.sign)
                } else {
                    let diff = other.magnitude.sub(&self.magnitude).expect("checked other > self");
                    Int::new(diff, other.sign)
                }
            }
        }
    }

    /// `self - other`.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// `self * other`.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        let magnitude = self.magnitude.mul(&other.magnitude);
        if magnitude.is_zero() {
            return Int::zero();
        }
        let sign = if self.sign == other.sign { Sign::NonNegative } else { Sign::Negative };
        Int::new(magnitude, sign)
    }

    /// Divides toward `-inf`: `(quotient, remainder)` with
    /// `self = quotient * other + remainder` and `remainder` taking the
    /// sign of `other` (zero remainder has no sign).
    pub fn div_rem_floor(&self, other: &Self) -> ArithResult<(Self, Self)> {
        if other.is_zero() {
            return Err(ArithError::DivideByZero);
        }
        let (q_mag, r_mag) = crate::magnitude::binary::div_rem(self.magnitude.limbs(), other.magnitude.limbs())?;
        let q_mag = crate::magnitude::binary::BinaryMagnitude::from_limbs(q_mag);
        let r_mag = crate::magnitude::binary::BinaryMagnitude::from_limbs(r_mag);

        let same_sign = self.sign == other.sign;
        if r_mag.is_zero() || same_sign {
            let q_sign = if same_sign { Sign::NonNegative } else { Sign::Negative };
            let q = Int::new(q_mag, q_sign);
            let r_sign = if same_sign { self.sign } else { Sign::NonNegative };
            let r = Int::new(r_mag, r_sign);
            return Ok((q, if r.is_zero() { Int::zero() } else { Int::new(r.magnitude, other.sign) }));
        }

        // Signs differ and the remainder is non-zero: truncating quotient
        // rounds toward zero but floor must round one further toward -inf,
        // which means bumping the quotient's magnitude by one and taking
        // the divisor's-sign complement of the remainder.
        let q = Int::new(q_mag.add(&crate::magnitude::binary::BinaryMagnitude::from(1u32)), Sign::Negative);
        let r_mag = other.magnitude.sub(&r_mag).expect("remainder is always < |other| here");
        let r = Int::new(r_mag, other.sign);
        Ok((q, r))
    }

    /// Divides toward zero: `(quotient, remainder)` with
    /// `self = quotient * other + remainder` and `remainder` taking the
    /// sign of `self` (zero remainder has no sign).
    pub fn div_rem_trunc(&self, other: &Self) -> ArithResult<(Self, Self)> {
        if other.is_zero() {
            return Err(ArithError::DivideByZero);
        }
        let (q_mag, r_mag) = crate::magnitude::binary::div_rem(self.magnitude.limbs(), other.magnitude.limbs())?;
        let q_mag = crate::magnitude::binary::BinaryMagnitude::from_limbs(q_mag);
        let r_mag = crate::magnitude::binary::BinaryMagnitude::from_limbs(r_mag);

        let q_sign = if self.sign == other.sign { Sign::NonNegative } else { Sign::Negative };
        let q = Int::new(q_mag, q_sign);
        let r = Int::new(r_mag, self.sign);
        Ok((q, r))
    }

    /// `self / other`, floor semantics.
    pub fn div_floor(&self, other: &Self) -> ArithResult<Self> {
        Ok(self.div_rem_floor(other)?.0)
    }

    /// `self mod other`, floor semantics: `0 <= result < |other|` when
    /// `other > 0`, symmetric for `other < 0`.
    pub fn mod_floor(&self, other: &Self) -> ArithResult<Self> {
        Ok(self.div_rem_floor(other)?.1)
    }

    /// `self / other`, truncating toward zero.
    pub fn div_trunc(&self, other: &Self) -> ArithResult<Self> {
        Ok(self.div_rem_trunc(other)?.0)
    }

    /// `self mod other`, truncating semantics (result shares `self`'s sign
    /// or is zero).
    pub fn mod_trunc(&self, other: &Self) -> ArithResult<Self> {
        Ok(self.div_rem_trunc(other)?.1)
    }

    /// `self += 1`, delegating to the magnitude kernel's accumulator-loop
    /// fast path when `self` is non-negative; negative values fall back to
    /// ordinary subtraction since incrementing shrinks the magnitude.
    pub fn increment_in_place(&mut self) {
        if self.sign == Sign::NonNegative {
            self.magnitude.increment_in_place();
        } else {
            *self = self.sub(&Int::one());
        }
    }

    /// `self -= 1`.
    pub fn decrement_in_place(&mut self) {
        if self.sign == Sign::Negative {
            self.magnitude.increment_in_place();
        } else {
            *self = self.sub(&Int::one());
        }
    }

    /// `self += other`, reusing `self`'s buffer where the magnitude kernel
    /// can mutate in place (same-sign addition).
    pub fn add_assign_in_place(&mut self, other: &Self) {
        if self.sign == other.sign {
            self.magnitude.add_assign_in_place(&other.magnitude);
        } else {
            *self = self.add(other);
        }
    }

    /// `self -= other`.
    pub fn sub_assign_in_place(&mut self, other: &Self) {
        let negated = other.neg();
        self.add_assign_in_place(&negated);
    }

    /// `self *= other`.
    pub fn mul_assign_in_place(&mut self, other: &Self) {
        *self = self.mul(other);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn i(v: i64) -> Int {
        Int::from(v)
    }

    #[test]
    fn add_like_signs() {
        assert_eq!(i(3).add(&i(4)), i(7));
        assert_eq!(i(-3).add(&i(-4)), i(-7));
    }

    #[test]
    fn add_unlike_signs_takes_larger_magnitude_sign() {
        assert_eq!(i(10).add(&i(-3)), i(7));
        assert_eq!(i(3).add(&i(-10)), i(-7));
    }

    #[test]
    fn mul_sign_rules() {
        assert_eq!(i(3).mul(&i(4)), i(12));
        assert_eq!(i(-3).mul(&i(4)), i(-12));
        assert_eq!(i(-3).mul(&i(-4)), i(12));
        assert_eq!(i(3).mul(&i(0)), i(0));
    }

    #[test]
    fn floor_division_rounds_toward_minus_infinity() {
        // -7 / 2 = -3.5 -> floor is -4, remainder = -7 - (-4*2) = 1
        let (q, r) = i(-7).div_rem_floor(&i(2)).unwrap();
        assert_eq!(q, i(-4));
        assert_eq!(r, i(1));
        assert_eq!(q.mul(&i(2)).add(&r), i(-7));
    }

    #[test]
    fn trunc_division_rounds_toward_zero() {
        let (q, r) = i(-7).div_rem_trunc(&i(2)).unwrap();
        assert_eq!(q, i(-3));
        assert_eq!(r, i(-1));
        assert_eq!(q.mul(&i(2)).add(&r), i(-7));
    }

    #[test]
    fn floor_and_trunc_agree_when_evenly_divisible_or_positive() {
        assert_eq!(i(-8).div_rem_floor(&i(2)).unwrap().0, i(-4));
        assert_eq!(i(-8).div_rem_trunc(&i(2)).unwrap().0, i(-4));
        assert_eq!(i(7).div_rem_floor(&i(2)).unwrap(), i(7).div_rem_trunc(&i(2)).unwrap());
    }

    #[test]
    fn divide_by_zero_is_an_error() {
        assert_eq!(i(1).div_floor(&i(0)), Err(ArithError::DivideByZero));
    }

    #[test]
    fn floor_mod_is_always_non_negative_for_positive_divisor() {
        for (a, b) in [(-7, 3), (7, 3), (-7, -3), (7, -3)] {
            let r = i(a).mod_floor(&i(b)).unwrap();
            if b > 0 {
                assert!(r >= i(0) && r < i(b));
            } else {
                assert!(r <= i(0) && r > i(b));
            }
        }
    }

    #[test]
    fn increment_and_decrement_round_trip() {
        let mut x = i(-1);
        x.increment_in_place();
        assert_eq!(x, i(0));
        x.increment_in_place();
        assert_eq!(x, i(1));
        x.decrement_in_place();
        x.decrement_in_place();
        assert_eq!(x, i(-1));
    }
}
