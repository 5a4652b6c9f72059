//! Arithmetic on [`Decimal`]: addition, subtraction,
//! multiplication, the floor/truncating division and modulo families, and
//! `true_divide` (division to a caller-chosen number of significant digits,
//! as opposed to the exact-quotient-or-bust floor/trunc family).
//!
//! Addition and subtraction align scales first: this layer never invents
//! its own carry logic — it just calls [`crate::magnitude::decadic`] on
//! aligned coefficients and [`crate::int::Sign`] arithmetic for the sign.
//! Floor and truncating division treat the coefficients as the signed-integer
//! layer would after aligning scales, then assign the quotient scale `0`
//! (it is always integer-valued) and the remainder the aligned common
//! scale, mirroring [`crate::int::arith`]'s floor/trunc split.

use crate::decimal::{align, round, Decimal};
use crate::errors::{ArithError, ArithResult};
use crate::int::Sign;
use crate::magnitude::decadic::{self, DecadicMagnitude};
use crate::rounding::RoundingMode;

impl Decimal {
    /// `self + other`, scales aligned to the larger of the two.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let (ca, cb, scale) = align(self, other);
        match (self.sign, other.sign) {
            (Sign::NonNegative, Sign::NonNegative) | (Sign::Negative, Sign::Negative) => {
                Decimal::new(ca.add(&cb), scale, self.sign)
            }
            _ => {
                if ca >= cb {
                    let diff = ca.sub(&cb).expect("checked ca >= cb");
                    Decimal::new(diff, scale, self.sign)
                } else {
                    let diff = cb.sub(&ca).expect("checked cb > ca");
                    Decimal::new(diff, scale, other.sign)
                }
            }
        }
    }

    /// `self - other`.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// `self * other`: coefficients multiply, scales add, signs combine.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        let coeff = self.coefficient.mul(&other.coefficient);
        if coeff.is_zero() {
            return Decimal::zero();
        }
        let sign = if self.sign == other.sign { Sign::NonNegative } else { Sign::Negative };
        Decimal::new(coeff, self.scale + other.scale, sign)
    }

    /// Divides toward `-inf`: `(quotient, remainder)` with quotient scale
    /// `0` (it is always an integer) and remainder at the aligned common
    /// scale, such that `self = quotient * other + remainder`.
    pub fn div_rem_floor(&self, other: &Self) -> ArithResult<(Self, Self)> {
        if other.is_zero() {
            return Err(ArithError::DivideByZero);
        }
        let (ca, cb, scale) = align(self, other);
        let (q_mag, r_mag) = decadic::div_rem(ca.limbs(), cb.limbs())?;
        let q_mag = DecadicMagnitude::from_limbs(q_mag);
        let r_mag = DecadicMagnitude::from_limbs(r_mag);

        let same_sign = self.sign == other.sign;
        if r_mag.is_zero() || same_sign {
            let q_sign = if same_sign { Sign::NonNegative } else { Sign::Negative };
            let q = Decimal::new(q_mag, 0, q_sign);
            let r = Decimal::new(r_mag, scale, other.sign);
            return Ok((q, r));
        }

        let q = Decimal::new(q_mag.add(&DecadicMagnitude::from(1u32)), 0, Sign::Negative);
        let r_mag = cb.sub(&r_mag).expect("remainder is always < |other| here");
        let r = Decimal::new(r_mag, scale, other.sign);
        Ok((q, r))
    }

    /// Divides toward zero: `(quotient, remainder)` with quotient scale `0`
    /// and remainder at the aligned common scale.
    pub fn div_rem_trunc(&self, other: &Self) -> ArithResult<(Self, Self)> {
        if other.is_zero() {
            return Err(ArithError::DivideByZero);
        }
        let (ca, cb, scale) = align(self, other);
        let (q_mag, r_mag) = decadic::div_rem(ca.limbs(), cb.limbs())?;
        let q_sign = if self.sign == other.sign { Sign::NonNegative } else { Sign::Negative };
        let q = Decimal::new(DecadicMagnitude::from_limbs(q_mag), 0, q_sign);
        let r = Decimal::new(DecadicMagnitude::from_limbs(r_mag), scale, self.sign);
        Ok((q, r))
    }

    /// `self / other`, floor semantics.
    pub fn div_floor(&self, other: &Self) -> ArithResult<Self> {
        Ok(self.div_rem_floor(other)?.0)
    }

    /// `self mod other`, floor semantics.
    pub fn mod_floor(&self, other: &Self) -> ArithResult<Self> {
        Ok(self.div_rem_floor(other)?.1)
    }

    /// `self / other`, truncating toward zero.
    pub fn div_trunc(&self, other: &Self) -> ArithResult<Self> {
        Ok(self.div_rem_trunc(other)?.0)
    }

    /// `self mod other`, truncating semantics.
    pub fn mod_trunc(&self, other: &Self) -> ArithResult<Self> {
        Ok(self.div_rem_trunc(other)?.1)
    }

    /// True division to `precision` significant digits: not the exact
    /// floor/trunc quotient (which is only integral), but the closest
    /// representable decimal value of `self / other` at the requested
    /// precision, rounded under `mode`.
    ///
    /// Scales the dividend up so the integer division has at least
    /// `precision + 2` digits of quotient to round from (two guard digits,
    /// one to resolve the half-way cutoff and one safety margin), then
    /// rounds the raw quotient down to `precision` digits and strips
    /// trailing zeros back toward the "ideal" exponent `self.scale -
    /// other.scale`, the scale the quotient would carry if the division
    /// happened to come out exact. This mirrors the shape of CPython
    /// `decimal`'s `_divide`, simplified to a single round-then-trim pass
    /// rather than its full exponent bookkeeping.
    pub fn true_divide(&self, other: &Self, precision: usize, mode: RoundingMode) -> ArithResult<Self> {
        if other.is_zero() {
            return Err(ArithError::DivideByZero);
        }
        if self.is_zero() {
            return Ok(Decimal::zero());
        }
        let ideal_scale = self.scale - other.scale;
        let a_digits = self.digit_count() as i64;
        let b_digits = other.coefficient.digit_count() as i64;
        let shortfall = (precision as i64 + 2) - (a_digits - b_digits);
        let k = shortfall.max(0) as u32;

        let scaled_dividend = DecadicMagnitude::from_limbs(decadic::scale_up(self.coefficient.limbs(), k));
        let (q_mag, _) = decadic::div_rem(scaled_dividend.limbs(), other.coefficient.limbs())?;
        let q_mag = DecadicMagnitude::from_limbs(q_mag);
        let sign = if self.sign == other.sign { Sign::NonNegative } else { Sign::Negative };

        let digits = q_mag.digit_count();
        let drop = digits.saturating_sub(precision) as u32;
        let rounded = round::round_drop_digits(&q_mag, drop, sign, mode);
        // quotient scale before trimming: k extra digits of dividend minus the
        // digits we just dropped, relative to the ideal exponent.
        let scale = ideal_scale + k as i64 - drop as i64;

        let result = Decimal::new(rounded, scale, sign);
        Ok(strip_trailing_zeros_toward(&result, ideal_scale))
    }
}

/// Strips trailing decadic zeros from `d`'s coefficient one digit at a
/// time, stopping once `d`'s scale reaches `floor` or a non-zero digit is
/// hit. Used by [`Decimal::true_divide`] to trim the guard digits it added
/// for rounding headroom back toward the exponent an exact division would
/// have produced.
fn strip_trailing_zeros_toward(d: &Decimal, floor: i64) -> Decimal {
    if d.is_zero() {
        return d.clone();
    }
    let mut coeff = d.coefficient.clone();
    let mut scale = d.scale;
    while scale > floor {
        let (q, r) = decadic::div_rem(coeff.limbs(), &[10]).expect("10 is a nonzero divisor");
        if !DecadicMagnitude::from_limbs(r).is_zero() {
            break;
        }
        coeff = DecadicMagnitude::from_limbs(q);
        scale -= 1;
    }
    Decimal::new(coeff, scale, d.sign)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(coeff: i64, scale: i64) -> Decimal {
        let sign = if coeff < 0 { Sign::Negative } else { Sign::NonNegative };
        Decimal::new(DecadicMagnitude::from(coeff.unsigned_abs()), scale, sign)
    }

    #[test]
    fn add_aligns_scales() {
        // 1.5 + 2 = 3.5
        assert_eq!(d(15, 1).add(&d(2, 0)), d(35, 1));
    }

    #[test]
    fn sub_and_neg_agree() {
        assert_eq!(d(5, 0).sub(&d(2, 0)), d(3, 0));
        assert_eq!(d(2, 0).sub(&d(5, 0)), d(-3, 0));
    }

    #[test]
    fn mul_adds_scales() {
        // 1.5 * 2.25 = 3.375
        let p = d(15, 1).mul(&d(225, 2));
        assert_eq!(p, d(3375, 3));
    }

    #[test]
    fn floor_division_quotient_is_always_scale_zero() {
        // 7.5 // 2 = 3, 7.5 % 2 = 1.5
        let (q, r) = d(75, 1).div_rem_floor(&d(2, 0)).unwrap();
        assert_eq!(q, d(3, 0));
        assert_eq!(r, d(15, 1));
        assert_eq!(q.mul(&d(2, 0)).add(&r), d(75, 1));
    }

    #[test]
    fn trunc_division_rounds_toward_zero() {
        let (q, r) = d(-75, 1).div_rem_trunc(&d(2, 0)).unwrap();
        assert_eq!(q, d(-3, 0));
        assert_eq!(r, d(-15, 1));
    }

    #[test]
    fn divide_by_zero_is_an_error() {
        assert_eq!(Decimal::one().div_floor(&Decimal::zero()), Err(ArithError::DivideByZero));
    }

    #[test]
    fn true_divide_one_third_to_five_digits() {
        let one = Decimal::one();
        let three = d(3, 0);
        let q = one.true_divide(&three, 5, RoundingMode::HalfEven).unwrap();
        assert_eq!(q.digit_count(), 5);
        assert!(q > d(33332, 5) && q < d(33334, 5));
    }

    #[test]
    fn true_divide_exact_result_trims_to_ideal_scale() {
        // 10 / 4 = 2.5 exactly, ideal scale is 0 - 0 = 0 but the true value
        // needs one fractional digit, so trimming stops there.
        let ten = d(10, 0);
        let four = d(4, 0);
        let q = ten.true_divide(&four, 10, RoundingMode::HalfEven).unwrap();
        assert_eq!(q, d(25, 1));
    }

    #[test]
    fn true_divide_by_zero_is_an_error() {
        assert_eq!(
            Decimal::one().true_divide(&Decimal::zero(), 5, RoundingMode::HalfEven),
            Err(ArithError::DivideByZero)
        );
    }
}
