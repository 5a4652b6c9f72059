//! The six trigonometric functions.
//!
//! `sin`/`cos` share a single range-reduction-plus-Taylor-series core:
//! reduce the argument modulo `2*pi` (`pi` from
//! [`crate::transcendental::pi`], itself Chudnovsky binary splitting),
//! reduce that remainder to one of the four quadrants of `[0, pi/2)`, then
//! fold the quadrant down to `[0, pi/4]` with the usual co-function
//! identity (`sin(pi/2 - t) = cos(t)`) before handing the small angle to a
//! Taylor series — the series converges in a handful of terms precisely
//! because the argument is never larger than `pi/4`. `tan`, `cot`, `sec`,
//! and `csc` are then one [`crate::decimal::Decimal::true_divide`] away
//! from the shared `(sin, cos)` pair.

use crate::decimal::Decimal;
use crate::errors::ArithResult;
use crate::rounding::RoundingMode;
use crate::transcendental::{cache, decimal_digit_count, decimal_to_i64, pow10_decimal, round_significant};

/// `sin(x)` to `precision` significant digits, rounded under `mode`.
pub fn sin(x: &Decimal, precision: usize, mode: RoundingMode) -> ArithResult<Decimal> {
    let working = working_precision(precision);
    let (s, _) = sin_cos(x, working);
    Ok(round_significant(&s, precision, mode))
}

/// `cos(x)` to `precision` significant digits, rounded under `mode`.
pub fn cos(x: &Decimal, precision: usize, mode: RoundingMode) -> ArithResult<Decimal> {
    let working = working_precision(precision);
    let (_, c) = sin_cos(x, working);
    Ok(round_significant(&c, precision, mode))
}

/// `tan(x) = sin(x) / cos(x)`. Fails with [`crate::errors::ArithError::DivideByZero`]
/// if `x` lands exactly on a reduced angle whose cosine is zero.
pub fn tan(x: &Decimal, precision: usize, mode: RoundingMode) -> ArithResult<Decimal> {
    let working = working_precision(precision);
    let (s, c) = sin_cos(x, working);
    let r = s.true_divide(&c, working, RoundingMode::HalfEven)?;
    Ok(round_significant(&r, precision, mode))
}

/// `cot(x) = cos(x) / sin(x)`.
pub fn cot(x: &Decimal, precision: usize, mode: RoundingMode) -> ArithResult<Decimal> {
    let working = working_precision(precision);
    let (s, c) = sin_cos(x, working);
    let r = c.true_divide(&s, working, RoundingMode::HalfEven)?;
    Ok(round_significant(&r, precision, mode))
}

/// `sec(x) = 1 / cos(x)`.
pub fn sec(x: &Decimal, precision: usize, mode: RoundingMode) -> ArithResult<Decimal> {
    let working = working_precision(precision);
    let (_, c) = sin_cos(x, working);
    let r = Decimal::one().true_divide(&c, working, RoundingMode::HalfEven)?;
    Ok(round_significant(&r, precision, mode))
}

/// `csc(x) = 1 / sin(x)`.
pub fn csc(x: &Decimal, precision: usize, mode: RoundingMode) -> ArithResult<Decimal> {
    let working = working_precision(precision);
    let (s, _) = sin_cos(x, working);
    let r = Decimal::one().true_divide(&s, working, RoundingMode::HalfEven)?;
    Ok(round_significant(&r, precision, mode))
}

fn working_precision(precision: usize) -> usize {
    precision + decimal_digit_count(precision) + 4
}

/// `(sin(x), cos(x))` at `working` significant digits, both computed
/// together since they share every stage of range reduction.
fn sin_cos(x: &Decimal, working: usize) -> (Decimal, Decimal) {
    if x.is_zero() {
        return (Decimal::zero(), Decimal::one());
    }

    let pi = cache::get_pi(working);
    let two_pi = round_significant(&pi.mul(&Decimal::from(2u32)), working, RoundingMode::HalfEven);
    let half_pi =
        round_significant(&pi.true_divide(&Decimal::from(2u32), working, RoundingMode::HalfEven).expect("2 != 0"), working, RoundingMode::HalfEven);
    let quarter_pi =
        round_significant(&pi.true_divide(&Decimal::from(4u32), working, RoundingMode::HalfEven).expect("4 != 0"), working, RoundingMode::HalfEven);

    // Reduce modulo 2*pi into [0, 2*pi).
    let r = reduce_mod(x, &two_pi, working);

    // Split [0, 2*pi) into the four quadrants of width pi/2.
    let k2 = r.true_divide(&half_pi, working, RoundingMode::HalfEven).expect("pi/2 != 0").round(0, RoundingMode::TowardNegativeInfinity);
    let t2 = round_significant(&r.sub(&k2.mul(&half_pi)), working, RoundingMode::HalfEven);
    let quadrant = decimal_to_i64(&k2).expect("quadrant index fits in i64").rem_euclid(4);

    // Fold the upper half of the quadrant down to [0, pi/4] via the
    // co-function identity: sin(pi/2 - t) = cos(t), cos(pi/2 - t) = sin(t).
    let (t3, folded) = if t2 > quarter_pi {
        (round_significant(&half_pi.sub(&t2), working, RoundingMode::HalfEven), true)
    } else {
        (t2, false)
    };

    let (s3, c3) = taylor_sin_cos(&t3, working);
    let (s2, c2) = if folded { (c3, s3) } else { (s3, c3) };

    match quadrant {
        0 => (s2, c2),
        1 => (c2, s2.neg()),
        2 => (s2.neg(), c2.neg()),
        3 => (c2.neg(), s2),
        _ => unreachable!("k2 mod 4 is always in 0..4"),
    }
}

/// Reduces `x` into `[0, modulus)` by subtracting the largest integer
/// multiple of `modulus` that keeps the remainder non-negative.
fn reduce_mod(x: &Decimal, modulus: &Decimal, working: usize) -> Decimal {
    let k = x
        .true_divide(modulus, working, RoundingMode::HalfEven)
        .expect("modulus is nonzero")
        .round(0, RoundingMode::TowardNegativeInfinity);
    round_significant(&x.sub(&k.mul(modulus)), working, RoundingMode::HalfEven)
}

/// `(sin(t), cos(t))` via their Taylor series, for `t` already reduced to
/// `[0, pi/4]` so both series converge in a bounded number of terms.
fn taylor_sin_cos(t: &Decimal, working_precision: usize) -> (Decimal, Decimal) {
    let epsilon = pow10_decimal(working_precision as i64);
    let neg_t2 = round_significant(&t.mul(t), working_precision, RoundingMode::HalfEven).neg();

    let mut sin_sum = t.clone();
    let mut sin_term = t.clone();
    let mut cos_sum = Decimal::one();
    let mut cos_term = Decimal::one();

    let mut k: u64 = 1;
    loop {
        let cos_denom = Decimal::from((2 * k - 1) * (2 * k));
        cos_term = round_significant(&cos_term.mul(&neg_t2), working_precision, RoundingMode::HalfEven);
        cos_term = round_significant(
            &cos_term.true_divide(&cos_denom, working_precision, RoundingMode::HalfEven).expect("nonzero denominator"),
            working_precision,
            RoundingMode::HalfEven,
        );
        cos_sum = cos_sum.add(&cos_term);

        let sin_denom = Decimal::from((2 * k) * (2 * k + 1));
        sin_term = round_significant(&sin_term.mul(&neg_t2), working_precision, RoundingMode::HalfEven);
        sin_term = round_significant(
            &sin_term.true_divide(&sin_denom, working_precision, RoundingMode::HalfEven).expect("nonzero denominator"),
            working_precision,
            RoundingMode::HalfEven,
        );
        sin_sum = sin_sum.add(&sin_term);

        if cos_term.abs() < epsilon && sin_term.abs() < epsilon {
            break;
        }
        k += 1;
        if k > 100_000 {
            break;
        }
    }
    (sin_sum, cos_sum)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: &Decimal, b: &str, eps: &str) {
        let bd: Decimal = b.parse().unwrap();
        let diff = a.sub(&bd).abs();
        let epsd: Decimal = eps.parse().unwrap();
        assert!(diff < epsd, "expected {a} close to {b} within {eps}");
    }

    #[test]
    fn sin_zero_is_zero_cos_zero_is_one() {
        assert_eq!(sin(&Decimal::zero(), 15, RoundingMode::HalfEven).unwrap(), Decimal::zero());
        assert_eq!(cos(&Decimal::zero(), 15, RoundingMode::HalfEven).unwrap(), Decimal::one());
    }

    #[test]
    fn sin_and_cos_of_pi_over_six_match_known_values() {
        let pi = cache::get_pi(30);
        let x = pi.true_divide(&Decimal::from(6u32), 30, RoundingMode::HalfEven).unwrap();
        let s = sin(&x, 15, RoundingMode::HalfEven).unwrap();
        let c = cos(&x, 15, RoundingMode::HalfEven).unwrap();
        close(&s, "0.5", "0.000000000001");
        close(&c, "0.866025403784439", "0.000000000001");
    }

    #[test]
    fn sin_of_pi_over_two_is_one() {
        let pi = cache::get_pi(30);
        let x = pi.true_divide(&Decimal::from(2u32), 30, RoundingMode::HalfEven).unwrap();
        let s = sin(&x, 15, RoundingMode::HalfEven).unwrap();
        close(&s, "1", "0.000000000001");
    }

    #[test]
    fn pythagorean_identity_holds_across_quadrants() {
        let pi = cache::get_pi(30);
        for numerator in [1u32, 2, 3, 4, 5, 6, 7] {
            let x = pi.mul(&Decimal::from(numerator)).true_divide(&Decimal::from(4u32), 25, RoundingMode::HalfEven).unwrap();
            let s = sin(&x, 20, RoundingMode::HalfEven).unwrap();
            let c = cos(&x, 20, RoundingMode::HalfEven).unwrap();
            let sum = round_significant(&s.mul(&s).add(&c.mul(&c)), 15, RoundingMode::HalfEven);
            close(&sum, "1", "0.0000000001");
        }
    }

    #[test]
    fn tan_matches_sin_over_cos() {
        let x: Decimal = "0.7".parse().unwrap();
        let t = tan(&x, 15, RoundingMode::HalfEven).unwrap();
        let s = sin(&x, 20, RoundingMode::HalfEven).unwrap();
        let c = cos(&x, 20, RoundingMode::HalfEven).unwrap();
        let expected = s.true_divide(&c, 15, RoundingMode::HalfEven).unwrap();
        close(&t, &expected.to_string(), "0.000000000001");
    }

    #[test]
    fn cot_sec_csc_are_the_expected_reciprocals() {
        let x: Decimal = "1.1".parse().unwrap();
        let s = sin(&x, 20, RoundingMode::HalfEven).unwrap();
        let c = cos(&x, 20, RoundingMode::HalfEven).unwrap();

        let cot_x = cot(&x, 15, RoundingMode::HalfEven).unwrap();
        close(&cot_x, &c.true_divide(&s, 15, RoundingMode::HalfEven).unwrap().to_string(), "0.000000000001");

        let sec_x = sec(&x, 15, RoundingMode::HalfEven).unwrap();
        close(&sec_x, &Decimal::one().true_divide(&c, 15, RoundingMode::HalfEven).unwrap().to_string(), "0.000000000001");

        let csc_x = csc(&x, 15, RoundingMode::HalfEven).unwrap();
        close(&csc_x, &Decimal::one().true_divide(&s, 15, RoundingMode::HalfEven).unwrap().to_string(), "0.000000000001");
    }

    #[test]
    fn sin_is_an_odd_function() {
        let x: Decimal = "2.3".parse().unwrap();
        let s_pos = sin(&x, 20, RoundingMode::HalfEven).unwrap();
        let s_neg = sin(&x.neg(), 20, RoundingMode::HalfEven).unwrap();
        assert_eq!(s_neg, s_pos.neg());
    }
}
