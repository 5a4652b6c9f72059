//! Decimal square root.
//!
//! Perfect squares (and more generally any value whose coefficient is a
//! perfect square at an even scale) go through [`crate::int::Int::isqrt`]
//! directly — exact, and cheaper than a Newton iteration. Everything else
//! uses the reciprocal-square-root form of Newton's method: iterate
//! `y <- y*(3 - x*y*y)/2` toward `1/sqrt(x)` (multiplications only, no
//! division inside the loop, which is the point — big-integer division is
//! far more expensive than a multiply at the same digit count), then take
//! `sqrt(x) = x*y` once `y` has converged. This mirrors the three-regime
//! shape of [`crate::magnitude::binary::sqrt`] (hardware seed, direct
//! Newton, precision-doubling) one layer up: a cheap exact fast path, and
//! a Newton loop seeded from a crude estimate and refined by doubling the
//! working precision each step.

use crate::decimal::Decimal;
use crate::errors::{ArithError, ArithResult};
use crate::int::{Int, Sign};
use crate::magnitude::decadic::DecadicMagnitude;
use crate::rounding::RoundingMode;
use crate::transcendental::{decimal_digit_count, int_to_decimal, pow10_decimal, round_significant};

/// `sqrt(x)` to `precision` significant digits, rounded under `mode`.
/// Fails with [`ArithError::DomainError`] if `x` is negative.
pub fn sqrt(x: &Decimal, precision: usize, mode: RoundingMode) -> ArithResult<Decimal> {
    if x.is_negative() {
        return Err(ArithError::DomainError);
    }
    if x.is_zero() {
        return Ok(Decimal::zero());
    }
    if let Some(exact) = exact_sqrt(x) {
        return Ok(exact);
    }

    let guard = decimal_digit_count(precision) + 4;
    let target = precision + guard;

    let mut y = reciprocal_seed(x, 8);
    let mut working = 8usize;
    while working < target {
        working = (working * 2).min(target);
        let y2 = round_significant(&y.mul(&y), working, RoundingMode::HalfEven);
        let xy2 = round_significant(&x.mul(&y2), working, RoundingMode::HalfEven);
        let three_minus_xy2 = Decimal::from(3u32).sub(&xy2);
        let product = round_significant(&y.mul(&three_minus_xy2), working, RoundingMode::HalfEven);
        let half = Decimal::new(DecadicMagnitude::from(5u32), 1, Sign::NonNegative);
        y = round_significant(&product.mul(&half), working, RoundingMode::HalfEven);
    }

    let result = round_significant(&x.mul(&y), precision, mode);
    Ok(result)
}

/// If `x`'s coefficient is a perfect square and its scale is even, `sqrt`
/// is exact: `sqrt(c * 10^-2k) = sqrt(c) * 10^-k`. Bridges to
/// [`Int::isqrt`] via the shared decimal-string codec since the
/// coefficient lives in a decadic magnitude and `isqrt` is only defined on
/// the binary one.
fn exact_sqrt(x: &Decimal) -> Option<Decimal> {
    if x.scale() % 2 != 0 {
        return None;
    }
    let coeff_str = crate::magnitude::decadic::to_decimal_string(x.coefficient().limbs());
    let coeff_int: Int = coeff_str.parse().ok()?;
    let root = coeff_int.isqrt().ok()?;
    if root.mul(&root) != coeff_int {
        return None;
    }
    let root_decimal = int_to_decimal(&root);
    Some(Decimal::new(root_decimal.coefficient().clone(), x.scale() / 2, Sign::NonNegative))
}

/// A crude estimate of `1/sqrt(x)` accurate to a couple of significant
/// digits, built from the leading one or two digits of `x`'s coefficient.
/// `x.as_tuple()`'s `exponent` plus digit count gives the position of the
/// leading digit; picking one or two leading digits so the remaining
/// exponent is even keeps the `10^k` factor an exact square root.
fn reciprocal_seed(x: &Decimal, seed_precision: usize) -> Decimal {
    let tuple = x.as_tuple();
    let adjusted_exponent = tuple.digits.len() as i64 - 1 + tuple.exponent;
    let lead_len: usize = if adjusted_exponent.rem_euclid(2) == 0 { 1 } else { 2 };
    let e_even = adjusted_exponent - (lead_len as i64 - 1);
    let k = e_even / 2;

    let mut mantissa: u32 = 0;
    for i in 0..lead_len {
        let digit = tuple.digits.get(i).copied().unwrap_or(0) as u32;
        mantissa = mantissa * 10 + digit;
    }
    let mantissa_sqrt = small_round_sqrt(mantissa).max(1);

    let recip_mantissa = Decimal::one()
        .true_divide(&Decimal::from(mantissa_sqrt), seed_precision, RoundingMode::HalfEven)
        .expect("mantissa_sqrt is nonzero");
    let factor = pow10_decimal(k);
    round_significant(&recip_mantissa.mul(&factor), seed_precision, RoundingMode::HalfEven)
}

/// Nearest integer to `sqrt(n)` for a small `n` (at most a few digits),
/// via a linear scan from below. `n` is bounded by `10^(lead_len)` with
/// `lead_len <= 2`, so this never costs more than a handful of
/// comparisons.
fn small_round_sqrt(n: u32) -> u32 {
    if n == 0 {
        return 0;
    }
    let mut s = 0u32;
    while (s + 1) * (s + 1) <= n {
        s += 1;
    }
    if n - s * s > (s + 1) * (s + 1) - n {
        s + 1
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sqrt_rejects_negative_input() {
        let x: Decimal = "-4".parse().unwrap();
        assert_eq!(sqrt(&x, 10, RoundingMode::HalfEven), Err(ArithError::DomainError));
    }

    #[test]
    fn sqrt_of_zero_is_zero() {
        assert_eq!(sqrt(&Decimal::zero(), 10, RoundingMode::HalfEven).unwrap(), Decimal::zero());
    }

    #[test]
    fn sqrt_of_perfect_square_is_exact() {
        let x: Decimal = "144".parse().unwrap();
        let r = sqrt(&x, 10, RoundingMode::HalfEven).unwrap();
        assert_eq!(r, "12".parse().unwrap());
    }

    #[test]
    fn sqrt_of_perfect_square_with_fractional_scale_is_exact() {
        let x: Decimal = "2.25".parse().unwrap();
        let r = sqrt(&x, 10, RoundingMode::HalfEven).unwrap();
        assert_eq!(r, "1.5".parse().unwrap());
    }

    #[test]
    fn sqrt_of_two_converges_to_known_digits() {
        let x: Decimal = "2".parse().unwrap();
        let r = sqrt(&x, 20, RoundingMode::HalfEven).unwrap();
        let expected: Decimal = "1.4142135623730950488".parse().unwrap();
        let diff = r.sub(&expected).abs();
        let tolerance: Decimal = "0.0000000000000000001".parse().unwrap();
        assert!(diff < tolerance, "sqrt(2) estimate {r} too far from {expected}");
    }

    #[test]
    fn sqrt_squared_recovers_the_input_within_tolerance() {
        let x: Decimal = "31415.9265".parse().unwrap();
        let r = sqrt(&x, 25, RoundingMode::HalfEven).unwrap();
        let squared = round_significant(&r.mul(&r), 25, RoundingMode::HalfEven);
        let diff = squared.sub(&x).abs();
        assert!(diff < "0.0001".parse().unwrap());
    }
}
