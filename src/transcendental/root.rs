//! Integer-order nth root.
//!
//! `n == 2` delegates to [`crate::transcendental::sqrt`] directly. For
//! general `n`, Newton's method on `y^n - x = 0` gives the iteration
//! `y <- ((n-1)*y + x/y^(n-1)) / n`, seeded from a crude estimate built the
//! same way [`crate::transcendental::sqrt`]'s seed is: pick enough leading
//! digits of `x` that the remaining exponent divides evenly by `n`, take
//! the integer nth root of that small leading number, and scale back up.

use crate::decimal::Decimal;
use crate::errors::{ArithError, ArithResult};
use crate::int::Int;
use crate::rounding::RoundingMode;
use crate::transcendental::{decimal_digit_count, pow10_decimal, pow_bounded, round_significant};

/// `x^(1/n)` to `precision` significant digits, rounded under `mode`.
/// Fails with [`ArithError::DomainError`] if `n <= 0`, or if `n` is even
/// and `x` is negative.
pub fn root(x: &Decimal, n: &Int, precision: usize, mode: RoundingMode) -> ArithResult<Decimal> {
    let n_val: u64 = n.try_into().map_err(|_| ArithError::DomainError)?;
    if n_val == 0 {
        return Err(ArithError::DomainError);
    }
    if x.is_zero() {
        return Ok(Decimal::zero());
    }
    if x.is_negative() && n_val % 2 == 0 {
        return Err(ArithError::DomainError);
    }
    let negative_result = x.is_negative();
    let abs_x = x.abs();

    if n_val == 1 {
        return Ok(x.clone());
    }
    if n_val == 2 {
        return crate::transcendental::sqrt::sqrt(&abs_x, precision, mode).map(|r| if negative_result { r.neg() } else { r });
    }

    let guard = decimal_digit_count(precision) + 4;
    let target = precision + guard;

    let mut y = seed(&abs_x, n_val, 8);
    let mut working = 8usize;
    let n_dec = Decimal::from(n_val);
    let n_minus_one_dec = Decimal::from(n_val - 1);
    while working < target {
        working = (working * 2).min(target);
        let y_pow = pow_bounded(&y, n_val - 1, working);
        let ratio = abs_x.true_divide(&y_pow, working, RoundingMode::HalfEven)?;
        let numerator = round_significant(&n_minus_one_dec.mul(&y).add(&ratio), working, RoundingMode::HalfEven);
        y = round_significant(&numerator.true_divide(&n_dec, working, RoundingMode::HalfEven)?, working, RoundingMode::HalfEven);
    }

    let result = round_significant(&y, precision, mode);
    Ok(if negative_result { result.neg() } else { result })
}

/// A crude nth-root estimate: pick `shift+1` leading digits of `x` so the
/// remaining exponent is divisible by `n`, take an integer nth root of
/// that leading number by linear scan, and rescale by `10^(e/n)`.
fn seed(x: &Decimal, n: u64, seed_precision: usize) -> Decimal {
    let tuple = x.as_tuple();
    let adjusted_exponent = tuple.digits.len() as i64 - 1 + tuple.exponent;
    let shift = adjusted_exponent.rem_euclid(n as i64);
    let lead_len = (shift + 1) as usize;
    let e_reduced = adjusted_exponent - shift;
    let root_exp = e_reduced / n as i64;

    let mantissa: u32 = if lead_len > 9 {
        1
    } else {
        let mut m: u32 = 0;
        for i in 0..lead_len {
            let digit = tuple.digits.get(i).copied().unwrap_or(0) as u32;
            m = m.saturating_mul(10).saturating_add(digit);
        }
        m
    };
    let mantissa_root = small_nth_root_round(mantissa, n as u32).max(1);

    let factor = pow10_decimal(-root_exp);
    Decimal::from(mantissa_root).mul(&factor)
}

/// Nearest integer to `n_val`th root of `mantissa`, via linear scan from
/// below. `mantissa` fits in a handful of digits so this is cheap.
fn small_nth_root_round(mantissa: u32, n_val: u32) -> u32 {
    if mantissa == 0 {
        return 0;
    }
    let mut s = 0u32;
    while s.checked_add(1).and_then(|t| t.checked_pow(n_val)).map(|p| p <= mantissa).unwrap_or(false) {
        s += 1;
    }
    s.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_root_of_perfect_cube_is_close() {
        let x: Decimal = "27".parse().unwrap();
        let r = root(&x, &Int::from(3u32), 15, RoundingMode::HalfEven).unwrap();
        let diff = r.sub(&"3".parse().unwrap()).abs();
        assert!(diff < "0.000000000001".parse().unwrap(), "27^(1/3) = {r}");
    }

    #[test]
    fn even_root_of_negative_is_a_domain_error() {
        let x: Decimal = "-16".parse().unwrap();
        assert_eq!(root(&x, &Int::from(4u32), 10, RoundingMode::HalfEven), Err(ArithError::DomainError));
    }

    #[test]
    fn odd_root_of_negative_is_negative() {
        let x: Decimal = "-27".parse().unwrap();
        let r = root(&x, &Int::from(3u32), 15, RoundingMode::HalfEven).unwrap();
        assert!(r.is_negative());
        let diff = r.sub(&"-3".parse().unwrap()).abs();
        assert!(diff < "0.000000000001".parse().unwrap());
    }

    #[test]
    fn root_of_zero_exponent_is_a_domain_error() {
        let x: Decimal = "8".parse().unwrap();
        assert_eq!(root(&x, &Int::from(0u32), 10, RoundingMode::HalfEven), Err(ArithError::DomainError));
    }
}
