//! General exponentiation `x^y` for decimal `y`.
//!
//! An integer-valued `y` takes the exact binary-exponentiation path (or
//! its reciprocal, for negative integer exponents); everything else goes
//! through `x^y = exp(y * ln(x))`, which needs `x > 0`.

use crate::decimal::Decimal;
use crate::errors::{ArithError, ArithResult};
use crate::rounding::RoundingMode;
use crate::transcendental::{decimal_digit_count, decimal_to_i64, pow_bounded, round_significant};

/// `x^y` to `precision` significant digits, rounded under `mode`.
///
/// Fails with [`ArithError::DomainError`] for `0^0`, `0^(negative)`, or a
/// non-integer `y` applied to a negative `x`.
pub fn power(x: &Decimal, y: &Decimal, precision: usize, mode: RoundingMode) -> ArithResult<Decimal> {
    let y_trunc = y.round(0, RoundingMode::TruncateTowardZero);
    if y_trunc == *y {
        return integer_power(x, decimal_to_i64(&y_trunc)?, precision, mode);
    }

    if x.is_negative() {
        return Err(ArithError::DomainError);
    }
    if x.is_zero() {
        return if y.is_negative() { Err(ArithError::DomainError) } else { Ok(Decimal::zero()) };
    }

    let guard = decimal_digit_count(precision) + 4;
    let working = precision + guard;
    let ln_x = crate::transcendental::ln(x, working, RoundingMode::HalfEven)?;
    let prod = round_significant(&y.mul(&ln_x), working, RoundingMode::HalfEven);
    crate::transcendental::exp(&prod, precision, mode)
}

fn integer_power(x: &Decimal, exponent: i64, precision: usize, mode: RoundingMode) -> ArithResult<Decimal> {
    if x.is_zero() {
        return if exponent == 0 || exponent < 0 { Err(ArithError::DomainError) } else { Ok(Decimal::zero()) };
    }
    if exponent == 0 {
        return Ok(Decimal::one());
    }

    let guard = decimal_digit_count(precision) + 4;
    let working = precision + guard;

    if exponent > 0 {
        Ok(round_significant(&pow_bounded(x, exponent as u64, working), precision, mode))
    } else {
        let positive = pow_bounded(x, (-exponent) as u64, working);
        Ok(round_significant(&Decimal::one().true_divide(&positive, working, RoundingMode::HalfEven)?, precision, mode))
    }
}
