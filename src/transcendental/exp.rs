//! Exponential function.
//!
//! Range reduction: `x = k*ln2 + r` with `k` the nearest integer to
//! `x/ln2`, so `|r| <= ln2/2`; `exp(x) = 2^k * exp(r)`. `exp(r)` is then a
//! plain Taylor series, which converges fast because `r` is small by
//! construction — no further halving-and-squaring reduction is needed on
//! top of the `ln2` reduction for the precisions this crate targets.

use crate::decimal::Decimal;
use crate::errors::ArithResult;
use crate::rounding::RoundingMode;
use crate::transcendental::cache;
use crate::transcendental::{decimal_digit_count, decimal_to_i64, pow_bounded, round_significant};

/// `exp(x)` to `precision` significant digits, rounded under `mode`.
/// Defined for every finite `x`.
pub fn exp(x: &Decimal, precision: usize, mode: RoundingMode) -> ArithResult<Decimal> {
    if x.is_zero() {
        return Ok(Decimal::one());
    }

    let guard = decimal_digit_count(precision) + 4;
    let working = precision + guard;

    let ln2 = cache::get_ln2(working);
    let k_dec = x.true_divide(&ln2, working, RoundingMode::HalfEven)?.round(0, RoundingMode::HalfEven);
    let k = decimal_to_i64(&k_dec)?;

    let r = round_significant(&x.sub(&k_dec.mul(&ln2)), working, RoundingMode::HalfEven);
    let exp_r = taylor_exp(&r, working);

    let two = Decimal::from(2u32);
    let pow2k = if k >= 0 {
        pow_bounded(&two, k as u64, working)
    } else {
        Decimal::one().true_divide(&pow_bounded(&two, (-k) as u64, working), working, RoundingMode::HalfEven)?
    };

    Ok(round_significant(&pow2k.mul(&exp_r), precision, mode))
}

/// `exp(r)` via its Taylor series, for `r` already reduced to a small
/// magnitude (at most `ln2/2` in practice).
fn taylor_exp(r: &Decimal, working_precision: usize) -> Decimal {
    let epsilon = crate::transcendental::pow10_decimal(working_precision as i64);
    let mut sum = Decimal::one().add(r);
    let mut term = r.clone();
    let mut n: u64 = 2;
    loop {
        term = round_significant(&term.mul(r), working_precision, RoundingMode::HalfEven);
        let next_term = term
            .true_divide(&Decimal::from(n), working_precision, RoundingMode::HalfEven)
            .expect("n is a positive integer");
        sum = sum.add(&next_term);
        term = next_term.clone();
        if next_term.abs() < epsilon {
            break;
        }
        n += 1;
        if n > 100_000 {
            break;
        }
    }
    sum
}
