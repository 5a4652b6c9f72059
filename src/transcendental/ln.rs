//! Natural logarithm.
//!
//! General case: write `x = m * 10^e` with `m` in `[0.1, 1)`, so
//! `ln(x) = ln(m) + e*ln(10)`. `ln(m)` is evaluated with the atanh series
//! `ln(m) = 2*atanh(z)`, `z = (m-1)/(m+1)`, `atanh(z) = z + z^3/3 + z^5/5 +
//! ...`, which converges for any `|z| < 1` and does so comfortably for `m`
//! in `[0.1, 1)` (`|z| <= 0.818`).
//!
//! `ln(10)` (and `ln(2)`, needed by [`crate::transcendental::exp`]) can't
//! come from that same reduction — reducing `10` into `[0.1, 1)` gives
//! `m = 1`, `ln(m) = 0`, which only restates `ln(10) = ln(10)`. Those two
//! constants are bootstrapped instead by repeated square-rooting: halving
//! `log(v)` a fixed number of times brings `v` close enough to `1` that
//! the same atanh series converges in a handful of terms, and the result
//! is scaled back up by the matching power of two.

use crate::decimal::Decimal;
use crate::errors::{ArithError, ArithResult};
use crate::rounding::RoundingMode;
use crate::transcendental::cache;
use crate::transcendental::{decimal_digit_count, round_significant};

/// Number of square-root halvings used to bring the ln(10)/ln(2) bootstrap
/// argument close to 1 before applying the atanh series.
const BOOTSTRAP_SQRT_ROUNDS: u32 = 8;

/// `ln(x)` to `precision` significant digits, rounded under `mode`. Fails
/// with [`ArithError::DomainError`] if `x <= 0`.
pub fn ln(x: &Decimal, precision: usize, mode: RoundingMode) -> ArithResult<Decimal> {
    if x.is_zero() || x.is_negative() {
        return Err(ArithError::DomainError);
    }
    if *x == Decimal::one() {
        return Ok(Decimal::zero());
    }

    let guard = decimal_digit_count(precision) + 4;
    let working = precision + guard;

    let tuple = x.as_tuple();
    let adjusted_exponent = tuple.digits.len() as i64 - 1 + tuple.exponent;
    let e = adjusted_exponent + 1;
    let m = Decimal::new(x.coefficient().clone(), x.scale() + e, crate::int::Sign::NonNegative);

    let ln_m = atanh_ln_core(&m, working);
    let ln10 = cache::get_ln10(working);
    let result = ln_m.add(&Decimal::from(e).mul(&ln10));
    Ok(round_significant(&result, precision, mode))
}

/// `ln(m)` via `2*atanh((m-1)/(m+1))`, valid for any `m > 0`; fastest when
/// `m` is already close to `1`.
fn atanh_ln_core(m: &Decimal, working_precision: usize) -> Decimal {
    let one = Decimal::one();
    let z = m.sub(&one).true_divide(&m.add(&one), working_precision, RoundingMode::HalfEven).expect("m + 1 > 0");
    let z2 = round_significant(&z.mul(&z), working_precision, RoundingMode::HalfEven);
    let epsilon = crate::transcendental::pow10_decimal(working_precision as i64);

    let mut sum = z.clone();
    let mut term = z;
    let mut k: u64 = 1;
    loop {
        term = round_significant(&term.mul(&z2), working_precision, RoundingMode::HalfEven);
        let denom = Decimal::from(2 * k + 1);
        let add_term = term.true_divide(&denom, working_precision, RoundingMode::HalfEven).expect("odd denominator is nonzero");
        sum = sum.add(&add_term);
        if add_term.abs() < epsilon {
            break;
        }
        k += 1;
        if k > 100_000 {
            break;
        }
    }
    round_significant(&sum.mul(&Decimal::from(2u32)), working_precision, RoundingMode::HalfEven)
}

/// Computes `ln(10)` from scratch (no cache dependency on `ln`, which
/// would need `ln(10)` itself to finish its own reduction).
pub(crate) fn bootstrap_ln10(precision: usize) -> Decimal {
    bootstrap_ln(Decimal::from(10u32), precision)
}

/// Computes `ln(2)` from scratch, the same way.
pub(crate) fn bootstrap_ln2(precision: usize) -> Decimal {
    bootstrap_ln(Decimal::from(2u32), precision)
}

fn bootstrap_ln(value: Decimal, precision: usize) -> Decimal {
    let guard = decimal_digit_count(precision) + 4;
    let working = precision + guard;

    let mut v = value;
    for _ in 0..BOOTSTRAP_SQRT_ROUNDS {
        v = crate::transcendental::sqrt::sqrt(&v, working, RoundingMode::HalfEven).expect("v starts positive and stays positive");
    }
    let ln_v = atanh_ln_core(&v, working);
    let multiplier = 1u64 << BOOTSTRAP_SQRT_ROUNDS;
    round_significant(&ln_v.mul(&Decimal::from(multiplier)), precision, RoundingMode::HalfEven)
}
