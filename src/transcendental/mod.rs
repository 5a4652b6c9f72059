//! Transcendental functions on [`crate::decimal::Decimal`]: `sqrt`, `ln`,
//! `exp`, `root`, `power`, the six trigonometric functions, and `pi`.
//! Every function here composes the lower three
//! layers — magnitude kernel, signed integer, and decimal — rather than
//! introducing any new limb-level algorithm of its own; the only new
//! machinery at this layer is range reduction, Newton iteration, and
//! Taylor/atanh series evaluated in [`crate::decimal::Decimal`] arithmetic,
//! plus a precision-keyed cache for the handful of constants (`pi`, `ln2`,
//! `ln10`, `e`) every other function in the module eventually needs.

mod cache;
pub mod exp;
pub mod ln;
pub mod pi;
pub mod power;
pub mod root;
pub mod sqrt;
pub mod trig;

pub use exp::exp;
pub use ln::ln;
pub use pi::pi;
pub use power::power;
pub use root::root;
pub use sqrt::sqrt;
pub use trig::{cos, cot, csc, sec, sin, tan};

use crate::decimal::Decimal;
use crate::errors::{ArithError, ArithResult};
use crate::magnitude::decadic::DecadicMagnitude;
use crate::rounding::RoundingMode;

/// Number of decimal digits in `n` (`1` for zero). Used to size guard
/// digits (`⌈log10(precision)⌉ + constant`) from a plain `usize` precision
/// argument.
pub(crate) fn decimal_digit_count(mut n: usize) -> usize {
    if n == 0 {
        return 1;
    }
    let mut count = 0;
    while n > 0 {
        count += 1;
        n /= 10;
    }
    count
}

/// Rounds `d` to exactly `sig` significant digits under `mode`, leaving it
/// unchanged if it already has `sig` digits or fewer. Every Newton/series
/// loop in this module calls this after each arithmetic step to keep
/// intermediate coefficients from growing without bound.
pub(crate) fn round_significant(d: &Decimal, sig: usize, mode: RoundingMode) -> Decimal {
    if d.is_zero() {
        return d.clone();
    }
    let digits = d.digit_count();
    if digits <= sig {
        return d.clone();
    }
    let drop = (digits - sig) as i64;
    d.round(d.scale() - drop, mode)
}

/// Binary exponentiation of a [`Decimal`] by a non-negative `u64` exponent,
/// rounding to `sig` significant digits after every multiply so repeated
/// squaring in a Newton loop can't make the coefficient balloon.
pub(crate) fn pow_bounded(base: &Decimal, mut exp: u64, sig: usize) -> Decimal {
    let mut result = Decimal::one();
    let mut b = base.clone();
    while exp > 0 {
        if exp & 1 == 1 {
            result = round_significant(&result.mul(&b), sig, RoundingMode::HalfEven);
        }
        exp >>= 1;
        if exp > 0 {
            b = round_significant(&b.mul(&b), sig, RoundingMode::HalfEven);
        }
    }
    result
}

/// Converts an already-integer-valued [`Decimal`] (as produced by
/// `.round(0, ..)`) to `i64`. Fails with [`ArithError::OverflowToNative`]
/// if it doesn't fit.
pub(crate) fn decimal_to_i64(d: &Decimal) -> ArithResult<i64> {
    let rounded = d.round(0, RoundingMode::TruncateTowardZero);
    let s = crate::magnitude::decadic::to_decimal_string(rounded.coefficient().limbs());
    let mut v: i64 = s.parse().map_err(|_| ArithError::OverflowToNative)?;
    if rounded.is_negative() {
        v = -v;
    }
    Ok(v)
}

/// Bridges [`crate::int::Int`] into a [`Decimal`] by way of the shared
/// decimal-string grammar: the two types live on different radices
/// (binary vs. decadic), so round-tripping through the string codec both
/// layers already expose is simpler than a dedicated bit-level converter.
pub(crate) fn int_to_decimal(x: &crate::int::Int) -> Decimal {
    x.to_string().parse::<Decimal>().expect("Int's Display always produces a valid decimal literal")
}

/// `10^-exp` as an exact [`Decimal`] (`exp` may be negative, meaning a
/// positive power of ten).
pub(crate) fn pow10_decimal(exp: i64) -> Decimal {
    Decimal::new(DecadicMagnitude::from(1u32), exp, crate::int::Sign::NonNegative)
}
