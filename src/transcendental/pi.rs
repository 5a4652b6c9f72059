//! Pi, via the Chudnovsky algorithm with binary splitting.
//!
//! Binary splitting accumulates the series
//! `1/pi = 12 * sum_k (-1)^k (6k)!(13591409+545140134k) / ((3k)!(k!)^3 640320^(3k+3/2))`
//! as a single pass over an `(P, Q, T)` triple of exact big integers rather
//! than summing floating terms: each leaf of the recursion contributes one
//! term exactly, and combining two ranges is pure integer arithmetic, so
//! there's no error accumulation to budget for — only enough terms to
//! cover the requested precision (each term contributes about 14.18
//! decimal digits). The final division by `T` and the one `sqrt(10005)`
//! call are the only places decimal rounding enters.

use crate::decimal::Decimal;
use crate::int::Int;
use crate::rounding::RoundingMode;
use crate::transcendental::{decimal_digit_count, int_to_decimal, round_significant};

const CHUDNOVSKY_A: u64 = 13591409;
const CHUDNOVSKY_B: u64 = 545140134;
const CHUDNOVSKY_C: u64 = 640320;
/// Decimal digits contributed per Chudnovsky term.
const DIGITS_PER_TERM: usize = 14;

/// `pi` to `precision` significant digits, cached by
/// [`crate::transcendental::cache`].
pub fn pi(precision: usize) -> Decimal {
    crate::transcendental::cache::get_pi(precision)
}

pub(crate) fn compute_pi(precision: usize) -> Decimal {
    let guard = decimal_digit_count(precision) + 8;
    let working = precision + guard;
    let terms = (working / DIGITS_PER_TERM + 2) as u64;

    let c3_24 = Int::from(CHUDNOVSKY_C).pow(3).div_trunc(&Int::from(24u32)).expect("24 divides C^3 exactly");
    let (_, q, t) = binary_split(0, terms, &c3_24);

    let q_dec = int_to_decimal(&q);
    let t_dec = int_to_decimal(&t);
    let ratio = q_dec.true_divide(&t_dec, working, RoundingMode::HalfEven).expect("Chudnovsky T is never zero");

    let sqrt_10005 = crate::transcendental::sqrt::sqrt(&Decimal::from(10005u32), working, RoundingMode::HalfEven)
        .expect("10005 is positive");

    let pi_val = round_significant(&Decimal::from(426880u32).mul(&sqrt_10005).mul(&ratio), precision, RoundingMode::HalfEven);
    pi_val
}

/// Binary-splitting recursion over the term range `[a, b)`, returning
/// `(P(a,b), Q(a,b), T(a,b))`.
fn binary_split(a: u64, b: u64, c3_24: &Int) -> (Int, Int, Int) {
    if b - a == 1 {
        if a == 0 {
            let p = Int::one();
            let q = Int::one();
            let t = p.mul(&Int::from(CHUDNOVSKY_A));
            return (p, q, t);
        }
        let a_int = Int::from(a);
        let p = Int::from(6 * a - 5).mul(&Int::from(2 * a - 1)).mul(&Int::from(6 * a - 1));
        let q = a_int.pow(3).mul(c3_24);
        let mut t = p.mul(&Int::from(CHUDNOVSKY_A).add(&Int::from(CHUDNOVSKY_B).mul(&a_int)));
        if a % 2 == 1 {
            t = t.neg();
        }
        return (p, q, t);
    }
    let m = (a + b) / 2;
    let (pam, qam, tam) = binary_split(a, m, c3_24);
    let (pmb, qmb, tmb) = binary_split(m, b, c3_24);
    let p = pam.mul(&pmb);
    let q = qam.mul(&qmb);
    let t = qmb.mul(&tam).add(&pam.mul(&tmb));
    (p, q, t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pi_matches_known_digits() {
        let p = pi(30);
        let expected: Decimal = "3.14159265358979323846264338328".parse().unwrap();
        let diff = p.sub(&expected).abs();
        assert!(diff < "0.0000000000000000000000000001".parse().unwrap(), "pi = {p}");
    }

    #[test]
    fn pi_is_cached_across_calls() {
        assert_eq!(pi(15), pi(15));
    }
}
