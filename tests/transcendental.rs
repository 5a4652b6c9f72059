use arbiprec::decimal::Decimal;
use arbiprec::int::Int;
use arbiprec::rounding::RoundingMode;
use arbiprec::transcendental::{cos, exp, ln, pi, power, root, sin, sqrt, tan};

fn close(a: &Decimal, b: &str, eps: &str) {
    let bd: Decimal = b.parse().unwrap();
    let epsd: Decimal = eps.parse().unwrap();
    assert!(a.sub(&bd).abs() < epsd, "expected {a} close to {b} within {eps}");
}

#[test]
fn sqrt_of_two_matches_known_digits() {
    let two: Decimal = "2".parse().unwrap();
    let r = sqrt(&two, 28, RoundingMode::HalfEven).unwrap();
    assert_eq!(r.to_string(), "1.414213562373095048801688724");
}

#[test]
fn sqrt_rejects_negative_input() {
    let x: Decimal = "-1".parse().unwrap();
    assert!(sqrt(&x, 10, RoundingMode::HalfEven).is_err());
}

#[test]
fn ln_and_exp_round_trip() {
    let x: Decimal = "271.8281828".parse().unwrap();
    let l = ln(&x, 25, RoundingMode::HalfEven).unwrap();
    let back = exp(&l, 25, RoundingMode::HalfEven).unwrap();
    close(&back, &x.to_string(), "0.0000000001");
}

#[test]
fn ln_rejects_zero_and_negative() {
    assert!(ln(&Decimal::zero(), 10, RoundingMode::HalfEven).is_err());
    let neg: Decimal = "-5".parse().unwrap();
    assert!(ln(&neg, 10, RoundingMode::HalfEven).is_err());
}

#[test]
fn pi_matches_known_leading_digits() {
    let p = pi(30);
    assert_eq!(p.to_string(), "3.14159265358979323846264338328");
}

#[test]
fn root_of_perfect_power_is_exact_within_tolerance() {
    let x: Decimal = "1024".parse().unwrap();
    let r = root(&x, &Int::from(10u32), 15, RoundingMode::HalfEven).unwrap();
    close(&r, "2", "0.000000000001");
}

#[test]
fn power_matches_root_for_reciprocal_exponent() {
    let x: Decimal = "8".parse().unwrap();
    let one_third = Decimal::one().true_divide(&Decimal::from(3u32), 20, RoundingMode::HalfEven).unwrap();
    let r = power(&x, &one_third, 12, RoundingMode::HalfEven).unwrap();
    close(&r, "2", "0.00001");
}

#[test]
fn sin_cos_tan_agree_at_pi_over_four() {
    let p = pi(30);
    let quarter = p.true_divide(&Decimal::from(4u32), 25, RoundingMode::HalfEven).unwrap();
    let s = sin(&quarter, 15, RoundingMode::HalfEven).unwrap();
    let c = cos(&quarter, 15, RoundingMode::HalfEven).unwrap();
    close(&s, &c.to_string(), "0.000000000001");

    let t = tan(&quarter, 15, RoundingMode::HalfEven).unwrap();
    close(&t, "1", "0.000000000001");
}

#[test]
fn sin_squared_plus_cos_squared_is_one() {
    let x: Decimal = "1.3".parse().unwrap();
    let s = sin(&x, 20, RoundingMode::HalfEven).unwrap();
    let c = cos(&x, 20, RoundingMode::HalfEven).unwrap();
    let sum = s.mul(&s).add(&c.mul(&c));
    close(&sum, "1", "0.0000000001");
}

#[test]
fn tan_is_an_odd_function() {
    let x: Decimal = "0.9".parse().unwrap();
    let pos = tan(&x, 20, RoundingMode::HalfEven).unwrap();
    let neg = tan(&x.neg(), 20, RoundingMode::HalfEven).unwrap();
    assert_eq!(neg, pos.neg());
}

#[test]
fn exp_of_large_negative_value_stays_small_and_positive() {
    let x = Decimal::from(-50i32);
    let r = exp(&x, 20, RoundingMode::HalfEven).unwrap();
    assert!(!r.is_negative());
    assert!(r < "0.000000001".parse().unwrap());
}
