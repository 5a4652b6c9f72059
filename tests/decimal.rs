use arbiprec::decimal::Decimal;
use arbiprec::rounding::RoundingMode;

#[test]
fn addition_aligns_scales() {
    let a: Decimal = "123456.789".parse().unwrap();
    let b: Decimal = "78.9".parse().unwrap();
    assert_eq!(a.add(&b).to_string(), "123535.689");
}

#[test]
fn tenths_add_exactly() {
    let a: Decimal = "0.1".parse().unwrap();
    let b: Decimal = "0.2".parse().unwrap();
    let sum = a.add(&b);
    assert_eq!(sum.to_string(), "0.3");
    assert_eq!(sum.coefficient().to_string(), "3");
    assert_eq!(sum.scale(), 1);
}

#[test]
fn half_even_rounding_ties_to_even() {
    let a: Decimal = "2.5".parse().unwrap();
    assert_eq!(a.round(0, RoundingMode::HalfEven).to_string(), "2");
    let b: Decimal = "3.5".parse().unwrap();
    assert_eq!(b.round(0, RoundingMode::HalfEven).to_string(), "4");
}

#[test]
fn multiplication_matches_known_product() {
    let a: Decimal = "123456789.123456789".parse().unwrap();
    let b: Decimal = "1234.56789".parse().unwrap();
    assert_eq!(a.mul(&b).to_string(), "152415787654.32099750190521");
}

#[test]
fn scientific_notation_parses_back_to_plain_form() {
    let a: Decimal = "1.23E-5".parse().unwrap();
    assert_eq!(a.to_string(), "0.0000123");
}

#[test]
fn normalize_strips_trailing_zeros_and_digit_count_reflects_it() {
    let a: Decimal = "100.00".parse().unwrap();
    assert_eq!(a.digit_count(), 5);
    assert_eq!(a.normalize().digit_count(), 1);
    assert_eq!(a.normalize().to_string(), "1E+2");
}

#[test]
fn negative_zero_normalises_to_zero_scale_zero() {
    let a: Decimal = "-0.000".parse().unwrap();
    assert!(!a.is_negative());
    assert_eq!(a.scale(), 0);
    assert_eq!(a.to_string(), "0");
}

#[test]
fn quantize_adopts_template_scale_exactly() {
    let a: Decimal = "1.2345".parse().unwrap();
    let template: Decimal = "0.01".parse().unwrap();
    let q = a.quantize(&template, RoundingMode::HalfEven);
    assert_eq!(q.to_string(), "1.23");
    assert_eq!(q.scale(), template.scale());
}

#[test]
fn true_divide_rounds_to_requested_significant_digits() {
    let a: Decimal = "1".parse().unwrap();
    let b: Decimal = "3".parse().unwrap();
    let q = a.true_divide(&b, 10, RoundingMode::HalfEven).unwrap();
    assert_eq!(q.to_string(), "0.3333333333");
}

#[test]
fn true_divide_by_zero_fails() {
    let a: Decimal = "1".parse().unwrap();
    let zero = Decimal::zero();
    assert!(a.true_divide(&zero, 10, RoundingMode::HalfEven).is_err());
}

#[test]
fn floor_div_and_mod_satisfy_the_division_identity() {
    let a: Decimal = "17.5".parse().unwrap();
    let b: Decimal = "-4".parse().unwrap();
    let (q, r) = a.div_rem_floor(&b).unwrap();
    assert_eq!(q.mul(&b).add(&r), a);
}

#[test]
fn as_tuple_round_trips_through_from_tuple() {
    for s in ["123.450", "-0.0007", "0", "1E+10"] {
        let d: Decimal = s.parse().unwrap();
        let t = d.as_tuple();
        let back = Decimal::from_tuple(&t).unwrap();
        assert_eq!(back, d);
    }
}

#[test]
fn engineering_notation_exponent_is_multiple_of_three() {
    let d: Decimal = "1234567".parse().unwrap();
    let eng = d.to_eng_string();
    assert!(eng.starts_with("1.234567E+6"));
}

#[test]
fn addition_and_multiplication_are_commutative() {
    let a: Decimal = "3.14159".parse().unwrap();
    let b: Decimal = "-2.71828".parse().unwrap();
    assert_eq!(a.add(&b), b.add(&a));
    assert_eq!(a.mul(&b), b.mul(&a));
}

#[test]
fn round_trip_through_display_and_parse() {
    for s in ["0", "1.5", "-123.456", "1E+20", "0.00001"] {
        let d: Decimal = s.parse().unwrap();
        let back: Decimal = d.to_string().parse().unwrap();
        assert_eq!(d, back);
    }
}
