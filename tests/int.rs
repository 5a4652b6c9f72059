use arbiprec::int::Int;

#[test]
fn large_division_matches_known_quotient_and_remainder() {
    let a: Int = "12345678901234567890".parse().unwrap();
    let b = Int::from(12345u32);
    let (q, r) = a.div_rem_floor(&b).unwrap();
    assert_eq!(q, "999650944609516".parse().unwrap());
    assert_eq!(r, Int::from(9615u32));
}

#[test]
fn large_power_of_two_matches_expected_prefix() {
    let base = Int::from(2u32);
    let p = base.pow(32768);
    let s = p.to_string();
    assert_eq!(s.len(), 9865);
    assert!(s.starts_with("157228"));
}

#[test]
fn power_of_two_detection_matches_left_shift() {
    let base = Int::from(2u32);
    for n in [0u32, 1, 5, 64, 200] {
        assert_eq!(base.pow(n as u64), Int::one().shl(n));
    }
}

#[test]
fn negative_zero_parses_and_prints_as_zero() {
    let z: Int = "-0".parse().unwrap();
    assert_eq!(z.to_string(), "0");
    assert!(!z.is_negative());
}

#[test]
fn floor_div_and_trunc_div_differ_on_negative_nonexact_quotients() {
    let a = Int::from(-7i32);
    let b = Int::from(2i32);
    assert_eq!(a.div_floor(&b).unwrap(), Int::from(-4i32));
    assert_eq!(a.div_trunc(&b).unwrap(), Int::from(-3i32));
    assert_eq!(a.mod_floor(&b).unwrap(), Int::from(1i32));
    assert_eq!(a.mod_trunc(&b).unwrap(), Int::from(-1i32));
}

#[test]
fn floor_div_invariant_holds_for_negative_divisor() {
    let a = Int::from(7i32);
    let b = Int::from(-2i32);
    let (q, r) = a.div_rem_floor(&b).unwrap();
    assert_eq!(q.mul(&b).add(&r), a);
    assert!(r.is_negative() || r.is_zero());
}

#[test]
fn gcd_lcm_relation_holds() {
    let a = Int::from(123456u32);
    let b = Int::from(7890u32);
    let g = a.gcd(&b);
    let l = a.lcm(&b);
    assert_eq!(g.mul(&l), a.mul(&b).abs());
}

#[test]
fn extended_gcd_satisfies_bezout_identity() {
    let a = Int::from(240u32);
    let b = Int::from(46u32);
    let bezout = a.extended_gcd(&b);
    assert_eq!(bezout.gcd, a.gcd(&b));
    assert_eq!(bezout.u.mul(&a).add(&bezout.v.mul(&b)), bezout.gcd);
}

#[test]
fn mod_inverse_round_trips_for_coprime_operands() {
    let a = Int::from(17u32);
    let m = Int::from(3120u32);
    let inv = a.mod_inverse(&m).unwrap();
    let one = a.mul(&inv).mod_floor(&m).unwrap();
    assert_eq!(one, Int::one());
}

#[test]
fn mod_inverse_fails_when_not_coprime() {
    let a = Int::from(6u32);
    let m = Int::from(9u32);
    assert!(a.mod_inverse(&m).is_err());
}

#[test]
fn modpow_matches_repeated_squaring_for_small_values() {
    let base = Int::from(4u32);
    let exp = Int::from(13u32);
    let modulus = Int::from(497u32);
    let expected = Int::from(445u32);
    assert_eq!(base.modpow(&exp, &modulus).unwrap(), expected);
}

#[test]
fn isqrt_brackets_large_repunit() {
    let nines = "9".repeat(999);
    let x: Int = nines.parse().unwrap();
    let root = x.isqrt().unwrap();
    assert_eq!(root.to_string(), "9".repeat(500));
    assert!(root.mul(&root) <= x);
    let next = root.add(&Int::one());
    assert!(next.mul(&next) > x);
}

#[test]
fn hex_octal_binary_prefixes_parse_correctly() {
    assert_eq!("0xFF".parse::<Int>().unwrap(), Int::from(255u32));
    assert_eq!("0o17".parse::<Int>().unwrap(), Int::from(15u32));
    assert_eq!("0b1010".parse::<Int>().unwrap(), Int::from(10u32));
    assert_eq!("-0x10".parse::<Int>().unwrap(), Int::from(-16i32));
}

#[test]
fn round_trip_through_display_and_parse() {
    for s in ["0", "1", "-1", "999999999999999999999999", "-42"] {
        let x: Int = s.parse().unwrap();
        let y: Int = x.to_string().parse().unwrap();
        assert_eq!(x, y);
    }
}

#[test]
fn addition_and_multiplication_are_commutative_and_associative() {
    let a: Int = "123456789012345678901234567890".parse().unwrap();
    let b: Int = "98765432109876543210".parse().unwrap();
    let c = Int::from(7u32);

    assert_eq!(a.add(&b), b.add(&a));
    assert_eq!(a.mul(&b), b.mul(&a));
    assert_eq!(a.add(&b).add(&c), a.add(&b.add(&c)));
    assert_eq!(a.mul(&b).mul(&c), a.mul(&b.mul(&c)));
}

#[test]
fn subtraction_undoes_addition() {
    let a: Int = "987654321098765432109876543210".parse().unwrap();
    let b = Int::from(-555555555i64);
    assert_eq!(a.add(&b).sub(&b), a);
}

#[test]
fn bitwise_not_matches_twos_complement_semantics() {
    assert_eq!(Int::from(0u32).bitnot(), Int::from(-1i32));
    assert_eq!(Int::from(-1i32).bitnot(), Int::from(0u32));
    assert_eq!(Int::from(5u32).bitnot(), Int::from(-6i32));
}

#[test]
fn bitwise_and_or_xor_match_native_for_nonnegative_operands() {
    let a = Int::from(0b1100_1010u32);
    let b = Int::from(0b1010_0110u32);
    assert_eq!(a.bitand(&b), Int::from(0b1000_0010u32));
    assert_eq!(a.bitor(&b), Int::from(0b1110_1110u32));
    assert_eq!(a.bitxor(&b), Int::from(0b0110_1100u32));
}

#[test]
fn shift_right_rounds_toward_negative_infinity_for_negative_values() {
    assert_eq!(Int::from(-1i32).shr(1), Int::from(-1i32));
    assert_eq!(Int::from(-5i32).shr(1), Int::from(-3i32));
}
