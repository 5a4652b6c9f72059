use arbiprec::magnitude::binary::{self, BinaryMagnitude, KARATSUBA_CUTOFF as BINARY_KARATSUBA_CUTOFF};
use arbiprec::magnitude::decadic::{self, DecadicMagnitude, KARATSUBA_CUTOFF as DECADIC_KARATSUBA_CUTOFF};

fn binary_from_decimal(s: &str) -> BinaryMagnitude {
    BinaryMagnitude::from_limbs(binary::from_decimal_string(s).unwrap())
}

fn binary_to_decimal(m: &BinaryMagnitude) -> String {
    binary::to_decimal_string(m.limbs())
}

fn decadic_from_decimal(s: &str) -> DecadicMagnitude {
    DecadicMagnitude::from_limbs(decadic::from_decimal_string(s).unwrap())
}

fn decadic_to_decimal(m: &DecadicMagnitude) -> String {
    decadic::to_decimal_string(m.limbs())
}

fn all_zero(limbs: &[u32]) -> bool {
    limbs.iter().all(|&l| l == 0)
}

#[test]
fn binary_add_sub_round_trip() {
    let a = binary_from_decimal("123456789012345678901234567890");
    let b = binary_from_decimal("987654321098765432109876543210");
    assert_eq!(a.add(&b).sub(&b).unwrap(), a);
}

#[test]
fn binary_subtraction_underflow_fails() {
    let a = BinaryMagnitude::from(1u32);
    let b = BinaryMagnitude::from(2u32);
    assert!(a.sub(&b).is_err());
}

#[test]
fn binary_schoolbook_and_karatsuba_agree() {
    // A number well under `KARATSUBA_CUTOFF` limbs, checked against a known
    // square computed independently.
    assert!(BINARY_KARATSUBA_CUTOFF < 64);
    let small = binary_from_decimal("7777777777");
    assert_eq!(binary_to_decimal(&small.mul(&small)), "60493827148395061729");

    // Cross the cutoff: a repunit large enough to force the Karatsuba path.
    let digits = "7".repeat(600);
    let a = binary_from_decimal(&digits);
    assert!(a.limbs().len() > BINARY_KARATSUBA_CUTOFF);
    let product = a.mul(&a);

    // The large product must still satisfy an exact div-by-a round trip.
    let (q, r) = binary::div_rem(product.limbs(), a.limbs()).unwrap();
    assert_eq!(BinaryMagnitude::from_limbs(q), a);
    assert!(all_zero(&r));
}

#[test]
fn binary_division_matches_multiplication() {
    let a = binary_from_decimal("999999999999999999999999999999999");
    let b = BinaryMagnitude::from(7u32);
    let product = a.mul(&b);
    let (q, r) = binary::div_rem(product.limbs(), b.limbs()).unwrap();
    assert_eq!(BinaryMagnitude::from_limbs(q), a);
    assert!(all_zero(&r));
}

#[test]
fn binary_division_by_zero_fails() {
    let a = BinaryMagnitude::from(10u32);
    let zero = BinaryMagnitude::zero();
    assert!(binary::div_rem(a.limbs(), zero.limbs()).is_err());
}

#[test]
fn binary_isqrt_brackets_input_across_all_three_size_regimes() {
    for n in [0u64, 1, 2, 99, 100, 123_456_789] {
        let a = BinaryMagnitude::from(n);
        let root = BinaryMagnitude::from_limbs(binary::isqrt(a.limbs()));
        assert!(root.mul(&root) <= a);
        let next = root.add(&BinaryMagnitude::from(1u32));
        assert!(next.mul(&next) > a);
    }

    // Large regime: a 700-digit repunit exercises precision-doubling.
    let big = binary_from_decimal(&"3".repeat(700));
    let root = BinaryMagnitude::from_limbs(binary::isqrt(big.limbs()));
    assert!(root.mul(&root) <= big);
    let next = root.add(&BinaryMagnitude::from(1u32));
    assert!(next.mul(&next) > big);
}

#[test]
fn binary_shift_matches_multiply_by_power_of_two() {
    let a = binary_from_decimal("123456789012345678901234567890");
    let shifted = a.shl(10);
    let scaled = a.mul(&BinaryMagnitude::from(1024u32));
    assert_eq!(shifted, scaled);
    assert_eq!(shifted.shr(10), a);
}

#[test]
fn binary_decimal_string_round_trips_across_both_conversion_paths() {
    // Short enough for the native-u64 fast path.
    assert_eq!(binary_to_decimal(&binary_from_decimal("42")), "42");
    // Long enough to force the simple divide-by-1e9 path.
    let mid = "123456789".repeat(20);
    assert_eq!(binary_to_decimal(&binary_from_decimal(&mid)), mid);
    // Long enough to force the divide-and-conquer path (> 128 limbs).
    let long = "9".repeat(2000);
    assert_eq!(binary_to_decimal(&binary_from_decimal(&long)), long);
}

#[test]
fn decadic_add_sub_round_trip() {
    let a = decadic_from_decimal("123456789123456789123456789");
    let b = decadic_from_decimal("987654321987654321987654321");
    assert_eq!(a.add(&b).sub(&b).unwrap(), a);
}

#[test]
fn decadic_schoolbook_and_karatsuba_agree_on_a_known_square() {
    assert!(DECADIC_KARATSUBA_CUTOFF < 64);
    let small = decadic_from_decimal(&"9".repeat(10));
    assert_eq!(decadic_to_decimal(&small.mul(&small)), "99999999980000000001");

    let digits = "9".repeat(500);
    let a = decadic_from_decimal(&digits);
    assert!(a.limbs().len() > DECADIC_KARATSUBA_CUTOFF);
    let product = a.mul(&a);
    let (q, r) = decadic::div_rem(product.limbs(), a.limbs()).unwrap();
    assert_eq!(DecadicMagnitude::from_limbs(q), a);
    assert!(all_zero(&r));
}

#[test]
fn decadic_scale_up_and_down_are_inverse_on_exact_multiples() {
    let a = decadic_from_decimal("123456789");
    let scaled = DecadicMagnitude::from_limbs(decadic::scale_up(a.limbs(), 5));
    assert_eq!(decadic_to_decimal(&scaled), "12345678900000");
    let back = DecadicMagnitude::from_limbs(decadic::scale_down(scaled.limbs(), 5));
    assert_eq!(back, a);
}

#[test]
fn decadic_division_by_zero_fails() {
    let a = DecadicMagnitude::from(10u32);
    let zero = DecadicMagnitude::zero();
    assert!(decadic::div_rem(a.limbs(), zero.limbs()).is_err());
}
