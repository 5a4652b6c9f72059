//! The shared decimal-string parser.
//!
//! A two-pass design in spirit: pass 1 (the state machine below) locates
//! sign, decimal point, and exponent while validating the grammar; pass 2
//! (the caller, in [`crate::int`] or [`crate::decimal`]) turns the
//! collected digit runs into limbs via
//! [`crate::magnitude::decadic::from_decimal_string`] or
//! [`crate::magnitude::binary::convert::from_decimal_string`]. Both
//! consumers share this module so the grammar — and its state machine —
//! is defined exactly once.
//!
//! Infinities and not-a-numbers are outside this crate's scope; `inf`/`nan`
//! tokens are rejected as [`ArithError::ParseInvalid`] rather than accepted
//! and silently dropped.

use crate::errors::{ArithError, ArithResult};

/// The result of parsing a decimal-string literal: an unsigned digit
/// string (concatenated integer and fractional digits, grouping
/// separators already stripped) plus a scale such that the value equals
/// `(-1)^negative * digits * 10^(-scale)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDecimal {
    pub negative: bool,
    /// Concatenated integer + fractional digits, no leading-zero
    /// stripping performed here (that is the magnitude constructor's job).
    pub digits: String,
    /// `frac_digit_count - exponent`; positive means digits after the
    /// decimal point, negative means an implicit run of trailing zeros.
    pub scale: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    Sign,
    Integer,
    Fraction,
    ExponentSign,
    ExponentDigits,
}

/// Runs the state machine below over `s`, producing a
/// [`ParsedDecimal`] or [`ArithError::ParseInvalid`].
pub fn parse_decimal(s: &str) -> ArithResult<ParsedDecimal> {
    let mut state = State::Start;
    let mut negative = false;
    let mut int_digits = String::new();
    let mut frac_digits = String::new();
    let mut exp_digits = String::new();
    let mut exponent_negative = false;

    for c in s.chars() {
        state = match (state, c) {
            (State::Start, '+') => {
                negative = false;
                State::Sign
            }
            (State::Start, '-') => {
                negative = true;
                State::Sign
            }
            (State::Start | State::Sign, c) if c.is_ascii_digit() => {
                int_digits.push(c);
                State::Integer
            }
            (State::Start | State::Sign, '.') => State::Fraction,

            (State::Integer, c) if c.is_ascii_digit() => {
                int_digits.push(c);
                State::Integer
            }
            (State::Integer, '_') => State::Integer,
            (State::Integer, '.') => State::Fraction,
            (State::Integer, 'e' | 'E') => State::ExponentSign,

            (State::Fraction, c) if c.is_ascii_digit() => {
                frac_digits.push(c);
                State::Fraction
            }
            (State::Fraction, '_') => State::Fraction,
            (State::Fraction, 'e' | 'E') => State::ExponentSign,

            (State::ExponentSign, '+') => {
                exponent_negative = false;
                State::ExponentDigits
            }
            (State::ExponentSign, '-') => {
                exponent_negative = true;
                State::ExponentDigits
            }
            (State::ExponentSign, c) if c.is_ascii_digit() => {
                exp_digits.push(c);
                State::ExponentDigits
            }

            (State::ExponentDigits, c) if c.is_ascii_digit() => {
                exp_digits.push(c);
                State::ExponentDigits
            }

            _ => return Err(ArithError::ParseInvalid),
        };
    }

    if !matches!(state, State::Integer | State::Fraction | State::ExponentDigits) {
        return Err(ArithError::ParseInvalid);
    }
    if int_digits.is_empty() && frac_digits.is_empty() {
        return Err(ArithError::ParseInvalid);
    }

    let exponent: i64 = if exp_digits.is_empty() {
        0
    } else {
        let magnitude: i64 = exp_digits.parse().map_err(|_| ArithError::ParseInvalid)?;
        if exponent_negative {
            -magnitude
        } else {
            magnitude
        }
    };

    let frac_len = frac_digits.len() as i64;
    let mut digits = int_digits;
    digits.push_str(&frac_digits);
    if digits.is_empty() {
        digits.push('0');
    }

    Ok(ParsedDecimal { negative, digits, scale: frac_len - exponent })
}

/// A non-decimal integer radix detected from a `0x`/`0o`/`0b` prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Radix {
    Decimal,
    Hex,
    Octal,
    Binary,
}

/// Splits an integer-literal string into its optional sign, its radix (as
/// signalled by a `0x`/`0o`/`0b` prefix, default decimal), and the
/// remaining digit run with grouping underscores stripped. Does not itself
/// validate that every character is a valid digit of the detected radix —
/// the caller's limb-building routine does that.
pub fn split_integer_radix(s: &str) -> ArithResult<(bool, Radix, String)> {
    let mut rest = s;
    let negative = match rest.as_bytes().first() {
        Some(b'+') => {
            rest = &rest[1..];
            false
        }
        Some(b'-') => {
            rest = &rest[1..];
            true
        }
        _ => false,
    };

    let (radix, rest) = if let Some(stripped) = rest.strip_prefix("0x").or_else(|| rest.strip_prefix("0X")) {
        (Radix::Hex, stripped)
    } else if let Some(stripped) = rest.strip_prefix("0o").or_else(|| rest.strip_prefix("0O")) {
        (Radix::Octal, stripped)
    } else if let Some(stripped) = rest.strip_prefix("0b").or_else(|| rest.strip_prefix("0B")) {
        (Radix::Binary, stripped)
    } else {
        (Radix::Decimal, rest)
    };

    if rest.is_empty() {
        return Err(ArithError::ParseInvalid);
    }

    let mut digits = String::with_capacity(rest.len());
    let mut saw_digit = false;
    for c in rest.chars() {
        if c == '_' {
            continue;
        }
        let valid = match radix {
            Radix::Decimal => c.is_ascii_digit(),
            Radix::Hex => c.is_ascii_hexdigit(),
            Radix::Octal => ('0'..='7').contains(&c),
            Radix::Binary => c == '0' || c == '1',
        };
        if !valid {
            return Err(ArithError::ParseInvalid);
        }
        saw_digit = true;
        digits.push(c);
    }
    if !saw_digit {
        return Err(ArithError::ParseInvalid);
    }

    Ok((negative, radix, digits))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_integer() {
        let p = parse_decimal("12345").unwrap();
        assert_eq!(p.digits, "12345");
        assert_eq!(p.scale, 0);
        assert!(!p.negative);
    }

    #[test]
    fn parses_signed_fraction() {
        let p = parse_decimal("-123.456").unwrap();
        assert!(p.negative);
        assert_eq!(p.digits, "123456");
        assert_eq!(p.scale, 3);
    }

    #[test]
    fn parses_exponent_form() {
        let p = parse_decimal("1.23E-5").unwrap();
        assert_eq!(p.digits, "123");
        // frac_len = 2, exponent = -5 => scale = 2 - (-5) = 7
        assert_eq!(p.scale, 7);
    }

    #[test]
    fn parses_leading_dot() {
        let p = parse_decimal(".5").unwrap();
        assert_eq!(p.digits, "5");
        assert_eq!(p.scale, 1);
    }

    #[test]
    fn underscores_are_grouping_separators() {
        let p = parse_decimal("1_000_000.5").unwrap();
        assert_eq!(p.digits, "10000005");
        assert_eq!(p.scale, 1);
    }

    #[test]
    fn rejects_bare_sign() {
        assert_eq!(parse_decimal("+"), Err(ArithError::ParseInvalid));
        assert_eq!(parse_decimal("-"), Err(ArithError::ParseInvalid));
    }

    #[test]
    fn rejects_dangling_exponent() {
        assert_eq!(parse_decimal("1e"), Err(ArithError::ParseInvalid));
        assert_eq!(parse_decimal("1e+"), Err(ArithError::ParseInvalid));
    }

    #[test]
    fn rejects_no_digits_at_all() {
        assert_eq!(parse_decimal("."), Err(ArithError::ParseInvalid));
        assert_eq!(parse_decimal(""), Err(ArithError::ParseInvalid));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_decimal("12a3"), Err(ArithError::ParseInvalid));
        assert_eq!(parse_decimal("1.2.3"), Err(ArithError::ParseInvalid));
    }

    #[test]
    fn splits_hex_prefix() {
        let (neg, radix, digits) = split_integer_radix("-0xFF_00").unwrap();
        assert!(neg);
        assert_eq!(radix, Radix::Hex);
        assert_eq!(digits, "FF00");
    }

    #[test]
    fn splits_plain_decimal_as_no_prefix() {
        let (neg, radix, digits) = split_integer_radix("42").unwrap();
        assert!(!neg);
        assert_eq!(radix, Radix::Decimal);
        assert_eq!(digits, "42");
    }

    #[test]
    fn rejects_empty_digit_run_after_prefix() {
        assert_eq!(split_integer_radix("0x"), Err(ArithError::ParseInvalid));
    }
}
