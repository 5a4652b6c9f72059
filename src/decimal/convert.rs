//! String and native-type conversions for [`Decimal`].
//!
//! `Display` renders plain notation for scales that keep the digit count
//! reasonable and scientific notation once the exponent would otherwise
//! demand an unreasonable run of zeros, the same plain/scientific switch
//! CPython's `decimal.Decimal.__str__` makes. [`Decimal::to_eng_string`]
//! is the engineering variant: the exponent is always a multiple of three.

use crate::decimal::Decimal;
use crate::errors::{ArithError, ArithResult};
use crate::int::Sign;
use crate::magnitude::decadic::{self, DecadicMagnitude};
use crate::parser;
use std::fmt;
use std::str::FromStr;

/// The `(sign, digit_tuple, exponent)` view of a [`Decimal`], mirroring
/// CPython `decimal.Decimal.as_tuple()`: `sign` is `1` for negative, `0`
/// otherwise; `digits` is the coefficient's individual decimal digits,
/// most significant first; `exponent` is `-scale`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecimalTuple {
    pub sign: u32,
    pub digits: Vec<u8>,
    pub exponent: i64,
}

impl Decimal {
    /// Decomposes into sign, per-digit coefficient, and exponent.
    #[must_use]
    pub fn as_tuple(&self) -> DecimalTuple {
        let s = decadic::to_decimal_string(self.coefficient.limbs());
        let digits = s.bytes().map(|b| b - b'0').collect();
        DecimalTuple { sign: if self.is_negative() { 1 } else { 0 }, digits, exponent: -self.scale }
    }

    /// Rebuilds a [`Decimal`] from a [`DecimalTuple`]. Fails with
    /// [`ArithError::ParseInvalid`] if any digit is out of `0..=9` range or
    /// the digit list is empty.
    pub fn from_tuple(tuple: &DecimalTuple) -> ArithResult<Self> {
        if tuple.digits.is_empty() || tuple.digits.iter().any(|&d| d > 9) {
            return Err(ArithError::ParseInvalid);
        }
        let digit_str: String = tuple.digits.iter().map(|&d| (d + b'0') as char).collect();
        let coefficient = DecadicMagnitude::from_limbs(decadic::from_decimal_string(&digit_str)?);
        let sign = if tuple.sign != 0 { Sign::Negative } else { Sign::NonNegative };
        Ok(Decimal::new(coefficient, -tuple.exponent, sign))
    }
}

impl FromStr for Decimal {
    type Err = ArithError;

    fn from_str(s: &str) -> ArithResult<Self> {
        let parsed = parser::parse_decimal(s)?;
        let coefficient = DecadicMagnitude::from_limbs(decadic::from_decimal_string(&parsed.digits)?);
        let sign = if parsed.negative { Sign::Negative } else { Sign::NonNegative };
        Ok(Decimal::new(coefficient, parsed.scale, sign))
    }
}

/// Above this many leading zeros between the decimal point and the first
/// significant digit (or this much run-out beyond the coefficient on the
/// integer side), `Display` switches from plain to scientific notation —
/// the same threshold CPython's `decimal` module uses.
const PLAIN_NOTATION_EXPONENT_LIMIT: i64 = 6;

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-")?;
        }
        let digits = decadic::to_decimal_string(self.coefficient.limbs());
        let adjusted_exponent = digits.len() as i64 - 1 - self.scale;

        if self.scale >= 0 && adjusted_exponent >= -PLAIN_NOTATION_EXPONENT_LIMIT {
            write_plain_with_point(f, &digits, self.scale)
        } else {
            write_scientific(f, &digits, adjusted_exponent, 1)
        }
    }
}

impl Decimal {
    /// Engineering notation: same as [`Display`](fmt::Display) but the
    /// exponent is always a multiple of three, shifting the decimal point
    /// within the leading group of up to three digits.
    #[must_use]
    pub fn to_eng_string(&self) -> String {
        let mut out = String::new();
        if self.is_negative() {
            out.push('-');
        }
        let digits = decadic::to_decimal_string(self.coefficient.limbs());
        let adjusted_exponent = digits.len() as i64 - 1 - self.scale;
        let eng_exponent = adjusted_exponent.div_euclid(3) * 3;
        let _ = write_scientific_into(&mut out, &digits, adjusted_exponent, eng_exponent);
        out
    }
}

fn write_plain_with_point(f: &mut fmt::Formatter<'_>, digits: &str, scale: i64) -> fmt::Result {
    let scale = scale as usize;
    if scale == 0 {
        return write!(f, "{digits}");
    }
    if digits.len() <= scale {
        let zeros = "0".repeat(scale - digits.len());
        write!(f, "0.{zeros}{digits}")
    } else {
        let split = digits.len() - scale;
        write!(f, "{}.{}", &digits[..split], &digits[split..])
    }
}

/// Writes `digits` in scientific notation with the decimal point placed
/// `group_len` digits in from the left and an explicit `E` exponent equal
/// to `adjusted_exponent - (group_len - 1)`.
fn write_scientific(f: &mut fmt::Formatter<'_>, digits: &str, adjusted_exponent: i64, group_len: usize) -> fmt::Result {
    let mut s = String::new();
    write_scientific_into(&mut s, digits, adjusted_exponent, adjusted_exponent - (group_len as i64 - 1))?;
    write!(f, "{s}")
}

fn write_scientific_into(out: &mut String, digits: &str, adjusted_exponent: i64, eng_exponent: i64) -> fmt::Result {
    let group_len = (adjusted_exponent - eng_exponent + 1) as usize;
    let padded;
    let digits = if digits.len() < group_len {
        padded = format!("{digits}{}", "0".repeat(group_len - digits.len()));
        padded.as_str()
    } else {
        digits
    };
    if group_len >= digits.len() {
        out.push_str(digits);
    } else {
        out.push_str(&digits[..group_len]);
        out.push('.');
        out.push_str(&digits[group_len..]);
    }
    if eng_exponent != 0 {
        out.push('E');
        if eng_exponent > 0 {
            out.push('+');
        }
        out.push_str(&eng_exponent.to_string());
    }
    Ok(())
}

macro_rules! impl_decimal_from_signed_int {
    ($($t:ty),*) => {$(
        impl From<$t> for Decimal {
            fn from(value: $t) -> Self {
                let sign = if value < 0 { Sign::Negative } else { Sign::NonNegative };
                Decimal::new(DecadicMagnitude::from((value as i128).unsigned_abs() as u64), 0, sign)
            }
        }
    )*};
}
impl_decimal_from_signed_int!(i8, i16, i32, i64, isize);

macro_rules! impl_decimal_from_unsigned_int {
    ($($t:ty),*) => {$(
        impl From<$t> for Decimal {
            fn from(value: $t) -> Self {
                Decimal::new(DecadicMagnitude::from(value as u64), 0, Sign::NonNegative)
            }
        }
    )*};
}
impl_decimal_from_unsigned_int!(u8, u16, u32, u64, usize);
