//! String parsing for [`Int`]: decimal via the shared
//! parser, plus `0x`/`0o`/`0b` radix prefixes for hex/octal/binary.

use crate::errors::{ArithError, ArithResult};
use crate::int::{Int, Sign};
use crate::magnitude::binary::{self, BinaryMagnitude};
use crate::parser::{self, Radix};
use std::str::FromStr;

impl FromStr for Int {
    type Err = ArithError;

    fn from_str(s: &str) -> ArithResult<Self> {
        let (negative, radix, digits) = parser::split_integer_radix(s)?;
        let magnitude = match radix {
            Radix::Decimal => BinaryMagnitude::from_limbs(binary::from_decimal_string(&digits)?),
            Radix::Hex => from_radix_digits(&digits, 16, 4)?,
            Radix::Octal => from_radix_digits(&digits, 8, 3)?,
            Radix::Binary => from_radix_digits(&digits, 2, 1)?,
        };
        let sign = if negative { Sign::Negative } else { Sign::NonNegative };
        Ok(Int::new(magnitude, sign))
    }
}

/// Accumulates a digit run of the given power-of-two `radix` into a
/// [`BinaryMagnitude`] via repeated shift-and-add; `bits_per_digit` (2, 3,
/// or 4 for binary/octal/hex) lets this use a cheap left-shift rather than
/// a full multiply per digit, since every non-decimal radix this crate
/// accepts is a power of two.
fn from_radix_digits(digits: &str, radix: u32, bits_per_digit: u32) -> ArithResult<BinaryMagnitude> {
    let mut acc = BinaryMagnitude::zero();
    for c in digits.chars() {
        let d = c.to_digit(radix).ok_or(ArithError::ParseInvalid)?;
        acc = acc.shl(bits_per_digit).add(&BinaryMagnitude::from(d));
    }
    Ok(acc)
}
