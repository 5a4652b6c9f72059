//! Decimal-string conversion for decadic-radix magnitudes.
//!
//! Trivial by construction: each limb already holds exactly nine decimal
//! digits, so printing is a matter of writing the most-significant limb
//! without zero-padding and every lower limb zero-padded to nine digits,
//! and parsing is the same chunking in reverse.

use crate::errors::{ArithError, ArithResult};
use crate::magnitude::decadic::{normalize, significant_len, DIGITS_PER_LIMB, RADIX};

/// Renders `limbs` as a decimal string with no sign and no leading zeros
/// (`"0"` for zero).
#[must_use]
pub fn to_decimal_string(limbs: &[u32]) -> String {
    let n = significant_len(limbs);
    if n == 0 {
        return "0".to_string();
    }
    let mut s = limbs[n - 1].to_string();
    for i in (0..n - 1).rev() {
        s.push_str(&format!("{:0width$}", limbs[i], width = DIGITS_PER_LIMB as usize));
    }
    s
}

/// Parses an unsigned run of ASCII decimal digits (no sign, no separators,
/// leading zeros permitted) into canonical decadic limbs.
pub fn from_decimal_string(digits: &str) -> ArithResult<Vec<u32>> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ArithError::ParseInvalid);
    }
    let bytes = digits.as_bytes();
    let chunk = DIGITS_PER_LIMB as usize;
    let first_len = match bytes.len() % chunk {
        0 => chunk,
        r => r,
    };
    let mut limbs = Vec::with_capacity(bytes.len().div_ceil(chunk));
    limbs.push(digits[..first_len].parse::<u32>().expect("validated digits"));
    let mut i = first_len;
    while i < bytes.len() {
        limbs.push(digits[i..i + chunk].parse::<u32>().expect("validated digits"));
        i += chunk;
    }
    limbs.reverse();
    debug_assert!(limbs.iter().all(|&l| l < RADIX));
    normalize(&mut limbs);
    Ok(limbs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_round_trips() {
        assert_eq!(to_decimal_string(&[0]), "0");
        assert_eq!(from_decimal_string("0").unwrap(), vec![0]);
    }

    #[test]
    fn lower_limbs_are_zero_padded_to_nine_digits() {
        // limb[0] = 5 (needs zero-padding), limb[1] = 1 -> "1" + "000000005"
        assert_eq!(to_decimal_string(&[5, 1]), "1000000005");
    }

    #[test]
    fn round_trips_past_one_limb() {
        let s = "123456789012345";
        let limbs = from_decimal_string(s).unwrap();
        assert_eq!(to_decimal_string(&limbs), s);
    }

    #[test]
    fn leading_zeros_are_tolerated_on_parse() {
        assert_eq!(from_decimal_string("00042").unwrap(), vec![42]);
    }

    #[test]
    fn rejects_non_digit_input() {
        assert_eq!(from_decimal_string("12a3"), Err(ArithError::ParseInvalid));
        assert_eq!(from_decimal_string(""), Err(ArithError::ParseInvalid));
    }
}
