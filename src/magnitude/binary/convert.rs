//! Decimal-string conversion for binary-radix magnitudes.
//!
//! Three regimes by operand size, matching [`super::div`]'s own dispatch
//! philosophy: a native `u64` fast path, a "simple" path that walks 9-digit
//! (`10^9`) chunks linearly, and a divide-and-conquer path above a limb (for
//! `to_decimal_string`) or digit-count (for `from_decimal_string`) threshold
//! that recursively splits around a power of ten and combines the halves.

use crate::errors::{ArithError, ArithResult};
use crate::magnitude::binary::add::add_slices;
use crate::magnitude::binary::div::{div_rem, div_rem_single_limb};
use crate::magnitude::binary::mul::{mul_limb, mul_slices};
use crate::magnitude::binary::{normalize, significant_len};

/// A 9-digit chunk fits in one binary limb (`10^9 < 2^32`).
const CHUNK_DIGITS: usize = 9;
const CHUNK_BASE: u32 = 1_000_000_000;

/// Limb count above which [`to_decimal_string`] switches to the
/// divide-and-conquer path.
const TO_STRING_DC_CUTOFF: usize = 128;

/// Digit count above which [`from_decimal_string`] switches to the
/// divide-and-conquer path.
const FROM_STRING_DC_CUTOFF: usize = 10_000;

/// `10^n` computed by binary exponentiation.
fn pow10(n: usize) -> Vec<u32> {
    let mut result = vec![1u32];
    let mut base = vec![10u32];
    let mut e = n;
    while e > 0 {
        if e & 1 == 1 {
            result = mul_slices(&result, &base);
        }
        base = mul_slices(&base, &base);
        e >>= 1;
    }
    result
}

/// Renders `limbs` (canonical or not) as a decimal string with no sign and
/// no leading zeros (`"0"` for zero).
#[must_use]
pub fn to_decimal_string(limbs: &[u32]) -> String {
    let n = significant_len(limbs);
    if n == 0 {
        return "0".to_string();
    }
    if n <= 2 {
        let lo = limbs[0] as u64;
        let hi = if n == 2 { limbs[1] as u64 } else { 0 };
        return (lo | (hi << 32)).to_string();
    }
    if n <= TO_STRING_DC_CUTOFF {
        return to_decimal_string_simple(&limbs[..n]);
    }
    to_decimal_string_dc(&limbs[..n])
}

fn to_decimal_string_simple(limbs: &[u32]) -> String {
    let mut chunks = Vec::new();
    let mut cur = limbs.to_vec();
    while significant_len(&cur) > 0 {
        let (q, r) = div_rem_single_limb(&cur, CHUNK_BASE);
        chunks.push(r);
        cur = q;
    }
    let mut s = chunks.pop().expect("at least one chunk for a nonzero value").to_string();
    while let Some(c) = chunks.pop() {
        s.push_str(&format!("{c:09}"));
    }
    s
}

fn to_decimal_string_dc(limbs: &[u32]) -> String {
    let half_limbs = (significant_len(limbs) / 2).max(1);
    let half_digits = half_limbs * CHUNK_DIGITS;
    let divisor = pow10(half_digits);
    let (hi, lo) = div_rem(limbs, &divisor).expect("pow10 divisor is nonzero");
    let hi_str = to_decimal_string(&hi);
    let lo_str = to_decimal_string(&lo);
    format!("{hi_str}{lo_str:0>half_digits$}")
}

/// Parses an unsigned run of ASCII decimal digits (no sign, no separators,
/// leading zeros permitted) into canonical limbs.
pub fn from_decimal_string(digits: &str) -> ArithResult<Vec<u32>> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ArithError::ParseInvalid);
    }
    let mut limbs = if digits.len() <= FROM_STRING_DC_CUTOFF {
        from_decimal_string_simple(digits)
    } else {
        from_decimal_string_dc(digits)
    };
    normalize(&mut limbs);
    Ok(limbs)
}

fn from_decimal_string_simple(digits: &str) -> Vec<u32> {
    if digits.len() <= 18 {
        if let Ok(v) = digits.parse::<u64>() {
            let mut out = vec![v as u32, (v >> 32) as u32];
            normalize(&mut out);
            return out;
        }
    }
    let bytes = digits.as_bytes();
    let first_len = match bytes.len() % CHUNK_DIGITS {
        0 => CHUNK_DIGITS,
        r => r,
    };
    let mut acc: Vec<u32> = vec![digits[..first_len].parse().expect("validated digits")];
    let mut i = first_len;
    while i < bytes.len() {
        let chunk: u32 = digits[i..i + CHUNK_DIGITS].parse().expect("validated digits");
        acc = mul_limb(&acc, CHUNK_BASE);
        acc = add_slices(&acc, &[chunk]);
        i += CHUNK_DIGITS;
    }
    acc
}

fn from_decimal_string_dc(digits: &str) -> Vec<u32> {
    if digits.len() <= FROM_STRING_DC_CUTOFF {
        return from_decimal_string_simple(digits);
    }
    let w = digits.len() / 2;
    let (hi_part, lo_part) = digits.split_at(digits.len() - w);
    let hi_val = from_decimal_string_dc(hi_part);
    let lo_val = from_decimal_string_dc(lo_part);
    let scale = pow10(w);
    add_slices(&mul_slices(&hi_val, &scale), &lo_val)
}
