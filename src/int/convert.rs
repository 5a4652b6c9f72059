//! Conversions between [`Int`] and native integer types.

use crate::errors::{ArithError, ArithResult};
use crate::int::{Int, Sign};
use crate::magnitude::binary::BinaryMagnitude;

fn magnitude_from_u128(value: u128) -> BinaryMagnitude {
    BinaryMagnitude::from_limbs(vec![
        value as u32,
        (value >> 32) as u32,
        (value >> 64) as u32,
        (value >> 96) as u32,
    ])
}

fn magnitude_to_u128(mag: &BinaryMagnitude) -> ArithResult<u128> {
    let limbs = mag.limbs();
    if limbs.len() > 4 {
        return Err(ArithError::OverflowToNative);
    }
    let mut v: u128 = 0;
    for (i, &limb) in limbs.iter().enumerate() {
        v |= (limb as u128) << (32 * i as u32);
    }
    Ok(v)
}

macro_rules! impl_from_small_unsigned {
    ($($t:ty),*) => {$(
        impl From<$t> for Int {
            fn from(value: $t) -> Self {
                Int::new(BinaryMagnitude::from(value as u64), Sign::NonNegative)
            }
        }
    )*};
}
impl_from_small_unsigned!(u8, u16, u32, u64, usize);

impl From<u128> for Int {
    fn from(value: u128) -> Self {
        Int::new(magnitude_from_u128(value), Sign::NonNegative)
    }
}

macro_rules! impl_from_small_signed {
    ($($t:ty),*) => {$(
        impl From<$t> for Int {
            fn from(value: $t) -> Self {
                if value < 0 {
                    Int::new(BinaryMagnitude::from((value as i64).unsigned_abs()), Sign::Negative)
                } else {
                    Int::new(BinaryMagnitude::from(value as u64), Sign::NonNegative)
                }
            }
        }
    )*};
}
impl_from_small_signed!(i8, i16, i32, i64, isize);

impl From<i128> for Int {
    fn from(value: i128) -> Self {
        if value < 0 {
            Int::new(magnitude_from_u128(value.unsigned_abs()), Sign::Negative)
        } else {
            Int::new(magnitude_from_u128(value as u128), Sign::NonNegative)
        }
    }
}

impl Int {
    /// `|self|` widened to `u128`. Fails with
    /// [`ArithError::OverflowToNative`] past 128 bits.
    pub fn to_u128(&self) -> ArithResult<u128> {
        if self.is_negative() {
            return Err(ArithError::OverflowToNative);
        }
        magnitude_to_u128(&self.magnitude)
    }

    /// `self` widened to `i128`. Fails with
    /// [`ArithError::OverflowToNative`] outside `i128`'s range.
    pub fn to_i128(&self) -> ArithResult<i128> {
        let m = magnitude_to_u128(&self.magnitude)?;
        if self.is_negative() {
            if m > i128::MAX as u128 + 1 {
                return Err(ArithError::OverflowToNative);
            }
            if m == i128::MAX as u128 + 1 {
                return Ok(i128::MIN);
            }
            Ok(-(m as i128))
        } else {
            if m > i128::MAX as u128 {
                return Err(ArithError::OverflowToNative);
            }
            Ok(m as i128)
        }
    }
}

macro_rules! impl_try_from_via_i128 {
    ($($t:ty),*) => {$(
        impl TryFrom<&Int> for $t {
            type Error = ArithError;
            fn try_from(value: &Int) -> ArithResult<$t> {
                let v = value.to_i128()?;
                <$t>::try_from(v).map_err(|_| ArithError::OverflowToNative)
            }
        }
    )*};
}
impl_try_from_via_i128!(i8, i16, i32, i64, isize, i128);

macro_rules! impl_try_from_via_u128 {
    ($($t:ty),*) => {$(
        impl TryFrom<&Int> for $t {
            type Error = ArithError;
            fn try_from(value: &Int) -> ArithResult<$t> {
                let v = value.to_u128()?;
                <$t>::try_from(v).map_err(|_| ArithError::OverflowToNative)
            }
        }
    )*};
}
impl_try_from_via_u128!(u8, u16, u32, u64, usize, u128);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_unsigned_round_trips() {
        let x = Int::from(42u8);
        assert_eq!(u8::try_from(&x).unwrap(), 42u8);
    }

    #[test]
    fn small_signed_round_trips() {
        let x = Int::from(-42i32);
        assert_eq!(i32::try_from(&x).unwrap(), -42i32);
    }

    #[test]
    fn u128_boundary_round_trips() {
        let x = Int::from(u128::MAX);
        assert_eq!(x.to_u128().unwrap(), u128::MAX);
    }

    #[test]
    fn i128_min_round_trips() {
        let x = Int::from(i128::MIN);
        assert_eq!(x.to_i128().unwrap(), i128::MIN);
    }

    #[test]
    fn negative_to_unsigned_native_overflows() {
        let x = Int::from(-1i32);
        assert_eq!(u32::try_from(&x), Err(ArithError::OverflowToNative));
    }

    #[test]
    fn oversized_value_overflows_native_width() {
        let x = Int::from(u128::MAX);
        assert_eq!(u8::try_from(&x), Err(ArithError::OverflowToNative));
    }
}
