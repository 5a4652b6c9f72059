//! Error taxonomy for the arithmetic core.
//!
//! Every fallible operation in [`magnitude`](crate::magnitude),
//! [`int`](crate::int), [`decimal`](crate::decimal) and
//! [`transcendental`](crate::transcendental) returns `Result<T, ArithError>`.
//! The taxonomy is closed and flat: a caller one layer above the kernel may
//! add context, but never reclassifies an error into a different category.

use std::fmt;

/// The closed set of failure categories the core can surface.
///
/// Variant names are part of the public contract; callers are expected to
/// match on them rather than on `Display` output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithError {
    /// A numeric string did not match the accepted grammar.
    ParseInvalid,
    /// An integer constructor was given a value with a non-zero fractional part.
    ParseNotInteger,
    /// Division, modulo, or inversion by a zero divisor/modulus.
    DivideByZero,
    /// Unsigned subtraction `a - b` was attempted with `a < b`.
    UnsignedUnderflow,
    /// A negative signed value was used to construct an unsigned magnitude.
    NegativeToUnsigned,
    /// `ln`/`sqrt`/`root` of a value outside the function's domain, or
    /// an indeterminate power such as `0^0`.
    DomainError,
    /// An operation required an integer argument (exponent, or integer
    /// conversion of a decimal with a non-zero fractional part) and did
    /// not receive one.
    NotIntegerArgument,
    /// A big value did not fit in the requested fixed-width native type.
    OverflowToNative,
    /// `mod_inverse(a, m)` was requested but `gcd(a, m) != 1`.
    NotInvertible,
}

impl fmt::Display for ArithError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            ArithError::ParseInvalid => "invalid numeric string",
            ArithError::ParseNotInteger => "value has a non-zero fractional part",
            ArithError::DivideByZero => "division by zero",
            ArithError::UnsignedUnderflow => "unsigned subtraction underflowed",
            ArithError::NegativeToUnsigned => "cannot represent a negative value as unsigned",
            ArithError::DomainError => "argument outside the function's domain",
            ArithError::NotIntegerArgument => "argument must be an integer",
            ArithError::OverflowToNative => "value does not fit in the target native type",
            ArithError::NotInvertible => "value has no inverse modulo the given modulus",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for ArithError {}

/// Convenience alias used throughout the core.
pub type ArithResult<T> = Result<T, ArithError>;
