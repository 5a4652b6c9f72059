//! Integer square root on signed integers.

use crate::errors::{ArithError, ArithResult};
use crate::int::{Int, Sign};
use crate::magnitude::binary::{self, BinaryMagnitude};

impl Int {
    /// `floor(sqrt(self))`. Fails with [`ArithError::DomainError`] if
    /// `self` is negative.
    pub fn isqrt(&self) -> ArithResult<Self> {
        if self.is_negative() {
            return Err(ArithError::DomainError);
        }
        let root = binary::isqrt(self.magnitude().limbs());
        Ok(Int::new(BinaryMagnitude::from_limbs(root), Sign::NonNegative))
    }
}
