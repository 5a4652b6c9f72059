//! Exponentiation by a non-negative integer exponent.
//!
//! The exponent is typed as `u64` rather than `Int`: the systems-language
//! port prefers a type that rules out "negative integer exponent" by
//! construction over a runtime check on a signed argument (see DESIGN.md).

use crate::int::Int;

impl Int {
    /// `self^exp`, right-to-left binary exponentiation. When `self == 2`
    /// this is detected and delegated to a left shift, a one-shot `O(bits)`
    /// operation instead of `O(log exp)` big multiplications.
    #[must_use]
    pub fn pow(&self, exp: u64) -> Self {
        if !self.is_negative() && self.magnitude().limbs() == [2] {
            return Int::one().shl(exp as u32);
        }

        let mut result = Int::one();
        let mut base = self.clone();
        let mut e = exp;
        while e > 0 {
            if e & 1 == 1 {
                result = result.mul(&base);
            }
            base = base.mul(&base);
            e >>= 1;
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn i(v: i64) -> Int {
        Int::from(v)
    }

    #[test]
    fn pow_matches_hand_computed_values() {
        assert_eq!(i(3).pow(4), i(81));
        assert_eq!(i(-2).pow(3), i(-8));
        assert_eq!(i(-2).pow(2), i(4));
        assert_eq!(i(5).pow(0), i(1));
    }

    #[test]
    fn power_of_two_detection_matches_left_shift() {
        for n in [0u64, 1, 5, 32, 100, 32768] {
            assert_eq!(i(2).pow(n), Int::one().shl(n as u32));
        }
    }
}
