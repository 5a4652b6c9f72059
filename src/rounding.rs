//! The six rounding modes shared by the decimal and transcendental layers.

/// How to resolve a value that falls between two representable results.
///
/// `HalfEven` is the default used whenever a caller does not supply a mode
/// explicitly, matching the decimal standard this crate's string format
/// (see [`crate::decimal`]) is aligned with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoundingMode {
    /// Discard digits past the cut point; result moves toward zero.
    TruncateTowardZero,
    /// Round the cut digit up in magnitude, away from zero.
    AwayFromZero,
    /// Round half away from zero ("round half up").
    HalfUp,
    /// Round half to the nearest even digit ("banker's rounding").
    #[default]
    HalfEven,
    /// Round toward positive infinity.
    TowardPositiveInfinity,
    /// Round toward negative infinity.
    TowardNegativeInfinity,
}

/// How the discarded tail of a value compares to the midpoint of the
/// current rounding step. Shared by [`crate::decimal`] and
/// [`crate::transcendental`] rounding helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CutoffOrdering {
    /// Nothing was discarded; the value is already exact at this position.
    Zero,
    /// The discarded part is non-zero and strictly less than half a unit
    /// in the last place.
    LessThanHalf,
    /// The discarded part is exactly half a unit in the last place.
    ExactlyHalf,
    /// The discarded part is strictly more than half a unit in the last place.
    MoreThanHalf,
}

impl RoundingMode {
    /// Decides whether to round the kept digits up in magnitude by one unit
    /// in the last place, given the sign of the value and how the discarded
    /// tail compares to the halfway point.
    ///
    /// `kept_digit_is_odd` only matters for [`RoundingMode::HalfEven`].
    #[must_use]
    pub fn should_round_up(self, negative: bool, cutoff: CutoffOrdering, kept_digit_is_odd: bool) -> bool {
        use CutoffOrdering::{ExactlyHalf, LessThanHalf, MoreThanHalf, Zero};
        if cutoff == Zero {
            return false;
        }
        match self {
            RoundingMode::TruncateTowardZero => false,
            RoundingMode::AwayFromZero => true,
            RoundingMode::HalfUp => matches!(cutoff, ExactlyHalf | MoreThanHalf),
            RoundingMode::HalfEven => match cutoff {
                LessThanHalf => false,
                MoreThanHalf => true,
                ExactlyHalf => kept_digit_is_odd,
                Zero => unreachable!(),
            },
            RoundingMode::TowardPositiveInfinity => !negative,
            RoundingMode::TowardNegativeInfinity => negative,
        }
    }
}
