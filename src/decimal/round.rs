//! Rounding, `quantize`, and `normalize` for [`Decimal`].

use crate::decimal::Decimal;
use crate::int::Sign;
use crate::magnitude::decadic::{self, DecadicMagnitude};
use crate::rounding::{CutoffOrdering, RoundingMode};

/// Drops the least-significant `drop` decimal digits from `coeff`,
/// rounding the kept digits per `mode`; `drop == 0` is a cheap clone. The
/// rounding step may itself carry a new most-significant digit (e.g.
/// rounding `995` to two digits at `HalfEven` yields `100`, one digit
/// longer than the drop count alone would suggest) — callers that need an
/// exact target digit count must re-check `digit_count()` afterward.
pub(crate) fn round_drop_digits(coeff: &DecadicMagnitude, drop: u32, sign: Sign, mode: RoundingMode) -> DecadicMagnitude {
    if drop == 0 {
        return coeff.clone();
    }
    let divisor = pow10(drop);
    let (q, r) = decadic::div_rem(coeff.limbs(), divisor.limbs()).expect("divisor is a nonzero power of ten");
    let q_mag = DecadicMagnitude::from_limbs(q);
    let r_mag = DecadicMagnitude::from_limbs(r);

    let cutoff = if r_mag.is_zero() {
        CutoffOrdering::Zero
    } else {
        let twice_r = r_mag.add(&r_mag);
        match twice_r.cmp(&divisor) {
            std::cmp::Ordering::Less => CutoffOrdering::LessThanHalf,
            std::cmp::Ordering::Equal => CutoffOrdering::ExactlyHalf,
            std::cmp::Ordering::Greater => CutoffOrdering::MoreThanHalf,
        }
    };
    let kept_digit_is_odd = q_mag.limbs()[0] % 2 == 1;

    if mode.should_round_up(sign == Sign::Negative, cutoff, kept_digit_is_odd) {
        q_mag.add(&DecadicMagnitude::from(1u32))
    } else {
        q_mag
    }
}

pub(crate) fn pow10(n: u32) -> DecadicMagnitude {
    DecadicMagnitude::from_limbs(decadic::scale_up(&[1], n))
}

impl Decimal {
    /// Rounds to exactly `target_scale` fractional digits: pads with
    /// trailing zeros if `target_scale` is larger than the current scale,
    /// otherwise shifts off the excess digits under `mode`.
    #[must_use]
    pub fn round(&self, target_scale: i64, mode: RoundingMode) -> Self {
        if target_scale >= self.scale {
            let pad = (target_scale - self.scale) as u32;
            let coeff = DecadicMagnitude::from_limbs(decadic::scale_up(self.coefficient.limbs(), pad));
            return Decimal::new(coeff, target_scale, self.sign);
        }
        let drop = (self.scale - target_scale) as u32;
        let coeff = round_drop_digits(&self.coefficient, drop, self.sign, mode);
        Decimal::new(coeff, target_scale, self.sign)
    }

    /// Adopts `template`'s scale exactly, rounding the coefficient under
    /// `mode`. The result has the same scale as `template` even if that
    /// adds or removes trailing zeros.
    #[must_use]
    pub fn quantize(&self, template: &Self, mode: RoundingMode) -> Self {
        self.round(template.scale, mode)
    }

    /// Strips trailing decadic zeros from the coefficient, decreasing the
    /// scale to match. `normalize` is the only place trailing zeros are
    /// ever dropped implicitly — every other operation preserves them.
    #[must_use]
    pub fn normalize(&self) -> Self {
        if self.is_zero() {
            return Decimal::zero();
        }
        let s = decadic::to_decimal_string(self.coefficient.limbs());
        let trimmed = s.trim_end_matches('0');
        let removed = s.len() - trimmed.len();
        let trimmed = if trimmed.is_empty() { "0" } else { trimmed };
        let coeff = DecadicMagnitude::from_limbs(decadic::from_decimal_string(trimmed).expect("digits are valid"));
        Decimal::new(coeff, self.scale - removed as i64, self.sign)
    }
}
