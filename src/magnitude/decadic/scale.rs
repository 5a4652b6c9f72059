//! Scaling a decadic magnitude by a power of ten.
//!
//! Because the decadic radix is `10^9`, scaling by `10^n` splits `n = 9q +
//! r`: the `q` part is a whole-limb shift (prepend/drop `q` zero limbs) and
//! the `r` part is a limb-by-limb multiply or divide by `10^r`.

use crate::magnitude::decadic::div::div_rem_single_limb;
use crate::magnitude::decadic::mul::mul_limb;
use crate::magnitude::decadic::{normalize, significant_len, DIGITS_PER_LIMB};

/// `x * 10^n`.
#[must_use]
pub fn scale_up(x: &[u32], n: u32) -> Vec<u32> {
    let q = (n / DIGITS_PER_LIMB) as usize;
    let r = n % DIGITS_PER_LIMB;
    let mut out = vec![0u32; q];
    let scaled = if r == 0 { x.to_vec() } else { mul_limb(x, 10u32.pow(r)) };
    out.extend_from_slice(&scaled);
    normalize(&mut out);
    out
}

/// `x * 10^n`, rotating the buffer in place by prepending `q` zero limbs
/// rather than allocating a fresh vector for the shift.
pub fn scale_up_in_place(x: &mut Vec<u32>, n: u32) {
    let q = (n / DIGITS_PER_LIMB) as usize;
    let r = n % DIGITS_PER_LIMB;
    if r != 0 {
        let scaled = mul_limb(x, 10u32.pow(r));
        *x = scaled;
    }
    if q > 0 {
        x.splice(0..0, std::iter::repeat(0u32).take(q));
    }
    normalize(x);
}

/// `floor(x / 10^n)`: drops the `q` least-significant whole limbs, then
/// divides the remaining magnitude by `10^r`.
#[must_use]
pub fn scale_down(x: &[u32], n: u32) -> Vec<u32> {
    let q = (n / DIGITS_PER_LIMB) as usize;
    let r = n % DIGITS_PER_LIMB;
    let nx = significant_len(x);
    let dropped: Vec<u32> = if q >= nx { vec![0] } else { x[q..nx].to_vec() };
    let mut out = if r == 0 {
        dropped
    } else {
        let (q_limbs, _) = div_rem_single_limb(&dropped, 10u32.pow(r));
        q_limbs
    };
    normalize(&mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::magnitude::decadic::to_decimal_string;

    #[test]
    fn scale_up_moves_decimal_point_left() {
        let x = vec![123];
        let scaled = scale_up(&x, 9);
        assert_eq!(to_decimal_string(&scaled), "123000000000");
    }

    #[test]
    fn scale_up_handles_sub_limb_remainder() {
        let x = vec![1];
        assert_eq!(to_decimal_string(&scale_up(&x, 2)), "100");
    }

    #[test]
    fn scale_up_in_place_matches_allocating_form() {
        let x = vec![42, 7];
        let mut y = x.clone();
        scale_up_in_place(&mut y, 13);
        assert_eq!(y, scale_up(&x, 13));
    }

    #[test]
    fn scale_down_is_the_floor_divide_dual_of_scale_up() {
        let x = vec![123, 456];
        let up = scale_up(&x, 15);
        let back = scale_down(&up, 15);
        let mut x_norm = x;
        normalize(&mut x_norm);
        assert_eq!(back, x_norm);
    }

    #[test]
    fn scale_down_truncates_toward_zero() {
        assert_eq!(scale_down(&[12345], 2), vec![123]);
    }
}
