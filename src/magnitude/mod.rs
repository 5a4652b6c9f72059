//! The limb-level arithmetic kernel (L1).
//!
//! Two concrete, independently specialised magnitude flavours live here:
//! [`binary`] (radix 2^32, little-endian `u32` limbs, used by [`crate::int`])
//! and [`decadic`] (radix 10^9, little-endian `u32` limbs, used by
//! [`crate::decimal`]). They are kept as separate types on purpose — per the
//! design notes, the two radices have materially different thresholds and
//! algorithm choices (Karatsuba vs. Toom-Cook-3, different shift semantics),
//! and almost every call site knows its radix statically. Monomorphised
//! duplication was chosen over a generic `Magnitude<const RADIX: u64>` to
//! keep each specialisation's hot loop free of runtime radix branches.
//!
//! Every routine here that accepts magnitude input takes a `&[u32]` slice
//! view rather than an owned `Vec<u32>` — recursion in
//! [`binary::mul::mul_karatsuba`] and [`binary::div::div_rem_burnikel_ziegler`]
//! relies on being able to address sub-ranges of a buffer without copying.

pub mod binary;
pub mod decadic;
