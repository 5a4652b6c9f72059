//! `arbiprec` — the limb-level arbitrary-precision arithmetic core.
//!
//! This crate provides the kernel beneath three user-visible numeric
//! abstractions: an unsigned magnitude, a signed arbitrary-precision
//! integer, and an arbitrary-precision signed decimal. The focus is on
//! **correctness, predictability, and auditability** of the underlying
//! limb arithmetic, not on a large surface area — every operation that is
//! not exact takes an explicit precision argument, and nothing here
//! depends on ambient global state.
//!
//! # Module overview
//!
//! - `errors`
//!   The closed error taxonomy every fallible operation in the crate
//!   returns through. A caller one layer above the kernel may add context
//!   to an error but never reclassifies it into a different category.
//!
//! - `rounding`
//!   The six rounding modes shared by the decimal and transcendental
//!   layers, and the shared "is this tie close enough to round up"
//!   decision they're built on.
//!
//! - `parser`
//!   The shared two-pass decimal-string state machine consumed by both
//!   `int` and `decimal` so the accepted grammar is defined exactly once.
//!
//! - `magnitude`
//!   The limb-level kernel (L1): raw, non-negative limb vectors and the
//!   add/sub/mul/div/shift/base-conversion/sqrt algorithms that operate on
//!   them, in two independently specialised radices — binary (`2^32`) and
//!   decadic (`10^9`).
//!
//! - `int`
//!   The signed arbitrary-precision integer (L2): a sign paired with a
//!   binary magnitude, plus the usual arithmetic, bitwise, and
//!   number-theoretic operations.
//!
//! - `decimal`
//!   The arbitrary-precision signed decimal (L3): a signed decadic
//!   coefficient with an attached scale, CPython-`decimal`-compatible
//!   rounding and string formatting.
//!
//! - `transcendental`
//!   Functions built on top of all three lower layers (L4): `sqrt`, `ln`,
//!   `exp`, `root`, `power`, the six trigonometric functions, and the
//!   precision-keyed constant cache they share.
//!
//! # Design goals
//!
//! - No implicit global precision: every inexact operation takes an
//!   explicit `precision` and [`rounding::RoundingMode`].
//! - No silent corruption: raw, non-canonicalising constructors are named
//!   distinctly (`from_limbs_unchecked`) from their validating
//!   counterparts (`from_limbs`).
//! - Data flows strictly upward — `decimal` reuses `int`'s magnitude
//!   kernel machinery, `transcendental` calls all three, and nothing in
//!   `magnitude` knows about the layers above it.
//!
//! This crate is not a general-purpose numeric tower (no implicit
//! promotion between `Int` and `Decimal`; conversions are explicit `From`/
//! `TryFrom` impls) but a small, controlled foundation for exact and
//! precision-bounded arithmetic.

pub mod decimal;
pub mod errors;
pub mod int;
pub mod magnitude;
pub mod parser;
pub mod rounding;
pub mod transcendental;
