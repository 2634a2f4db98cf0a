//! Prime field arithmetic.
//!
//! Every other module of the crate routes its arithmetic through this
//! one. Polynomial evaluation, Lagrange interpolation and the key
//! agreement exponentiations all use the same [`PrimeField`] value, so
//! they reduce into the same canonical range `[0, p)` and use the same
//! inversion algorithm.
//!
//! ## Structure
//!
//! - `core`
//!   The [`PrimeField`] capability object and the [`FieldElement`] type.
//!
//! - `primality`
//!   Deterministic Miller–Rabin test used to validate the modulus at
//!   construction.
//!
//! A [`PrimeField`] is immutable once built. It is `Copy` and `Sync`, so it
//! can be handed to every component, including worker threads, without
//! any locking.

mod core;
pub(crate) mod primality;

pub use self::core::{FieldElement, PrimeField};
