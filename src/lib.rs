//! Finite-field secret sharing and group key agreement.
//!
//! This crate provides a small prime-field engine and two protocol
//! families built on it: threshold secret sharing and multi-party key
//! agreement. Together they let a group agree on a master value and then
//! put that value into threshold custody.
//!
//! The focus is on **clarity and predictability**: every component takes
//! its field explicitly, there is no global modulus, and every operation
//! is synchronous and free of I/O.
//!
//! # Module overview
//!
//! - `field`
//!   Arithmetic modulo a verified prime: reduction, addition,
//!   multiplication, exponentiation and inversion. Every other module
//!   routes its arithmetic through a [`field::PrimeField`].
//!
//! - `recovery`
//!   **Shamir Secret Sharing** over a prime field: splitting a secret into
//!   `n` shares with threshold `t`, Lagrange reconstruction at zero, and
//!   share refresh without reconstruction.
//!
//! - `agreement`
//!   Multi-party key agreement by iterated exponentiation, in a
//!   sequential (chain) and a circular (round-based) topology, both
//!   producing `g^(a₁·…·aₙ) mod p`.
//!
//! - `escrow`
//!   Runs an agreement and deals the agreed value into shares.
//!
//! - `config`
//!   Default toy parameters and the topology selector.
//!
//! - `metrics`
//!   Per-participant exponentiation counters for cost comparisons.
//!
//! - `rng`
//!   ChaCha20-based randomness, seeded from the OS or explicitly.
//!
//! # Security scope
//!
//! The default parameters (`p = 2357`, `p = 2089`) are toy values. The key
//! agreement has no authentication and no key confirmation. This crate is
//! meant for studying the constructions, not for protecting real secrets.

pub mod agreement;
pub mod config;
pub mod error;
pub mod escrow;
pub mod field;
pub mod metrics;
pub mod recovery;
pub mod rng;

pub use error::{Error, Result};
