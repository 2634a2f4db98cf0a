//! Random number generation module
//!
//! This module provides the randomness used for polynomial coefficients,
//! share refresh and private exponents.
//!
//! It is built around a ChaCha20-based generator seeded by the operating
//! system, and every randomness-consuming operation in the crate is generic
//! over `rand::RngCore + rand::CryptoRng`, so callers may substitute their
//! own source or a fixed seed for reproducible runs.
mod csprng;

/// Cryptographically secure pseudorandom number generator.
///
/// This type is the default randomness source for the crate.
pub use csprng::Csprng;
