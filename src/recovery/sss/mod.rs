//! Shamir Secret Sharing (SSS) implementation.
//!
//! The implementation is split into two layers:
//!
//! - [`core`]
//!   Public API and protocol logic: share representation, parameter
//!   validation, splitting, reconstruction, refresh and sharing sessions.
//!
//! - [`polynomial`]
//!   The dealer polynomial `f(x) = secret + a₁·x + … + a_{t-1}·x^{t-1}`
//!   and its evaluation.
//!
//! All arithmetic is delegated to a [`PrimeField`](crate::field::PrimeField)
//! passed in by the caller; there is no module-level modulus.
//!
//! ## Design notes
//!
//! - Share identifiers are non-zero field elements and must be unique.
//! - The dealer polynomial is zeroed on drop.
//! - Share refresh renews shares without ever reconstructing the secret.
//!
//! ## Security scope
//!
//! This module provides **confidentiality through threshold secrecy**.
//! It does not provide:
//! - authentication or integrity protection for shares
//! - resistance against malicious or byzantine participants
//! - serialization, storage, or transport mechanisms

pub mod core;
pub mod polynomial;
