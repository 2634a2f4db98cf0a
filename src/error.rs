//! Error type shared by every module of the crate.
//!
//! All failures are detected synchronously at the point of violation and
//! returned to the caller. Nothing is retried internally: every operation
//! in this crate is deterministic arithmetic, so a retry cannot change the
//! outcome.

use thiserror::Error;

/// Errors returned by field arithmetic, secret sharing and key agreement.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The modulus is not prime, or is too small (`p ≤ 3`).
    #[error("modulus {0} is not a prime greater than 3")]
    InvalidModulus(u64),

    /// An inverse was requested for an element congruent to zero.
    #[error("{0} has no multiplicative inverse modulo {1}")]
    NotInvertible(u64, u64),

    /// The threshold lies outside `[1, share_count]`.
    #[error("threshold {threshold} must lie in [1, {share_count}]")]
    InvalidThreshold { threshold: usize, share_count: usize },

    /// More shares were requested than the field has non-zero points.
    #[error("cannot issue {share_count} distinct share indices modulo {modulus}")]
    InvalidShareCount { share_count: usize, modulus: u64 },

    /// Two shares handed to reconstruction carry the same index.
    #[error("duplicate share index {index}")]
    DuplicateShareIndex { index: u64 },

    /// A share index is congruent to zero, the secret's evaluation point.
    #[error("share index {index} is reserved for the secret")]
    InvalidShareIndex { index: u64 },

    /// Reconstruction or refresh was given an empty share set.
    #[error("no shares provided")]
    NoShares,

    /// An agreement run was configured with fewer than two participants.
    #[error("key agreement needs at least 2 participants, got {0}")]
    InsufficientParticipants(usize),

    /// The modulus is too small to admit the private exponent range `[2, p-2]`.
    #[error("modulus {0} admits no private exponent in [2, p-2]")]
    InvalidRange(u64),

    /// A private exponent supplied by the caller lies outside `[2, p-2]`.
    #[error("private exponent {exponent} lies outside [2, {max}]")]
    InvalidExponent { exponent: u64, max: u64 },

    /// The generator is congruent to 0 or 1 and generates nothing useful.
    #[error("generator {0} is degenerate modulo {1}")]
    InvalidGenerator(u64, u64),

    /// A participant was built for different public parameters than the run.
    #[error("participant {0} uses different field parameters than the run")]
    ParameterMismatch(usize),

    /// A participant was asked to exponentiate before holding a private exponent.
    #[error("participant {0} has no private exponent")]
    MissingPrivateExponent(usize),

    /// Circular agreement finished with participants holding different values.
    ///
    /// Always an internal consistency failure; never retried.
    #[error("circular agreement diverged after {rounds} rounds")]
    Diverged { rounds: usize },

    /// A topology tag could not be parsed.
    #[error("unknown agreement topology `{0}`")]
    UnknownTopology(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
