//! Cryptographic recovery primitives.
//!
//! This module provides mechanisms to protect and recover sensitive
//! material in the presence of partial data loss or compromise.
//!
//! # Shamir Secret Sharing (SSS)
//!
//! The `shamirsecretsharing` submodule provides **Shamir Secret Sharing**
//! over a prime field. A secret is split into multiple *shares* such that:
//!
//! - Any subset of at least `t` shares can reconstruct the original secret.
//! - Any subset of fewer than `t` shares reveals no information about it.
//!
//! ## Provided functionality
//!
//! - **Splitting**: a secret is split into `n` shares with threshold `t`.
//! - **Reconstruction**: Lagrange interpolation at zero over any subset of
//!   shares.
//! - **Refreshing**: existing shares are renewed without reconstructing the
//!   secret.
//!
//! This module is intentionally minimal and does not include:
//! - authentication or MACs for shares
//! - serialization or networking logic
//! - access control or recovery policies

mod sss;

pub use sss::core as shamirsecretsharing;
pub use sss::polynomial::Polynomial;
