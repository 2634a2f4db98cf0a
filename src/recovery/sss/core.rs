//! Shamir Secret Sharing (SSS) core implementation.
//!
//! This module provides the public API for **Shamir Secret Sharing** over a
//! prime field. A secret field element is divided into `n` *shares* such
//! that:
//!
//! - Any subset of at least `threshold` shares reconstructs the secret.
//! - Any subset of fewer than `threshold` shares reveals nothing about it.
//!
//! ## Provided operations
//!
//! - [`split`]
//!   Split a secret into `n` shares with a configurable threshold.
//!
//! - [`reconstruct`]
//!   Recover the secret from shares by Lagrange interpolation at zero.
//!
//! - [`refresh`]
//!   Renew shares without ever reconstructing the secret.
//!
//! - [`SharingSession`]
//!   Binds `(n, threshold)` to the shares of one dealing and discards the
//!   dealer polynomial.
//!
//! ## Threshold semantics
//!
//! Reconstruction is never checked against the threshold. Shares do not
//! record the threshold they were dealt with, so [`reconstruct`] cannot
//! tell whether it received enough of them: given fewer than `threshold`
//! shares it returns a field element with no relation to the secret and
//! does not fail. [`SharingSession::reconstruct`] does not check either;
//! it interpolates over every share the session holds.
//!
//! ## Scope and limitations
//!
//! This module does **not** provide:
//!
//! - authentication or integrity protection for shares
//! - resistance against malicious or byzantine participants
//! - serialization, storage, or transport mechanisms

use std::collections::HashSet;

use rand::{CryptoRng, RngCore};
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::field::{FieldElement, PrimeField};
use crate::recovery::sss::polynomial::Polynomial;

/// A single Shamir share: the dealer polynomial evaluated at `index`.
///
/// A share is only meaningful together with other shares of the same
/// dealing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Share {
    /// Share identifier (x-coordinate), in `1..=n`.
    ///
    /// Never zero: `f(0)` is the secret itself.
    pub index: u64,

    /// Polynomial evaluation `f(index)`.
    pub value: FieldElement,
}

fn check_parameters(field: &PrimeField, share_count: usize, threshold: usize) -> Result<()> {
    if threshold == 0 || threshold > share_count {
        return Err(Error::InvalidThreshold {
            threshold,
            share_count,
        });
    }

    // Indices 1..=n must stay distinct and non-zero modulo p.
    if share_count as u128 >= field.modulus() as u128 {
        return Err(Error::InvalidShareCount {
            share_count,
            modulus: field.modulus(),
        });
    }

    Ok(())
}

/// Splits a secret into `share_count` shares with the given threshold.
///
/// Returns the dealer polynomial together with the shares `(1, f(1))` to
/// `(n, f(n))`, in index order. The polynomial reveals the secret; drop it
/// once the shares have been distributed.
///
/// # Errors
///
/// - [`Error::InvalidThreshold`] unless `1 ≤ threshold ≤ share_count`
/// - [`Error::InvalidShareCount`] if `share_count ≥ p`
pub fn split<R: RngCore + CryptoRng + ?Sized>(
    field: &PrimeField,
    secret: FieldElement,
    share_count: usize,
    threshold: usize,
    rng: &mut R,
) -> Result<(Polynomial, Vec<Share>)> {
    check_parameters(field, share_count, threshold)?;

    let poly = Polynomial::generate(field, secret, threshold, rng)?;

    let shares = (1..=share_count as u64)
        .map(|index| Share {
            index,
            value: poly.evaluate(field.element(index)),
        })
        .collect();

    debug!(share_count, threshold, modulus = field.modulus(), "split secret");

    Ok((poly, shares))
}

/// Reconstructs the secret from a set of shares.
///
/// Computes `f(0) = Σ yᵢ · Lᵢ(0)` with
///
/// ```text
/// Lᵢ(0) = Π_{j≠i} (0 - xⱼ) / (xᵢ - xⱼ)
/// ```
///
/// over all provided shares. The order of the shares does not matter.
///
/// With at least `threshold` shares of the same dealing the result is the
/// secret. With fewer, the result is an arbitrary field element; see the
/// module documentation.
///
/// # Errors
///
/// - [`Error::NoShares`] if `shares` is empty
/// - [`Error::InvalidShareIndex`] if an index is congruent to zero
/// - [`Error::DuplicateShareIndex`] if two indices coincide modulo `p`
pub fn reconstruct(field: &PrimeField, shares: &[Share]) -> Result<FieldElement> {
    if shares.is_empty() {
        return Err(Error::NoShares);
    }

    if let Some(s) = shares.iter().find(|s| field.element(s.index).is_zero()) {
        return Err(Error::InvalidShareIndex { index: s.index });
    }

    let mut acc = FieldElement::ZERO;

    for (i, si) in shares.iter().enumerate() {
        let xi = field.element(si.index);
        let mut basis = FieldElement::ONE;

        for (j, sj) in shares.iter().enumerate() {
            if i == j {
                continue;
            }

            let xj = field.element(sj.index);
            let den = field
                .inverse(field.sub(xi, xj))
                .map_err(|_| Error::DuplicateShareIndex { index: si.index })?;

            basis = field.mul(basis, field.mul(field.neg(xj), den));
        }

        acc = field.add(acc, field.mul(si.value, basis));
    }

    trace!(shares = shares.len(), "reconstructed secret");

    Ok(acc)
}

/// Refreshes a set of shares without reconstructing the secret.
///
/// A random polynomial `g` of degree `threshold - 1` with `g(0) = 0` is
/// added to every share:
///
/// ```text
/// y' = y + g(x)
/// ```
///
/// The secret is unchanged, and old shares no longer combine with new
/// ones.
///
/// # Errors
///
/// - [`Error::NoShares`] if `shares` is empty
/// - [`Error::InvalidThreshold`] unless `1 ≤ threshold ≤ shares.len()`
/// - [`Error::InvalidShareIndex`] or [`Error::DuplicateShareIndex`] for
///   malformed index sets
pub fn refresh<R: RngCore + CryptoRng + ?Sized>(
    field: &PrimeField,
    shares: &[Share],
    threshold: usize,
    rng: &mut R,
) -> Result<Vec<Share>> {
    if shares.is_empty() {
        return Err(Error::NoShares);
    }

    if threshold == 0 || threshold > shares.len() {
        return Err(Error::InvalidThreshold {
            threshold,
            share_count: shares.len(),
        });
    }

    let mut seen = HashSet::with_capacity(shares.len());
    for s in shares {
        let x = field.element(s.index);
        if x.is_zero() {
            return Err(Error::InvalidShareIndex { index: s.index });
        }
        if !seen.insert(x) {
            return Err(Error::DuplicateShareIndex { index: s.index });
        }
    }

    let blinding = Polynomial::generate(field, FieldElement::ZERO, threshold, rng)?;

    let refreshed = shares
        .iter()
        .map(|s| Share {
            index: s.index,
            value: field.add(s.value, blinding.evaluate(field.element(s.index))),
        })
        .collect();

    debug!(shares = shares.len(), threshold, "refreshed shares");

    Ok(refreshed)
}

/// The shares of one dealing, together with its `(n, threshold)` pair.
///
/// The dealer polynomial is dropped inside [`SharingSession::deal`] and is
/// never stored alongside the shares.
#[derive(Clone, Debug)]
pub struct SharingSession {
    field: PrimeField,
    threshold: usize,
    shares: Vec<Share>,
}

impl SharingSession {
    /// Splits `secret` into `share_count` shares and keeps only the shares.
    ///
    /// # Errors
    ///
    /// Same as [`split`].
    pub fn deal<R: RngCore + CryptoRng + ?Sized>(
        field: &PrimeField,
        secret: FieldElement,
        share_count: usize,
        threshold: usize,
        rng: &mut R,
    ) -> Result<Self> {
        let (_, shares) = split(field, secret, share_count, threshold, rng)?;

        Ok(Self {
            field: *field,
            threshold,
            shares,
        })
    }

    pub fn field(&self) -> &PrimeField {
        &self.field
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    pub fn share_count(&self) -> usize {
        self.shares.len()
    }

    /// Shares in index order.
    pub fn shares(&self) -> &[Share] {
        &self.shares
    }

    /// Returns the share with the given index, if any.
    pub fn share(&self, index: u64) -> Option<&Share> {
        self.shares.iter().find(|s| s.index == index)
    }

    /// Reconstructs the secret from every share of the session.
    pub fn reconstruct(&self) -> Result<FieldElement> {
        reconstruct(&self.field, &self.shares)
    }

    /// Renews every share in place; the secret is unchanged.
    pub fn refresh<R: RngCore + CryptoRng + ?Sized>(&mut self, rng: &mut R) -> Result<()> {
        self.shares = refresh(&self.field, &self.shares, self.threshold, rng)?;
        Ok(())
    }
}
