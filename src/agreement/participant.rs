//! Key agreement participants.
//!
//! A [`Participant`] owns one private exponent `a` and offers a single
//! operation to the protocols: [`Participant::apply`], which raises any
//! value to `a`. Its public value `g^a` is derived on first use and cached.
//!
//! The private exponent never leaves the participant and is zeroed on drop.

use std::fmt::{Debug, Formatter};
use std::sync::OnceLock;

use rand::{CryptoRng, Rng, RngCore};
use zeroize::Zeroize;

use crate::agreement::params::DhParams;
use crate::error::{Error, Result};
use crate::field::FieldElement;
use crate::metrics::OperationCounter;

/// One party of a key agreement run.
pub struct Participant {
    id: usize,
    params: DhParams,
    private: Option<u64>,
    public: OnceLock<FieldElement>,
    ops: OperationCounter,
}

impl Participant {
    /// Creates a participant without a private exponent.
    ///
    /// Call [`generate_private`](Self::generate_private) before taking part
    /// in a run.
    pub fn new(id: usize, params: DhParams) -> Self {
        Self {
            id,
            params,
            private: None,
            public: OnceLock::new(),
            ops: OperationCounter::new(),
        }
    }

    /// Creates a participant with a freshly drawn private exponent.
    pub fn generate<R: RngCore + CryptoRng + ?Sized>(
        id: usize,
        params: DhParams,
        rng: &mut R,
    ) -> Result<Self> {
        let mut participant = Self::new(id, params);
        participant.generate_private(rng)?;
        Ok(participant)
    }

    /// Creates a participant with a caller-chosen private exponent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidExponent`] unless `exponent ∈ [2, p-2]`.
    pub fn with_private(id: usize, params: DhParams, exponent: u64) -> Result<Self> {
        let max = params.max_exponent()?;
        if !(2..=max).contains(&exponent) {
            return Err(Error::InvalidExponent { exponent, max });
        }

        let mut participant = Self::new(id, params);
        participant.private = Some(exponent);
        Ok(participant)
    }

    /// Draws a private exponent uniformly from `[2, p-2]`, replacing any
    /// previous one. The cached public value is discarded.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] if the modulus is below 5.
    pub fn generate_private<R: RngCore + CryptoRng + ?Sized>(&mut self, rng: &mut R) -> Result<()> {
        let max = self.params.max_exponent()?;

        self.private.zeroize();
        self.private = Some(rng.gen_range(2..=max));
        self.public = OnceLock::new();

        Ok(())
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn params(&self) -> &DhParams {
        &self.params
    }

    pub fn private_exponent_is_set(&self) -> bool {
        self.private.is_some()
    }

    fn private(&self) -> Result<u64> {
        self.private.ok_or(Error::MissingPrivateExponent(self.id))
    }

    /// Returns `g^a mod p`, computed once and cached.
    ///
    /// Deriving the public value is not counted as a protocol operation.
    pub fn public_value(&self) -> Result<FieldElement> {
        if let Some(&public) = self.public.get() {
            return Ok(public);
        }

        let a = self.private()?;
        let public = self.params.field().pow(self.params.generator(), a);

        Ok(*self.public.get_or_init(|| public))
    }

    /// Returns `input^a mod p` and records one operation.
    pub fn apply(&self, input: FieldElement) -> Result<FieldElement> {
        let a = self.private()?;
        self.ops.record();

        Ok(self.params.field().pow(input, a))
    }

    /// Two-party exchange: the secret `peer_public^a` shared with the owner
    /// of `peer_public`.
    pub fn shared_secret(&self, peer_public: FieldElement) -> Result<FieldElement> {
        self.apply(peer_public)
    }

    /// Number of [`apply`](Self::apply) calls since the last reset.
    pub fn operation_count(&self) -> u64 {
        self.ops.get()
    }

    /// Called by the protocols when a run starts.
    pub(crate) fn reset_operations(&self) {
        self.ops.reset();
    }
}

impl Debug for Participant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Participant")
            .field("id", &self.id)
            .field("params", &self.params)
            .field("private", &self.private.map(|_| "<redacted>"))
            .field("operations", &self.ops.get())
            .finish()
    }
}

impl Drop for Participant {
    fn drop(&mut self) {
        self.private.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FieldParams;

    #[test]
    fn reset_clears_only_the_count() {
        let params = FieldParams::default().build().unwrap();
        let p = Participant::with_private(0, params, 5).unwrap();

        let public = p.public_value().unwrap();
        p.apply(public).unwrap();
        p.apply(public).unwrap();
        assert_eq!(p.operation_count(), 2);

        p.reset_operations();
        assert_eq!(p.operation_count(), 0);
        assert_eq!(p.public_value().unwrap(), public);
    }
}
