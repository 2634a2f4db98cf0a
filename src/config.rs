//! Public parameters and run configuration.
//!
//! The defaults are the toy parameters the protocols were designed
//! around: `p = 2357, g = 2` for key agreement and `p = 2089` for secret
//! sharing. They are far too small for real security and are meant for
//! exercising the algorithms only.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use rand::{CryptoRng, RngCore};

use crate::agreement::{AgreementProtocol, DhParams};
use crate::error::{Error, Result};
use crate::field::PrimeField;

/// Default key agreement modulus.
pub const AGREEMENT_MODULUS: u64 = 2357;

/// Default key agreement generator.
pub const AGREEMENT_GENERATOR: u64 = 2;

/// Default secret sharing modulus.
pub const SHARING_MODULUS: u64 = 2089;

/// Raw key agreement parameters, validated by [`FieldParams::build`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldParams {
    pub modulus: u64,
    pub generator: u64,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            modulus: AGREEMENT_MODULUS,
            generator: AGREEMENT_GENERATOR,
        }
    }
}

impl FieldParams {
    /// Validates the modulus and generator.
    pub fn build(&self) -> Result<DhParams> {
        DhParams::new(PrimeField::new(self.modulus)?, self.generator)
    }
}

/// Scheduling of a key agreement run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Topology {
    /// One running value passed along the chain.
    #[default]
    Sequential,
    /// Synchronized rounds around a ring.
    Circular,
}

impl Display for Topology {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Topology::Sequential => "sequential",
            Topology::Circular => "circular",
        })
    }
}

impl FromStr for Topology {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sequential" => Ok(Topology::Sequential),
            "circular" => Ok(Topology::Circular),
            _ => Err(Error::UnknownTopology(s.to_owned())),
        }
    }
}

/// Everything needed to set up an agreement run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgreementConfig {
    pub params: FieldParams,
    pub topology: Topology,
    pub participants: usize,
}

impl Default for AgreementConfig {
    fn default() -> Self {
        Self {
            params: FieldParams::default(),
            topology: Topology::default(),
            participants: 3,
        }
    }
}

impl AgreementConfig {
    /// Builds the configured protocol with freshly generated participants.
    pub fn build<R: RngCore + CryptoRng + ?Sized>(&self, rng: &mut R) -> Result<AgreementProtocol> {
        AgreementProtocol::generate(self.topology, self.params.build()?, self.participants, rng)
    }
}
