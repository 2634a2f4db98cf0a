//! Topology-selected key agreement.
//!
//! [`AgreementProtocol`] puts both schedules behind one type so callers can
//! pick the topology from configuration. Both variants share the same
//! participants and produce the same secret; they differ only in cost.

use std::sync::Arc;

use rand::{CryptoRng, RngCore};

use crate::agreement::circular::CircularAgreement;
use crate::agreement::observer::AgreementObserver;
use crate::agreement::params::DhParams;
use crate::agreement::participant::Participant;
use crate::agreement::sequential::SequentialAgreement;
use crate::config::Topology;
use crate::error::Result;
use crate::field::FieldElement;

pub enum AgreementProtocol {
    Sequential(SequentialAgreement),
    Circular(CircularAgreement),
}

impl AgreementProtocol {
    /// Builds a run over existing participants.
    pub fn new(topology: Topology, params: DhParams, participants: Vec<Participant>) -> Result<Self> {
        Ok(match topology {
            Topology::Sequential => Self::Sequential(SequentialAgreement::new(params, participants)?),
            Topology::Circular => Self::Circular(CircularAgreement::new(params, participants)?),
        })
    }

    /// Builds a run over `count` participants with fresh private exponents.
    pub fn generate<R: RngCore + CryptoRng + ?Sized>(
        topology: Topology,
        params: DhParams,
        count: usize,
        rng: &mut R,
    ) -> Result<Self> {
        let participants = (0..count)
            .map(|id| Participant::generate(id, params, &mut *rng))
            .collect::<Result<Vec<_>>>()?;

        Self::new(topology, params, participants)
    }

    pub fn with_observer(self, observer: Arc<dyn AgreementObserver>) -> Self {
        match self {
            Self::Sequential(p) => Self::Sequential(p.with_observer(observer)),
            Self::Circular(p) => Self::Circular(p.with_observer(observer)),
        }
    }

    pub fn topology(&self) -> Topology {
        match self {
            Self::Sequential(_) => Topology::Sequential,
            Self::Circular(_) => Topology::Circular,
        }
    }

    pub fn params(&self) -> &DhParams {
        match self {
            Self::Sequential(p) => p.params(),
            Self::Circular(p) => p.params(),
        }
    }

    pub fn participants(&self) -> &[Participant] {
        match self {
            Self::Sequential(p) => p.participants(),
            Self::Circular(p) => p.participants(),
        }
    }

    pub fn participant_count(&self) -> usize {
        self.participants().len()
    }

    /// Runs the selected schedule from the start.
    pub fn run(&mut self) -> Result<FieldElement> {
        match self {
            Self::Sequential(p) => p.run(),
            Self::Circular(p) => p.run(),
        }
    }

    pub fn total_operations(&self) -> u64 {
        match self {
            Self::Sequential(p) => p.total_operations(),
            Self::Circular(p) => p.total_operations(),
        }
    }
}
