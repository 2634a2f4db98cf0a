//! Sequential (chain) key agreement.
//!
//! A running value starts at the generator `g` and is passed once along
//! the participant list; each participant raises it to its private
//! exponent:
//!
//! ```text
//! g → g^a₁ → (g^a₁)^a₂ → … → g^(a₁·a₂·…·aₙ)
//! ```
//!
//! The run costs exactly `n` exponentiations and is deterministic once the
//! private exponents are fixed.

use std::sync::Arc;

use tracing::{debug, trace};

use crate::agreement::observer::AgreementObserver;
use crate::agreement::params::DhParams;
use crate::agreement::participant::Participant;
use crate::error::{Error, Result};
use crate::field::FieldElement;

/// Progress of a sequential run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SequentialState {
    Idle,
    /// `step` participants have applied their exponent; `value` is the
    /// running value.
    Running { step: usize, value: FieldElement },
    Done(FieldElement),
}

pub struct SequentialAgreement {
    params: DhParams,
    participants: Vec<Participant>,
    state: SequentialState,
    observer: Option<Arc<dyn AgreementObserver>>,
}

pub(crate) fn check_participants(params: &DhParams, participants: &[Participant]) -> Result<()> {
    if participants.len() < 2 {
        return Err(Error::InsufficientParticipants(participants.len()));
    }

    if let Some(p) = participants.iter().find(|p| p.params() != params) {
        return Err(Error::ParameterMismatch(p.id()));
    }

    Ok(())
}

impl SequentialAgreement {
    /// # Errors
    ///
    /// - [`Error::InsufficientParticipants`] with fewer than two participants
    /// - [`Error::ParameterMismatch`] if a participant uses other parameters
    pub fn new(params: DhParams, participants: Vec<Participant>) -> Result<Self> {
        check_participants(&params, &participants)?;

        Ok(Self {
            params,
            participants,
            state: SequentialState::Idle,
            observer: None,
        })
    }

    pub fn with_observer(mut self, observer: Arc<dyn AgreementObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn params(&self) -> &DhParams {
        &self.params
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    pub fn state(&self) -> SequentialState {
        self.state
    }

    /// Exponentiations performed since the current run started.
    pub fn total_operations(&self) -> u64 {
        self.participants.iter().map(Participant::operation_count).sum()
    }

    /// Advances the state machine by one transition and returns the new
    /// state. A finished run stays in [`SequentialState::Done`].
    pub fn step(&mut self) -> Result<SequentialState> {
        self.state = match self.state {
            SequentialState::Idle => {
                self.participants.iter().for_each(Participant::reset_operations);
                debug!(participants = self.participants.len(), "sequential agreement started");

                SequentialState::Running {
                    step: 0,
                    value: self.params.generator(),
                }
            }
            SequentialState::Running { step, value } => {
                let next = self.participants[step].apply(value)?;
                let step = step + 1;

                trace!(step, value = next.value(), "sequential step");
                if let Some(observer) = &self.observer {
                    observer.on_step(step, next);
                }

                if step == self.participants.len() {
                    debug!(operations = self.total_operations(), "sequential agreement done");
                    if let Some(observer) = &self.observer {
                        observer.on_finish(next);
                    }
                    SequentialState::Done(next)
                } else {
                    SequentialState::Running { step, value: next }
                }
            }
            done @ SequentialState::Done(_) => done,
        };

        Ok(self.state)
    }

    /// Runs the protocol from the start and returns `g^(a₁·…·aₙ)`.
    ///
    /// Any previous run is discarded. On error the state returns to
    /// [`SequentialState::Idle`].
    pub fn run(&mut self) -> Result<FieldElement> {
        self.state = SequentialState::Idle;

        loop {
            match self.step() {
                Ok(SequentialState::Done(secret)) => return Ok(secret),
                Ok(_) => {}
                Err(e) => {
                    self.state = SequentialState::Idle;
                    return Err(e);
                }
            }
        }
    }
}
