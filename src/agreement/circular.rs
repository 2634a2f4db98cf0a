//! Circular (round-based) key agreement.
//!
//! Every participant starts from its own public value. In each of the
//! `n - 1` following rounds, participant `i` takes the value held by its
//! predecessor `(i - 1) mod n` and raises it to its private exponent. After
//! the last round every participant holds `g^(a₁·…·aₙ)`.
//!
//! ```text
//! round 0:  values[i] = g^aᵢ
//! round r:  values[i] = values_{r-1}[(i - 1) mod n]^aᵢ
//! ```
//!
//! The run costs `n·(n-1)` exponentiations. The applications of one round
//! depend only on the previous round's vector, so with the `parallel`
//! feature they are computed on the rayon pool. Rounds stay strictly
//! ordered.

use std::sync::Arc;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, trace, warn};

use crate::agreement::observer::AgreementObserver;
use crate::agreement::params::DhParams;
use crate::agreement::participant::Participant;
use crate::agreement::sequential::check_participants;
use crate::error::{Error, Result};
use crate::field::FieldElement;

/// Progress of a circular run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CircularState {
    Idle,
    /// Round `r` is complete; [`CircularAgreement::values`] holds its output.
    Round(usize),
    /// All participants hold the same final value.
    Verified(FieldElement),
    /// Participants disagree after the last round.
    Diverged,
}

pub struct CircularAgreement {
    params: DhParams,
    participants: Vec<Participant>,
    values: Vec<FieldElement>,
    state: CircularState,
    observer: Option<Arc<dyn AgreementObserver>>,
}

impl CircularAgreement {
    /// # Errors
    ///
    /// - [`Error::InsufficientParticipants`] with fewer than two participants
    /// - [`Error::ParameterMismatch`] if a participant uses other parameters
    pub fn new(params: DhParams, participants: Vec<Participant>) -> Result<Self> {
        check_participants(&params, &participants)?;

        Ok(Self {
            params,
            participants,
            values: Vec::new(),
            state: CircularState::Idle,
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

    pub fn state(&self) -> CircularState {
        self.state
    }

    /// Values held by each participant after the last completed round.
    pub fn values(&self) -> &[FieldElement] {
        &self.values
    }

    /// Exponentiations performed since the current run started.
    pub fn total_operations(&self) -> u64 {
        self.participants.iter().map(Participant::operation_count).sum()
    }

    fn next_round(&self) -> Result<Vec<FieldElement>> {
        let n = self.participants.len();
        let previous = &self.values;
        let apply = |(i, p): (usize, &Participant)| p.apply(previous[(i + n - 1) % n]);

        #[cfg(feature = "parallel")]
        let values = self.participants.par_iter().enumerate().map(apply).collect();

        #[cfg(not(feature = "parallel"))]
        let values = self.participants.iter().enumerate().map(apply).collect();

        values
    }

    fn notify_round(&self, round: usize) {
        trace!(round, values = ?self.values, "circular round");
        if let Some(observer) = &self.observer {
            observer.on_round(round, &self.values);
        }
    }

    /// Advances the state machine by one transition and returns the new
    /// state.
    ///
    /// From `Idle` this computes round 0, from `Round(r)` with `r < n - 1`
    /// round `r + 1`, and from `Round(n - 1)` the final verification.
    /// Terminal states are returned unchanged.
    pub fn step(&mut self) -> Result<CircularState> {
        let last_round = self.participants.len() - 1;

        self.state = match self.state {
            CircularState::Idle => {
                self.participants.iter().for_each(Participant::reset_operations);
                debug!(participants = self.participants.len(), "circular agreement started");

                self.values = self
                    .participants
                    .iter()
                    .map(Participant::public_value)
                    .collect::<Result<_>>()?;
                self.notify_round(0);

                CircularState::Round(0)
            }
            CircularState::Round(r) if r < last_round => {
                self.values = self.next_round()?;
                self.notify_round(r + 1);

                CircularState::Round(r + 1)
            }
            CircularState::Round(_) => {
                let first = self.values[0];

                if self.values.iter().all(|&v| v == first) {
                    debug!(operations = self.total_operations(), "circular agreement verified");
                    if let Some(observer) = &self.observer {
                        observer.on_finish(first);
                    }
                    CircularState::Verified(first)
                } else {
                    warn!(values = ?self.values, "circular agreement diverged");
                    CircularState::Diverged
                }
            }
            terminal => terminal,
        };

        Ok(self.state)
    }

    /// Runs all `n - 1` rounds from the start and returns the agreed value.
    ///
    /// Any previous run is discarded. On a field-level error the state
    /// returns to [`CircularState::Idle`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Diverged`] if the participants end with different
    /// values. This signals a broken invariant, not a recoverable
    /// condition, and the run must not be retried.
    pub fn run(&mut self) -> Result<FieldElement> {
        self.state = CircularState::Idle;
        self.values.clear();

        loop {
            if let Err(e) = self.step() {
                self.state = CircularState::Idle;
                self.values.clear();
                return Err(e);
            }

            if let Some(outcome) = self.outcome() {
                return outcome;
            }
        }
    }

    /// Maps a terminal state to the run's result; `None` while rounds remain.
    fn outcome(&self) -> Option<Result<FieldElement>> {
        match self.state {
            CircularState::Verified(secret) => Some(Ok(secret)),
            CircularState::Diverged => Some(Err(Error::Diverged {
                rounds: self.participants.len() - 1,
            })),
            CircularState::Idle | CircularState::Round(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::config::FieldParams;

    #[derive(Default)]
    struct FinishLog(Mutex<Vec<FieldElement>>);

    impl AgreementObserver for FinishLog {
        fn on_finish(&self, secret: FieldElement) {
            self.0.lock().unwrap().push(secret);
        }
    }

    fn three_party(log: Arc<FinishLog>) -> CircularAgreement {
        let params = FieldParams::default().build().unwrap();
        let participants = [5u64, 7, 11]
            .iter()
            .enumerate()
            .map(|(id, &e)| Participant::with_private(id, params, e).unwrap())
            .collect();

        CircularAgreement::new(params, participants)
            .unwrap()
            .with_observer(log)
    }

    #[test]
    fn disagreeing_values_end_in_diverged() {
        let log = Arc::new(FinishLog::default());
        let mut run = three_party(log.clone());

        for _ in 0..3 {
            run.step().unwrap();
        }
        assert_eq!(run.state(), CircularState::Round(2));
        assert_eq!(run.outcome(), None);

        let field = *run.params().field();
        run.values[1] = field.add(run.values[1], FieldElement::ONE);

        assert_eq!(run.step().unwrap(), CircularState::Diverged);
        assert_eq!(run.step().unwrap(), CircularState::Diverged);
        assert_eq!(run.state(), CircularState::Diverged);
        assert!(log.0.lock().unwrap().is_empty());

        assert_eq!(run.outcome(), Some(Err(Error::Diverged { rounds: 2 })));
    }

    #[test]
    fn agreeing_values_end_in_verified() {
        let log = Arc::new(FinishLog::default());
        let mut run = three_party(log.clone());

        let secret = run.run().unwrap();

        assert_eq!(run.outcome(), Some(Ok(secret)));
        assert_eq!(*log.0.lock().unwrap(), [secret]);
    }
}
