//! Progress hook for agreement runs.
//!
//! Reporting (printing intermediate values, plotting, timing) lives outside
//! this crate. Protocols expose their intermediate state through
//! [`AgreementObserver`] instead, so such tooling can follow a run without
//! the protocol code knowing about it.
//!
//! Only public values are passed to the observer: running values, round
//! vectors and the final secret. Private exponents never are.

use crate::field::FieldElement;

/// Receives protocol progress events. Every method defaults to a no-op.
pub trait AgreementObserver: Send + Sync {
    /// A sequential run finished step `step` (1-based) with `value`.
    fn on_step(&self, _step: usize, _value: FieldElement) {}

    /// A circular run finished round `round`; `values[i]` is held by
    /// participant `i`. Round 0 carries the public values.
    fn on_round(&self, _round: usize, _values: &[FieldElement]) {}

    /// The run produced its final secret.
    fn on_finish(&self, _secret: FieldElement) {}
}
