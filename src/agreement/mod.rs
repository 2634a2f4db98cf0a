//! Multi-party key agreement by iterated modular exponentiation.
//!
//! Every participant holds a private exponent `aᵢ`. A run folds all
//! exponents into one value,
//!
//! ```text
//! g^(a₁·a₂·…·aₙ) mod p
//! ```
//!
//! which every participant ends up knowing without any exponent being
//! transmitted.
//!
//! ## Topologies
//!
//! - [`SequentialAgreement`]
//!   One running value passed along the chain; `n` exponentiations.
//!
//! - [`CircularAgreement`]
//!   `n - 1` synchronized rounds in which every participant works on its
//!   predecessor's value; `n·(n-1)` exponentiations, and a final check that
//!   all participants agree.
//!
//! [`AgreementProtocol`] selects one of the two from a
//! [`Topology`](crate::config::Topology).
//!
//! ## Scope
//!
//! There is no authentication, no key confirmation and no transport:
//! participants exchange values directly inside one process. The protocols
//! offer no protection against an active man in the middle.

mod circular;
mod observer;
mod params;
mod participant;
mod protocol;
mod sequential;

pub use circular::{CircularAgreement, CircularState};
pub use observer::AgreementObserver;
pub use params::DhParams;
pub use participant::Participant;
pub use protocol::AgreementProtocol;
pub use sequential::{SequentialAgreement, SequentialState};
