//! Master-secret escrow: key agreement feeding secret sharing.
//!
//! A group first agrees on a master value with an [`AgreementProtocol`],
//! then splits that value into threshold shares over the same field, so
//! the master can later be recovered by any `threshold` share holders
//! even if the original participants are gone.

use rand::{CryptoRng, RngCore};
use tracing::debug;

use crate::agreement::AgreementProtocol;
use crate::error::Result;
use crate::recovery::shamirsecretsharing::SharingSession;

/// Runs `protocol` and deals its final secret into `share_count` shares.
///
/// The agreed secret itself is not returned; it is only recoverable
/// through the session's shares.
///
/// # Errors
///
/// Any error of the agreement run, or of
/// [`SharingSession::deal`] for invalid `(share_count, threshold)`.
pub fn escrow<R: RngCore + CryptoRng + ?Sized>(
    protocol: &mut AgreementProtocol,
    share_count: usize,
    threshold: usize,
    rng: &mut R,
) -> Result<SharingSession> {
    let field = *protocol.params().field();
    let master = protocol.run()?;

    debug!(
        topology = %protocol.topology(),
        share_count,
        threshold,
        "escrowing agreed master secret"
    );

    SharingSession::deal(&field, master, share_count, threshold, rng)
}
