//! ChaCha20-based CSPRNG
//!
//! Thin wrapper over [`rand_chacha::ChaCha20Rng`]:
//! - relies on the operating system for initial entropy
//! - can be seeded explicitly for deterministic test runs
//! - implements `RngCore + CryptoRng`, so it plugs into every API of the
//!   crate that needs randomness

use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Cryptographically secure pseudorandom number generator.
///
/// The generator is initialized from OS-provided entropy (or from a caller
/// seed) and expands randomness with the ChaCha20 stream cipher.
pub struct Csprng {
    inner: ChaCha20Rng,
}

impl Csprng {
    /// Creates a new CSPRNG seeded from the operating system.
    ///
    /// This is equivalent to calling [`Csprng::from_os`].
    pub fn new() -> Self {
        Self::from_os()
    }

    /// Creates a new CSPRNG using entropy provided by the operating system.
    pub fn from_os() -> Self {
        Self {
            inner: ChaCha20Rng::from_entropy(),
        }
    }

    /// Creates a new CSPRNG from a user-provided seed.
    ///
    /// Two generators built from the same seed produce the same stream.
    /// The seed must be uniformly random and unpredictable unless
    /// reproducibility is the goal.
    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self {
            inner: ChaCha20Rng::from_seed(seed),
        }
    }

    /// Fills the provided buffer with random bytes.
    pub fn fill_bytes(&mut self, out: &mut [u8]) {
        self.inner.fill_bytes(out);
    }
}

impl Default for Csprng {
    /// Creates a default CSPRNG instance seeded from the operating system.
    fn default() -> Self {
        Self::new()
    }
}

impl RngCore for Csprng {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.inner.try_fill_bytes(dest)
    }
}

impl CryptoRng for Csprng {}
