//! Arithmetic modulo a fixed prime.
//!
//! The field is represented by [`PrimeField`], a small immutable value
//! holding the modulus `p`. Elements are [`FieldElement`] values; they are
//! plain integers in `[0, p)` and carry no reference to their field, so
//! every operation goes through the field that produced them.
//!
//! ## Design principles
//!
//! - Every result is reduced into `[0, p)` before it is returned.
//! - Products are computed in `u128`, so any modulus below `2⁶⁴` is exact.
//! - Exponentiation uses square-and-multiply.
//! - Inversion uses Fermat's little theorem: `a⁻¹ = a^(p-2)`.

use std::fmt::{Display, Formatter};

use rand::{CryptoRng, Rng, RngCore};
use zeroize::Zeroize;

use crate::error::{Error, Result};
use crate::field::primality::is_prime;

/// An element of a prime field, always in `[0, p)`.
///
/// Elements are only produced by a [`PrimeField`], which guarantees the
/// value is reduced. The raw integer is available through
/// [`FieldElement::value`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldElement(pub(crate) u64);

impl FieldElement {
    /// The additive identity.
    pub const ZERO: Self = FieldElement(0);

    /// The multiplicative identity.
    pub const ONE: Self = FieldElement(1);

    /// Returns the integer representative in `[0, p)`.
    #[inline]
    pub fn value(self) -> u64 {
        self.0
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl Display for FieldElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Zeroize for FieldElement {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

/// The integers modulo a prime `p`.
///
/// Construction verifies that `p` is a prime greater than 3. The modulus
/// never changes afterwards, so a `PrimeField` can be copied freely and
/// shared between threads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PrimeField {
    modulus: u64,
}

impl PrimeField {
    /// Builds the field of integers modulo `modulus`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidModulus`] if `modulus ≤ 3` or if it fails
    /// the primality test.
    pub fn new(modulus: u64) -> Result<Self> {
        if modulus <= 3 || !is_prime(modulus) {
            return Err(Error::InvalidModulus(modulus));
        }

        Ok(Self { modulus })
    }

    /// Returns the modulus `p`.
    #[inline]
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Maps any integer into `[0, p)`.
    ///
    /// Negative inputs are mapped to their non-negative representative,
    /// so `reduce(-1) == p - 1`.
    pub fn reduce<T: Into<i128>>(&self, x: T) -> FieldElement {
        FieldElement(x.into().rem_euclid(self.modulus as i128) as u64)
    }

    /// Shorthand for [`reduce`](Self::reduce) on an unsigned value.
    #[inline]
    pub fn element(&self, x: u64) -> FieldElement {
        FieldElement(x % self.modulus)
    }

    /// Draws an element uniformly from `[0, p)`.
    pub fn random<R: RngCore + CryptoRng + ?Sized>(&self, rng: &mut R) -> FieldElement {
        FieldElement(rng.gen_range(0..self.modulus))
    }

    /// Returns `a + b mod p`.
    pub fn add(&self, a: FieldElement, b: FieldElement) -> FieldElement {
        let sum = (a.0 % self.modulus) as u128 + (b.0 % self.modulus) as u128;
        FieldElement((sum % self.modulus as u128) as u64)
    }

    /// Returns `a - b mod p`.
    pub fn sub(&self, a: FieldElement, b: FieldElement) -> FieldElement {
        self.add(a, self.neg(b))
    }

    /// Returns `-a mod p`.
    pub fn neg(&self, a: FieldElement) -> FieldElement {
        let a = a.0 % self.modulus;
        if a == 0 {
            FieldElement::ZERO
        } else {
            FieldElement(self.modulus - a)
        }
    }

    /// Returns `a · b mod p`.
    pub fn mul(&self, a: FieldElement, b: FieldElement) -> FieldElement {
        let product = a.0 as u128 * b.0 as u128;
        FieldElement((product % self.modulus as u128) as u64)
    }

    /// Returns `base^exponent mod p`.
    ///
    /// Uses binary exponentiation, so the cost is logarithmic in the
    /// exponent. `pow(x, 0)` is one for every `x`, including zero.
    pub fn pow(&self, base: FieldElement, mut exponent: u64) -> FieldElement {
        let mut acc = FieldElement::ONE;
        let mut base = self.element(base.0);

        while exponent > 0 {
            if exponent & 1 == 1 {
                acc = self.mul(acc, base);
            }
            base = self.mul(base, base);
            exponent >>= 1;
        }

        acc
    }

    /// Returns `base^exponent mod p` for a signed exponent.
    ///
    /// Negative exponents are computed as `inverse(base)^|exponent|`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotInvertible`] for a negative exponent applied to
    /// zero.
    pub fn pow_signed(&self, base: FieldElement, exponent: i64) -> Result<FieldElement> {
        if exponent >= 0 {
            return Ok(self.pow(base, exponent as u64));
        }

        let inv = self.inverse(base)?;
        Ok(self.pow(inv, exponent.unsigned_abs()))
    }

    /// Returns the multiplicative inverse of `a`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotInvertible`] if `a ≡ 0 (mod p)`.
    ///
    /// # Implementation details
    ///
    /// ```text
    /// a⁻¹ = a^(p-2)  (mod p)
    /// ```
    pub fn inverse(&self, a: FieldElement) -> Result<FieldElement> {
        let a = self.element(a.0);
        if a.is_zero() {
            return Err(Error::NotInvertible(a.0, self.modulus));
        }

        Ok(self.pow(a, self.modulus - 2))
    }

    /// Returns `a / b mod p`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotInvertible`] if `b ≡ 0 (mod p)`.
    pub fn div(&self, a: FieldElement, b: FieldElement) -> Result<FieldElement> {
        Ok(self.mul(a, self.inverse(b)?))
    }
}
