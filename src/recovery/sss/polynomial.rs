//! Secret-sharing polynomials.
//!
//! A [`Polynomial`] is the dealer's private state for one sharing session:
//!
//! ```text
//! f(x) = a₀ + a₁·x + a₂·x² + … + a_{t-1}·x^{t-1}
//! ```
//!
//! where `a₀` is the secret and `t` the threshold. Anyone holding the
//! polynomial holds the secret, so it is zeroed on drop and should be
//! discarded as soon as the shares have been produced.

use std::fmt::{Display, Formatter};

use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

use crate::error::{Error, Result};
use crate::field::{FieldElement, PrimeField};

/// A polynomial of degree `threshold - 1` over a prime field.
///
/// Coefficients are stored in increasing degree order; the constant term
/// is the secret and never changes after generation.
pub struct Polynomial {
    field: PrimeField,
    coefficients: Vec<FieldElement>,
}

impl Polynomial {
    /// Generates `[secret, r₁, …, r_{t-1}]` with each `rᵢ` uniform in `[0, p)`.
    ///
    /// A threshold of one yields the constant polynomial `f(x) = secret`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidThreshold`] if `threshold` is zero.
    pub fn generate<R: RngCore + CryptoRng + ?Sized>(
        field: &PrimeField,
        secret: FieldElement,
        threshold: usize,
        rng: &mut R,
    ) -> Result<Self> {
        if threshold == 0 {
            return Err(Error::InvalidThreshold {
                threshold,
                share_count: 0,
            });
        }

        let mut coefficients = Vec::with_capacity(threshold);
        coefficients.push(field.element(secret.value()));
        coefficients.extend((1..threshold).map(|_| field.random(&mut *rng)));

        Ok(Self {
            field: *field,
            coefficients,
        })
    }

    /// Builds a polynomial from explicit coefficients, constant term first.
    ///
    /// Coefficients are reduced into the field. An empty slice is the zero
    /// polynomial of threshold one.
    pub fn from_coefficients(field: &PrimeField, coefficients: &[u64]) -> Self {
        let mut coefficients: Vec<FieldElement> =
            coefficients.iter().map(|&c| field.element(c)).collect();
        if coefficients.is_empty() {
            coefficients.push(FieldElement::ZERO);
        }

        Self {
            field: *field,
            coefficients,
        }
    }

    /// Returns the coefficients in increasing degree order.
    pub fn coefficients(&self) -> &[FieldElement] {
        &self.coefficients
    }

    /// Number of coefficients, i.e. the reconstruction threshold.
    pub fn threshold(&self) -> usize {
        self.coefficients.len()
    }

    /// Degree of the polynomial (`threshold - 1`).
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Evaluates the polynomial at `x` using Horner's method.
    pub fn evaluate(&self, x: FieldElement) -> FieldElement {
        let mut acc = FieldElement::ZERO;

        for &c in self.coefficients.iter().rev() {
            acc = self.field.add(self.field.mul(acc, x), c);
        }

        acc
    }
}

impl Drop for Polynomial {
    fn drop(&mut self) {
        self.coefficients.zeroize();
    }
}

/// Renders the polynomial as `a0 + a1·x + a2·x^2 + …`.
///
/// Intended for inspection during development; the output contains the
/// secret.
impl Display for Polynomial {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (power, c) in self.coefficients.iter().enumerate() {
            if power > 0 {
                f.write_str(" + ")?;
            }

            match power {
                0 => write!(f, "{c}")?,
                1 => write!(f, "{c}·x")?,
                _ => write!(f, "{c}·x^{power}")?,
            }
        }

        Ok(())
    }
}
