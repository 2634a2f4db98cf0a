use crate::error::{Error, Result};
use crate::field::{FieldElement, PrimeField};

/// Public parameters of a key agreement: a prime field and a generator.
///
/// Both are known to every participant and safe to publish.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DhParams {
    field: PrimeField,
    generator: FieldElement,
}

impl DhParams {
    /// # Errors
    ///
    /// Returns [`Error::InvalidGenerator`] if `generator` is congruent to 0
    /// or 1, which would collapse every public value to a constant.
    pub fn new(field: PrimeField, generator: u64) -> Result<Self> {
        let g = field.element(generator);
        if g.value() < 2 {
            return Err(Error::InvalidGenerator(generator, field.modulus()));
        }

        Ok(Self {
            field,
            generator: g,
        })
    }

    pub fn field(&self) -> &PrimeField {
        &self.field
    }

    pub fn generator(&self) -> FieldElement {
        self.generator
    }

    /// Largest admissible private exponent, `p - 2`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] if `p < 5`, where `[2, p-2]` would
    /// hold at most one value.
    pub fn max_exponent(&self) -> Result<u64> {
        let p = self.field.modulus();
        if p < 5 {
            return Err(Error::InvalidRange(p));
        }

        Ok(p - 2)
    }
}
