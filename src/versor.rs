//! Versors: invertible multivectors acting by sandwich product.

use crate::error::{GaError, Result};
use crate::multivector::Multivector;
use crate::types::EPSILON;

/// A versor V acts on a multivector X by X' = V X V⁻¹.
///
/// The wrapped multivector is assumed to be a well-formed versor (a product
/// of invertible vectors); nothing projects an arbitrary multivector onto
/// the versor manifold. Inversion requires V ~V to have a scalar part of
/// usable magnitude and reports the operand as singular otherwise.
#[derive(Debug, Clone)]
pub struct Versor {
    mv: Multivector,
}

impl Versor {
    pub fn new(mv: Multivector) -> Self {
        Self { mv }
    }

    pub fn multivector(&self) -> &Multivector {
        &self.mv
    }

    /// V⁻¹ = ~V / s, where s is the scalar part of V ~V.
    pub fn inverse(&self) -> Result<Multivector> {
        let vrev = self.mv.reverse();
        let norm2 = self.mv.gp(&vrev)?;
        let s = norm2.component(0);
        if s.abs() <= EPSILON {
            return Err(GaError::SingularOperand { norm: s });
        }
        Ok(vrev.scale(1.0 / s))
    }

    /// X ↦ V X V⁻¹.
    pub fn apply(&self, x: &Multivector) -> Result<Multivector> {
        if !self.mv.same_algebra(x) {
            return Err(GaError::AlgebraMismatch);
        }
        let inverse = self.inverse()?;
        self.mv.gp(x)?.gp(&inverse)
    }
}
