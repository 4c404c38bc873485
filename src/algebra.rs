//! The algebra descriptor shared by everything that computes in it.

use std::sync::Arc;

use crate::blade::{self, BladeMask};
use crate::signature::Signature;

/// A signature plus its derived dimension count.
///
/// Multivectors, versors, rotors, and linear maps each hold an [`AlgebraRef`]
/// to one of these. Binary operations require operand algebras to be the
/// *same allocation*, not merely structurally equal signatures; two algebras
/// built from identical signatures are still distinct contexts.
#[derive(Debug)]
pub struct Algebra {
    signature: Signature,
    dimensions: usize,
}

/// Shared immutable handle to an [`Algebra`]; `Arc::ptr_eq` is the mismatch
/// test used throughout.
pub type AlgebraRef = Arc<Algebra>;

impl Algebra {
    /// Mint a fresh algebra identity from a signature.
    pub fn new(signature: Signature) -> AlgebraRef {
        Arc::new(Self {
            dimensions: signature.dimensions(),
            signature,
        })
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Number of basis blades: 2^n.
    pub fn blade_count(&self) -> usize {
        1 << self.dimensions
    }

    /// Mask of this algebra's pseudoscalar.
    pub fn pseudoscalar_mask(&self) -> BladeMask {
        blade::pseudoscalar_mask(self.dimensions)
    }
}
