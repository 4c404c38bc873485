//! Linear maps on the vector space, extended to every grade by
//! outermorphism.
//!
//! The outermorphism is the unique grade-preserving extension of a linear
//! map L on vectors satisfying L(a ∧ b) = L(a) ∧ L(b) and L(1) = 1, so the
//! image of a basis blade is the wedge of the images of its axes.

use std::sync::Arc;

use crate::algebra::AlgebraRef;
use crate::blade::{self, BladeMask};
use crate::error::{GaError, Result};
use crate::multivector::Multivector;
use crate::signature::MAX_DIMENSIONS;
use crate::types::Scalar;

/// A dense n×n real matrix acting on basis vectors: L(e_j) = Σ_i m[i][j] e_i.
/// Rows and columns at or past the algebra's dimension stay zero.
#[derive(Debug, Clone)]
pub struct LinearMap {
    alg: AlgebraRef,
    m: [[Scalar; MAX_DIMENSIONS]; MAX_DIMENSIONS],
}

impl LinearMap {
    /// The identity map on `alg`'s vector space.
    pub fn identity(alg: &AlgebraRef) -> Self {
        let mut m = [[0.0; MAX_DIMENSIONS]; MAX_DIMENSIONS];
        for (i, row) in m.iter_mut().enumerate().take(alg.dimensions()) {
            row[i] = 1.0;
        }
        Self {
            alg: Arc::clone(alg),
            m,
        }
    }

    /// The zero map on `alg`'s vector space.
    pub fn zeros(alg: &AlgebraRef) -> Self {
        Self {
            alg: Arc::clone(alg),
            m: [[0.0; MAX_DIMENSIONS]; MAX_DIMENSIONS],
        }
    }

    pub fn algebra_ref(&self) -> &AlgebraRef {
        &self.alg
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.alg.dimensions() {
            return Err(GaError::OutOfRange {
                index,
                dims: self.alg.dimensions(),
            });
        }
        Ok(())
    }

    /// Matrix entry m[row][col].
    pub fn get(&self, row: usize, col: usize) -> Result<Scalar> {
        self.check_index(row)?;
        self.check_index(col)?;
        Ok(self.m[row][col])
    }

    pub fn set(&mut self, row: usize, col: usize, value: Scalar) -> Result<()> {
        self.check_index(row)?;
        self.check_index(col)?;
        self.m[row][col] = value;
        Ok(())
    }

    /// Apply the matrix to the grade-1 part of `v`, returning a pure vector.
    /// Components of other grades are ignored.
    pub fn apply_to_vector(&self, v: &Multivector) -> Result<Multivector> {
        if !Arc::ptr_eq(&self.alg, v.algebra_ref()) {
            return Err(GaError::AlgebraMismatch);
        }

        let n = self.alg.dimensions();
        let mut out = Multivector::zero(&self.alg);
        for i in 0..n {
            let mut w = 0.0;
            for j in 0..n {
                w += self.m[i][j] * v.component(blade::axis_mask(j));
            }
            out.set_component(blade::axis_mask(i), w);
        }
        Ok(out)
    }

    /// Apply the outermorphism extension of the map to a full multivector.
    ///
    /// Images of basis blades are built bottom-up: L(E_mask) is the image of
    /// the lowest axis wedged with the image of the rest. Clearing the
    /// lowest set bit always yields a smaller mask, so ascending mask order
    /// has every right-hand side available when it is needed.
    pub fn apply(&self, a: &Multivector) -> Result<Multivector> {
        if !Arc::ptr_eq(&self.alg, a.algebra_ref()) {
            return Err(GaError::AlgebraMismatch);
        }

        let n = self.alg.dimensions();
        let count = self.alg.blade_count();

        let mut vector_images = Vec::with_capacity(n);
        for j in 0..n {
            let e_j = Multivector::basis(&self.alg, j)?;
            vector_images.push(self.apply_to_vector(&e_j)?);
        }

        let mut images: Vec<Multivector> = Vec::with_capacity(count);
        for mask in 0..count {
            let image = if mask == 0 {
                Multivector::scalar(&self.alg, 1.0)
            } else {
                let j = mask.trailing_zeros() as usize;
                let rest = mask & (mask - 1);
                if rest == 0 {
                    vector_images[j].clone()
                } else {
                    vector_images[j].wedge(&images[rest])?
                }
            };
            images.push(image);
        }

        let mut out = Multivector::zero(&self.alg);
        for mask in 0..count {
            let c = a.component(mask as BladeMask);
            if c == 0.0 {
                continue;
            }
            out = out + images[mask].scale(c);
        }
        Ok(out)
    }
}
