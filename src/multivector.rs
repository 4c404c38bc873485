//! Dense multivectors bound to a shared algebra.
//!
//! A multivector stores one coefficient per basis blade, indexed directly by
//! blade mask: 2^n coefficients for an n-dimensional algebra. `data[0]` is
//! the scalar part and `data[(1 << n) - 1]` the pseudoscalar.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::sync::Arc;

use crate::algebra::{Algebra, AlgebraRef};
use crate::blade::{self, Blade, BladeMask};
use crate::error::{GaError, Result};
use crate::types::Scalar;

/// A real linear combination of basis blades.
#[derive(Debug, Clone)]
pub struct Multivector {
    alg: AlgebraRef,
    data: Vec<Scalar>,
}

impl Multivector {
    /// The zero multivector in `alg`.
    pub fn zero(alg: &AlgebraRef) -> Self {
        Self {
            alg: Arc::clone(alg),
            data: vec![0.0; alg.blade_count()],
        }
    }

    /// Construct from raw components in mask order.
    ///
    /// Panics unless `data.len()` equals the algebra's blade count.
    pub fn from_components(alg: &AlgebraRef, data: Vec<Scalar>) -> Self {
        assert!(
            data.len() == alg.blade_count(),
            "multivector in a {}-dimensional algebra requires {} components, got {}",
            alg.dimensions(),
            alg.blade_count(),
            data.len()
        );
        Self {
            alg: Arc::clone(alg),
            data,
        }
    }

    /// A pure scalar.
    pub fn scalar(alg: &AlgebraRef, s: Scalar) -> Self {
        let mut mv = Self::zero(alg);
        mv.data[0] = s;
        mv
    }

    /// The unit basis vector `e_axis`.
    pub fn basis(alg: &AlgebraRef, axis: usize) -> Result<Self> {
        if axis >= alg.dimensions() {
            return Err(GaError::OutOfRange {
                index: axis,
                dims: alg.dimensions(),
            });
        }
        let mut mv = Self::zero(alg);
        mv.data[blade::axis_mask(axis) as usize] = 1.0;
        Ok(mv)
    }

    /// A basis blade built from axis indices, scaled by `coeff`. The axis
    /// list is canonicalized with parity, so `blade(&alg, &[1, 0], 1.0)` is
    /// `-e12` and a repeated axis gives zero.
    pub fn blade(alg: &AlgebraRef, axes: &[usize], coeff: Scalar) -> Result<Self> {
        for &axis in axes {
            if axis >= alg.dimensions() {
                return Err(GaError::OutOfRange {
                    index: axis,
                    dims: alg.dimensions(),
                });
            }
        }
        let b = Blade::from_axes(axes);
        let mut mv = Self::zero(alg);
        if !b.is_zero() {
            mv.data[b.mask as usize] = coeff * b.sign as Scalar;
        }
        Ok(mv)
    }

    /// The unit pseudoscalar, the blade containing every axis.
    pub fn pseudoscalar(alg: &AlgebraRef) -> Self {
        let mut mv = Self::zero(alg);
        let i_mask = alg.pseudoscalar_mask();
        mv.data[i_mask as usize] = 1.0;
        mv
    }

    pub fn algebra(&self) -> &Algebra {
        &self.alg
    }

    pub fn algebra_ref(&self) -> &AlgebraRef {
        &self.alg
    }

    /// Number of stored coefficients: 2^n.
    pub fn blade_count(&self) -> usize {
        self.data.len()
    }

    /// Whether both multivectors reference the same algebra allocation.
    #[inline]
    pub fn same_algebra(&self, other: &Multivector) -> bool {
        Arc::ptr_eq(&self.alg, &other.alg)
    }

    /// Coefficient of the blade at `mask`.
    #[inline]
    pub fn component(&self, mask: BladeMask) -> Scalar {
        self.data[mask as usize]
    }

    #[inline]
    pub fn set_component(&mut self, mask: BladeMask, value: Scalar) {
        self.data[mask as usize] = value;
    }

    #[inline]
    pub(crate) fn accumulate(&mut self, mask: BladeMask, delta: Scalar) {
        self.data[mask as usize] += delta;
    }

    /// All coefficients in mask order.
    pub fn components(&self) -> &[Scalar] {
        &self.data
    }

    /// A copy scaled by `s`.
    pub fn scale(&self, s: Scalar) -> Self {
        Self {
            alg: Arc::clone(&self.alg),
            data: self.data.iter().map(|&c| c * s).collect(),
        }
    }
}

impl PartialEq for Multivector {
    fn eq(&self, other: &Self) -> bool {
        self.same_algebra(other) && self.data == other.data
    }
}

impl Add for Multivector {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        assert!(self.same_algebra(&rhs), "multivector addition across algebras");
        let data = self
            .data
            .into_iter()
            .zip(rhs.data)
            .map(|(a, b)| a + b)
            .collect();
        Self {
            alg: self.alg,
            data,
        }
    }
}

impl Sub for Multivector {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        assert!(self.same_algebra(&rhs), "multivector subtraction across algebras");
        let data = self
            .data
            .into_iter()
            .zip(rhs.data)
            .map(|(a, b)| a - b)
            .collect();
        Self {
            alg: self.alg,
            data,
        }
    }
}

impl Neg for Multivector {
    type Output = Self;

    fn neg(self) -> Self {
        let data = self.data.into_iter().map(|c| -c).collect();
        Self {
            alg: self.alg,
            data,
        }
    }
}

impl Mul<Scalar> for Multivector {
    type Output = Self;

    fn mul(self, s: Scalar) -> Self {
        let data = self.data.into_iter().map(|c| c * s).collect();
        Self {
            alg: self.alg,
            data,
        }
    }
}

impl fmt::Display for Multivector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut first = true;
        for m in 0..self.blade_count() {
            let c = self.data[m];
            if c == 0.0 {
                continue;
            }
            if !first {
                write!(f, " + ")?;
            }
            first = false;
            write!(f, "{}", c)?;
            if m != 0 {
                write!(f, "e")?;
                for axis in 0..self.alg.dimensions() {
                    if blade::has_axis(m as BladeMask, axis) {
                        write!(f, "{}", axis + 1)?;
                    }
                }
            }
        }
        if first {
            write!(f, "0")?;
        }
        Ok(())
    }
}
