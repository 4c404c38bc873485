//! Geometric product kernels.
//!
//! The blade-level product combines two pieces of bookkeeping: a sign from
//! the swap parity needed to bring the merged axis list into canonical
//! order, and a metric factor g(i) for every axis the operands share. Null
//! axes make that factor zero and annihilate the whole term.
//!
//! The multivector-level product is the bilinear extension of the blade
//! kernel, with an optional grade filter over (gradeA, gradeB, gradeR)
//! triples. Every derived product (wedge, Hestenes inner, left and right
//! contraction) is the same double loop with a different filter.

use crate::blade::{self, Blade};
use crate::error::{GaError, Result};
use crate::multivector::Multivector;
use crate::signature::Signature;
use crate::types::Scalar;

/// Geometric product of two basis blades under a diagonal metric.
pub fn gp_blade(a: Blade, b: Blade, sig: &Signature) -> Blade {
    if a.is_zero() || b.is_zero() {
        return Blade::ZERO;
    }
    if a.is_scalar_basis() {
        return Blade::new(b.mask, a.sign * b.sign);
    }
    if b.is_scalar_basis() {
        return Blade::new(a.mask, a.sign * b.sign);
    }

    let mut sign = a.sign * b.sign * blade::swap_parity(a.mask, b.mask);

    // Shared axes contract through the metric; a null axis annihilates.
    let mut overlap = a.mask & b.mask;
    while overlap != 0 {
        let i = overlap.trailing_zeros() as usize;
        sign *= sig.g(i);
        if sign == 0 {
            return Blade::ZERO;
        }
        overlap &= overlap - 1;
    }

    Blade::new(a.mask ^ b.mask, sign)
}

/// Keep-decision over (gradeA, gradeB, gradeR) triples.
pub type GradeFilter = fn(usize, usize, usize) -> bool;

/// Wedge keeps the grade-raising part: gradeR == gradeA + gradeB.
pub fn keep_wedge(grade_a: usize, grade_b: usize, grade_r: usize) -> bool {
    grade_r == grade_a + grade_b
}

/// Hestenes inner product keeps gradeR == |gradeA − gradeB|.
pub fn keep_inner(grade_a: usize, grade_b: usize, grade_r: usize) -> bool {
    grade_r == grade_a.abs_diff(grade_b)
}

/// Left contraction: gradeA ≤ gradeB and gradeR == gradeB − gradeA.
pub fn keep_left_contraction(grade_a: usize, grade_b: usize, grade_r: usize) -> bool {
    grade_a <= grade_b && grade_r == grade_b - grade_a
}

/// Right contraction: gradeA ≥ gradeB and gradeR == gradeA − gradeB.
pub fn keep_right_contraction(grade_a: usize, grade_b: usize, grade_r: usize) -> bool {
    grade_a >= grade_b && grade_r == grade_a - grade_b
}

impl Multivector {
    /// Grade-filtered geometric product, the workhorse behind every binary
    /// product. With `keep` absent this is the full geometric product.
    ///
    /// Both operands must reference the same algebra.
    pub fn gp_filtered(&self, other: &Multivector, keep: Option<GradeFilter>) -> Result<Multivector> {
        if !self.same_algebra(other) {
            return Err(GaError::AlgebraMismatch);
        }

        let sig = *self.algebra().signature();
        let count = self.blade_count();
        let mut result = Multivector::zero(self.algebra_ref());

        for i in 0..count {
            let mask_a = i as blade::BladeMask;
            let coeff_a = self.component(mask_a);
            if coeff_a == 0.0 {
                continue;
            }
            let grade_a = blade::grade_of(mask_a);

            for j in 0..count {
                let mask_b = j as blade::BladeMask;
                let coeff_b = other.component(mask_b);
                if coeff_b == 0.0 {
                    continue;
                }

                let bp = gp_blade(Blade::new(mask_a, 1), Blade::new(mask_b, 1), &sig);
                if bp.is_zero() {
                    continue;
                }

                if let Some(keep) = keep {
                    let grade_b = blade::grade_of(mask_b);
                    let grade_r = blade::grade_of(bp.mask);
                    if !keep(grade_a, grade_b, grade_r) {
                        continue;
                    }
                }

                result.accumulate(bp.mask, coeff_a * coeff_b * bp.sign as Scalar);
            }
        }

        Ok(result)
    }

    /// Full geometric product `self * other`.
    pub fn gp(&self, other: &Multivector) -> Result<Multivector> {
        self.gp_filtered(other, None)
    }

    /// Outer product `self ∧ other`.
    pub fn wedge(&self, other: &Multivector) -> Result<Multivector> {
        self.gp_filtered(other, Some(keep_wedge))
    }

    /// Hestenes inner product `self · other`.
    pub fn inner(&self, other: &Multivector) -> Result<Multivector> {
        self.gp_filtered(other, Some(keep_inner))
    }

    /// Left contraction `self ⌋ other`.
    pub fn left_contraction(&self, other: &Multivector) -> Result<Multivector> {
        self.gp_filtered(other, Some(keep_left_contraction))
    }

    /// Right contraction `self ⌊ other`.
    pub fn right_contraction(&self, other: &Multivector) -> Result<Multivector> {
        self.gp_filtered(other, Some(keep_right_contraction))
    }
}
