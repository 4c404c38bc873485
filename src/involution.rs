//! The three standard sign involutions: reverse, grade involution, and
//! Clifford conjugation.
//!
//! Each flips the sign of every grade-r component by a fixed rule and never
//! touches masks or the metric, so all three commute with changing the
//! signature and compose as: conjugation = reverse ∘ grade involution.

use crate::blade::{grade_of, BladeMask};
use crate::multivector::Multivector;
use crate::types::Scalar;

fn reverse_sign(r: usize) -> Scalar {
    if (r * r.saturating_sub(1) / 2) % 2 == 0 {
        1.0
    } else {
        -1.0
    }
}

fn involution_sign(r: usize) -> Scalar {
    if r % 2 == 0 {
        1.0
    } else {
        -1.0
    }
}

fn conjugate_sign(r: usize) -> Scalar {
    if (r * (r + 1) / 2) % 2 == 0 {
        1.0
    } else {
        -1.0
    }
}

impl Multivector {
    fn grade_signed(&self, sign_at: fn(usize) -> Scalar) -> Multivector {
        let mut out = Multivector::zero(self.algebra_ref());
        for m in 0..self.blade_count() {
            let mask = m as BladeMask;
            let c = self.component(mask);
            if c == 0.0 {
                continue;
            }
            out.set_component(mask, c * sign_at(grade_of(mask)));
        }
        out
    }

    /// Reverse `~A`: each grade-r part picks up (−1)^(r(r−1)/2).
    pub fn reverse(&self) -> Multivector {
        self.grade_signed(reverse_sign)
    }

    /// Grade involution: each grade-r part picks up (−1)^r.
    pub fn grade_involution(&self) -> Multivector {
        self.grade_signed(involution_sign)
    }

    /// Clifford conjugation: each grade-r part picks up (−1)^(r(r+1)/2).
    pub fn clifford_conjugate(&self) -> Multivector {
        self.grade_signed(conjugate_sign)
    }
}
