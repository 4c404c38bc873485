//! Pseudoscalar complement (dual).

use crate::blade::{Blade, BladeMask};
use crate::gp::gp_blade;
use crate::multivector::Multivector;
use crate::types::Scalar;

impl Multivector {
    /// Dual via the pseudoscalar: each component at mask `m` moves to the
    /// complement blade `I ^ m`, signed by the blade product `m · (I ^ m)`.
    ///
    /// A component whose product with its complement is zero or lands off
    /// the pseudoscalar has no well-defined dual under a degenerate metric;
    /// such contributions are skipped rather than guessed at, so in a
    /// degenerate algebra the dual covers only the well-defined part.
    pub fn dual(&self) -> Multivector {
        let sig = *self.algebra().signature();
        let i_mask = self.algebra().pseudoscalar_mask();
        let mut result = Multivector::zero(self.algebra_ref());

        for m in 0..self.blade_count() {
            let mask = m as BladeMask;
            let c = self.component(mask);
            if c == 0.0 {
                continue;
            }

            let comp = i_mask ^ mask;
            let bp = gp_blade(Blade::new(mask, 1), Blade::new(comp, 1), &sig);
            if bp.is_zero() || bp.mask != i_mask {
                continue;
            }

            result.accumulate(comp, c * bp.sign as Scalar);
        }

        result
    }
}
