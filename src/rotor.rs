//! Rotors: unit even versors applied as R X ~R.
//!
//! For a unit rotor the reverse is the inverse, so the sandwich needs no
//! division. In Euclidean signatures this is a rotation; elsewhere it is the
//! metric-appropriate isometry (e.g. a Lorentz transformation in (1,3,0)).
//! Even-grade structure is a documented precondition, not a runtime check;
//! construct rotors through `from_bivector_angle` or `from_plane_angle` to
//! stay on the rotor manifold.

use crate::error::{GaError, Result};
use crate::multivector::Multivector;
use crate::types::{Scalar, EPSILON};

#[derive(Debug, Clone)]
pub struct Rotor {
    mv: Multivector,
}

impl Rotor {
    pub fn new(mv: Multivector) -> Self {
        Self { mv }
    }

    pub fn multivector(&self) -> &Multivector {
        &self.mv
    }

    /// Scale the rotor so that R ~R = 1. Fails when the scalar part of
    /// R ~R is within epsilon of zero.
    pub fn normalize(&mut self) -> Result<()> {
        let s = self.mv.gp(&self.mv.reverse())?.component(0);
        if s.abs() <= EPSILON {
            return Err(GaError::SingularOperand { norm: s });
        }
        self.mv = self.mv.scale(1.0 / s.abs().sqrt());
        Ok(())
    }

    /// X ↦ R X ~R.
    pub fn apply(&self, x: &Multivector) -> Result<Multivector> {
        if !self.mv.same_algebra(x) {
            return Err(GaError::AlgebraMismatch);
        }
        self.mv.gp(x)?.gp(&self.mv.reverse())
    }

    /// R = cos(θ/2) − sin(θ/2) B, normalized. Assumes `b` is a unit
    /// bivector describing the plane of rotation.
    pub fn from_bivector_angle(b: &Multivector, theta: Scalar) -> Result<Rotor> {
        let half = theta * 0.5;
        let mut mv = b.scale(-half.sin());
        mv.set_component(0, mv.component(0) + half.cos());

        let mut rotor = Rotor::new(mv);
        rotor.normalize()?;
        Ok(rotor)
    }

    /// Rotor in the plane spanned by vectors `a` and `b`.
    ///
    /// The plane is B = a ∧ b, normalized through the metric: the squared
    /// magnitude is the scalar part of B · B (Hestenes inner product), which
    /// keeps the construction correct in non-Euclidean signatures. Fails
    /// when that magnitude is within epsilon of zero, i.e. when `a` and `b`
    /// span no usable plane.
    pub fn from_plane_angle(a: &Multivector, b: &Multivector, theta: Scalar) -> Result<Rotor> {
        let plane = a.wedge(b)?;
        let norm2 = plane.inner(&plane)?.component(0);
        if norm2.abs() <= EPSILON {
            return Err(GaError::SingularOperand { norm: norm2 });
        }
        let unit = plane.scale(1.0 / norm2.abs().sqrt());
        Self::from_bivector_angle(&unit, theta)
    }
}
