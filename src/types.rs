// src/types.rs
//! Scalar precision policy for the whole crate.

#[cfg(feature = "f32")]
pub type Scalar = f32;
#[cfg(not(feature = "f32"))]
pub type Scalar = f64;

/// Tolerance shared by every numeric guard: versor inversion, rotor
/// normalization, and the plane-wedge magnitude check.
#[cfg(feature = "f32")]
pub const EPSILON: Scalar = 1e-6;
#[cfg(not(feature = "f32"))]
pub const EPSILON: Scalar = 1e-9;
