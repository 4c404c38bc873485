// src/prelude.rs
//! The "everything" import for ga_core.
//!
//! Brings in the commonly used types with one glob:
//! ```rust
//! use ga_core::prelude::*;
//! ```

// core data types
pub use crate::algebra::{Algebra, AlgebraRef};
pub use crate::blade::{Blade, BladeMask};
pub use crate::linear_map::LinearMap;
pub use crate::multivector::Multivector;
pub use crate::rotor::Rotor;
pub use crate::signature::{Signature, MAX_DIMENSIONS};
pub use crate::versor::Versor;

// kernel operations and policies
pub use crate::error::{GaError, Result};
pub use crate::gp::{gp_blade, GradeFilter};
pub use crate::types::{Scalar, EPSILON};
