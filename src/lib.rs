#![doc = include_str!("../README.md")]

pub mod types;
pub mod error;
pub mod signature;
pub mod algebra;
pub mod blade;
pub mod multivector;
pub mod gp;
pub mod involution;
pub mod dual;
pub mod linear_map;
pub mod versor;
pub mod rotor;
pub mod prelude;

pub use types::{Scalar, EPSILON};
pub use error::{GaError, Result};
pub use signature::{Metric, Signature, MAX_DIMENSIONS};
pub use algebra::{Algebra, AlgebraRef};
pub use blade::{Blade, BladeMask};
pub use multivector::Multivector;
pub use gp::{gp_blade, GradeFilter};
pub use linear_map::LinearMap;
pub use versor::Versor;
pub use rotor::Rotor;
