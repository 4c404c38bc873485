//! Error types for ga_core.

use thiserror::Error;

use crate::blade::BladeMask;
use crate::types::Scalar;

/// Failure kinds surfaced by the public API.
///
/// Precondition violations (`InvalidSignature`, `OverlappingMasks`,
/// `AlgebraMismatch`, `OutOfRange`) are reported before any output is
/// produced. `SingularOperand` is the numeric guard shared by versor
/// inversion, rotor normalization, and plane-angle rotor construction.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GaError {
    /// More axes requested than the dense representation supports.
    #[error("invalid signature: {axes} axes requested, at most {max} supported")]
    InvalidSignature { axes: usize, max: usize },

    /// The p/q/r axis masks passed to `Signature::from_masks` share a bit.
    #[error("invalid signature: axis masks overlap (p={p:#010b}, q={q:#010b}, r={r:#010b})")]
    OverlappingMasks {
        p: BladeMask,
        q: BladeMask,
        r: BladeMask,
    },

    /// Two multivectors in a binary operation do not reference the same
    /// algebra.
    #[error("multivectors do not share the same algebra")]
    AlgebraMismatch,

    /// Inversion or normalization found a scalar norm within epsilon of zero.
    #[error("singular operand: scalar norm {norm} is within epsilon of zero")]
    SingularOperand { norm: Scalar },

    /// A row, column, or axis index outside `[0, dimensions)`.
    #[error("index {index} out of range for a {dims}-dimensional algebra")]
    OutOfRange { index: usize, dims: usize },
}

pub type Result<T> = std::result::Result<T, GaError>;
