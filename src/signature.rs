//! Metric signatures: the measurement rules of a space.
//!
//! A signature assigns each basis axis a square of +1, −1, or 0. A positive
//! axis behaves like an ordinary number line, a negative axis like an
//! imaginary one, and a null axis squares to zero outright. The triple
//! (p, q, r) counts the axes of each kind:
//!
//! - Euclidean 3-space is (3, 0, 0)
//! - spacetime algebra is (1, 3, 0), one time axis plus three space axes
//! - projective GA is (3, 0, 1), with a null axis for the plane at infinity
//! - conformal GA is (4, 1, 0)
//!
//! The metric is diagonal: `g(i)` is the square of axis `e_i`, and mixed
//! terms `g(i, j)` for `i != j` are zero by the orthogonal-basis assumption.

use crate::blade::BladeMask;
use crate::error::{GaError, Result};

/// Hard cap on axis count. Multivector storage is 2^n coefficients, so the
/// dense representation stops being reasonable well before this runs out.
pub const MAX_DIMENSIONS: usize = 8;

/// Diagonal metric entries g(i), one per axis slot.
pub type Metric = [i32; MAX_DIMENSIONS];

/// A (p, q, r) metric signature with an orientation flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    p: usize,
    q: usize,
    r: usize,
    metric: Metric,
    right_handed: bool,
    dimensions: usize,
}

impl Signature {
    /// Signature from axis counts: the first `p` axes square to +1, the next
    /// `q` to −1, the last `r` to 0.
    pub fn new(p: usize, q: usize, r: usize, right_handed: bool) -> Result<Self> {
        let n = p + q + r;
        if n > MAX_DIMENSIONS {
            return Err(GaError::InvalidSignature {
                axes: n,
                max: MAX_DIMENSIONS,
            });
        }
        let mut metric = [0i32; MAX_DIMENSIONS];
        for g in metric.iter_mut().take(p) {
            *g = 1;
        }
        for g in metric.iter_mut().take(p + q).skip(p) {
            *g = -1;
        }
        Ok(Self {
            p,
            q,
            r,
            metric,
            right_handed,
            dimensions: n,
        })
    }

    /// Signature from one axis bitmask per class. Axis `i` takes the sign of
    /// whichever mask contains bit `i`; this expresses non-canonical axis
    /// orderings such as a trailing time axis. The masks must be pairwise
    /// disjoint. Axes below the highest set bit that appear in no mask are
    /// null.
    pub fn from_masks(
        p_mask: BladeMask,
        q_mask: BladeMask,
        r_mask: BladeMask,
        right_handed: bool,
    ) -> Result<Self> {
        if p_mask & q_mask != 0 || p_mask & r_mask != 0 || q_mask & r_mask != 0 {
            return Err(GaError::OverlappingMasks {
                p: p_mask,
                q: q_mask,
                r: r_mask,
            });
        }
        let union = p_mask | q_mask | r_mask;
        let n = (BladeMask::BITS - union.leading_zeros()) as usize;
        if n > MAX_DIMENSIONS {
            return Err(GaError::InvalidSignature {
                axes: n,
                max: MAX_DIMENSIONS,
            });
        }
        let mut metric = [0i32; MAX_DIMENSIONS];
        for (i, g) in metric.iter_mut().enumerate().take(n) {
            let bit = 1 << i;
            if p_mask & bit != 0 {
                *g = 1;
            } else if q_mask & bit != 0 {
                *g = -1;
            }
        }
        Ok(Self::from_parts(metric, n, right_handed))
    }

    /// Signature from an explicit diagonal metric. Entries are expected to be
    /// −1, 0, or +1; `axis_count` bounds how many are meaningful, and the
    /// counts (p, q, r) are recovered from the entries.
    pub fn from_metric(metric: Metric, axis_count: usize, right_handed: bool) -> Result<Self> {
        if axis_count > MAX_DIMENSIONS {
            return Err(GaError::InvalidSignature {
                axes: axis_count,
                max: MAX_DIMENSIONS,
            });
        }
        let mut bounded = [0i32; MAX_DIMENSIONS];
        bounded[..axis_count].copy_from_slice(&metric[..axis_count]);
        Ok(Self::from_parts(bounded, axis_count, right_handed))
    }

    fn from_parts(metric: Metric, dimensions: usize, right_handed: bool) -> Self {
        let mut p = 0;
        let mut q = 0;
        let mut r = 0;
        for &g in metric.iter().take(dimensions) {
            match g {
                1 => p += 1,
                -1 => q += 1,
                _ => r += 1,
            }
        }
        Self {
            p,
            q,
            r,
            metric,
            right_handed,
            dimensions,
        }
    }

    /// The square of axis `e_i`. Axes at or past `dimensions()` are absent
    /// and report 0; blade iteration never reaches them.
    #[inline]
    pub fn g(&self, i: usize) -> i32 {
        if i < self.dimensions {
            self.metric[i]
        } else {
            0
        }
    }

    pub fn p(&self) -> usize {
        self.p
    }

    pub fn q(&self) -> usize {
        self.q
    }

    pub fn r(&self) -> usize {
        self.r
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    pub fn metric(&self) -> &Metric {
        &self.metric
    }

    pub fn is_right_handed(&self) -> bool {
        self.right_handed
    }

    pub fn is_left_handed(&self) -> bool {
        !self.right_handed
    }

    /// A signature is degenerate when it contains a null axis.
    pub fn is_degenerate(&self) -> bool {
        self.r > 0
    }

    pub fn is_pos(&self, i: usize) -> bool {
        self.g(i) == 1
    }

    pub fn is_neg(&self, i: usize) -> bool {
        self.g(i) == -1
    }

    pub fn is_null(&self, i: usize) -> bool {
        i < self.dimensions && self.metric[i] == 0
    }
}
