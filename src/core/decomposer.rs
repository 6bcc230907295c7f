//! LU decomposition (Doolittle, no pivoting).
//!
//! A = L U ; L unit lower-triangular, U upper-triangular.
//!
//! The pivot check uses an absolute tolerance of `PIVOT_TOLERANCE`, not one
//! scaled by the magnitude of A. Without row exchanges, matrices that are
//! perfectly invertible can still be rejected (e.g. a zero in A[0][0]), and
//! ill-conditioned inputs reconstruct with larger error.

use tracing::{debug, trace};

use super::error::DecompositionError;
use super::matrix::Matrix;

/// Pivots with magnitude below this are treated as zero.
pub const PIVOT_TOLERANCE: f64 = 1e-12;

#[derive(Clone, Debug, PartialEq)]
pub struct LuDecomposition {
    pub l: Matrix,
    pub u: Matrix,
}

impl LuDecomposition {
    pub fn dim(&self) -> usize {
        self.l.nrows()
    }

    /// L · U
    pub fn reconstruct(&self) -> Matrix {
        let n = self.dim();
        let mut out = Matrix::zeros(n);
        // U is upper-triangular and L unit lower: only s <= min(i, j) contributes.
        for i in 0..n {
            for j in 0..n {
                out[(i, j)] = (0..=i.min(j)).map(|s| self.l[(i, s)] * self.u[(s, j)]).sum();
            }
        }
        out
    }

    /// max |A[i][j] - (L U)[i][j]|; infinite when `a` has a different shape.
    pub fn residual(&self, a: &Matrix) -> f64 {
        self.reconstruct().max_abs_diff(a).unwrap_or(f64::INFINITY)
    }
}

/// Validate `a` and factor it into unit-lower L and upper U.
///
/// `a` is only read. L and U are allocated per call and only handed back when
/// every step succeeded.
pub fn decompose(a: &Matrix) -> Result<LuDecomposition, DecompositionError> {
    if a.is_empty() {
        return Err(DecompositionError::Empty);
    }
    let n = a.nrows();
    if let Some((row, r)) = a.rows().iter().enumerate().find(|(_, r)| r.len() != n) {
        return Err(DecompositionError::NotSquare { row, expected: n, found: r.len() });
    }

    let mut l = Matrix::zeros(n);
    let mut u = Matrix::zeros(n);

    for k in 0..n {
        // Row k of U, complete before the pivot is inspected.
        for j in k..n {
            let sum: f64 = (0..k).map(|s| l[(k, s)] * u[(s, j)]).sum();
            u[(k, j)] = a[(k, j)] - sum;
        }

        let pivot = u[(k, k)];
        trace!(step = k, pivot, "elimination step");
        if pivot.abs() < PIVOT_TOLERANCE {
            debug!(n, step = k, pivot, "singular pivot, aborting");
            return Err(DecompositionError::Singular { step: k, pivot });
        }

        // Column k of L below the diagonal.
        for i in k + 1..n {
            let sum: f64 = (0..k).map(|s| l[(i, s)] * u[(s, k)]).sum();
            l[(i, k)] = (a[(i, k)] - sum) / pivot;
        }

        l[(k, k)] = 1.0;
    }

    debug!(n, "decomposition complete");
    Ok(LuDecomposition { l, u })
}
