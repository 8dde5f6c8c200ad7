//! Sparse matrix representation and solver interface.
//!
//! Provides a CSR (Compressed Sparse Row) matrix and a trait for sparse
//! symmetric positive-definite solvers. The Projective Dynamics system
//! matrix is scalar per vertex pair (isotropic across the three axes),
//! so an N×N matrix serves all three coordinate axes.

use serde::{Deserialize, Serialize};

/// Compressed Sparse Row (CSR) matrix with `f64` values.
///
/// Row-major storage, the standard interchange format for sparse
/// linear algebra back ends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CsrMatrix {
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub cols: usize,
    /// Row pointer array (length = rows + 1).
    /// `row_ptr[i]..row_ptr[i+1]` indexes `col_idx`/`values` for row `i`.
    pub row_ptr: Vec<usize>,
    /// Column indices of non-zero entries, ascending within each row.
    pub col_idx: Vec<usize>,
    /// Non-zero values.
    pub values: Vec<f64>,
}

impl CsrMatrix {
    /// Creates an empty CSR matrix with the given dimensions.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            row_ptr: vec![0; rows + 1],
            col_idx: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Returns the number of stored entries.
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Creates a CSR matrix from `(row, col, value)` triplets.
    ///
    /// Triplets may arrive in any order; entries for the same `(row, col)`
    /// position are summed.
    pub fn from_triplets(rows: usize, cols: usize, triplets: &[(usize, usize, f64)]) -> Self {
        let mut sorted = triplets.to_vec();
        sorted.sort_unstable_by_key(|&(r, c, _)| (r, c));

        let mut merged: Vec<(usize, usize, f64)> = Vec::with_capacity(sorted.len());
        for &(r, c, val) in &sorted {
            match merged.last_mut() {
                Some(last) if last.0 == r && last.1 == c => last.2 += val,
                _ => merged.push((r, c, val)),
            }
        }

        let mut row_ptr = vec![0_usize; rows + 1];
        for &(r, _, _) in &merged {
            row_ptr[r + 1] += 1;
        }
        for i in 0..rows {
            row_ptr[i + 1] += row_ptr[i];
        }

        let col_idx = merged.iter().map(|&(_, c, _)| c).collect();
        let values = merged.iter().map(|&(_, _, v)| v).collect();

        Self {
            rows,
            cols,
            row_ptr,
            col_idx,
            values,
        }
    }

    /// Computes `y = A·x` for a dense vector.
    pub fn mul_vec(&self, x: &[f64], y: &mut [f64]) {
        debug_assert_eq!(x.len(), self.cols);
        debug_assert_eq!(y.len(), self.rows);
        for (row, out) in y.iter_mut().enumerate() {
            let mut acc = 0.0;
            for idx in self.row_ptr[row]..self.row_ptr[row + 1] {
                acc += self.values[idx] * x[self.col_idx[idx]];
            }
            *out = acc;
        }
    }
}

/// Trait for sparse symmetric positive-definite solvers.
pub trait SparseSolver {
    /// Factorize the matrix. Call once (or after a topology or
    /// stiffness change).
    fn factorize(&mut self, matrix: &CsrMatrix) -> Result<(), String>;

    /// Solve `A·x = b` using the cached factorization, writing `x`
    /// into the output buffer.
    fn solve(&self, rhs: &[f64], solution: &mut [f64]) -> Result<(), String>;

    /// Returns true if the solver holds a valid factorization.
    fn is_factorized(&self) -> bool;
}
