#![allow(clippy::needless_range_loop)]
//! Dense row-major `f64` matrix used as input and output of the decomposer.
//!
//! Rows are stored as separate vectors so a ragged matrix can be represented
//! (and rejected later by `decompose`) instead of failing at construction.

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Matrix {
    rows: Vec<Vec<f64>>,
}

impl Matrix {
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Self {
        Self { rows }
    }

    pub fn zeros(n: usize) -> Self {
        Self { rows: vec![vec![0.0; n]; n] }
    }

    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n);
        for i in 0..n {
            m.rows[i][i] = 1.0;
        }
        m
    }

    /// Number of rows.
    pub fn nrows(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.rows[i]
    }

    /// Non-empty and every row as long as the row count.
    pub fn is_square(&self) -> bool {
        let n = self.rows.len();
        n > 0 && self.rows.iter().all(|r| r.len() == n)
    }

    /// Plain triple-loop product; `None` when the inner dimensions disagree
    /// or either operand is ragged.
    pub fn multiply(&self, other: &Matrix) -> Option<Matrix> {
        let inner = self.rows.first()?.len();
        if other.rows.len() != inner || self.rows.iter().any(|r| r.len() != inner) {
            return None;
        }
        let cols = other.rows.first().map_or(0, |r| r.len());
        if other.rows.iter().any(|r| r.len() != cols) {
            return None;
        }

        let mut out = vec![vec![0.0; cols]; self.rows.len()];
        for i in 0..self.rows.len() {
            for j in 0..cols {
                out[i][j] = (0..inner).map(|k| self.rows[i][k] * other.rows[k][j]).sum();
            }
        }
        Some(Matrix::from_rows(out))
    }

    /// Largest elementwise absolute difference, `None` on a shape mismatch.
    pub fn max_abs_diff(&self, other: &Matrix) -> Option<f64> {
        if self.rows.len() != other.rows.len() {
            return None;
        }
        let mut max = 0.0_f64;
        for (a, b) in self.rows.iter().zip(&other.rows) {
            if a.len() != b.len() {
                return None;
            }
            for (x, y) in a.iter().zip(b) {
                max = max.max((x - y).abs());
            }
        }
        Some(max)
    }

    /// Ones on the diagonal and exact zeros above it.
    pub fn is_unit_lower_triangular(&self) -> bool {
        self.is_square()
            && self.rows.iter().enumerate().all(|(i, row)| {
                row[i] == 1.0 && row[i + 1..].iter().all(|&x| x == 0.0)
            })
    }

    /// Exact zeros below the diagonal.
    pub fn is_upper_triangular(&self) -> bool {
        self.is_square()
            && self.rows.iter().enumerate().all(|(i, row)| row[..i].iter().all(|&x| x == 0.0))
    }
}

impl From<Vec<Vec<f64>>> for Matrix {
    fn from(rows: Vec<Vec<f64>>) -> Self {
        Self::from_rows(rows)
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        &self.rows[i][j]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f64 {
        &mut self.rows[i][j]
    }
}
