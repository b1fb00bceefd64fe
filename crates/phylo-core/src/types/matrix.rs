//! Flat row-major N×N dissimilarity matrix.

use serde::{Deserialize, Serialize};

use crate::errors::MatrixError;

/// Symmetric, non-negative dissimilarities between N genes (0 = identical).
///
/// Stored row-major in a flat buffer of `n * n` cells. The pairing engine
/// takes ownership and rewrites it in place, so a consumed matrix is never
/// handed back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DissimilarityMatrix {
    n: usize,
    cells: Vec<f32>,
}

impl DissimilarityMatrix {
    /// An all-zero matrix for `n` genes.
    pub fn zeros(n: usize) -> Self {
        Self {
            n,
            cells: vec![0.0; n * n],
        }
    }

    /// Wrap an existing row-major buffer. Fails unless `cells.len() == n * n`.
    pub fn from_cells(n: usize, cells: Vec<f32>) -> Result<Self, MatrixError> {
        let expected = n * n;
        if cells.len() != expected {
            return Err(MatrixError::DimensionMismatch {
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self { n, cells })
    }

    /// Number of rows (and columns).
    pub fn dimension(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.cells[row * self.n + col]
    }

    /// Write `value` to both `(row, col)` and `(col, row)`.
    #[inline]
    pub fn set_symmetric(&mut self, row: usize, col: usize, value: f32) {
        self.cells[row * self.n + col] = value;
        self.cells[col * self.n + row] = value;
    }

    pub fn row(&self, row: usize) -> &[f32] {
        &self.cells[row * self.n..(row + 1) * self.n]
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.cells
    }

    pub fn into_cells(self) -> Vec<f32> {
        self.cells
    }

    /// Largest cell, or 0 for an empty matrix.
    pub fn max_value(&self) -> f32 {
        self.cells.iter().copied().fold(0.0, f32::max)
    }

    /// First `(row, col)` with `row < col` where the mirror cell differs.
    pub fn first_asymmetry(&self) -> Option<(usize, usize)> {
        (0..self.n)
            .flat_map(|i| ((i + 1)..self.n).map(move |j| (i, j)))
            .find(|&(i, j)| self.get(i, j) != self.get(j, i))
    }

    pub fn is_symmetric(&self) -> bool {
        self.first_asymmetry().is_none()
    }
}
