//! CorrelationMatrixEngine: builds the N×N dissimilarity matrix.
//!
//! Despite the historical "correlation" name, cells are dissimilarities:
//! 0 means identical.

use std::sync::atomic::{AtomicU32, Ordering};

use phylo_core::config::MatrixConfig;
use phylo_core::errors::MatrixError;
use phylo_core::traits::DissimilarityMetric;
use phylo_core::types::{DissimilarityMatrix, FeatureVector};
use rayon::prelude::*;
use tracing::{debug, info};

use super::TriangleIndexer;

/// Builds a symmetric dissimilarity matrix with one metric.
///
/// Sequential and parallel construction produce bit-identical matrices for
/// the same genes: both compute `metric(genes[row], genes[col])` once per
/// `row < col`, mirror it, and apply the same normalization.
#[derive(Debug, Clone)]
pub struct CorrelationMatrixEngine<M> {
    metric: M,
    config: MatrixConfig,
}

impl<M> CorrelationMatrixEngine<M> {
    pub fn new(metric: M, config: MatrixConfig) -> Self {
        Self { metric, config }
    }

    pub fn metric(&self) -> &M {
        &self.metric
    }

    pub fn config(&self) -> &MatrixConfig {
        &self.config
    }

    /// Build the matrix in the mode selected by the config.
    ///
    /// Any metric failure aborts the build; no partial matrix is returned.
    pub fn build<E>(&self, genes: &[FeatureVector<E>]) -> Result<DissimilarityMatrix, MatrixError>
    where
        M: DissimilarityMetric<E>,
        E: Sync,
    {
        let parallel = self.config.effective_parallel();
        info!(
            genes = genes.len(),
            pairs = TriangleIndexer::new(genes.len()).pair_count(),
            parallel,
            metric = %self.metric.kind(),
            "building dissimilarity matrix"
        );

        if genes.len() <= 1 {
            debug!(genes = genes.len(), "degenerate input, returning trivial matrix");
            return Ok(DissimilarityMatrix::zeros(genes.len()));
        }

        if parallel {
            self.build_parallel(genes)
        } else {
            self.build_sequential(genes)
        }
    }

    /// Single-threaded construction over `i < j`.
    pub fn build_sequential<E>(
        &self,
        genes: &[FeatureVector<E>],
    ) -> Result<DissimilarityMatrix, MatrixError>
    where
        M: DissimilarityMetric<E>,
    {
        let n = genes.len();
        let mut matrix = DissimilarityMatrix::zeros(n);
        let mut max = 0.0f32;

        for (i, j) in TriangleIndexer::new(n).upper_pairs() {
            let d = self.compare(genes, i, j)?;
            matrix.set_symmetric(i, j, d);
            max = max.max(d);
        }

        let normalize = self.metric.requires_normalization();
        finish(matrix.into_cells(), n, max, normalize)
    }

    /// Data-parallel construction over the flat index space `[0, N²)`.
    ///
    /// Only flat indices above the diagonal do work, and each writes the two
    /// disjoint cells `[row,col]` and `[col,row]`. The running maximum is an
    /// atomic `fetch_max` over the f32 bit pattern, which orders the same as
    /// the value for the non-negative finite distances `compare` admits.
    pub fn build_parallel<E>(
        &self,
        genes: &[FeatureVector<E>],
    ) -> Result<DissimilarityMatrix, MatrixError>
    where
        M: DissimilarityMetric<E>,
        E: Sync,
    {
        match self.config.threads {
            Some(threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|e| MatrixError::ThreadPool {
                        message: e.to_string(),
                    })?;
                pool.install(|| self.fill_parallel(genes))
            }
            None => self.fill_parallel(genes),
        }
    }

    fn fill_parallel<E>(&self, genes: &[FeatureVector<E>]) -> Result<DissimilarityMatrix, MatrixError>
    where
        M: DissimilarityMetric<E>,
        E: Sync,
    {
        let n = genes.len();
        let tri = TriangleIndexer::new(n);
        let cells: Vec<AtomicU32> = (0..tri.cell_count())
            .map(|_| AtomicU32::new(0.0f32.to_bits()))
            .collect();
        let max_bits = AtomicU32::new(0.0f32.to_bits());

        (0..tri.cell_count())
            .into_par_iter()
            .filter(|&k| tri.is_upper(k))
            .try_for_each(|k| {
                let (row, col) = tri.coords(k);
                let d = self.compare(genes, row, col)?;
                let bits = d.to_bits();
                cells[k].store(bits, Ordering::Relaxed);
                cells[tri.flat(col, row)].store(bits, Ordering::Relaxed);
                max_bits.fetch_max(bits, Ordering::Relaxed);
                Ok::<(), MatrixError>(())
            })?;

        let cells: Vec<f32> = cells
            .into_iter()
            .map(|c| f32::from_bits(c.into_inner()))
            .collect();
        let max = f32::from_bits(max_bits.into_inner());

        finish(cells, n, max, self.metric.requires_normalization())
    }

    /// Compare one pair, rejecting values the matrix cannot hold.
    fn compare<E>(&self, genes: &[FeatureVector<E>], row: usize, col: usize) -> Result<f32, MatrixError>
    where
        M: DissimilarityMetric<E>,
    {
        let d = self
            .metric
            .distance(&genes[row], &genes[col])
            .map_err(|source| MatrixError::Metric { row, col, source })?;
        if !d.is_finite() || d < 0.0 {
            return Err(MatrixError::InvalidDistance { row, col });
        }
        // Fold -0.0 into +0.0 so bit patterns order like values.
        Ok(if d == 0.0 { 0.0 } else { d })
    }
}

/// Post-normalize when the metric asks for it. A zero maximum (all genes
/// identical) leaves the matrix untouched.
fn finish(
    mut cells: Vec<f32>,
    n: usize,
    max: f32,
    requires_normalization: bool,
) -> Result<DissimilarityMatrix, MatrixError> {
    let normalize = requires_normalization && max > 0.0;
    if normalize {
        for cell in cells.iter_mut() {
            *cell /= max;
        }
    }
    info!(genes = n, max, normalized = normalize, "dissimilarity matrix built");
    DissimilarityMatrix::from_cells(n, cells)
}
