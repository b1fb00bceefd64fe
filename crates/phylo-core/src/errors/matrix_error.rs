//! Correlation-matrix construction errors.

use super::error_code::{self, ErrorCode};
use super::MetricError;

/// Errors that can occur while building a dissimilarity matrix.
/// No partial matrix is returned alongside any of these.
#[derive(Debug, thiserror::Error)]
pub enum MatrixError {
    #[error("metric failed comparing rows {row} and {col}: {source}")]
    Metric {
        row: usize,
        col: usize,
        #[source]
        source: MetricError,
    },

    #[error("metric produced a non-finite or negative distance for rows {row} and {col}")]
    InvalidDistance { row: usize, col: usize },

    #[error("matrix buffer has {actual} cells, expected {expected}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("failed to build worker pool: {message}")]
    ThreadPool { message: String },
}

impl ErrorCode for MatrixError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Metric { source, .. } => source.error_code(),
            _ => error_code::MATRIX_ERROR,
        }
    }
}
