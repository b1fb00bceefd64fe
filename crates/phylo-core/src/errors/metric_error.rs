//! Dissimilarity metric errors.

use super::error_code::{self, ErrorCode};

/// Errors raised while comparing two feature vectors.
///
/// Any of these aborts the whole matrix build.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MetricError {
    #[error("vector {vector} has a non-finite value at position {index}")]
    NonFiniteValue { vector: String, index: usize },
}

impl ErrorCode for MetricError {
    fn error_code(&self) -> &'static str {
        error_code::METRIC_ERROR
    }
}
