//! Gene encoding errors.

use super::error_code::{self, ErrorCode};

/// Errors raised while laying genes onto a shared header order.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EncodingError {
    #[error("gene {gene} has {headers} headers but {values} values")]
    HeaderValueMismatch {
        gene: String,
        headers: usize,
        values: usize,
    },
}

impl ErrorCode for EncodingError {
    fn error_code(&self) -> &'static str {
        error_code::ENCODING_ERROR
    }
}
