//! Top-level error aggregating every subsystem.

use super::error_code::{self, ErrorCode};
use super::{ConfigError, EncodingError, MatrixError, PairingError};

/// Errors surfaced by a full clustering run.
#[derive(Debug, thiserror::Error)]
pub enum PhyloError {
    #[error("Encoding error: {0}")]
    Encoding(#[from] EncodingError),

    #[error("Matrix error: {0}")]
    Matrix(#[from] MatrixError),

    #[error("Pairing error: {0}")]
    Pairing(#[from] PairingError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Run cancelled")]
    Cancelled,

    #[error("a clustering run is already in progress on this engine")]
    AlreadyRunning,
}

impl ErrorCode for PhyloError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Encoding(e) => e.error_code(),
            Self::Matrix(e) => e.error_code(),
            Self::Pairing(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Cancelled => error_code::CANCELLED,
            Self::AlreadyRunning => error_code::ALREADY_RUNNING,
        }
    }
}

pub type PhyloResult<T> = Result<T, PhyloError>;
