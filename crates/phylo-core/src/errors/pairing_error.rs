//! Pairing input contract violations.

use super::error_code::{self, ErrorCode};

/// Malformed input handed to the pairing engine, or a merge-event list that
/// does not describe a single tree.
///
/// Matrix/label problems are detected before the first merge, so no events
/// are ever produced for bad input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PairingError {
    #[error("{labels} labels supplied for a {dimension}x{dimension} matrix")]
    LabelCountMismatch { labels: usize, dimension: usize },

    #[error("matrix is not symmetric at ({row}, {col})")]
    AsymmetricMatrix { row: usize, col: usize },

    #[error("matrix cell ({row}, {col}) is negative or non-finite")]
    InvalidDistance { row: usize, col: usize },

    #[error("merge event {event} refers to cluster {id}, which is unknown or already merged")]
    UnknownCluster { event: usize, id: usize },

    #[error("merge events leave {roots} disconnected clusters instead of one root")]
    IncompleteTree { roots: usize },
}

impl ErrorCode for PairingError {
    fn error_code(&self) -> &'static str {
        error_code::PAIRING_CONTRACT
    }
}
