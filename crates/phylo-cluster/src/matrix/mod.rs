//! Dissimilarity-matrix construction.

pub mod engine;
pub mod triangle;

pub use engine::CorrelationMatrixEngine;
pub use triangle::TriangleIndexer;
