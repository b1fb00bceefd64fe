//! # phylo-cluster
//!
//! Turns feature vectors into a dendrogram:
//! metric → dissimilarity matrix (sequential or parallel) → average-linkage
//! (UPGMA) pairing → ordered merge events.
//!
//! Pairing rescans the whole matrix on every merge, O(N³) overall. That is
//! the dominant cost and is fine for hundreds to low thousands of genes.

pub mod dendrogram;
pub mod engine;
pub mod matrix;
pub mod metrics;
pub mod pairing;

pub use dendrogram::{Dendrogram, DendrogramNode};
pub use engine::{Clustering, PhyloEngine};
pub use matrix::{CorrelationMatrixEngine, TriangleIndexer};
pub use metrics::{EditDistance, Euclidean};
pub use pairing::AverageLinkage;
