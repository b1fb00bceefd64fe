//! # phylo-core
//!
//! Foundation crate for the phylo clustering engine.
//! Defines the shared types, traits, errors, config, and tracing setup.
//! `phylo-cluster` builds the matrix and pairing engines on top of this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod logging;
pub mod traits;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::{MetricKind, PhyloConfig};
pub use errors::{PhyloError, PhyloResult};
pub use traits::{Cancellable, CancellationToken, DissimilarityMetric};
pub use types::{ClusterLabel, DissimilarityMatrix, FeatureVector, GeneticEncoding, MergeEvent};
