//! Shared data model: genes, encodings, labels, merge events, matrices.

pub mod encoding;
pub mod feature_vector;
pub mod label;
pub mod matrix;
pub mod merge_event;
pub mod population_filter;

pub use encoding::GeneticEncoding;
pub use feature_vector::FeatureVector;
pub use label::ClusterLabel;
pub use matrix::DissimilarityMatrix;
pub use merge_event::MergeEvent;
pub use population_filter::filter_population;
