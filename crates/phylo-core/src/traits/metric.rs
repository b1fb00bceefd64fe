//! The dissimilarity capability.

use crate::config::MetricKind;
use crate::errors::MetricError;
use crate::types::FeatureVector;

/// Pairwise dissimilarity between two feature vectors of element type `E`.
///
/// Implementations must be symmetric, return 0 for a vector compared with
/// itself, and tolerate vectors of different length: positions past the
/// shorter vector's end are compared against the element type's identity
/// (0 for numbers, the empty string for tokens) rather than skipped.
///
/// The metric is chosen once when an engine is built; the matrix engine
/// calls it from several worker threads at once.
pub trait DissimilarityMetric<E>: Send + Sync {
    /// Which closed variant this metric implements.
    fn kind(&self) -> MetricKind;

    /// Whether the matrix engine must divide every cell by the observed
    /// maximum. Metrics that already return values in [0,1] say `false`.
    fn requires_normalization(&self) -> bool {
        self.kind().requires_normalization()
    }

    /// Compare two vectors. An error aborts the whole matrix build.
    fn distance(&self, a: &FeatureVector<E>, b: &FeatureVector<E>) -> Result<f32, MetricError>;
}
