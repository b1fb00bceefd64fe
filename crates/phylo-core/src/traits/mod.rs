//! Capability traits shared by the engines.

pub mod cancellation;
pub mod metric;

pub use cancellation::{Cancellable, CancellationToken};
pub use metric::DissimilarityMetric;
