//! Matrix construction configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the correlation-matrix engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MatrixConfig {
    /// Fan the upper triangle out across worker threads. Default: true.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parallel: Option<bool>,
    /// Size of a dedicated worker pool. `None` uses the global rayon pool.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threads: Option<usize>,
}

impl MatrixConfig {
    /// Returns the effective parallel flag, defaulting to true.
    pub fn effective_parallel(&self) -> bool {
        self.parallel.unwrap_or(true)
    }

    /// Sequential construction, mostly useful for comparisons and tests.
    pub fn sequential() -> Self {
        Self {
            parallel: Some(false),
            threads: None,
        }
    }
}
