use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_RETIRED_MARKER;

/// Configuration for the hierarchical pairing engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PairingConfig {
    /// Prefix used when a retired label is rendered as text.
    pub retired_marker: char,
}

impl Default for PairingConfig {
    fn default() -> Self {
        Self {
            retired_marker: DEFAULT_RETIRED_MARKER,
        }
    }
}
