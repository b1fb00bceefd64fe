//! Top-level configuration for one clustering run.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{DataAnalysisConfig, MatrixConfig, PairingConfig};
use crate::constants::{ENV_PARALLEL, ENV_THREADS};
use crate::errors::ConfigError;

/// The closed set of dissimilarity metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    /// Euclidean distance over numeric genes, normalized matrix-wide.
    #[default]
    Euclidean,
    /// Token-wise Levenshtein distance over symbolic genes, self-normalized.
    EditDistance,
}

impl MetricKind {
    /// Whether matrices built with this metric are divided by their maximum.
    pub fn requires_normalization(self) -> bool {
        matches!(self, Self::Euclidean)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Euclidean => "euclidean",
            Self::EditDistance => "edit_distance",
        }
    }
}

impl std::fmt::Display for MetricKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration scoped to a single pipeline run.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`PHYLO_PARALLEL`, `PHYLO_THREADS`)
/// 2. The TOML file passed to [`PhyloConfig::load`]
/// 3. Compiled defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PhyloConfig {
    pub metric: MetricKind,
    pub matrix: MatrixConfig,
    pub pairing: PairingConfig,
    /// Applied by `PhyloEngine::run_aligned` when genes are aligned.
    pub data_analysis: DataAnalysisConfig,
}

impl PhyloConfig {
    /// Load a config file, apply environment overrides, and validate.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let mut config: PhyloConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::apply_env_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string. No environment overrides.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: PhyloConfig = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.matrix.threads == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "matrix.threads".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.pairing.retired_marker.is_whitespace() {
            return Err(ConfigError::ValidationFailed {
                field: "pairing.retired_marker".to_string(),
                message: "must be a visible character".to_string(),
            });
        }
        self.data_analysis.validate()
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Unparseable values are ignored and the file/default value kept.
    fn apply_env_overrides(config: &mut PhyloConfig) {
        if let Ok(val) = std::env::var(ENV_PARALLEL) {
            if let Ok(v) = val.parse::<bool>() {
                config.matrix.parallel = Some(v);
            }
        }
        if let Ok(val) = std::env::var(ENV_THREADS) {
            if let Ok(v) = val.parse::<usize>() {
                config.matrix.threads = Some(v);
            }
        }
    }
}
