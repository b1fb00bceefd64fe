//! Population filtering applied before genes are aligned.

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// How a [`PercentileFilter`] reads its bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PercentileMode {
    /// Bounds are fractions of the header union: keep genes whose header
    /// count lies in `[⌊H·lower⌋, ⌊H·upper⌋]`.
    #[default]
    HeaderCoverage,
    /// Bounds are ranks in the population sorted by header count: keep
    /// ranks in `[⌊G·lower⌋, ⌊G·upper⌋)`.
    PopulationRank,
}

/// Keeps only the genes inside a percentile band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PercentileFilter {
    pub mode: PercentileMode,
    pub lower: f32,
    pub upper: f32,
}

impl Default for PercentileFilter {
    fn default() -> Self {
        Self {
            mode: PercentileMode::default(),
            lower: 0.0,
            upper: 1.0,
        }
    }
}

/// Optional outlier and percentile filtering of an aligned population.
///
/// Off unless `enabled` is set. When on, genes are judged by header
/// coverage (own header count over the size of the header union) and the
/// union is rebuilt from the survivors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DataAnalysisConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Drop genes whose coverage is further than `multiplier × MAD` from
    /// the median coverage. `None` or 0 disables the outlier cut.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outlier_mad_multiplier: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentile: Option<PercentileFilter>,
}

impl DataAnalysisConfig {
    /// Returns the effective enabled flag, defaulting to false.
    pub fn effective_enabled(&self) -> bool {
        self.enabled.unwrap_or(false)
    }

    /// Returns the outlier multiplier, defaulting to 0 (no outlier cut).
    pub fn effective_outlier_mad_multiplier(&self) -> f32 {
        self.outlier_mad_multiplier.unwrap_or(0.0)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let multiplier = self.effective_outlier_mad_multiplier();
        if !multiplier.is_finite() || multiplier < 0.0 {
            return Err(ConfigError::ValidationFailed {
                field: "data_analysis.outlier_mad_multiplier".to_string(),
                message: "must be a finite value >= 0".to_string(),
            });
        }
        if let Some(p) = &self.percentile {
            let in_unit = |v: f32| (0.0..=1.0).contains(&v);
            if !in_unit(p.lower) || !in_unit(p.upper) || p.lower > p.upper {
                return Err(ConfigError::ValidationFailed {
                    field: "data_analysis.percentile".to_string(),
                    message: format!(
                        "bounds must satisfy 0 <= lower <= upper <= 1, got [{}, {}]",
                        p.lower, p.upper
                    ),
                });
            }
        }
        Ok(())
    }
}
