//! Per-run configuration.
//! TOML-based, resolved as env > file > defaults, then passed by value into
//! the engines. Nothing here is global.

pub mod data_analysis_config;
pub mod matrix_config;
pub mod pairing_config;
pub mod phylo_config;

pub use data_analysis_config::{DataAnalysisConfig, PercentileFilter, PercentileMode};
pub use matrix_config::MatrixConfig;
pub use pairing_config::PairingConfig;
pub use phylo_config::{MetricKind, PhyloConfig};
