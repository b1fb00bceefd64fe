//! Error handling for phylo.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod encoding_error;
pub mod error_code;
pub mod matrix_error;
pub mod metric_error;
pub mod pairing_error;
pub mod phylo_error;

pub use config_error::ConfigError;
pub use encoding_error::EncodingError;
pub use error_code::ErrorCode;
pub use matrix_error::MatrixError;
pub use metric_error::MetricError;
pub use pairing_error::PairingError;
pub use phylo_error::{PhyloError, PhyloResult};
