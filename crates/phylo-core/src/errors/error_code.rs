//! Stable, machine-readable error codes.

/// Every error enum implements this to expose a structured code string,
/// so callers can branch on the failure class without matching variants.
pub trait ErrorCode {
    /// Returns the error code string (e.g., "METRIC_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const ENCODING_ERROR: &str = "ENCODING_ERROR";
pub const METRIC_ERROR: &str = "METRIC_ERROR";
pub const MATRIX_ERROR: &str = "MATRIX_ERROR";
pub const PAIRING_CONTRACT: &str = "PAIRING_CONTRACT";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const CANCELLED: &str = "CANCELLED";
pub const ALREADY_RUNNING: &str = "ALREADY_RUNNING";
