//! Stable error codes for embedders.

/// Maps an error to a stable, machine-readable code.
/// Every error enum implements this so callers can match on codes
/// instead of display strings.
pub trait GwauditErrorCode {
    /// Returns the error code string (e.g., "LOAD_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const NORMALIZATION_ERROR: &str = "NORMALIZATION_ERROR";
pub const LOAD_ERROR: &str = "LOAD_ERROR";
pub const UNSUPPORTED_FORMAT: &str = "UNSUPPORTED_FORMAT";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const REPORT_ERROR: &str = "REPORT_ERROR";
