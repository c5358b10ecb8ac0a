//! Audit errors.

use super::error_code::{self, GwauditErrorCode};

/// Errors that abort an audit. No partial result accompanies them.
#[derive(Debug, thiserror::Error)]
pub enum AuditError {
    /// The service model could not be built from the raw configuration.
    /// Reserved: the current normalization step is total.
    #[error("Normalization failed: {message}")]
    Normalization { message: String },
}

impl GwauditErrorCode for AuditError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Normalization { .. } => error_code::NORMALIZATION_ERROR,
        }
    }
}
