//! Gateway configuration loading errors.

use super::error_code::{self, GwauditErrorCode};

/// Errors raised while reading a gateway configuration file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Cannot read {path}: {message}")]
    Io { path: String, message: String },

    #[error("Invalid {format} in {path}: {message}")]
    Decode {
        path: String,
        format: &'static str,
        message: String,
    },

    #[error("Unsupported gateway config format: {path}")]
    UnsupportedFormat { path: String },
}

impl GwauditErrorCode for LoadError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnsupportedFormat { .. } => error_code::UNSUPPORTED_FORMAT,
            _ => error_code::LOAD_ERROR,
        }
    }
}
