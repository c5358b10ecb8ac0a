//! Error handling for gwaudit.
//! One error enum per concern, `thiserror` only.

pub mod audit_error;
pub mod config_error;
pub mod error_code;
pub mod load_error;
pub mod report_error;

pub use audit_error::AuditError;
pub use config_error::ConfigError;
pub use error_code::GwauditErrorCode;
pub use load_error::LoadError;
pub use report_error::ReportError;
