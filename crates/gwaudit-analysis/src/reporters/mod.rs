//! Reporters: output formats for audit results.
//!
//! Formats: console text, JSON, SARIF 2.1.0.

pub mod console;
pub mod json;
pub mod sarif;

use gwaudit_core::constants::REPORT_FORMATS;
use gwaudit_core::errors::ReportError;

use crate::audit::AuditResult;

/// Trait for report generation.
pub trait Reporter: Send + Sync {
    fn name(&self) -> &'static str;
    fn generate(&self, result: &AuditResult) -> Result<String, ReportError>;
}

/// Create a reporter by format name.
pub fn create_reporter(format: &str) -> Option<Box<dyn Reporter>> {
    match format {
        "console" => Some(Box::new(console::ConsoleReporter::default())),
        "json" => Some(Box::new(json::JsonReporter)),
        "sarif" => Some(Box::new(sarif::SarifReporter::new())),
        _ => None,
    }
}

/// Render `result` in `format`.
pub fn render(format: &str, result: &AuditResult) -> Result<String, ReportError> {
    create_reporter(format)
        .ok_or_else(|| ReportError::UnknownFormat(format.to_string()))?
        .generate(result)
}

/// List all available reporter format names.
pub fn available_formats() -> &'static [&'static str] {
    REPORT_FORMATS
}
