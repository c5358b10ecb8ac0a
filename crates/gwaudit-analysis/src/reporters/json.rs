//! JSON reporter: the audit result as-is.

use gwaudit_core::errors::ReportError;

use super::Reporter;
use crate::audit::AuditResult;

/// Machine-readable output: `{"recommendations": [...], "stats": {}}`.
pub struct JsonReporter;

impl Reporter for JsonReporter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn generate(&self, result: &AuditResult) -> Result<String, ReportError> {
        serde_json::to_string_pretty(result).map_err(|e| ReportError::Serialization(e.to_string()))
    }
}
