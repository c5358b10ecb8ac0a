//! SARIF 2.1.0 reporter for code-scanning dashboards.

use gwaudit_core::errors::ReportError;
use serde_json::{json, Value};

use super::Reporter;
use crate::audit::{AuditResult, Severity};

pub struct SarifReporter {
    pub tool_name: String,
    pub tool_version: String,
    /// URI of the audited gateway file, attached to every result.
    pub artifact_uri: Option<String>,
}

impl SarifReporter {
    pub fn new() -> Self {
        Self {
            tool_name: "gwaudit".to_string(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            artifact_uri: None,
        }
    }

    pub fn with_artifact(mut self, uri: impl Into<String>) -> Self {
        self.artifact_uri = Some(uri.into());
        self
    }

    fn severity_to_sarif_level(severity: Severity) -> &'static str {
        match severity {
            Severity::Critical | Severity::High => "error",
            Severity::Medium => "warning",
            Severity::Low => "note",
        }
    }

    fn build_rules(&self, result: &AuditResult) -> Vec<Value> {
        result
            .recommendations
            .iter()
            .map(|rec| {
                json!({
                    "id": rec.rule,
                    "shortDescription": { "text": rec.message },
                    "defaultConfiguration": {
                        "level": Self::severity_to_sarif_level(rec.severity)
                    },
                    "properties": { "severity": rec.severity.as_str() }
                })
            })
            .collect()
    }

    fn build_results(&self, result: &AuditResult) -> Vec<Value> {
        result
            .recommendations
            .iter()
            .enumerate()
            .map(|(index, rec)| {
                let mut entry = json!({
                    "ruleId": rec.rule,
                    "ruleIndex": index,
                    "level": Self::severity_to_sarif_level(rec.severity),
                    "message": { "text": rec.message },
                });
                if let Some(ref uri) = self.artifact_uri {
                    entry["locations"] = json!([{
                        "physicalLocation": {
                            "artifactLocation": { "uri": uri }
                        }
                    }]);
                }
                entry
            })
            .collect()
    }
}

impl Default for SarifReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for SarifReporter {
    fn name(&self) -> &'static str {
        "sarif"
    }

    fn generate(&self, result: &AuditResult) -> Result<String, ReportError> {
        let sarif = json!({
            "$schema": "https://json.schemastore.org/sarif-2.1.0.json",
            "version": "2.1.0",
            "runs": [{
                "tool": {
                    "driver": {
                        "name": self.tool_name,
                        "version": self.tool_version,
                        "rules": self.build_rules(result)
                    }
                },
                "results": self.build_results(result)
            }]
        });

        serde_json::to_string_pretty(&sarif).map_err(|e| ReportError::Serialization(e.to_string()))
    }
}
