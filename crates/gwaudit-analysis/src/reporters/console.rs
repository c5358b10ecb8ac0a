//! Console reporter: one tab-separated line per recommendation.

use std::fmt::Write as _;

use gwaudit_core::errors::ReportError;

use super::Reporter;
use crate::audit::{AuditResult, Severity};

const RESET: &str = "\x1b[0m";

pub struct ConsoleReporter {
    pub use_color: bool,
}

impl ConsoleReporter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    /// Severity label, wrapped in its ANSI colour when enabled.
    fn label(&self, severity: Severity) -> String {
        if !self.use_color {
            return severity.as_str().to_string();
        }
        let color = match severity {
            Severity::Critical | Severity::High => "\x1b[31m",
            Severity::Medium => "\x1b[33m",
            Severity::Low => "\x1b[36m",
        };
        format!("{color}{severity}{RESET}")
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Reporter for ConsoleReporter {
    fn name(&self) -> &'static str {
        "console"
    }

    fn generate(&self, result: &AuditResult) -> Result<String, ReportError> {
        let mut output = String::new();
        for rec in &result.recommendations {
            writeln!(
                output,
                "{}\t[{}]   \t{}",
                rec.rule,
                self.label(rec.severity),
                rec.message
            )
            .map_err(|e| ReportError::Serialization(e.to_string()))?;
        }
        Ok(output)
    }
}
