//! Report output configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_REPORT_FORMAT;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ReportConfig {
    /// Output format: "console" | "json" | "sarif". Default: "console".
    pub format: Option<String>,
    /// ANSI colours in console output. Default: true.
    pub color: Option<bool>,
}

impl ReportConfig {
    pub fn effective_format(&self) -> &str {
        self.format.as_deref().unwrap_or(DEFAULT_REPORT_FORMAT)
    }

    pub fn effective_color(&self) -> bool {
        self.color.unwrap_or(true)
    }
}
