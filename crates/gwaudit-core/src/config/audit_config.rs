//! Audit filter configuration.

use serde::{Deserialize, Serialize};

use crate::constants::SEVERITY_LEVELS;

/// Filters handed to the audit engine.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AuditConfig {
    /// Rule ids to suppress. `None` suppresses nothing; an explicit empty
    /// list clears ids inherited from a lower layer.
    pub ignore: Option<Vec<String>>,
    /// Severity levels to include. `None` means every level; an explicit
    /// empty list is kept as-is and yields no recommendations.
    pub severities: Option<Vec<String>>,
}

impl AuditConfig {
    /// Returns the effective ignore list, empty when unset.
    pub fn effective_ignore(&self) -> &[String] {
        self.ignore.as_deref().unwrap_or_default()
    }

    /// Returns the effective severity allow-list, defaulting to all levels.
    pub fn effective_severities(&self) -> Vec<String> {
        match &self.severities {
            Some(levels) => levels.clone(),
            None => SEVERITY_LEVELS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Splits a comma-separated list, dropping blank entries.
pub(crate) fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
