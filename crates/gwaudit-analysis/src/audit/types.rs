//! Core value types of the audit engine.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a recommendation, in decreasing urgency.
///
/// The engine never compares levels; it only checks whether a level's
/// wire string is in the caller's allow-list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    /// The exact, case-sensitive wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "CRITICAL",
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
        }
    }

    pub fn all() -> &'static [Severity] {
        &[Self::Critical, Self::High, Self::Medium, Self::Low]
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    /// Exact match only: `"high"` is not `HIGH`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| format!("unknown severity: {s}"))
    }
}

/// One actionable finding: which rule, how urgent, what to do.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Recommendation {
    /// Dotted `SECTION.SUBSECTION.INDEX` identifier.
    pub rule: String,
    pub severity: Severity,
    pub message: String,
}

/// Reserved for future audit statistics. Serializes as `{}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {}

/// Output of one audit, recommendations in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditResult {
    pub recommendations: Vec<Recommendation>,
    pub stats: Stats,
}

impl AuditResult {
    pub fn is_empty(&self) -> bool {
        self.recommendations.is_empty()
    }

    /// Rule ids in output order.
    pub fn rule_ids(&self) -> Vec<&str> {
        self.recommendations.iter().map(|r| r.rule.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_parses_exactly() {
        assert_eq!("CRITICAL".parse::<Severity>(), Ok(Severity::Critical));
        assert!("critical".parse::<Severity>().is_err());
        assert!(" HIGH".parse::<Severity>().is_err());
    }

    #[test]
    fn empty_result_serializes_with_empty_stats_object() {
        let json = serde_json::to_string(&AuditResult::default()).unwrap();
        assert_eq!(json, r#"{"recommendations":[],"stats":{}}"#);
    }

    #[test]
    fn recommendation_wire_shape() {
        let rec = Recommendation {
            rule: "2.1.2".to_string(),
            severity: Severity::High,
            message: "Enable TLS.".to_string(),
        };
        let value = serde_json::to_value(&rec).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"rule": "2.1.2", "severity": "HIGH", "message": "Enable TLS."})
        );
    }
}
