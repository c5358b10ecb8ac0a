//! Shared constants.

/// Severity levels in decreasing urgency, as they appear on the wire.
pub const SEVERITY_LEVELS: &[&str] = &["CRITICAL", "HIGH", "MEDIUM", "LOW"];

/// Report formats understood by the reporters.
pub const REPORT_FORMATS: &[&str] = &["console", "json", "sarif"];

/// Report format used when none is configured.
pub const DEFAULT_REPORT_FORMAT: &str = "console";

/// Project-level config file name.
pub const PROJECT_CONFIG_FILE: &str = "gwaudit.toml";

/// Environment variable holding the tracing filter.
pub const LOG_ENV_VAR: &str = "GWAUDIT_LOG";
