//! Structured span field names shared across gwaudit.
//!
//! Consistent names keep log queries stable between releases.

/// Engine: number of catalog rules whose predicate was evaluated.
pub const RULES_EVALUATED: &str = "rules_evaluated";

/// Engine: number of recommendations emitted.
pub const RULES_FIRED: &str = "rules_fired";

/// Engine: rules skipped by the ignore list.
pub const RULES_IGNORED: &str = "rules_ignored";

/// Engine: audit wall time in microseconds.
pub const AUDIT_TIME_US: &str = "audit_time_us";

/// Loader: gateway config decode time in milliseconds.
pub const LOAD_TIME_MS: &str = "load_time_ms";
