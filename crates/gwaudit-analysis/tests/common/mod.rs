//! Shared fixtures for the integration tests.
#![allow(dead_code)]

use std::path::PathBuf;

use gwaudit_analysis::service::ServiceConfig;
use serde_json::Value;

pub const ALL_SEVERITIES: &[&str] = &["CRITICAL", "HIGH", "MEDIUM", "LOW"];
pub const NO_IGNORE: &[&str] = &[];

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../test-fixtures/gateway")
        .join(name)
}

/// A gateway config on which no builtin rule fires.
pub fn hardened() -> Value {
    let raw = std::fs::read_to_string(fixture_path("hardened.json")).unwrap();
    serde_json::from_str(&raw).unwrap()
}

pub fn to_config(value: Value) -> ServiceConfig {
    serde_json::from_value(value).unwrap()
}

/// Applies `mutate` to the hardened baseline.
pub fn hardened_with(mutate: impl FnOnce(&mut Value)) -> ServiceConfig {
    let mut value = hardened();
    mutate(&mut value);
    to_config(value)
}
