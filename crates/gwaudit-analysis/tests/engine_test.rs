//! Audit engine: filtering semantics, ordering, determinism.

mod common;

use common::*;
use gwaudit_analysis::audit::{audit, Auditor, Catalog, Severity};
use gwaudit_analysis::service::{load_service_config, ServiceConfig};
use serde_json::json;

#[test]
fn hardened_baseline_fires_nothing() {
    let config = to_config(hardened());
    let result = audit(&config, NO_IGNORE, ALL_SEVERITIES).unwrap();
    assert!(result.is_empty(), "unexpected: {:?}", result.rule_ids());
}

#[test]
fn end_to_end_high_and_critical_on_exposed_gateway() {
    let config = load_service_config(&fixture_path("exposed.json")).unwrap();
    let result = audit(&config, NO_IGNORE, &["HIGH", "CRITICAL"]).unwrap();

    assert_eq!(
        result.rule_ids(),
        vec!["1.2.1", "2.1.2", "2.1.7", "2.2.2", "3.1.2", "3.1.3"]
    );
    assert!(result
        .recommendations
        .iter()
        .all(|r| matches!(r.severity, Severity::High | Severity::Critical)));

    let pos = |id: &str| result.rule_ids().iter().position(|r| *r == id).unwrap();
    assert!(pos("2.1.2") < pos("3.1.2"));
    assert!(pos("3.1.2") < pos("3.1.3"));
}

#[test]
fn all_severities_on_exposed_gateway_keep_catalog_order() {
    let config = load_service_config(&fixture_path("exposed.json")).unwrap();
    let result = audit(&config, NO_IGNORE, ALL_SEVERITIES).unwrap();
    assert_eq!(
        result.rule_ids(),
        vec![
            "1.2.1", "2.1.2", "2.1.7", "2.2.1", "2.2.2", "3.1.1", "3.1.2", "3.1.3", "4.1.1",
            "4.1.2", "4.2.1", "5.2.2",
        ]
    );
}

#[test]
fn empty_severities_yield_nothing() {
    let config = load_service_config(&fixture_path("exposed.json")).unwrap();
    let result = audit(&config, NO_IGNORE, &[] as &[&str]).unwrap();
    assert!(result.is_empty());
}

#[test]
fn ignoring_every_rule_yields_nothing() {
    let config = load_service_config(&fixture_path("exposed.json")).unwrap();
    let ids: Vec<&str> = Catalog::builtin().ids().collect();
    let result = audit(&config, &ids, ALL_SEVERITIES).unwrap();
    assert!(result.is_empty());
}

#[test]
fn ignore_wins_over_matching_severity_and_true_predicate() {
    let config = load_service_config(&fixture_path("exposed.json")).unwrap();
    let result = audit(&config, &["2.1.2"], &["HIGH"]).unwrap();
    assert!(!result.rule_ids().contains(&"2.1.2"));
    assert!(result.rule_ids().contains(&"3.1.2"));
}

#[test]
fn unknown_filter_entries_are_no_ops() {
    let config = load_service_config(&fixture_path("exposed.json")).unwrap();
    let baseline = audit(&config, NO_IGNORE, &["HIGH"]).unwrap();
    let noisy = audit(&config, &["0.0.0", "not-a-rule"], &["HIGH", "high", "BLOCKER"]).unwrap();
    assert_eq!(baseline, noisy);
}

#[test]
fn audit_is_idempotent() {
    let config = load_service_config(&fixture_path("exposed.json")).unwrap();
    let first = audit(&config, &["3.1.1"], ALL_SEVERITIES).unwrap();
    let second = audit(&config, &["3.1.1"], ALL_SEVERITIES).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn timeout_family_at_six_seconds() {
    let config = hardened_with(|v| v["timeout"] = json!("6s"));
    let result = audit(&config, NO_IGNORE, ALL_SEVERITIES).unwrap();
    assert_eq!(result.rule_ids(), vec!["3.3.1", "3.3.2"]);
}

#[test]
fn timeout_family_at_forty_five_seconds() {
    let config = hardened_with(|v| v["timeout"] = json!("45000ms"));
    let result = audit(&config, NO_IGNORE, ALL_SEVERITIES).unwrap();
    assert_eq!(result.rule_ids(), vec!["3.3.1", "3.3.2", "3.3.3"]);
}

#[test]
fn timeout_family_reads_endpoint_timeouts() {
    let config = hardened_with(|v| v["endpoints"][0]["timeout"] = json!("2m"));
    let result = audit(&config, NO_IGNORE, ALL_SEVERITIES).unwrap();
    assert_eq!(result.rule_ids(), vec!["3.3.1", "3.3.2", "3.3.3", "3.3.4"]);
}

#[test]
fn endpoint_timeout_overrides_service_default() {
    let config = hardened_with(|v| {
        v["timeout"] = json!("45s");
        v["endpoints"][0]["timeout"] = json!("1s");
    });
    let result = audit(&config, NO_IGNORE, ALL_SEVERITIES).unwrap();
    assert!(result.is_empty(), "unexpected: {:?}", result.rule_ids());
}

#[test]
fn endpoints_without_timeout_inherit_service_default() {
    let config = hardened_with(|v| {
        v["timeout"] = json!("45s");
        v["endpoints"][0]["timeout"] = json!("1s");
        let mut second = v["endpoints"][0].clone();
        second["endpoint"] = json!("/teams/{id}");
        second.as_object_mut().unwrap().remove("timeout");
        v["endpoints"].as_array_mut().unwrap().push(second);
    });
    let result = audit(&config, NO_IGNORE, ALL_SEVERITIES).unwrap();
    assert_eq!(result.rule_ids(), vec!["3.3.1", "3.3.2", "3.3.3"]);
}

#[test]
fn service_timeout_counts_when_there_are_no_endpoints() {
    let config = to_config(json!({"timeout": "45s"}));
    let result = audit(&config, NO_IGNORE, ALL_SEVERITIES).unwrap();
    let timeouts: Vec<&str> = result
        .rule_ids()
        .into_iter()
        .filter(|id| id.starts_with("3.3."))
        .collect();
    assert_eq!(timeouts, vec!["3.3.1", "3.3.2", "3.3.3"]);
}

#[test]
fn timeout_at_exact_threshold_does_not_fire() {
    let config = hardened_with(|v| v["timeout"] = json!("3s"));
    let result = audit(&config, NO_IGNORE, ALL_SEVERITIES).unwrap();
    assert!(result.is_empty());
}

#[test]
fn deprecated_server_plugin_fires_only_its_rule() {
    let config = hardened_with(|v| {
        v["extra_config"]["plugin/http-server"] = json!({"name": ["virtualhost"]});
    });
    let result = audit(&config, NO_IGNORE, ALL_SEVERITIES).unwrap();
    assert_eq!(result.rule_ids(), vec!["7.1.1"]);
}

#[test]
fn deprecated_client_plugin_fires_only_its_rule() {
    let config = hardened_with(|v| {
        v["endpoints"][0]["backend"][0]["extra_config"]["plugin/http-client"] =
            json!({"name": "http-proxy"});
    });
    let result = audit(&config, NO_IGNORE, ALL_SEVERITIES).unwrap();
    assert_eq!(result.rule_ids(), vec!["7.1.5"]);
}

#[test]
fn static_filesystem_is_tracked_per_plugin_slot() {
    let server = hardened_with(|v| {
        v["extra_config"]["plugin/http-server"] = json!({"name": "static-filesystem"});
    });
    let client = hardened_with(|v| {
        v["endpoints"][0]["backend"][1]["extra_config"]["plugin/http-client"] =
            json!({"name": "static-filesystem"});
    });
    assert_eq!(
        audit(&server, NO_IGNORE, ALL_SEVERITIES).unwrap().rule_ids(),
        vec!["7.1.2"]
    );
    assert_eq!(
        audit(&client, NO_IGNORE, ALL_SEVERITIES).unwrap().rule_ids(),
        vec!["7.1.6"]
    );
}

#[test]
fn stats_serialize_as_empty_object() {
    let config = load_service_config(&fixture_path("exposed.json")).unwrap();
    let result = audit(&config, NO_IGNORE, &["CRITICAL"]).unwrap();
    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["stats"], json!({}));
}

#[test]
fn default_auditor_uses_builtin_catalog() {
    let auditor = Auditor::default();
    assert!(std::ptr::eq(auditor.catalog(), Catalog::builtin()));
    let result = auditor
        .audit(&ServiceConfig::default(), NO_IGNORE, &["CRITICAL"])
        .unwrap();
    // Nothing critical about an empty config: no TLS block, no endpoints.
    assert!(result.is_empty(), "unexpected: {:?}", result.rule_ids());
}

#[test]
fn resolved_tool_config_drives_the_audit() {
    let tool = gwaudit_core::config::GwauditConfig::from_toml(
        r#"
[audit]
ignore = ["2.1.2"]
severities = ["HIGH", "CRITICAL"]
"#,
    )
    .unwrap();
    let config = load_service_config(&fixture_path("exposed.json")).unwrap();
    let result = Auditor::new().audit_with(&config, &tool.audit).unwrap();
    assert_eq!(
        result.rule_ids(),
        vec!["1.2.1", "2.1.7", "2.2.2", "3.1.2", "3.1.3"]
    );
}
