//! Reporter output shapes.

use gwaudit_analysis::audit::{AuditResult, Recommendation, Severity};
use gwaudit_analysis::reporters::console::ConsoleReporter;
use gwaudit_analysis::reporters::sarif::SarifReporter;
use gwaudit_analysis::reporters::{available_formats, create_reporter, render, Reporter};
use gwaudit_core::errors::ReportError;
use serde_json::Value;

fn rec(rule: &str, severity: Severity, message: &str) -> Recommendation {
    Recommendation {
        rule: rule.to_string(),
        severity,
        message: message.to_string(),
    }
}

fn sample() -> AuditResult {
    AuditResult {
        recommendations: vec![
            rec("2.1.3", Severity::Critical, "TLS is disabled."),
            rec("2.2.1", Severity::Medium, "Hide the version banner in runtime."),
            rec("3.1.1", Severity::Low, "Enable a bot detector."),
        ],
        ..Default::default()
    }
}

#[test]
fn console_plain_lines() {
    let output = ConsoleReporter::new(false).generate(&sample()).unwrap();
    assert_eq!(
        output,
        "2.1.3\t[CRITICAL]   \tTLS is disabled.\n\
         2.2.1\t[MEDIUM]   \tHide the version banner in runtime.\n\
         3.1.1\t[LOW]   \tEnable a bot detector.\n"
    );
}

#[test]
fn console_colors_wrap_only_the_severity() {
    let output = ConsoleReporter::new(true).generate(&sample()).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0], "2.1.3\t[\x1b[31mCRITICAL\x1b[0m]   \tTLS is disabled.");
    assert!(lines[1].contains("[\x1b[33mMEDIUM\x1b[0m]"));
    assert!(lines[2].contains("[\x1b[36mLOW\x1b[0m]"));
}

#[test]
fn console_empty_result_prints_nothing() {
    let output = ConsoleReporter::default()
        .generate(&AuditResult::default())
        .unwrap();
    assert!(output.is_empty());
}

#[test]
fn json_keeps_the_result_shape() {
    let output = render("json", &sample()).unwrap();
    let value: Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["stats"], serde_json::json!({}));
    let recs = value["recommendations"].as_array().unwrap();
    assert_eq!(recs.len(), 3);
    assert_eq!(recs[0]["rule"], "2.1.3");
    assert_eq!(recs[0]["severity"], "CRITICAL");
    assert_eq!(recs[2]["message"], "Enable a bot detector.");

    let back: AuditResult = serde_json::from_str(&output).unwrap();
    assert_eq!(back, sample());
}

#[test]
fn sarif_levels_and_rule_indexes() {
    let output = SarifReporter::new().generate(&sample()).unwrap();
    let value: Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["version"], "2.1.0");
    let run = &value["runs"][0];
    assert_eq!(run["tool"]["driver"]["name"], "gwaudit");
    assert_eq!(run["tool"]["driver"]["rules"].as_array().unwrap().len(), 3);

    let results = run["results"].as_array().unwrap();
    let levels: Vec<&str> = results.iter().map(|r| r["level"].as_str().unwrap()).collect();
    assert_eq!(levels, vec!["error", "warning", "note"]);
    for (index, result) in results.iter().enumerate() {
        assert_eq!(result["ruleIndex"], index);
        assert_eq!(
            run["tool"]["driver"]["rules"][index]["id"],
            result["ruleId"]
        );
        assert!(result.get("locations").is_none());
    }
}

#[test]
fn sarif_attaches_artifact_location_when_set() {
    let output = SarifReporter::new()
        .with_artifact("gateway.json")
        .generate(&sample())
        .unwrap();
    let value: Value = serde_json::from_str(&output).unwrap();
    let uri = &value["runs"][0]["results"][0]["locations"][0]["physicalLocation"]
        ["artifactLocation"]["uri"];
    assert_eq!(uri, "gateway.json");
}

#[test]
fn factory_knows_every_available_format() {
    for format in available_formats() {
        let reporter = create_reporter(format).unwrap();
        assert_eq!(reporter.name(), *format);
    }
    assert!(create_reporter("xml").is_none());
}

#[test]
fn render_rejects_unknown_format() {
    let err = render("xml", &sample()).unwrap_err();
    assert!(matches!(err, ReportError::UnknownFormat(ref f) if f == "xml"));
}
