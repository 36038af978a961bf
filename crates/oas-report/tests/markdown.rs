//! Integration tests for report rendering and writing.

use oas_model::{HttpMethod, Severity, SpecVersion};
use oas_report::{REPORT_TITLE, ReportFormat, render_json, render_markdown, write_report};
use oas_validate::{AuditReport, Issue, RuleId, RuleOutcome};

fn sample_report() -> AuditReport {
    let mut report = AuditReport::new("api.yaml", SpecVersion::OpenApi3("3.0.3".to_string()));
    report.add(RuleOutcome::new(RuleId::OperationId, Severity::Error, &[]));
    report.add(RuleOutcome::new(
        RuleId::VerbsInPath,
        Severity::Warning,
        &[
            Issue::VerbInPath {
                method: HttpMethod::Get,
                path: "/getUsers".to_string(),
                segment: "getUsers".to_string(),
                verb: "get".to_string(),
            },
            Issue::VerbInPath {
                method: HttpMethod::Post,
                path: "/createOrder".to_string(),
                segment: "createOrder".to_string(),
                verb: "create".to_string(),
            },
        ],
    ));
    report.add(RuleOutcome::new(
        RuleId::Versioning,
        Severity::Warning,
        &[Issue::MissingVersion],
    ));
    report.add(RuleOutcome::new(
        RuleId::SchemaRequired,
        Severity::Warning,
        &[Issue::ArrayWithoutItems {
            pointer: "#/components/schemas/Tags".to_string(),
        }],
    ));
    report
}

#[test]
fn renders_grouped_sections() {
    let markdown = render_markdown(&sample_report());
    assert!(markdown.starts_with(REPORT_TITLE));
    insta::assert_snapshot!(markdown);
}

#[test]
fn json_report_lists_findings_per_rule() {
    let json = render_json(&sample_report()).expect("render json");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

    assert_eq!(value["summary"]["findings"], 4);
    assert_eq!(value["summary"]["errors"], 0);
    assert_eq!(value["rules"][1]["rule"], "verbs-in-path");
    let finding = &value["rules"][1]["findings"][0];
    assert_eq!(finding["severity"], "warning");
    assert_eq!(finding["location"]["kind"], "operation");
    assert_eq!(finding["location"]["method"], "get");
    assert_eq!(finding["location"]["path"], "/getUsers");
}

#[test]
fn write_report_creates_parent_directories() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("reports").join("nested").join("audit_report.md");

    write_report(&path, &sample_report(), ReportFormat::Markdown).expect("write report");

    let written = std::fs::read_to_string(&path).expect("read report");
    assert_eq!(written, render_markdown(&sample_report()));
}

#[test]
fn write_report_supports_json() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("audit.json");

    write_report(&path, &sample_report(), ReportFormat::Json).expect("write report");

    let written = std::fs::read_to_string(&path).expect("read report");
    assert!(written.trim_start().starts_with('{'));
    assert!(written.contains("\"source\": \"api.yaml\""));
}
