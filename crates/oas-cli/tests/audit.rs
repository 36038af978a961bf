//! Integration tests for the audit command flow.

use std::fs;
use std::path::{Path, PathBuf};

use oas_cli::audit::{AuditRequest, FailOn, run_audit, run_audit_with};
use oas_model::SpecVersion;
use oas_ingest::CONFIG_FILE_NAME;
use oas_report::ReportFormat;
use oas_validate::RuleId;

const SPEC: &str = r"
openapi: 3.0.3
paths:
  /getUsers:
    get:
      responses:
        '204':
          description: no content
";

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("write file");
    path
}

#[test]
fn audit_writes_markdown_report() {
    let dir = tempfile::tempdir().expect("temp dir");
    let spec = write(dir.path(), "api.yaml", SPEC);
    let out = dir.path().join("out").join("audit_report.md");

    let result = run_audit(&AuditRequest::new(&spec).with_output(&out, ReportFormat::Markdown))
        .expect("audit");

    assert_eq!(result.report_path.as_deref(), Some(out.as_path()));
    assert_eq!(result.report.finding_count(), 3);
    assert_eq!(result.report.error_count(), 1);

    let markdown = fs::read_to_string(&out).expect("read report");
    assert!(markdown.starts_with("# OpenAPI Audit Report\n"));
    assert!(markdown.contains("## operationId\n- [GET /getUsers] missing operationId\n"));
    assert!(markdown.contains("## verbs in path\n"));
    assert!(markdown.contains("## versioning\n"));
}

#[test]
fn config_next_to_spec_is_applied() {
    let dir = tempfile::tempdir().expect("temp dir");
    let spec = write(dir.path(), "api.yaml", SPEC);
    write(
        dir.path(),
        CONFIG_FILE_NAME,
        "disabled_rules = [\"versioning\"]\n\n[severity]\nverbs-in-path = \"error\"\n",
    );

    let result = run_audit(&AuditRequest::new(&spec)).expect("audit");

    assert!(result.report_path.is_none());
    assert!(result.report.outcome(RuleId::Versioning).is_none());
    assert_eq!(result.report.error_count(), 2);
}

#[test]
fn command_line_selection_overrides_config() {
    let dir = tempfile::tempdir().expect("temp dir");
    let spec = write(dir.path(), "api.yaml", SPEC);
    write(dir.path(), CONFIG_FILE_NAME, "only_rules = [\"versioning\"]\n");

    let mut request = AuditRequest::new(&spec);
    request.only = vec!["verbs-in-path".to_string(), "operation-id".to_string()];
    request.skip = vec!["operation-id".to_string()];
    let result = run_audit(&request).expect("audit");

    let rules: Vec<RuleId> = result.report.outcomes.iter().map(|o| o.rule).collect();
    assert_eq!(rules, vec![RuleId::VerbsInPath]);
}

#[test]
fn unknown_rule_ids_fail_the_run() {
    let dir = tempfile::tempdir().expect("temp dir");
    let spec = write(dir.path(), "api.yaml", SPEC);

    let mut request = AuditRequest::new(&spec);
    request.skip = vec!["not-a-rule".to_string()];
    let error = run_audit(&request).expect_err("unknown rule");
    assert!(error.to_string().contains("not-a-rule"));
}

#[test]
fn header_is_reported_before_rules_run() {
    let dir = tempfile::tempdir().expect("temp dir");
    let spec = write(dir.path(), "api.yaml", SPEC);

    let mut request = AuditRequest::new(&spec);
    request.only = vec!["not-a-rule".to_string()];
    let mut header = None;
    let error = run_audit_with(&request, |source, version| {
        header = Some((source.to_string(), version.clone()));
    })
    .expect_err("unknown rule");

    assert!(error.to_string().contains("not-a-rule"));
    let (source, version) = header.expect("header reported");
    assert_eq!(source, spec.display().to_string());
    assert_eq!(version, SpecVersion::OpenApi3("3.0.3".to_string()));
}

#[test]
fn missing_spec_is_reported() {
    let dir = tempfile::tempdir().expect("temp dir");
    let error = run_audit(&AuditRequest::new(dir.path().join("missing.yaml")))
        .expect_err("missing spec");
    assert!(error.to_string().starts_with("spec not found"));
}

#[test]
fn fail_on_thresholds() {
    let dir = tempfile::tempdir().expect("temp dir");
    let spec = write(
        dir.path(),
        "api.yaml",
        "openapi: 3.0.3\npaths:\n  /users:\n    get:\n      operationId: listUsers\n",
    );
    let report = run_audit(&AuditRequest::new(&spec)).expect("audit").report;

    assert_eq!(report.error_count(), 0);
    assert!(report.warning_count() > 0);
    assert!(!FailOn::Error.is_failure(&report));
    assert!(FailOn::Warning.is_failure(&report));
    assert!(!FailOn::Never.is_failure(&report));
}
