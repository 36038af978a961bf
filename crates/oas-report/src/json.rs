//! JSON report rendering.

use anyhow::{Context, Result};
use serde::Serialize;

use oas_model::SpecVersion;
use oas_validate::{AuditReport, RuleOutcome};

#[derive(Serialize)]
struct JsonReport<'a> {
    source: &'a str,
    version: &'a SpecVersion,
    summary: JsonSummary,
    rules: &'a [RuleOutcome],
}

#[derive(Serialize)]
struct JsonSummary {
    rules_run: usize,
    findings: usize,
    errors: usize,
    warnings: usize,
}

/// Render the report as pretty-printed JSON.
pub fn render_json(report: &AuditReport) -> Result<String> {
    let payload = JsonReport {
        source: &report.source,
        version: &report.version,
        summary: JsonSummary {
            rules_run: report.outcomes.len(),
            findings: report.finding_count(),
            errors: report.error_count(),
            warnings: report.warning_count(),
        },
        rules: &report.outcomes,
    };
    let mut json = serde_json::to_string_pretty(&payload).context("serialize audit report")?;
    json.push('\n');
    Ok(json)
}
