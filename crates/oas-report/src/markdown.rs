//! Markdown report rendering.

use oas_validate::AuditReport;

/// First line of every Markdown report.
pub const REPORT_TITLE: &str = "# OpenAPI Audit Report";

const NO_ISSUES: &str = "_No issues found._";

/// Render the report as Markdown.
///
/// Only rules with findings get a `## heading` section. Sections are
/// separated by a blank line and the output ends with a newline.
pub fn render_markdown(report: &AuditReport) -> String {
    let mut lines: Vec<String> = vec![REPORT_TITLE.to_string()];

    for outcome in report.outcomes.iter().filter(|outcome| !outcome.is_clean()) {
        lines.push(String::new());
        lines.push(format!("## {}", outcome.heading));
        for finding in &outcome.findings {
            lines.push(format!("- {}", finding.render()));
        }
    }

    if report.finding_count() == 0 {
        lines.push(String::new());
        lines.push(NO_ISSUES.to_string());
    }

    let mut markdown = lines.join("\n");
    markdown.push('\n');
    markdown
}
