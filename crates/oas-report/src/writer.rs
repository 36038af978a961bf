//! Writing rendered reports to disk.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use oas_validate::AuditReport;

use crate::json::render_json;
use crate::markdown::render_markdown;

/// Report file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Markdown,
    Json,
}

impl ReportFormat {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Markdown => "Markdown",
            Self::Json => "JSON",
        }
    }

    pub fn render(&self, report: &AuditReport) -> Result<String> {
        match self {
            Self::Markdown => Ok(render_markdown(report)),
            Self::Json => render_json(report),
        }
    }
}

/// Render `report` and write it to `path`, creating parent directories.
pub fn write_report(path: &Path, report: &AuditReport, format: ReportFormat) -> Result<()> {
    let content = format.render(report)?;
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("write {}", path.display()))?;
    info!(
        path = %path.display(),
        format = format.label(),
        findings = report.finding_count(),
        "report written"
    );
    Ok(())
}
