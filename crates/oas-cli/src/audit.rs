//! The audit command flow: load, configure, audit, write.

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::{info, info_span};

use oas_ingest::{load_document, resolve_options};
use oas_model::{AuditOptions, Severity, SpecVersion};
use oas_report::{ReportFormat, write_report};
use oas_validate::{AuditReport, audit_document};

/// Inputs of one audit run.
#[derive(Debug, Clone)]
pub struct AuditRequest {
    pub spec: PathBuf,
    /// Explicit config file; otherwise one next to `spec` is used if present.
    pub config: Option<PathBuf>,
    /// Rule ids to run; replaces the config's `only_rules` when non-empty.
    pub only: Vec<String>,
    /// Rule ids to skip, added to the config's `disabled_rules`.
    pub skip: Vec<String>,
    /// Report file and format; `None` skips writing.
    pub output: Option<(PathBuf, ReportFormat)>,
}

impl AuditRequest {
    pub fn new(spec: impl Into<PathBuf>) -> Self {
        Self {
            spec: spec.into(),
            config: None,
            only: Vec::new(),
            skip: Vec::new(),
            output: None,
        }
    }

    pub fn with_output(mut self, path: impl Into<PathBuf>, format: ReportFormat) -> Self {
        self.output = Some((path.into(), format));
        self
    }
}

/// What an audit run produced.
#[derive(Debug)]
pub struct AuditResult {
    pub report: AuditReport,
    pub report_path: Option<PathBuf>,
}

/// Severity gate for the process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailOn {
    #[default]
    Error,
    Warning,
    Never,
}

impl FailOn {
    pub fn threshold(&self) -> Option<Severity> {
        match self {
            Self::Error => Some(Severity::Error),
            Self::Warning => Some(Severity::Warning),
            Self::Never => None,
        }
    }

    /// True when the report has a finding at or above the threshold.
    pub fn is_failure(&self, report: &AuditReport) -> bool {
        self.threshold()
            .is_some_and(|threshold| report.has_findings_at(threshold))
    }
}

/// Merge config-file options with command-line rule selection.
pub fn build_options(request: &AuditRequest) -> Result<AuditOptions> {
    let mut options = resolve_options(request.config.as_deref(), &request.spec)?;
    if !request.only.is_empty() {
        options = options.with_only_rules(request.only.clone());
    }
    Ok(options.with_disabled_rules(request.skip.clone()))
}

/// Load the document, run the audit and write the report.
pub fn run_audit(request: &AuditRequest) -> Result<AuditResult> {
    run_audit_with(request, |_, _| {})
}

/// Like [`run_audit`], but calls `on_loaded` with the source label and the
/// detected version as soon as the document is parsed, before options are
/// resolved or any rule runs.
pub fn run_audit_with(
    request: &AuditRequest,
    on_loaded: impl FnOnce(&str, &SpecVersion),
) -> Result<AuditResult> {
    let audit_span = info_span!("audit", spec = %request.spec.display());
    let _audit_guard = audit_span.enter();

    let document = load_document(&request.spec)?;
    let source = display_path(&request.spec);
    on_loaded(&source, &document.version());

    let options = build_options(request)?;
    let report = audit_document(&document, &source, &options)?;

    let report_path = match &request.output {
        Some((path, format)) => {
            write_report(path, &report, *format)?;
            Some(path.clone())
        }
        None => {
            info!("report writing skipped");
            None
        }
    };

    Ok(AuditResult {
        report,
        report_path,
    })
}

fn display_path(path: &Path) -> String {
    path.display().to_string()
}
