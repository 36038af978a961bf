//! Audit report: per-rule outcomes in catalog order.

use serde::{Deserialize, Serialize};

use oas_model::{Location, Severity, SpecVersion};

use crate::issue::Issue;
use crate::rules::RuleId;

/// One rendered finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub rule: RuleId,
    pub severity: Severity,
    pub location: Location,
    pub message: String,
}

impl Finding {
    pub fn from_issue(issue: &Issue, severity: Severity) -> Self {
        Self {
            rule: issue.rule(),
            severity,
            location: issue.location(),
            message: issue.message(),
        }
    }

    /// `[TAG] message`, or the bare message for document-wide findings.
    pub fn render(&self) -> String {
        if self.location.is_document() {
            self.message.clone()
        } else {
            format!("{} {}", self.location, self.message)
        }
    }
}

/// Result of one rule that ran, even when it found nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleOutcome {
    pub rule: RuleId,
    pub heading: String,
    pub severity: Severity,
    pub findings: Vec<Finding>,
}

impl RuleOutcome {
    pub fn new(rule: RuleId, severity: Severity, issues: &[Issue]) -> Self {
        Self {
            rule,
            heading: rule.heading().to_string(),
            severity,
            findings: issues
                .iter()
                .map(|issue| Finding::from_issue(issue, severity))
                .collect(),
        }
    }

    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }
}

/// Audit report for one document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditReport {
    /// Where the document came from (usually its path).
    pub source: String,
    pub version: SpecVersion,
    pub outcomes: Vec<RuleOutcome>,
}

impl AuditReport {
    pub fn new(source: impl Into<String>, version: SpecVersion) -> Self {
        Self {
            source: source.into(),
            version,
            outcomes: Vec::new(),
        }
    }

    pub fn add(&mut self, outcome: RuleOutcome) {
        self.outcomes.push(outcome);
    }

    /// All findings, grouped per rule in catalog order.
    pub fn findings(&self) -> impl Iterator<Item = &Finding> {
        self.outcomes.iter().flat_map(|outcome| outcome.findings.iter())
    }

    /// Total number of findings.
    pub fn finding_count(&self) -> usize {
        self.outcomes.iter().map(|outcome| outcome.findings.len()).sum()
    }

    pub fn error_count(&self) -> usize {
        self.count_severity(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count_severity(Severity::Warning)
    }

    fn count_severity(&self, severity: Severity) -> usize {
        self.findings()
            .filter(|finding| finding.severity == severity)
            .count()
    }

    /// True when any finding is at or above `threshold`.
    pub fn has_findings_at(&self, threshold: Severity) -> bool {
        self.findings()
            .any(|finding| finding.severity.at_least(threshold))
    }

    /// Outcome of `rule`, when it ran.
    pub fn outcome(&self, rule: RuleId) -> Option<&RuleOutcome> {
        self.outcomes.iter().find(|outcome| outcome.rule == rule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oas_model::HttpMethod;

    fn sample() -> AuditReport {
        let mut report = AuditReport::new("api.yaml", SpecVersion::OpenApi3("3.0.3".into()));
        report.add(RuleOutcome::new(
            RuleId::OperationId,
            Severity::Error,
            &[Issue::MissingOperationId {
                method: HttpMethod::Get,
                path: "/users".into(),
            }],
        ));
        report.add(RuleOutcome::new(
            RuleId::Versioning,
            Severity::Warning,
            &[Issue::MissingVersion],
        ));
        report.add(RuleOutcome::new(RuleId::Examples, Severity::Warning, &[]));
        report
    }

    #[test]
    fn counts_by_severity() {
        let report = sample();
        assert_eq!(report.finding_count(), 2);
        assert_eq!(report.error_count(), 1);
        assert_eq!(report.warning_count(), 1);
        assert!(report.has_findings_at(Severity::Error));
        assert!(report.outcome(RuleId::Examples).is_some_and(RuleOutcome::is_clean));
    }

    #[test]
    fn findings_render_with_location_tags() {
        let report = sample();
        let lines: Vec<String> = report.findings().map(Finding::render).collect();
        assert_eq!(
            lines,
            vec![
                "[GET /users] missing operationId".to_string(),
                "no version segment in servers/basePath or paths (expected e.g. /v1)".to_string(),
            ]
        );
    }
}
