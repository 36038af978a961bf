//! Rule engine: selects the enabled rules and runs them in catalog order.

use std::collections::{BTreeMap, BTreeSet};
use std::time::Instant;

use tracing::{debug, debug_span, info};

use oas_model::{AuditOptions, Document, Severity};

use crate::checks;
use crate::error::ValidateError;
use crate::report::{AuditReport, RuleOutcome};
use crate::rules::RuleId;

/// Rule selection and severities resolved from [`AuditOptions`].
#[derive(Debug, Clone)]
pub struct RulePlan {
    enabled: Vec<RuleId>,
    severities: BTreeMap<RuleId, Severity>,
}

impl RulePlan {
    /// Resolve rule ids from options. Unknown ids are an error.
    pub fn from_options(options: &AuditOptions) -> Result<Self, ValidateError> {
        let only = parse_ids(&options.only_rules)?;
        let disabled = parse_ids(&options.disabled_rules)?;

        let mut severities: BTreeMap<RuleId, Severity> = RuleId::all()
            .iter()
            .map(|rule| (*rule, rule.default_severity()))
            .collect();
        for (id, severity) in &options.severity {
            let rule: RuleId = id.parse()?;
            severities.insert(rule, *severity);
        }

        let enabled = RuleId::all()
            .iter()
            .copied()
            .filter(|rule| only.is_empty() || only.contains(rule))
            .filter(|rule| !disabled.contains(rule))
            .collect();

        Ok(Self {
            enabled,
            severities,
        })
    }

    pub fn enabled(&self) -> &[RuleId] {
        &self.enabled
    }

    pub fn severity(&self, rule: RuleId) -> Severity {
        self.severities
            .get(&rule)
            .copied()
            .unwrap_or_else(|| rule.default_severity())
    }
}

fn parse_ids(ids: &[String]) -> Result<BTreeSet<RuleId>, ValidateError> {
    ids.iter().map(|id| id.parse::<RuleId>()).collect()
}

/// Audit a document with every enabled rule.
///
/// Rules that are disabled do not appear in the report; rules that ran
/// appear even when they found nothing.
pub fn audit_document(
    document: &Document,
    source: &str,
    options: &AuditOptions,
) -> Result<AuditReport, ValidateError> {
    let plan = RulePlan::from_options(options)?;
    let start = Instant::now();
    let mut report = AuditReport::new(source, document.version());

    for &rule in plan.enabled() {
        let rule_span = debug_span!("rule", rule = %rule);
        let issues = rule_span.in_scope(|| {
            let issues = checks::run(rule, document, options);
            debug!(findings = issues.len(), "rule finished");
            issues
        });
        report.add(RuleOutcome::new(rule, plan.severity(rule), &issues));
    }

    info!(
        source,
        version = %report.version,
        rules = plan.enabled().len(),
        findings = report.finding_count(),
        errors = report.error_count(),
        duration_ms = start.elapsed().as_millis(),
        "audit complete"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_applies_only_then_disabled() {
        let options = AuditOptions::new()
            .with_only_rules(vec!["versioning".into(), "examples".into()])
            .with_disabled_rules(vec!["examples".into()]);
        let plan = RulePlan::from_options(&options).expect("plan");
        assert_eq!(plan.enabled(), &[RuleId::Versioning]);
    }

    #[test]
    fn plan_rejects_unknown_ids() {
        let options = AuditOptions::new().with_disabled_rules(vec!["no-such-rule".into()]);
        assert!(RulePlan::from_options(&options).is_err());

        let mut options = AuditOptions::new();
        options
            .severity
            .insert("bogus".to_string(), Severity::Error);
        assert!(RulePlan::from_options(&options).is_err());
    }

    #[test]
    fn severity_overrides_apply_to_whole_rule() {
        let mut options = AuditOptions::new();
        options
            .severity
            .insert("versioning".to_string(), Severity::Error);
        let plan = RulePlan::from_options(&options).expect("plan");
        assert_eq!(plan.severity(RuleId::Versioning), Severity::Error);
        assert_eq!(plan.severity(RuleId::Examples), Severity::Warning);
    }
}
