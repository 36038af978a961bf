//! Path and query parameter name style consistency.

use std::collections::HashSet;

use oas_model::{AuditOptions, CaseStyle, Document, ParameterLocation};

use super::style::{StyleTally, deviates};
use crate::issue::Issue;

/// Check that path and query parameter names share one case style.
///
/// Each distinct `(name, in)` pair is tallied once; findings are reported
/// for every operation using a deviating parameter.
pub fn check(document: &Document, options: &AuditOptions) -> Vec<Issue> {
    let mut occurrences = Vec::new();
    let mut tally = StyleTally::default();
    let mut tallied: HashSet<(String, ParameterLocation)> = HashSet::new();

    for operation in document.operations() {
        for parameter in document.effective_parameters(&operation) {
            if !matches!(
                parameter.location,
                ParameterLocation::Path | ParameterLocation::Query
            ) {
                continue;
            }
            let style = CaseStyle::classify(parameter.name);
            if tallied.insert((parameter.name.to_string(), parameter.location)) {
                tally.add(style);
            }
            occurrences.push((operation, parameter, style));
        }
    }

    let Some(target) = tally.target(options.param_style) else {
        return Vec::new();
    };

    occurrences
        .into_iter()
        .filter(|(_, _, style)| deviates(*style, &target))
        .map(|(operation, parameter, style)| Issue::ParamStyle {
            method: operation.method,
            path: operation.path.to_string(),
            location: parameter.location,
            name: parameter.name.to_string(),
            style,
            target,
        })
        .collect()
}
