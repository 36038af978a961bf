//! Verbs in path segments.

use oas_model::{AuditOptions, Document, PathSegment, is_version_segment, path_segments, split_words};

use crate::issue::Issue;

/// Check that no static path segment starts with an action verb.
pub fn check(document: &Document, options: &AuditOptions) -> Vec<Issue> {
    let verbs = options.verb_list();
    let mut issues = Vec::new();

    for operation in document.operations() {
        for segment in path_segments(operation.path) {
            let PathSegment::Static(segment) = segment else {
                continue;
            };
            if is_version_segment(segment) {
                continue;
            }
            let Some(first) = split_words(segment).into_iter().next() else {
                continue;
            };
            if verbs.contains(&first) {
                issues.push(Issue::VerbInPath {
                    method: operation.method,
                    path: operation.path.to_string(),
                    segment: segment.to_string(),
                    verb: first,
                });
            }
        }
    }

    issues
}
