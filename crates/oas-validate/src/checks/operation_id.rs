//! operationId presence and uniqueness.

use std::collections::HashMap;

use oas_model::{Document, HttpMethod};

use crate::issue::Issue;

/// Check that every operation has an operationId and that ids are unique.
pub fn check(document: &Document) -> Vec<Issue> {
    let mut issues = Vec::new();
    let mut first_use: HashMap<&str, (HttpMethod, &str)> = HashMap::new();

    for operation in document.operations() {
        let Some(operation_id) = operation.operation_id() else {
            issues.push(Issue::MissingOperationId {
                method: operation.method,
                path: operation.path.to_string(),
            });
            continue;
        };

        match first_use.get(operation_id) {
            Some(&(first_method, first_path)) => issues.push(Issue::DuplicateOperationId {
                operation_id: operation_id.to_string(),
                method: operation.method,
                path: operation.path.to_string(),
                first_method,
                first_path: first_path.to_string(),
            }),
            None => {
                first_use.insert(operation_id, (operation.method, operation.path));
            }
        }
    }

    issues
}
