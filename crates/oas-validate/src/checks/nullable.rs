//! Nullable properties that are also optional.

use serde_json::Value;

use oas_model::{Document, schema_has_type, walk_schema};

use crate::issue::Issue;

/// Check object properties that are both nullable and not required.
pub fn check(document: &Document) -> Vec<Issue> {
    let mut issues = Vec::new();

    for (pointer, schema) in document.schema_roots() {
        let mut nodes = Vec::new();
        walk_schema(pointer, schema, &mut nodes);
        for node in &nodes {
            let Some(properties) = node.properties() else {
                continue;
            };
            let required = node.required();
            for (name, property) in properties {
                let Some(property) = property.as_object() else {
                    continue;
                };
                if is_nullable(property) && !required.contains(&name.as_str()) {
                    issues.push(Issue::NullableOptional {
                        pointer: node.pointer.clone(),
                        property: name.clone(),
                    });
                }
            }
        }
    }

    issues
}

fn is_nullable(property: &serde_json::Map<String, Value>) -> bool {
    let flag = |key: &str| property.get(key).and_then(Value::as_bool).unwrap_or(false);
    flag("nullable") || flag("x-nullable") || schema_has_type(property, "null")
}
