//! Schema types, array items and required properties.

use oas_model::{Document, SchemaNode, walk_schema};

use crate::issue::Issue;

/// Keywords that give a schema a shape even without `type`.
const SHAPE_KEYWORDS: &[&str] = &[
    "type",
    "$ref",
    "allOf",
    "oneOf",
    "anyOf",
    "not",
    "enum",
    "const",
    "properties",
    "items",
];

/// Check named schemas and their nested schemas for completeness.
pub fn check(document: &Document) -> Vec<Issue> {
    let mut issues = Vec::new();

    for (pointer, _, schema) in document.named_schemas() {
        let mut nodes = Vec::new();
        walk_schema(pointer, schema, &mut nodes);
        for node in &nodes {
            check_node(node, &mut issues);
        }
    }

    issues
}

fn check_node(node: &SchemaNode<'_>, issues: &mut Vec<Issue>) {
    if !SHAPE_KEYWORDS
        .iter()
        .any(|keyword| node.schema.contains_key(*keyword))
    {
        issues.push(Issue::SchemaMissingType {
            pointer: node.pointer.clone(),
        });
    }

    if node.has_type("array") && !node.schema.contains_key("items") {
        issues.push(Issue::ArrayWithoutItems {
            pointer: node.pointer.clone(),
        });
    }

    let Some(properties) = node.properties() else {
        return;
    };
    if !node.schema.contains_key("required") {
        if !properties.is_empty() {
            issues.push(Issue::NoRequiredProperties {
                pointer: node.pointer.clone(),
            });
        }
        return;
    }
    for property in node.required() {
        if !properties.contains_key(property) {
            issues.push(Issue::UnknownRequiredProperty {
                pointer: node.pointer.clone(),
                property: property.to_string(),
            });
        }
    }
}
