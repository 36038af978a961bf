//! Inline schemas that should live in components.

use std::collections::HashMap;

use serde_json::{Map, Value};

use oas_model::{AuditOptions, Document, MediaSite, OperationRef};

use crate::issue::Issue;

/// Smallest inline schema considered when looking for duplicates.
const MIN_DUPLICATE_PROPERTIES: usize = 2;

/// An inline object schema used by an operation.
struct InlineSchema<'a> {
    operation: OperationRef<'a>,
    site: String,
    media_type: String,
    schema: &'a Map<String, Value>,
    property_count: usize,
}

/// Check for large inline schemas and identical inline schemas.
pub fn check(document: &Document, options: &AuditOptions) -> Vec<Issue> {
    let inline = inline_schemas(document);
    let mut issues = Vec::new();

    for schema in &inline {
        if schema.property_count >= options.inline_schema_properties {
            issues.push(Issue::LargeInlineSchema {
                method: schema.operation.method,
                path: schema.operation.path.to_string(),
                site: schema.site.clone(),
                media_type: schema.media_type.clone(),
                property_count: schema.property_count,
            });
        }
    }

    let mut groups: Vec<Vec<String>> = Vec::new();
    let mut index_by_shape: HashMap<String, usize> = HashMap::new();
    for schema in inline
        .iter()
        .filter(|schema| schema.property_count >= MIN_DUPLICATE_PROPERTIES)
    {
        let shape = canonical(&Value::Object(schema.schema.clone()));
        let index = *index_by_shape.entry(shape).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        let tag = schema.operation.tag();
        if !groups[index].contains(&tag) {
            groups[index].push(tag);
        }
    }
    issues.extend(
        groups
            .into_iter()
            .filter(|sites| sites.len() >= 2)
            .map(|sites| Issue::DuplicateInlineSchema { sites }),
    );

    issues
}

fn inline_schemas(document: &Document) -> Vec<InlineSchema<'_>> {
    let mut found = Vec::new();
    for operation in document.operations() {
        for site in document.request_body_sites(&operation) {
            push_inline(&mut found, operation, "request body".to_string(), site);
        }
        for (status, sites) in document.response_sites(&operation) {
            for site in sites {
                push_inline(&mut found, operation, format!("response {status}"), site);
            }
        }
    }
    found
}

fn push_inline<'a>(
    found: &mut Vec<InlineSchema<'a>>,
    operation: OperationRef<'a>,
    site: String,
    media: MediaSite<'a>,
) {
    if media.referenced {
        return;
    }
    let Some(schema) = media.schema.and_then(Value::as_object) else {
        return;
    };
    if schema.contains_key("$ref") {
        return;
    }
    let Some(properties) = schema.get("properties").and_then(Value::as_object) else {
        return;
    };
    found.push(InlineSchema {
        operation,
        site,
        media_type: media.media_type,
        schema,
        property_count: properties.len(),
    });
}

/// Serialize with object keys sorted, so key order does not affect equality.
fn canonical(value: &Value) -> String {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            let body: Vec<String> = entries
                .into_iter()
                .map(|(key, value)| format!("{}:{}", Value::String(key.clone()), canonical(value)))
                .collect();
            format!("{{{}}}", body.join(","))
        }
        Value::Array(items) => {
            let body: Vec<String> = items.iter().map(canonical).collect();
            format!("[{}]", body.join(","))
        }
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn canonical_form_ignores_key_order() {
        let a = json!({"type": "object", "properties": {"a": {"type": "string"}, "b": {}}});
        let b = json!({"properties": {"b": {}, "a": {"type": "string"}}, "type": "object"});
        assert_eq!(canonical(&a), canonical(&b));
        assert_ne!(canonical(&a), canonical(&json!({"type": "object"})));
    }
}
