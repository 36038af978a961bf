//! Examples on request bodies, success responses and large schemas.

use serde_json::{Map, Value};

use oas_model::{AuditOptions, Document, MediaSite};

use crate::issue::Issue;

/// Check that bodies, 2xx responses and large named schemas carry examples.
pub fn check(document: &Document, options: &AuditOptions) -> Vec<Issue> {
    let mut issues = Vec::new();

    for operation in document.operations() {
        for site in document.request_body_sites(&operation) {
            if !site_has_example(document, &site) {
                issues.push(Issue::RequestBodyWithoutExample {
                    method: operation.method,
                    path: operation.path.to_string(),
                    media_type: site.media_type,
                });
            }
        }

        for (status, sites) in document.response_sites(&operation) {
            if !status.starts_with('2') {
                continue;
            }
            for site in sites {
                if !site_has_example(document, &site) {
                    issues.push(Issue::ResponseWithoutExample {
                        method: operation.method,
                        path: operation.path.to_string(),
                        status: status.to_string(),
                        media_type: site.media_type,
                    });
                }
            }
        }
    }

    for (pointer, _, schema) in document.named_schemas() {
        let Some(schema) = schema.as_object() else {
            continue;
        };
        let Some(properties) = schema.get("properties").and_then(Value::as_object) else {
            continue;
        };
        if properties.len() < options.large_schema_properties || has_example(schema) {
            continue;
        }
        let property_examples = properties
            .values()
            .filter_map(Value::as_object)
            .any(has_example);
        if !property_examples {
            issues.push(Issue::LargeSchemaWithoutExample {
                pointer,
                property_count: properties.len(),
            });
        }
    }

    issues
}

fn site_has_example(document: &Document, site: &MediaSite<'_>) -> bool {
    if has_example(site.container) {
        return true;
    }
    site.schema
        .map(|schema| document.resolve(schema))
        .and_then(Value::as_object)
        .is_some_and(has_example)
}

fn has_example(object: &Map<String, Value>) -> bool {
    object.contains_key("example") || object.contains_key("examples")
}
