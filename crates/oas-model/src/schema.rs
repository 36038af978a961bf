//! Schema tree walking.

use serde_json::{Map, Value};

use crate::document::escape_pointer_token;

/// A schema object reached while walking, with its JSON pointer.
#[derive(Debug, Clone)]
pub struct SchemaNode<'a> {
    pub pointer: String,
    pub schema: &'a Map<String, Value>,
}

impl<'a> SchemaNode<'a> {
    pub fn properties(&self) -> Option<&'a Map<String, Value>> {
        self.schema.get("properties").and_then(Value::as_object)
    }

    /// Names listed under `required`.
    pub fn required(&self) -> Vec<&'a str> {
        self.schema
            .get("required")
            .and_then(Value::as_array)
            .map(|names| names.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    /// True when `type` is `name` or a type array containing it.
    pub fn has_type(&self, name: &str) -> bool {
        schema_has_type(self.schema, name)
    }
}

pub fn schema_has_type(schema: &Map<String, Value>, name: &str) -> bool {
    match schema.get("type") {
        Some(Value::String(kind)) => kind == name,
        Some(Value::Array(kinds)) => kinds.iter().any(|kind| kind.as_str() == Some(name)),
        _ => false,
    }
}

/// Collect `schema` and every nested schema reachable through
/// `properties`, `items`, `prefixItems`, `additionalProperties`,
/// `allOf`/`oneOf`/`anyOf` and `not`.
///
/// `$ref` nodes are not followed, so every schema is visited once at its
/// definition site.
pub fn walk_schema<'a>(pointer: String, schema: &'a Value, out: &mut Vec<SchemaNode<'a>>) {
    let Some(object) = schema.as_object() else {
        return;
    };
    if object.contains_key("$ref") {
        return;
    }

    out.push(SchemaNode {
        pointer: pointer.clone(),
        schema: object,
    });
    if let Some(properties) = object.get("properties").and_then(Value::as_object) {
        for (name, property) in properties {
            walk_schema(
                format!("{pointer}/properties/{}", escape_pointer_token(name)),
                property,
                out,
            );
        }
    }

    match object.get("items") {
        Some(Value::Array(items)) => {
            for (index, item) in items.iter().enumerate() {
                walk_schema(format!("{pointer}/items/{index}"), item, out);
            }
        }
        Some(item) => walk_schema(format!("{pointer}/items"), item, out),
        None => {}
    }
    if let Some(items) = object.get("prefixItems").and_then(Value::as_array) {
        for (index, item) in items.iter().enumerate() {
            walk_schema(format!("{pointer}/prefixItems/{index}"), item, out);
        }
    }
    if let Some(additional) = object.get("additionalProperties") {
        walk_schema(format!("{pointer}/additionalProperties"), additional, out);
    }
    for keyword in ["allOf", "oneOf", "anyOf"] {
        if let Some(parts) = object.get(keyword).and_then(Value::as_array) {
            for (index, part) in parts.iter().enumerate() {
                walk_schema(format!("{pointer}/{keyword}/{index}"), part, out);
            }
        }
    }
    if let Some(not) = object.get("not") {
        walk_schema(format!("{pointer}/not"), not, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn walks_nested_schemas_without_following_refs() {
        let schema = json!({
            "type": "object",
            "properties": {
                "id": {"type": "string"},
                "tags": {"type": "array", "items": {"type": "string"}},
                "owner": {"$ref": "#/components/schemas/User"}
            },
            "additionalProperties": false
        });
        let mut nodes = Vec::new();
        walk_schema("#/components/schemas/Pet".to_string(), &schema, &mut nodes);
        let pointers: Vec<&str> = nodes.iter().map(|node| node.pointer.as_str()).collect();
        assert_eq!(
            pointers,
            vec![
                "#/components/schemas/Pet",
                "#/components/schemas/Pet/properties/id",
                "#/components/schemas/Pet/properties/tags",
                "#/components/schemas/Pet/properties/tags/items",
            ]
        );
    }

    #[test]
    fn type_arrays_are_understood() {
        let schema = json!({"type": ["string", "null"]});
        let object = schema.as_object().unwrap();
        assert!(schema_has_type(object, "null"));
        assert!(!schema_has_type(object, "integer"));
    }
}
