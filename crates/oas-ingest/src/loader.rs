//! Document loading from `.yaml`, `.yml` and `.json` files.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Number, Value};
use tracing::{debug, info};

use oas_model::Document;

use crate::error::IngestError;

/// Source format, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Yaml,
    Json,
}

impl SourceFormat {
    /// Pick the format from a path's extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, IngestError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();
        match extension.as_str() {
            "yaml" | "yml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            _ => Err(IngestError::UnsupportedExtension {
                extension: if extension.is_empty() {
                    "(none)".to_string()
                } else {
                    format!(".{extension}")
                },
            }),
        }
    }
}

/// Load an OpenAPI/Swagger document from disk.
///
/// Empty files and a literal `null` yield an empty document.
pub fn load_document(path: &Path) -> Result<Document, IngestError> {
    if !path.exists() {
        return Err(IngestError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let format = SourceFormat::from_path(path)?;
    debug!(path = %path.display(), ?format, "loading document");
    let text = fs::read_to_string(path).map_err(|source| IngestError::io(path, source))?;
    let document = parse_document(&text, format, path)?;
    info!(
        path = %path.display(),
        version = %document.version(),
        path_count = document.paths().len(),
        "document loaded"
    );
    Ok(document)
}

/// Parse document text; `origin` is only used in error messages.
pub fn parse_document(
    text: &str,
    format: SourceFormat,
    origin: &Path,
) -> Result<Document, IngestError> {
    let root = match format {
        SourceFormat::Yaml => {
            let yaml_error = |source| IngestError::Yaml {
                path: origin.to_path_buf(),
                source,
            };
            let mut value: serde_yaml::Value = serde_yaml::from_str(text).map_err(yaml_error)?;
            value.apply_merge().map_err(yaml_error)?;
            yaml_to_json(value)
        }
        SourceFormat::Json => {
            if text.trim().is_empty() {
                Value::Null
            } else {
                serde_json::from_str(text).map_err(|source| IngestError::Json {
                    path: origin.to_path_buf(),
                    source,
                })?
            }
        }
    };
    match root {
        Value::Null => Ok(Document::empty()),
        Value::Object(_) => Ok(Document::new(root)),
        _ => Err(IngestError::NotAnObject {
            path: PathBuf::from(origin),
        }),
    }
}

/// Convert a YAML tree into the JSON tree the rules work on.
///
/// Mapping keys are stringified (`200:` becomes `"200"`), tags are dropped,
/// and non-finite floats become `null`.
fn yaml_to_json(value: serde_yaml::Value) -> Value {
    match value {
        serde_yaml::Value::Null => Value::Null,
        serde_yaml::Value::Bool(flag) => Value::Bool(flag),
        serde_yaml::Value::Number(number) => yaml_number(&number),
        serde_yaml::Value::String(text) => Value::String(text),
        serde_yaml::Value::Sequence(items) => {
            Value::Array(items.into_iter().map(yaml_to_json).collect())
        }
        serde_yaml::Value::Mapping(mapping) => {
            let mut object = Map::new();
            for (key, value) in mapping {
                object.insert(yaml_key(key), yaml_to_json(value));
            }
            Value::Object(object)
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_json(tagged.value),
    }
}

fn yaml_number(number: &serde_yaml::Number) -> Value {
    if let Some(int) = number.as_i64() {
        Value::Number(int.into())
    } else if let Some(uint) = number.as_u64() {
        Value::Number(uint.into())
    } else {
        number
            .as_f64()
            .and_then(Number::from_f64)
            .map_or(Value::Null, Value::Number)
    }
}

fn yaml_key(key: serde_yaml::Value) -> String {
    match key {
        serde_yaml::Value::String(text) => text,
        serde_yaml::Value::Number(number) => number.to_string(),
        serde_yaml::Value::Bool(flag) => flag.to_string(),
        serde_yaml::Value::Null => "null".to_string(),
        serde_yaml::Value::Tagged(tagged) => yaml_key(tagged.value),
        other => serde_yaml::to_string(&other)
            .map(|text| text.trim().to_string())
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_yaml(text: &str) -> Result<Document, IngestError> {
        parse_document(text, SourceFormat::Yaml, Path::new("spec.yaml"))
    }

    #[test]
    fn numeric_status_keys_become_strings() {
        let document = parse_yaml(
            "openapi: 3.0.0\npaths:\n  /users:\n    get:\n      responses:\n        200:\n          description: ok\n",
        )
        .expect("parse yaml");
        assert!(
            document
                .pointer("#/paths/~1users/get/responses/200")
                .is_some()
        );
    }

    #[test]
    fn empty_yaml_is_empty_document() {
        let document = parse_yaml("").expect("parse empty");
        assert!(document.operations().is_empty());
        let document = parse_yaml("~\n").expect("parse null");
        assert!(document.root().as_object().is_some());
    }

    #[test]
    fn scalar_root_is_rejected() {
        let error = parse_yaml("just a string").unwrap_err();
        assert!(matches!(error, IngestError::NotAnObject { .. }));
    }

    #[test]
    fn extension_is_case_insensitive() {
        assert_eq!(
            SourceFormat::from_path(Path::new("API.YML")).unwrap(),
            SourceFormat::Yaml
        );
        let error = SourceFormat::from_path(Path::new("api.txt")).unwrap_err();
        assert_eq!(
            error.to_string(),
            "unsupported file extension: .txt. Use .yaml, .yml, or .json"
        );
    }

    #[test]
    fn merge_keys_are_expanded() {
        let document = parse_yaml(
            r"
openapi: 3.0.3
x-audit:
  timestamps: &timestamps
    createdAt: {type: string}
    updatedAt: {type: string}
components:
  schemas:
    Pet:
      type: object
      properties:
        <<: *timestamps
        petName: {type: string}
",
        )
        .expect("parse merge keys");
        let properties = document
            .pointer("#/components/schemas/Pet/properties")
            .and_then(Value::as_object)
            .expect("properties");
        let keys: Vec<&str> = properties.keys().map(String::as_str).collect();
        assert!(keys.contains(&"createdAt"));
        assert!(keys.contains(&"updatedAt"));
        assert!(keys.contains(&"petName"));
        assert!(!keys.contains(&"<<"));
    }

    #[test]
    fn yaml_floats_survive_conversion() {
        let document = parse_yaml("swagger: 2.0\n").expect("parse");
        assert_eq!(document.version().to_string(), "Swagger 2.0");
    }
}
