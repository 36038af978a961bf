//! Read-only view over a parsed OpenAPI 3.x or Swagger 2.0 document.
//!
//! The document is kept as a `serde_json::Value` tree (YAML input is
//! converted on load) so every rule sees the same shape regardless of the
//! source format. Key order follows the source file.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::method::HttpMethod;

/// Upper bound on `$ref` chains followed by [`Document::resolve`].
const MAX_REF_DEPTH: usize = 16;

/// Detected document flavour and its declared version string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "version", rename_all = "snake_case")]
pub enum SpecVersion {
    OpenApi3(String),
    Swagger2(String),
    Unknown,
}

impl SpecVersion {
    pub fn is_swagger2(&self) -> bool {
        matches!(self, Self::Swagger2(_))
    }
}

impl fmt::Display for SpecVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OpenApi3(version) => write!(f, "OpenAPI {version}"),
            Self::Swagger2(version) => write!(f, "Swagger {version}"),
            Self::Unknown => f.write_str("unknown"),
        }
    }
}

/// Where a parameter is carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParameterLocation {
    Path,
    Query,
    Header,
    Cookie,
    Body,
    FormData,
    Other,
}

impl ParameterLocation {
    pub fn parse(value: &str) -> Self {
        match value {
            "path" => Self::Path,
            "query" => Self::Query,
            "header" => Self::Header,
            "cookie" => Self::Cookie,
            "body" => Self::Body,
            "formData" => Self::FormData,
            _ => Self::Other,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Path => "path",
            Self::Query => "query",
            Self::Header => "header",
            Self::Cookie => "cookie",
            Self::Body => "body",
            Self::FormData => "formData",
            Self::Other => "other",
        }
    }
}

/// A parameter after `$ref` resolution.
#[derive(Debug, Clone, Copy)]
pub struct Parameter<'a> {
    pub name: &'a str,
    pub location: ParameterLocation,
    pub required: bool,
    pub schema: Option<&'a Value>,
}

impl<'a> Parameter<'a> {
    fn from_object(raw: &'a Map<String, Value>) -> Option<Self> {
        let name = raw.get("name")?.as_str()?;
        let location = raw
            .get("in")
            .and_then(Value::as_str)
            .map_or(ParameterLocation::Other, ParameterLocation::parse);
        Some(Self {
            name,
            location,
            required: raw.get("required").and_then(Value::as_bool).unwrap_or(false),
            schema: raw.get("schema"),
        })
    }
}

/// One operation of a path item, yielded in document order.
#[derive(Debug, Clone, Copy)]
pub struct OperationRef<'a> {
    pub path: &'a str,
    pub method: HttpMethod,
    pub operation: &'a Map<String, Value>,
    pub path_item: &'a Map<String, Value>,
}

impl<'a> OperationRef<'a> {
    /// Declared `operationId`, ignoring blank values.
    pub fn operation_id(&self) -> Option<&'a str> {
        self.operation
            .get("operationId")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }

    /// `METHOD /path`, as used inside report tags.
    pub fn tag(&self) -> String {
        format!("{} {}", self.method, self.path)
    }

    /// JSON pointer of the operation object.
    pub fn pointer(&self) -> String {
        format!(
            "#/paths/{}/{}",
            escape_pointer_token(self.path),
            self.method.as_upper().to_ascii_lowercase()
        )
    }
}

/// A media type entry of a request body or response.
#[derive(Debug, Clone)]
pub struct MediaSite<'a> {
    pub media_type: String,
    /// The media type object (OAS3) or the response/parameter object (Swagger 2).
    pub container: &'a Map<String, Value>,
    pub schema: Option<&'a Value>,
    pub pointer: String,
    /// Reached through a `$ref` to a reusable response, request body or
    /// parameter; the schema is collected at its definition instead.
    pub referenced: bool,
}

/// A `/`-separated piece of a path template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSegment<'a> {
    Static(&'a str),
    /// A segment holding at least one `{name}` template expression.
    Param(&'a str),
}

/// Split a path template into non-empty segments.
pub fn path_segments(path: &str) -> Vec<PathSegment<'_>> {
    path.split('/')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            if segment.contains('{') && segment.contains('}') {
                PathSegment::Param(segment)
            } else {
                PathSegment::Static(segment)
            }
        })
        .collect()
}

/// Escape a JSON pointer reference token (RFC 6901).
pub fn escape_pointer_token(token: &str) -> String {
    token.replace('~', "~0").replace('/', "~1")
}

#[derive(Debug, Clone, Default)]
pub struct Document {
    root: Value,
}

impl Document {
    pub fn new(root: Value) -> Self {
        Self { root }
    }

    pub fn empty() -> Self {
        Self::new(Value::Object(Map::new()))
    }

    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Look up a JSON pointer; accepts both `#/a/b` and `/a/b`.
    pub fn pointer(&self, pointer: &str) -> Option<&Value> {
        let pointer = pointer.strip_prefix('#').unwrap_or(pointer);
        if pointer.is_empty() {
            return Some(&self.root);
        }
        self.root.pointer(pointer)
    }

    pub fn version(&self) -> SpecVersion {
        if let Some(version) = self.root.get("openapi") {
            return SpecVersion::OpenApi3(scalar_to_string(version));
        }
        if let Some(version) = self.root.get("swagger") {
            return SpecVersion::Swagger2(scalar_to_string(version));
        }
        SpecVersion::Unknown
    }

    /// Path items in document order; non-object items are skipped.
    pub fn paths(&self) -> Vec<(&str, &Map<String, Value>)> {
        let Some(paths) = self.root.get("paths").and_then(Value::as_object) else {
            return Vec::new();
        };
        paths
            .iter()
            .filter_map(|(path, item)| {
                let item = self.resolve(item).as_object()?;
                Some((path.as_str(), item))
            })
            .collect()
    }

    /// Every operation of every path item, in document order.
    pub fn operations(&self) -> Vec<OperationRef<'_>> {
        let mut operations = Vec::new();
        for (path, item) in self.paths() {
            for (key, operation) in item {
                let Some(method) = HttpMethod::parse(key) else {
                    continue;
                };
                let Some(operation) = operation.as_object() else {
                    continue;
                };
                operations.push(OperationRef {
                    path,
                    method,
                    operation,
                    path_item: item,
                });
            }
        }
        operations
    }

    /// Follow local `$ref`s until a non-reference value is reached.
    ///
    /// Unresolvable or external references resolve to the reference object
    /// itself.
    pub fn resolve<'a>(&'a self, value: &'a Value) -> &'a Value {
        let mut current = value;
        for _ in 0..MAX_REF_DEPTH {
            let Some(reference) = ref_target(current) else {
                return current;
            };
            match reference
                .strip_prefix('#')
                .and_then(|pointer| self.root.pointer(pointer))
            {
                Some(target) => current = target,
                None => return current,
            }
        }
        current
    }

    /// Path-level parameters overridden by operation-level ones, keyed by
    /// `(name, in)`. Order: path-level first, then new operation-level ones.
    pub fn effective_parameters<'a>(&'a self, operation: &OperationRef<'a>) -> Vec<Parameter<'a>> {
        let mut parameters: Vec<Parameter<'a>> = self.parameter_list(operation.path_item.get("parameters"));
        for parameter in self.parameter_list(operation.operation.get("parameters")) {
            match parameters
                .iter_mut()
                .find(|existing| existing.name == parameter.name && existing.location == parameter.location)
            {
                Some(existing) => *existing = parameter,
                None => parameters.push(parameter),
            }
        }
        parameters
    }

    fn parameter_list<'a>(&'a self, value: Option<&'a Value>) -> Vec<Parameter<'a>> {
        let Some(list) = value.and_then(Value::as_array) else {
            return Vec::new();
        };
        list.iter()
            .filter_map(|entry| self.resolve(entry).as_object())
            .filter_map(Parameter::from_object)
            .collect()
    }

    /// `servers[].url` values (OpenAPI 3).
    pub fn server_urls(&self) -> Vec<&str> {
        self.root
            .get("servers")
            .and_then(Value::as_array)
            .map(|servers| {
                servers
                    .iter()
                    .filter_map(|server| server.get("url").and_then(Value::as_str))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// `basePath` (Swagger 2).
    pub fn base_path(&self) -> Option<&str> {
        self.root.get("basePath").and_then(Value::as_str)
    }

    /// Named schemas from `components.schemas` and `definitions`, as
    /// `(pointer, name, schema)`.
    pub fn named_schemas(&self) -> Vec<(String, &str, &Value)> {
        let mut schemas = Vec::new();
        let sources = [
            ("#/components/schemas", self.pointer("#/components/schemas")),
            ("#/definitions", self.pointer("#/definitions")),
        ];
        for (prefix, container) in sources {
            let Some(container) = container.and_then(Value::as_object) else {
                continue;
            };
            for (name, schema) in container {
                schemas.push((
                    format!("{prefix}/{}", escape_pointer_token(name)),
                    name.as_str(),
                    schema,
                ));
            }
        }
        schemas
    }

    /// Every schema root in the document: named schemas, reusable
    /// components, and schemas inline in path items and operations.
    ///
    /// `$ref`s are not followed, so each schema appears once, at its
    /// definition.
    pub fn schema_roots(&self) -> Vec<(String, &Value)> {
        let mut roots: Vec<(String, &Value)> = self
            .named_schemas()
            .into_iter()
            .map(|(pointer, _, schema)| (pointer, schema))
            .collect();

        for (prefix, nested) in [
            ("#/components/requestBodies", true),
            ("#/components/responses", true),
            ("#/components/parameters", false),
            ("#/responses", false),
            ("#/parameters", false),
        ] {
            let Some(container) = self.pointer(prefix).and_then(Value::as_object) else {
                continue;
            };
            for (name, component) in container {
                let pointer = format!("{prefix}/{}", escape_pointer_token(name));
                collect_component_schemas(&pointer, component, nested, &mut roots);
            }
        }

        let mut path_items_seen = Vec::new();
        for operation in self.operations() {
            if !path_items_seen.contains(&operation.path) {
                path_items_seen.push(operation.path);
                let base = format!("#/paths/{}/parameters", escape_pointer_token(operation.path));
                collect_parameter_schemas(&base, operation.path_item.get("parameters"), &mut roots);
            }
            collect_parameter_schemas(
                &format!("{}/parameters", operation.pointer()),
                operation.operation.get("parameters"),
                &mut roots,
            );
            let sites = self
                .request_body_sites(&operation)
                .into_iter()
                .chain(self.response_sites(&operation).into_iter().flat_map(|(_, sites)| sites));
            for site in sites.filter(|site| !site.referenced) {
                if let Some(schema) = site.schema {
                    roots.push((format!("{}/schema", site.pointer), schema));
                }
            }
        }
        roots
    }

    /// Request body media types of an operation.
    ///
    /// OpenAPI 3 reads `requestBody.content`; Swagger 2 maps each `in: body`
    /// parameter to the first `consumes` media type.
    pub fn request_body_sites<'a>(&'a self, operation: &OperationRef<'a>) -> Vec<MediaSite<'a>> {
        let base = operation.pointer();
        if self.version().is_swagger2() {
            let media_type = self.media_type_for(operation, "consumes");
            let mut sites = self.body_parameter_sites(
                operation.operation.get("parameters"),
                &format!("{base}/parameters"),
                &media_type,
            );
            if sites.is_empty() {
                let path_base = format!("#/paths/{}/parameters", escape_pointer_token(operation.path));
                sites = self.body_parameter_sites(
                    operation.path_item.get("parameters"),
                    &path_base,
                    &media_type,
                );
            }
            return sites;
        }
        let Some(body) = operation.operation.get("requestBody") else {
            return Vec::new();
        };
        content_sites(
            self.resolve(body),
            &format!("{base}/requestBody"),
            ref_target(body).is_some(),
        )
    }

    /// Responses of an operation keyed by status code, each with its media
    /// type entries.
    pub fn response_sites<'a>(
        &'a self,
        operation: &OperationRef<'a>,
    ) -> Vec<(&'a str, Vec<MediaSite<'a>>)> {
        let Some(responses) = operation
            .operation
            .get("responses")
            .and_then(Value::as_object)
        else {
            return Vec::new();
        };
        let base = format!("{}/responses", operation.pointer());
        let swagger = self.version().is_swagger2();
        let produces = self.media_type_for(operation, "produces");

        responses
            .iter()
            .map(|(status, response)| {
                let referenced = ref_target(response).is_some();
                let response = self.resolve(response);
                let pointer = format!("{base}/{}", escape_pointer_token(status));
                let sites = if swagger {
                    response
                        .as_object()
                        .filter(|object| object.contains_key("schema"))
                        .map(|object| {
                            vec![MediaSite {
                                media_type: produces.clone(),
                                container: object,
                                schema: object.get("schema"),
                                pointer: pointer.clone(),
                                referenced,
                            }]
                        })
                        .unwrap_or_default()
                } else {
                    content_sites(response, &pointer, referenced)
                };
                (status.as_str(), sites)
            })
            .collect()
    }

    fn body_parameter_sites<'a>(
        &'a self,
        list: Option<&'a Value>,
        pointer: &str,
        media_type: &str,
    ) -> Vec<MediaSite<'a>> {
        let Some(list) = list.and_then(Value::as_array) else {
            return Vec::new();
        };
        list.iter()
            .enumerate()
            .filter_map(|(index, entry)| {
                let parameter = self.resolve(entry).as_object()?;
                if parameter.get("in").and_then(Value::as_str) != Some("body") {
                    return None;
                }
                Some(MediaSite {
                    media_type: media_type.to_string(),
                    container: parameter,
                    schema: parameter.get("schema"),
                    pointer: format!("{pointer}/{index}"),
                    referenced: ref_target(entry).is_some(),
                })
            })
            .collect()
    }

    fn media_type_for(&self, operation: &OperationRef<'_>, key: &str) -> String {
        operation
            .operation
            .get(key)
            .or_else(|| self.root.get(key))
            .and_then(Value::as_array)
            .and_then(|list| list.first())
            .and_then(Value::as_str)
            .unwrap_or("application/json")
            .to_string()
    }
}

fn content_sites<'a>(container: &'a Value, pointer: &str, referenced: bool) -> Vec<MediaSite<'a>> {
    let Some(content) = container.get("content").and_then(Value::as_object) else {
        return Vec::new();
    };
    content
        .iter()
        .filter_map(|(media_type, media)| {
            let media = media.as_object()?;
            Some(MediaSite {
                media_type: media_type.clone(),
                container: media,
                schema: media.get("schema"),
                pointer: format!("{pointer}/content/{}", escape_pointer_token(media_type)),
                referenced,
            })
        })
        .collect()
}

fn collect_component_schemas<'a>(
    pointer: &str,
    component: &'a Value,
    nested: bool,
    roots: &mut Vec<(String, &'a Value)>,
) {
    if let Some(schema) = component.get("schema") {
        roots.push((format!("{pointer}/schema"), schema));
    }
    if !nested {
        return;
    }
    for site in content_sites(component, pointer, false) {
        if let Some(schema) = site.schema {
            roots.push((format!("{}/schema", site.pointer), schema));
        }
    }
}

/// Schemas of inline, non-body parameters. Referenced parameters are
/// collected from their definitions; body parameters are request bodies.
fn collect_parameter_schemas<'a>(
    pointer: &str,
    list: Option<&'a Value>,
    roots: &mut Vec<(String, &'a Value)>,
) {
    let Some(list) = list.and_then(Value::as_array) else {
        return;
    };
    for (index, parameter) in list.iter().enumerate() {
        if ref_target(parameter).is_some()
            || parameter.get("in").and_then(Value::as_str) == Some("body")
        {
            continue;
        }
        if let Some(schema) = parameter.get("schema") {
            roots.push((format!("{pointer}/{index}/schema"), schema));
        }
    }
}

fn ref_target(value: &Value) -> Option<&str> {
    value.as_object()?.get("$ref")?.as_str()
}

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
