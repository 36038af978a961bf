//! Audit issue types.
//!
//! Each variant carries only the data it needs; the rule, location,
//! default severity and message are all derived from it.

use serde::{Deserialize, Serialize};

use oas_model::{CaseStyle, HttpMethod, Location, ParameterLocation, Severity};

use crate::rules::RuleId;

/// The style a name was measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StyleTarget {
    /// Most frequent style: `count` of `total` tallied names use it.
    Dominant {
        style: CaseStyle,
        count: usize,
        total: usize,
    },
    /// Style fixed in configuration.
    Configured(CaseStyle),
}

impl StyleTarget {
    pub fn style(&self) -> CaseStyle {
        match self {
            Self::Dominant { style, .. } | Self::Configured(style) => *style,
        }
    }

    fn describe(&self, noun: &str) -> String {
        match self {
            Self::Dominant {
                style,
                count,
                total,
            } => format!("dominant style is {style} ({count} of {total} {noun})"),
            Self::Configured(style) => format!("configured style is {style}"),
        }
    }
}

/// Audit issue - each variant carries only its needed data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Issue {
    // Operations
    /// Operation has no operationId
    MissingOperationId { method: HttpMethod, path: String },
    /// operationId already used by an earlier operation
    DuplicateOperationId {
        operation_id: String,
        method: HttpMethod,
        path: String,
        first_method: HttpMethod,
        first_path: String,
    },
    /// `{name}` in the path template has no `in: path` parameter
    UndeclaredPathParam {
        method: HttpMethod,
        path: String,
        name: String,
    },
    /// Path parameter lacks `required: true`
    PathParamNotRequired {
        method: HttpMethod,
        path: String,
        name: String,
    },
    /// `in: path` parameter missing from the template
    UnusedPathParam {
        method: HttpMethod,
        path: String,
        name: String,
    },

    // Naming
    /// Path segment starts with a verb
    VerbInPath {
        method: HttpMethod,
        path: String,
        segment: String,
        verb: String,
    },
    /// Collection segment is singular
    SingularCollection {
        method: HttpMethod,
        path: String,
        segment: String,
        suggestion: String,
    },

    // Consistency
    /// Schema property name deviates from the expected style
    KeyStyle {
        pointer: String,
        key: String,
        style: CaseStyle,
        target: StyleTarget,
    },
    /// Path or query parameter name deviates from the expected style
    ParamStyle {
        method: HttpMethod,
        path: String,
        location: ParameterLocation,
        name: String,
        style: CaseStyle,
        target: StyleTarget,
    },

    // Structure
    /// Path lacks a version segment while others have one
    UnversionedPath { path: String },
    /// No version anywhere
    MissingVersion,

    // Schemas
    /// Schema has no type or composition keyword
    SchemaMissingType { pointer: String },
    /// Array schema without `items`
    ArrayWithoutItems { pointer: String },
    /// Object schema with properties but no `required`
    NoRequiredProperties { pointer: String },
    /// `required` lists a property that is not defined
    UnknownRequiredProperty { pointer: String, property: String },
    /// Property is nullable and not required
    NullableOptional { pointer: String, property: String },

    // Documentation
    /// Request body media type without example
    RequestBodyWithoutExample {
        method: HttpMethod,
        path: String,
        media_type: String,
    },
    /// Success response media type without example
    ResponseWithoutExample {
        method: HttpMethod,
        path: String,
        status: String,
        media_type: String,
    },
    /// Large named schema without example
    LargeSchemaWithoutExample {
        pointer: String,
        property_count: usize,
    },

    // Reuse
    /// Inline schema large enough to deserve a component
    LargeInlineSchema {
        method: HttpMethod,
        path: String,
        site: String,
        media_type: String,
        property_count: usize,
    },
    /// Identical inline schema at several locations
    DuplicateInlineSchema { sites: Vec<String> },
}

impl Issue {
    /// Rule that produced this issue.
    pub fn rule(&self) -> RuleId {
        match self {
            Issue::MissingOperationId { .. } | Issue::DuplicateOperationId { .. } => {
                RuleId::OperationId
            }
            Issue::UndeclaredPathParam { .. }
            | Issue::PathParamNotRequired { .. }
            | Issue::UnusedPathParam { .. } => RuleId::PathParams,
            Issue::VerbInPath { .. } => RuleId::VerbsInPath,
            Issue::SingularCollection { .. } => RuleId::PluralCollections,
            Issue::KeyStyle { .. } => RuleId::JsonKeyStyle,
            Issue::ParamStyle { .. } => RuleId::ParamNameStyle,
            Issue::UnversionedPath { .. } | Issue::MissingVersion => RuleId::Versioning,
            Issue::SchemaMissingType { .. }
            | Issue::ArrayWithoutItems { .. }
            | Issue::NoRequiredProperties { .. }
            | Issue::UnknownRequiredProperty { .. } => RuleId::SchemaRequired,
            Issue::NullableOptional { .. } => RuleId::NullableOptional,
            Issue::RequestBodyWithoutExample { .. }
            | Issue::ResponseWithoutExample { .. }
            | Issue::LargeSchemaWithoutExample { .. } => RuleId::Examples,
            Issue::LargeInlineSchema { .. } | Issue::DuplicateInlineSchema { .. } => {
                RuleId::DryRefs
            }
        }
    }

    /// Where the issue points.
    pub fn location(&self) -> Location {
        match self {
            Issue::MissingOperationId { method, path }
            | Issue::UndeclaredPathParam { method, path, .. }
            | Issue::PathParamNotRequired { method, path, .. }
            | Issue::UnusedPathParam { method, path, .. }
            | Issue::VerbInPath { method, path, .. }
            | Issue::SingularCollection { method, path, .. }
            | Issue::ParamStyle { method, path, .. }
            | Issue::RequestBodyWithoutExample { method, path, .. }
            | Issue::ResponseWithoutExample { method, path, .. }
            | Issue::LargeInlineSchema { method, path, .. } => {
                Location::operation(*method, path.clone())
            }
            Issue::KeyStyle { pointer, .. }
            | Issue::SchemaMissingType { pointer }
            | Issue::ArrayWithoutItems { pointer }
            | Issue::NoRequiredProperties { pointer }
            | Issue::UnknownRequiredProperty { pointer, .. }
            | Issue::NullableOptional { pointer, .. }
            | Issue::LargeSchemaWithoutExample { pointer, .. } => Location::schema(pointer.clone()),
            Issue::UnversionedPath { path } => Location::path(path.clone()),
            Issue::DuplicateOperationId { .. }
            | Issue::MissingVersion
            | Issue::DuplicateInlineSchema { .. } => Location::Document,
        }
    }

    /// Severity of the issue's rule.
    pub fn default_severity(&self) -> Severity {
        self.rule().default_severity()
    }

    /// Free-text message, without the location tag.
    pub fn message(&self) -> String {
        match self {
            Issue::MissingOperationId { .. } => "missing operationId".to_string(),
            Issue::DuplicateOperationId {
                operation_id,
                method,
                path,
                first_method,
                first_path,
            } => format!(
                "Duplicate operationId '{operation_id}' at {method} {path} \
                 (already used at {first_method} {first_path})"
            ),
            Issue::UndeclaredPathParam { name, .. } => {
                format!("path parameter '{name}' is not declared")
            }
            Issue::PathParamNotRequired { name, .. } => {
                format!("path parameter '{name}' must be marked required: true")
            }
            Issue::UnusedPathParam { name, .. } => {
                format!("path parameter '{name}' is declared but not in the path template")
            }
            Issue::VerbInPath { segment, verb, .. } => format!(
                "segment '{segment}' starts with verb '{verb}'; let the HTTP method express the action"
            ),
            Issue::SingularCollection {
                segment,
                suggestion,
                ..
            } => format!("collection '{segment}' should be plural (e.g. '{suggestion}')"),
            Issue::KeyStyle {
                key, style, target, ..
            } => format!("key '{key}' is {style}; {}", target.describe("keys")),
            Issue::ParamStyle {
                location,
                name,
                style,
                target,
                ..
            } => format!(
                "{} parameter '{name}' is {style}; {}",
                location.label(),
                target.describe("parameters")
            ),
            Issue::UnversionedPath { .. } => {
                "path has no version segment while other paths do".to_string()
            }
            Issue::MissingVersion => {
                "no version segment in servers/basePath or paths (expected e.g. /v1)".to_string()
            }
            Issue::SchemaMissingType { .. } => "schema has no type".to_string(),
            Issue::ArrayWithoutItems { .. } => "array schema has no items".to_string(),
            Issue::NoRequiredProperties { .. } => {
                "object schema declares no required properties".to_string()
            }
            Issue::UnknownRequiredProperty { property, .. } => {
                format!("required property '{property}' is not defined in properties")
            }
            Issue::NullableOptional { property, .. } => format!(
                "property '{property}' is nullable and optional; pick one way to express absence"
            ),
            Issue::RequestBodyWithoutExample { media_type, .. } => {
                format!("request body ({media_type}) has no example")
            }
            Issue::ResponseWithoutExample {
                status, media_type, ..
            } => format!("response {status} ({media_type}) has no example"),
            Issue::LargeSchemaWithoutExample { property_count, .. } => {
                format!("schema with {property_count} properties has no example")
            }
            Issue::LargeInlineSchema {
                site,
                media_type,
                property_count,
                ..
            } => format!(
                "inline {site} schema ({media_type}) has {property_count} properties; \
                 move it to components and use $ref"
            ),
            Issue::DuplicateInlineSchema { sites } => format!(
                "identical inline schema used at {} locations ({}); \
                 extract it into components and use $ref",
                sites.len(),
                sites.join(", ")
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operation_issues_render_with_method_tag() {
        let issue = Issue::VerbInPath {
            method: HttpMethod::Get,
            path: "/getUsers".to_string(),
            segment: "getUsers".to_string(),
            verb: "get".to_string(),
        };
        assert_eq!(issue.rule(), RuleId::VerbsInPath);
        assert_eq!(
            format!("{} {}", issue.location(), issue.message()),
            "[GET /getUsers] segment 'getUsers' starts with verb 'get'; \
             let the HTTP method express the action"
        );
    }

    #[test]
    fn document_issues_render_without_tag() {
        let issue = Issue::DuplicateOperationId {
            operation_id: "listUsers".to_string(),
            method: HttpMethod::Post,
            path: "/users".to_string(),
            first_method: HttpMethod::Get,
            first_path: "/users".to_string(),
        };
        assert_eq!(issue.location(), Location::Document);
        assert_eq!(
            issue.message(),
            "Duplicate operationId 'listUsers' at POST /users (already used at GET /users)"
        );
        assert_eq!(issue.default_severity(), Severity::Error);
    }

    #[test]
    fn style_messages_include_tally() {
        let issue = Issue::ParamStyle {
            method: HttpMethod::Get,
            path: "/users".to_string(),
            location: ParameterLocation::Query,
            name: "page_size".to_string(),
            style: CaseStyle::Snake,
            target: StyleTarget::Dominant {
                style: CaseStyle::Camel,
                count: 4,
                total: 5,
            },
        };
        assert_eq!(
            format!("{} {}", issue.location(), issue.message()),
            "[GET /users] query parameter 'page_size' is snake_case; \
             dominant style is camelCase (4 of 5 parameters)"
        );
    }
}
