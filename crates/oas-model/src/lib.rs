//! Core types for auditing OpenAPI and Swagger documents.
//!
//! - [`Document`]: read-only view over a parsed document tree
//! - [`HttpMethod`], [`Parameter`], [`OperationRef`]: operation walking
//! - [`naming`]: word splitting, case styles, pluralization
//! - [`AuditOptions`]: rule configuration shared by loaders and checks

pub mod document;
pub mod error;
pub mod location;
pub mod method;
pub mod naming;
pub mod options;
pub mod schema;
pub mod severity;

pub use document::{
    Document, MediaSite, OperationRef, Parameter, ParameterLocation, PathSegment, SpecVersion,
    escape_pointer_token, path_segments,
};
pub use error::{ModelError, Result};
pub use location::Location;
pub use method::HttpMethod;
pub use naming::{
    CaseStyle, has_version_segment, is_plural, is_version_segment, pluralize, split_words,
};
pub use options::{AuditOptions, DEFAULT_VERBS};
pub use schema::{SchemaNode, schema_has_type, walk_schema};
pub use severity::Severity;
