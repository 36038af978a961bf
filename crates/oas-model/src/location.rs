//! Finding locations and their bracketed report tags.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::method::HttpMethod;

/// Where a finding points in the document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Location {
    /// A single operation, rendered as `[GET /users]`.
    Operation { method: HttpMethod, path: String },
    /// A path item as a whole, rendered as `[/users]`.
    Path { path: String },
    /// A schema addressed by JSON pointer, rendered as `[#/components/schemas/User]`.
    Schema { pointer: String },
    /// The document as a whole; renders as an empty tag.
    Document,
}

impl Location {
    pub fn operation(method: HttpMethod, path: impl Into<String>) -> Self {
        Self::Operation {
            method,
            path: path.into(),
        }
    }

    pub fn path(path: impl Into<String>) -> Self {
        Self::Path { path: path.into() }
    }

    pub fn schema(pointer: impl Into<String>) -> Self {
        Self::Schema {
            pointer: pointer.into(),
        }
    }

    pub fn is_document(&self) -> bool {
        matches!(self, Self::Document)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Operation { method, path } => write!(f, "[{method} {path}]"),
            Self::Path { path } => write!(f, "[{path}]"),
            Self::Schema { pointer } => write!(f, "[{pointer}]"),
            Self::Document => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_render_with_brackets() {
        assert_eq!(
            Location::operation(HttpMethod::Delete, "/users/{id}").to_string(),
            "[DELETE /users/{id}]"
        );
        assert_eq!(Location::path("/health").to_string(), "[/health]");
        assert_eq!(
            Location::schema("#/components/schemas/User").to_string(),
            "[#/components/schemas/User]"
        );
        assert_eq!(Location::Document.to_string(), "");
    }
}
