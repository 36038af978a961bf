//! The fixed rule catalog.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use oas_model::Severity;

use super::category::Category;
use crate::error::ValidateError;

/// Audit rule identifier. Declaration order is report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleId {
    OperationId,
    PathParams,
    VerbsInPath,
    PluralCollections,
    JsonKeyStyle,
    ParamNameStyle,
    Versioning,
    SchemaRequired,
    NullableOptional,
    Examples,
    DryRefs,
}

impl RuleId {
    /// Get all rules in report order.
    pub const fn all() -> &'static [Self] {
        &[
            Self::OperationId,
            Self::PathParams,
            Self::VerbsInPath,
            Self::PluralCollections,
            Self::JsonKeyStyle,
            Self::ParamNameStyle,
            Self::Versioning,
            Self::SchemaRequired,
            Self::NullableOptional,
            Self::Examples,
            Self::DryRefs,
        ]
    }

    /// Stable id used in config files and on the command line.
    pub fn id(&self) -> &'static str {
        match self {
            Self::OperationId => "operation-id",
            Self::PathParams => "path-params",
            Self::VerbsInPath => "verbs-in-path",
            Self::PluralCollections => "plural-collections",
            Self::JsonKeyStyle => "json-key-style",
            Self::ParamNameStyle => "param-name-style",
            Self::Versioning => "versioning",
            Self::SchemaRequired => "schema-required",
            Self::NullableOptional => "nullable-optional",
            Self::Examples => "examples",
            Self::DryRefs => "dry-refs",
        }
    }

    /// Group heading in reports.
    pub fn heading(&self) -> &'static str {
        match self {
            Self::OperationId => "operationId",
            Self::PathParams => "path parameters",
            Self::VerbsInPath => "verbs in path",
            Self::PluralCollections => "plural collections",
            Self::JsonKeyStyle => "JSON key style",
            Self::ParamNameStyle => "parameter name style",
            Self::Versioning => "versioning",
            Self::SchemaRequired => "schema types & required",
            Self::NullableOptional => "nullable vs optional",
            Self::Examples => "examples",
            Self::DryRefs => "DRY ($ref)",
        }
    }

    pub fn category(&self) -> Category {
        match self {
            Self::OperationId | Self::PathParams => Category::Operations,
            Self::VerbsInPath | Self::PluralCollections => Category::Naming,
            Self::JsonKeyStyle | Self::ParamNameStyle => Category::Consistency,
            Self::Versioning => Category::Structure,
            Self::SchemaRequired | Self::NullableOptional | Self::DryRefs => Category::Schemas,
            Self::Examples => Category::Documentation,
        }
    }

    /// Severity unless overridden in options.
    pub fn default_severity(&self) -> Severity {
        match self {
            Self::OperationId | Self::PathParams => Severity::Error,
            _ => Severity::Warning,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::OperationId => "Every operation has a unique operationId",
            Self::PathParams => "Path template parameters are declared as required path parameters",
            Self::VerbsInPath => "Path segments name resources, not actions",
            Self::PluralCollections => "Collection segments use plural nouns",
            Self::JsonKeyStyle => "Schema property names share one casing style",
            Self::ParamNameStyle => "Path and query parameter names share one casing style",
            Self::Versioning => "The API version appears in servers, basePath or paths",
            Self::SchemaRequired => "Schemas declare types, items and required properties",
            Self::NullableOptional => "Properties are not both nullable and optional",
            Self::Examples => "Request bodies, responses and large schemas carry examples",
            Self::DryRefs => "Large or repeated inline schemas move to components",
        }
    }

    /// Parse a rule id (`verbs-in-path`); underscores are accepted for dashes.
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_lowercase().replace('_', "-");
        Self::all()
            .iter()
            .copied()
            .find(|rule| rule.id() == normalized)
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for RuleId {
    type Err = ValidateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ValidateError::UnknownRule(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_through_parse() {
        for rule in RuleId::all() {
            assert_eq!(RuleId::parse(rule.id()), Some(*rule));
        }
        assert_eq!(RuleId::parse("VERBS_IN_PATH"), Some(RuleId::VerbsInPath));
        assert!("no-such-rule".parse::<RuleId>().is_err());
    }

    #[test]
    fn catalog_order_is_declaration_order() {
        let mut sorted = RuleId::all().to_vec();
        sorted.sort();
        assert_eq!(sorted, RuleId::all());
    }
}
