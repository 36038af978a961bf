//! Configuration options for an audit run.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::naming::CaseStyle;
use crate::severity::Severity;

/// Leading words that mark a path segment as an action rather than a resource.
pub const DEFAULT_VERBS: &[&str] = &[
    "get", "create", "update", "delete", "remove", "list", "fetch", "add", "set", "make", "do",
    "retrieve", "modify", "edit", "insert", "save", "find", "read", "write", "post", "put", "patch",
];

/// Options controlling which rules run and how they judge names.
///
/// Every field has a default, so a config file only lists what it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AuditOptions {
    /// Rule ids to skip.
    pub disabled_rules: Vec<String>,
    /// When non-empty, only these rule ids run.
    pub only_rules: Vec<String>,
    /// Replaces [`DEFAULT_VERBS`] when non-empty.
    pub verbs: Vec<String>,
    /// Appended to the verb list.
    pub extra_verbs: Vec<String>,
    /// Expected JSON key style; the dominant style is used when unset.
    pub key_style: Option<CaseStyle>,
    /// Expected path/query parameter style; the dominant style is used when unset.
    pub param_style: Option<CaseStyle>,
    /// Property count from which a named schema is expected to carry an example.
    pub large_schema_properties: usize,
    /// Property count from which an inline schema should move to components.
    pub inline_schema_properties: usize,
    /// Per-rule severity overrides, keyed by rule id.
    pub severity: BTreeMap<String, Severity>,
}

impl Default for AuditOptions {
    fn default() -> Self {
        Self {
            disabled_rules: Vec::new(),
            only_rules: Vec::new(),
            verbs: Vec::new(),
            extra_verbs: Vec::new(),
            key_style: None,
            param_style: None,
            large_schema_properties: 5,
            inline_schema_properties: 3,
            severity: BTreeMap::new(),
        }
    }
}

impl AuditOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Effective verb list, lowercased.
    pub fn verb_list(&self) -> Vec<String> {
        let base: Vec<String> = if self.verbs.is_empty() {
            DEFAULT_VERBS.iter().map(|verb| (*verb).to_string()).collect()
        } else {
            self.verbs.clone()
        };
        let mut verbs: Vec<String> = base
            .into_iter()
            .chain(self.extra_verbs.iter().cloned())
            .map(|verb| verb.trim().to_lowercase())
            .filter(|verb| !verb.is_empty())
            .collect();
        let mut seen = BTreeSet::new();
        verbs.retain(|verb| seen.insert(verb.clone()));
        verbs
    }

    pub fn with_disabled_rules(mut self, rules: Vec<String>) -> Self {
        self.disabled_rules.extend(rules);
        self
    }

    pub fn with_only_rules(mut self, rules: Vec<String>) -> Self {
        self.only_rules = rules;
        self
    }

    pub fn with_key_style(mut self, style: CaseStyle) -> Self {
        self.key_style = Some(style);
        self
    }

    pub fn with_param_style(mut self, style: CaseStyle) -> Self {
        self.param_style = Some(style);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verb_list_merges_extra_verbs() {
        let options = AuditOptions {
            verbs: vec!["Get".to_string()],
            extra_verbs: vec!["sync".to_string()],
            ..AuditOptions::default()
        };
        assert_eq!(options.verb_list(), vec!["get", "sync"]);
        assert!(AuditOptions::default().verb_list().contains(&"create".to_string()));
    }

    #[test]
    fn parses_partial_toml() {
        let options: AuditOptions = toml::from_str(
            r#"
disabled_rules = ["examples"]
key_style = "snake_case"
inline_schema_properties = 4

[severity]
versioning = "error"
"#,
        )
        .expect("parse options");
        assert_eq!(options.disabled_rules, vec!["examples"]);
        assert_eq!(options.key_style, Some(CaseStyle::Snake));
        assert_eq!(options.inline_schema_properties, 4);
        assert_eq!(options.large_schema_properties, 5);
        assert_eq!(options.severity.get("versioning"), Some(&Severity::Error));
    }

    #[test]
    fn rejects_unknown_fields() {
        let result: Result<AuditOptions, _> = toml::from_str("colour = true");
        assert!(result.is_err());
    }
}
