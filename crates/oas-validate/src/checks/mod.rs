//! Rule check modules.
//!
//! Each module implements one rule of the catalog as a function over the
//! borrowed document. Checks never fail; malformed sub-trees are skipped.

mod dry_refs;
mod examples;
mod key_style;
mod nullable;
mod operation_id;
mod param_style;
mod path_params;
mod plural;
mod schema_required;
mod style;
mod verbs;
mod versioning;

use oas_model::{AuditOptions, Document};

use crate::issue::Issue;
use crate::rules::RuleId;

/// Run the check behind `rule`.
pub fn run(rule: RuleId, document: &Document, options: &AuditOptions) -> Vec<Issue> {
    match rule {
        RuleId::OperationId => operation_id::check(document),
        RuleId::PathParams => path_params::check(document),
        RuleId::VerbsInPath => verbs::check(document, options),
        RuleId::PluralCollections => plural::check(document),
        RuleId::JsonKeyStyle => key_style::check(document, options),
        RuleId::ParamNameStyle => param_style::check(document, options),
        RuleId::Versioning => versioning::check(document),
        RuleId::SchemaRequired => schema_required::check(document),
        RuleId::NullableOptional => nullable::check(document),
        RuleId::Examples => examples::check(document, options),
        RuleId::DryRefs => dry_refs::check(document, options),
    }
}
