//! JSON key style consistency across schema properties.

use std::collections::HashSet;

use oas_model::{AuditOptions, CaseStyle, Document, walk_schema};

use super::style::{StyleTally, deviates};
use crate::issue::Issue;

/// Check that schema property names share one case style.
pub fn check(document: &Document, options: &AuditOptions) -> Vec<Issue> {
    let mut keys: Vec<(String, String, CaseStyle)> = Vec::new();
    let mut seen: HashSet<(String, String)> = HashSet::new();

    for (pointer, schema) in document.schema_roots() {
        let mut nodes = Vec::new();
        walk_schema(pointer, schema, &mut nodes);
        for node in nodes {
            let Some(properties) = node.properties() else {
                continue;
            };
            for key in properties.keys() {
                if seen.insert((node.pointer.clone(), key.clone())) {
                    keys.push((node.pointer.clone(), key.clone(), CaseStyle::classify(key)));
                }
            }
        }
    }

    let mut tally = StyleTally::default();
    for (_, _, style) in &keys {
        tally.add(*style);
    }
    let Some(target) = tally.target(options.key_style) else {
        return Vec::new();
    };

    keys.into_iter()
        .filter(|(_, _, style)| deviates(*style, &target))
        .map(|(pointer, key, style)| Issue::KeyStyle {
            pointer,
            key,
            style,
            target,
        })
        .collect()
}
