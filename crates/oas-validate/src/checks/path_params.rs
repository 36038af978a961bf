//! Path template parameters versus declared `in: path` parameters.

use std::sync::LazyLock;

use regex::Regex;

use oas_model::{Document, ParameterLocation};

use crate::issue::Issue;

static TEMPLATE_PARAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([^}/]+)\}").expect("Invalid path template regex"));

/// Names inside `{...}` in a path template, in order, without repeats.
fn template_names(path: &str) -> Vec<&str> {
    let mut names: Vec<&str> = Vec::new();
    for capture in TEMPLATE_PARAM.captures_iter(path) {
        if let Some(name) = capture.get(1).map(|m| m.as_str().trim())
            && !name.is_empty()
            && !names.contains(&name)
        {
            names.push(name);
        }
    }
    names
}

/// Check that template names and `in: path` parameters agree.
pub fn check(document: &Document) -> Vec<Issue> {
    let mut issues = Vec::new();

    for operation in document.operations() {
        let template = template_names(operation.path);
        let declared: Vec<_> = document
            .effective_parameters(&operation)
            .into_iter()
            .filter(|parameter| parameter.location == ParameterLocation::Path)
            .collect();

        for name in &template {
            match declared.iter().find(|parameter| parameter.name == *name) {
                None => issues.push(Issue::UndeclaredPathParam {
                    method: operation.method,
                    path: operation.path.to_string(),
                    name: (*name).to_string(),
                }),
                Some(parameter) if !parameter.required => {
                    issues.push(Issue::PathParamNotRequired {
                        method: operation.method,
                        path: operation.path.to_string(),
                        name: (*name).to_string(),
                    });
                }
                Some(_) => {}
            }
        }

        for parameter in &declared {
            if !template.contains(&parameter.name) {
                issues.push(Issue::UnusedPathParam {
                    method: operation.method,
                    path: operation.path.to_string(),
                    name: parameter.name.to_string(),
                });
            }
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_names_are_deduplicated() {
        assert_eq!(
            template_names("/users/{id}/files/{name}.{ext}/{id}"),
            vec!["id", "name", "ext"]
        );
        assert!(template_names("/users").is_empty());
    }
}
