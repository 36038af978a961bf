//! Plural collection names.

use std::collections::HashSet;

use oas_model::{
    Document, PathSegment, is_plural, is_version_segment, path_segments, pluralize, split_words,
};

use crate::issue::Issue;

/// Check that collection segments use plural nouns.
///
/// A static segment is a collection when a parameter segment follows it,
/// or when it ends the path and the document also has the same path with
/// a trailing parameter (`/users` next to `/users/{id}`).
pub fn check(document: &Document) -> Vec<Issue> {
    let paths = document.paths();
    let parent_of_param: HashSet<String> = paths
        .iter()
        .filter_map(|(path, _)| {
            let segments = path_segments(path);
            match segments.split_last() {
                Some((PathSegment::Param(_), parent)) => Some(join_segments(parent)),
                _ => None,
            }
        })
        .collect();

    let mut issues = Vec::new();
    for operation in document.operations() {
        let segments = path_segments(operation.path);
        for (index, segment) in segments.iter().enumerate() {
            let PathSegment::Static(name) = *segment else {
                continue;
            };
            if is_version_segment(name) {
                continue;
            }
            let is_collection = match segments.get(index + 1) {
                Some(PathSegment::Param(_)) => true,
                Some(PathSegment::Static(_)) => false,
                None => parent_of_param.contains(&join_segments(&segments)),
            };
            if !is_collection {
                continue;
            }
            let Some(last_word) = split_words(name).pop() else {
                continue;
            };
            if !is_plural(&last_word) {
                issues.push(Issue::SingularCollection {
                    method: operation.method,
                    path: operation.path.to_string(),
                    segment: name.to_string(),
                    suggestion: pluralize(name),
                });
            }
        }
    }

    issues
}

fn join_segments(segments: &[PathSegment<'_>]) -> String {
    segments
        .iter()
        .map(|segment| match segment {
            PathSegment::Static(text) | PathSegment::Param(text) => *text,
        })
        .collect::<Vec<_>>()
        .join("/")
}
