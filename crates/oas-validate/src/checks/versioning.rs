//! API versioning in servers, basePath or paths.

use oas_model::{Document, PathSegment, has_version_segment, is_version_segment, path_segments};

use crate::issue::Issue;

/// Check that the API version is expressed somewhere.
pub fn check(document: &Document) -> Vec<Issue> {
    let server_versioned = document
        .server_urls()
        .into_iter()
        .chain(document.base_path())
        .any(has_version_segment);
    if server_versioned {
        return Vec::new();
    }

    let paths: Vec<&str> = document.paths().into_iter().map(|(path, _)| path).collect();
    let (versioned, unversioned): (Vec<&str>, Vec<&str>) =
        paths.into_iter().partition(|path| starts_with_version(path));

    if versioned.is_empty() {
        return vec![Issue::MissingVersion];
    }
    unversioned
        .into_iter()
        .map(|path| Issue::UnversionedPath {
            path: path.to_string(),
        })
        .collect()
}

fn starts_with_version(path: &str) -> bool {
    matches!(
        path_segments(path).first(),
        Some(PathSegment::Static(segment)) if is_version_segment(segment)
    )
}
