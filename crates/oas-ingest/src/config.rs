//! Audit configuration files.
//!
//! A config file is TOML deserialized straight into [`AuditOptions`]; any
//! field it omits keeps its default.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use oas_model::AuditOptions;

use crate::error::IngestError;

/// File name looked up next to the audited document.
pub const CONFIG_FILE_NAME: &str = ".openapi-auditor.toml";

/// Load options from a TOML file.
pub fn load_config(path: &Path) -> Result<AuditOptions, IngestError> {
    let content = fs::read_to_string(path).map_err(|source| IngestError::io(path, source))?;
    let options = toml::from_str(&content).map_err(|source| IngestError::Toml {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "loaded audit config");
    Ok(options)
}

/// Look for [`CONFIG_FILE_NAME`] in `dir`.
pub fn discover_config(dir: &Path) -> Option<PathBuf> {
    let candidate = dir.join(CONFIG_FILE_NAME);
    if candidate.is_file() {
        debug!(path = %candidate.display(), "found audit config");
        Some(candidate)
    } else {
        None
    }
}

/// Resolve options for a document: an explicit config path wins, then a
/// config file next to the document, then defaults.
pub fn resolve_options(
    explicit: Option<&Path>,
    document_path: &Path,
) -> Result<AuditOptions, IngestError> {
    if let Some(path) = explicit {
        return load_config(path);
    }
    let dir = document_path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    match discover_config(dir) {
        Some(path) => load_config(&path),
        None => Ok(AuditOptions::default()),
    }
}
