//! OpenAPI document ingestion: file loading, format detection, and audit
//! configuration discovery.

pub mod config;
pub mod error;
pub mod loader;

pub use config::{CONFIG_FILE_NAME, discover_config, load_config, resolve_options};
pub use error::IngestError;
pub use loader::{SourceFormat, load_document, parse_document};
