//! OpenAPI style and consistency rules.
//!
//! This crate audits a parsed [`Document`](oas_model::Document) against a
//! fixed catalog of independent rules:
//!
//! - **Operations**: operationId presence/uniqueness, path parameter wiring
//! - **Naming**: verbs in path segments, plural collection names
//! - **Consistency**: JSON key style, path/query parameter name style
//! - **Structure**: API versioning
//! - **Schemas**: types, array items, required lists, nullable vs optional,
//!   inline schemas that belong in components
//! - **Documentation**: examples on bodies, responses and large schemas
//!
//! # Example
//!
//! ```ignore
//! use oas_model::AuditOptions;
//! use oas_validate::audit_document;
//!
//! let document = oas_ingest::load_document(path)?;
//! let report = audit_document(&document, "api.yaml", &AuditOptions::default())?;
//! for finding in report.findings() {
//!     println!("{}", finding.render());
//! }
//! ```

mod checks;
mod engine;
mod error;
mod issue;
mod report;
pub mod rules;

pub use engine::{RulePlan, audit_document};
pub use error::ValidateError;
pub use issue::{Issue, StyleTarget};
pub use report::{AuditReport, Finding, RuleOutcome};
pub use rules::{Category, RuleId};
