//! Audit report output.
//!
//! - **Markdown**: one section per rule with findings, the default report file
//! - **JSON**: the full report for machine consumption

mod json;
mod markdown;
mod writer;

pub use json::render_json;
pub use markdown::{REPORT_TITLE, render_markdown};
pub use writer::{ReportFormat, write_report};
