//! CLI library components for the OpenAPI auditor.

pub mod audit;
pub mod logging;
