use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidateError {
    #[error("unknown rule '{0}' (run `openapi-auditor rules` to list rule ids)")]
    UnknownRule(String),
}
