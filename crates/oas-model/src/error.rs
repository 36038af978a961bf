use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown case style '{0}' (expected camelCase, snake_case, PascalCase, kebab-case or SCREAMING_SNAKE_CASE)")]
    UnknownCaseStyle(String),
    #[error("unknown severity '{0}' (expected error or warning)")]
    UnknownSeverity(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
