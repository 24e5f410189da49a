use thiserror::Error;

/// Errors that can occur when reading or writing template sections.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("Template section '{path}' must be a map")]
    InvalidSection { path: String },
    #[error("Serialization error: {0}")]
    Serialization(String),
}
