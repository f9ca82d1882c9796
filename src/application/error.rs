// src/application/error.rs
use crate::domain::errors::DomainError;
use std::fmt::Display;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// Failures raised by the admin use cases. Form problems carry the offending
/// field as a prefix, e.g. `image: this field is required`.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("infrastructure failure: {0}")]
    Infrastructure(String),
}

impl ApplicationError {
    /// Validation failure tied to one form field.
    pub fn invalid_field(field: &str, msg: impl Display) -> Self {
        Self::Validation(format!("{field}: {msg}"))
    }

    pub fn category_not_found() -> Self {
        Self::NotFound("category not found".into())
    }

    pub fn unknown_action(name: &str, known: &[&str]) -> Self {
        Self::NotFound(format!(
            "unknown action '{name}', expected one of: {}",
            known.join(", ")
        ))
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    pub fn infrastructure(msg: impl Into<String>) -> Self {
        Self::Infrastructure(msg.into())
    }

    pub fn io(context: &str, err: std::io::Error) -> Self {
        Self::Infrastructure(format!("{context}: {err}"))
    }
}
