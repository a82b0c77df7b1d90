//! Domain-level errors.
//!
//! Raised when raw input cannot become a domain value. Independent of
//! HTTP and storage.

use thiserror::Error;

/// Domain-specific errors for rejected input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Validation failed for a field or input
    #[error("Validation error: {0}")]
    Validation(String),
}

impl DomainError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        DomainError::Validation(msg.into())
    }
}
