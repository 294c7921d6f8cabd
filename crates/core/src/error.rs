//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error: a validated precondition or business rule was violated.
///
/// There is a single error kind on purpose. Structural violations (nil id, blank
/// field) and business-rule violations (negative discount) are distinguished only
/// by message text, and callers/tests assert on that text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct DomainError {
    message: String,
}

impl DomainError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Fail with `message` when `has_error` holds.
    pub fn when(has_error: bool, message: &str) -> DomainResult<()> {
        if has_error {
            Err(Self::new(message))
        } else {
            Ok(())
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
