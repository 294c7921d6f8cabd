//! Guard clauses: precondition checks that fail fast with a [`DomainError`].
//!
//! Each check takes the value under validation and a label used in the failure
//! message, and returns `Ok(())` on success. Message texts are part of the
//! observable contract and are asserted verbatim by callers' tests.

use uuid::Uuid;

use crate::error::{DomainError, DomainResult};

/// Fails when `id` is the nil (all-zero) sentinel.
pub fn against_empty_guid(id: &Uuid, param: &str) -> DomainResult<()> {
    if id.is_nil() {
        return Err(DomainError::new(format!(
            "{param} não pode ser Guid. Empty."
        )));
    }
    Ok(())
}

/// Fails when `value` is absent.
pub fn against_none<T>(value: Option<&T>, param: &str) -> DomainResult<()> {
    if value.is_none() {
        return Err(DomainError::new(format!("{param} não pode ser nulo.")));
    }
    Ok(())
}

/// Fails when `value` is empty or all-whitespace.
pub fn against_blank(value: &str, param: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::new(format!(
            "{param} não pode ser nulo ou vazio."
        )));
    }
    Ok(())
}

/// Generic business-rule assertion: fails with `message` when `condition` holds.
pub fn against(condition: bool, message: &str) -> DomainResult<()> {
    if condition {
        return Err(DomainError::new(message));
    }
    Ok(())
}
