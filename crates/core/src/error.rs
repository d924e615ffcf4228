//! Domain error model.

use thiserror::Error;

/// Result type used across the catalog domain.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is raised synchronously at the point of violation. Soft
/// failures (a rejected price update) are not errors and never appear here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. zero quantity, mistyped factory field).
    #[error("validation failed: {0}")]
    Validation(String),

    /// The value does not satisfy the product capability at all.
    #[error("type error: {0}")]
    NotAProduct(String),

    /// Both sides are products, but of different variants.
    #[error("type error: {0}")]
    KindMismatch(String),

    /// A required key was absent from factory input.
    #[error("missing field: {0}")]
    MissingField(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_a_product(msg: impl Into<String>) -> Self {
        Self::NotAProduct(msg.into())
    }

    pub fn kind_mismatch(msg: impl Into<String>) -> Self {
        Self::KindMismatch(msg.into())
    }

    pub fn missing_field(key: impl Into<String>) -> Self {
        Self::MissingField(key.into())
    }

    /// True for the two type-mismatch kinds (combination / insertion).
    pub fn is_type_error(&self) -> bool {
        matches!(self, Self::NotAProduct(_) | Self::KindMismatch(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_errors_are_classified() {
        assert!(DomainError::not_a_product("x").is_type_error());
        assert!(DomainError::kind_mismatch("x").is_type_error());
        assert!(!DomainError::validation("x").is_type_error());
        assert!(!DomainError::missing_field("price").is_type_error());
    }

    #[test]
    fn display_carries_message() {
        let err = DomainError::missing_field("quantity");
        assert_eq!(err.to_string(), "missing field: quantity");

        let err = DomainError::validation("bad");
        assert_eq!(err.to_string(), "validation failed: bad");
    }
}
