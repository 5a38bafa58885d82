//! Domain-level errors.
//!
//! These errors represent violations of the directory's invariants that
//! can only be reported as failures, such as building a store from a
//! roster that already contains duplicates. Ordinary rejected mutations
//! are reported as `false` by the repository instead.

use thiserror::Error;

/// Domain-specific errors for business rule violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Two records share a username
    #[error("Two users can not have the same username: {0}")]
    DuplicateUsername(String),

    /// Two records share an email address
    #[error("Two users can not have the same email: {0}")]
    DuplicateEmail(String),

    /// Validation failed for a field or input
    #[error("Validation error: {0}")]
    Validation(String),
}

impl DomainError {
    /// Create a duplicate username error
    pub fn duplicate_username(username: impl Into<String>) -> Self {
        DomainError::DuplicateUsername(username.into())
    }

    /// Create a duplicate email error
    pub fn duplicate_email(email: impl Into<String>) -> Self {
        DomainError::DuplicateEmail(email.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        DomainError::Validation(msg.into())
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_username_message_names_the_key() {
        let err = DomainError::duplicate_username("ali");
        assert_eq!(
            err.to_string(),
            "Two users can not have the same username: ali"
        );
    }

    #[test]
    fn test_duplicate_email_message_names_the_key() {
        let err = DomainError::duplicate_email("ali@mail.com");
        assert!(err.to_string().ends_with("ali@mail.com"));
    }
}
