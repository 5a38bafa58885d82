//! Domain-level constants.
//!
//! These constants define validation requirements for user records.

// =============================================================================
// Validation
// =============================================================================

/// Minimum username length requirement
pub const MIN_USERNAME_LENGTH: usize = 1;

/// Check if a username satisfies the directory's key rules
pub fn is_valid_username(username: &str) -> bool {
    username.len() >= MIN_USERNAME_LENGTH
}
