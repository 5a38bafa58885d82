//! User domain record and related types.

use serde::{Deserialize, Serialize};

/// User domain record
///
/// Equality compares all three fields by value. The username and password
/// are fixed at creation; only the email can change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    username: String,
    /// Stored as supplied (no hashing)
    #[serde(skip_serializing)]
    password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    email: Option<String>,
}

impl User {
    /// Create a user without an email address
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            email: None,
        }
    }

    /// Create a user with an email address
    pub fn with_email(
        username: impl Into<String>,
        password: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            email: Some(email.into()),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Check if the user has an email address
    pub fn has_email(&self) -> bool {
        self.email.is_some()
    }

    /// Exact, case-sensitive password comparison
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password == candidate
    }

    /// Replace the email address (`None` clears it).
    ///
    /// Records handed out by a repository are copies, so changing one
    /// never touches the repository's indices.
    pub fn set_email(&mut self, email: Option<String>) {
        self.email = email;
    }
}

/// User response (safe to print, no password)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    /// Unique username
    pub username: String,
    /// Email address, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            username: user.username,
            email: user.email,
        }
    }
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            email: user.email.clone(),
        }
    }
}
