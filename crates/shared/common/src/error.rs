//! Unified error handling for the directory tooling.
//!
//! The repository itself reports rejected mutations as `false`; this type
//! covers everything around it: invalid rosters, unreadable seed files and
//! rejected credentials at the command line.

use domain::DomainError;
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Authentication
    #[error("Invalid credentials")]
    InvalidCredentials,

    // Roster and configuration
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Invalid seed file: {0}")]
    Seed(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    // Internal
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Get stable error code
    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidCredentials => "INVALID_CREDENTIALS",
            AppError::Domain(DomainError::DuplicateUsername(_)) => "DUPLICATE_USERNAME",
            AppError::Domain(DomainError::DuplicateEmail(_)) => "DUPLICATE_EMAIL",
            AppError::Domain(DomainError::Validation(_)) => "VALIDATION_ERROR",
            AppError::Seed(_) => "SEED_ERROR",
            AppError::Io(_) => "IO_ERROR",
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Process exit code for the CLI
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::InvalidCredentials => 1,
            AppError::Domain(_) | AppError::Seed(_) | AppError::Config(_) => 2,
            AppError::Io(_) | AppError::Internal(_) => 3,
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn config(msg: impl Into<String>) -> Self {
        AppError::Config(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
