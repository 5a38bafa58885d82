//! User service configuration.

use std::env;
use std::path::PathBuf;

use common::{ServiceConfig, DEFAULT_LOG_LEVEL};

/// Service name used in logs
pub const SERVICE_NAME: &str = "user-service";

/// User service configuration.
#[derive(Debug, Clone)]
pub struct UserServiceConfig {
    /// Shared service settings
    pub service: ServiceConfig,
    /// Roster file used to build the directory
    pub seed_file: Option<PathBuf>,
}

impl UserServiceConfig {
    /// Load configuration from `.env` and environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_level = lookup("USER_SERVICE_LOG_LEVEL")
            .or_else(|| lookup("RUST_LOG"))
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        Self {
            service: ServiceConfig {
                service_name: SERVICE_NAME.to_string(),
                log_level,
            },
            seed_file: lookup("USER_SERVICE_SEED_FILE")
                .filter(|path| !path.is_empty())
                .map(PathBuf::from),
        }
    }
}

impl Default for UserServiceConfig {
    fn default() -> Self {
        Self {
            service: ServiceConfig::named(SERVICE_NAME),
            seed_file: None,
        }
    }
}
