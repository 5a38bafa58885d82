//! Shared configuration structures.

use serde::{Deserialize, Serialize};

/// Default log filter when neither `RUST_LOG` nor a service override is set
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Log filter used by `--verbose`
pub const VERBOSE_LOG_LEVEL: &str = "debug";

/// Base service configuration shared by all binaries.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Service name for logging and tracing
    pub service_name: String,
    /// Log level (an `EnvFilter` directive)
    pub log_level: String,
}

impl ServiceConfig {
    /// Create a config for the named service with the default log level
    pub fn named(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            ..Self::default()
        }
    }

    /// Log filter to install, honouring the verbose flag
    pub fn log_filter(&self, verbose: bool) -> &str {
        if verbose {
            VERBOSE_LOG_LEVEL
        } else {
            &self.log_level
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            service_name: "service".to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_keeps_default_level() {
        let config = ServiceConfig::named("user-service");
        assert_eq!(config.service_name, "user-service");
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_verbose_overrides_level() {
        let config = ServiceConfig {
            service_name: "user-service".to_string(),
            log_level: "warn".to_string(),
        };
        assert_eq!(config.log_filter(false), "warn");
        assert_eq!(config.log_filter(true), VERBOSE_LOG_LEVEL);
    }
}
