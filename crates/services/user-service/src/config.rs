//! User service configuration.

use std::env;

use common::ServiceConfig;

/// Default number of users created by the seeding commands
pub const DEFAULT_SEED_USERS: usize = 100;

/// Default number of concurrent seeding tasks
pub const DEFAULT_WORKERS: usize = 8;

/// Default log filter when neither override is set
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// User service configuration.
#[derive(Debug, Clone)]
pub struct UserServiceConfig {
    /// Service name and log level
    pub service: ServiceConfig,
    /// Users created by `seed`/`query` when not given on the command line
    pub seed_users: usize,
    /// Concurrent tasks used for seeding
    pub workers: usize,
}

impl UserServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let log_level = env::var("USER_SERVICE_LOG_LEVEL")
            .or_else(|_| env::var("RUST_LOG"))
            .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());

        Self {
            service: ServiceConfig::new("user-service", log_level),
            seed_users: parse_var("USER_SERVICE_SEED_USERS").unwrap_or(DEFAULT_SEED_USERS),
            workers: parse_var("USER_SERVICE_WORKERS")
                .filter(|w| *w > 0)
                .unwrap_or(DEFAULT_WORKERS),
        }
    }
}

impl Default for UserServiceConfig {
    fn default() -> Self {
        Self {
            service: ServiceConfig::new("user-service", DEFAULT_LOG_LEVEL),
            seed_users: DEFAULT_SEED_USERS,
            workers: DEFAULT_WORKERS,
        }
    }
}

fn parse_var(key: &str) -> Option<usize> {
    env::var(key).ok().and_then(|v| v.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = UserServiceConfig::default();

        assert_eq!(config.seed_users, 100);
        assert_eq!(config.workers, 8);
        assert_eq!(config.service.service_name, "user-service");
        assert_eq!(config.service.log_level, "info");
    }
}
