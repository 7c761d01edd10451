//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - Token signing and password hashing
//! - `database` - MySQL connection and pool settings
//! - `environment` - Environment detection
//! - `server` - HTTP bind address, port fallback and CORS
//!
//! Everything is read once at process start through [`AppConfig::from_env`]
//! and then passed around by value or behind an `Arc`.

pub mod auth;
pub mod database;
pub mod environment;
pub mod server;

use thiserror::Error;

// Re-export commonly used types
pub use auth::{
    AuthConfig, JwtConfig, DEFAULT_PASSWORD_HASH_COST, MIN_PASSWORD_HASH_COST,
    TOKEN_LIFETIME_SECONDS,
};
pub use database::DatabaseConfig;
pub use environment::Environment;
pub use server::ServerConfig;

/// Errors raised while loading configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing JWT_SECRET: refusing to start without a token signing secret")]
    MissingSecret,

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
}

impl AppConfig {
    /// Load configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// `from_env` is a thin wrapper over this; tests feed a map instead of
    /// mutating the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = Environment::from_lookup(&lookup);

        Ok(Self {
            environment,
            server: ServerConfig::from_lookup(&lookup, environment)?,
            database: DatabaseConfig::from_lookup(&lookup)?,
            auth: AuthConfig::from_lookup(&lookup, environment)?,
        })
    }
}

/// Parse an optional variable, falling back to `default` when it is unset
pub(crate) fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => {
            raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: key.to_string(),
                value: raw,
            })
        }
        _ => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_missing_secret_is_fatal() {
        let result = AppConfig::from_lookup(lookup_from(&[("PORT", "5000")]));
        assert_eq!(result.unwrap_err(), ConfigError::MissingSecret);
    }

    #[test]
    fn test_blank_secret_is_fatal() {
        let result = AppConfig::from_lookup(lookup_from(&[("JWT_SECRET", "   ")]));
        assert_eq!(result.unwrap_err(), ConfigError::MissingSecret);
    }

    #[test]
    fn test_defaults_with_secret() {
        let config = AppConfig::from_lookup(lookup_from(&[("JWT_SECRET", "s3cret")])).unwrap();
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.database.database, "booktracker");
        assert_eq!(config.auth.jwt.secret, "s3cret");
        assert_eq!(config.auth.jwt.token_lifetime_seconds, TOKEN_LIFETIME_SECONDS);
    }

    #[test]
    fn test_production_rejects_lowered_hash_cost() {
        let result = AppConfig::from_lookup(lookup_from(&[
            ("JWT_SECRET", "s3cret"),
            ("ENVIRONMENT", "production"),
            ("PASSWORD_HASH_COST", "4"),
        ]));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { ref key, .. }) if key == "PASSWORD_HASH_COST"
        ));
    }

    #[test]
    fn test_invalid_port_is_reported() {
        let result = AppConfig::from_lookup(lookup_from(&[
            ("JWT_SECRET", "s3cret"),
            ("PORT", "not-a-port"),
        ]));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { ref key, .. }) if key == "PORT"
        ));
    }
}
