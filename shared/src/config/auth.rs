//! Authentication configuration

use std::fmt;

use super::{parse_or, ConfigError, Environment};

/// Token lifetime in seconds (1 hour)
pub const TOKEN_LIFETIME_SECONDS: i64 = 3600;

/// bcrypt work factor used for stored password digests
pub const DEFAULT_PASSWORD_HASH_COST: u32 = 10;

/// Lowest work factor bcrypt accepts
pub const MIN_PASSWORD_HASH_COST: u32 = 4;

/// JWT signing configuration
#[derive(Clone)]
pub struct JwtConfig {
    /// Shared secret for HS256 signing
    pub secret: String,

    /// Token lifetime in seconds
    pub token_lifetime_seconds: i64,
}

impl JwtConfig {
    /// Create a JWT configuration with the fixed one hour lifetime
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            token_lifetime_seconds: TOKEN_LIFETIME_SECONDS,
        }
    }
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("token_lifetime_seconds", &self.token_lifetime_seconds)
            .finish()
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,

    /// bcrypt cost for new password digests
    pub password_hash_cost: u32,
}

impl AuthConfig {
    /// Create from a secret with default hashing cost
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            jwt: JwtConfig::new(secret),
            password_hash_cost: DEFAULT_PASSWORD_HASH_COST,
        }
    }

    /// Create from environment variables
    ///
    /// `JWT_SECRET` is mandatory. An absent or blank secret is an error, never
    /// replaced by a built-in default.
    ///
    /// `PASSWORD_HASH_COST` may only lower the work factor, and only outside
    /// production.
    pub fn from_lookup<F>(lookup: &F, environment: Environment) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = lookup("JWT_SECRET")
            .filter(|s| !s.trim().is_empty())
            .ok_or(ConfigError::MissingSecret)?;

        let password_hash_cost =
            parse_or(lookup, "PASSWORD_HASH_COST", DEFAULT_PASSWORD_HASH_COST)?;
        let allowed = if environment.is_production() {
            DEFAULT_PASSWORD_HASH_COST..=DEFAULT_PASSWORD_HASH_COST
        } else {
            MIN_PASSWORD_HASH_COST..=DEFAULT_PASSWORD_HASH_COST
        };
        if !allowed.contains(&password_hash_cost) {
            return Err(ConfigError::InvalidValue {
                key: "PASSWORD_HASH_COST".to_string(),
                value: password_hash_cost.to_string(),
            });
        }

        Ok(Self {
            jwt: JwtConfig::new(secret),
            password_hash_cost,
        })
    }
}
