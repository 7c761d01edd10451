//! Configuration for the token service

use bt_shared::config::{JwtConfig, TOKEN_LIFETIME_SECONDS};
use jsonwebtoken::Algorithm;

/// Configuration for the token service
#[derive(Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// JWT signing algorithm
    pub algorithm: Algorithm,
    /// Token lifetime in seconds
    pub token_lifetime_seconds: i64,
}

impl TokenServiceConfig {
    /// HS256 configuration with the standard lifetime
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            algorithm: Algorithm::HS256,
            token_lifetime_seconds: TOKEN_LIFETIME_SECONDS,
        }
    }
}

impl From<&JwtConfig> for TokenServiceConfig {
    fn from(jwt: &JwtConfig) -> Self {
        Self {
            jwt_secret: jwt.secret.clone(),
            algorithm: Algorithm::HS256,
            token_lifetime_seconds: jwt.token_lifetime_seconds,
        }
    }
}

impl std::fmt::Debug for TokenServiceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenServiceConfig")
            .field("jwt_secret", &"<redacted>")
            .field("algorithm", &self.algorithm)
            .field("token_lifetime_seconds", &self.token_lifetime_seconds)
            .finish()
    }
}
