//! Configuration for the authentication service

use bt_shared::config::{AuthConfig, DEFAULT_PASSWORD_HASH_COST};

/// Configuration for the authentication service
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// bcrypt cost for new password digests
    pub password_hash_cost: u32,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            password_hash_cost: DEFAULT_PASSWORD_HASH_COST,
        }
    }
}

impl From<&AuthConfig> for AuthServiceConfig {
    fn from(config: &AuthConfig) -> Self {
        Self {
            password_hash_cost: config.password_hash_cost,
        }
    }
}
