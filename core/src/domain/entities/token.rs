//! Token claims for JWT-based authentication.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

pub use bt_shared::config::TOKEN_LIFETIME_SECONDS;

/// Claims structure for JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID, decimal string)
    pub sub: String,

    /// Username at the time of issue
    pub username: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,
}

impl Claims {
    /// Creates claims for a user, expiring `lifetime_seconds` from now
    pub fn new(user_id: u64, username: impl Into<String>, lifetime_seconds: i64) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::seconds(lifetime_seconds);

        Self {
            sub: user_id.to_string(),
            username: username.into(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
        }
    }

    /// Parse the subject back into a user id
    pub fn user_id(&self) -> Option<u64> {
        self.sub.parse().ok()
    }

    /// Whether the token is expired at `now` (expiry instant itself counts as expired)
    pub fn is_expired_at(&self, now: i64) -> bool {
        now >= self.exp
    }
}
