//! Authenticated identity attached to a request after the auth gate succeeds.

use serde::{Deserialize, Serialize};

/// The subject a verified token resolves to
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identity {
    pub user_id: u64,
    pub username: String,
}

impl Identity {
    pub fn new(user_id: u64, username: impl Into<String>) -> Self {
        Self {
            user_id,
            username: username.into(),
        }
    }
}
