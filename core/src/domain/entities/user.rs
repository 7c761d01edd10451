//! User entity representing a registered account in the BookTracker system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User entity as stored by the identity store
///
/// `password_hash` is a self-describing bcrypt digest. It is skipped on
/// serialization so a `User` can never leak it into a response body or log line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned identifier
    pub id: u64,

    /// Unique login name
    pub username: String,

    /// bcrypt digest of the password
    #[serde(skip_serializing, default)]
    pub password_hash: String,

    pub first_name: Option<String>,

    pub last_name: Option<String>,

    /// Unique email address
    pub email: String,

    /// Ten digit mobile number
    pub mobile: String,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,
}

/// Fields required to insert a new user
///
/// The password is already hashed by the time this value exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub mobile: String,
}

impl NewUser {
    /// Materialize the stored record once the store has assigned an id
    pub fn into_user(self, id: u64, created_at: DateTime<Utc>) -> User {
        User {
            id,
            username: self.username,
            password_hash: self.password_hash,
            first_name: Some(self.first_name),
            last_name: Some(self.last_name),
            email: self.email,
            mobile: self.mobile,
            created_at,
        }
    }
}
