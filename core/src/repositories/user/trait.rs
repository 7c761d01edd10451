//! User repository trait defining the identity store contract.
//!
//! The store owns username and email uniqueness. Implementations must report
//! a violated constraint as `AuthError::DuplicateUsername` or
//! `AuthError::DuplicateEmail` (wrapped in `DomainError::Auth`), never as a raw
//! storage error, so that a racing duplicate registration surfaces as a 409.

use async_trait::async_trait;

use crate::domain::entities::user::{NewUser, User};
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by username
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found, including the stored password digest
    /// * `Ok(None)` - No user with that username
    /// * `Err(DomainError)` - Storage failure
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;

    /// Insert a new user
    ///
    /// # Returns
    /// * `Ok(User)` - The stored user with its assigned id
    /// * `Err(DomainError::Auth(DuplicateUsername | DuplicateEmail | DuplicateAccount))` -
    ///   a uniqueness constraint was violated
    /// * `Err(DomainError)` - Any other storage failure
    async fn create(&self, user: NewUser) -> Result<User, DomainError>;
}
