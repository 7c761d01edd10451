//! In-memory implementation of UserRepository for tests and local runs

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::user::{NewUser, User};
use crate::errors::{AuthError, DomainError};

use super::trait_::UserRepository;

#[derive(Default)]
struct Store {
    next_id: u64,
    users: HashMap<u64, User>,
}

/// In-memory user repository
///
/// Username and email comparisons ignore ASCII case, the way the MySQL
/// `utf8mb4_unicode_ci` collation compares them.
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.store.read().await.users.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let store = self.store.read().await;
        Ok(store
            .users
            .values()
            .find(|u| u.username.eq_ignore_ascii_case(username))
            .cloned())
    }

    async fn create(&self, user: NewUser) -> Result<User, DomainError> {
        let mut store = self.store.write().await;

        // Check and insert under one write lock so concurrent duplicates cannot both win
        if store
            .users
            .values()
            .any(|u| u.username.eq_ignore_ascii_case(&user.username))
        {
            return Err(AuthError::DuplicateUsername.into());
        }
        if store
            .users
            .values()
            .any(|u| u.email.eq_ignore_ascii_case(&user.email))
        {
            return Err(AuthError::DuplicateEmail.into());
        }

        store.next_id += 1;
        let created = user.into_user(store.next_id, Utc::now());
        store.users.insert(created.id, created.clone());
        Ok(created)
    }
}
