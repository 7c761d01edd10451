//! MySQL implementation of the UserRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};

use bt_core::domain::entities::user::{NewUser, User};
use bt_core::errors::DomainError;
use bt_core::repositories::UserRepository;

use super::error_mapping::{database_error, map_insert_error};

const SELECT_USER_COLUMNS: &str =
    "SELECT id, username, password, first_name, last_name, email, mobile, created_at FROM users";

/// MySQL implementation of UserRepository
///
/// Username and email uniqueness are enforced by the table's unique indexes;
/// violations are translated into typed duplicate errors.
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to User entity
    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, DomainError> {
        let get_err = |column: &str, e: sqlx::Error| DomainError::Database {
            message: format!("Failed to get {}: {}", column, e),
        };

        Ok(User {
            id: row.try_get::<u64, _>("id").map_err(|e| get_err("id", e))?,
            username: row.try_get("username").map_err(|e| get_err("username", e))?,
            password_hash: row.try_get("password").map_err(|e| get_err("password", e))?,
            first_name: row.try_get("first_name").map_err(|e| get_err("first_name", e))?,
            last_name: row.try_get("last_name").map_err(|e| get_err("last_name", e))?,
            email: row
                .try_get::<Option<String>, _>("email")
                .map_err(|e| get_err("email", e))?
                .unwrap_or_default(),
            mobile: row
                .try_get::<Option<String>, _>("mobile")
                .map_err(|e| get_err("mobile", e))?
                .unwrap_or_default(),
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| get_err("created_at", e))?,
        })
    }

    async fn find_by_id(&self, id: u64) -> Result<Option<User>, DomainError> {
        let query = format!("{} WHERE id = ? LIMIT 1", SELECT_USER_COLUMNS);

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| database_error("Failed to find user by id", e))?;

        row.as_ref().map(Self::row_to_user).transpose()
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let query = format!("{} WHERE username = ? LIMIT 1", SELECT_USER_COLUMNS);

        let row = sqlx::query(&query)
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| database_error("Failed to find user by username", e))?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn create(&self, user: NewUser) -> Result<User, DomainError> {
        let query = r#"
            INSERT INTO users (username, password, first_name, last_name, email, mobile)
            VALUES (?, ?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(&user.username)
            .bind(&user.password_hash)
            .bind(&user.first_name)
            .bind(&user.last_name)
            .bind(&user.email)
            .bind(&user.mobile)
            .execute(&self.pool)
            .await
            .map_err(|e| map_insert_error("Failed to create user", e))?;

        let id = result.last_insert_id();
        match self.find_by_id(id).await? {
            Some(created) => Ok(created),
            // Row vanished between insert and read (e.g. concurrent delete); report what was written
            None => Ok(user.into_user(id, Utc::now())),
        }
    }
}
