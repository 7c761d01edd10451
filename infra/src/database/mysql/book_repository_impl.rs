//! MySQL implementation of the BookRepository trait.
//!
//! Every statement carries `user_id = ?` so rows owned by other users are
//! invisible to reads and untouched by writes.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySql, MySqlPool, QueryBuilder, Row};

use bt_core::domain::entities::book::{Book, BookQuery, BookStatus, BookUpdate, NewBook};
use bt_core::errors::DomainError;
use bt_core::repositories::BookRepository;

use super::error_mapping::database_error;

const SELECT_BOOK_COLUMNS: &str =
    "SELECT id, user_id, title, author, status, review, favorite, created_at FROM books";

/// Escape `LIKE` wildcards and wrap the needle for a substring match
pub fn like_pattern(needle: &str) -> String {
    let mut escaped = String::with_capacity(needle.len() + 2);
    escaped.push('%');
    for c in needle.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

/// MySQL implementation of BookRepository
pub struct MySqlBookRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlBookRepository {
    /// Create a new MySQL book repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Book entity
    fn row_to_book(row: &sqlx::mysql::MySqlRow) -> Result<Book, DomainError> {
        let get_err = |column: &str, e: sqlx::Error| DomainError::Database {
            message: format!("Failed to get {}: {}", column, e),
        };

        let status = match row
            .try_get::<Option<String>, _>("status")
            .map_err(|e| get_err("status", e))?
        {
            Some(raw) => raw.parse::<BookStatus>().map_err(|message| DomainError::Database { message })?,
            None => BookStatus::default(),
        };

        Ok(Book {
            id: row.try_get::<u64, _>("id").map_err(|e| get_err("id", e))?,
            user_id: row.try_get::<u64, _>("user_id").map_err(|e| get_err("user_id", e))?,
            title: row.try_get("title").map_err(|e| get_err("title", e))?,
            author: row.try_get("author").map_err(|e| get_err("author", e))?,
            status,
            review: row.try_get("review").map_err(|e| get_err("review", e))?,
            favorite: row
                .try_get::<Option<bool>, _>("favorite")
                .map_err(|e| get_err("favorite", e))?
                .unwrap_or(false),
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| get_err("created_at", e))?,
        })
    }
}

#[async_trait]
impl BookRepository for MySqlBookRepository {
    async fn list_for_owner(
        &self,
        owner_id: u64,
        query: &BookQuery,
    ) -> Result<Vec<Book>, DomainError> {
        let mut builder: QueryBuilder<MySql> = QueryBuilder::new(SELECT_BOOK_COLUMNS);
        builder.push(" WHERE user_id = ").push_bind(owner_id);

        if let Some(status) = query.status {
            builder.push(" AND status = ").push_bind(status.as_str());
        }
        if let Some(needle) = query.needle() {
            let pattern = like_pattern(&needle);
            builder
                .push(" AND (LOWER(title) LIKE ")
                .push_bind(pattern.clone())
                .push(" OR LOWER(author) LIKE ")
                .push_bind(pattern)
                .push(")");
        }
        builder.push(" ORDER BY created_at DESC, id DESC");

        let rows = builder
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| database_error("Failed to list books", e))?;

        rows.iter().map(Self::row_to_book).collect()
    }

    async fn find_for_owner(&self, id: u64, owner_id: u64) -> Result<Option<Book>, DomainError> {
        let query = format!("{} WHERE id = ? AND user_id = ? LIMIT 1", SELECT_BOOK_COLUMNS);

        let row = sqlx::query(&query)
            .bind(id)
            .bind(owner_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| database_error("Failed to find book", e))?;

        row.as_ref().map(Self::row_to_book).transpose()
    }

    async fn create(&self, owner_id: u64, book: NewBook) -> Result<Book, DomainError> {
        let query = r#"
            INSERT INTO books (user_id, title, author, status, review, favorite)
            VALUES (?, ?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(owner_id)
            .bind(&book.title)
            .bind(&book.author)
            .bind(book.status.as_str())
            .bind(&book.review)
            .bind(book.favorite)
            .execute(&self.pool)
            .await
            .map_err(|e| database_error("Failed to create book", e))?;

        let id = result.last_insert_id();
        match self.find_for_owner(id, owner_id).await? {
            Some(created) => Ok(created),
            None => Ok(book.into_book(id, owner_id, Utc::now())),
        }
    }

    async fn update_for_owner(
        &self,
        id: u64,
        owner_id: u64,
        update: BookUpdate,
    ) -> Result<Option<Book>, DomainError> {
        let query = r#"
            UPDATE books
            SET title = ?, author = ?, status = ?, review = ?, favorite = ?
            WHERE id = ? AND user_id = ?
        "#;

        sqlx::query(query)
            .bind(&update.title)
            .bind(&update.author)
            .bind(update.status.as_str())
            .bind(&update.review)
            .bind(update.favorite)
            .bind(id)
            .bind(owner_id)
            .execute(&self.pool)
            .await
            .map_err(|e| database_error("Failed to update book", e))?;

        // An unchanged row reports zero affected rows, so re-read instead
        self.find_for_owner(id, owner_id).await
    }

    async fn delete_for_owner(&self, id: u64, owner_id: u64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM books WHERE id = ? AND user_id = ?")
            .bind(id)
            .bind(owner_id)
            .execute(&self.pool)
            .await
            .map_err(|e| database_error("Failed to delete book", e))?;

        Ok(result.rows_affected() > 0)
    }
}
