//! Book repository trait.
//!
//! Every operation takes the owner's user id and must only see or touch rows
//! owned by that user. A row that exists but belongs to someone else is
//! treated exactly like a row that does not exist.

use async_trait::async_trait;

use crate::domain::entities::book::{Book, BookQuery, BookUpdate, NewBook};
use crate::errors::DomainError;

/// Repository trait for ownership-scoped book persistence
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// List the owner's books matching `query`, newest first
    async fn list_for_owner(&self, owner_id: u64, query: &BookQuery)
        -> Result<Vec<Book>, DomainError>;

    /// Fetch one book if it exists and belongs to the owner
    async fn find_for_owner(&self, id: u64, owner_id: u64) -> Result<Option<Book>, DomainError>;

    /// Insert a book owned by `owner_id`
    async fn create(&self, owner_id: u64, book: NewBook) -> Result<Book, DomainError>;

    /// Replace the mutable fields of an owned book
    ///
    /// # Returns
    /// * `Ok(Some(Book))` - The updated book
    /// * `Ok(None)` - No row matched both id and owner
    async fn update_for_owner(
        &self,
        id: u64,
        owner_id: u64,
        update: BookUpdate,
    ) -> Result<Option<Book>, DomainError>;

    /// Delete an owned book
    ///
    /// # Returns
    /// * `Ok(true)` - A row was deleted
    /// * `Ok(false)` - No row matched both id and owner
    async fn delete_for_owner(&self, id: u64, owner_id: u64) -> Result<bool, DomainError>;
}
