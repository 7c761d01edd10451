//! Ownership-scoped book operations

use std::sync::Arc;

use crate::domain::entities::book::{Book, BookQuery, BookUpdate, NewBook, StatusSummary};
use crate::domain::value_objects::Identity;
use crate::errors::{DomainError, DomainResult, ValidationError};
use crate::repositories::BookRepository;

/// Column width of `title` and `author`
pub const MAX_FIELD_LENGTH: usize = 255;

const RESOURCE: &str = "Book";

/// Title and author must both be present and fit their columns
fn validate_title_author(title: &str, author: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() || author.trim().is_empty() {
        return Err(ValidationError::TitleAndAuthorRequired);
    }
    for (field, value) in [("title", title), ("author", author)] {
        if value.chars().count() > MAX_FIELD_LENGTH {
            return Err(ValidationError::InvalidLength {
                field: field.to_string(),
                max: MAX_FIELD_LENGTH,
            });
        }
    }
    Ok(())
}

/// Service for a user's reading list
///
/// A book that exists but belongs to another user is reported exactly like a
/// missing one (`NotFound`), so callers cannot probe for other users' ids.
pub struct BookService<B: BookRepository> {
    book_repository: Arc<B>,
}

impl<B: BookRepository> BookService<B> {
    pub fn new(book_repository: Arc<B>) -> Self {
        Self { book_repository }
    }

    /// List the caller's books, newest first, optionally filtered
    pub async fn list(&self, identity: &Identity, query: BookQuery) -> DomainResult<Vec<Book>> {
        self.book_repository
            .list_for_owner(identity.user_id, &query)
            .await
    }

    /// Count the caller's books per status
    pub async fn summary(&self, identity: &Identity) -> DomainResult<StatusSummary> {
        let books = self
            .book_repository
            .list_for_owner(identity.user_id, &BookQuery::default())
            .await?;
        Ok(StatusSummary::from_books(&books))
    }

    /// Fetch one of the caller's books
    pub async fn get(&self, identity: &Identity, id: u64) -> DomainResult<Book> {
        self.book_repository
            .find_for_owner(id, identity.user_id)
            .await?
            .ok_or_else(|| DomainError::not_found(RESOURCE))
    }

    /// Add a book to the caller's list
    pub async fn create(&self, identity: &Identity, book: NewBook) -> DomainResult<Book> {
        validate_title_author(&book.title, &book.author)?;

        let created = self.book_repository.create(identity.user_id, book).await?;
        tracing::debug!(user_id = identity.user_id, book_id = created.id, "Book created");
        Ok(created)
    }

    /// Replace the mutable fields of one of the caller's books
    pub async fn update(
        &self,
        identity: &Identity,
        id: u64,
        update: BookUpdate,
    ) -> DomainResult<Book> {
        validate_title_author(&update.title, &update.author)?;

        self.book_repository
            .update_for_owner(id, identity.user_id, update)
            .await?
            .ok_or_else(|| DomainError::not_found(RESOURCE))
    }

    /// Remove one of the caller's books
    pub async fn delete(&self, identity: &Identity, id: u64) -> DomainResult<()> {
        if self
            .book_repository
            .delete_for_owner(id, identity.user_id)
            .await?
        {
            tracing::debug!(user_id = identity.user_id, book_id = id, "Book deleted");
            Ok(())
        } else {
            Err(DomainError::not_found(RESOURCE))
        }
    }
}
