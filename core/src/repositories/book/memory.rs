//! In-memory implementation of BookRepository for tests and local runs

use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::book::{Book, BookQuery, BookUpdate, NewBook};
use crate::errors::DomainError;

use super::trait_::BookRepository;

#[derive(Default)]
struct Store {
    next_id: u64,
    books: BTreeMap<u64, Book>,
}

/// In-memory book repository
#[derive(Clone, Default)]
pub struct InMemoryBookRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryBookRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn list_for_owner(
        &self,
        owner_id: u64,
        query: &BookQuery,
    ) -> Result<Vec<Book>, DomainError> {
        let store = self.store.read().await;
        // Ids grow with insertion time, so reverse id order breaks created_at ties
        Ok(store
            .books
            .values()
            .rev()
            .filter(|b| b.user_id == owner_id && query.matches(b))
            .cloned()
            .collect())
    }

    async fn find_for_owner(&self, id: u64, owner_id: u64) -> Result<Option<Book>, DomainError> {
        let store = self.store.read().await;
        Ok(store
            .books
            .get(&id)
            .filter(|b| b.user_id == owner_id)
            .cloned())
    }

    async fn create(&self, owner_id: u64, book: NewBook) -> Result<Book, DomainError> {
        let mut store = self.store.write().await;
        store.next_id += 1;
        let created = book.into_book(store.next_id, owner_id, Utc::now());
        store.books.insert(created.id, created.clone());
        Ok(created)
    }

    async fn update_for_owner(
        &self,
        id: u64,
        owner_id: u64,
        update: BookUpdate,
    ) -> Result<Option<Book>, DomainError> {
        let mut store = self.store.write().await;
        match store.books.get_mut(&id).filter(|b| b.user_id == owner_id) {
            Some(book) => {
                update.apply_to(book);
                Ok(Some(book.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete_for_owner(&self, id: u64, owner_id: u64) -> Result<bool, DomainError> {
        let mut store = self.store.write().await;
        let owned = store.books.get(&id).is_some_and(|b| b.user_id == owner_id);
        if owned {
            store.books.remove(&id);
        }
        Ok(owned)
    }
}
