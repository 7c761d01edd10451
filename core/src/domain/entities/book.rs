//! Book entity and the query/update shapes used by the ownership-scoped book store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Reading status of a book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BookStatus {
    /// On the list, not started
    #[default]
    ToRead,
    /// Currently being read
    Reading,
    /// Finished
    Read,
}

impl BookStatus {
    /// Database and wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            BookStatus::ToRead => "to-read",
            BookStatus::Reading => "reading",
            BookStatus::Read => "read",
        }
    }
}

impl fmt::Display for BookStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "to-read" => Ok(BookStatus::ToRead),
            "reading" => Ok(BookStatus::Reading),
            "read" => Ok(BookStatus::Read),
            other => Err(format!("Invalid status: {}", other)),
        }
    }
}

/// A book on a user's list
///
/// Serialized with the column names (`user_id`, `created_at`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: u64,

    /// Owning user; every read and write is scoped by this
    pub user_id: u64,

    pub title: String,

    pub author: String,

    pub status: BookStatus,

    pub review: Option<String>,

    pub favorite: bool,

    pub created_at: DateTime<Utc>,
}

impl Book {
    /// Case-insensitive substring match on title or author
    ///
    /// `needle` must already be lower-cased.
    pub fn matches_text(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.author.to_lowercase().contains(needle)
    }
}

/// Fields accepted when creating a book
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub status: BookStatus,
    pub review: Option<String>,
    pub favorite: bool,
}

impl NewBook {
    pub fn into_book(self, id: u64, user_id: u64, created_at: DateTime<Utc>) -> Book {
        Book {
            id,
            user_id,
            title: self.title,
            author: self.author,
            status: self.status,
            review: self.review,
            favorite: self.favorite,
            created_at,
        }
    }
}

/// Full replacement of the mutable fields of a book
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookUpdate {
    pub title: String,
    pub author: String,
    pub status: BookStatus,
    pub review: Option<String>,
    pub favorite: bool,
}

impl BookUpdate {
    /// Apply to an existing record, keeping its identity and owner
    pub fn apply_to(self, book: &mut Book) {
        book.title = self.title;
        book.author = self.author;
        book.status = self.status;
        book.review = self.review;
        book.favorite = self.favorite;
    }
}

/// Optional filters for listing books
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookQuery {
    /// Free-text search over title and author
    pub q: Option<String>,

    /// Restrict to one status; `None` means all
    pub status: Option<BookStatus>,
}

impl BookQuery {
    /// Normalized search needle, `None` when blank
    pub fn needle(&self) -> Option<String> {
        self.q
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase)
    }

    /// Whether a book passes every filter in this query
    pub fn matches(&self, book: &Book) -> bool {
        if let Some(status) = self.status {
            if book.status != status {
                return false;
            }
        }
        match self.needle() {
            Some(needle) => book.matches_text(&needle),
            None => true,
        }
    }
}

/// Per-status counts of a user's books
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusSummary {
    pub all: u64,
    pub to_read: u64,
    pub reading: u64,
    pub read: u64,
}

impl StatusSummary {
    /// Tally a list of books
    pub fn from_books<'a>(books: impl IntoIterator<Item = &'a Book>) -> Self {
        books.into_iter().fold(Self::default(), |mut acc, book| {
            acc.all += 1;
            match book.status {
                BookStatus::ToRead => acc.to_read += 1,
                BookStatus::Reading => acc.reading += 1,
                BookStatus::Read => acc.read += 1,
            }
            acc
        })
    }
}
