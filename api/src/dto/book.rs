use bt_core::domain::entities::{BookQuery, BookStatus, BookUpdate, NewBook};
use bt_core::errors::ValidationError;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Query string of `GET /api/books`
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct BookListQuery {
    /// Case-insensitive substring of title or author
    #[validate(length(max = 255))]
    pub q: Option<String>,

    /// `to-read`, `reading`, `read`, or `all`
    pub status: Option<String>,
}

impl BookListQuery {
    pub fn into_query(self) -> Result<BookQuery, ValidationError> {
        let status = match self.status.as_deref().map(str::trim) {
            None | Some("") | Some("all") => None,
            Some(value) => Some(parse_status(value)?),
        };
        Ok(BookQuery { q: self.q, status })
    }
}

/// Body of `POST /api/books` and `PUT /api/books/{id}`
///
/// A `PUT` replaces every mutable field, so both verbs share one shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct BookRequest {
    pub title: Option<String>,

    pub author: Option<String>,

    /// Defaults to `to-read`
    pub status: Option<String>,

    /// Bounded by the `TEXT` column
    #[validate(length(max = 65535))]
    pub review: Option<String>,

    pub favorite: Option<bool>,
}

impl BookRequest {
    pub fn into_new_book(self) -> Result<NewBook, ValidationError> {
        let status = self.parsed_status()?;
        Ok(NewBook {
            title: self.title.unwrap_or_default(),
            author: self.author.unwrap_or_default(),
            status,
            review: self.review,
            favorite: self.favorite.unwrap_or(false),
        })
    }

    pub fn into_update(self) -> Result<BookUpdate, ValidationError> {
        let status = self.parsed_status()?;
        Ok(BookUpdate {
            title: self.title.unwrap_or_default(),
            author: self.author.unwrap_or_default(),
            status,
            review: self.review,
            favorite: self.favorite.unwrap_or(false),
        })
    }

    fn parsed_status(&self) -> Result<BookStatus, ValidationError> {
        match self.status.as_deref().map(str::trim) {
            None | Some("") => Ok(BookStatus::default()),
            Some(value) => parse_status(value),
        }
    }
}

fn parse_status(value: &str) -> Result<BookStatus, ValidationError> {
    value
        .parse()
        .map_err(|_| ValidationError::InvalidStatus {
            value: value.to_string(),
        })
}

/// Plain acknowledgement body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
