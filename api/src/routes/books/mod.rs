//! Book route handlers
//!
//! Every handler runs behind the JWT middleware and acts only on the
//! caller's own books. Another user's book answers exactly like a missing one.

pub mod read;
pub mod write;

pub use read::{book_summary, get_book, list_books};
pub use write::{create_book, delete_book, update_book};
