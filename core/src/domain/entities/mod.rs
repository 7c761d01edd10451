//! Domain entities representing core business objects.

pub mod book;
pub mod token;
pub mod user;


// Re-export commonly used types
pub use book::{Book, BookQuery, BookStatus, BookUpdate, NewBook, StatusSummary};
pub use token::Claims;
pub use user::{NewUser, User};
