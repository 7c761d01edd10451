//! Book service module
//!
//! All operations act on behalf of an authenticated identity and are scoped
//! to that identity's books.

mod service;


pub use service::BookService;
