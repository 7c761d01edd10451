pub mod book;
pub mod user;

pub use book::{BookRepository, InMemoryBookRepository};
pub use user::{InMemoryUserRepository, UserRepository};
