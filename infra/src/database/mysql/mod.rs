//! MySQL-specific database implementations
//!
//! This module contains MySQL implementations of repository traits
//! using SQLx for database operations.

pub mod book_repository_impl;
pub mod error_mapping;
pub mod user_repository_impl;

// Re-export the MySQL implementations
pub use book_repository_impl::MySqlBookRepository;
pub use user_repository_impl::MySqlUserRepository;
