//! Database module - MySQL implementations using SQLx
//!
//! This module provides database access layer implementations including:
//! - Connection pool management
//! - Schema bootstrap (database and tables)
//! - Repository pattern implementations

pub mod connection;
pub mod mysql;
pub mod schema;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use connection::{DatabasePool, PoolStatistics};
pub use mysql::{MySqlBookRepository, MySqlUserRepository};
