//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the BookTracker
//! application. It provides the MySQL-backed implementations of the
//! repository traits defined in `bt_core`, plus connection pool management
//! and schema bootstrap.

// Re-export core types for convenience
pub use bt_core::errors::*;

/// Database module - MySQL implementations using SQLx
pub mod database;

pub use database::{DatabasePool, MySqlBookRepository, MySqlUserRepository};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
