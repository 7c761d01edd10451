//! Shared utilities and common types for the BookTracker server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded once at startup
//! - Error response structures
//! - Credential validation rules

pub mod config;
pub mod errors;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, ConfigError, DatabaseConfig, Environment, JwtConfig, ServerConfig,
};
pub use errors::{error_codes, ErrorResponse};
pub use utils::validation;
