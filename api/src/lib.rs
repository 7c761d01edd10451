//! HTTP surface of the BookTracker server
//!
//! Library exports for the binary and for integration tests.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod listener;
pub mod middleware;
pub mod routes;

pub use app::{create_app, AppState};
pub use handlers::error::ApiError;
