//! Authentication service module
//!
//! This module provides the account and request authentication flow:
//! - Registration with credential validation and password hashing
//! - Login returning a signed access token
//! - The per-request auth gate that turns an `Authorization` header into an identity

mod config;
mod gate;
mod service;

#[cfg(test)]
mod tests;

pub use config::AuthServiceConfig;
pub use gate::{authenticate, extract_bearer_token};
pub use service::{AuthService, LoginCommand, RegisterCommand};
