//! Token service module for JWT management
//!
//! Access tokens are stateless HS256 JWTs carrying the user id and username.
//! There is no refresh token and no revocation list: a token is valid until
//! its embedded expiry or until its signature fails to verify.

mod config;
mod service;


pub use config::TokenServiceConfig;
pub use service::TokenService;
