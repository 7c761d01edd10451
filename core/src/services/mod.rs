//! Business services containing domain logic and use cases.

pub mod auth;
pub mod book;
pub mod password;
pub mod token;

// Re-export commonly used types
pub use auth::{AuthService, AuthServiceConfig, LoginCommand, RegisterCommand};
pub use book::BookService;
pub use password::PasswordHasher;
pub use token::{TokenService, TokenServiceConfig};
