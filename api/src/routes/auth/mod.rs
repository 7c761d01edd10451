//! Authentication route handlers
//!
//! - Account registration
//! - Login, returning a signed access token

pub mod login;
pub mod register;

pub use login::login;
pub use register::register;
