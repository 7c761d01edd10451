pub mod auth;
pub mod book;

pub use auth::*;
pub use book::*;
