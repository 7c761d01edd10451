//! Value objects representing immutable domain concepts.

pub mod identity;

pub use identity::Identity;
