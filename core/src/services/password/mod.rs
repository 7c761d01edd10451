//! Password hashing
//!
//! Digests are bcrypt strings (`$2b$<cost>$<salt><hash>`), so verification
//! needs nothing but the digest itself.

mod hasher;


pub use hasher::PasswordHasher;
