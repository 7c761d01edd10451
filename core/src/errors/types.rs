//! Typed error kinds for authentication, token handling and input validation
//!
//! The `Display` text of the client-facing variants is the exact message
//! returned in HTTP error bodies.

use bt_shared::validation::CredentialError;
use thiserror::Error;

/// Authentication and account-uniqueness errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown username or wrong password; the two are deliberately indistinguishable
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("no token")]
    MissingToken,

    #[error("invalid token")]
    InvalidToken,

    #[error("Username already exists")]
    DuplicateUsername,

    #[error("This email is already registered")]
    DuplicateEmail,

    /// Unique violation on a key the store did not name
    #[error("This account already exists")]
    DuplicateAccount,
}

impl AuthError {
    /// Whether this error reports a uniqueness conflict
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            AuthError::DuplicateUsername | AuthError::DuplicateEmail | AuthError::DuplicateAccount
        )
    }
}

/// Token signing and verification errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    Expired,

    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Malformed token")]
    Malformed,

    #[error("Token generation failed")]
    GenerationFailed,
}

/// Request validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("All fields are required")]
    AllFieldsRequired,

    #[error("username and password required")]
    CredentialsRequired,

    #[error("Title and author required")]
    TitleAndAuthorRequired,

    #[error("Field required: {field}")]
    RequiredField { field: String },

    #[error("Invalid length for field: {field} (max: {max})")]
    InvalidLength { field: String, max: usize },

    #[error("Invalid status: {value}")]
    InvalidStatus { value: String },

    #[error(transparent)]
    Credential(#[from] CredentialError),
}
