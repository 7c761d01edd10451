//! Domain-specific error types and error handling.

mod types;


pub use types::{AuthError, TokenError, ValidationError};

use bt_shared::error_codes;
use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("{message}")]
    Validation { message: String },

    #[error("{resource} not found")]
    NotFound { resource: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error("Database error: {message}")]
    Database { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    ValidationErr(#[from] ValidationError),
}

impl DomainError {
    /// Shorthand for a not-found error on the named resource
    pub fn not_found(resource: impl Into<String>) -> Self {
        DomainError::NotFound {
            resource: resource.into(),
        }
    }

    /// Machine-readable code placed in the `error` field of a response body
    pub fn error_code(&self) -> &'static str {
        match self {
            DomainError::Validation { .. } | DomainError::ValidationErr(_) => {
                error_codes::VALIDATION_ERROR
            }
            DomainError::NotFound { .. } => error_codes::NOT_FOUND,
            DomainError::Auth(err) if err.is_conflict() => error_codes::CONFLICT,
            DomainError::Internal { .. }
            | DomainError::Database { .. }
            | DomainError::Token(TokenError::GenerationFailed) => error_codes::INTERNAL_ERROR,
            DomainError::Auth(_) | DomainError::Token(_) => error_codes::UNAUTHORIZED,
        }
    }

    /// Whether this is an unexpected failure whose detail must not reach clients
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            DomainError::Internal { .. }
                | DomainError::Database { .. }
                | DomainError::Token(TokenError::GenerationFailed)
        )
    }

    /// Message shown to clients
    ///
    /// Every token verification failure collapses to "invalid token". Internal
    /// details are only included when `expose_internal` is set.
    pub fn client_message(&self, expose_internal: bool) -> String {
        match self {
            DomainError::Token(TokenError::GenerationFailed) => {
                if expose_internal {
                    TokenError::GenerationFailed.to_string()
                } else {
                    "Server error".to_string()
                }
            }
            DomainError::Token(_) => AuthError::InvalidToken.to_string(),
            DomainError::Internal { message } | DomainError::Database { message } => {
                if expose_internal {
                    message.clone()
                } else {
                    "Server error".to_string()
                }
            }
            other => other.to_string(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
