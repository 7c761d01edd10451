//! Request authentication gate
//!
//! `NoToken -> Extracted -> Authenticated | Rejected`, evaluated from scratch
//! on every request. The HTTP middleware is a thin wrapper around
//! [`authenticate`].

use crate::domain::value_objects::Identity;
use crate::errors::AuthError;
use crate::services::token::TokenService;

const BEARER_SCHEME: &str = "Bearer";

/// Pull the token out of an `Authorization: Bearer <token>` header value
///
/// The scheme name is matched case-insensitively. Returns `None` when the
/// header is absent, uses another scheme, or carries an empty token.
pub fn extract_bearer_token(header: Option<&str>) -> Option<&str> {
    let (scheme, token) = header?.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case(BEARER_SCHEME) {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

/// Resolve an `Authorization` header value to an identity
///
/// # Returns
///
/// * `Ok(Identity)` - The token verified
/// * `Err(AuthError::MissingToken)` - No bearer token was presented
/// * `Err(AuthError::InvalidToken)` - Verification failed for any reason
pub fn authenticate(header: Option<&str>, tokens: &TokenService) -> Result<Identity, AuthError> {
    let token = extract_bearer_token(header).ok_or(AuthError::MissingToken)?;

    tokens.verify(token).map_err(|e| {
        tracing::debug!(reason = %e, "Rejected bearer token");
        AuthError::InvalidToken
    })
}
