//! Main token service implementation

use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::Claims;
use crate::domain::value_objects::Identity;
use crate::errors::{DomainError, TokenError};

use super::config::TokenServiceConfig;

/// Service for signing and verifying JWT access tokens
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    ///
    /// # Returns
    ///
    /// A new `TokenService`, or an error when the secret is empty
    pub fn new(config: TokenServiceConfig) -> Result<Self, DomainError> {
        if config.jwt_secret.trim().is_empty() {
            return Err(DomainError::Internal {
                message: "JWT secret must not be empty".to_string(),
            });
        }

        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(config.algorithm);
        validation.set_required_spec_claims(&["exp", "sub"]);
        validation.validate_exp = true;
        validation.leeway = 0;

        Ok(Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        })
    }

    /// Token lifetime in seconds
    pub fn token_lifetime_seconds(&self) -> i64 {
        self.config.token_lifetime_seconds
    }

    /// Signs a token for a user, valid for the configured lifetime
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The compact JWT
    /// * `Err(TokenError::GenerationFailed)` - Encoding failed
    pub fn sign(&self, user_id: u64, username: &str) -> Result<String, TokenError> {
        let claims = Claims::new(user_id, username, self.config.token_lifetime_seconds);
        self.encode_claims(&claims)
    }

    /// Encodes arbitrary claims with the service key
    pub(crate) fn encode_claims(&self, claims: &Claims) -> Result<String, TokenError> {
        encode(&Header::new(self.config.algorithm), claims, &self.encoding_key)
            .map_err(|_| TokenError::GenerationFailed)
    }

    /// Verifies a token and resolves the identity it carries
    ///
    /// Fails on a bad signature, malformed structure, a non-numeric subject,
    /// or when the current time is at or past the expiry. Never panics on
    /// arbitrary input.
    pub fn verify(&self, token: &str) -> Result<Identity, TokenError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                _ => TokenError::Malformed,
            })?;
        let claims = token_data.claims;

        // The library accepts a token whose expiry equals the current second
        if claims.is_expired_at(Utc::now().timestamp()) {
            return Err(TokenError::Expired);
        }

        let user_id = claims.user_id().ok_or(TokenError::Malformed)?;
        Ok(Identity::new(user_id, claims.username))
    }
}
