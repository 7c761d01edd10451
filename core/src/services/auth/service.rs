//! Main authentication service implementation

use std::sync::Arc;

use bt_shared::validation::validate_registration;

use crate::domain::entities::user::{NewUser, User};
use crate::errors::{AuthError, DomainResult, ValidationError};
use crate::repositories::UserRepository;
use crate::services::password::PasswordHasher;
use crate::services::token::TokenService;

use super::config::AuthServiceConfig;

/// Registration input as received from a client
///
/// Every field is optional here so that a missing field is reported as a
/// validation failure rather than a decoding failure.
#[derive(Debug, Clone, Default)]
pub struct RegisterCommand {
    pub username: Option<String>,
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub mobile: Option<String>,
}

/// Login input as received from a client
#[derive(Debug, Clone, Default)]
pub struct LoginCommand {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Plaintext behind the decoy digest checked for unknown usernames
const DECOY_PASSWORD: &str = "decoy-password-never-assigned";

/// Present and non-empty
fn required(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Authentication service for account registration and login
pub struct AuthService<U: UserRepository> {
    /// User repository for database operations
    user_repository: Arc<U>,
    /// Token service for JWT signing
    token_service: Arc<TokenService>,
    /// Password hasher
    hasher: PasswordHasher,
    /// Digest at the configured cost, verified when the username is unknown
    decoy_digest: String,
}

impl<U: UserRepository> AuthService<U> {
    /// Create a new authentication service
    pub fn new(
        user_repository: Arc<U>,
        token_service: Arc<TokenService>,
        config: AuthServiceConfig,
    ) -> Self {
        let hasher = PasswordHasher::new(config.password_hash_cost);
        let decoy_digest = hasher.hash(DECOY_PASSWORD).unwrap_or_else(|e| {
            tracing::warn!("Failed to prepare decoy password digest: {}", e);
            String::new()
        });

        Self {
            user_repository,
            token_service,
            hasher,
            decoy_digest,
        }
    }

    /// Register a new account
    ///
    /// This method:
    /// 1. Requires every field to be present and non-empty
    /// 2. Applies the credential rules (username, password, email, mobile)
    /// 3. Rejects a taken username before hashing
    /// 4. Hashes the password and inserts the user
    ///
    /// The pre-check is only a fast path. Two concurrent registrations can both
    /// pass it; the store's unique constraint then decides and the loser gets
    /// `DuplicateUsername` or `DuplicateEmail` from `create`.
    pub async fn register(&self, command: RegisterCommand) -> DomainResult<User> {
        let fields = (
            required(command.username),
            required(command.password),
            required(command.first_name),
            required(command.last_name),
            required(command.email),
            required(command.mobile),
        );
        let (
            Some(username),
            Some(password),
            Some(first_name),
            Some(last_name),
            Some(email),
            Some(mobile),
        ) = fields
        else {
            return Err(ValidationError::AllFieldsRequired.into());
        };

        validate_registration(&username, &password, &email, &mobile)
            .map_err(ValidationError::from)?;

        if self.user_repository.find_by_username(&username).await?.is_some() {
            tracing::info!(username = %username, "Registration rejected: username taken");
            return Err(AuthError::DuplicateUsername.into());
        }

        let password_hash = self.hasher.hash(&password)?;

        let user = self
            .user_repository
            .create(NewUser {
                username,
                password_hash,
                first_name,
                last_name,
                email,
                mobile,
            })
            .await?;

        tracing::info!(user_id = user.id, username = %user.username, "User registered");
        Ok(user)
    }

    /// Log in and obtain an access token
    ///
    /// Unknown usernames and wrong passwords both yield
    /// `AuthError::InvalidCredentials`, and both pay for one bcrypt verify so
    /// response timing does not reveal which usernames exist.
    pub async fn login(&self, command: LoginCommand) -> DomainResult<String> {
        let (Some(username), Some(password)) =
            (required(command.username), required(command.password))
        else {
            return Err(ValidationError::CredentialsRequired.into());
        };

        let user = match self.user_repository.find_by_username(&username).await? {
            Some(user) => user,
            None => {
                self.hasher.verify(&password, &self.decoy_digest);
                tracing::info!(username = %username, "Login failed");
                return Err(AuthError::InvalidCredentials.into());
            }
        };

        if !self.hasher.verify(&password, &user.password_hash) {
            tracing::info!(username = %username, "Login failed");
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self.token_service.sign(user.id, &user.username)?;
        tracing::info!(user_id = user.id, "User logged in");
        Ok(token)
    }

    /// Token service used to sign and verify tokens
    pub fn token_service(&self) -> &Arc<TokenService> {
        &self.token_service
    }
}
