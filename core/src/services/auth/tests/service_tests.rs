//! Unit tests for authentication service

use std::sync::Arc;
use std::time::Instant;

use bt_shared::validation::CredentialError;

use crate::errors::{AuthError, DomainError, ValidationError};
use crate::repositories::{InMemoryUserRepository, UserRepository};
use crate::services::auth::{AuthService, AuthServiceConfig, LoginCommand, RegisterCommand};
use crate::services::token::{TokenService, TokenServiceConfig};

use super::mocks::*;

fn token_service() -> Arc<TokenService> {
    Arc::new(TokenService::new(TokenServiceConfig::new("auth-test-secret")).unwrap())
}

fn service_with<U: UserRepository>(repo: U) -> AuthService<U> {
    service_with_cost(repo, 4)
}

fn service_with_cost<U: UserRepository>(repo: U, password_hash_cost: u32) -> AuthService<U> {
    AuthService::new(
        Arc::new(repo),
        token_service(),
        AuthServiceConfig { password_hash_cost },
    )
}

fn alice() -> RegisterCommand {
    RegisterCommand {
        username: Some("alice1".to_string()),
        password: Some("Abcdef1!".to_string()),
        first_name: Some("A".to_string()),
        last_name: Some("B".to_string()),
        email: Some("alice1@gmail.com".to_string()),
        mobile: Some("1234567890".to_string()),
    }
}

fn login(username: &str, password: &str) -> LoginCommand {
    LoginCommand {
        username: Some(username.to_string()),
        password: Some(password.to_string()),
    }
}

#[tokio::test]
async fn test_register_success() {
    let repo = InMemoryUserRepository::new();
    let service = service_with(repo.clone());

    let user = service.register(alice()).await.unwrap();
    assert_eq!(user.username, "alice1");
    assert_eq!(user.email, "alice1@gmail.com");

    let stored = repo.find_by_username("alice1").await.unwrap().unwrap();
    assert_ne!(stored.password_hash, "Abcdef1!");
    assert!(stored.password_hash.starts_with("$2b$"));
}

#[tokio::test]
async fn test_register_requires_all_fields() {
    let service = service_with(InMemoryUserRepository::new());

    let mut command = alice();
    command.mobile = None;
    let err = service.register(command).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::ValidationErr(ValidationError::AllFieldsRequired)
    ));

    let mut command = alice();
    command.first_name = Some(String::new());
    let err = service.register(command).await.unwrap_err();
    assert_eq!(err.to_string(), "All fields are required");
}

#[tokio::test]
async fn test_register_applies_credential_rules() {
    let service = service_with(InMemoryUserRepository::new());

    let mut command = alice();
    command.password = Some("abcdefg1".to_string());
    let err = service.register(command).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::ValidationErr(ValidationError::Credential(
            CredentialError::PasswordMissingSpecial
        ))
    ));

    let mut command = alice();
    command.email = Some("alice1@yahoo.com".to_string());
    let err = service.register(command).await.unwrap_err();
    assert_eq!(err.to_string(), "Email must be a valid @gmail.com address");
}

#[tokio::test]
async fn test_register_duplicate_username() {
    let service = service_with(InMemoryUserRepository::new());
    service.register(alice()).await.unwrap();

    let mut command = alice();
    command.email = Some("another@gmail.com".to_string());
    let err = service.register(command).await.unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::DuplicateUsername)));
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let service = service_with(InMemoryUserRepository::new());
    service.register(alice()).await.unwrap();

    let mut command = alice();
    command.username = Some("bob123".to_string());
    let err = service.register(command).await.unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::DuplicateEmail)));
}

#[tokio::test]
async fn test_register_store_level_conflict_is_typed() {
    for conflict in [AuthError::DuplicateUsername, AuthError::DuplicateEmail] {
        let service = service_with(RacingUserRepository {
            conflict: conflict.clone(),
        });
        let err = service.register(alice()).await.unwrap_err();
        assert!(matches!(err, DomainError::Auth(ref e) if *e == conflict));
    }
}

#[tokio::test]
async fn test_register_storage_failure_is_internal() {
    let service = service_with(BrokenUserRepository);

    let err = service.register(alice()).await.unwrap_err();
    assert!(err.is_internal());
}

#[tokio::test]
async fn test_login_returns_verifiable_token() {
    let service = service_with(InMemoryUserRepository::new());
    let user = service.register(alice()).await.unwrap();

    let token = service.login(login("alice1", "Abcdef1!")).await.unwrap();
    let identity = service.token_service().verify(&token).unwrap();
    assert_eq!(identity.user_id, user.id);
    assert_eq!(identity.username, "alice1");
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let service = service_with(InMemoryUserRepository::new());
    service.register(alice()).await.unwrap();

    let wrong_password = service.login(login("alice1", "Wrong1!x")).await.unwrap_err();
    let unknown_user = service.login(login("nobody1", "Abcdef1!")).await.unwrap_err();

    assert!(matches!(
        wrong_password,
        DomainError::Auth(AuthError::InvalidCredentials)
    ));
    assert!(matches!(
        unknown_user,
        DomainError::Auth(AuthError::InvalidCredentials)
    ));
    assert_eq!(wrong_password.to_string(), unknown_user.to_string());
}

#[tokio::test]
async fn test_unknown_user_login_pays_for_password_check() {
    let service = service_with_cost(InMemoryUserRepository::new(), 8);
    service.register(alice()).await.unwrap();

    let start = Instant::now();
    service.login(login("alice1", "Wrong1!x")).await.unwrap_err();
    let wrong_password = start.elapsed();

    let start = Instant::now();
    service.login(login("nobody1", "Wrong1!x")).await.unwrap_err();
    let unknown_user = start.elapsed();

    assert!(
        unknown_user * 4 >= wrong_password,
        "unknown user took {:?}, wrong password took {:?}",
        unknown_user,
        wrong_password
    );
}

#[tokio::test]
async fn test_login_requires_both_fields() {
    let service = service_with(InMemoryUserRepository::new());

    let err = service
        .login(LoginCommand {
            username: Some("alice1".to_string()),
            password: None,
        })
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "username and password required");
}
