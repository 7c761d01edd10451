//! Credential validation rules
//!
//! Every check is a pure function. The messages are part of the HTTP
//! contract and are returned verbatim in 400 responses.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// First character a letter, the rest letters, digits or `# _ !`
static USERNAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9#_!]*$").expect("username pattern is valid")
});

static MOBILE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("mobile pattern is valid"));

/// Characters that satisfy the password special-character rule
pub const PASSWORD_SPECIAL_CHARS: &str = r#"!@#$%^&*()_+-=[]{};':"\|,.<>/?"#;

/// Accepted email domain suffix
pub const EMAIL_DOMAIN_SUFFIX: &str = "@gmail.com";

pub const USERNAME_MIN_LENGTH: usize = 3;
pub const USERNAME_MAX_LENGTH: usize = 20;
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Reason a credential was rejected
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialError {
    #[error("Username must start with a letter and can only contain letters, numbers, and # _ ! characters")]
    UsernameFormat,

    #[error("Username must be between 3 and 20 characters")]
    UsernameLength,

    #[error("Password must be at least 8 characters long")]
    PasswordTooShort,

    #[error("Password must contain at least one letter")]
    PasswordMissingLetter,

    #[error("Password must contain at least one number")]
    PasswordMissingDigit,

    #[error("Password must contain at least one special character")]
    PasswordMissingSpecial,

    #[error("Email must be a valid @gmail.com address")]
    EmailDomain,

    #[error("Mobile number must be exactly 10 digits")]
    MobileFormat,
}

/// Validate a username: pattern first, then length
pub fn validate_username(username: &str) -> Result<(), CredentialError> {
    if !USERNAME_PATTERN.is_match(username) {
        return Err(CredentialError::UsernameFormat);
    }

    let len = username.chars().count();
    if !(USERNAME_MIN_LENGTH..=USERNAME_MAX_LENGTH).contains(&len) {
        return Err(CredentialError::UsernameLength);
    }

    Ok(())
}

/// Validate a password, reporting the first failing rule in the order
/// length, letter, digit, special character
pub fn validate_password(password: &str) -> Result<(), CredentialError> {
    if password.chars().count() < PASSWORD_MIN_LENGTH {
        return Err(CredentialError::PasswordTooShort);
    }
    if !password.chars().any(|c| c.is_ascii_alphabetic()) {
        return Err(CredentialError::PasswordMissingLetter);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(CredentialError::PasswordMissingDigit);
    }
    if !password.chars().any(|c| PASSWORD_SPECIAL_CHARS.contains(c)) {
        return Err(CredentialError::PasswordMissingSpecial);
    }
    Ok(())
}

/// Check the email ends with the accepted domain, ignoring case
pub fn validate_email(email: &str) -> bool {
    email.to_lowercase().ends_with(EMAIL_DOMAIN_SUFFIX)
}

/// Check the mobile number is exactly ten ASCII digits
pub fn validate_mobile(mobile: &str) -> bool {
    MOBILE_PATTERN.is_match(mobile)
}

/// Run every registration rule in the order clients expect
pub fn validate_registration(
    username: &str,
    password: &str,
    email: &str,
    mobile: &str,
) -> Result<(), CredentialError> {
    validate_username(username)?;
    validate_password(password)?;
    if !validate_email(email) {
        return Err(CredentialError::EmailDomain);
    }
    if !validate_mobile(mobile) {
        return Err(CredentialError::MobileFormat);
    }
    Ok(())
}
