//! Translation of SQLx failures into domain errors

use bt_core::errors::{AuthError, DomainError};

/// Classify a duplicate-key message by the index it names
///
/// MySQL reports `Duplicate entry '<value>' for key '<index>'`. Only the index
/// part is inspected so a value that happens to contain "email" cannot
/// mislabel a username conflict.
pub fn classify_duplicate(message: &str) -> AuthError {
    let lowered = message.to_lowercase();
    let key = lowered
        .rsplit_once("for key")
        .map(|(_, key)| key)
        .unwrap_or(&lowered);

    if key.contains("email") {
        AuthError::DuplicateEmail
    } else if key.contains("username") {
        AuthError::DuplicateUsername
    } else {
        AuthError::DuplicateAccount
    }
}

/// Map a SQLx error raised while inserting a user
pub fn map_insert_error(context: &str, err: sqlx::Error) -> DomainError {
    if let sqlx::Error::Database(ref db_err) = err {
        if db_err.is_unique_violation() {
            return DomainError::Auth(classify_duplicate(db_err.message()));
        }
    }
    database_error(context, err)
}

/// Wrap any other SQLx error
pub fn database_error(context: &str, err: sqlx::Error) -> DomainError {
    tracing::error!(error = %err, "{}", context);
    DomainError::Database {
        message: format!("{}: {}", context, err),
    }
}
