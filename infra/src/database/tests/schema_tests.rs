//! Unit tests for schema statements and query helpers

use crate::database::mysql::book_repository_impl::like_pattern;
use crate::database::schema::{create_database_statement, quote_identifier, MIGRATIONS};

#[test]
fn test_quote_identifier() {
    assert_eq!(quote_identifier("booktracker"), "`booktracker`");
    assert_eq!(quote_identifier("evil`; DROP"), "`evil``; DROP`");
}

#[test]
fn test_create_database_statement() {
    let sql = create_database_statement("booktracker");
    assert!(sql.starts_with("CREATE DATABASE IF NOT EXISTS `booktracker`"));
    assert!(sql.contains("utf8mb4"));
}

#[test]
fn test_users_created_before_books() {
    assert!(MIGRATIONS[0].contains("CREATE TABLE IF NOT EXISTS users"));
    assert!(MIGRATIONS[1].contains("REFERENCES users(id) ON DELETE CASCADE"));
}

#[test]
fn test_like_pattern_escapes_wildcards() {
    assert_eq!(like_pattern("dune"), "%dune%");
    assert_eq!(like_pattern("100%_"), "%100\\%\\_%");
}
