//! Schema bootstrap statements
//!
//! Tables are created with `IF NOT EXISTS` at startup, so a database created
//! by an earlier deployment is reused as is.

pub const CREATE_USERS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id INT UNSIGNED NOT NULL AUTO_INCREMENT,
        username VARCHAR(255) NOT NULL UNIQUE,
        password VARCHAR(255) NOT NULL,
        first_name VARCHAR(255),
        last_name VARCHAR(255),
        email VARCHAR(255) UNIQUE,
        mobile VARCHAR(10),
        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
        PRIMARY KEY (id)
    ) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4
"#;

pub const CREATE_BOOKS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS books (
        id INT UNSIGNED NOT NULL AUTO_INCREMENT,
        user_id INT UNSIGNED NOT NULL,
        title VARCHAR(255) NOT NULL,
        author VARCHAR(255) NOT NULL,
        status ENUM('to-read', 'reading', 'read') DEFAULT 'to-read',
        review TEXT,
        favorite BOOLEAN DEFAULT FALSE,
        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
        PRIMARY KEY (id),
        FOREIGN KEY (user_id) REFERENCES users(id) ON DELETE CASCADE
    ) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4
"#;

/// Statements run in order by [`DatabasePool::migrate`](super::DatabasePool::migrate)
pub const MIGRATIONS: [&str; 2] = [CREATE_USERS_TABLE, CREATE_BOOKS_TABLE];

/// Quote a MySQL identifier, doubling any embedded backticks
pub fn quote_identifier(name: &str) -> String {
    format!("`{}`", name.replace('`', "``"))
}

/// `CREATE DATABASE IF NOT EXISTS` for the named schema
pub fn create_database_statement(name: &str) -> String {
    format!(
        "CREATE DATABASE IF NOT EXISTS {} CHARACTER SET utf8mb4 COLLATE utf8mb4_general_ci",
        quote_identifier(name)
    )
}
