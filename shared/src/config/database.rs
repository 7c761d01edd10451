//! Database configuration module

use std::fmt;

use super::{parse_or, ConfigError};

/// MySQL connection configuration
#[derive(Clone)]
pub struct DatabaseConfig {
    /// Server host
    pub host: String,

    /// Server port
    pub port: u16,

    /// Login user
    pub user: String,

    /// Login password
    pub password: String,

    /// Schema name
    pub database: String,

    /// Full connection URL; takes precedence over the individual parts
    pub url: Option<String>,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Connection acquire timeout in seconds
    pub connect_timeout: u64,

    /// Whether to issue `CREATE DATABASE IF NOT EXISTS` on startup
    pub create_database: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: String::from("localhost"),
            port: 3306,
            user: String::from("root"),
            password: String::new(),
            database: String::from("booktracker"),
            url: None,
            max_connections: 10,
            connect_timeout: 30,
            create_database: true,
        }
    }
}

impl DatabaseConfig {
    /// Create from environment variables
    pub fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let url = lookup("DATABASE_URL").filter(|u| !u.trim().is_empty());
        let skip_create = lookup("SKIP_DB_CREATE")
            .map(|v| v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Ok(Self {
            host: lookup("MYSQL_HOST").unwrap_or(defaults.host),
            port: parse_or(lookup, "MYSQL_PORT", defaults.port)?,
            user: lookup("MYSQL_USER").unwrap_or(defaults.user),
            password: lookup("MYSQL_PASSWORD").unwrap_or(defaults.password),
            database: lookup("MYSQL_DATABASE").unwrap_or(defaults.database),
            // A full URL names its own schema, so there is nothing to create
            create_database: url.is_none() && !skip_create,
            url,
            max_connections: parse_or(lookup, "DATABASE_MAX_CONNECTIONS", defaults.max_connections)?,
            connect_timeout: parse_or(lookup, "DATABASE_CONNECT_TIMEOUT", defaults.connect_timeout)?,
        })
    }

    /// Set the maximum number of connections
    pub fn with_max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("database", &self.database)
            .field("url", &self.url.as_ref().map(|_| "<redacted>"))
            .field("max_connections", &self.max_connections)
            .field("connect_timeout", &self.connect_timeout)
            .field("create_database", &self.create_database)
            .finish()
    }
}
