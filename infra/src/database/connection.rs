//! Database connection pool management
//!
//! This module provides database connection pooling using SQLx with MySQL,
//! plus the startup steps that create the schema and tables when missing.

use sqlx::{
    mysql::{MySqlConnectOptions, MySqlConnection, MySqlPoolOptions},
    ConnectOptions, Connection, MySqlPool,
};
use std::str::FromStr;
use std::time::Duration;
use tracing::log::LevelFilter;

use bt_shared::config::DatabaseConfig;

use super::schema;
use crate::InfrastructureError;

/// Database connection pool wrapper
///
/// Manages the MySQL connection pool with configurable settings
/// for connection limits, timeouts, and health checks.
#[derive(Clone)]
pub struct DatabasePool {
    /// SQLx MySQL connection pool
    pool: MySqlPool,
}

impl DatabasePool {
    /// Build connection options from configuration
    ///
    /// A full `url` wins over the individual host/port/user/password/database
    /// settings.
    pub fn connect_options(config: &DatabaseConfig) -> Result<MySqlConnectOptions, InfrastructureError> {
        let options = match &config.url {
            Some(url) => MySqlConnectOptions::from_str(url)
                .map_err(|e| InfrastructureError::Config(format!("Invalid database URL: {}", e)))?,
            None => MySqlConnectOptions::new()
                .host(&config.host)
                .port(config.port)
                .username(&config.user)
                .password(&config.password)
                .database(&config.database),
        };

        Ok(options
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_secs(1)))
    }

    /// Create the configured database if it does not exist
    ///
    /// Connects to the server without selecting a schema. Does nothing when
    /// `create_database` is disabled (`SKIP_DB_CREATE=true` or a full URL).
    pub async fn ensure_database(config: &DatabaseConfig) -> Result<(), InfrastructureError> {
        if !config.create_database {
            tracing::debug!("Skipping database creation");
            return Ok(());
        }

        let server_options = MySqlConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.user)
            .password(&config.password);

        let mut conn = MySqlConnection::connect_with(&server_options).await?;
        sqlx::query(&schema::create_database_statement(&config.database))
            .execute(&mut conn)
            .await?;
        conn.close().await?;

        tracing::info!(database = %config.database, "Database created/verified");
        Ok(())
    }

    /// Create a new database connection pool
    pub async fn new(config: &DatabaseConfig) -> Result<Self, InfrastructureError> {
        tracing::info!(
            "Creating database connection pool with max_connections: {}",
            config.max_connections
        );

        let connect_options = Self::connect_options(config)?;

        let pool = MySqlPoolOptions::new()
            // Connection pool size
            .max_connections(config.max_connections)
            .min_connections(1)
            // Connection lifecycle
            .acquire_timeout(Duration::from_secs(config.connect_timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .test_before_acquire(true)
            .connect_with(connect_options)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create database pool: {}", e);
                InfrastructureError::Database(e)
            })?;

        tracing::info!("Database connection pool created successfully");

        Ok(Self { pool })
    }

    /// Wrap an existing SQLx pool
    pub fn from_pool(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Get a reference to the underlying SQLx pool
    pub fn get_pool(&self) -> &MySqlPool {
        &self.pool
    }

    /// Create the `users` and `books` tables when missing
    pub async fn migrate(&self) -> Result<(), InfrastructureError> {
        tracing::info!("Running database migrations");

        for statement in schema::MIGRATIONS {
            sqlx::query(statement).execute(&self.pool).await?;
        }

        tracing::info!("Tables created/verified successfully");
        Ok(())
    }

    /// Check if the database connection is healthy
    ///
    /// Performs a simple query to verify connectivity.
    pub async fn health_check(&self) -> Result<bool, InfrastructureError> {
        tracing::debug!("Performing database health check");

        let result = sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Database health check failed: {}", e);
                InfrastructureError::Database(e)
            })?;

        let value: i64 = sqlx::Row::try_get(&result, 0).unwrap_or(0);

        if value == 1 {
            tracing::debug!("Database health check passed");
            Ok(true)
        } else {
            tracing::warn!("Database health check returned unexpected value: {}", value);
            Ok(false)
        }
    }

    /// Get connection pool statistics
    pub fn get_statistics(&self) -> PoolStatistics {
        PoolStatistics {
            connections: self.pool.size(),
            idle_connections: self.pool.num_idle(),
            max_connections: self.pool.options().get_max_connections(),
        }
    }

    /// Close all connections in the pool
    ///
    /// This should be called during application shutdown.
    pub async fn close(&self) {
        tracing::info!("Closing database connection pool");
        self.pool.close().await;
        tracing::info!("Database connection pool closed");
    }
}

/// Connection pool statistics
#[derive(Debug, Clone)]
pub struct PoolStatistics {
    /// Total number of connections in the pool
    pub connections: u32,
    /// Number of idle connections
    pub idle_connections: usize,
    /// Maximum allowed connections
    pub max_connections: u32,
}

impl std::fmt::Display for PoolStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Pool Stats: {}/{} connections ({} idle)",
            self.connections, self.max_connections, self.idle_connections
        )
    }
}
