use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use tracing_subscriber::EnvFilter;

use bt_api::{create_app, listener::bind_with_fallback, AppState};
use bt_core::services::{AuthService, BookService, TokenService};
use bt_infra::{DatabasePool, MySqlBookRepository, MySqlUserRepository};
use bt_shared::{AppConfig, Environment};

fn init_tracing(environment: Environment) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(environment.default_log_filter()));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env().context("Invalid configuration")?;
    init_tracing(config.environment);

    tracing::info!(environment = %config.environment, "Starting BookTracker API server");

    // Database
    DatabasePool::ensure_database(&config.database)
        .await
        .context("Failed to create database")?;
    let db_pool = DatabasePool::new(&config.database)
        .await
        .context("Failed to connect to database")?;
    db_pool.migrate().await.context("Failed to create tables")?;
    if !db_pool.health_check().await.context("Database unreachable")? {
        anyhow::bail!("Database health check failed");
    }
    tracing::info!(pool = %db_pool.get_statistics(), "Database initialized");

    // Repositories and services
    let user_repo = Arc::new(MySqlUserRepository::new(db_pool.get_pool().clone()));
    let book_repo = Arc::new(MySqlBookRepository::new(db_pool.get_pool().clone()));

    let token_service = Arc::new(
        TokenService::new((&config.auth.jwt).into()).context("Invalid token configuration")?,
    );
    let auth_service = Arc::new(AuthService::new(
        user_repo,
        token_service,
        (&config.auth).into(),
    ));
    let book_service = Arc::new(BookService::new(book_repo));

    let state = web::Data::new(AppState::new(
        auth_service,
        book_service,
        config.environment,
    ));

    // HTTP server
    let listener = bind_with_fallback(&config.server).context("Failed to bind")?;
    let address = listener.local_addr()?;

    let server_config = config.server.clone();
    let mut server = HttpServer::new(move || create_app(state.clone(), &server_config));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    tracing::info!(%address, "Server listening");
    let result = server.listen(listener)?.run().await;

    tracing::info!("HTTP server stopped, closing database pool");
    db_pool.close().await;

    result.context("Server error")
}
