//! Application state and factory
//!
//! This module holds the shared application state and builds the
//! Actix-web application around it. The binary and the integration tests
//! both go through [`create_app`].

use std::sync::Arc;

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App,
};
use tracing_actix_web::TracingLogger;

use bt_core::errors::DomainError;
use bt_core::repositories::{BookRepository, UserRepository};
use bt_core::services::{AuthService, BookService};
use bt_shared::{Environment, ServerConfig};

use crate::handlers::error::{json_error_handler, path_error_handler, query_error_handler, ApiError};
use crate::middleware::{auth::JwtAuth, cors::create_cors, security::SecurityHeaders};
use crate::routes::auth::{login, register};
use crate::routes::books::{
    book_summary, create_book, delete_book, get_book, list_books, update_book,
};
use crate::routes::health::{banner, health, not_found};

/// Services shared by every worker
pub struct AppState<U: UserRepository, B: BookRepository> {
    pub auth_service: Arc<AuthService<U>>,
    pub book_service: Arc<BookService<B>>,
    pub environment: Environment,
}

impl<U: UserRepository, B: BookRepository> AppState<U, B> {
    pub fn new(
        auth_service: Arc<AuthService<U>>,
        book_service: Arc<BookService<B>>,
        environment: Environment,
    ) -> Self {
        Self {
            auth_service,
            book_service,
            environment,
        }
    }

    /// Wrap a service failure for the response, exposing internal detail
    /// outside production only
    pub fn error(&self, error: impl Into<DomainError>) -> ApiError {
        ApiError::domain(error, !self.environment.is_production())
    }
}

/// Create and configure the application with all dependencies
pub fn create_app<U, B>(
    state: web::Data<AppState<U, B>>,
    server: &ServerConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    B: BookRepository + 'static,
{
    let environment = state.environment;
    let tokens = Arc::clone(state.auth_service.token_service());

    App::new()
        .app_data(state)
        .app_data(
            web::JsonConfig::default()
                .limit(server.max_payload_size)
                .error_handler(json_error_handler),
        )
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        // Registration order is inside-out: the last wrap sees the request first
        .wrap(SecurityHeaders::for_environment(environment))
        .wrap(create_cors(environment, &server.cors_allowed_origins))
        .wrap(TracingLogger::default())
        .route("/", web::get().to(banner))
        .service(
            web::scope("/api")
                .route("/health", web::get().to(health))
                .service(
                    web::scope("/auth")
                        .route("/register", web::post().to(register::<U, B>))
                        .route("/login", web::post().to(login::<U, B>)),
                )
                .service(
                    web::scope("/books")
                        .wrap(JwtAuth::new(tokens))
                        .route("", web::get().to(list_books::<U, B>))
                        .route("", web::post().to(create_book::<U, B>))
                        // Must precede `/{id}`
                        .route("/summary", web::get().to(book_summary::<U, B>))
                        .route("/{id}", web::get().to(get_book::<U, B>))
                        .route("/{id}", web::put().to(update_book::<U, B>))
                        .route("/{id}", web::delete().to(delete_book::<U, B>)),
                ),
        )
        .default_service(web::route().to(not_found))
}
