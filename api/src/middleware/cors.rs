//! CORS middleware configuration for cross-origin requests.
//!
//! The browser client runs on its own dev server, so development allows any
//! origin. Production only admits the origins listed in
//! `CORS_ALLOWED_ORIGINS`.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use bt_shared::Environment;

/// Preflight cache lifetime in seconds
const CORS_MAX_AGE: usize = 3600;

/// Creates a CORS middleware instance configured for the given environment.
pub fn create_cors(environment: Environment, allowed_origins: &[String]) -> Cors {
    if environment.is_production() {
        create_production_cors(allowed_origins)
    } else {
        create_development_cors()
    }
}

fn base_cors() -> Cors {
    Cors::default()
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allowed_headers(vec![header::AUTHORIZATION, header::ACCEPT, header::CONTENT_TYPE])
        .max_age(CORS_MAX_AGE)
}

/// Any origin is accepted; the client's dev server port varies.
fn create_development_cors() -> Cors {
    tracing::info!("Configuring CORS for development environment");
    base_cors().allow_any_origin()
}

/// Only configured origins are accepted.
fn create_production_cors(allowed_origins: &[String]) -> Cors {
    tracing::info!(
        origins = allowed_origins.len(),
        "Configuring CORS for production environment"
    );

    let mut cors = base_cors();
    for origin in allowed_origins
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
    {
        tracing::info!(origin = %origin, "Adding allowed origin");
        cors = cors.allowed_origin(origin);
    }

    if allowed_origins.is_empty() {
        tracing::warn!("No CORS origins configured; cross-origin requests will be rejected");
    }

    cors
}
