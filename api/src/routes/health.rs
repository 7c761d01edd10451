use actix_web::HttpResponse;

use crate::handlers::error::ApiError;
use bt_core::errors::DomainError;

pub const BANNER: &str = "📚 Personal Book Tracker API running";

/// GET /
pub async fn banner() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(BANNER)
}

/// GET /api/health
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "ok": true }))
}

/// Fallback for unmatched routes
pub async fn not_found() -> Result<HttpResponse, ApiError> {
    Err(DomainError::not_found("Route").into())
}
