//! Translation of domain failures into HTTP responses
//!
//! Every error body leaving the server is built here, as a
//! [`bt_shared::ErrorResponse`] `{error, message, timestamp}`.

use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use bt_core::errors::DomainError;
use bt_shared::{error_codes, ErrorResponse};
use thiserror::Error;
use validator::ValidationErrors;

/// Error returned by every handler and by the auth middleware
#[derive(Debug, Error)]
pub enum ApiError {
    /// A failure raised by a service
    #[error("{error}")]
    Domain {
        error: DomainError,
        /// Whether internal failure detail may be shown to the client
        expose_internal: bool,
    },

    /// The request could not be decoded (bad JSON, bad query string)
    #[error("{message}")]
    BadRequest { message: String },

    /// Field-level constraints on a request DTO failed
    #[error("{0}")]
    InvalidFields(ValidationErrors),
}

impl ApiError {
    pub fn domain(error: impl Into<DomainError>, expose_internal: bool) -> Self {
        ApiError::Domain {
            error: error.into(),
            expose_internal,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest {
            message: message.into(),
        }
    }

    /// Machine-readable code for the response body
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Domain { error, .. } => error.error_code(),
            ApiError::BadRequest { .. } => error_codes::BAD_REQUEST,
            ApiError::InvalidFields(_) => error_codes::VALIDATION_ERROR,
        }
    }

    fn body(&self) -> ErrorResponse {
        match self {
            ApiError::Domain {
                error,
                expose_internal,
            } => ErrorResponse::new(self.error_code(), error.client_message(*expose_internal)),
            ApiError::BadRequest { message } => ErrorResponse::new(self.error_code(), message),
            ApiError::InvalidFields(errors) => {
                let mut fields: Vec<&str> = errors.field_errors().into_keys().collect();
                fields.sort_unstable();
                ErrorResponse::new(
                    self.error_code(),
                    format!("Invalid value for: {}", fields.join(", ")),
                )
                .add_detail("fields", fields)
            }
        }
    }
}

impl From<DomainError> for ApiError {
    /// Internal detail stays hidden unless the caller opts in with [`ApiError::domain`]
    fn from(error: DomainError) -> Self {
        ApiError::domain(error, false)
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::InvalidFields(errors)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self.error_code() {
            error_codes::BAD_REQUEST | error_codes::VALIDATION_ERROR => StatusCode::BAD_REQUEST,
            error_codes::UNAUTHORIZED => StatusCode::UNAUTHORIZED,
            error_codes::NOT_FOUND => StatusCode::NOT_FOUND,
            error_codes::CONFLICT => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::Domain { error, .. } if error.is_internal() => {
                tracing::error!(error = %error, "Request failed");
            }
            other => {
                tracing::debug!(code = other.error_code(), error = %other, "Request rejected");
            }
        }

        HttpResponse::build(self.status_code()).json(self.body())
    }
}

/// Malformed or oversized JSON bodies become a 400 `BAD_REQUEST`
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::bad_request(format!("Invalid JSON body: {}", err)).into()
}

/// Unparseable query strings become a 400 `BAD_REQUEST`
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::bad_request(format!("Invalid query string: {}", err)).into()
}

/// A path segment that is not a valid id cannot name an existing resource
pub fn path_error_handler(_err: PathError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::from(DomainError::not_found("Book")).into()
}
