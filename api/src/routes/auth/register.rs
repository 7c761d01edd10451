use actix_web::{web, HttpResponse};
use validator::Validate;

use bt_core::repositories::{BookRepository, UserRepository};

use crate::app::AppState;
use crate::dto::auth::{RegisterRequest, UserResponse};
use crate::handlers::error::ApiError;

/// Handler for POST /api/auth/register
///
/// # Request Body
///
/// ```json
/// {
///     "username": "alice1",
///     "password": "Abcdef1!",
///     "firstName": "Alice",
///     "lastName": "Liddell",
///     "email": "alice@gmail.com",
///     "mobile": "0123456789"
/// }
/// ```
///
/// # Responses
///
/// - 201 with the created user (no password digest)
/// - 400 for a missing field or a credential rule violation
/// - 409 when the username or email is taken
pub async fn register<U, B>(
    state: web::Data<AppState<U, B>>,
    request: web::Json<RegisterRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    B: BookRepository + 'static,
{
    let request = request.into_inner();
    request.validate()?;

    let user = state
        .auth_service
        .register(request.into())
        .await
        .map_err(|e| state.error(e))?;

    Ok(HttpResponse::Created().json(UserResponse::from(user)))
}
