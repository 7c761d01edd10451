use actix_web::{web, HttpResponse};

use bt_core::repositories::{BookRepository, UserRepository};

use crate::app::AppState;
use crate::dto::auth::{LoginRequest, TokenResponse};
use crate::handlers::error::ApiError;

/// Handler for POST /api/auth/login
///
/// An unknown username and a wrong password produce the same
/// 401 "invalid credentials".
pub async fn login<U, B>(
    state: web::Data<AppState<U, B>>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    B: BookRepository + 'static,
{
    let token = state
        .auth_service
        .login(request.into_inner().into())
        .await
        .map_err(|e| state.error(e))?;

    Ok(HttpResponse::Ok().json(TokenResponse { token }))
}
