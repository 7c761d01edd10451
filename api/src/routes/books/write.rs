use actix_web::{web, HttpResponse};
use validator::Validate;

use bt_core::repositories::{BookRepository, UserRepository};

use crate::app::AppState;
use crate::dto::book::{BookRequest, MessageResponse};
use crate::handlers::error::ApiError;
use crate::middleware::auth::AuthenticatedUser;

/// Handler for POST /api/books
///
/// `title` and `author` are required; `status` defaults to `to-read`.
pub async fn create_book<U, B>(
    state: web::Data<AppState<U, B>>,
    user: AuthenticatedUser,
    request: web::Json<BookRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    B: BookRepository + 'static,
{
    let request = request.into_inner();
    request.validate()?;
    let book = request.into_new_book().map_err(|e| state.error(e))?;

    let created = state
        .book_service
        .create(user.identity(), book)
        .await
        .map_err(|e| state.error(e))?;

    Ok(HttpResponse::Created().json(created))
}

/// Handler for PUT /api/books/{id}
///
/// Replaces title, author, status, review and favorite, and returns the
/// stored book.
pub async fn update_book<U, B>(
    state: web::Data<AppState<U, B>>,
    user: AuthenticatedUser,
    id: web::Path<u64>,
    request: web::Json<BookRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    B: BookRepository + 'static,
{
    let request = request.into_inner();
    request.validate()?;
    let update = request.into_update().map_err(|e| state.error(e))?;

    let book = state
        .book_service
        .update(user.identity(), id.into_inner(), update)
        .await
        .map_err(|e| state.error(e))?;

    Ok(HttpResponse::Ok().json(book))
}

/// Handler for DELETE /api/books/{id}
pub async fn delete_book<U, B>(
    state: web::Data<AppState<U, B>>,
    user: AuthenticatedUser,
    id: web::Path<u64>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    B: BookRepository + 'static,
{
    state
        .book_service
        .delete(user.identity(), id.into_inner())
        .await
        .map_err(|e| state.error(e))?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Book deleted")))
}
