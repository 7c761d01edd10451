use actix_web::{web, HttpResponse};
use validator::Validate;

use bt_core::repositories::{BookRepository, UserRepository};

use crate::app::AppState;
use crate::dto::book::BookListQuery;
use crate::handlers::error::ApiError;
use crate::middleware::auth::AuthenticatedUser;

/// Handler for GET /api/books
///
/// Optional `q` and `status` query parameters narrow the list. Results are
/// newest first.
pub async fn list_books<U, B>(
    state: web::Data<AppState<U, B>>,
    user: AuthenticatedUser,
    query: web::Query<BookListQuery>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    B: BookRepository + 'static,
{
    let query = query.into_inner();
    query.validate()?;
    let query = query.into_query().map_err(|e| state.error(e))?;

    let books = state
        .book_service
        .list(user.identity(), query)
        .await
        .map_err(|e| state.error(e))?;

    Ok(HttpResponse::Ok().json(books))
}

/// Handler for GET /api/books/summary
pub async fn book_summary<U, B>(
    state: web::Data<AppState<U, B>>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    B: BookRepository + 'static,
{
    let summary = state
        .book_service
        .summary(user.identity())
        .await
        .map_err(|e| state.error(e))?;

    Ok(HttpResponse::Ok().json(summary))
}

/// Handler for GET /api/books/{id}
pub async fn get_book<U, B>(
    state: web::Data<AppState<U, B>>,
    user: AuthenticatedUser,
    id: web::Path<u64>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    B: BookRepository + 'static,
{
    let book = state
        .book_service
        .get(user.identity(), id.into_inner())
        .await
        .map_err(|e| state.error(e))?;

    Ok(HttpResponse::Ok().json(book))
}
