//! Book API endpoints

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::{AppError, AppResult},
    models::Book,
    AppState,
};

fn parse_id(raw: &str) -> Option<i64> {
    raw.parse().ok()
}

/// Welcome page
#[utoipa::path(
    get,
    path = "/",
    tag = "books",
    responses(
        (status = 200, description = "Welcome text", body = String)
    )
)]
pub async fn welcome(State(state): State<AppState>) -> String {
    state.config.server.welcome_message.clone()
}

/// List all books
#[utoipa::path(
    get,
    path = "/Livros",
    tag = "books",
    responses(
        (status = 200, description = "Books in collection order", body = Vec<Book>)
    )
)]
pub async fn list_books(State(state): State<AppState>) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.books.list().await?;
    Ok(Json(books))
}

/// Get book by ID
///
/// An id that is not an integer simply matches nothing.
#[utoipa::path(
    get,
    path = "/livros/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "No book with this id")
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Book>> {
    let book_id = parse_id(&id)
        .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))?;
    let book = state.services.books.get_by_id(book_id).await?;
    Ok(Json(book))
}

/// Create a book
///
/// Fields that are missing or not strings are stored empty; the id in the
/// body, if any, is ignored.
#[utoipa::path(
    post,
    path = "/livros",
    tag = "books",
    request_body = Book,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, description = "Request body could not be read")
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> AppResult<(StatusCode, Json<Book>)> {
    let body = body.map_err(|e| AppError::BadRequest(format!("Unreadable request body: {}", e)))?;
    let book = state
        .services
        .books
        .create(Book::from_lenient_json(&body))
        .await?;
    Ok((StatusCode::CREATED, Json(book)))
}

/// Replace a book
///
/// Missing or `null` fields are stored empty, and `null` as the whole body
/// stores an empty book.
#[utoipa::path(
    put,
    path = "/livros/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book ID")),
    request_body = Book,
    responses(
        (status = 200, description = "Book replaced", body = Book),
        (status = 400, description = "Invalid id or body"),
        (status = 404, description = "No book with this id"),
        (status = 500, description = "Request body could not be read")
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Bytes, BytesRejection>,
) -> AppResult<Json<Book>> {
    let book_id = parse_id(&id)
        .ok_or_else(|| AppError::BadRequest(format!("Invalid book id: {}", id)))?;
    let body = body.map_err(|e| AppError::Internal(format!("Unreadable request body: {}", e)))?;
    let book = Book::from_json(&body)
        .map_err(|e| AppError::BadRequest(format!("Invalid book payload: {}", e)))?;

    let book = state.services.books.update(book_id, book).await?;
    Ok(Json(book))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/livros/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book ID")),
    responses(
        (status = 204, description = "Book deleted"),
        (status = 400, description = "Invalid id"),
        (status = 404, description = "No book with this id")
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let book_id = parse_id(&id)
        .ok_or_else(|| AppError::BadRequest(format!("Invalid book id: {}", id)))?;
    state.services.books.delete(book_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42"), Some(42));
        assert_eq!(parse_id("-3"), Some(-3));
        assert_eq!(parse_id("abc"), None);
        assert_eq!(parse_id(""), None);
    }
}
