use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::Json,
};
use crate::db::BookStore;
use crate::error::ApiError;
use crate::models::{Book, BookPayload, CreatedBook};

// GET /books - List all books ordered by id
pub async fn get_books(
    State(store): State<BookStore>,
) -> Result<Json<Vec<Book>>, ApiError> {
    let books = store
        .list_books()
        .await
        .map_err(ApiError::database("Failed to fetch books"))?;

    Ok(Json(books))
}

// GET /books/:bookId - Get book by ID
pub async fn get_book(
    State(store): State<BookStore>,
    book_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Book>, ApiError> {
    let Path(book_id) = book_id?;

    let book = store
        .get_book(book_id)
        .await
        .map_err(ApiError::database("Failed to fetch book"))?
        .ok_or(ApiError::NotFound("Book not found"))?;

    Ok(Json(book))
}

// POST /books - Add a book, responds with the assigned id
pub async fn add_book(
    State(store): State<BookStore>,
    payload: Result<Json<BookPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedBook>), ApiError> {
    let Json(book) = payload?;

    let book_id = store
        .create_book(&book)
        .await
        .map_err(ApiError::database("Failed to add book"))?;

    tracing::info!(book_id, "book added");
    Ok((StatusCode::CREATED, Json(CreatedBook { book_id })))
}

/// PUT /books/:bookId - Replace every field of a book
///
/// SQLite counts a matched row as changed even when the values are identical,
/// so zero affected rows means the id does not exist.
pub async fn update_book(
    State(store): State<BookStore>,
    book_id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<BookPayload>, JsonRejection>,
) -> Result<&'static str, ApiError> {
    let Path(book_id) = book_id?;
    let Json(book) = payload?;

    let changes = store
        .update_book(book_id, &book)
        .await
        .map_err(ApiError::database("Failed to update book"))?;

    if changes == 0 {
        return Err(ApiError::NotFound("Book not found or no changes made"));
    }

    Ok("Book Updated Successfully")
}

/// DELETE /books/:bookId - Delete a book
///
/// Succeeds whether or not a row matched.
pub async fn delete_book(
    State(store): State<BookStore>,
    book_id: Result<Path<i64>, PathRejection>,
) -> Result<&'static str, ApiError> {
    let Path(book_id) = book_id?;

    let removed = store
        .delete_book(book_id)
        .await
        .map_err(ApiError::database("Failed to delete book"))?;

    tracing::debug!(book_id, removed, "delete issued");
    Ok("Book Deleted Successfully")
}
