use axum::{
    extract::{rejection::PathRejection, Path, State},
    response::Json,
};
use crate::db::BookStore;
use crate::error::ApiError;
use crate::models::Book;

// GET /authors/:authorId/books/ - List an author's books
pub async fn get_author_books(
    State(store): State<BookStore>,
    author_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Vec<Book>>, ApiError> {
    let Path(author_id) = author_id?;

    let books = store
        .list_books_by_author(author_id)
        .await
        .map_err(ApiError::database("Failed to fetch author books"))?;

    Ok(Json(books))
}
