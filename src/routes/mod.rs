use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use crate::db::BookStore;

pub mod authors;
pub mod books;
pub mod health;

/// Build the application router with the store injected as shared state
pub fn router(store: BookStore) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health_check))

        // Book endpoints
        .route("/books", get(books::get_books).post(books::add_book))
        .route(
            "/books/{book_id}",
            get(books::get_book)
                .put(books::update_book)
                .delete(books::delete_book),
        )

        // Author endpoints, reachable with or without the trailing slash
        .route("/authors/{author_id}/books", get(authors::get_author_books))
        .route("/authors/{author_id}/books/", get(authors::get_author_books))

        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}
