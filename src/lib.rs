//! JSON-over-HTTP CRUD service for a SQLite `book` table.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;

pub use config::Config;
pub use db::BookStore;
pub use error::{ApiError, StartupError};
pub use routes::router;
