use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use crate::models::{Book, BookPayload};

// Every column is cast to the type `Book` decodes, so tables declared with
// other affinities (NUMERIC, DATE, ...) still read back cleanly.
macro_rules! select_books {
    () => {
        r#"SELECT
               CAST(book_id AS INTEGER) AS book_id,
               CAST(title AS TEXT) AS title,
               CAST(author_id AS INTEGER) AS author_id,
               CAST(rating AS REAL) AS rating,
               CAST(rating_count AS INTEGER) AS rating_count,
               CAST(review_count AS INTEGER) AS review_count,
               CAST(description AS TEXT) AS description,
               CAST(pages AS INTEGER) AS pages,
               CAST(date_of_publication AS TEXT) AS date_of_publication,
               CAST(edition_language AS TEXT) AS edition_language,
               CAST(price AS REAL) AS price,
               CAST(online_stores AS TEXT) AS online_stores
           FROM book"#
    };
}

/// Handle to the book store.
///
/// Holds a pool capped at a single connection that never idles out, so one
/// SQLite connection serves every request for the lifetime of the process.
/// Cloning shares that connection.
#[derive(Debug, Clone)]
pub struct BookStore {
    pool: SqlitePool,
}

impl BookStore {
    /// Open the database at `database_url`, creating the file if needed
    pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    /// Raw pool access for callers that need SQL outside the book statements
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Close the connection; later calls fail with `PoolClosed`
    pub async fn close(&self) {
        self.pool.close().await;
    }

    /// Create the `book` table when it does not exist yet
    pub async fn init_schema(&self) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"CREATE TABLE IF NOT EXISTS book (
                   book_id INTEGER PRIMARY KEY AUTOINCREMENT,
                   title TEXT NOT NULL,
                   author_id INTEGER,
                   rating REAL,
                   rating_count INTEGER,
                   review_count INTEGER,
                   description TEXT,
                   pages INTEGER,
                   date_of_publication TEXT,
                   edition_language TEXT,
                   price REAL,
                   online_stores TEXT
               )"#
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn list_books(&self) -> Result<Vec<Book>, sqlx::Error> {
        sqlx::query_as::<_, Book>(
            concat!(select_books!(), " ORDER BY book_id")
        )
        .fetch_all(&self.pool)
        .await
    }

    pub async fn get_book(&self, book_id: i64) -> Result<Option<Book>, sqlx::Error> {
        sqlx::query_as::<_, Book>(
            concat!(select_books!(), " WHERE book_id = ?")
        )
        .bind(book_id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Insert a book and return the id the store assigned to it
    pub async fn create_book(&self, book: &BookPayload) -> Result<i64, sqlx::Error> {
        let result = sqlx::query(
            r#"INSERT INTO book (title, author_id, rating, rating_count, review_count, description,
                   pages, date_of_publication, edition_language, price, online_stores)
               VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"#
        )
        .bind(&book.title)
        .bind(book.author_id)
        .bind(book.rating)
        .bind(book.rating_count)
        .bind(book.review_count)
        .bind(&book.description)
        .bind(book.pages)
        .bind(&book.date_of_publication)
        .bind(&book.edition_language)
        .bind(book.price)
        .bind(&book.online_stores)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Replace every column of a book, returning the number of rows touched
    pub async fn update_book(&self, book_id: i64, book: &BookPayload) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r#"UPDATE book
               SET
                   title = ?,
                   author_id = ?,
                   rating = ?,
                   rating_count = ?,
                   review_count = ?,
                   description = ?,
                   pages = ?,
                   date_of_publication = ?,
                   edition_language = ?,
                   price = ?,
                   online_stores = ?
               WHERE book_id = ?"#
        )
        .bind(&book.title)
        .bind(book.author_id)
        .bind(book.rating)
        .bind(book.rating_count)
        .bind(book.review_count)
        .bind(&book.description)
        .bind(book.pages)
        .bind(&book.date_of_publication)
        .bind(&book.edition_language)
        .bind(book.price)
        .bind(&book.online_stores)
        .bind(book_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    pub async fn delete_book(&self, book_id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r#"DELETE FROM book WHERE book_id = ?"#
        )
        .bind(book_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    // No ORDER BY: rows come back in whatever order SQLite scans them
    pub async fn list_books_by_author(&self, author_id: i64) -> Result<Vec<Book>, sqlx::Error> {
        sqlx::query_as::<_, Book>(
            concat!(select_books!(), " WHERE author_id = ?")
        )
        .bind(author_id)
        .fetch_all(&self.pool)
        .await
    }
}
