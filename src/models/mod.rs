use serde::{Deserialize, Serialize};

/// Row from the `book` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub book_id: i64,
    pub title: String,
    pub author_id: Option<i64>,
    pub rating: Option<f64>,
    pub rating_count: Option<i64>,
    pub review_count: Option<i64>,
    pub description: Option<String>,
    pub pages: Option<i64>,
    pub date_of_publication: Option<String>,
    pub edition_language: Option<String>,
    pub price: Option<f64>,
    pub online_stores: Option<String>,
}

/// Request body for creating or replacing a book.
///
/// Every column except `book_id`. Missing optional keys are stored as NULL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookPayload {
    pub title: String,
    #[serde(default)]
    pub author_id: Option<i64>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub rating_count: Option<i64>,
    #[serde(default)]
    pub review_count: Option<i64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub pages: Option<i64>,
    #[serde(default)]
    pub date_of_publication: Option<String>,
    #[serde(default)]
    pub edition_language: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub online_stores: Option<String>,
}

impl BookPayload {
    /// Attach a store-assigned id
    pub fn into_book(self, book_id: i64) -> Book {
        Book {
            book_id,
            title: self.title,
            author_id: self.author_id,
            rating: self.rating,
            rating_count: self.rating_count,
            review_count: self.review_count,
            description: self.description,
            pages: self.pages,
            date_of_publication: self.date_of_publication,
            edition_language: self.edition_language,
            price: self.price,
            online_stores: self.online_stores,
        }
    }
}

/// Response for POST /books
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedBook {
    pub book_id: i64,
}
