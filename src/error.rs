use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Errors a handler can return; each renders as `{"error": "..."}`
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(&'static str),

    #[error("{context}: {source}")]
    Database {
        context: &'static str,
        #[source]
        source: sqlx::Error,
    },

    #[error(transparent)]
    InvalidPayload(#[from] JsonRejection),

    #[error(transparent)]
    InvalidPath(#[from] PathRejection),
}

impl ApiError {
    /// Build a `map_err` adapter that tags a driver error with a client-facing message
    pub fn database(context: &'static str) -> impl FnOnce(sqlx::Error) -> Self {
        move |source| ApiError::Database { context, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Database { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::InvalidPayload(rejection) => rejection.status(),
            ApiError::InvalidPath(rejection) => rejection.status(),
        }
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let error = match self {
            ApiError::NotFound(message) => {
                tracing::debug!("{}", message);
                message.to_string()
            }
            ApiError::Database { context, source } => {
                tracing::error!("{}: {}", context, source);
                context.to_string()
            }
            ApiError::InvalidPayload(rejection) => rejection.body_text(),
            ApiError::InvalidPath(rejection) => rejection.body_text(),
        };

        (status, Json(ErrorResponse { error })).into_response()
    }
}

/// Failures that abort the process before it starts serving
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    Config(#[from] crate::config::ConfigError),

    #[error("DB Error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}
