//! # Error Handling Middleware
//!
//! This module provides a standardized way to handle errors in the Canchas API.
//! It maps [`BookingError`] values to HTTP status codes and JSON bodies of the
//! shape `{"detail": "...", "kind": "..."}`. Clients display `detail` as-is
//! and branch on `kind` to tell a double booking from a malformed request.
//!
//! Extractor rejections (malformed JSON, bad path or query parameters) are
//! folded into validation errors so every failure has the same body shape.

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use canchas_core::errors::BookingError;
use serde_json::json;
use tracing::error;

/// Application error wrapper that provides HTTP status code mapping
///
/// `AppError` wraps domain-specific `BookingError` instances and implements
/// `IntoResponse` to convert them into HTTP responses.
///
/// # Example
///
/// ```
/// use axum::Json;
/// use canchas_api::middleware::error_handling::AppError;
/// use canchas_core::errors::BookingError;
///
/// async fn handler(id: i64) -> Result<Json<i64>, AppError> {
///     if id <= 0 {
///         return Err(AppError(BookingError::NotFound(format!("Court with ID {id} not found"))));
///     }
///     Ok(Json(id))
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub BookingError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            BookingError::NotFound(_) => StatusCode::NOT_FOUND,
            // Conflicts share 400 with validation failures; `kind` tells them apart.
            BookingError::Validation(_) | BookingError::Conflict(_) => StatusCode::BAD_REQUEST,
            BookingError::Database(_) | BookingError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            error!(error = ?self.0, "request failed");
        }

        let body = Json(json!({
            "detail": self.0.detail(),
            "kind": self.0.kind(),
        }));

        (status, body).into_response()
    }
}

/// Automatic conversion from BookingError to AppError
///
/// This implementation allows using `?` operator with functions that return
/// `Result<T, BookingError>` in handler functions that return `Result<T, AppError>`.
impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        AppError(err)
    }
}

/// Automatic conversion from eyre::Report to AppError
///
/// It wraps the eyre error in a BookingError::Database variant.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(BookingError::Database(err))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError(BookingError::Validation(format!(
            "Invalid request body: {}",
            rejection.body_text()
        )))
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError(BookingError::Validation(format!(
            "Invalid path parameter: {}",
            rejection.body_text()
        )))
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError(BookingError::Validation(format!(
            "Invalid query parameters: {}",
            rejection.body_text()
        )))
    }
}

/// Maps a BookingError to an HTTP response
pub fn map_error(err: BookingError) -> Response {
    AppError(err).into_response()
}
