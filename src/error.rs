//! Error types for Libris server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate ISBN: {0}")]
    DuplicateIsbn(String),

    #[error("Duplicate mapping: {0}")]
    DuplicateMapping(String),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Translate a database error into a typed outcome by inspecting the
    /// violated constraint. Every write path that can trip a uniqueness or
    /// foreign-key constraint routes its error through here.
    pub fn from_constraint(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(ref db) = err {
            match db.constraint() {
                Some("books_isbn_key") => {
                    return AppError::DuplicateIsbn(
                        "A book with this ISBN already exists".to_string(),
                    );
                }
                Some("library_books_lib_id_book_id_key") => {
                    return AppError::DuplicateMapping(
                        "This book is already mapped to this library".to_string(),
                    );
                }
                Some("library_books_lib_id_fkey") => {
                    return AppError::NotFound("Library not found".to_string());
                }
                Some("library_books_book_id_fkey") => {
                    return AppError::NotFound("Book not found".to_string());
                }
                Some(name) => {
                    return AppError::ConstraintViolation(format!(
                        "Constraint {} violated",
                        name
                    ));
                }
                None => {}
            }
        }
        AppError::Database(err)
    }
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg.clone()),
            AppError::DuplicateIsbn(msg) => (StatusCode::CONFLICT, "duplicate_isbn", msg.clone()),
            AppError::DuplicateMapping(msg) => {
                (StatusCode::CONFLICT, "duplicate_mapping", msg.clone())
            }
            AppError::ConstraintViolation(msg) => {
                (StatusCode::CONFLICT, "constraint_violation", msg.clone())
            }
            AppError::Validation(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "validation", msg.clone())
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "database",
                    "Database error".to_string(),
                )
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal",
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            message,
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
