//! Centralized error handling.
//!
//! Provides a unified error type for the entire application,
//! with automatic HTTP response conversion. The `code()` values are
//! the stable machine-readable contract clients branch on; message
//! text may change freely.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Input validation
    #[error("Missing required fields: id, first_name, last_name, birthday")]
    MissingFields,

    #[error("User ID is required")]
    IdRequired,

    #[error("User ID must be a positive integer")]
    IdNotPositiveInteger,

    #[error("Please provide a valid date in DD/MM/YYYY format")]
    BadDateFormat,

    #[error("Birthday cannot be in the future")]
    FutureDate,

    #[error("Birthday cannot be before year 1900")]
    DateTooOld,

    // State conflicts
    #[error("User with ID {0} already exists")]
    UserExists(i64),

    #[error("User not found")]
    UserNotFound,

    // Resource errors
    #[error("Endpoint not found")]
    NotFound,

    // Dependency errors
    #[error("Unable to fetch users")]
    ListUnavailable,

    #[error("Database error")]
    Database(#[from] sea_orm::DbErr),

    #[error("Cost service unavailable: {0}")]
    CostSource(String),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: String,
    message: String,
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::MissingFields => "MISSING_FIELDS",
            AppError::IdRequired => "ID_REQUIRED",
            AppError::IdNotPositiveInteger => "ID_NOT_POSITIVE_INTEGER",
            AppError::BadDateFormat => "BAD_DATE_FORMAT",
            AppError::FutureDate => "FUTURE_DATE",
            AppError::DateTooOld => "DATE_TOO_OLD",
            AppError::UserExists(_) => "USER_EXISTS",
            AppError::UserNotFound => "USER_NOT_FOUND",
            AppError::NotFound => "NOT_FOUND",
            AppError::ListUnavailable => "LIST_UNAVAILABLE",
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::CostSource(_) => "COST_SOURCE_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get HTTP status code
    fn status(&self) -> StatusCode {
        match self {
            AppError::MissingFields
            | AppError::IdRequired
            | AppError::IdNotPositiveInteger
            | AppError::BadDateFormat
            | AppError::FutureDate
            | AppError::DateTooOld
            | AppError::UserExists(_) => StatusCode::BAD_REQUEST,
            AppError::UserNotFound | AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::ListUnavailable
            | AppError::Database(_)
            | AppError::CostSource(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    fn user_message(&self) -> String {
        match self {
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "A database error occurred".to_string()
            }
            AppError::CostSource(e) => {
                tracing::error!("Cost service error: {}", e);
                "Cost service unavailable".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }

            // Client errors carry their full message
            _ => self.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.code().to_string(),
                message: self.user_message(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn cost_source(msg: impl Into<String>) -> Self {
        AppError::CostSource(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
