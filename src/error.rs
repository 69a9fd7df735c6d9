//! Error types for the Biblioteca server

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

    #[error("Duplicate loan: {0}")]
    DuplicateLoan(String),

    #[error("Out of stock: {0}")]
    OutOfStock(String),

    #[error("Uniqueness violation: {0}")]
    UniquenessViolation(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Database error: {0}")]
    Database(sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Machine-readable error kind, stable across message changes
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "not_found",
            AppError::DuplicateLoan(_) => "duplicate_loan",
            AppError::OutOfStock(_) => "out_of_stock",
            AppError::UniquenessViolation(_) => "uniqueness_violation",
            AppError::Validation(_) => "validation",
            AppError::Unauthorized(_) => "unauthorized",
            AppError::Database(_) => "database",
            AppError::Internal(_) => "internal",
        }
    }

    /// Replace the generic uniqueness message with a domain-specific one
    pub fn on_unique(self, message: impl Into<String>) -> Self {
        match self {
            AppError::UniquenessViolation(_) => AppError::UniquenessViolation(message.into()),
            other => other,
        }
    }
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            // SQLite reports constraint breaches as database errors with a
            // "UNIQUE constraint failed: <table>.<column>" message.
            sqlx::Error::Database(db_err)
                if db_err.message().contains("UNIQUE constraint failed") =>
            {
                let column = db_err
                    .message()
                    .split("UNIQUE constraint failed: ")
                    .nth(1)
                    .unwrap_or("key")
                    .to_string();
                AppError::UniquenessViolation(format!("value already exists for {}", column))
            }
            err => AppError::Database(err),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for AppError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        AppError::Internal(format!("migration failed: {}", err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DuplicateLoan(_) => StatusCode::BAD_REQUEST,
            AppError::OutOfStock(_) => StatusCode::CONFLICT,
            AppError::UniquenessViolation(_) => StatusCode::BAD_REQUEST,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let message = match &self {
            AppError::NotFound(msg)
            | AppError::DuplicateLoan(msg)
            | AppError::OutOfStock(msg)
            | AppError::UniquenessViolation(msg)
            | AppError::Validation(msg)
            | AppError::Unauthorized(msg) => msg.clone(),
            // Internal details stay in the logs
            AppError::Database(_) => "Database error".to_string(),
            AppError::Internal(_) => "Internal server error".to_string(),
        };

        let body = Json(ErrorResponse {
            error: self.kind().to_string(),
            message,
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
