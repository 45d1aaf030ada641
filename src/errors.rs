//! Centralized error handling.
//!
//! Provides a unified error type for the entire application.

use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Validation
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // Registration conflicts
    #[error("An account with this email already exists")]
    DuplicateAccount,

    // Authentication lookups
    #[error("No account found for the given identifier")]
    PrincipalNotFound,

    // Storage-engine integrity reports
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    // External service errors
    #[error("Database error")]
    Database(#[from] sea_orm::DbErr),

    // Internal
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Get error code for callers that log or report failures
    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) => "INVALID_INPUT",
            AppError::DuplicateAccount => "DUPLICATE_ACCOUNT",
            AppError::PrincipalNotFound => "PRINCIPAL_NOT_FOUND",
            AppError::ConstraintViolation(_) => "CONSTRAINT_VIOLATION",
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        AppError::InvalidInput(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
