//! Centralized error handling.
//!
//! Provides a unified error type for the repository and its callers.
//! Backend failures are carried through untranslated; turning an absent
//! lookup into [`AppError::NotFound`] is left to the caller.

use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Resource errors
    #[error("Resource not found")]
    NotFound,

    #[error("{0} already exists")]
    Conflict(String),

    // Validation
    #[error("{0}")]
    Validation(String),

    // Backend errors
    #[error("Database error")]
    Database(#[from] sea_orm::DbErr),

    #[error("Integrity violation: {0}")]
    IntegrityViolation(String),

    // Internal
    #[error("Internal error")]
    Internal(String),
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound => "NOT_FOUND",
            AppError::Conflict(_) => "CONFLICT",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::IntegrityViolation(_) => "INTEGRITY_VIOLATION",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// True when the backing store failed to answer the query.
    pub fn is_backend_failure(&self) -> bool {
        matches!(self, AppError::Database(_))
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            // Show full message for client errors
            AppError::Validation(msg) => msg.clone(),

            // Hide details for internal errors
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "A database error occurred".to_string()
            }
            AppError::IntegrityViolation(msg) => {
                tracing::error!("Integrity violation: {}", msg);
                "Stored data is inconsistent".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }

            // Use default message for others
            _ => self.to_string(),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self) -> AppResult<T> {
        self.ok_or(AppError::NotFound)
    }
}

/// Convenience constructors
impl AppError {
    pub fn conflict(entity: impl Into<String>) -> Self {
        AppError::Conflict(entity.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn integrity(msg: impl Into<String>) -> Self {
        AppError::IntegrityViolation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use sea_orm::{DbErr, RuntimeErr};

    use super::*;

    #[test]
    fn test_database_error_keeps_cause() {
        let err = AppError::from(DbErr::Conn(RuntimeErr::Internal("connection refused".into())));

        assert!(err.is_backend_failure());
        assert_eq!(err.code(), "DATABASE_ERROR");
        let source = err.source().expect("database error should carry its cause");
        assert!(source.to_string().contains("connection refused"));
    }

    #[test]
    fn test_user_message_hides_details() {
        let err = AppError::integrity("2 rows for username 'alice'");
        assert_eq!(err.user_message(), "Stored data is inconsistent");
        assert!(!err.is_backend_failure());
    }

    #[test]
    fn test_conflict_message() {
        let err = AppError::conflict("Username");
        assert_eq!(err.to_string(), "Username already exists");
        assert_eq!(err.code(), "CONFLICT");
    }

    #[test]
    fn test_ok_or_not_found() {
        let missing: Option<u8> = None;
        assert!(matches!(missing.ok_or_not_found(), Err(AppError::NotFound)));
        assert_eq!(Some(3u8).ok_or_not_found().unwrap(), 3);
    }
}
