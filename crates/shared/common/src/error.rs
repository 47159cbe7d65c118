//! Unified error handling for the user store and its service layer.
//!
//! The taxonomy is closed: callers branch on the variant, never on the
//! rendered message.

use domain::{DomainError, UserId};
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// No user is stored under the requested id (never existed or deleted)
    #[error("User {id} not found")]
    NotFound { id: UserId },

    /// Input rejected before reaching the repository
    #[error("Validation error on `{field}`: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },
}

impl AppError {
    /// Get error code for callers
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound { .. } => "NOT_FOUND",
            AppError::Validation { .. } => "VALIDATION_ERROR",
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound { .. })
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::Validation { .. })
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation { field, message } => AppError::Validation { field, message },
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self, id: UserId) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self, id: UserId) -> AppResult<T> {
        self.ok_or(AppError::NotFound { id })
    }
}

/// Convenience constructors
impl AppError {
    pub fn not_found(id: UserId) -> Self {
        AppError::NotFound { id }
    }

    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        AppError::Validation {
            field,
            message: message.into(),
        }
    }
}
