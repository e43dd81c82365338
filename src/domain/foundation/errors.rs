//! Error types for the domain layer.

use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("The {field} must be between {min} and {max} characters.")]
    LengthOutOfRange {
        field: String,
        min: usize,
        max: usize,
        actual: usize,
    },
}

impl ValidationError {
    /// Creates a length out of range validation error.
    pub fn length_out_of_range(
        field: impl Into<String>,
        min: usize,
        max: usize,
        actual: usize,
    ) -> Self {
        ValidationError::LengthOutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,
    DuplicateName,

    // Not found errors
    SessionNotFound,
    ListNotFound,
    TodoNotFound,

    // Infrastructure errors
    RenderFailed,
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::DuplicateName => "DUPLICATE_NAME",
            ErrorCode::SessionNotFound => "SESSION_NOT_FOUND",
            ErrorCode::ListNotFound => "LIST_NOT_FOUND",
            ErrorCode::TodoNotFound => "TODO_NOT_FOUND",
            ErrorCode::RenderFailed => "RENDER_FAILED",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code and message.
///
/// Ports report failures with this type; the todo module converts it into
/// its own error enum at the application boundary.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}
