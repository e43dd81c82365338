//! Todo-specific error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Errors raised by list and todo operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoError {
    /// A name failed the length check.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Another list in the session already has this name.
    #[error("The list name must be unique.")]
    DuplicateListName(String),

    /// No list at this position (or a stale id guard did not match).
    #[error("The specified list was not found.")]
    ListNotFound { position: usize },

    /// No todo at this position within the list.
    #[error("The specified todo was not found.")]
    TodoNotFound {
        list_position: usize,
        todo_position: usize,
    },

    /// The session expired between lookup and use.
    #[error("Your session has expired.")]
    SessionNotFound,

    /// Store or renderer failure.
    #[error("Something went wrong: {0}")]
    Infrastructure(String),
}

impl TodoError {
    pub fn list_not_found(position: usize) -> Self {
        TodoError::ListNotFound { position }
    }

    pub fn todo_not_found(list_position: usize, todo_position: usize) -> Self {
        TodoError::TodoNotFound {
            list_position,
            todo_position,
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        TodoError::Infrastructure(message.into())
    }

    /// True for errors the user fixes by editing the form they submitted.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            TodoError::Validation(_) | TodoError::DuplicateListName(_)
        )
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            TodoError::Validation(_) => ErrorCode::ValidationFailed,
            TodoError::DuplicateListName(_) => ErrorCode::DuplicateName,
            TodoError::ListNotFound { .. } => ErrorCode::ListNotFound,
            TodoError::TodoNotFound { .. } => ErrorCode::TodoNotFound,
            TodoError::SessionNotFound => ErrorCode::SessionNotFound,
            TodoError::Infrastructure(_) => ErrorCode::InternalError,
        }
    }
}

impl From<DomainError> for TodoError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::SessionNotFound => TodoError::SessionNotFound,
            _ => TodoError::Infrastructure(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_keeps_field_message() {
        let err: TodoError = ValidationError::length_out_of_range("todo name", 1, 100, 101).into();
        assert_eq!(
            err.to_string(),
            "The todo name must be between 1 and 100 characters."
        );
        assert!(err.is_validation());
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
    }

    #[test]
    fn not_found_errors_are_not_validation() {
        assert!(!TodoError::list_not_found(3).is_validation());
        assert!(!TodoError::todo_not_found(0, 9).is_validation());
        assert_eq!(
            TodoError::list_not_found(3).to_string(),
            "The specified list was not found."
        );
    }

    #[test]
    fn domain_session_not_found_maps_across() {
        let err = DomainError::new(ErrorCode::SessionNotFound, "gone");
        assert_eq!(TodoError::from(err), TodoError::SessionNotFound);
    }

    #[test]
    fn other_domain_errors_become_infrastructure() {
        let err = DomainError::new(ErrorCode::RenderFailed, "boom");
        assert!(matches!(TodoError::from(err), TodoError::Infrastructure(_)));
    }
}
