//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! that form the vocabulary of the to-do domain.

mod errors;
mod ids;
mod item_name;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{IdSequence, ListId, SessionId, TodoId};
pub use item_name::{ItemName, MAX_NAME_LENGTH, MIN_NAME_LENGTH};
pub use timestamp::Timestamp;
