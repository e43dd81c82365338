//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (ids, names, timestamps, errors)
//! - `todo` - Lists, todos, validation rules, and derived view queries
//! - `session` - Browser session lifecycle and flash messages

pub mod foundation;
pub mod session;
pub mod todo;
