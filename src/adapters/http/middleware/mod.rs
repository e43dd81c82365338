//! HTTP middleware for axum.
//!
//! This module contains middleware layers for cross-cutting concerns:
//!
//! - `session` - Session cookie resolution and the `CurrentSession` extractor

pub mod session;

pub use session::{
    session_middleware, CurrentSession, SessionCookie, SessionLayerState, SessionRejection,
};
