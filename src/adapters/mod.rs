//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - axum router, page handlers, and session middleware
//! - `render` - HTML rendering of page views
//! - `session_store` - In-memory session storage and the expiry sweeper

pub mod http;
pub mod render;
pub mod session_store;

pub use http::{app_router, SessionCookie, TodoAppState};
pub use render::HtmlRenderer;
pub use session_store::{InMemorySessionStore, SessionSweeper};
