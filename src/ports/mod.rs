//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `SessionStore` - Holds browser sessions between requests
//! - `ViewRenderer` - Turns read models into HTML pages

mod session_store;
mod view_renderer;

pub use session_store::{SessionHandle, SessionStore};
pub use view_renderer::{
    ListDetailView, ListSummaryView, Page, PageView, TodoView, ViewRenderer,
};
