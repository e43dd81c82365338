//! HTTP adapter for the to-do list pages and forms.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{AddTodoForm, NewListForm, RecordGuard, RenameListForm, TodoStatusForm};
pub use handlers::TodoAppState;
pub use routes::list_routes;
