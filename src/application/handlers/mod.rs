//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations against
//! the caller's session.

pub mod list;
mod session_scope;
pub mod session;
pub mod todo;

pub use list::{
    CreateListCommand, CreateListHandler, CreateListResult, DeleteListCommand, DeleteListHandler,
    DeleteListResult, GetListHandler, GetListQuery, GetListResult, ListListsHandler,
    ListListsQuery, ListListsResult, RenameListCommand, RenameListHandler, RenameListResult,
};
pub use session::{TakeFlashHandler, TakeFlashQuery};
pub use todo::{
    AddTodoCommand, AddTodoHandler, AddTodoResult, CompleteAllCommand, CompleteAllHandler,
    DeleteTodoCommand, DeleteTodoHandler, SetTodoStatusCommand, SetTodoStatusHandler,
};
