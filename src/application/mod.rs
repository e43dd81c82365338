//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

pub mod handlers;

pub use handlers::{
    // List handlers
    CreateListCommand, CreateListHandler, CreateListResult,
    DeleteListCommand, DeleteListHandler, DeleteListResult,
    GetListHandler, GetListQuery, GetListResult,
    ListListsHandler, ListListsQuery, ListListsResult,
    RenameListCommand, RenameListHandler, RenameListResult,
    // Todo handlers
    AddTodoCommand, AddTodoHandler, AddTodoResult,
    CompleteAllCommand, CompleteAllHandler,
    DeleteTodoCommand, DeleteTodoHandler,
    SetTodoStatusCommand, SetTodoStatusHandler,
    // Session handlers
    TakeFlashHandler, TakeFlashQuery,
};
