//! Todo command handlers.

mod add_todo;
mod complete_all;
mod delete_todo;
mod set_todo_status;

pub use add_todo::{AddTodoCommand, AddTodoHandler, AddTodoResult, TODO_ADDED};
pub use complete_all::{CompleteAllCommand, CompleteAllHandler, ALL_TODOS_COMPLETED};
pub use delete_todo::{DeleteTodoCommand, DeleteTodoHandler, TODO_DELETED};
pub use set_todo_status::{SetTodoStatusCommand, SetTodoStatusHandler, TODO_UPDATED};
