//! AddTodoHandler - Command handler for adding todos to a list.

use std::sync::Arc;

use crate::application::handlers::session_scope::mutate_lists;
use crate::domain::foundation::{ListId, SessionId};
use crate::domain::todo::TodoError;
use crate::ports::SessionStore;

pub const TODO_ADDED: &str = "The todo has been added.";

/// Command to append a todo to the list at a position.
#[derive(Debug, Clone)]
pub struct AddTodoCommand {
    pub session_id: SessionId,
    pub list_position: usize,
    pub expected_list: Option<ListId>,
    pub todo_name: String,
}

/// Result of successfully adding a todo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddTodoResult {
    pub todo_position: usize,
}

/// Handler for adding todos.
pub struct AddTodoHandler {
    store: Arc<dyn SessionStore>,
}

impl AddTodoHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: AddTodoCommand) -> Result<AddTodoResult, TodoError> {
        let todo_position = mutate_lists(
            self.store.as_ref(),
            &cmd.session_id,
            "add_todo",
            TODO_ADDED,
            |lists| {
                lists.ensure_list(cmd.list_position, cmd.expected_list)?;
                lists.add_todo(cmd.list_position, &cmd.todo_name)
            },
        )
        .await?;

        tracing::info!(
            session_id = %cmd.session_id,
            list_position = cmd.list_position,
            todo_position,
            "Todo added"
        );

        Ok(AddTodoResult { todo_position })
    }
}
