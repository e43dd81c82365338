//! SetTodoStatusHandler - Command handler for checking and unchecking todos.

use std::sync::Arc;

use crate::application::handlers::session_scope::mutate_lists;
use crate::domain::foundation::{ListId, SessionId, TodoId};
use crate::domain::todo::TodoError;
use crate::ports::SessionStore;

pub const TODO_UPDATED: &str = "The todo has been updated.";

/// Command to set a todo's completion flag.
#[derive(Debug, Clone)]
pub struct SetTodoStatusCommand {
    pub session_id: SessionId,
    pub list_position: usize,
    pub todo_position: usize,
    pub expected_list: Option<ListId>,
    pub expected_todo: Option<TodoId>,
    pub completed: bool,
}

/// Handler for toggling todos.
pub struct SetTodoStatusHandler {
    store: Arc<dyn SessionStore>,
}

impl SetTodoStatusHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: SetTodoStatusCommand) -> Result<(), TodoError> {
        mutate_lists(
            self.store.as_ref(),
            &cmd.session_id,
            "set_todo_status",
            TODO_UPDATED,
            |lists| {
                lists.ensure_list(cmd.list_position, cmd.expected_list)?;
                lists.ensure_todo(cmd.list_position, cmd.todo_position, cmd.expected_todo)?;
                lists.set_todo_status(cmd.list_position, cmd.todo_position, cmd.completed)
            },
        )
        .await?;

        tracing::info!(
            session_id = %cmd.session_id,
            list_position = cmd.list_position,
            todo_position = cmd.todo_position,
            completed = cmd.completed,
            "Todo status set"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::session_store::InMemorySessionStore;
    use crate::application::handlers::session_scope::{load_session, test_support::*};

    fn command(
        session_id: SessionId,
        todo_position: usize,
        completed: bool,
    ) -> SetTodoStatusCommand {
        SetTodoStatusCommand {
            session_id,
            list_position: 0,
            todo_position,
            expected_list: None,
            expected_todo: None,
            completed,
        }
    }

    async fn first_todo_completed(store: &InMemorySessionStore, id: &SessionId) -> bool {
        let handle = load_session(store, id).await.unwrap();
        let session = handle.lock().await;
        session.lists().todo(0, 0).unwrap().is_completed()
    }

    #[tokio::test]
    async fn toggles_both_ways() {
        let (store, id) = store_with_session().await;
        seed(&store, &id, &[("L", &["Milk"])]).await;
        let handler = SetTodoStatusHandler::new(store.clone());

        handler.handle(command(id, 0, true)).await.unwrap();
        assert!(first_todo_completed(&store, &id).await);
        assert_eq!(take_flash(&store, &id).await.unwrap().message, TODO_UPDATED);

        handler.handle(command(id, 0, false)).await.unwrap();
        assert!(!first_todo_completed(&store, &id).await);
    }

    #[tokio::test]
    async fn missing_todo_is_not_found() {
        let (store, id) = store_with_session().await;
        seed(&store, &id, &[("L", &[])]).await;
        let handler = SetTodoStatusHandler::new(store);

        let err = handler.handle(command(id, 0, true)).await.unwrap_err();
        assert_eq!(err, TodoError::todo_not_found(0, 0));
    }
}
