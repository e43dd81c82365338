//! DeleteTodoHandler - Command handler for removing todos.

use std::sync::Arc;

use crate::application::handlers::session_scope::mutate_lists;
use crate::domain::foundation::{ListId, SessionId, TodoId};
use crate::domain::todo::TodoError;
use crate::ports::SessionStore;

pub const TODO_DELETED: &str = "The todo has been deleted.";

/// Command to delete one todo from a list.
#[derive(Debug, Clone)]
pub struct DeleteTodoCommand {
    pub session_id: SessionId,
    pub list_position: usize,
    pub todo_position: usize,
    pub expected_list: Option<ListId>,
    pub expected_todo: Option<TodoId>,
}

/// Handler for deleting todos.
pub struct DeleteTodoHandler {
    store: Arc<dyn SessionStore>,
}

impl DeleteTodoHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Returns the name of the removed todo.
    pub async fn handle(&self, cmd: DeleteTodoCommand) -> Result<String, TodoError> {
        let removed = mutate_lists(
            self.store.as_ref(),
            &cmd.session_id,
            "delete_todo",
            TODO_DELETED,
            |lists| {
                lists.ensure_list(cmd.list_position, cmd.expected_list)?;
                lists.ensure_todo(cmd.list_position, cmd.todo_position, cmd.expected_todo)?;
                lists.delete_todo(cmd.list_position, cmd.todo_position)
            },
        )
        .await?;

        tracing::info!(
            session_id = %cmd.session_id,
            list_position = cmd.list_position,
            todo_position = cmd.todo_position,
            "Todo deleted"
        );

        Ok(removed.name().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::session_scope::{load_session, test_support::*};

    fn command(
        session_id: SessionId,
        list_position: usize,
        todo_position: usize,
    ) -> DeleteTodoCommand {
        DeleteTodoCommand {
            session_id,
            list_position,
            todo_position,
            expected_list: None,
            expected_todo: None,
        }
    }

    #[tokio::test]
    async fn deleting_first_of_three_keeps_order() {
        let (store, id) = store_with_session().await;
        seed(&store, &id, &[("L", &["a", "b", "c"])]).await;
        let handler = DeleteTodoHandler::new(store.clone());

        assert_eq!(handler.handle(command(id, 0, 0)).await.unwrap(), "a");

        let handle = load_session(store.as_ref(), &id).await.unwrap();
        let session = handle.lock().await;
        let names: Vec<_> = session
            .lists()
            .list(0)
            .unwrap()
            .todos()
            .iter()
            .map(|t| t.name())
            .collect();
        assert_eq!(names, vec!["b", "c"]);
    }

    #[tokio::test]
    async fn out_of_range_todo_is_not_found() {
        let (store, id) = store_with_session().await;
        seed(&store, &id, &[("L", &["a"])]).await;
        let handler = DeleteTodoHandler::new(store.clone());

        let err = handler.handle(command(id, 0, 1)).await.unwrap_err();
        assert_eq!(err, TodoError::todo_not_found(0, 1));
        assert_eq!(
            take_flash(&store, &id).await.unwrap().message,
            "The specified todo was not found."
        );
    }

    #[tokio::test]
    async fn stale_todo_id_is_rejected() {
        let (store, id) = store_with_session().await;
        seed(&store, &id, &[("L", &["a", "b"])]).await;
        let a_id = {
            let handle = load_session(store.as_ref(), &id).await.unwrap();
            let session = handle.lock().await;
            session.lists().todo(0, 0).unwrap().id()
        };
        let handler = DeleteTodoHandler::new(store);

        let mut first = command(id, 0, 0);
        first.expected_todo = Some(a_id);
        handler.handle(first).await.unwrap();

        let mut repeat = command(id, 0, 0);
        repeat.expected_todo = Some(a_id);
        assert_eq!(
            handler.handle(repeat).await.unwrap_err(),
            TodoError::todo_not_found(0, 0)
        );
    }
}
