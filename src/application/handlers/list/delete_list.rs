//! DeleteListHandler - Command handler for deleting lists.

use std::sync::Arc;

use crate::application::handlers::session_scope::mutate_lists;
use crate::domain::foundation::{ListId, SessionId};
use crate::domain::todo::TodoError;
use crate::ports::SessionStore;

pub const LIST_DELETED: &str = "The list has been deleted.";

/// Command to delete the list at a position.
#[derive(Debug, Clone)]
pub struct DeleteListCommand {
    pub session_id: SessionId,
    pub list_position: usize,
    pub expected_list: Option<ListId>,
}

/// Result of successful list deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteListResult {
    pub name: String,
    pub todo_count: usize,
}

/// Handler for deleting lists.
pub struct DeleteListHandler {
    store: Arc<dyn SessionStore>,
}

impl DeleteListHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: DeleteListCommand) -> Result<DeleteListResult, TodoError> {
        let removed = mutate_lists(
            self.store.as_ref(),
            &cmd.session_id,
            "delete_list",
            LIST_DELETED,
            |lists| {
                lists.ensure_list(cmd.list_position, cmd.expected_list)?;
                lists.delete_list(cmd.list_position)
            },
        )
        .await?;

        tracing::info!(
            session_id = %cmd.session_id,
            list_position = cmd.list_position,
            todo_count = removed.total_count(),
            "List deleted"
        );

        Ok(DeleteListResult {
            name: removed.name().to_string(),
            todo_count: removed.total_count(),
        })
    }
}
