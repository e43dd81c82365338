//! RenameListHandler - Command handler for renaming lists.

use std::sync::Arc;

use crate::application::handlers::session_scope::mutate_lists;
use crate::domain::foundation::{ListId, SessionId};
use crate::domain::todo::TodoError;
use crate::ports::SessionStore;

pub const LIST_UPDATED: &str = "The list has been updated.";

/// Command to rename the list at a position.
#[derive(Debug, Clone)]
pub struct RenameListCommand {
    pub session_id: SessionId,
    pub list_position: usize,
    /// Id the form was rendered with, if it carried one.
    pub expected_list: Option<ListId>,
    pub new_name: String,
}

/// Result of successful list rename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameListResult {
    pub old_name: String,
}

/// Handler for renaming lists.
pub struct RenameListHandler {
    store: Arc<dyn SessionStore>,
}

impl RenameListHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: RenameListCommand) -> Result<RenameListResult, TodoError> {
        let old_name = mutate_lists(
            self.store.as_ref(),
            &cmd.session_id,
            "rename_list",
            LIST_UPDATED,
            |lists| {
                lists.ensure_list(cmd.list_position, cmd.expected_list)?;
                lists.rename_list(cmd.list_position, &cmd.new_name)
            },
        )
        .await?;

        tracing::info!(
            session_id = %cmd.session_id,
            list_position = cmd.list_position,
            "List renamed"
        );

        Ok(RenameListResult { old_name })
    }
}
