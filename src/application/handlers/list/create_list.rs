//! CreateListHandler - Command handler for creating lists.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::domain::todo::TodoError;
use crate::ports::SessionStore;

use crate::application::handlers::session_scope::mutate_lists;

pub const LIST_CREATED: &str = "The list has been created.";

/// Command to create a new list in the caller's session.
#[derive(Debug, Clone)]
pub struct CreateListCommand {
    pub session_id: SessionId,
    pub list_name: String,
}

/// Result of successful list creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateListResult {
    pub position: usize,
}

/// Handler for creating lists.
pub struct CreateListHandler {
    store: Arc<dyn SessionStore>,
}

impl CreateListHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: CreateListCommand) -> Result<CreateListResult, TodoError> {
        let position = mutate_lists(
            self.store.as_ref(),
            &cmd.session_id,
            "create_list",
            LIST_CREATED,
            |lists| lists.create_list(&cmd.list_name),
        )
        .await?;

        tracing::info!(
            session_id = %cmd.session_id,
            list_position = position,
            "List created"
        );

        Ok(CreateListResult { position })
    }
}
