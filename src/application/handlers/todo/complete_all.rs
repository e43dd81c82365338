//! CompleteAllHandler - Command handler for completing every todo in a list.

use std::sync::Arc;

use crate::application::handlers::session_scope::mutate_lists;
use crate::domain::foundation::{ListId, SessionId};
use crate::domain::todo::TodoError;
use crate::ports::SessionStore;

pub const ALL_TODOS_COMPLETED: &str = "All todos have been completed.";

/// Command to mark every todo in a list completed.
#[derive(Debug, Clone)]
pub struct CompleteAllCommand {
    pub session_id: SessionId,
    pub list_position: usize,
    pub expected_list: Option<ListId>,
}

/// Handler for completing whole lists.
pub struct CompleteAllHandler {
    store: Arc<dyn SessionStore>,
}

impl CompleteAllHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Returns how many todos changed state.
    pub async fn handle(&self, cmd: CompleteAllCommand) -> Result<usize, TodoError> {
        let changed = mutate_lists(
            self.store.as_ref(),
            &cmd.session_id,
            "complete_all",
            ALL_TODOS_COMPLETED,
            |lists| {
                lists.ensure_list(cmd.list_position, cmd.expected_list)?;
                lists.complete_all(cmd.list_position)
            },
        )
        .await?;

        tracing::info!(
            session_id = %cmd.session_id,
            list_position = cmd.list_position,
            changed,
            "All todos completed"
        );

        Ok(changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::session_scope::{load_session, test_support::*};

    fn command(session_id: SessionId) -> CompleteAllCommand {
        CompleteAllCommand {
            session_id,
            list_position: 0,
            expected_list: None,
        }
    }

    #[tokio::test]
    async fn completes_every_todo() {
        let (store, id) = store_with_session().await;
        seed(&store, &id, &[("L", &["a", "b", "c"])]).await;
        let handler = CompleteAllHandler::new(store.clone());

        assert_eq!(handler.handle(command(id)).await.unwrap(), 3);

        let handle = load_session(store.as_ref(), &id).await.unwrap();
        let session = handle.lock().await;
        assert!(session.lists().list(0).unwrap().is_complete());
        assert_eq!(session.flash().unwrap().message, ALL_TODOS_COMPLETED);
    }

    #[tokio::test]
    async fn already_complete_list_is_a_no_op() {
        let (store, id) = store_with_session().await;
        seed(&store, &id, &[("L", &["a"])]).await;
        let handler = CompleteAllHandler::new(store);

        assert_eq!(handler.handle(command(id)).await.unwrap(), 1);
        assert_eq!(handler.handle(command(id)).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn empty_list_stays_incomplete() {
        let (store, id) = store_with_session().await;
        seed(&store, &id, &[("L", &[])]).await;
        let handler = CompleteAllHandler::new(store.clone());

        assert_eq!(handler.handle(command(id)).await.unwrap(), 0);
        let handle = load_session(store.as_ref(), &id).await.unwrap();
        assert!(!handle.lock().await.lists().list(0).unwrap().is_complete());
    }
}
