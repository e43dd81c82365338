//! ListListsHandler - Query handler for the lists overview.

use std::sync::Arc;

use crate::application::handlers::session_scope::load_session;
use crate::domain::foundation::SessionId;
use crate::domain::session::Flash;
use crate::domain::todo::TodoError;
use crate::ports::{ListSummaryView, SessionStore};

/// Query for every list in the caller's session.
#[derive(Debug, Clone)]
pub struct ListListsQuery {
    pub session_id: SessionId,
}

/// Lists in display order, plus the flash to show with them.
#[derive(Debug, Clone)]
pub struct ListListsResult {
    pub lists: Vec<ListSummaryView>,
    pub flash: Option<Flash>,
}

/// Handler for the lists overview.
///
/// Rendering the overview consumes the pending flash.
pub struct ListListsHandler {
    store: Arc<dyn SessionStore>,
}

impl ListListsHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: ListListsQuery) -> Result<ListListsResult, TodoError> {
        let handle = load_session(self.store.as_ref(), &query.session_id).await?;
        let mut session = handle.lock().await;

        let lists = session
            .lists()
            .sorted()
            .into_iter()
            .map(|(position, list)| ListSummaryView::from_list(position, list))
            .collect();

        Ok(ListListsResult {
            lists,
            flash: session.take_flash(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::session_scope::{mutate_lists, test_support::*};

    #[tokio::test]
    async fn empty_session_has_no_lists() {
        let (store, id) = store_with_session().await;
        let handler = ListListsHandler::new(store);

        let result = handler.handle(ListListsQuery { session_id: id }).await.unwrap();
        assert!(result.lists.is_empty());
        assert!(result.flash.is_none());
    }

    #[tokio::test]
    async fn complete_lists_sort_last_with_original_positions() {
        let (store, id) = store_with_session().await;
        seed(&store, &id, &[("A", &["x"]), ("B", &["y"]), ("C", &[])]).await;
        mutate_lists(store.as_ref(), &id, "test", "ok", |lists| {
            lists.set_todo_status(0, 0, true)
        })
        .await
        .unwrap();

        let handler = ListListsHandler::new(store);
        let result = handler.handle(ListListsQuery { session_id: id }).await.unwrap();

        let order: Vec<_> = result
            .lists
            .iter()
            .map(|l| (l.name.as_str(), l.position))
            .collect();
        assert_eq!(order, vec![("B", 1), ("C", 2), ("A", 0)]);
        assert!(result.lists[2].is_complete);
    }

    #[tokio::test]
    async fn flash_is_shown_once() {
        let (store, id) = store_with_session().await;
        mutate_lists(store.as_ref(), &id, "test", "Saved.", |lists| {
            lists.create_list("A")
        })
        .await
        .unwrap();
        let handler = ListListsHandler::new(store);

        let first = handler.handle(ListListsQuery { session_id: id }).await.unwrap();
        assert_eq!(first.flash.unwrap().message, "Saved.");

        let second = handler.handle(ListListsQuery { session_id: id }).await.unwrap();
        assert!(second.flash.is_none());
    }
}
