//! GetListHandler - Query handler for a single list.

use std::sync::Arc;

use crate::application::handlers::session_scope::load_session;
use crate::domain::foundation::SessionId;
use crate::domain::session::Flash;
use crate::domain::todo::TodoError;
use crate::ports::{ListDetailView, SessionStore};

/// Query for the list at a position.
#[derive(Debug, Clone)]
pub struct GetListQuery {
    pub session_id: SessionId,
    pub list_position: usize,
}

/// The list with its todos, plus the flash to show with it.
#[derive(Debug, Clone)]
pub struct GetListResult {
    pub list: ListDetailView,
    pub flash: Option<Flash>,
}

/// Handler for viewing one list.
///
/// A missing list leaves an error flash behind for the page the caller
/// redirects to.
pub struct GetListHandler {
    store: Arc<dyn SessionStore>,
}

impl GetListHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetListQuery) -> Result<GetListResult, TodoError> {
        let handle = load_session(self.store.as_ref(), &query.session_id).await?;
        let mut session = handle.lock().await;

        let list = match session.lists().list(query.list_position) {
            Ok(list) => ListDetailView::from_list(query.list_position, list),
            Err(err) => {
                tracing::warn!(
                    session_id = %query.session_id,
                    list_position = query.list_position,
                    "List not found"
                );
                session.set_flash(Flash::error(err.to_string()));
                return Err(err);
            }
        };

        Ok(GetListResult {
            list,
            flash: session.take_flash(),
        })
    }
}
