//! TakeFlashHandler - Query handler for pages that show only the flash.

use std::sync::Arc;

use crate::application::handlers::session_scope::load_session;
use crate::domain::foundation::SessionId;
use crate::domain::session::Flash;
use crate::domain::todo::TodoError;
use crate::ports::SessionStore;

/// Query that consumes the caller's pending flash.
#[derive(Debug, Clone)]
pub struct TakeFlashQuery {
    pub session_id: SessionId,
}

/// Handler that removes and returns the pending flash.
pub struct TakeFlashHandler {
    store: Arc<dyn SessionStore>,
}

impl TakeFlashHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: TakeFlashQuery) -> Result<Option<Flash>, TodoError> {
        let handle = load_session(self.store.as_ref(), &query.session_id).await?;
        let mut session = handle.lock().await;
        Ok(session.take_flash())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::session_scope::test_support::*;

    #[tokio::test]
    async fn returns_flash_once() {
        let (store, id) = store_with_session().await;
        {
            let handle = store.find(&id).await.unwrap().unwrap();
            handle.lock().await.set_flash(Flash::success("Hello"));
        }
        let handler = TakeFlashHandler::new(store);

        let flash = handler.handle(TakeFlashQuery { session_id: id }).await.unwrap();
        assert_eq!(flash, Some(Flash::success("Hello")));
        assert!(handler
            .handle(TakeFlashQuery { session_id: id })
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn unknown_session_is_reported() {
        let (store, _) = store_with_session().await;
        let handler = TakeFlashHandler::new(store);

        let err = handler
            .handle(TakeFlashQuery {
                session_id: SessionId::new(),
            })
            .await
            .unwrap_err();
        assert_eq!(err, TodoError::SessionNotFound);
    }
}
