//! Session access shared by every handler.
//!
//! Handlers never touch a session without holding its lock, and every
//! mutation records its outcome as the session's flash message.

use crate::domain::foundation::SessionId;
use crate::domain::session::Flash;
use crate::domain::todo::{TodoError, TodoLists};
use crate::ports::{SessionHandle, SessionStore};

/// Look up a live session.
///
/// # Errors
///
/// - `SessionNotFound` if the session expired or never existed
pub(crate) async fn load_session(
    store: &dyn SessionStore,
    session_id: &SessionId,
) -> Result<SessionHandle, TodoError> {
    store
        .find(session_id)
        .await?
        .ok_or(TodoError::SessionNotFound)
}

/// Run `op` against the session's lists under the session lock.
///
/// Success stores `success_message` as the flash. Not-found failures store
/// the error as the flash. Validation failures leave the flash alone; the
/// caller re-renders the submitted form with the message instead.
pub(crate) async fn mutate_lists<T, F>(
    store: &dyn SessionStore,
    session_id: &SessionId,
    operation: &'static str,
    success_message: &str,
    op: F,
) -> Result<T, TodoError>
where
    F: FnOnce(&mut TodoLists) -> Result<T, TodoError>,
{
    let handle = load_session(store, session_id).await?;
    let mut session = handle.lock().await;

    match op(session.lists_mut()) {
        Ok(value) => {
            session.set_flash(Flash::success(success_message));
            Ok(value)
        }
        Err(err) if err.is_validation() => {
            tracing::debug!(
                session_id = %session_id,
                operation,
                error = %err,
                "Rejected invalid input"
            );
            Err(err)
        }
        Err(err) => {
            tracing::warn!(
                session_id = %session_id,
                operation,
                code = %err.code(),
                "Operation failed"
            );
            session.set_flash(Flash::error(err.to_string()));
            Err(err)
        }
    }
}
