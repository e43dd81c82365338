//! In-memory session store.
//!
//! Sessions live in a process-local HashMap and vanish on restart, which is
//! exactly the lifetime a browser session needs here.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

use crate::domain::foundation::{DomainError, SessionId, Timestamp};
use crate::domain::session::Session;
use crate::ports::{SessionHandle, SessionStore};

/// In-memory session store with idle expiry.
#[derive(Debug, Clone)]
pub struct InMemorySessionStore {
    /// Live sessions keyed by id.
    sessions: Arc<RwLock<HashMap<SessionId, SessionHandle>>>,
    /// Seconds of inactivity before a session expires.
    idle_timeout_secs: u64,
}

impl InMemorySessionStore {
    pub fn new(idle_timeout_secs: u64) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            idle_timeout_secs,
        }
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn create(&self) -> Result<SessionHandle, DomainError> {
        let mut sessions = self.sessions.write().await;

        // Never hand out an id that is already live.
        let mut id = SessionId::new();
        while sessions.contains_key(&id) {
            id = SessionId::new();
        }

        let handle = Arc::new(Mutex::new(Session::new(id)));
        sessions.insert(id, handle.clone());
        tracing::debug!(session_id = %id, "Session created");
        Ok(handle)
    }

    async fn find(&self, id: &SessionId) -> Result<Option<SessionHandle>, DomainError> {
        let handle = match self.sessions.read().await.get(id) {
            Some(handle) => handle.clone(),
            None => return Ok(None),
        };

        let now = Timestamp::now();
        {
            let mut session = handle.lock().await;
            if !session.is_expired(&now, self.idle_timeout_secs) {
                session.touch(now);
                return Ok(Some(handle.clone()));
            }
        }

        self.sessions.write().await.remove(id);
        tracing::debug!(session_id = %id, "Session expired");
        Ok(None)
    }

    async fn purge_expired(&self) -> Result<usize, DomainError> {
        let now = Timestamp::now();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();

        // A session whose lock is held is serving a request right now.
        sessions.retain(|_, handle| match handle.try_lock() {
            Ok(session) => !session.is_expired(&now, self.idle_timeout_secs),
            Err(_) => true,
        });

        Ok(before - sessions.len())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.sessions.read().await.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn age(handle: &SessionHandle, secs: u64) {
        let mut session = handle.lock().await;
        let past = session.last_seen_at().minus_secs(secs);
        session.touch(past);
    }

    #[tokio::test]
    async fn create_registers_session() {
        let store = InMemorySessionStore::new(60);
        let handle = store.create().await.unwrap();
        let id = *handle.lock().await.id();

        assert_eq!(store.count().await.unwrap(), 1);
        assert!(store.find(&id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn find_unknown_returns_none() {
        let store = InMemorySessionStore::new(60);
        assert!(store.find(&SessionId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn find_returns_shared_handle() {
        let store = InMemorySessionStore::new(60);
        let handle = store.create().await.unwrap();
        let id = *handle.lock().await.id();

        handle.lock().await.lists_mut().create_list("Groceries").unwrap();

        let found = store.find(&id).await.unwrap().unwrap();
        assert_eq!(found.lock().await.lists().len(), 1);
    }

    #[tokio::test]
    async fn find_drops_expired_session() {
        let store = InMemorySessionStore::new(60);
        let handle = store.create().await.unwrap();
        let id = *handle.lock().await.id();
        age(&handle, 120).await;

        assert!(store.find(&id).await.unwrap().is_none());
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn find_refreshes_last_seen() {
        let store = InMemorySessionStore::new(60);
        let handle = store.create().await.unwrap();
        let id = *handle.lock().await.id();
        age(&handle, 30).await;

        store.find(&id).await.unwrap().unwrap();
        let session = handle.lock().await;
        assert!(!session.is_expired(&Timestamp::now().plus_secs(45), 60));
    }

    #[tokio::test]
    async fn purge_expired_keeps_live_sessions() {
        let store = InMemorySessionStore::new(60);
        let stale = store.create().await.unwrap();
        let _fresh = store.create().await.unwrap();
        age(&stale, 61).await;

        assert_eq!(store.purge_expired().await.unwrap(), 1);
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn purge_skips_locked_sessions() {
        let store = InMemorySessionStore::new(60);
        let handle = store.create().await.unwrap();
        age(&handle, 61).await;

        let guard = handle.lock().await;
        assert_eq!(store.purge_expired().await.unwrap(), 0);
        drop(guard);
        assert_eq!(store.purge_expired().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn huge_idle_timeout_never_expires() {
        let store = InMemorySessionStore::new(10_000_000_000_000);
        let handle = store.create().await.unwrap();
        let id = *handle.lock().await.id();
        age(&handle, 365 * 24 * 60 * 60).await;

        assert!(store.find(&id).await.unwrap().is_some());
        assert_eq!(store.purge_expired().await.unwrap(), 0);
    }
}
