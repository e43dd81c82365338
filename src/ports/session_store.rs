//! Session store port.
//!
//! Defines the contract for holding browser sessions between requests.
//! Implementations decide where sessions live; the application layer only
//! sees shared, lockable handles.
//!
//! # Design
//!
//! - **Per-session lock**: every handle wraps the session in a mutex, so two
//!   requests against one session are serialized for a full read-modify-write
//! - **Idle expiry**: `find` never returns a session past its idle timeout

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::session::Session;

/// Shared, lockable reference to one live session.
pub type SessionHandle = Arc<Mutex<Session>>;

/// Port for session lifecycle management.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Create and register a new, empty session.
    async fn create(&self) -> Result<SessionHandle, DomainError>;

    /// Find a live session and mark it as seen.
    ///
    /// Returns `None` if the session is unknown or has expired; expired
    /// sessions are dropped on the way out.
    async fn find(&self, id: &SessionId) -> Result<Option<SessionHandle>, DomainError>;

    /// Drop every expired session. Returns how many were removed.
    async fn purge_expired(&self) -> Result<usize, DomainError>;

    /// Number of sessions currently held.
    async fn count(&self) -> Result<usize, DomainError>;
}
