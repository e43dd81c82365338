//! Session aggregate entity.
//!
//! A session is the per-browser container for every list the user builds.
//! It lives only in memory and is torn down after a period of inactivity.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{SessionId, Timestamp};
use crate::domain::todo::TodoLists;

use super::Flash;

/// Session aggregate - cookie-scoped state for one browser.
///
/// # Invariants
///
/// - `id` is globally unique and unguessable
/// - at most one flash message is pending at a time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Unique identifier, also the cookie value.
    id: SessionId,

    /// Every list owned by this session.
    lists: TodoLists,

    /// Message waiting for the next rendered page.
    flash: Option<Flash>,

    /// When the session last served a request.
    last_seen_at: Timestamp,
}

impl Session {
    /// Create a new, empty session.
    pub fn new(id: SessionId) -> Self {
        Self {
            id,
            lists: TodoLists::new(),
            flash: None,
            last_seen_at: Timestamp::now(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn lists(&self) -> &TodoLists {
        &self.lists
    }

    pub fn lists_mut(&mut self) -> &mut TodoLists {
        &mut self.lists
    }

    /// Peek at the pending flash without consuming it.
    pub fn flash(&self) -> Option<&Flash> {
        self.flash.as_ref()
    }

    pub fn last_seen_at(&self) -> &Timestamp {
        &self.last_seen_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Replace any pending flash.
    pub fn set_flash(&mut self, flash: Flash) {
        self.flash = Some(flash);
    }

    /// Remove and return the pending flash.
    pub fn take_flash(&mut self) -> Option<Flash> {
        self.flash.take()
    }

    /// Record activity at `now`.
    pub fn touch(&mut self, now: Timestamp) {
        self.last_seen_at = now;
    }

    /// True once the session has been idle for `idle_timeout_secs` or longer.
    pub fn is_expired(&self, now: &Timestamp, idle_timeout_secs: u64) -> bool {
        !now.is_before(&self.last_seen_at.plus_secs(idle_timeout_secs))
    }
}
