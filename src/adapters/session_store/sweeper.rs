//! Background sweeper that purges idle sessions.
//!
//! `SessionStore::find` already drops an expired session when its owner
//! returns; the sweeper reclaims sessions whose owners never come back.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time;

use crate::domain::foundation::DomainError;
use crate::ports::SessionStore;

/// Periodically calls `SessionStore::purge_expired`.
pub struct SessionSweeper {
    store: Arc<dyn SessionStore>,
    interval: Duration,
}

impl SessionSweeper {
    pub fn new(store: Arc<dyn SessionStore>, interval: Duration) -> Self {
        Self { store, interval }
    }

    /// Run the sweep loop until the shutdown signal is received.
    ///
    /// A failed sweep is logged and retried on the next tick.
    pub async fn run(&self, mut shutdown: watch::Receiver<bool>) {
        let mut interval = time::interval(self.interval);
        // The first tick completes immediately; nothing can be idle yet.
        interval.tick().await;

        loop {
            tokio::select! {
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        tracing::debug!("Session sweeper stopped");
                        return;
                    }
                }

                _ = interval.tick() => {
                    if let Err(e) = self.sweep_once().await {
                        tracing::error!(error = %e, "Session sweep failed");
                    }
                }
            }
        }
    }

    /// Run exactly one sweep. Returns how many sessions were purged.
    pub async fn sweep_once(&self) -> Result<usize, DomainError> {
        let purged = self.store.purge_expired().await?;
        if purged > 0 {
            let remaining = self.store.count().await?;
            tracing::info!(purged, remaining, "Purged expired sessions");
        }
        Ok(purged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::session_store::InMemorySessionStore;

    #[tokio::test]
    async fn sweep_once_purges_only_expired() {
        let store = Arc::new(InMemorySessionStore::new(60));
        let stale = store.create().await.unwrap();
        store.create().await.unwrap();
        {
            let mut session = stale.lock().await;
            let past = session.last_seen_at().minus_secs(120);
            session.touch(past);
        }

        let sweeper = SessionSweeper::new(store.clone(), Duration::from_secs(1));
        assert_eq!(sweeper.sweep_once().await.unwrap(), 1);
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn run_stops_on_shutdown() {
        let store = Arc::new(InMemorySessionStore::new(60));
        let sweeper = SessionSweeper::new(store, Duration::from_millis(10));
        let (tx, rx) = watch::channel(false);

        let task = tokio::spawn(async move { sweeper.run(rx).await });
        tx.send(true).unwrap();

        time::timeout(Duration::from_secs(1), task)
            .await
            .expect("sweeper should stop")
            .unwrap();
    }

    #[tokio::test]
    async fn run_stops_when_sender_dropped() {
        let store = Arc::new(InMemorySessionStore::new(60));
        let sweeper = SessionSweeper::new(store, Duration::from_millis(10));
        let (tx, rx) = watch::channel(false);

        let task = tokio::spawn(async move { sweeper.run(rx).await });
        drop(tx);

        time::timeout(Duration::from_secs(1), task)
            .await
            .expect("sweeper should stop")
            .unwrap();
    }
}
