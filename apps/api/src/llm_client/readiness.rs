//! Oracle readiness: resolved once by the init routine, observed by subscription.

use std::time::Duration;

use tokio::sync::watch;

#[derive(Clone)]
pub struct OracleReadiness {
    tx: watch::Sender<bool>,
}

impl OracleReadiness {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { tx }
    }

    /// Flips the flag. Later calls are no-ops.
    pub fn mark_ready(&self) {
        self.tx.send_if_modified(|ready| !std::mem::replace(ready, true));
    }

    pub fn is_ready(&self) -> bool {
        *self.tx.borrow()
    }

    /// Resolves once the oracle is ready. Never resolves if it never becomes ready.
    pub async fn wait_ready(&self) {
        let mut rx = self.tx.subscribe();
        // The sender lives in `self`, so the channel cannot close under us.
        let _ = rx.wait_for(|ready| *ready).await;
    }

    /// Waits up to `grace` for readiness. `true` if the oracle is ready.
    pub async fn ready_within(&self, grace: Duration) -> bool {
        if self.is_ready() {
            return true;
        }
        tokio::time::timeout(grace, self.wait_ready()).await.is_ok()
    }
}

impl Default for OracleReadiness {
    fn default() -> Self {
        Self::new()
    }
}
