//! Open ledger sessions
//!
//! Each open ledger is owned by one [`LedgerController`] behind its own
//! `tokio::sync::Mutex`, so edits to a ledger are applied one at a time while
//! different ledgers are edited independently.
//!
//! A session not touched for the idle timeout is discarded the next time any
//! session is opened or looked up.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, RwLock};
use tokio::time::Instant;
use tracing::{debug, info};

use core_kernel::LedgerSessionId;
use domain_receipt::LedgerController;

use crate::error::ApiError;

pub type SessionHandle = Arc<Mutex<LedgerController>>;

/// Idle time after which a session is discarded
pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(30 * 60);

struct Session {
    handle: SessionHandle,
    last_used: Instant,
}

/// Registry of open ledger sessions
#[derive(Clone)]
pub struct LedgerSessions {
    inner: Arc<RwLock<HashMap<LedgerSessionId, Session>>>,
    idle_timeout: Duration,
}

impl Default for LedgerSessions {
    fn default() -> Self {
        Self::with_idle_timeout(DEFAULT_IDLE_TIMEOUT)
    }
}

impl LedgerSessions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_idle_timeout(idle_timeout: Duration) -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
            idle_timeout,
        }
    }

    pub fn idle_timeout(&self) -> Duration {
        self.idle_timeout
    }

    /// Registers a controller under a new session id
    pub async fn open(&self, controller: LedgerController) -> (LedgerSessionId, SessionHandle) {
        let id = LedgerSessionId::new_v7();
        let handle = Arc::new(Mutex::new(controller));

        let mut sessions = self.inner.write().await;
        self.evict_idle(&mut sessions);
        sessions.insert(
            id,
            Session {
                handle: handle.clone(),
                last_used: Instant::now(),
            },
        );

        debug!(session_id = %id, open_sessions = sessions.len(), "ledger session opened");
        (id, handle)
    }

    /// Looks up a session and marks it as used
    pub async fn get(&self, id: LedgerSessionId) -> Result<SessionHandle, ApiError> {
        let mut sessions = self.inner.write().await;
        self.evict_idle(&mut sessions);

        let session = sessions
            .get_mut(&id)
            .ok_or_else(|| ApiError::NotFound(format!("Ledger session {} not found", id)))?;
        session.last_used = Instant::now();
        Ok(session.handle.clone())
    }

    /// Discards a session; edits in flight on it still complete
    pub async fn close(&self, id: LedgerSessionId) -> Result<(), ApiError> {
        match self.inner.write().await.remove(&id) {
            Some(_) => {
                debug!(session_id = %id, "ledger session closed");
                Ok(())
            }
            None => Err(ApiError::NotFound(format!("Ledger session {} not found", id))),
        }
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    fn evict_idle(&self, sessions: &mut HashMap<LedgerSessionId, Session>) {
        let before = sessions.len();
        sessions.retain(|_, session| session.last_used.elapsed() < self.idle_timeout);

        let evicted = before - sessions.len();
        if evicted > 0 {
            info!(evicted, idle_timeout_secs = self.idle_timeout.as_secs(), "idle ledger sessions discarded");
        }
    }
}
