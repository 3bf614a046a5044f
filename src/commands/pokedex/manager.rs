//! Registry of live Pokedex sessions, keyed by the message they are rendered on.
//!
//! Each session sits behind its own mutex so two clicks on the same message apply one
//! after the other, while sessions on different messages never wait on each other.
//! Each entry also owns the abort handle of its expiry timer.

use super::state::{PokedexSession, TurnGate};
use serenity::model::id::MessageId;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tokio::task::AbortHandle;
use tracing::debug;

pub type SharedSession = Arc<Mutex<PokedexSession>>;

struct SessionEntry {
    session: SharedSession,
    gate: TurnGate,
    timer: AbortHandle,
}

#[derive(Default)]
pub struct SessionManager {
    sessions: RwLock<HashMap<MessageId, SessionEntry>>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `session` for `message_id` and arm its expiry timer. When the deadline
    /// passes the session is marked expired, dropped from the registry, and
    /// `on_expire` runs (used to strip the navigation buttons off the message).
    ///
    /// A session already registered for the same message is superseded.
    pub async fn start<F, Fut>(
        self: &Arc<Self>,
        message_id: MessageId,
        session: PokedexSession,
        on_expire: F,
    ) -> SharedSession
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let gate = session.gate();
        let deadline = gate.deadline;
        let shared = Arc::new(Mutex::new(session));

        let manager = Arc::clone(self);
        let timed = Arc::clone(&shared);
        let timer = tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            // Waits for any in-flight page turn before tearing down.
            timed.lock().await.expire();
            manager.remove_if_same(message_id, &timed).await;
            debug!(target = "pokedex.session", message_id = %message_id, "session expired");
            on_expire().await;
        });

        let previous = self.sessions.write().await.insert(
            message_id,
            SessionEntry {
                session: Arc::clone(&shared),
                gate,
                timer: timer.abort_handle(),
            },
        );
        if let Some(old) = previous {
            old.timer.abort();
            old.session.lock().await.expire();
            debug!(target = "pokedex.session", message_id = %message_id, "session superseded");
        }
        shared
    }

    pub async fn get(&self, message_id: MessageId) -> Option<SharedSession> {
        self.sessions
            .read()
            .await
            .get(&message_id)
            .map(|entry| Arc::clone(&entry.session))
    }

    /// The session together with its gate. The gate can be checked without waiting on
    /// a page turn that currently holds the session lock.
    pub async fn entry(&self, message_id: MessageId) -> Option<(SharedSession, TurnGate)> {
        self.sessions
            .read()
            .await
            .get(&message_id)
            .map(|entry| (Arc::clone(&entry.session), entry.gate))
    }

    /// Drop a session early, cancelling its timer. Returns whether one was live.
    /// `on_expire` does not run for a superseded session.
    pub async fn supersede(&self, message_id: MessageId) -> bool {
        let Some(entry) = self.sessions.write().await.remove(&message_id) else {
            return false;
        };
        entry.timer.abort();
        entry.session.lock().await.expire();
        true
    }

    pub async fn active_count(&self) -> usize {
        self.sessions.read().await.len()
    }

    async fn remove_if_same(&self, message_id: MessageId, session: &SharedSession) {
        let mut sessions = self.sessions.write().await;
        if sessions
            .get(&message_id)
            .is_some_and(|entry| Arc::ptr_eq(&entry.session, session))
        {
            sessions.remove(&message_id);
        }
    }
}
