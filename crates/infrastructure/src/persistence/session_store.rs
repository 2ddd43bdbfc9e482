//! In-memory session store
//!
//! Sessions live only for the lifetime of the process. The map is bounded so
//! abandoned sessions cannot grow memory without limit.

use std::collections::HashMap;

use application::error::ApplicationError;
use application::ports::SessionStore;
use async_trait::async_trait;
use domain::{Session, SessionId};
use parking_lot::RwLock;
use tracing::debug;

/// Default cap on concurrently-held sessions
const DEFAULT_MAX_SESSIONS: usize = 10_000;

/// Process-scoped session store backed by a `HashMap`
#[derive(Debug)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<SessionId, Session>>,
    max_sessions: usize,
}

impl InMemorySessionStore {
    /// Create a store with the default capacity
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MAX_SESSIONS)
    }

    /// Create a store holding at most `max_sessions` sessions
    #[must_use]
    pub fn with_capacity(max_sessions: usize) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            max_sessions,
        }
    }

    /// Number of sessions currently held
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.read().len()
    }

    /// Whether the store is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.read().is_empty()
    }

    /// Drop the oldest session to make room for a new one
    fn evict_oldest(sessions: &mut HashMap<SessionId, Session>) {
        if let Some(oldest) = sessions
            .values()
            .min_by_key(|s| s.updated_at)
            .map(|s| s.id)
        {
            debug!(session_id = %oldest, "Evicting oldest session");
            sessions.remove(&oldest);
        }
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn insert(&self, session: Session) -> Result<(), ApplicationError> {
        let mut sessions = self.sessions.write();
        if sessions.len() >= self.max_sessions {
            Self::evict_oldest(&mut sessions);
        }
        sessions.insert(session.id, session);
        Ok(())
    }

    async fn get(&self, id: &SessionId) -> Result<Option<Session>, ApplicationError> {
        Ok(self.sessions.read().get(id).cloned())
    }

    async fn update(&self, session: &Session) -> Result<(), ApplicationError> {
        let mut sessions = self.sessions.write();
        if !sessions.contains_key(&session.id) {
            return Err(ApplicationError::NotFound(format!(
                "Session {}",
                session.id
            )));
        }
        sessions.insert(session.id, session.clone());
        Ok(())
    }

    async fn delete(&self, id: &SessionId) -> Result<(), ApplicationError> {
        self.sessions.write().remove(id);
        Ok(())
    }
}
