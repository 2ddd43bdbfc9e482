//! Session storage port
//!
//! Defines the interface for keeping form sessions between interactions.
//! Sessions are transient: stores are expected to be process-scoped.

use async_trait::async_trait;
use domain::{Session, SessionId};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for session persistence
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Save a new session
    async fn insert(&self, session: Session) -> Result<(), ApplicationError>;

    /// Get a session by ID
    async fn get(&self, id: &SessionId) -> Result<Option<Session>, ApplicationError>;

    /// Update an existing session
    async fn update(&self, session: &Session) -> Result<(), ApplicationError>;

    /// Delete a session
    async fn delete(&self, id: &SessionId) -> Result<(), ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_store_round_trip() {
        let mut mock = MockSessionStore::new();
        let session = Session::new();
        let id = session.id;
        let stored = session.clone();

        mock.expect_insert().returning(|_| Ok(()));
        mock.expect_get()
            .returning(move |_| Ok(Some(stored.clone())));

        mock.insert(session).await.unwrap();
        let fetched = mock.get(&id).await.unwrap();
        assert_eq!(fetched.unwrap().id, id);
    }

    #[tokio::test]
    async fn mock_store_get_missing_returns_none() {
        let mut mock = MockSessionStore::new();
        mock.expect_get().returning(|_| Ok(None));

        let fetched = mock.get(&SessionId::new()).await.unwrap();
        assert!(fetched.is_none());
    }

    #[tokio::test]
    async fn mock_store_delete() {
        let mut mock = MockSessionStore::new();
        mock.expect_delete().returning(|_| Ok(()));

        assert!(mock.delete(&SessionId::new()).await.is_ok());
    }
}
