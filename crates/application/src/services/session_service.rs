//! Session service - form state bookkeeping
//!
//! Manages the per-session text buffer and settings. None of these
//! operations contact the synthesis engine: inserting presets and clearing
//! the buffer are pure state changes.

use std::{fmt, sync::Arc};

use domain::{SamplePreset, Session, SessionId, SpeechRate, VoiceChoice};
use tracing::{debug, instrument};

use crate::{error::ApplicationError, ports::SessionStore};

/// Service managing form sessions
pub struct SessionService {
    store: Arc<dyn SessionStore>,
}

impl fmt::Debug for SessionService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionService").finish_non_exhaustive()
    }
}

impl SessionService {
    /// Create a new session service
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Start a new session with an empty buffer and default settings
    #[instrument(skip(self))]
    pub async fn create_session(&self) -> Result<Session, ApplicationError> {
        let session = Session::new();
        debug!(session_id = %session.id, "Creating session");
        self.store.insert(session.clone()).await?;
        Ok(session)
    }

    /// Fetch a session by ID
    pub async fn get_session(&self, id: SessionId) -> Result<Session, ApplicationError> {
        self.store
            .get(&id)
            .await?
            .ok_or_else(|| ApplicationError::NotFound(format!("Session {id}")))
    }

    /// Replace the session's text buffer
    #[instrument(skip(self, text), fields(session_id = %id, text_len = text.len()))]
    pub async fn set_text(
        &self,
        id: SessionId,
        text: String,
    ) -> Result<Session, ApplicationError> {
        let mut session = self.get_session(id).await?;
        session.set_text(text);
        self.store.update(&session).await?;
        Ok(session)
    }

    /// Overwrite the buffer with a preset's fixed text
    #[instrument(skip(self), fields(session_id = %id, preset = %preset))]
    pub async fn apply_preset(
        &self,
        id: SessionId,
        preset: SamplePreset,
    ) -> Result<Session, ApplicationError> {
        let mut session = self.get_session(id).await?;
        session.apply_preset(preset);
        self.store.update(&session).await?;
        Ok(session)
    }

    /// Reset the text buffer to empty
    #[instrument(skip(self), fields(session_id = %id))]
    pub async fn clear_text(&self, id: SessionId) -> Result<Session, ApplicationError> {
        let mut session = self.get_session(id).await?;
        session.clear_text();
        self.store.update(&session).await?;
        Ok(session)
    }

    /// Update voice and/or rate; the rate is clamped to its bounds
    #[instrument(skip(self), fields(session_id = %id))]
    pub async fn update_settings(
        &self,
        id: SessionId,
        voice: Option<VoiceChoice>,
        rate: Option<u16>,
    ) -> Result<Session, ApplicationError> {
        let mut session = self.get_session(id).await?;
        if let Some(voice) = voice {
            session.set_voice(voice);
        }
        if let Some(rate) = rate {
            session.set_rate(SpeechRate::clamped(rate));
        }
        self.store.update(&session).await?;
        Ok(session)
    }

    /// Delete a session
    #[instrument(skip(self), fields(session_id = %id))]
    pub async fn delete_session(&self, id: SessionId) -> Result<(), ApplicationError> {
        // Fetch first so unknown ids surface as not-found
        self.get_session(id).await?;
        self.store.delete(&id).await
    }
}
