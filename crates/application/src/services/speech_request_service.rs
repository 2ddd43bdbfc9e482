//! Speech request service - the single pass-through contract
//!
//! Takes the form's current text and settings, validates them, and forwards
//! one synthesis request to the engine. Each request is a single call that
//! either yields a playable payload or a reported error: no retry, no
//! backoff, no caching, no partial result.

use std::{fmt, sync::Arc};

use domain::{DomainError, SpeechRate, SpeedClass, VoiceChoice};
use tracing::{debug, instrument, warn};

use crate::{
    error::ApplicationError,
    ports::{SpeechPort, VoiceInfo},
};

/// A synthesized utterance ready for playback
#[derive(Debug, Clone)]
pub struct SpokenAudio {
    /// Audio payload (non-empty on success)
    pub audio_data: Vec<u8>,
    /// MIME type of the payload
    pub mime_type: String,
    /// Engine that produced the audio
    pub engine: String,
    /// Effective (clamped) rate the request used
    pub rate: SpeechRate,
    /// Coarse speed mode the rate mapped onto
    pub speed_class: SpeedClass,
}

/// Service handling speech requests
pub struct SpeechRequestService {
    speech_port: Arc<dyn SpeechPort>,
}

impl fmt::Debug for SpeechRequestService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpeechRequestService")
            .field("engine", &self.speech_port.engine_name())
            .finish_non_exhaustive()
    }
}

impl SpeechRequestService {
    /// Create a new speech request service
    pub fn new(speech_port: Arc<dyn SpeechPort>) -> Self {
        Self { speech_port }
    }

    /// Forward one speech request to the engine
    ///
    /// Empty or whitespace-only text is rejected before any engine call is
    /// made. The requested rate is clamped to the supported bounds.
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    pub async fn request_speech(
        &self,
        text: &str,
        voice: VoiceChoice,
        requested_rate: u16,
    ) -> Result<SpokenAudio, ApplicationError> {
        if text.trim().is_empty() {
            return Err(DomainError::EmptyText.into());
        }

        let rate = SpeechRate::clamped(requested_rate);
        debug!(rate = rate.value(), "Forwarding speech request to engine");

        let result = match self
            .speech_port
            .synthesize(text.to_string(), voice, rate)
            .await
        {
            Ok(result) => result,
            Err(e) => {
                warn!(error = %e, "Speech synthesis failed");
                return Err(e);
            },
        };

        debug!(audio_size = result.audio_data.len(), "Speech request complete");

        Ok(SpokenAudio {
            audio_data: result.audio_data,
            mime_type: result.mime_type,
            engine: self.speech_port.engine_name(),
            rate,
            speed_class: rate.speed_class(),
        })
    }

    /// List the engine's voices
    pub async fn voices(&self) -> Result<Vec<VoiceInfo>, ApplicationError> {
        self.speech_port.list_voices().await
    }

    /// Check if the synthesis engine is reachable
    pub async fn is_available(&self) -> bool {
        self.speech_port.is_available().await
    }

    /// The active engine identifier
    #[must_use]
    pub fn engine_name(&self) -> String {
        self.speech_port.engine_name()
    }

    /// Whether the voice choice changes the produced audio
    #[must_use]
    pub fn supports_voice_selection(&self) -> bool {
        self.speech_port.supports_voice_selection()
    }

    /// Whether the numeric rate is honored by the engine
    #[must_use]
    pub fn honors_numeric_rate(&self) -> bool {
        self.speech_port.honors_numeric_rate()
    }
}
