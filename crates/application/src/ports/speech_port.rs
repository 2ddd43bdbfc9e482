//! Speech port - Interface for text-to-speech synthesis

use async_trait::async_trait;
use domain::{SpeechRate, VoiceChoice};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Result of a speech synthesis operation
#[derive(Debug, Clone)]
pub struct SynthesisResult {
    /// Generated audio bytes
    pub audio_data: Vec<u8>,
    /// MIME type of the audio payload
    pub mime_type: String,
}

/// Information about an available voice
#[derive(Debug, Clone)]
pub struct VoiceInfo {
    /// Voice identifier
    pub id: String,
    /// Human-readable name
    pub name: String,
    /// Optional description
    pub description: Option<String>,
    /// Which form choice this voice maps to (if any)
    pub choice: Option<VoiceChoice>,
}

/// Port for speech synthesis operations
///
/// One call to `synthesize` performs exactly one engine call: no retry, no
/// caching, no partial results.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SpeechPort: Send + Sync {
    /// Synthesize speech from text
    ///
    /// # Arguments
    /// * `text` - Text to synthesize (non-empty; validated by the caller)
    /// * `voice` - Voice choice
    /// * `rate` - Speech rate (already clamped by the caller)
    ///
    /// # Returns
    /// Synthesis result with a non-empty audio payload
    async fn synthesize(
        &self,
        text: String,
        voice: VoiceChoice,
        rate: SpeechRate,
    ) -> Result<SynthesisResult, ApplicationError>;

    /// Check if the synthesis engine is available
    async fn is_available(&self) -> bool;

    /// List available voices for synthesis
    async fn list_voices(&self) -> Result<Vec<VoiceInfo>, ApplicationError>;

    /// Get the active engine identifier
    fn engine_name(&self) -> String;

    /// Whether the voice choice changes the produced audio
    fn supports_voice_selection(&self) -> bool;

    /// Whether the numeric rate is honored by the engine
    fn honors_numeric_rate(&self) -> bool;
}
