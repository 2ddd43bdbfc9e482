//! Port definition for speech synthesis
//!
//! Defines the trait that synthesis engine adapters must implement.

use async_trait::async_trait;
use domain::{SpeechRate, VoiceChoice};

use crate::error::SpeechError;
use crate::types::{AudioData, VoiceInfo};

/// Port for Text-to-Speech implementations
///
/// Each call to [`TextToSpeech::synthesize`] makes exactly one engine call:
/// there is no retry, no caching, and no partial result. Implementations must
/// reject empty text before contacting the engine and must never return an
/// empty payload as success.
///
/// # Example
///
/// ```ignore
/// use domain::{SpeechRate, VoiceChoice};
/// use speech::TextToSpeech;
///
/// async fn speak(tts: &impl TextToSpeech, text: &str) -> Result<Vec<u8>, speech::SpeechError> {
///     let audio = tts
///         .synthesize(text, VoiceChoice::Female, SpeechRate::default())
///         .await?;
///     Ok(audio.into_data())
/// }
/// ```
#[async_trait]
pub trait TextToSpeech: Send + Sync {
    /// Convert text to speech
    ///
    /// # Arguments
    ///
    /// * `text` - Text to synthesize (must be non-empty after trimming)
    /// * `voice` - Voice choice; engines that cannot select voices ignore it
    /// * `rate` - Requested rate; engines without a continuous rate coarsen it
    ///   to a speed class
    ///
    /// # Errors
    ///
    /// Returns `SpeechError` if the text is empty, too long, or the engine
    /// call fails.
    async fn synthesize(
        &self,
        text: &str,
        voice: VoiceChoice,
        rate: SpeechRate,
    ) -> Result<AudioData, SpeechError>;

    /// List available voices
    ///
    /// # Errors
    ///
    /// Returns `SpeechError` if listing fails.
    async fn list_voices(&self) -> Result<Vec<VoiceInfo>, SpeechError>;

    /// Check if the engine is available and ready
    async fn is_available(&self) -> bool;

    /// Get the engine identifier
    fn engine_name(&self) -> &str;

    /// Whether the voice choice changes the produced audio
    fn supports_voice_selection(&self) -> bool;

    /// Whether the numeric rate is passed through to the engine
    ///
    /// When false, the rate is coarsened to the normal/slow speed class.
    fn honors_numeric_rate(&self) -> bool;
}
