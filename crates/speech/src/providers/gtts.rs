//! Google Translate TTS provider
//!
//! Implements `TextToSpeech` against the public Google Translate speech
//! endpoint, the same engine the gTTS ecosystem wraps.
//!
//! The engine accepts a language tag and exactly two speed modes, so the
//! numeric rate is coarsened to normal/slow before the request is made. It
//! offers no voice selection: the form's voice choice does not change the
//! produced audio.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use domain::{SpeechRate, SpeedClass, VoiceChoice};
use reqwest::Client;
use tracing::{debug, instrument, warn};

use crate::config::SpeechConfig;
use crate::error::SpeechError;
use crate::ports::TextToSpeech;
use crate::types::{AudioData, AudioFormat, VoiceInfo};

/// Wire value for the reduced speed mode
const SLOW_SPEED_PARAM: &str = "0.24";

/// Cloud TTS provider backed by the Google Translate speech endpoint
#[derive(Debug, Clone)]
pub struct GoogleTranslateProvider {
    client: Client,
    config: SpeechConfig,
}

impl GoogleTranslateProvider {
    /// Create a new cloud provider
    ///
    /// # Errors
    ///
    /// Returns `SpeechError::Configuration` if the configuration is invalid.
    pub fn new(config: SpeechConfig) -> Result<Self, SpeechError> {
        config.validate().map_err(SpeechError::Configuration)?;

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| {
                SpeechError::Configuration(format!("Failed to create HTTP client: {e}"))
            })?;

        Ok(Self { client, config })
    }

    /// Build the synthesis endpoint URL
    fn tts_url(&self) -> String {
        format!("{}/translate_tts", self.config.endpoint.trim_end_matches('/'))
    }
}

#[async_trait]
impl TextToSpeech for GoogleTranslateProvider {
    #[instrument(skip(self, text), fields(text_len = text.len(), rate = rate.value()))]
    async fn synthesize(
        &self,
        text: &str,
        voice: VoiceChoice,
        rate: SpeechRate,
    ) -> Result<AudioData, SpeechError> {
        if text.trim().is_empty() {
            return Err(SpeechError::SynthesisFailed(
                "Text cannot be empty".to_string(),
            ));
        }

        if text.len() > self.config.max_text_len {
            return Err(SpeechError::SynthesisFailed(format!(
                "Text too long: {} characters exceeds {} limit",
                text.len(),
                self.config.max_text_len
            )));
        }

        // The engine cannot select voices; the choice is carried only so the
        // caller sees a uniform signature.
        let _ = voice;

        let speed_class = rate.speed_class();
        debug!(%speed_class, "Synthesizing speech with Google Translate TTS");

        let mut query: Vec<(&str, &str)> = vec![
            ("ie", "UTF-8"),
            ("client", "tw-ob"),
            ("tl", self.config.language.as_str()),
            ("q", text),
        ];
        if speed_class == SpeedClass::Slow {
            query.push(("ttsspeed", SLOW_SPEED_PARAM));
        }

        let response = self
            .client
            .get(self.tts_url())
            .query(&query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(SpeechError::RequestFailed(format!(
                "HTTP {status}: {error_body}"
            )));
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();

        if !content_type.starts_with("audio/") {
            return Err(SpeechError::InvalidResponse(format!(
                "Expected an audio payload, got content type '{content_type}'"
            )));
        }

        let audio_bytes: Bytes = response
            .bytes()
            .await
            .map_err(|e| SpeechError::InvalidResponse(format!("Failed to read audio: {e}")))?;

        if audio_bytes.is_empty() {
            return Err(SpeechError::InvalidResponse(
                "Engine returned an empty audio payload".to_string(),
            ));
        }

        debug!(audio_size = audio_bytes.len(), "Speech synthesis complete");

        let format = AudioFormat::from_mime_type(&content_type).unwrap_or(AudioFormat::Mp3);
        Ok(AudioData::new(audio_bytes.to_vec(), format))
    }

    async fn list_voices(&self) -> Result<Vec<VoiceInfo>, SpeechError> {
        // The engine has a single fixed voice per language.
        Ok(vec![
            VoiceInfo::new("default", "Standard")
                .with_description("Engine default voice; the voice choice is a label only"),
        ])
    }

    async fn is_available(&self) -> bool {
        match self
            .client
            .get(self.config.endpoint.as_str())
            .timeout(Duration::from_secs(5))
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                warn!("Cloud TTS availability check failed: {}", e);
                false
            },
        }
    }

    fn engine_name(&self) -> &str {
        "google-translate-tts"
    }

    fn supports_voice_selection(&self) -> bool {
        false
    }

    fn honors_numeric_rate(&self) -> bool {
        false
    }
}
