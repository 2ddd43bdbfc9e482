//! Speech adapter - Implements SpeechPort using the speech crate

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::{SpeechPort, SynthesisResult, VoiceInfo};
use async_trait::async_trait;
use domain::{SpeechRate, VoiceChoice};
use speech::{SpeechConfig, SpeechError, TextToSpeech, create_provider};
use tracing::instrument;

/// Adapter bridging the configured synthesis engine to the application port
pub struct TtsEngineAdapter {
    provider: Arc<dyn TextToSpeech>,
}

impl std::fmt::Debug for TtsEngineAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TtsEngineAdapter")
            .field("engine", &self.provider.engine_name())
            .finish()
    }
}

impl TtsEngineAdapter {
    /// Create a new adapter for the configured engine
    ///
    /// # Errors
    ///
    /// Returns an error if the provider fails to initialize.
    pub fn new(config: SpeechConfig) -> Result<Self, ApplicationError> {
        let provider = create_provider(&config)
            .map_err(|e: SpeechError| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self { provider })
    }

    /// Map speech errors to application errors
    fn map_error(err: SpeechError) -> ApplicationError {
        match err {
            SpeechError::Configuration(e) => ApplicationError::Configuration(e),
            SpeechError::ConnectionFailed(e) | SpeechError::RequestFailed(e) => {
                ApplicationError::ExternalService(e)
            },
            SpeechError::SynthesisFailed(e) => ApplicationError::Synthesis(e),
            SpeechError::InvalidResponse(e) => {
                ApplicationError::ExternalService(format!("Invalid response: {e}"))
            },
            SpeechError::Timeout(ms) => {
                ApplicationError::ExternalService(format!("Engine timeout after {ms}ms"))
            },
            SpeechError::NotAvailable(e) => {
                ApplicationError::ExternalService(format!("Engine not available: {e}"))
            },
        }
    }
}

#[async_trait]
impl SpeechPort for TtsEngineAdapter {
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    async fn synthesize(
        &self,
        text: String,
        voice: VoiceChoice,
        rate: SpeechRate,
    ) -> Result<SynthesisResult, ApplicationError> {
        let audio = self
            .provider
            .synthesize(&text, voice, rate)
            .await
            .map_err(Self::map_error)?;

        Ok(SynthesisResult {
            mime_type: audio.mime_type().to_string(),
            audio_data: audio.into_data(),
        })
    }

    async fn is_available(&self) -> bool {
        self.provider.is_available().await
    }

    async fn list_voices(&self) -> Result<Vec<VoiceInfo>, ApplicationError> {
        let voices = self
            .provider
            .list_voices()
            .await
            .map_err(Self::map_error)?;

        Ok(voices
            .into_iter()
            .map(|v| VoiceInfo {
                id: v.id,
                name: v.name,
                description: v.description,
                choice: v.choice,
            })
            .collect())
    }

    fn engine_name(&self) -> String {
        self.provider.engine_name().to_string()
    }

    fn supports_voice_selection(&self) -> bool {
        self.provider.supports_voice_selection()
    }

    fn honors_numeric_rate(&self) -> bool {
        self.provider.honors_numeric_rate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn adapter_against(mock_server: &MockServer) -> TtsEngineAdapter {
        let config = SpeechConfig {
            endpoint: mock_server.uri(),
            ..Default::default()
        };
        TtsEngineAdapter::new(config).unwrap()
    }

    #[tokio::test]
    async fn synthesize_returns_payload_and_mime_type() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/translate_tts"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_bytes(vec![0u8; 512])
                    .insert_header("content-type", "audio/mpeg"),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let adapter = adapter_against(&mock_server);

        let result = adapter
            .synthesize(
                "Hello".to_string(),
                VoiceChoice::Female,
                SpeechRate::default(),
            )
            .await
            .unwrap();

        assert_eq!(result.audio_data.len(), 512);
        assert_eq!(result.mime_type, "audio/mpeg");
    }

    #[tokio::test]
    async fn engine_failure_maps_to_external_service_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/translate_tts"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let adapter = adapter_against(&mock_server);

        let result = adapter
            .synthesize(
                "Hello".to_string(),
                VoiceChoice::Female,
                SpeechRate::default(),
            )
            .await;

        assert!(matches!(result, Err(ApplicationError::ExternalService(_))));
    }

    #[tokio::test]
    async fn empty_text_maps_to_synthesis_error() {
        let mock_server = MockServer::start().await;
        let adapter = adapter_against(&mock_server);

        let result = adapter
            .synthesize("".to_string(), VoiceChoice::Female, SpeechRate::default())
            .await;

        assert!(matches!(result, Err(ApplicationError::Synthesis(_))));
    }

    #[tokio::test]
    async fn capability_flags_reflect_the_cloud_engine() {
        let mock_server = MockServer::start().await;
        let adapter = adapter_against(&mock_server);

        assert_eq!(adapter.engine_name(), "google-translate-tts");
        assert!(!adapter.supports_voice_selection());
        assert!(!adapter.honors_numeric_rate());
    }

    #[tokio::test]
    async fn list_voices_converts_metadata() {
        let mock_server = MockServer::start().await;
        let adapter = adapter_against(&mock_server);

        let voices = adapter.list_voices().await.unwrap();
        assert_eq!(voices.len(), 1);
        assert_eq!(voices[0].id, "default");
    }

    #[test]
    fn new_fails_with_invalid_config() {
        let config = SpeechConfig {
            timeout_ms: 0,
            ..Default::default()
        };
        assert!(matches!(
            TtsEngineAdapter::new(config),
            Err(ApplicationError::Configuration(_))
        ));
    }

    #[test]
    fn adapter_has_debug() {
        let adapter = TtsEngineAdapter::new(SpeechConfig::default()).unwrap();
        let debug = format!("{adapter:?}");
        assert!(debug.contains("TtsEngineAdapter"));
    }
}
