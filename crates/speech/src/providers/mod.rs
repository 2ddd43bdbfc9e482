//! Speech synthesis engine adapters
//!
//! Contains concrete implementations of the `TextToSpeech` trait.

pub mod espeak;
pub mod gtts;

use std::sync::Arc;

pub use espeak::EspeakProvider;
pub use gtts::GoogleTranslateProvider;

use crate::config::{SpeechConfig, TtsProvider};
use crate::error::SpeechError;
use crate::ports::TextToSpeech;

/// Build the configured synthesis engine
///
/// # Errors
///
/// Returns `SpeechError::Configuration` if the configuration is invalid.
pub fn create_provider(config: &SpeechConfig) -> Result<Arc<dyn TextToSpeech>, SpeechError> {
    match config.provider {
        TtsProvider::Gtts => Ok(Arc::new(GoogleTranslateProvider::new(config.clone())?)),
        TtsProvider::Espeak => Ok(Arc::new(EspeakProvider::new(config.clone())?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_builds_cloud_provider_by_default() {
        let provider = create_provider(&SpeechConfig::default()).unwrap();
        assert_eq!(provider.engine_name(), "google-translate-tts");
    }

    #[test]
    fn factory_builds_local_provider() {
        let config = SpeechConfig {
            provider: TtsProvider::Espeak,
            ..Default::default()
        };
        let provider = create_provider(&config).unwrap();
        assert_eq!(provider.engine_name(), "espeak-ng");
    }

    #[test]
    fn factory_rejects_invalid_config() {
        let config = SpeechConfig {
            timeout_ms: 0,
            ..Default::default()
        };
        assert!(matches!(
            create_provider(&config),
            Err(SpeechError::Configuration(_))
        ));
    }
}
