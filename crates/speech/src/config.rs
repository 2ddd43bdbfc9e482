//! Configuration for speech synthesis

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Configuration for the speech synthesis engines
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechConfig {
    /// Synthesis engine to use
    #[serde(default)]
    pub provider: TtsProvider,

    /// Language tag passed to the engine (ISO 639-1, e.g. "en")
    #[serde(default = "default_language")]
    pub language: String,

    /// Base URL of the cloud TTS endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Request timeout in milliseconds (cloud engine)
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Maximum accepted text length in characters
    #[serde(default = "default_max_text_len")]
    pub max_text_len: usize,

    /// Local engine settings
    #[serde(default)]
    pub espeak: EspeakConfig,
}

/// Synthesis engine selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TtsProvider {
    /// Google Translate TTS (cloud)
    #[default]
    Gtts,
    /// espeak-ng (local)
    Espeak,
}

/// Configuration for the local espeak-ng engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EspeakConfig {
    /// Path to the espeak-ng executable
    #[serde(default = "default_espeak_executable")]
    pub executable_path: PathBuf,

    /// Voice variant used for the female choice
    #[serde(default = "default_female_voice")]
    pub female_voice: String,

    /// Voice variant used for the male choice
    #[serde(default = "default_male_voice")]
    pub male_voice: String,

    /// Output amplitude (0-200)
    #[serde(default = "default_amplitude")]
    pub amplitude: u8,
}

fn default_language() -> String {
    "en".to_string()
}

fn default_endpoint() -> String {
    "https://translate.google.com".to_string()
}

const fn default_timeout_ms() -> u64 {
    30000 // 30 seconds
}

const fn default_max_text_len() -> usize {
    4096
}

fn default_espeak_executable() -> PathBuf {
    PathBuf::from("espeak-ng")
}

fn default_female_voice() -> String {
    "en+f3".to_string()
}

fn default_male_voice() -> String {
    "en+m3".to_string()
}

const fn default_amplitude() -> u8 {
    100
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            provider: TtsProvider::default(),
            language: default_language(),
            endpoint: default_endpoint(),
            timeout_ms: default_timeout_ms(),
            max_text_len: default_max_text_len(),
            espeak: EspeakConfig::default(),
        }
    }
}

impl Default for EspeakConfig {
    fn default() -> Self {
        Self {
            executable_path: default_espeak_executable(),
            female_voice: default_female_voice(),
            male_voice: default_male_voice(),
            amplitude: default_amplitude(),
        }
    }
}

impl SpeechConfig {
    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error message if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.language.trim().is_empty() {
            return Err("Language must not be empty".to_string());
        }

        if self.timeout_ms == 0 {
            return Err("Timeout must be greater than 0".to_string());
        }

        if self.max_text_len == 0 {
            return Err("Max text length must be greater than 0".to_string());
        }

        if self.provider == TtsProvider::Gtts && self.endpoint.trim().is_empty() {
            return Err("Endpoint is required for the cloud engine".to_string());
        }

        if self.provider == TtsProvider::Espeak {
            if self.espeak.female_voice.trim().is_empty()
                || self.espeak.male_voice.trim().is_empty()
            {
                return Err("espeak voice variants must not be empty".to_string());
            }
            if self.espeak.amplitude > 200 {
                return Err(format!(
                    "espeak amplitude must be 0-200, got {}",
                    self.espeak.amplitude
                ));
            }
        }

        Ok(())
    }
}
