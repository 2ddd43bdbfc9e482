//! espeak-ng local Text-to-Speech provider
//!
//! Implements `TextToSpeech` by driving the espeak-ng CLI, the speech engine
//! shipped with most Linux distributions.
//!
//! Unlike the cloud engine, espeak-ng takes the numeric rate directly (`-s`,
//! words per minute) and selects a voice variant per gender choice (`-v`),
//! so both form controls change the produced audio.
//!
//! # Prerequisites
//!
//! - espeak-ng must be installed and available in PATH (or configured via
//!   `espeak.executable_path`)
//!
//! ```bash
//! # Debian/Ubuntu/Raspberry Pi OS
//! sudo apt install espeak-ng
//! ```

use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use domain::{SpeechRate, VoiceChoice};
use tempfile::NamedTempFile;
use tokio::process::Command;
use tracing::{debug, error, instrument, warn};

use crate::config::SpeechConfig;
use crate::error::SpeechError;
use crate::ports::TextToSpeech;
use crate::types::{AudioData, AudioFormat, VoiceInfo};

/// Local TTS provider using espeak-ng
#[derive(Debug, Clone)]
pub struct EspeakProvider {
    config: SpeechConfig,
}

impl EspeakProvider {
    /// Create a new espeak-ng provider
    ///
    /// # Errors
    ///
    /// Returns `SpeechError::Configuration` if the configuration is invalid.
    pub fn new(config: SpeechConfig) -> Result<Self, SpeechError> {
        config.validate().map_err(SpeechError::Configuration)?;
        Ok(Self { config })
    }

    /// Get the espeak-ng executable path
    fn executable(&self) -> &Path {
        &self.config.espeak.executable_path
    }

    /// Voice variant for a gender choice
    fn voice_for(&self, choice: VoiceChoice) -> &str {
        match choice {
            VoiceChoice::Female => &self.config.espeak.female_voice,
            VoiceChoice::Male => &self.config.espeak.male_voice,
        }
    }

    /// Run espeak-ng to synthesize speech into a WAV payload
    #[instrument(skip(self, text), fields(voice = %voice, rate = rate.value(), text_len = text.len()))]
    async fn run_espeak(
        &self,
        text: &str,
        voice: &str,
        rate: SpeechRate,
    ) -> Result<Vec<u8>, SpeechError> {
        let output_file = NamedTempFile::with_suffix(".wav").map_err(|e| {
            SpeechError::SynthesisFailed(format!("Failed to create temp file: {e}"))
        })?;

        let mut cmd = Command::new(self.executable());

        cmd.arg("-v")
            .arg(voice)
            .arg("-s")
            .arg(rate.value().to_string())
            .arg("-a")
            .arg(self.config.espeak.amplitude.to_string())
            .arg("-w")
            .arg(output_file.path())
            .arg("--stdin")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        debug!("Running espeak-ng: {:?}", cmd);

        let mut child = cmd.spawn().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SpeechError::NotAvailable(format!(
                    "espeak-ng not found at '{}'. Please install espeak-ng.",
                    self.executable().display()
                ))
            } else {
                SpeechError::SynthesisFailed(format!("Failed to run espeak-ng: {e}"))
            }
        })?;

        // Write text to stdin; dropping the handle closes it
        if let Some(mut stdin) = child.stdin.take() {
            use tokio::io::AsyncWriteExt;
            stdin.write_all(text.as_bytes()).await.map_err(|e| {
                SpeechError::SynthesisFailed(format!("Failed to write to espeak-ng stdin: {e}"))
            })?;
        }

        let output = child.wait_with_output().await.map_err(|e| {
            SpeechError::SynthesisFailed(format!("Failed to wait for espeak-ng: {e}"))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            error!("espeak-ng failed: {}", stderr);
            return Err(SpeechError::SynthesisFailed(format!(
                "espeak-ng exited with status {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        let audio_data = tokio::fs::read(output_file.path()).await.map_err(|e| {
            SpeechError::SynthesisFailed(format!("Failed to read espeak-ng output: {e}"))
        })?;

        if audio_data.is_empty() {
            warn!("espeak-ng produced empty output");
            return Err(SpeechError::SynthesisFailed(
                "espeak-ng produced empty output".to_string(),
            ));
        }

        Ok(audio_data)
    }
}

#[async_trait]
impl TextToSpeech for EspeakProvider {
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

        let voice_id = self.voice_for(voice).to_string();
        debug!("Synthesizing {} chars with espeak-ng", text.len());

        let wav_data = self.run_espeak(text, &voice_id, rate).await?;

        Ok(AudioData::new(wav_data, AudioFormat::Wav))
    }

    async fn list_voices(&self) -> Result<Vec<VoiceInfo>, SpeechError> {
        let language = self.config.language.clone();

        let mut female = VoiceInfo::new(self.config.espeak.female_voice.clone(), "Female")
            .with_description("espeak-ng female variant")
            .with_choice(VoiceChoice::Female);
        female.languages = vec![language.clone()];

        let mut male = VoiceInfo::new(self.config.espeak.male_voice.clone(), "Male")
            .with_description("espeak-ng male variant")
            .with_choice(VoiceChoice::Male);
        male.languages = vec![language];

        Ok(vec![female, male])
    }

    async fn is_available(&self) -> bool {
        let available = self.executable().exists() || {
            // Try to find it in PATH
            Command::new(self.executable())
                .arg("--version")
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .status()
                .await
                .map(|s| s.success())
                .unwrap_or(false)
        };

        debug!("espeak-ng availability: {}", available);
        available
    }

    fn engine_name(&self) -> &str {
        "espeak-ng"
    }

    fn supports_voice_selection(&self) -> bool {
        true
    }

    fn honors_numeric_rate(&self) -> bool {
        true
    }
}
