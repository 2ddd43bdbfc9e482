//! Types for speech synthesis
//!
//! Contains data structures for audio payloads and voice metadata.

use domain::VoiceChoice;
use serde::{Deserialize, Serialize};

/// Audio formats the engines produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioFormat {
    /// MP3 format (cloud engine output)
    Mp3,
    /// WAV format (local engine output)
    Wav,
}

impl AudioFormat {
    /// Get the MIME type for this audio format
    #[must_use]
    pub const fn mime_type(&self) -> &'static str {
        match self {
            Self::Mp3 => "audio/mpeg",
            Self::Wav => "audio/wav",
        }
    }

    /// Get the file extension for this audio format
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Mp3 => "mp3",
            Self::Wav => "wav",
        }
    }

    /// Parse audio format from MIME type
    #[must_use]
    pub fn from_mime_type(mime: &str) -> Option<Self> {
        let base_mime = mime.split(';').next().unwrap_or(mime).trim();

        match base_mime {
            "audio/mpeg" | "audio/mp3" => Some(Self::Mp3),
            "audio/wav" | "audio/x-wav" | "audio/wave" => Some(Self::Wav),
            _ => None,
        }
    }
}

/// Container for a synthesized audio payload
#[derive(Debug, Clone)]
pub struct AudioData {
    /// Raw audio bytes
    data: Vec<u8>,
    /// Audio format
    format: AudioFormat,
}

impl AudioData {
    /// Create new audio data
    #[must_use]
    pub const fn new(data: Vec<u8>, format: AudioFormat) -> Self {
        Self { data, format }
    }

    /// Get the raw audio bytes
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume and return the raw audio bytes
    #[must_use]
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Get the audio format
    #[must_use]
    pub const fn format(&self) -> AudioFormat {
        self.format
    }

    /// Get the size of the audio data in bytes
    #[must_use]
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }

    /// Check if the audio data is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the MIME type for this audio
    #[must_use]
    pub const fn mime_type(&self) -> &'static str {
        self.format.mime_type()
    }

    /// Generate a filename with the appropriate extension
    #[must_use]
    pub fn filename(&self, base: &str) -> String {
        format!("{}.{}", base, self.format.extension())
    }
}

/// Information about an available voice
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceInfo {
    /// Voice identifier
    pub id: String,
    /// Human-readable name
    pub name: String,
    /// Description of the voice
    pub description: Option<String>,
    /// Supported languages
    pub languages: Vec<String>,
    /// Which form choice this voice corresponds to (if any)
    pub choice: Option<VoiceChoice>,
}

impl VoiceInfo {
    /// Create a new voice info
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            languages: Vec::new(),
            choice: None,
        }
    }

    /// Set the description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the form choice this voice maps to
    #[must_use]
    pub const fn with_choice(mut self, choice: VoiceChoice) -> Self {
        self.choice = Some(choice);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod audio_format {
        use super::*;

        #[test]
        fn mime_types_are_correct() {
            assert_eq!(AudioFormat::Mp3.mime_type(), "audio/mpeg");
            assert_eq!(AudioFormat::Wav.mime_type(), "audio/wav");
        }

        #[test]
        fn extensions_are_correct() {
            assert_eq!(AudioFormat::Mp3.extension(), "mp3");
            assert_eq!(AudioFormat::Wav.extension(), "wav");
        }

        #[test]
        fn from_mime_type_simple() {
            assert_eq!(
                AudioFormat::from_mime_type("audio/mpeg"),
                Some(AudioFormat::Mp3)
            );
            assert_eq!(
                AudioFormat::from_mime_type("audio/mp3"),
                Some(AudioFormat::Mp3)
            );
            assert_eq!(
                AudioFormat::from_mime_type("audio/wav"),
                Some(AudioFormat::Wav)
            );
            assert_eq!(
                AudioFormat::from_mime_type("audio/x-wav"),
                Some(AudioFormat::Wav)
            );
        }

        #[test]
        fn from_mime_type_with_parameters() {
            assert_eq!(
                AudioFormat::from_mime_type("audio/mpeg; charset=binary"),
                Some(AudioFormat::Mp3)
            );
        }

        #[test]
        fn from_mime_type_unknown() {
            assert_eq!(AudioFormat::from_mime_type("audio/opus"), None);
            assert_eq!(AudioFormat::from_mime_type("text/html"), None);
        }

        #[test]
        fn serializes_lowercase() {
            assert_eq!(serde_json::to_string(&AudioFormat::Mp3).unwrap(), "\"mp3\"");
            assert_eq!(serde_json::to_string(&AudioFormat::Wav).unwrap(), "\"wav\"");
        }
    }

    mod audio_data {
        use super::*;

        #[test]
        fn new_creates_audio_data() {
            let data = vec![1, 2, 3, 4];
            let audio = AudioData::new(data.clone(), AudioFormat::Mp3);

            assert_eq!(audio.data(), &data);
            assert_eq!(audio.format(), AudioFormat::Mp3);
        }

        #[test]
        fn size_bytes_returns_data_length() {
            let audio = AudioData::new(vec![0; 1024], AudioFormat::Mp3);
            assert_eq!(audio.size_bytes(), 1024);
        }

        #[test]
        fn is_empty_reflects_data() {
            assert!(AudioData::new(vec![], AudioFormat::Mp3).is_empty());
            assert!(!AudioData::new(vec![1], AudioFormat::Mp3).is_empty());
        }

        #[test]
        fn into_data_consumes_and_returns_bytes() {
            let original = vec![1, 2, 3, 4, 5];
            let audio = AudioData::new(original.clone(), AudioFormat::Wav);
            assert_eq!(audio.into_data(), original);
        }

        #[test]
        fn filename_includes_extension() {
            let audio = AudioData::new(vec![], AudioFormat::Mp3);
            assert_eq!(audio.filename("speech"), "speech.mp3");

            let audio = AudioData::new(vec![], AudioFormat::Wav);
            assert_eq!(audio.filename("speech"), "speech.wav");
        }

        #[test]
        fn mime_type_delegates_to_format() {
            let audio = AudioData::new(vec![], AudioFormat::Wav);
            assert_eq!(audio.mime_type(), "audio/wav");
        }
    }

    mod voice_info {
        use super::*;

        #[test]
        fn new_creates_voice_info() {
            let voice = VoiceInfo::new("en+f3", "English female");
            assert_eq!(voice.id, "en+f3");
            assert_eq!(voice.name, "English female");
            assert!(voice.description.is_none());
            assert!(voice.languages.is_empty());
            assert!(voice.choice.is_none());
        }

        #[test]
        fn builders_set_fields() {
            let voice = VoiceInfo::new("en+m3", "English male")
                .with_description("Male variant")
                .with_choice(VoiceChoice::Male);
            assert_eq!(voice.description.as_deref(), Some("Male variant"));
            assert_eq!(voice.choice, Some(VoiceChoice::Male));
        }
    }
}
