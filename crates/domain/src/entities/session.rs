//! Session entity - the form state for one user session
//!
//! Holds the text buffer and the two ambient settings (voice choice, speech
//! rate) between interactions. Sessions have no identity beyond the running
//! process and are never persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{SamplePreset, SessionId, SpeechRate, VoiceChoice};

/// Transient form state scoped to a single user session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Unique session identifier
    pub id: SessionId,
    /// Current text buffer
    pub text: String,
    /// Selected voice
    pub voice: VoiceChoice,
    /// Selected speech rate
    pub rate: SpeechRate,
    /// When the session started
    pub created_at: DateTime<Utc>,
    /// When the session was last updated
    pub updated_at: DateTime<Utc>,
}

impl Session {
    /// Create a new session with an empty buffer and default settings
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: SessionId::new(),
            text: String::new(),
            voice: VoiceChoice::default(),
            rate: SpeechRate::default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the text buffer
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.touch();
    }

    /// Reset the text buffer to empty
    pub fn clear_text(&mut self) {
        self.text.clear();
        self.touch();
    }

    /// Overwrite the buffer with a preset's fixed text
    pub fn apply_preset(&mut self, preset: SamplePreset) {
        self.text = preset.text().to_string();
        self.touch();
    }

    /// Change the voice selection
    pub fn set_voice(&mut self, voice: VoiceChoice) {
        self.voice = voice;
        self.touch();
    }

    /// Change the speech rate (already validated/clamped by the caller)
    pub fn set_rate(&mut self, rate: SpeechRate) {
        self.rate = rate;
        self.touch();
    }

    /// Whether the buffer contains anything speakable
    #[must_use]
    pub fn has_speakable_text(&self) -> bool {
        !self.text.trim().is_empty()
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_has_defaults() {
        let session = Session::new();
        assert!(session.text.is_empty());
        assert_eq!(session.voice, VoiceChoice::Female);
        assert_eq!(session.rate.value(), 200);
        assert!(!session.has_speakable_text());
    }

    #[test]
    fn set_text_replaces_buffer() {
        let mut session = Session::new();
        session.set_text("Hello");
        assert_eq!(session.text, "Hello");
        assert!(session.has_speakable_text());
    }

    #[test]
    fn clear_text_empties_buffer() {
        let mut session = Session::new();
        session.set_text("Something");
        session.clear_text();
        assert!(session.text.is_empty());
        assert!(!session.has_speakable_text());
    }

    #[test]
    fn apply_preset_overwrites_prior_content() {
        let mut session = Session::new();
        session.set_text("old content");
        session.apply_preset(SamplePreset::Hello);
        assert_eq!(session.text, SamplePreset::Hello.text());

        session.apply_preset(SamplePreset::Lorem);
        assert_eq!(session.text, SamplePreset::Lorem.text());
    }

    #[test]
    fn whitespace_only_text_is_not_speakable() {
        let mut session = Session::new();
        session.set_text("   \n\t  ");
        assert!(!session.has_speakable_text());
    }

    #[test]
    fn settings_can_be_changed() {
        let mut session = Session::new();
        session.set_voice(VoiceChoice::Male);
        session.set_rate(SpeechRate::clamped(120));
        assert_eq!(session.voice, VoiceChoice::Male);
        assert_eq!(session.rate.value(), 120);
    }

    #[test]
    fn mutations_bump_updated_at() {
        let mut session = Session::new();
        let before = session.updated_at;
        session.set_text("tick");
        assert!(session.updated_at >= before);
    }

    #[test]
    fn serialization_round_trip() {
        let mut session = Session::new();
        session.set_text("round trip");
        let json = serde_json::to_string(&session).unwrap();
        let parsed: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.id, session.id);
        assert_eq!(parsed.text, "round trip");
        assert_eq!(parsed.rate, session.rate);
    }
}
