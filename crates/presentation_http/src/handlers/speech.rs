//! Speech handlers
//!
//! The stateless synthesis endpoint and voice metadata.

use axum::{
    Json,
    extract::State,
    http::{HeaderName, header},
    response::{IntoResponse, Response},
};
use domain::{SpeechRate, VoiceChoice};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Response header carrying the engine identifier
pub static X_SPEECH_ENGINE: HeaderName = HeaderName::from_static("x-speech-engine");
/// Response header carrying the effective (clamped) rate
pub static X_SPEECH_RATE: HeaderName = HeaderName::from_static("x-speech-rate");

/// Synthesis request body
#[derive(Debug, Deserialize)]
pub struct SynthesizeRequest {
    /// Text to speak
    pub text: String,
    /// Voice choice (defaults to female)
    #[serde(default)]
    pub voice: VoiceChoice,
    /// Requested rate in words per minute; clamped to 100-300
    #[serde(default = "default_rate")]
    pub rate: u16,
}

const fn default_rate() -> u16 {
    SpeechRate::DEFAULT
}

/// Handle a stateless synthesis request
///
/// Returns the raw audio payload with its MIME type on success.
#[instrument(skip(state, request), fields(text_len = request.text.len()))]
pub async fn synthesize(
    State(state): State<AppState>,
    Json(request): Json<SynthesizeRequest>,
) -> Result<Response, ApiError> {
    let spoken = state
        .speech_service
        .request_speech(&request.text, request.voice, request.rate)
        .await?;

    let headers = [
        (header::CONTENT_TYPE.clone(), spoken.mime_type.clone()),
        (X_SPEECH_ENGINE.clone(), spoken.engine.clone()),
        (X_SPEECH_RATE.clone(), spoken.rate.value().to_string()),
    ];

    Ok((headers, spoken.audio_data).into_response())
}

/// Voice metadata response
#[derive(Debug, Serialize)]
pub struct VoicesResponse {
    /// Active engine identifier
    pub engine: String,
    /// Whether the voice choice changes the produced audio
    pub supports_voice_selection: bool,
    /// Whether the numeric rate is honored by the engine
    pub honors_numeric_rate: bool,
    /// Available voices
    pub voices: Vec<VoiceEntry>,
}

/// One voice in the metadata response
#[derive(Debug, Serialize)]
pub struct VoiceEntry {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub choice: Option<VoiceChoice>,
}

/// List the engine's voices and capability flags
pub async fn list_voices(
    State(state): State<AppState>,
) -> Result<Json<VoicesResponse>, ApiError> {
    let voices = state.speech_service.voices().await?;

    Ok(Json(VoicesResponse {
        engine: state.speech_service.engine_name(),
        supports_voice_selection: state.speech_service.supports_voice_selection(),
        honors_numeric_rate: state.speech_service.honors_numeric_rate(),
        voices: voices
            .into_iter()
            .map(|v| VoiceEntry {
                id: v.id,
                name: v.name,
                description: v.description,
                choice: v.choice,
            })
            .collect(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synthesize_request_deserialize_with_defaults() {
        let json = r#"{"text": "Hello"}"#;
        let request: SynthesizeRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.text, "Hello");
        assert_eq!(request.voice, VoiceChoice::Female);
        assert_eq!(request.rate, 200);
    }

    #[test]
    fn synthesize_request_deserialize_full() {
        let json = r#"{"text": "Hi", "voice": "male", "rate": 120}"#;
        let request: SynthesizeRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.voice, VoiceChoice::Male);
        assert_eq!(request.rate, 120);
    }

    #[test]
    fn synthesize_request_rejects_unknown_voice() {
        let json = r#"{"text": "Hi", "voice": "robot"}"#;
        let result: Result<SynthesizeRequest, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn voices_response_serialize() {
        let response = VoicesResponse {
            engine: "espeak-ng".to_string(),
            supports_voice_selection: true,
            honors_numeric_rate: true,
            voices: vec![VoiceEntry {
                id: "en+f3".to_string(),
                name: "Female".to_string(),
                description: None,
                choice: Some(VoiceChoice::Female),
            }],
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("espeak-ng"));
        assert!(json.contains("en+f3"));
        assert!(!json.contains("description"));
    }

    #[test]
    fn voice_entry_skips_empty_fields() {
        let entry = VoiceEntry {
            id: "default".to_string(),
            name: "Standard".to_string(),
            description: None,
            choice: None,
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert!(!json.contains("description"));
        assert!(!json.contains("choice"));
    }
}
