//! Session handlers
//!
//! The form's session state: text buffer, presets, clear action, and the
//! per-session speak operation.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use domain::{SamplePreset, Session, SessionId, SpeedClass, VoiceChoice};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

fn parse_session_id(id: &str) -> Result<SessionId, ApiError> {
    SessionId::parse(id).map_err(|_| ApiError::BadRequest(format!("Invalid session id: {id}")))
}

/// Start a new session
pub async fn create_session(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Session>), ApiError> {
    let session = state.session_service.create_session().await?;
    Ok((StatusCode::CREATED, Json(session)))
}

/// Fetch a session
pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Session>, ApiError> {
    let id = parse_session_id(&id)?;
    let session = state.session_service.get_session(id).await?;
    Ok(Json(session))
}

/// Delete a session
pub async fn delete_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_session_id(&id)?;
    state.session_service.delete_session(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Text update request body
#[derive(Debug, Deserialize)]
pub struct SetTextRequest {
    /// New buffer content
    pub text: String,
}

/// Replace the session's text buffer
#[instrument(skip(state, request), fields(text_len = request.text.len()))]
pub async fn set_text(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<SetTextRequest>,
) -> Result<Json<Session>, ApiError> {
    let id = parse_session_id(&id)?;
    let session = state.session_service.set_text(id, request.text).await?;
    Ok(Json(session))
}

/// Overwrite the buffer with a preset's fixed text
pub async fn apply_preset(
    State(state): State<AppState>,
    Path((id, preset)): Path<(String, String)>,
) -> Result<Json<Session>, ApiError> {
    let id = parse_session_id(&id)?;
    let preset: SamplePreset = preset
        .parse()
        .map_err(|e: domain::DomainError| ApiError::BadRequest(e.to_string()))?;
    let session = state.session_service.apply_preset(id, preset).await?;
    Ok(Json(session))
}

/// Reset the text buffer to empty (no synthesis is performed)
pub async fn clear_text(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Session>, ApiError> {
    let id = parse_session_id(&id)?;
    let session = state.session_service.clear_text(id).await?;
    Ok(Json(session))
}

/// Settings update request body
#[derive(Debug, Deserialize)]
pub struct UpdateSettingsRequest {
    /// New voice choice (unchanged if omitted)
    #[serde(default)]
    pub voice: Option<VoiceChoice>,
    /// New rate in words per minute; clamped to 100-300 (unchanged if omitted)
    #[serde(default)]
    pub rate: Option<u16>,
}

/// Update the session's voice and/or rate
pub async fn update_settings(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateSettingsRequest>,
) -> Result<Json<Session>, ApiError> {
    let id = parse_session_id(&id)?;
    let session = state
        .session_service
        .update_settings(id, request.voice, request.rate)
        .await?;
    Ok(Json(session))
}

/// Response for a session speak request
///
/// The audio is base64-encoded so the page can embed it in a data URI.
#[derive(Debug, Serialize)]
pub struct SpeakResponse {
    /// Base64-encoded audio payload
    pub audio_base64: String,
    /// MIME type of the payload
    pub mime_type: String,
    /// Engine that produced the audio
    pub engine: String,
    /// Effective (clamped) rate
    pub rate: u16,
    /// Coarse speed mode the rate mapped onto
    pub speed_class: SpeedClass,
    /// Payload size in bytes
    pub size_bytes: usize,
}

/// Synthesize the session's current buffer with its current settings
#[instrument(skip(state), fields(session_id = %id))]
pub async fn speak(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SpeakResponse>, ApiError> {
    let id = parse_session_id(&id)?;
    let session = state.session_service.get_session(id).await?;

    let spoken = state
        .speech_service
        .request_speech(&session.text, session.voice, session.rate.value())
        .await?;

    Ok(Json(SpeakResponse {
        audio_base64: BASE64.encode(&spoken.audio_data),
        mime_type: spoken.mime_type,
        engine: spoken.engine,
        rate: spoken.rate.value(),
        speed_class: spoken.speed_class,
        size_bytes: spoken.audio_data.len(),
    }))
}
