//! Health check handlers

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Liveness check - is the server running?
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Readiness response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub engine: EngineStatus,
}

/// Status of the synthesis engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineStatus {
    pub healthy: bool,
    pub name: Option<String>,
}

/// Readiness check - can the server reach its synthesis engine?
pub async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<ReadinessResponse>) {
    let engine_healthy = state.speech_service.is_available().await;
    let name = if engine_healthy {
        Some(state.speech_service.engine_name())
    } else {
        None
    };

    let status_code = if engine_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status_code,
        Json(ReadinessResponse {
            ready: engine_healthy,
            engine: EngineStatus {
                healthy: engine_healthy,
                name,
            },
        }),
    )
}
