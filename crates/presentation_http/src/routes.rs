//! Route definitions

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Form page
        .route("/", get(handlers::page::index))
        // Health and status endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        // Speech API (v1)
        .route("/v1/speech", post(handlers::speech::synthesize))
        .route("/v1/voices", get(handlers::speech::list_voices))
        // Session API (v1)
        .route("/v1/sessions", post(handlers::sessions::create_session))
        .route(
            "/v1/sessions/{id}",
            get(handlers::sessions::get_session).delete(handlers::sessions::delete_session),
        )
        .route("/v1/sessions/{id}/text", put(handlers::sessions::set_text))
        .route(
            "/v1/sessions/{id}/presets/{preset}",
            post(handlers::sessions::apply_preset),
        )
        .route(
            "/v1/sessions/{id}/clear",
            post(handlers::sessions::clear_text),
        )
        .route(
            "/v1/sessions/{id}/settings",
            put(handlers::sessions::update_settings),
        )
        .route("/v1/sessions/{id}/speak", post(handlers::sessions::speak))
        // Attach state
        .with_state(state)
}
