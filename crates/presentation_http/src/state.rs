//! Application state shared across handlers

use std::sync::Arc;

use application::{SessionService, SpeechRequestService};
use infrastructure::AppConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Speech request handling
    pub speech_service: Arc<SpeechRequestService>,
    /// Session bookkeeping
    pub session_service: Arc<SessionService>,
    /// Application configuration
    pub config: Arc<AppConfig>,
}
